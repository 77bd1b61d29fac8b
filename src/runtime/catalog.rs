use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    core::{
        data::{DEFAULT_VARIANT, TranslationEntry},
        variants::DEFAULT_SEPARATOR,
    },
    template::{
        Bindings, EvalError, Evaluator, PluralRule, PluralRules, TemplateSyntaxError, parse,
    },
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no translation for \"{key}\" in language \"{language}\"")]
    MissingKey { language: String, key: String },

    #[error("invalid template: {0}")]
    Syntax(#[from] TemplateSyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Entries of one language, by base key.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    entries: BTreeMap<String, TranslationEntry>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same key.
    pub fn insert(&mut self, entry: TranslationEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TranslationEntry> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = TranslationEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|entry| table.insert(entry));
        table
    }
}

/// Translation tables for all languages plus the rules to render them.
///
/// Built once and then only read; every render call takes the catalog
/// explicitly.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: BTreeMap<String, LanguageTable>,
    fallbacks: Vec<String>,
    plural_rules: PluralRules,
    separator: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
            fallbacks: Vec::new(),
            plural_rules: PluralRules::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, language: impl Into<String>, table: LanguageTable) -> Self {
        self.insert_table(language, table);
        self
    }

    pub fn insert_table(&mut self, language: impl Into<String>, table: LanguageTable) {
        self.tables.insert(language.into(), table);
    }

    /// Append a language to the fallback chain tried after the requested one.
    pub fn with_fallback(mut self, language: impl Into<String>) -> Self {
        self.fallbacks.push(language.into());
        self
    }

    pub fn with_plural_rules(mut self, rules: PluralRules) -> Self {
        self.plural_rules = rules;
        self
    }

    /// Separator used when naming a missing `key##variant` in errors.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Language codes with a table, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table(&self, language: &str) -> Option<&LanguageTable> {
        self.tables.get(language)
    }

    pub fn entry(&self, language: &str, key: &str) -> Option<&TranslationEntry> {
        self.tables.get(language)?.get(key)
    }

    pub fn plural_rule(&self, language: &str) -> PluralRule {
        self.plural_rules.rule_for(language)
    }

    /// Languages tried for a lookup in `language`, in order, without repeats.
    fn chain<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a str> {
        std::iter::once(language).chain(
            self.fallbacks
                .iter()
                .map(String::as_str)
                .filter(move |fallback| *fallback != language),
        )
    }

    /// Find the template for `key` and `variant` (default when `None`),
    /// following the fallback chain. Returns the language it was found in.
    pub fn lookup<'a>(
        &'a self,
        language: &'a str,
        key: &str,
        variant: Option<&str>,
    ) -> Option<(&'a str, &'a str)> {
        let tag = variant.unwrap_or(DEFAULT_VARIANT);
        self.chain(language).find_map(|candidate| {
            self.entry(candidate, key)
                .and_then(|entry| entry.variant(tag))
                .map(|template| (candidate, template))
        })
    }

    /// Render the template for `key` in `language` with the plural rule of the
    /// language the template was found in.
    pub fn render(
        &self,
        language: &str,
        key: &str,
        variant: Option<&str>,
        bindings: &Bindings,
    ) -> Result<String, RenderError> {
        let Some((found_in, template)) = self.lookup(language, key, variant) else {
            let key = match variant {
                Some(tag) if tag != DEFAULT_VARIANT => format!("{key}{}{tag}", self.separator),
                _ => key.to_string(),
            };
            return Err(RenderError::MissingKey {
                language: language.to_string(),
                key,
            });
        };
        render_template(template, bindings, self.plural_rule(found_in))
    }
}

/// Parse and evaluate a single template.
pub fn render_template(
    template: &str,
    bindings: &Bindings,
    rule: PluralRule,
) -> Result<String, RenderError> {
    let tree = parse(template)?;
    Ok(Evaluator::new(rule).evaluate(&tree, bindings)?)
}
