//! Plural rules: which branch of a `{X_PLURAL:...}` placeholder a quantity selects.
//!
//! Branches are positional. Each built-in rule has an ordered list of
//! categories, and the branch index is the position of the quantity's
//! category in that list: English is `one|other`, Russian `one|few|many`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRule {
    /// No plural forms (Chinese, Japanese, Korean, ...): `other`.
    Invariant,
    /// `one|other`, one for 1.
    #[default]
    English,
    /// `one|other`, one for 0 and 1.
    French,
    /// `one|few|many` (East Slavic).
    Russian,
    /// `one|few|many`, one only for 1.
    Polish,
    /// `one|few|other`, few for 2 to 4.
    Czech,
    /// `zero|one|two|few|many|other`.
    Arabic,
    /// Maps the absolute quantity straight to a branch index.
    #[serde(skip)]
    Custom(fn(u64) -> usize),
}

impl PluralRule {
    /// Category of a quantity. Negative quantities use their absolute value.
    ///
    /// Returns `None` for [`PluralRule::Custom`], which has no categories.
    pub fn categorize(&self, count: i64) -> Option<PluralCategory> {
        use PluralCategory::*;

        let n = count.unsigned_abs();
        let (mod10, mod100) = (n % 10, n % 100);
        let category = match self {
            PluralRule::Invariant => Other,
            PluralRule::English => {
                if n == 1 {
                    One
                } else {
                    Other
                }
            }
            PluralRule::French => {
                if n <= 1 {
                    One
                } else {
                    Other
                }
            }
            PluralRule::Russian => {
                if mod10 == 1 && mod100 != 11 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    Few
                } else {
                    Many
                }
            }
            PluralRule::Czech => match n {
                1 => One,
                2..=4 => Few,
                _ => Other,
            },
            PluralRule::Arabic => match (n, mod100) {
                (0, _) => Zero,
                (1, _) => One,
                (2, _) => Two,
                (_, 3..=10) => Few,
                (_, 11..=99) => Many,
                _ => Other,
            },
            PluralRule::Custom(_) => return None,
        };
        Some(category)
    }

    /// Categories in branch order.
    pub fn categories(&self) -> &'static [PluralCategory] {
        use PluralCategory::*;

        match self {
            PluralRule::Invariant => &[Other],
            PluralRule::English | PluralRule::French => &[One, Other],
            PluralRule::Russian | PluralRule::Polish => &[One, Few, Many],
            PluralRule::Czech => &[One, Few, Other],
            PluralRule::Arabic => &[Zero, One, Two, Few, Many, Other],
            PluralRule::Custom(_) => &[],
        }
    }

    /// Branch position selected by a quantity, before clamping to the
    /// number of branches a template actually has.
    pub fn branch_index(&self, count: i64) -> usize {
        match self {
            PluralRule::Custom(select) => select(count.unsigned_abs()),
            rule => rule
                .categorize(count)
                .and_then(|category| rule.categories().iter().position(|&c| c == category))
                .unwrap_or(0),
        }
    }

    /// Built-in rule for a language code such as `ru` or `pt-BR`.
    pub fn for_language(code: &str) -> Self {
        match primary_subtag(&normalize_code(code)) {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" | "lo" | "my" | "km" => {
                PluralRule::Invariant
            }
            "fr" | "pt" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::Russian,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            "ar" => PluralRule::Arabic,
            _ => PluralRule::English,
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase().replace('_', "-")
}

fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Plural rules per language, with explicit overrides on top of the built-in table.
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    overrides: HashMap<String, PluralRule>,
}

impl PluralRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, language: &str, rule: PluralRule) -> Self {
        self.insert(language, rule);
        self
    }

    pub fn insert(&mut self, language: &str, rule: PluralRule) {
        self.overrides.insert(normalize_code(language), rule);
    }

    /// Rule for a language: an override for the full code, then for the
    /// primary subtag, then the built-in table.
    pub fn rule_for(&self, language: &str) -> PluralRule {
        let code = normalize_code(language);
        self.overrides
            .get(&code)
            .or_else(|| self.overrides.get(primary_subtag(&code)))
            .copied()
            .unwrap_or_else(|| PluralRule::for_language(&code))
    }
}
