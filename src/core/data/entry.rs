use std::collections::BTreeMap;

use serde::Serialize;

use super::SourceLocation;

/// Variant tag used for keys declared without a variant suffix.
pub const DEFAULT_VARIANT: &str = "";

/// A translatable string with all of its contextual variants.
///
/// Created by the variant resolver from extracted declarations. A declaration
/// `"John": "John"` lands in the default variant, `"John##genitive": "John's"`
/// in the `genitive` variant of the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// Base key, without any variant suffix.
    pub key: String,
    /// Variant tag to template string. The default variant uses [`DEFAULT_VARIANT`].
    pub variants: BTreeMap<String, String>,
    /// Translator comment attached to the default variant's declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Comments attached to tagged variants' own declarations.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variant_comments: BTreeMap<String, String>,
    /// Where the entry was declared.
    pub source: SourceLocation,
}

impl TranslationEntry {
    pub fn new(key: impl Into<String>, source: SourceLocation) -> Self {
        Self {
            key: key.into(),
            variants: BTreeMap::new(),
            comment: None,
            variant_comments: BTreeMap::new(),
            source,
        }
    }

    /// Builder-style helper mostly useful for tests and hand-built catalogs.
    pub fn with_variant(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants.insert(tag.into(), value.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The default variant's template.
    pub fn value(&self) -> Option<&str> {
        self.variant(DEFAULT_VARIANT)
    }

    pub fn variant(&self, tag: &str) -> Option<&str> {
        self.variants.get(tag).map(String::as_str)
    }

    /// Comment for one variant: its own, else the entry comment.
    pub fn variant_comment(&self, tag: &str) -> Option<&str> {
        self.variant_comments
            .get(tag)
            .map(String::as_str)
            .or(self.comment.as_deref())
    }

    /// Translator hint: the key itself unless it repeats the default value,
    /// followed by the comment.
    pub fn hint(&self) -> Option<String> {
        let key_hint = (self.value() != Some(self.key.as_str())).then_some(self.key.as_str());
        let parts: Vec<&str> = key_hint
            .into_iter()
            .chain(self.comment.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }
}
