//! Helpers shared by the lint rules.

use crate::{
    core::data::{DEFAULT_VARIANT, TranslationEntry},
    template::{TemplateNode, TemplateSyntaxError, parse},
};

/// Key as written in source: `key` for the default variant, `key##tag` otherwise.
pub fn full_key(key: &str, tag: &str, separator: &str) -> String {
    if tag == DEFAULT_VARIANT {
        key.to_string()
    } else {
        format!("{key}{separator}{tag}")
    }
}

/// Parse every variant of an entry, in tag order.
pub fn parsed_variants(
    entry: &TranslationEntry,
) -> impl Iterator<Item = (&str, Result<TemplateNode, TemplateSyntaxError>)> {
    entry
        .variants
        .iter()
        .map(|(tag, value)| (tag.as_str(), parse(value)))
}
