//! Key variant resolution.
//!
//! A key may carry a variant tag after a separator: `John##genitive`. All
//! declarations sharing a base key are grouped into one [`TranslationEntry`].
//! Tags are opaque strings; the default variant has the empty tag.

use std::collections::HashMap;

use crate::core::{
    data::{DEFAULT_VARIANT, SourceLocation, TranslationEntry},
    error::ExtractError,
    extract::Declaration,
};

pub const DEFAULT_SEPARATOR: &str = "##";

/// Split a full key into base key and variant tag at the first separator.
pub fn split_key<'a>(key: &'a str, separator: &str) -> (&'a str, &'a str) {
    if separator.is_empty() {
        return (key, DEFAULT_VARIANT);
    }
    key.split_once(separator).unwrap_or((key, DEFAULT_VARIANT))
}

/// Accumulates declarations into entries in order of first appearance.
#[derive(Debug)]
pub struct VariantResolver {
    separator: String,
    entries: Vec<PendingEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
struct PendingEntry {
    entry: TranslationEntry,
    /// Where each variant was declared.
    origins: HashMap<String, SourceLocation>,
}

impl VariantResolver {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add one declaration. A repeated `(base, tag)` pair is rejected and the
    /// first declaration is kept.
    pub fn push(&mut self, declaration: Declaration) -> Result<(), ExtractError> {
        let (base, tag) = split_key(&declaration.key, &self.separator);
        let (base, tag) = (base.to_string(), tag.to_string());

        let slot = match self.index.get(&base) {
            Some(&slot) => slot,
            None => {
                self.index.insert(base.clone(), self.entries.len());
                self.entries.push(PendingEntry {
                    entry: TranslationEntry::new(base.clone(), declaration.location.clone()),
                    origins: HashMap::new(),
                });
                self.entries.len() - 1
            }
        };
        let pending = &mut self.entries[slot];

        if pending.entry.variants.contains_key(&tag) {
            let first = pending
                .origins
                .get(&tag)
                .cloned()
                .unwrap_or_else(|| pending.entry.source.clone());
            return Err(ExtractError::ConflictingVariant {
                key: base,
                tag,
                location: declaration.location,
                first,
            });
        }
        pending
            .entry
            .variants
            .insert(tag.clone(), declaration.value.decoded_text);

        if tag == DEFAULT_VARIANT {
            pending.entry.source = declaration.location.clone();
            pending.entry.comment = declaration.comment;
        } else if let Some(comment) = declaration.comment {
            pending.entry.variant_comments.insert(tag.clone(), comment);
        }
        pending.origins.insert(tag, declaration.location);
        Ok(())
    }

    /// Finished entries in order of first appearance.
    ///
    /// An entry is only complete with a default variant. Base keys declared
    /// with tagged variants only are left out and reported at their first
    /// declaration.
    pub fn finish(self) -> (Vec<TranslationEntry>, Vec<ExtractError>) {
        let mut errors = Vec::new();
        let entries = self
            .entries
            .into_iter()
            .filter_map(|pending| {
                let entry = pending.entry;
                if entry.value().is_some() {
                    return Some(entry);
                }
                errors.push(ExtractError::MissingDefaultVariant {
                    key: entry.key,
                    location: entry.source,
                });
                None
            })
            .collect();
        (entries, errors)
    }
}

/// Group declarations into entries, collecting conflicts and base keys
/// without a default variant.
pub fn resolve(
    declarations: impl IntoIterator<Item = Declaration>,
    separator: &str,
) -> (Vec<TranslationEntry>, Vec<ExtractError>) {
    let mut resolver = VariantResolver::new(separator);
    let mut errors: Vec<ExtractError> = declarations
        .into_iter()
        .filter_map(|declaration| resolver.push(declaration).err())
        .collect();
    let (entries, incomplete) = resolver.finish();
    errors.extend(incomplete);
    (entries, errors)
}
