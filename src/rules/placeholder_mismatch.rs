//! Placeholder mismatch rule.
//!
//! Compares the placeholder names of every translated variant with the same
//! key and variant in the default language. A translation that drops `{N}`
//! or introduces `{COUNT}` renders wrong or fails at runtime.
//!
//! Values that do not parse are left to the template syntax rule.

use std::collections::{BTreeSet, HashMap};

use crate::{
    core::{context::ExtractionRun, data::TranslationEntry},
    issues::PlaceholderMismatchIssue,
    rules::helpers::{full_key, parsed_variants},
    template::parse,
};

pub fn check_placeholder_mismatch_issues(
    run: &ExtractionRun,
    reference_language: &str,
    separator: &str,
) -> Vec<PlaceholderMismatchIssue> {
    let Some(reference) = run.tables.get(reference_language) else {
        return Vec::new();
    };
    let reference: HashMap<&str, &TranslationEntry> = reference
        .iter()
        .map(|entry| (entry.key.as_str(), entry))
        .collect();

    let mut issues = Vec::new();
    for (language, entries) in &run.tables {
        if language == reference_language {
            continue;
        }
        for entry in entries {
            let Some(reference_entry) = reference.get(entry.key.as_str()) else {
                continue;
            };
            for (tag, parsed) in parsed_variants(entry) {
                let Ok(translated) = parsed else {
                    continue;
                };
                let Some(Ok(expected)) = reference_entry.variant(tag).map(parse) else {
                    continue;
                };

                let expected_names = expected.placeholder_names();
                let translated_names = translated.placeholder_names();
                let missing = difference(&expected_names, &translated_names);
                let unexpected = difference(&translated_names, &expected_names);
                if missing.is_empty() && unexpected.is_empty() {
                    continue;
                }

                issues.push(PlaceholderMismatchIssue {
                    context: run.source_context(&entry.source),
                    key: full_key(&entry.key, tag, separator),
                    language: language.clone(),
                    reference_language: reference_language.to_string(),
                    missing,
                    unexpected,
                });
            }
        }
    }
    issues
}

fn difference(left: &BTreeSet<&str>, right: &BTreeSet<&str>) -> Vec<String> {
    left.difference(right).map(|name| name.to_string()).collect()
}
