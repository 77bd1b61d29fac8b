//! Template syntax rule.
//!
//! Parses every variant of every extracted entry and reports values that
//! would fail at render time.

use crate::{
    core::context::ExtractionRun,
    issues::TemplateSyntaxIssue,
    rules::helpers::{full_key, parsed_variants},
};

pub fn check_template_syntax_issues(
    run: &ExtractionRun,
    separator: &str,
) -> Vec<TemplateSyntaxIssue> {
    run.tables
        .values()
        .flatten()
        .flat_map(|entry| {
            parsed_variants(entry).filter_map(move |(tag, parsed)| {
                parsed.err().map(|error| TemplateSyntaxIssue {
                    context: run.source_context(&entry.source),
                    key: full_key(&entry.key, tag, separator),
                    error,
                })
            })
        })
        .collect()
}
