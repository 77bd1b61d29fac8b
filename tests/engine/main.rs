use locstr::core::{
    DEFAULT_SEPARATOR, FileExtraction, SourceLanguage, TranslationEntry, extract,
};

mod extract_go;
mod extract_js;
mod render;

const GO_STRINGS: &str = include_str!("../fixtures/go/strings.go");
const JS_STRINGS: &str = include_str!("../fixtures/js/strings.js");
const JS_ESCAPES: &str = include_str!("../fixtures/js/escapes.js");

pub fn extract_file(src: &str, language: SourceLanguage, file: &str) -> FileExtraction {
    extract(src, language, file)
}

/// Entries of a file that is expected to extract without errors, all table
/// labels together in label order.
pub fn entries(src: &str, language: SourceLanguage, file: &str) -> Vec<TranslationEntry> {
    extract_file(src, language, file)
        .entries(DEFAULT_SEPARATOR)
        .unwrap_or_else(|errors| panic!("unexpected extraction errors: {errors:?}"))
        .into_values()
        .flatten()
        .collect()
}

pub fn find<'a>(entries: &'a [TranslationEntry], key: &str) -> &'a TranslationEntry {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .unwrap_or_else(|| panic!("no entry for {key:?}"))
}

pub fn keys(entries: &[TranslationEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.key.as_str()).collect()
}
