use locstr::core::{
    DEFAULT_SEPARATOR, ExtractError, SourceLanguage, SourceLocation, data::LiteralKind,
};
use pretty_assertions::assert_eq;

use crate::{GO_STRINGS, entries, extract_file, find, keys};

#[test]
fn test_go_fixture_keys_in_declaration_order() {
    let entries = entries(GO_STRINGS, SourceLanguage::Go, "strings.go");
    assert_eq!(
        keys(&entries),
        vec![
            "WelcomeMessage",
            "HelloUser",
            "XFilesFoundInYFolders",
            "John",
            "RawString",
            "Template",
        ]
    );
}

#[test]
fn test_go_fixture_table_label() {
    let extraction = extract_file(GO_STRINGS, SourceLanguage::Go, "strings.go");
    assert_eq!(extraction.tables.len(), 1);
    assert_eq!(extraction.tables[0].label.as_deref(), Some("en"));
}

#[test]
fn test_constant_key_and_unicode_escape() {
    let entries = entries(GO_STRINGS, SourceLanguage::Go, "strings.go");
    let welcome = find(&entries, "WelcomeMessage");

    assert_eq!(welcome.value(), Some("\u{DA} are welcome!"));
    // The "Localizable strings" comment is separated by a blank line
    assert_eq!(welcome.comment.as_deref(), Some("H1 Heading"));
    assert_eq!(welcome.source, SourceLocation::new("strings.go", 10, 3));
}

#[test]
fn test_multi_line_comment_block() {
    let entries = entries(GO_STRINGS, SourceLanguage::Go, "strings.go");
    assert_eq!(
        find(&entries, "HelloUser").comment.as_deref(),
        Some("{NAME} is the name of the user")
    );
    assert_eq!(
        find(&entries, "XFilesFoundInYFolders").comment.as_deref(),
        Some(
            "{X} is the number of files, {Y} is the number of folders,\n{COMMAND} in the ID of the command"
        )
    );
}

#[test]
fn test_variants_are_grouped_under_base_key() {
    let entries = entries(GO_STRINGS, SourceLanguage::Go, "strings.go");
    let john = find(&entries, "John");

    assert_eq!(john.value(), Some("John"));
    assert_eq!(john.variant("genitive"), Some("John's"));
    assert_eq!(john.variants.len(), 2);
    // Comment of the default variant is the entry comment
    assert_eq!(john.comment.as_deref(), Some("Male name"));
    assert_eq!(
        john.variant_comment("genitive"),
        Some("Male name, genitive case")
    );
    assert!(entries.iter().all(|entry| !entry.key.contains("##")));
}

#[test]
fn test_raw_strings_are_verbatim() {
    let entries = entries(GO_STRINGS, SourceLanguage::Go, "strings.go");
    assert_eq!(find(&entries, "RawString").value(), Some("foo \"bar\" baz"));
    assert_eq!(
        find(&entries, "Template").value(),
        Some("Line 1\n\"Line 2\"\nLine 3")
    );

    let extraction = extract_file(GO_STRINGS, SourceLanguage::Go, "strings.go");
    let kinds: Vec<LiteralKind> = extraction
        .declarations()
        .filter(|d| d.key == "RawString" || d.key == "Template")
        .map(|d| d.value.kind)
        .collect();
    assert_eq!(kinds, vec![LiteralKind::Raw, LiteralKind::Multiline]);
}

#[test]
fn test_raw_string_keeps_backslashes() {
    let src = "package x\n\nvar T = map[string]string{\n\t\"Path\": `C:\\temp\\new`,\n}\n";
    let entries = entries(src, SourceLanguage::Go, "raw.go");
    assert_eq!(find(&entries, "Path").value(), Some("C:\\temp\\new"));
}

#[test]
fn test_duplicate_key_in_one_table() {
    let src = "package x\n\nvar T = map[string]string{\n\t\"A\": \"one\",\n\t\"A\": \"two\",\n}\n";
    let extraction = extract_file(src, SourceLanguage::Go, "dup.go");

    assert_eq!(
        extraction.errors,
        vec![ExtractError::DuplicateKey {
            key: "A".to_string(),
            location: SourceLocation::new("dup.go", 5, 2),
            first: SourceLocation::new("dup.go", 4, 2),
        }]
    );
    // The first declaration is kept
    let values: Vec<&str> = extraction
        .declarations()
        .map(|d| d.value.decoded_text.as_str())
        .collect();
    assert_eq!(values, vec!["one"]);
    assert!(extraction.entries(DEFAULT_SEPARATOR).is_err());
}

#[test]
fn test_distinct_variants_are_not_duplicates() {
    let src = "package x\n\nvar T = map[string]string{\n\t\"A\": \"one\",\n\t\"A##short\": \"1\",\n\t\"A##long\": \"number one\",\n}\n";
    let entries = entries(src, SourceLanguage::Go, "variants.go");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].variant("short"), Some("1"));
    assert_eq!(entries[0].variant("long"), Some("number one"));
}

#[test]
fn test_unresolved_constant() {
    let src = "package x\n\nvar T = map[string]string{\n\tmissingKey: \"value\",\n\t\"B\": \"b\",\n}\n";
    let extraction = extract_file(src, SourceLanguage::Go, "consts.go");

    assert_eq!(
        extraction.errors,
        vec![ExtractError::UnresolvedConstant {
            name: "missingKey".to_string(),
            location: SourceLocation::new("consts.go", 4, 2),
        }]
    );
    let keys: Vec<&str> = extraction.declarations().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["B"]);
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extract_file(GO_STRINGS, SourceLanguage::Go, "strings.go");
    let second = extract_file(GO_STRINGS, SourceLanguage::Go, "strings.go");
    assert_eq!(first.tables, second.tables);
    assert_eq!(first.errors, second.errors);
}
