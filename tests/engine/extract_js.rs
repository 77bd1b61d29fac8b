use locstr::core::{ExtractError, MalformedReason, SourceLanguage, SourceLocation};
use pretty_assertions::assert_eq;

use crate::{JS_ESCAPES, JS_STRINGS, entries, extract_file, find, keys};

#[test]
fn test_js_fixture_skips_single_quoted_literals() {
    let entries = entries(JS_STRINGS, SourceLanguage::Js, "strings.js");
    assert_eq!(
        keys(&entries),
        vec!["key1", "key2", "key3", "key4", "value1", "key5"]
    );

    let extraction = extract_file(JS_STRINGS, SourceLanguage::Js, "strings.js");
    assert_eq!(extraction.tables.len(), 1);
    assert_eq!(extraction.tables[0].label, None);
}

#[test]
fn test_js_fixture_values() {
    let entries = entries(JS_STRINGS, SourceLanguage::Js, "strings.js");
    let values: Vec<(&str, &str)> = entries
        .iter()
        .map(|entry| (entry.key.as_str(), entry.value().unwrap_or_default()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("key1", "value1"),
            ("key2", "value\\2"),
            ("key3", "value \"3\""),
            ("key4", "value\\\"4\""),
            ("value1", "value1"),
            ("key5", "value1"),
        ]
    );
}

#[test]
fn test_js_fixture_comments_and_hints() {
    let entries = entries(JS_STRINGS, SourceLanguage::Js, "strings.js");

    let key1 = find(&entries, "key1");
    assert_eq!(
        key1.comment.as_deref(),
        Some("supported are only keys and values in double quotes")
    );
    assert_eq!(
        key1.hint().as_deref(),
        Some("key1\nsupported are only keys and values in double quotes")
    );
    assert_eq!(find(&entries, "key2").comment, None);

    // Key identical to its value is left out of the hint
    let value1 = find(&entries, "value1");
    assert_eq!(
        value1.hint().as_deref(),
        Some("keys identical to values are not extracted\nas hints")
    );

    assert_eq!(
        find(&entries, "key5").comment.as_deref(),
        Some(
            "line comments are extracted as hints as well\nthis is a comment \"with quotes\" and forward slashes: // test"
        )
    );
}

#[test]
fn test_js_escapes() {
    let entries = entries(JS_ESCAPES, SourceLanguage::Js, "escapes.js");
    let value = |key: &str| find(&entries, key).value().map(str::to_string);

    assert_eq!(value("key1").as_deref(), Some("foo\\nbar"));
    assert_eq!(value("key2").as_deref(), Some("foo\\\nbar"));
    assert_eq!(value("key3").as_deref(), Some("foo\\\\nbar"));
    assert_eq!(value("key4a").as_deref(), Some("foo \"bar\""));
    assert_eq!(value("key4b").as_deref(), Some("foo \\\"bar\""));
    assert_eq!(value("key5a").as_deref(), Some("foo 'bar'"));
    assert_eq!(value("key5b").as_deref(), Some("foo \\'bar'"));

    for key in ["key6", "key7", "key8a", "key8b", "key8c", "key8d"] {
        assert_eq!(value(key).as_deref(), Some("fooAbar"), "{key}");
    }

    assert_eq!(value("key9").as_deref(), Some("foo\u{102}bar"));
    assert_eq!(value("key10").as_deref(), Some("foo\u{466}bar"));
    assert_eq!(value("key11").as_deref(), Some("foo\u{1F600}bar"));

    let controls = [
        ("key12", '\u{8}'),
        ("key13", '\u{c}'),
        ("key14", '\n'),
        ("key15", '\r'),
        ("key16", '\t'),
        ("key17", '\u{b}'),
    ];
    for (key, control) in controls {
        assert_eq!(value(&format!("{key}a")), Some(format!("foo{control}bar")));
        assert_eq!(
            value(&format!("{key}b")),
            Some(format!("foo{control}{control}bar"))
        );
    }
}

#[test]
fn test_js_trailing_comments() {
    let entries = entries(JS_ESCAPES, SourceLanguage::Js, "escapes.js");
    assert_eq!(
        find(&entries, "key6").comment.as_deref(),
        Some("\\101 = 'A' (ASCII), octal form")
    );
    assert_eq!(
        find(&entries, "key7").comment.as_deref(),
        Some("\\x41 = 'A' (ASCII), hexadecimal form")
    );
    assert_eq!(find(&entries, "key1").comment, None);
}

#[test]
fn test_invalid_escape_skips_only_that_declaration() {
    let src = "foo({\n    \"ok\": \"fine\",\n    \"bad\": \"foo\\x4\",\n    \"next\": \"also fine\",\n});\n";
    let extraction = extract_file(src, SourceLanguage::Js, "bad.js");

    let keys: Vec<&str> = extraction.declarations().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["ok", "next"]);
    assert_eq!(extraction.errors.len(), 1);
    assert!(matches!(
        &extraction.errors[0],
        ExtractError::MalformedLiteral { location, .. } if location.line == 3
    ));
}

#[test]
fn test_unterminated_literal_stops_the_file() {
    let src = "foo({\n    \"ok\": \"fine\",\n    \"broken\": \"no end\n});\n";
    let extraction = extract_file(src, SourceLanguage::Js, "broken.js");

    assert!(extraction.tables.is_empty());
    assert_eq!(
        extraction.errors,
        vec![ExtractError::MalformedLiteral {
            location: SourceLocation::new("broken.js", 3, 15),
            reason: MalformedReason::NewlineInString,
        }]
    );
}

#[test]
fn test_identical_inputs_give_identical_entries() {
    let first = entries(JS_ESCAPES, SourceLanguage::Js, "escapes.js");
    let second = entries(JS_ESCAPES, SourceLanguage::Js, "escapes.js");
    assert_eq!(first, second);
}
