use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, GO_STRINGS, JS_STRINGS, run};

#[test]
fn test_extract_prints_json_grouped_by_language() -> Result<()> {
    let test = CliTest::with_file("strings.go", GO_STRINGS)?;
    test.write_file("web/strings.js", JS_STRINGS)?;

    let out = run(&mut test.extract_command())?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);

    let tables: Value = serde_json::from_str(&out.stdout)?;
    let en = tables["en"].as_array().expect("en table");
    let keys: Vec<&str> = en.iter().filter_map(|e| e["key"].as_str()).collect();
    // Go file is labeled "en", the JS table has no label and lands in the default language
    assert_eq!(
        keys,
        vec![
            "WelcomeMessage",
            "HelloUser",
            "XFilesFoundInYFolders",
            "John",
            "RawString",
            "Template",
            "key1",
            "key2",
            "key3",
            "key4",
            "value1",
            "key5",
        ]
    );

    let john = &en[3];
    assert_eq!(john["variants"], json!({"": "John", "genitive": "John's"}));
    assert_eq!(john["comment"], json!("Male name"));
    assert_eq!(
        john["variantComments"],
        json!({"genitive": "Male name, genitive case"})
    );
    assert_eq!(john["source"]["line"], json!(20));
    Ok(())
}

#[test]
fn test_extract_default_language_override() -> Result<()> {
    let test = CliTest::with_file("strings.js", JS_STRINGS)?;

    let out = run(test.extract_command().args(["--default-language", "de"]))?;
    assert_eq!(out.code, Some(0));

    let tables: Value = serde_json::from_str(&out.stdout)?;
    let languages: Vec<&String> = tables.as_object().expect("object").keys().collect();
    assert_eq!(languages, vec!["de"]);
    Ok(())
}

#[test]
fn test_extract_to_file() -> Result<()> {
    let test = CliTest::with_file("strings.go", GO_STRINGS)?;

    let out = run(test.extract_command().args(["--output", "entries.json"]))?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "");
    assert!(out.stderr.contains("Extracted 6 entries in 1 language to entries.json"));

    let written: Value = serde_json::from_str(&test.read_file("entries.json")?)?;
    assert_eq!(written["en"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[test]
fn test_extract_reports_errors_on_stderr() -> Result<()> {
    let test = CliTest::with_file(
        "strings.js",
        "foo({\n    \"key1\": \"one\",\n    \"key1\": \"two\",\n});\n",
    )?;

    let out = run(&mut test.extract_command())?;
    assert_eq!(out.code, Some(1));

    // Stdout stays valid JSON with the first declaration kept
    let tables: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(tables["en"][0]["variants"][""], json!("one"));
    assert!(out.stderr.contains("duplicate-key"));
    assert!(out.stderr.contains("strings.js:3:5"));
    Ok(())
}

#[test]
fn test_extract_respects_ignores() -> Result<()> {
    let test = CliTest::with_file("src/strings.js", JS_STRINGS)?;
    test.write_file("node_modules/lib/strings.js", "x({\n  \"lib\": \"value\",\n});\n")?;

    let out = run(&mut test.extract_command())?;
    let tables: Value = serde_json::from_str(&out.stdout)?;
    let keys: Vec<&str> = tables["en"]
        .as_array()
        .expect("en table")
        .iter()
        .filter_map(|e| e["key"].as_str())
        .collect();
    assert!(!keys.contains(&"lib"));
    Ok(())
}
