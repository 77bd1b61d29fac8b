use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["variantSeparator"], json!("##"));
    assert_eq!(parsed["defaultLanguage"], json!("en"));
    assert_eq!(
        parsed["ignores"],
        json!(["**/node_modules/**", "**/vendor/**"])
    );
    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command().arg("init"))?;
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Created .locstrrc.json\n");

    assert!(test.root().join(".locstrrc.json").exists());
    let content = test.read_file(".locstrrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locstrrc.json", "{}")?;

    let out = run(test.command().arg("init"))?;
    assert_eq!(out.code, Some(1));
    assert_eq!(out.stderr, "error: .locstrrc.json already exists\n");
    // Existing file is left alone
    assert_eq!(test.read_file(".locstrrc.json")?, "{}");

    Ok(())
}
