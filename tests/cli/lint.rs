use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GO_STRINGS, JS_STRINGS, run};

#[test]
fn test_lint_clean_project() -> Result<()> {
    let test = CliTest::with_file("strings.go", GO_STRINGS)?;
    test.write_file("strings.js", JS_STRINGS)?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(0), "stdout: {}", out.stdout);
    assert_eq!(
        out.stdout,
        "\u{2713} Checked 2 source files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_lint_reports_duplicates_and_broken_templates() -> Result<()> {
    let test = CliTest::with_file(
        "strings.js",
        "foo({\n    \"Files\": \"{N_PLURAL:{N} file|{N} files\",\n    \"Hello\": \"Hi\",\n    \"Hello\": \"Hey\",\n});\n",
    )?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"Files\"  template-syntax"));
    assert!(out.stdout.contains("= note: unmatched `{` (byte 0 of the value)"));
    assert!(out.stdout.contains("error: \"Hello\"  duplicate-key"));
    assert!(out.stdout.contains("strings.js:4:5"));
    assert!(
        out.stdout
            .ends_with("\u{2718} 2 problems (2 errors, 0 warnings)\n")
    );
    Ok(())
}

#[test]
fn test_lint_placeholder_mismatch_is_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "strings.go",
        "package strings\n\nfunc init() {\n\tT[\"en\"] = map[string]string{\n\t\t\"Hello\": \"Hello, {NAME}!\",\n\t}\n\tT[\"ru\"] = map[string]string{\n\t\t\"Hello\": \"Привет, {USER}!\",\n\t}\n}\n",
    )?;

    let out = run(&mut test.lint_command())?;
    // Warnings alone do not fail the run
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"Hello\"  placeholder-mismatch"));
    assert!(out.stdout.contains("strings.go:8:3"));
    assert!(
        out.stdout
            .ends_with("\u{2718} 1 problem (0 errors, 1 warning)\n")
    );
    Ok(())
}

#[test]
fn test_lint_conflicting_variant_across_files() -> Result<()> {
    let test = CliTest::with_file("a.js", "x({\n    \"John##genitive\": \"John's\",\n});\n")?;
    test.write_file("b.js", "x({\n    \"John##genitive\": \"Johns\",\n});\n")?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"John\"  conflicting-variant"));
    assert!(out.stdout.contains("b.js:2:5"));
    assert!(out.stdout.contains("variant \"genitive\" first declared at"));
    Ok(())
}

#[test]
fn test_lint_with_custom_separator() -> Result<()> {
    let test = CliTest::with_file(
        "strings.js",
        "x({\n    \"John\": \"John\",\n    \"John::genitive\": \"John's\",\n    \"John##x\": \"{\",\n});\n",
    )?;
    test.write_file(".locstrrc.json", r#"{ "variantSeparator": "::" }"#)?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(1));
    // "John##x" is a plain key with this separator
    assert!(out.stdout.contains("error: \"John##x\"  template-syntax"));
    assert!(
        out.stdout
            .ends_with("\u{2718} 1 problem (1 error, 0 warnings)\n")
    );
    Ok(())
}

#[test]
fn test_lint_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("strings.js", JS_STRINGS)?;
    test.write_file(".locstrrc.json", r#"{ "variantSeparator": "" }"#)?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Error:"));
    Ok(())
}

#[test]
fn test_lint_reports_key_without_default_variant() -> Result<()> {
    let test = CliTest::with_file(
        "strings.js",
        "x({\n    \"John\": \"John\",\n    \"Item##short\": \"It.\",\n});\n",
    )?;

    let out = run(&mut test.lint_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"Item\"  missing-default-variant"));
    assert!(out.stdout.contains("strings.js:3:5"));
    assert!(
        out.stdout
            .ends_with("\u{2718} 1 problem (1 error, 0 warnings)\n")
    );
    Ok(())
}
