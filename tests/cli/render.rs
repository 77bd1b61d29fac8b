use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GO_STRINGS, run};

#[test]
fn test_render_template_argument() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.render_command().args([
        "{X_PLURAL:{X} file|{X} files} in {DIR}",
        "-a",
        "X=3",
        "-a",
        "DIR=src",
    ]))?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "3 files in src\n");
    Ok(())
}

#[test]
fn test_render_uses_language_plural_rule() -> Result<()> {
    let test = CliTest::new()?;
    let template = "{N} {N_PLURAL:файл|файла|файлов}";

    let mut rendered = Vec::new();
    for n in ["1", "3", "11"] {
        let binding = format!("N={n}");
        let out = run(test.render_command().args([
            template,
            "--lang",
            "ru",
            "--arg",
            binding.as_str(),
        ]))?;
        assert_eq!(out.code, Some(0));
        rendered.push(out.stdout);
    }
    assert_eq!(rendered, vec!["1 файл\n", "3 файла\n", "11 файлов\n"]);
    Ok(())
}

#[test]
fn test_render_extracted_key() -> Result<()> {
    let test = CliTest::with_file("strings.go", GO_STRINGS)?;

    let out = run(test.render_command().args([
        "--key",
        "XFilesFoundInYFolders",
        "-a",
        "X=1",
        "-a",
        "Y=3",
        "-a",
        "COMMAND=1",
    ]))?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "1 file found in 3 folders. Do you want to move it?\n"
    );

    let out = run(test
        .render_command()
        .args(["--key", "John", "--variant", "genitive"]))?;
    assert_eq!(out.stdout, "John's\n");
    Ok(())
}

#[test]
fn test_render_missing_key_fails() -> Result<()> {
    let test = CliTest::with_file("strings.go", GO_STRINGS)?;

    let out = run(test.render_command().args(["--key", "Nope"]))?;
    assert_eq!(out.code, Some(2));
    assert_eq!(
        out.stderr,
        "Error: no translation for \"Nope\" in language \"en\"\n"
    );
    Ok(())
}

#[test]
fn test_render_evaluation_errors() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.render_command().arg("Hello, {NAME}!"))?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("no value bound to `NAME`"));

    let out = run(test.render_command().args(["{N_PLURAL:a|b}", "-a", "N=many"]))?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("`N` must be bound to a number"));

    let out = run(test.render_command().args(["{N", "-a", "N=1"]))?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("invalid template: unmatched `{` at byte 0"));
    Ok(())
}

#[test]
fn test_render_rejects_malformed_binding() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.render_command().args(["{N}", "-a", "N"]))?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("expected NAME=VALUE"));
    Ok(())
}

#[test]
fn test_render_requires_template_or_key() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(&mut test.render_command())?;
    assert_eq!(out.code, Some(2));
    Ok(())
}
