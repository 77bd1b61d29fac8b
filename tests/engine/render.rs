use locstr::{
    core::{SourceLanguage, TranslationEntry},
    runtime::{Catalog, LanguageTable, RenderError},
    template::{
        Bindings, EvalError, Evaluator, PluralRule, SyntaxErrorKind, TemplateSyntaxError,
        evaluate, parse,
    },
};
use pretty_assertions::assert_eq;

use crate::{GO_STRINGS, entries, find};

fn go_entries() -> Vec<TranslationEntry> {
    entries(GO_STRINGS, SourceLanguage::Go, "strings.go")
}

fn render(template: &str, bindings: &Bindings) -> Result<String, EvalError> {
    evaluate(&parse(template).unwrap(), bindings)
}

#[test]
fn test_render_extracted_template() {
    let entries = go_entries();
    let template = find(&entries, "XFilesFoundInYFolders").value().unwrap();
    let tree = parse(template).unwrap();

    let bindings = Bindings::new()
        .with("X", 1)
        .with("Y", 3)
        .with("COMMAND", 1);
    assert_eq!(
        evaluate(&tree, &bindings).unwrap(),
        "1 file found in 3 folders. Do you want to move it?"
    );

    let bindings = Bindings::new()
        .with("X", 2)
        .with("Y", 1)
        .with("COMMAND", 2);
    assert_eq!(
        evaluate(&tree, &bindings).unwrap(),
        "2 files found in 1 folder. Do you want to delete them?"
    );
}

#[test]
fn test_render_extracted_template_with_many_files() {
    let entries = go_entries();
    let tree = parse(find(&entries, "XFilesFoundInYFolders").value().unwrap()).unwrap();

    let bindings = Bindings::new()
        .with("X", 3)
        .with("Y", 2)
        .with("COMMAND", 0);
    assert_eq!(
        evaluate(&tree, &bindings).unwrap(),
        "3 files found in 2 folders. Do you want to copy them?"
    );

    // COMMAND is a plain index and is never clamped
    let bindings = Bindings::new()
        .with("X", 3)
        .with("Y", 2)
        .with("COMMAND", 3);
    assert_eq!(
        evaluate(&tree, &bindings),
        Err(EvalError::IndexOutOfRange {
            name: "COMMAND".to_string(),
            index: 3,
            len: 3
        })
    );
}

#[test]
fn test_named_placeholder() {
    let bindings = Bindings::new().with("NAME", "Ada");
    assert_eq!(render("Hello, {NAME}!", &bindings).unwrap(), "Hello, Ada!");
}

#[test]
fn test_unmatched_open_brace_is_a_syntax_error() {
    assert_eq!(
        parse("Hello, {NAME"),
        Err(TemplateSyntaxError::new(
            7,
            SyntaxErrorKind::UnmatchedOpenBrace
        ))
    );
}

#[test]
fn test_evaluation_errors() {
    assert_eq!(
        render("{N_PLURAL:a|b}", &Bindings::new()),
        Err(EvalError::UnboundName {
            name: "N".to_string()
        })
    );
    assert_eq!(
        render("{N_PLURAL:a|b}", &Bindings::new().with("N", "many")),
        Err(EvalError::TypeMismatch {
            name: "N".to_string()
        })
    );
    assert_eq!(
        render("{C:a|b}", &Bindings::new().with("C", 2)),
        Err(EvalError::IndexOutOfRange {
            name: "C".to_string(),
            index: 2,
            len: 2,
        })
    );
}

#[test]
fn test_russian_plural_forms() {
    let tree = parse("{N} {N_PLURAL:файл|файла|файлов}").unwrap();
    let evaluator = Evaluator::new(PluralRule::Russian);
    let rendered: Vec<String> = [1, 2, 5, 21, 22, 11]
        .into_iter()
        .map(|n| evaluator.evaluate(&tree, &Bindings::new().with("N", n)).unwrap())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "1 файл",
            "2 файла",
            "5 файлов",
            "21 файл",
            "22 файла",
            "11 файлов",
        ]
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let tree = parse("{X_PLURAL:{X} file|{X} files} for {NAME}").unwrap();
    let bindings = Bindings::new().with("X", 7).with("NAME", "Ada");
    let first = evaluate(&tree, &bindings).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(&tree, &bindings).unwrap(), first);
    }
}

#[test]
fn test_catalog_over_extracted_entries() {
    let en: LanguageTable = go_entries().into_iter().collect();
    let catalog = Catalog::new().with_table("en", en);

    assert_eq!(
        catalog
            .render("en", "John", Some("genitive"), &Bindings::new())
            .unwrap(),
        "John's"
    );
    assert_eq!(
        catalog
            .render("en", "HelloUser", None, &Bindings::new().with("NAME", "Ada"))
            .unwrap(),
        "Hello, Ada!"
    );
    assert!(matches!(
        catalog.render("en", "John", Some("dative"), &Bindings::new()),
        Err(RenderError::MissingKey { key, .. }) if key == "John##dative"
    ));
}

#[test]
fn test_catalog_falls_back_to_another_language() {
    let en: LanguageTable = go_entries().into_iter().collect();
    let ru: LanguageTable = entries(
        "package x\n\nfunc init() {\n\tT[\"ru\"] = map[string]string{\n\t\t\"John\": \"Джон\",\n\t}\n}\n",
        SourceLanguage::Go,
        "ru.go",
    )
    .into_iter()
    .collect();
    let catalog = Catalog::new()
        .with_table("en", en)
        .with_table("ru", ru)
        .with_fallback("en");

    let empty = Bindings::new();
    assert_eq!(catalog.render("ru", "John", None, &empty).unwrap(), "Джон");
    // Missing variant in ru comes from en
    assert_eq!(
        catalog.render("ru", "John", Some("genitive"), &empty).unwrap(),
        "John's"
    );
    assert_eq!(
        catalog.lookup("ru", "RawString", None),
        Some(("en", "foo \"bar\" baz"))
    );
    assert!(matches!(
        catalog.render("ru", "Nope", None, &empty),
        Err(RenderError::MissingKey { language, .. }) if language == "ru"
    ));
}

#[test]
fn test_syntax_error_messages() {
    let err = parse("{A B}").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid character ' ' in placeholder name at byte 2"
    );

    let mut settings = insta::Settings::clone_current();
    settings.add_filter(r"at byte \d+", "at byte [OFFSET]");
    settings.bind(|| {
        insta::assert_snapshot!(
            parse("Hello, {NAME").unwrap_err().to_string(),
            @"unmatched `{` at byte [OFFSET]"
        );
        insta::assert_snapshot!(
            parse("50% | off").unwrap_err().to_string(),
            @"`|` outside of a placeholder at byte [OFFSET]"
        );
    });
}
