//! HTML documents checked with the built-in rule set.

use std::path::{Path, PathBuf};

use bem_lint_core::{
    document_messages, Analyzer, DocumentError, DocumentOutcome, Severity, ViolationKind,
};
use bem_lint_html::HtmlParser;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn analyzer() -> Analyzer {
    Analyzer::builder()
        .root(fixtures())
        .parser(HtmlParser::new())
        .rules(bem_lint_rules::all_rules())
        .build()
        .unwrap()
}

fn check(name: &str) -> DocumentOutcome {
    analyzer().check_file(&fixtures().join(name)).outcome
}

#[test]
fn menu_reports_innermost_item() {
    let outcome = check("menu.html");
    let violations = outcome.violations();
    assert_eq!(violations.len(), 1);
    assert!(matches!(
        violations[0].kind,
        ViolationKind::RecursiveElement { .. }
    ));
    let location = violations[0].location.unwrap();
    assert_eq!((location.start_line, location.start_col), (10, 9));
    let ancestor = violations[0].second_location().unwrap();
    assert_eq!((ancestor.start_line, ancestor.start_col), (9, 7));

    assert_eq!(
        document_messages(&outcome).unwrap(),
        [" 10:9   ✖ error in tag `div`: element `menu__item` is nested in an element with the same name (see   9:7)"]
    );
}

#[test]
fn clean_document_prints_outline() {
    match check("clean.html") {
        DocumentOutcome::Clean { outline } => {
            insta::assert_snapshot!(outline, @r"
            body.page
            └─ header.header.page__header
              └─ a.header__link.header__link_active
            └─ button.btn.btn_disabled
            ");
        }
        other => panic!("expected a clean document, got {other:?}"),
    }
}

#[test]
fn malformed_class_names_the_tag() {
    match check("malformed.html") {
        DocumentOutcome::Failed {
            error: DocumentError::MalformedClass {
                class,
                tag_name,
                location,
            },
        } => {
            assert_eq!(class, "Card!Title");
            assert_eq!(tag_name, "p");
            let location = location.unwrap();
            assert_eq!((location.start_line, location.start_col), (4, 7));
        }
        other => panic!("expected a malformed class error, got {other:?}"),
    }
}

#[test]
fn omitted_html_and_head_tags_are_implied() {
    let outcome = check("omitted_html.html");
    let violations = outcome.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::NoParentBlock);
    let location = violations[0].location.unwrap();
    assert_eq!((location.start_line, location.start_col), (3, 1));
}

#[test]
fn omitted_body_tag_is_implied() {
    let outcome = check("omitted_body.html");
    let kinds: Vec<_> = outcome.violations().iter().map(|v| v.kind).collect();
    assert_eq!(kinds, [ViolationKind::NoParentBlock]);
    let location = outcome.violations()[0].location.unwrap();
    assert_eq!((location.start_line, location.start_col), (3, 3));
}

#[test]
fn fragment_is_checked_as_body_content() {
    let outcome = analyzer().check_source("<div class=\"card\"><p class=\"card__text\"></p></div>");
    match outcome {
        DocumentOutcome::Clean { outline } => {
            insta::assert_snapshot!(outline, @r"
            body
            └─ div.card
              └─ p.card__text
            ");
        }
        other => panic!("expected a clean document, got {other:?}"),
    }
}

#[test]
fn modifier_listed_first() {
    let outcome = check("modifier_first.html");
    let kinds: Vec<_> = outcome.violations().iter().map(|v| v.kind).collect();
    assert_eq!(kinds, [ViolationKind::ModifierBeforeParent]);
}

#[test]
fn batch_processes_every_document() {
    let result = analyzer().analyze().unwrap();
    let paths: Vec<_> = result
        .documents
        .iter()
        .map(|d| d.path.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        paths,
        [
            "clean.html",
            "malformed.html",
            "menu.html",
            "modifier_first.html",
            "omitted_body.html",
            "omitted_html.html"
        ]
    );
    assert_eq!(result.failed_documents(), 1);
    assert!(result.has_failures(Severity::Error));
    assert_eq!(result.count_by_severity(), (4, 0, 0));
}

#[test]
fn batch_from_temp_dir_with_excludes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("node_modules/lib")).unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body><div class=\"card\"></div></body></html>",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("node_modules/lib/bad.html"),
        "<html><body><div class=\"Bad!\"></div></body></html>",
    )
    .unwrap();

    let result = Analyzer::builder()
        .root(dir.path())
        .parser(HtmlParser::new())
        .rules(bem_lint_rules::all_rules())
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked(), 1);
    assert!(!result.has_failures(Severity::Error));
}
