use srcref::{
    Diagnostic, ErrorId, LineColumn, Location, Severity, Source, SourceReference,
    extraction::{self, reference},
};

#[test]
fn message_only() {
    let message = extraction::extract(&Diagnostic::new(Severity::Error, "Stack too deep."));
    assert_eq!(
        message.primary,
        SourceReference::message_only("Stack too deep.", None)
    );
    assert_eq!(message.category, "Error");
    assert!(message.secondary.is_empty());
    assert_eq!(message.id, None);

    assert_eq!(
        reference(None, "Stack too deep."),
        SourceReference::message_only("Stack too deep.", None)
    );
    assert_eq!(
        reference(Some(&Location::detached(0..4)), "Stack too deep."),
        SourceReference::message_only("Stack too deep.", None)
    );
}

#[test]
fn named_only() {
    let source = Source::new("lib.mim", "let x = 1;");
    let extracted = reference(Some(&Location::new(&source, 4..20)), "Undefined name.");
    assert_eq!(
        extracted,
        SourceReference::message_only("Undefined name.", Some("lib.mim".to_string()))
    );
}

#[test]
fn full_references() {
    let source = Source::new("main.mim", "let x = 1;\nlet y = f(x);");
    let extracted = reference(Some(&Location::new(&source, 4..5)), "Unused variable.");
    assert_eq!(
        extracted,
        SourceReference {
            message: "Unused variable.".to_string(),
            source_name: Some("main.mim".to_string()),
            position: Some(LineColumn { line: 1, column: 4 }),
            multiline: false,
            snippet: "let x = 1;".to_string(),
            start_column: 4,
            end_column: 5,
        }
    );
}

#[test]
fn multiline_spans() {
    let source = Source::new("main.mim", "let x = 1;\nlet y = f(x);");
    let extracted = reference(Some(&Location::new(&source, 4..15)), "Mismatched types.");
    assert_eq!(
        extracted,
        SourceReference {
            message: "Mismatched types.".to_string(),
            source_name: Some("main.mim".to_string()),
            position: Some(LineColumn { line: 1, column: 4 }),
            multiline: true,
            snippet: "let x = 1;".to_string(),
            start_column: 4,
            end_column: 10,
        }
    );
}

#[test]
fn related_order() {
    let source = Source::new("main.mim", "fn f() {}\nfn f() {}\nfn f() {}");
    let diagnostic = Diagnostic::new(Severity::Error, "Duplicate function declaration.")
        .at(Location::new(&source, 23..24))
        .related(
            "The first declaration is here.",
            Location::new(&source, 3..4),
        )
        .related(
            "Another declaration is here.",
            Location::new(&source, 13..14),
        )
        .with_id(ErrorId(2333));
    let message = extraction::extract(&diagnostic);

    assert_eq!(message.category, "Error");
    assert_eq!(message.id, Some(ErrorId(2333)));
    assert_eq!(
        message
            .secondary
            .iter()
            .map(|secondary| secondary.message.as_str())
            .collect::<Vec<_>>(),
        vec![
            "The first declaration is here.",
            "Another declaration is here."
        ]
    );
    assert_eq!(
        message.secondary[0].position,
        Some(LineColumn { line: 1, column: 3 })
    );
    assert_eq!(
        message.secondary[1].position,
        Some(LineColumn { line: 2, column: 3 })
    );
}

#[test]
fn categories() {
    for (severity, category) in [
        (Severity::Error, "Error"),
        (Severity::Warning, "Warning"),
        (Severity::Info, "Info"),
    ] {
        let message = extraction::extract(&Diagnostic::new(severity, "A message."));
        assert_eq!(message.category, category);
    }
}

#[test]
fn custom_categories() {
    let diagnostic = Diagnostic::new(Severity::Warning, "Deprecated syntax.").with_id(ErrorId(1));
    let message = extraction::extract_with_category(&diagnostic, "DocstringParsingError");
    assert_eq!(message.category, "DocstringParsingError");
    assert_eq!(message.id, None);
}

#[test]
fn bounded_snippets() {
    let text = "x".repeat(300);
    let source = Source::new("long.mim", text.as_str());
    let extracted = reference(Some(&Location::new(&source, 100..120)), "Invalid literal.");
    assert_eq!(extracted.snippet, format!(" ... {} ...", "x".repeat(90)));
    assert_eq!(extracted.start_column, 40);
    assert_eq!(extracted.end_column, 60);
    assert_eq!(
        extracted.position,
        Some(LineColumn {
            line: 1,
            column: 100
        })
    );
}
