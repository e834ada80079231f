//! Source reference extraction.

use serde::{Deserialize, Serialize};

use crate::{
    reporting::{Diagnostic, ErrorId},
    snippet,
    source::{LineColumn, Location},
};

/// A human-presentable reference to a location in a source: a message, the source's name, the
/// resolved position and a bounded-width snippet of the containing line with a highlighted column
/// range. The columns count characters into `snippet` and satisfy
/// `start_column <= end_column <= snippet.chars().count()`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourceReference {
    pub message: String,
    pub source_name: Option<String>,
    pub position: Option<LineColumn>,
    pub multiline: bool,
    pub snippet: String,
    pub start_column: usize,
    pub end_column: usize,
}

impl SourceReference {
    /// Create a reference carrying only a message and, optionally, a source name.
    pub fn message_only(message: impl Into<String>, source_name: Option<String>) -> Self {
        SourceReference {
            message: message.into(),
            source_name,
            position: None,
            multiline: false,
            snippet: String::new(),
            start_column: 0,
            end_column: 0,
        }
    }
}

/// A renderable diagnostic message: a primary reference, a category name, the references for the
/// diagnostic's related locations in their supplied order, and an optional identifier.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Message {
    pub primary: SourceReference,
    pub category: String,
    pub secondary: Vec<SourceReference>,
    pub id: Option<ErrorId>,
}

/// Extract a renderable message from a diagnostic, classifying the category from the diagnostic's
/// severity and copying its identifier.
pub fn extract(diagnostic: &Diagnostic<'_>) -> Message {
    let mut message = extract_with_category(diagnostic, diagnostic.severity.category());
    message.id = diagnostic.id;
    message
}

/// Extract a renderable message from a diagnostic under a caller-supplied category.
pub fn extract_with_category(diagnostic: &Diagnostic<'_>, category: impl Into<String>) -> Message {
    let secondary = diagnostic
        .related
        .iter()
        .map(|related| reference(Some(&related.location), &related.message))
        .collect();
    Message {
        primary: reference(diagnostic.location.as_ref(), &diagnostic.message),
        category: category.into(),
        secondary,
        id: None,
    }
}

/// Build the source reference for a message at a location. A missing location or source yields a
/// message-only reference; a location whose text cannot be retrieved yields a reference naming
/// only its source.
pub fn reference(location: Option<&Location<'_>>, message: &str) -> SourceReference {
    let Some(location) = location else {
        return SourceReference::message_only(message, None);
    };
    let Some(source) = location.source else {
        return SourceReference::message_only(message, None);
    };
    if !location.has_text() {
        return SourceReference::message_only(message, Some(source.name().to_string()));
    }

    let position = source.position(location.span.start);
    let end = source.position(location.span.end);
    let multiline = position.line != end.line;
    let line = source.line_at(location.span.start);
    let snippet = snippet::shorten(line, position.column, end.column, multiline);

    SourceReference {
        message: message.to_string(),
        source_name: Some(source.name().to_string()),
        position: Some(position),
        multiline,
        snippet: snippet.text,
        start_column: snippet.start_column,
        end_column: snippet.end_column,
    }
}
