//! Source related types and functions.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A span between two byte offsets in a source.
pub type Span = Range<usize>;

/// An immutable, named source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    /// Create a new source from its name and text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Get the source's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the source's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the source's length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolve a byte offset into a line and column position. Offsets past the end of the source
    /// resolve to the end of file position.
    pub fn position(&self, offset: usize) -> LineColumn {
        let before = &self.text.as_bytes()[..offset.min(self.text.len())];
        let line = before.iter().filter(|&&byte| byte == b'\n').count() + 1;
        let start = line_start(before);
        LineColumn {
            line,
            column: chars(&before[start..]),
        }
    }

    /// Get the full text of the line containing a byte offset, without its trailing newline.
    pub fn line_at(&self, offset: usize) -> &str {
        let offset = offset.min(self.text.len());
        let bytes = self.text.as_bytes();
        let start = line_start(&bytes[..offset]);
        let end = bytes[offset..]
            .iter()
            .position(|&byte| byte == b'\n')
            .map_or(self.text.len(), |i| offset + i);
        &self.text[start..end]
    }
}

/// A resolved position in a source, with a 1-based line and a 0-based column counted in characters
/// from the start of the line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// A located span in a source. A location without a source carries no extractable position.
#[derive(Clone, Debug)]
pub struct Location<'src> {
    pub source: Option<&'src Source>,
    pub span: Span,
}

impl<'src> Location<'src> {
    /// Create a new location in a source.
    pub fn new(source: &'src Source, span: Span) -> Self {
        Location {
            source: Some(source),
            span,
        }
    }

    /// Create a location that carries no source.
    pub fn detached(span: Span) -> Self {
        Location { source: None, span }
    }

    /// Check if the location's span selects retrievable text in its source.
    pub fn has_text(&self) -> bool {
        self.source
            .is_some_and(|source| self.span.start <= self.span.end && self.span.end <= source.len())
    }

    /// Get the text selected by the location, if any.
    pub fn text(&self) -> Option<&'src str> {
        self.source?.text.get(self.span.clone())
    }
}

/// Find the offset of the first byte of the last line in a byte slice.
fn line_start(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&byte| byte == b'\n')
        .map_or(0, |i| i + 1)
}

/// Count the characters in a byte slice of UTF-8 text.
fn chars(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&byte| byte & 0xC0 != 0x80).count()
}
