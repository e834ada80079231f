//! Diagnostic data model.

use serde::{Deserialize, Serialize};

use crate::source::Location;

/// A diagnostic severity.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Get the category name of the severity.
    pub fn category(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

/// A stable numeric diagnostic identifier.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorId(pub u64);

/// A related location attached to a diagnostic for context.
#[derive(Clone, Debug)]
pub struct Related<'src> {
    pub message: String,
    pub location: Location<'src>,
}

impl<'src> Related<'src> {
    /// Create a new related entry.
    pub fn new(message: impl Into<String>, location: Location<'src>) -> Self {
        Related {
            message: message.into(),
            location,
        }
    }
}

/// A diagnostic emitted during compilation. The order of the related entries is meaningful and is
/// preserved all the way to the rendered output.
#[derive(Clone, Debug)]
pub struct Diagnostic<'src> {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location<'src>>,
    pub related: Vec<Related<'src>>,
    pub id: Option<ErrorId>,
}

impl<'src> Diagnostic<'src> {
    /// Create a new diagnostic without a location.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            location: None,
            related: Vec::new(),
            id: None,
        }
    }

    /// Attach a location to the diagnostic.
    pub fn at(mut self, location: Location<'src>) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach a related location to the diagnostic.
    pub fn related(mut self, message: impl Into<String>, location: Location<'src>) -> Self {
        self.related.push(Related::new(message, location));
        self
    }

    /// Attach an identifier to the diagnostic.
    pub fn with_id(mut self, id: ErrorId) -> Self {
        self.id = Some(id);
        self
    }
}
