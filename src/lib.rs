pub mod extraction;
pub mod reporting;
pub mod snippet;
pub mod source;

pub use extraction::{Message, SourceReference, extract, extract_with_category};
pub use reporting::{Diagnostic, ErrorId, Related, Severity};
pub use source::{LineColumn, Location, Source, Span};
