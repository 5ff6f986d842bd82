//! Structured document model for parsed text.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::Paragraph;
