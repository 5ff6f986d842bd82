//! Raw text parsing into the document model.
//!
//! Parsing follows the exact splitting rules of the original download
//! formatter: leading/trailing whitespace of the whole input is discarded,
//! paragraphs are separated by runs of one or more newlines, and each
//! paragraph is token-split on single space characters (consecutive spaces
//! produce empty tokens, which are preserved).

use regex::Regex;

use crate::model::{Document, Paragraph};

/// Parse raw text into a structured [`Document`].
///
/// Empty or whitespace-only input yields an empty document.
///
/// # Example
///
/// ```
/// use reflow::parse_text;
///
/// let doc = parse_text("first paragraph\n\nsecond paragraph");
/// assert_eq!(doc.paragraph_count(), 2);
/// ```
pub fn parse_text(text: &str) -> Document {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Document::new();
    }

    let separator = Regex::new(r"\n+").unwrap();

    let mut doc = Document::new();
    for paragraph in separator.split(trimmed) {
        doc.add_paragraph(Paragraph::from_text(paragraph));
    }

    log::debug!(
        "parsed {} paragraphs, {} words",
        doc.paragraph_count(),
        doc.word_count()
    );

    doc
}
