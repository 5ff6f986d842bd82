//! # reflow
//!
//! Paragraph-preserving word wrap for plain text.
//!
//! This library takes raw text (typically machine-translated output) and
//! rewraps it into a plain-text document: paragraph boundaries are kept,
//! and each paragraph is rewrapped to a target number of
//! whitespace-delimited words per line.
//!
//! ## Quick Start
//!
//! ```
//! use reflow::reflow;
//!
//! fn main() -> reflow::Result<()> {
//!     let wrapped = reflow("one two three four five", 2)?;
//!     assert_eq!(wrapped, "one two\nthree four\nfive");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph preservation**: runs of newlines mark paragraph
//!   boundaries, and rewrapped paragraphs stay separated by a blank line
//! - **Exact token preservation**: words are never split, merged, or
//!   altered; only whitespace placement changes
//! - **Structured model**: parse once, render to wrapped text or JSON
//! - **Cleanup pipeline**: opt-in normalization for noisy input (line
//!   endings, Unicode NFC, repeated lines)

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, Paragraph};
pub use parser::parse_text;
pub use render::{
    CleanupOptions, CleanupPipeline, CleanupPreset, JsonFormat, ReflowOptions,
    DEFAULT_WORDS_PER_LINE,
};

use std::path::Path;

/// Rewrap text to the given number of words per line.
///
/// Paragraphs (runs of one or more newlines) are wrapped independently and
/// rejoined with a blank line. Empty input yields an empty string.
///
/// # Errors
///
/// Fails with [`Error::InvalidWordsPerLine`] when `words_per_line` is zero.
///
/// # Example
///
/// ```
/// let text = reflow::reflow("a b c d e f g", 3).unwrap();
/// assert_eq!(text, "a b c\nd e f\ng");
/// ```
pub fn reflow(text: &str, words_per_line: usize) -> Result<String> {
    let options = ReflowOptions::new().with_words_per_line(words_per_line);
    reflow_with_options(text, &options)
}

/// Rewrap text with full options.
///
/// When cleanup is configured it runs over the raw input before parsing,
/// so normalization never interferes with token splitting.
pub fn reflow_with_options(text: &str, options: &ReflowOptions) -> Result<String> {
    options.validate()?;

    let doc = match options.cleanup {
        Some(ref cleanup_options) => {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            parse_text(&pipeline.process(text))
        }
        None => parse_text(text),
    };

    render::to_text(&doc, options)
}

/// Parse a UTF-8 text file into a structured document.
///
/// # Example
///
/// ```no_run
/// let doc = reflow::parse_file("translated_output.txt").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_text(&text))
}
