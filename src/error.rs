//! Error types for the reflow library.

use std::io;
use thiserror::Error;

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested words-per-line width is out of domain.
    #[error("words per line must be at least 1 (got {0})")]
    InvalidWordsPerLine(usize),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWordsPerLine(0);
        assert_eq!(err.to_string(), "words per line must be at least 1 (got 0)");

        let err = Error::Render("bad output".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad output");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
