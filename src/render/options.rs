//! Reflow options and configuration.

use super::CleanupOptions;
use crate::error::{Error, Result};

/// Default target word count per output line.
///
/// Matches the width the original download formatter used for translated
/// documents.
pub const DEFAULT_WORDS_PER_LINE: usize = 15;

/// Options for reflowing document text.
#[derive(Debug, Clone)]
pub struct ReflowOptions {
    /// Target number of word tokens per output line (must be at least 1)
    pub words_per_line: usize,

    /// Optional pre-parse text cleanup
    pub cleanup: Option<CleanupOptions>,
}

impl ReflowOptions {
    /// Create new reflow options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target words per line.
    pub fn with_words_per_line(mut self, words_per_line: usize) -> Self {
        self.words_per_line = words_per_line;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup options from a preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Check that the options are within the supported domain.
    pub fn validate(&self) -> Result<()> {
        if self.words_per_line < 1 {
            return Err(Error::InvalidWordsPerLine(self.words_per_line));
        }
        Ok(())
    }
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            words_per_line: DEFAULT_WORDS_PER_LINE,
            cleanup: None,
        }
    }
}
