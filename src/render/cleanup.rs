//! Optional text cleanup applied before parsing.
//!
//! Machine-translated and OCR-extracted text often arrives with mixed line
//! endings, denormalized Unicode, and repeated lines. The cleanup pipeline
//! normalizes that noise without touching word content inside a line, and
//! it only runs when explicitly configured.

use std::collections::HashSet;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: line ending + Unicode NFC normalization only
    Minimal,
    /// Standard cleanup: minimal plus replacement-char removal and
    /// blank-run capping
    #[default]
    Standard,
    /// Aggressive cleanup: standard plus repeated-line removal
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize CRLF and lone CR line endings to LF
    pub normalize_newlines: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement characters (U+FFFD)
    pub remove_replacement_char: bool,

    /// Drop repeated non-blank lines, keeping the first occurrence
    pub deduplicate_lines: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_newlines: true,
            normalize_unicode: true,
            remove_replacement_char: false,
            deduplicate_lines: false,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            remove_replacement_char: true,
            // Two newlines keep one blank line, the paragraph separator
            max_consecutive_newlines: 2,
            ..Self::minimal()
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            deduplicate_lines: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Pipeline that applies the configured cleanup passes in order.
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Run all configured passes over the input text.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_newlines {
            result = Self::normalize_newlines(&result);
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.deduplicate_lines {
            result = Self::deduplicate_lines(&result);
        }

        if self.options.max_consecutive_newlines > 0 {
            result = self.limit_newlines(&result);
        }

        result
    }

    fn normalize_newlines(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Drop lines whose trimmed content was already seen.
    ///
    /// Blank lines always pass through: they mark paragraph boundaries and
    /// must survive cleanup.
    fn deduplicate_lines(text: &str) -> String {
        let mut seen = HashSet::new();
        let kept: Vec<&str> = text
            .lines()
            .filter(|line| {
                let clean = line.trim();
                clean.is_empty() || seen.insert(clean.to_string())
            })
            .collect();
        kept.join("\n")
    }

    fn limit_newlines(&self, text: &str) -> String {
        let max = self.options.max_consecutive_newlines as usize;
        let pattern = format!(r"\n{{{},}}", max + 1);
        let re = Regex::new(&pattern).unwrap();
        let replacement = "\n".repeat(max);
        re.replace_all(text, replacement.as_str()).to_string()
    }
}
