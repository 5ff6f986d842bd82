//! Paragraph-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text, stored as its word tokens.
///
/// Tokens are produced by splitting the paragraph text on *single* space
/// characters, so consecutive spaces yield empty-string tokens. Those empty
/// tokens are kept and rejoined as-is: the split is literal, not a
/// whitespace-collapsing tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Word tokens in source order, empty tokens included
    pub tokens: Vec<String>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a paragraph by token-splitting a single line of text.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split(' ').map(str::to_string).collect(),
        }
    }

    /// Append a token to the paragraph.
    pub fn push_token(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Reconstruct the paragraph text by rejoining tokens with single spaces.
    pub fn plain_text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Number of tokens, empty tokens included.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of non-empty word tokens.
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_empty()).count()
    }

    /// Check if the paragraph carries no visible content.
    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|t| t.trim().is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}
