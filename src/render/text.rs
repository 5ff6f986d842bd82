//! Plain text rendering: paragraph-preserving word wrap.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Document, Paragraph};

use super::ReflowOptions;

/// Rewrap a document to plain text.
///
/// Each paragraph is wrapped to `options.words_per_line` tokens per line
/// (the final line of a paragraph may carry fewer), lines are joined with a
/// single newline, and paragraphs are joined with a blank line. Token
/// content and order are never altered.
pub fn to_text(doc: &Document, options: &ReflowOptions) -> Result<String> {
    options.validate()?;

    let wrapped: Vec<String> = doc
        .paragraphs
        .par_iter()
        .map(|p| wrap_paragraph(p, options.words_per_line))
        .collect();

    Ok(wrapped.join("\n\n"))
}

/// Wrap a single paragraph to `words_per_line` tokens per line.
///
/// Empty tokens (from consecutive source spaces) count toward the line
/// width and are rejoined literally. The wrapped paragraph is trimmed at
/// both ends, so runs of empty tokens at a paragraph edge collapse away.
fn wrap_paragraph(paragraph: &Paragraph, words_per_line: usize) -> String {
    paragraph
        .tokens
        .chunks(words_per_line)
        .map(|line| line.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    fn reflow(text: &str, words_per_line: usize) -> String {
        let doc = parse_text(text);
        let options = ReflowOptions::new().with_words_per_line(words_per_line);
        to_text(&doc, &options).unwrap()
    }

    #[test]
    fn test_wrap_exact_groups() {
        assert_eq!(reflow("one two three four five", 2), "one two\nthree four\nfive");
    }

    #[test]
    fn test_wrap_with_remainder() {
        assert_eq!(reflow("a b c d e f g", 3), "a b c\nd e f\ng");
    }

    #[test]
    fn test_short_paragraphs_untouched() {
        assert_eq!(
            reflow("para one line\n\npara two line", 3),
            "para one line\n\npara two line"
        );
    }

    #[test]
    fn test_one_word_per_line() {
        assert_eq!(reflow("x y z", 1), "x\ny\nz");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(reflow("", 5), "");
    }

    #[test]
    fn test_empty_tokens_count_toward_width() {
        // "a  b c" tokenizes as ["a", "", "b", "c"]; at width 2 the empty
        // token fills the first line, leaving a literal trailing space
        // mid-paragraph (only the paragraph ends are trimmed)
        assert_eq!(reflow("a  b c", 2), "a \nb c");
    }

    #[test]
    fn test_invalid_width_rejected() {
        let doc = parse_text("one two");
        let options = ReflowOptions::new().with_words_per_line(0);
        assert!(to_text(&doc, &options).is_err());
    }
}
