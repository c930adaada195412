//! Text normalization.
//!
//! Cleans raw text ahead of sentence splitting: bracketed numeric citation
//! markers are deleted, whitespace runs collapse to single spaces, and all
//! alphabetic characters are lowercased. Normalization is a pure function of
//! its input and succeeds on any string.

use once_cell::sync::Lazy;
use regex::Regex;

static CITATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[0-9]*\]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw document text.
///
/// Citation markers like `[12]` are deleted entirely, not replaced with a
/// space, so `word[3] next` normalizes to `word next`. Every maximal run of
/// whitespace (including newlines and tabs) becomes a single space.
pub fn normalize(text: &str) -> String {
    let stripped = CITATIONS.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numeric_citations() {
        assert_eq!(normalize("The probe[12] launched[3] on time."), "the probe launched on time.");
    }

    #[test]
    fn test_citation_deleted_not_replaced() {
        // No double space where the marker sat.
        assert_eq!(normalize("word[3] next"), "word next");
        assert_eq!(normalize("mid[42]dle"), "middle");
    }

    #[test]
    fn test_non_numeric_brackets_kept() {
        assert_eq!(normalize("see [note] here"), "see [note] here");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("The QUICK Fox"), "the quick fox");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Plain text.",
            "With[1] citations[23] and\n\nnewlines\tand   runs.",
            "  leading and trailing  ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
