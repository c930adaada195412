//! Sentence boundary detection.
//!
//! The boundary rule is a replaceable policy behind [`SentenceSplitter`];
//! the rest of the pipeline only requires determinism and order
//! preservation. The default [`TerminalPunctSplitter`] breaks on `.`, `!`,
//! or `?` followed by whitespace or end of input, and skips a configurable
//! abbreviation set.

use rustc_hash::FxHashSet;

/// Splits text into an ordered sequence of sentences.
pub trait SentenceSplitter {
    /// Split `text` into sentences in document order.
    ///
    /// Empty input yields an empty vec. Text containing no boundary yields a
    /// single-element vec holding the whole text. Implementations must be
    /// deterministic and must never reorder.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Words whose trailing period does not end a sentence, compared lowercase
/// and without the final dot.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "fig",
    "vol", "approx",
];

/// Rule-based splitter on terminal punctuation.
#[derive(Debug, Clone)]
pub struct TerminalPunctSplitter {
    abbreviations: FxHashSet<String>,
}

impl Default for TerminalPunctSplitter {
    fn default() -> Self {
        Self {
            abbreviations: ENGLISH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TerminalPunctSplitter {
    /// Create a splitter with the default English abbreviation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the abbreviation set.
    pub fn with_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        self.abbreviations = abbreviations.iter().map(|s| s.to_lowercase()).collect();
        self
    }

    /// `true` when the accumulated text ends in a known abbreviation rather
    /// than a sentence boundary.
    fn ends_in_abbreviation(&self, current: &str) -> bool {
        let word = current
            .trim_end()
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("");
        let word = word.trim_end_matches('.');
        self.abbreviations.contains(&word.to_lowercase())
    }
}

impl SentenceSplitter for TerminalPunctSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            current.push(c);
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            // A real boundary needs whitespace or end-of-input after the
            // terminal character; this also keeps decimals and "?!" intact.
            let at_end = i + 1 >= chars.len();
            if !at_end && !chars[i + 1].is_whitespace() {
                continue;
            }
            if c == '.' && self.ends_in_abbreviation(&current) {
                continue;
            }

            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }

        // Trailing text without terminal punctuation is still a sentence.
        let tail = current.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}
