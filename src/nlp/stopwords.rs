//! Stopword filtering.
//!
//! Wraps the `stop-words` crate's per-language lists behind a small filter
//! type. Lookups are case-insensitive; custom words can be layered on top of
//! the base list. Stopwords never participate in any frequency count.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of words excluded from frequency counts.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language code.
    ///
    /// Supported: en, de, fr, es, it, pt, nl, sv, da, fi, no, ru. Unknown
    /// codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).into_iter().collect(),
        }
    }

    /// Create an empty filter (nothing is filtered).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check a word against the filter, case-insensitively.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// `true` when nothing is filtered.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
