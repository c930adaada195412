//! Shared types: run configuration and summary output.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Default multiplier applied to the mean sentence score to form the
/// selection threshold.
pub const DEFAULT_THRESHOLD_MULTIPLIER: f64 = 1.3;

/// Configuration for a summarization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// A sentence is kept when its score is at least
    /// `threshold_multiplier × mean(score)`.
    pub threshold_multiplier: f64,

    /// Language code for stopwords and lemmatization (e.g. `"en"`).
    pub language: String,

    /// Extra stopwords merged into the base language list.
    pub extra_stopwords: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            threshold_multiplier: DEFAULT_THRESHOLD_MULTIPLIER,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Set the threshold multiplier.
    pub fn with_threshold_multiplier(mut self, multiplier: f64) -> Self {
        self.threshold_multiplier = multiplier;
        self
    }

    /// Set the language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Add extra stopwords on top of the base language list.
    pub fn with_extra_stopwords(mut self, words: &[&str]) -> Self {
        self.extra_stopwords = words.iter().map(|w| w.to_string()).collect();
        self
    }
}

/// Sentence scores keyed by sentence index.
///
/// Keying by index keeps textually identical sentences distinct; the text
/// itself is carried separately for output.
pub type ScoreMap = FxHashMap<usize, f64>;

/// A sentence selected for the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Position in the original sentence sequence.
    pub index: usize,
    /// The sentence text, in normalized form.
    pub text: String,
    /// The sentence's score.
    pub score: f64,
}

/// The result of a summarization run.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Selected sentences joined with single spaces, in document order.
    pub text: String,
    /// The normalized input document.
    pub document: String,
    /// Selected sentences with their scores, in document order.
    pub sentences: Vec<ScoredSentence>,
    /// The threshold that was applied.
    pub threshold: f64,
}

impl Summary {
    /// Whitespace-delimited word count of the summary text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whitespace-delimited word count of the normalized document.
    pub fn original_word_count(&self) -> usize {
        self.document.split_whitespace().count()
    }

    /// `true` when no sentence met the threshold.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SummaryConfig::default();
        assert!((config.threshold_multiplier - 1.3).abs() < 1e-12);
        assert_eq!(config.language, "en");
        assert!(config.extra_stopwords.is_empty());
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: SummaryConfig = serde_json::from_str("{}").unwrap();
        assert!((config.threshold_multiplier - DEFAULT_THRESHOLD_MULTIPLIER).abs() < 1e-12);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "threshold_multiplier": 1.5,
            "language": "de",
            "extra_stopwords": ["foo", "bar"]
        }"#;
        let config: SummaryConfig = serde_json::from_str(json).unwrap();
        assert!((config.threshold_multiplier - 1.5).abs() < 1e-12);
        assert_eq!(config.language, "de");
        assert_eq!(config.extra_stopwords, vec!["foo", "bar"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SummaryConfig::default()
            .with_threshold_multiplier(2.0)
            .with_extra_stopwords(&["alpha"]);
        let json = serde_json::to_string(&config).unwrap();
        let back: SummaryConfig = serde_json::from_str(&json).unwrap();
        assert!((back.threshold_multiplier - 2.0).abs() < 1e-12);
        assert_eq!(back.extra_stopwords, vec!["alpha"]);
    }

    #[test]
    fn test_summary_word_counts() {
        let summary = Summary {
            text: "two words".to_string(),
            document: "two words and some more".to_string(),
            sentences: Vec::new(),
            threshold: 0.0,
        };
        assert_eq!(summary.word_count(), 2);
        assert_eq!(summary.original_word_count(), 5);
    }
}
