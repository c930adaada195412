//! Threshold-based sentence extraction.
//!
//! The selection threshold is `multiplier × mean(score)`. Sentences are
//! emitted in original document order, never reordered by score; selection
//! is a subsequence of the input.

use crate::error::SummarizeError;
use crate::types::{ScoreMap, ScoredSentence, DEFAULT_THRESHOLD_MULTIPLIER};

/// The extractor's output: joined summary text, the selected sentences, and
/// the threshold that was applied.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected sentences joined with single spaces, in document order.
    pub text: String,
    /// Selected sentences with their scores, in document order.
    pub sentences: Vec<ScoredSentence>,
    /// `multiplier × mean(score)`.
    pub threshold: f64,
}

/// Selects the sentences whose score clears the corpus-mean threshold.
#[derive(Debug, Clone)]
pub struct Extractor {
    multiplier: f64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_THRESHOLD_MULTIPLIER,
        }
    }
}

impl Extractor {
    /// Create an extractor with the given threshold multiplier.
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// The selection threshold for `scores`.
    ///
    /// Fails with [`SummarizeError::EmptyCorpus`] when there is nothing to
    /// average.
    pub fn threshold(&self, scores: &ScoreMap) -> Result<f64, SummarizeError> {
        if scores.is_empty() {
            return Err(SummarizeError::EmptyCorpus);
        }
        let mean = scores.values().sum::<f64>() / scores.len() as f64;
        Ok(self.multiplier * mean)
    }

    /// Extract the summary from scored sentences.
    ///
    /// Walks `sentences` in document order and keeps every scored sentence
    /// whose score is at least the threshold. No sentence clearing it is a
    /// valid empty result, not an error; unscored sentences (zero word
    /// count) are never selected.
    pub fn extract(
        &self,
        sentences: &[String],
        scores: &ScoreMap,
    ) -> Result<Selection, SummarizeError> {
        let threshold = self.threshold(scores)?;

        let mut selected = Vec::new();
        for (index, sentence) in sentences.iter().enumerate() {
            if let Some(&score) = scores.get(&index) {
                if score >= threshold {
                    selected.push(ScoredSentence {
                        index,
                        text: sentence.clone(),
                        score,
                    });
                }
            }
        }

        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Selection {
            text,
            sentences: selected,
            threshold,
        })
    }
}
