//! TF-IDF computation over a sentence corpus.
//!
//! Term frequency is computed per sentence, inverse document frequency
//! across all sentences, and the product is stored index-aligned with the
//! sentence sequence. See [`engine::TfIdfEngine`] for the computation and
//! [`TfIdfTable`] for the resulting artifact.

pub mod engine;

use rustc_hash::FxHashMap;

/// Per-term weights for one sentence.
pub type TermWeights = FxHashMap<String, f64>;

/// TF-IDF weights for every sentence of a document, index-aligned with the
/// sentence sequence it was computed from.
#[derive(Debug, Clone, Default)]
pub struct TfIdfTable {
    weights: Vec<TermWeights>,
}

impl TfIdfTable {
    /// Build a table from per-sentence weight maps.
    pub fn new(weights: Vec<TermWeights>) -> Self {
        Self { weights }
    }

    /// Weights for the sentence at `index`.
    pub fn sentence_weights(&self, index: usize) -> Option<&TermWeights> {
        self.weights.get(index)
    }

    /// Sum of all weights for the sentence at `index`.
    ///
    /// Returns 0.0 when the index is out of range or when the sentence had
    /// no qualifying tokens.
    pub fn sentence_sum(&self, index: usize) -> f64 {
        self.weights
            .get(index)
            .map(|weights| weights.values().sum())
            .unwrap_or(0.0)
    }

    /// Number of sentences covered.
    pub fn num_sentences(&self) -> usize {
        self.weights.len()
    }

    /// `true` when the table covers no sentences.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
