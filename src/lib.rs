//! Extractive text summarization via TF-IDF sentence scoring.
//!
//! `salience` scores each sentence of a document by the TF-IDF weight of
//! its terms and keeps the sentences whose score clears a statistical
//! threshold, a configurable multiple of the mean score. The summary is
//! always an ordered subsequence of the original sentences, never a
//! paraphrase.
//!
//! # Quick start
//!
//! ```
//! let text = "The zebra escaped the enclosure before dawn. Zebra tracks \
//!     crossed the east lawn twice. The weather was pleasant that day.";
//!
//! let summary = salience::summarize(text).unwrap();
//! assert!(summary.word_count() <= summary.original_word_count());
//! ```
//!
//! Each pipeline stage (normalization, sentence splitting, tokenization
//! with stopword filtering and lemmatization, TF-IDF computation, scoring,
//! extraction) is exposed individually; see
//! [`SummaryPipeline`](pipeline::runner::SummaryPipeline) to customize a
//! stage, e.g. swapping the sentence boundary policy or the threshold
//! multiplier.

pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod tfidf;
pub mod types;

pub use error::{AcquisitionError, SummarizeError};
pub use pipeline::runner::SummaryPipeline;
pub use source::{FileSource, StaticSource, TextSource};
pub use types::{ScoredSentence, Summary, SummaryConfig, DEFAULT_THRESHOLD_MULTIPLIER};

/// Summarize `text` with the default English pipeline.
///
/// Equivalent to `SummaryPipeline::new().summarize(text)`; build a
/// [`SummaryPipeline`] directly to reuse the stopword set and lemmatizer
/// across documents or to change the configuration.
pub fn summarize(text: &str) -> Result<Summary, SummarizeError> {
    SummaryPipeline::new().summarize(text)
}
