//! Pipeline runner — executes the summarization stages in order.
//!
//! Stages run strictly left to right on immutable artifacts: the normalized
//! document feeds the sentence splitter, the sentence list feeds the TF-IDF
//! engine, the weight table feeds the scorer, and the score map feeds the
//! extractor. The splitter is a type parameter so callers can swap the
//! sentence boundary policy without touching the rest of the pipeline.

use tracing::debug;

use crate::error::SummarizeError;
use crate::nlp::normalize::normalize;
use crate::nlp::sentence::{SentenceSplitter, TerminalPunctSplitter};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Lemmatizer, WordTokenizer};
use crate::source::TextSource;
use crate::summarizer::extractor::Extractor;
use crate::summarizer::scorer::score_sentences;
use crate::tfidf::engine::TfIdfEngine;
use crate::types::{Summary, SummaryConfig};

/// The summarization pipeline.
///
/// Construction builds the stopword set and lemmatizer once; every
/// [`summarize`](SummaryPipeline::summarize) call reuses them.
#[derive(Debug)]
pub struct SummaryPipeline<S = TerminalPunctSplitter> {
    config: SummaryConfig,
    splitter: S,
    tokenizer: WordTokenizer,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPipeline {
    /// Build a pipeline with the default configuration (English, threshold
    /// multiplier 1.3).
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Build a pipeline from a configuration.
    pub fn with_config(config: SummaryConfig) -> Self {
        let mut stopwords = StopwordFilter::new(&config.language);
        if !config.extra_stopwords.is_empty() {
            let extra: Vec<&str> = config.extra_stopwords.iter().map(String::as_str).collect();
            stopwords.add_stopwords(&extra);
        }
        let lemmatizer = Lemmatizer::new(&config.language);

        Self {
            splitter: TerminalPunctSplitter::default(),
            tokenizer: WordTokenizer::new(stopwords, lemmatizer),
            config,
        }
    }

    /// Override the threshold multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.config.threshold_multiplier = multiplier;
        self
    }
}

impl<S: SentenceSplitter> SummaryPipeline<S> {
    /// Swap the sentence boundary policy.
    pub fn with_splitter<T: SentenceSplitter>(self, splitter: T) -> SummaryPipeline<T> {
        SummaryPipeline {
            config: self.config,
            splitter,
            tokenizer: self.tokenizer,
        }
    }

    /// Summarize raw text.
    ///
    /// Fails with [`SummarizeError::EmptyCorpus`] when the input yields no
    /// scorable sentences; a document whose sentences all score 0 is valid
    /// input and produces a defined result.
    pub fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let document = normalize(text);

        let sentences = self.splitter.split(&document);
        debug!(sentences = sentences.len(), "split document");

        let tfidf = TfIdfEngine::new(&self.tokenizer).compute(&sentences);
        let scores = score_sentences(&sentences, &tfidf);

        let extractor = Extractor::new(self.config.threshold_multiplier);
        let selection = extractor.extract(&sentences, &scores)?;
        debug!(
            threshold = selection.threshold,
            selected = selection.sentences.len(),
            "extracted summary"
        );

        Ok(Summary {
            text: selection.text,
            document,
            sentences: selection.sentences,
            threshold: selection.threshold,
        })
    }

    /// Fetch text from a source and summarize it.
    ///
    /// Acquisition failures are terminal and propagate unchanged; the
    /// pipeline never retries.
    pub fn summarize_source(&self, source: &dyn TextSource) -> Result<Summary, SummarizeError> {
        let text = source.fetch_text()?;
        self.summarize(&text)
    }
}
