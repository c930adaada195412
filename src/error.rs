//! Error types for summarization runs.
//!
//! Only acquisition failures and an empty corpus are surfaced; numeric edge
//! cases inside the pipeline (empty token lists, zero-word sentences) are
//! handled locally with defined fallback values and never escape as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the raw document from a text source.
///
/// The pipeline never performs acquisition itself and never retries; these
/// are produced by [`TextSource`](crate::source::TextSource) implementations
/// and propagate to the caller intact.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// Reading a local file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The collaborator could not retrieve the document, e.g. a network
    /// failure in an out-of-crate HTTP source.
    #[error("failed to retrieve document: {0}")]
    Retrieval(String),

    /// The retrieved content could not be reduced to raw text.
    #[error("failed to parse document content: {0}")]
    Parse(String),
}

/// Errors surfaced by the summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The source text could not be acquired.
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    /// The document yielded no scorable sentences, so no threshold can be
    /// computed. An all-stopword document does not trigger this; its
    /// sentences score 0 and produce a defined result.
    #[error("no scorable sentences in input")]
    EmptyCorpus,
}
