//! Text acquisition seam.
//!
//! The pipeline consumes raw text through [`TextSource`]; what sits behind
//! the trait (a file, an in-memory string, an HTTP fetcher in a downstream
//! crate) is the caller's concern. Failures propagate as
//! [`AcquisitionError`] values and are terminal for the run.

use std::fs;
use std::path::PathBuf;

use crate::error::AcquisitionError;

/// Supplies the raw document text for one summarization run.
pub trait TextSource {
    /// Fetch the raw text.
    fn fetch_text(&self) -> Result<String, AcquisitionError>;
}

/// An in-memory source, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Wrap an already-available string.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StaticSource {
    fn fetch_text(&self) -> Result<String, AcquisitionError> {
        Ok(self.text.clone())
    }
}

/// Reads the document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn fetch_text(&self) -> Result<String, AcquisitionError> {
        fs::read_to_string(&self.path).map_err(|source| AcquisitionError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
