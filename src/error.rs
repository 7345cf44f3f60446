//! Error types for the document-facing layer.
//!
//! The counting core never fails; these errors only arise while getting
//! text out of a document and into the core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for document operations.
pub type LexcountResult<T> = Result<T, LexcountError>;

/// Error type for everything that happens before text reaches the counter.
#[derive(Debug, Error)]
pub enum LexcountError {
    /// The source document is missing or its text could not be extracted
    #[error("Source unavailable '{}': {reason}", path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Error occurred while writing output files
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl LexcountError {
    /// Returns true when the failure came from the document source.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
