use std::path::PathBuf;

use thiserror::Error;
use wordsim_core::WordsimError;

/// Errors raised while locating, fetching or loading external resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered a download with a non-success status.
    #[error("download of {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The embedding file was fetched but could not be parsed.
    #[error("failed to load embedding model: {0}")]
    Model(#[source] WordsimError),

    /// The WordNet directory was found but could not be parsed.
    #[error("failed to load WordNet database: {0}")]
    WordNet(#[source] WordsimError),

    #[error("WordNet database not found in any of {} searched locations", searched.len())]
    WordNetNotFound { searched: Vec<PathBuf> },
}

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
