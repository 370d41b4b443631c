//! Error types for glossa-query

use thiserror::Error;

/// Result type alias for glossa-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying an index
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from glossa-core
    #[error("Core error: {0}")]
    Core(#[from] glossa_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A shard or config request answered with a non-success status
    #[error("GET {url} returned {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Core(err.into())
    }
}

impl Error {
    /// Returns `true` if the requested shard or config does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Core(e) => e.is_not_found(),
            Error::Status { status, .. } => *status == 404,
            Error::Http(_) => false,
        }
    }
}
