//! Error types for glossa-cli

use thiserror::Error;

/// Result type alias for glossa-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in glossa-cli commands
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from glossa-core
    #[error("Core error: {0}")]
    Core(#[from] glossa_core::Error),

    /// Error from glossa-query
    #[error("Query error: {0}")]
    Query(#[from] glossa_query::Error),

    /// Output serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
