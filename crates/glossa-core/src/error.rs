//! Error types for glossa-core.
//!
//! Every Glossa library crate either uses this [`Error`] directly or wraps it
//! in its own error enum via `#[from]`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for glossa-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling, indexing, or querying collections.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure, optionally tied to the path being read or written.
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Path involved in the failed operation, when known.
        path: Option<PathBuf>,
    },

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or inconsistent configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A named resource does not exist.
    #[error("{kind} not found: {resource}")]
    NotFound {
        /// Identifier or path of the missing resource.
        resource: String,
        /// Kind of resource ("contributor", "shard", ...).
        kind: String,
    },

    /// Malformed input that could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// An operation on the index engine or a shard source failed.
    #[error("Operation failed: {message}")]
    Operation {
        /// Description of the failure.
        message: String,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source, path: None }
    }
}

impl Error {
    /// Creates an I/O error tied to a path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found<R, K>(resource: R, kind: K) -> Self
    where
        R: Into<String>,
        K: Into<String>,
    {
        Error::NotFound {
            resource: resource.into(),
            kind: kind.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates an operation error.
    pub fn operation<S: Into<String>>(message: S) -> Self {
        Error::Operation {
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by a missing resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/tmp/assets/collection/en/reg.json",
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/assets/collection/en/reg.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_io_without_path_display() {
        let err: Error = std::io::Error::other("boom").into();
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn test_not_found() {
        let err = Error::not_found("jill", "contributor");
        assert_eq!(err.to_string(), "contributor not found: jill");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_not_found_kind() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "x.json",
        );
        assert!(err.is_not_found());
        assert!(!Error::config("bad").is_not_found());
    }
}
