//! Runtime query engine over exported collection indexes.
//!
//! Loads the shards the collection indexer wrote for one language, from a
//! directory or over HTTP, and answers paginated, deduplicated, optionally
//! tag-filtered queries against them.
//!
//! # Modules
//!
//! - [`engine`]: [`QueryEngine`] and its query operations
//! - [`source`]: [`ShardSource`] implementations
//! - [`sanitize`]: Query sanitization and hit deduplication
//! - [`error`]: Error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod sanitize;
pub mod source;

pub use engine::{QueryEngine, QueryOptions};
pub use error::{Error, Result};
pub use sanitize::{dedup_hits, sanitize_query};
pub use source::{is_http_location, source_for, DirShardSource, HttpShardSource, ShardSource};
