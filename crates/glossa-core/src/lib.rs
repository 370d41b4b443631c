//! Glossa Core: shared errors, script tables, and utilities.
//!
//! This crate provides the foundational types used across all Glossa crates.
//! It has no internal Glossa dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`lang`]: Site language → index language tag lookup
//! - [`script`]: Unicode range tables for script-aware tokenization
//! - [`util`]: File discovery and path helpers

pub mod error;
pub mod lang;
pub mod script;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

pub use lang::{index_language, is_cjk_tag};
pub use script::{classify, ScriptClass};
pub use util::files::list_files;
pub use util::paths::{has_language_suffix, rel_url, url_segment};
