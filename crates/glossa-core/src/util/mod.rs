//! Utility modules for file discovery and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery
//! - [`paths`]: Relative URL and language-suffix helpers

pub mod files;
pub mod paths;
