//! Glossa umbrella crate.
//!
//! This crate re-exports all Glossa components for convenience.
//! Use feature flags to enable specific functionality.
//!
//! | Feature | Component |
//! |---------|-----------|
//! | (always) | [`core`], [`content`], [`fts`] |
//! | `collection` (default) | `collection`: site config, assembly, index export |
//! | `query` (default) | `query`: runtime query engine |
//! | `fts-tantivy` | Tantivy adapter for the Glossa tokenizers |
//! | `cli` | `cli`: command handlers behind the `glossa` binary |

pub use glossa_content as content;
pub use glossa_core as core;
pub use glossa_fts as fts;

#[cfg(feature = "collection")]
pub use glossa_collection as collection;

#[cfg(feature = "query")]
pub use glossa_query as query;

#[cfg(feature = "cli")]
pub use glossa_cli as cli;
