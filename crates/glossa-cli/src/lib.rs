//! # glossa-cli
//!
//! Command-line interface for Glossa.
//!
//! - `glossa build --site <dir> --out <dir>`: assemble a site's collection
//!   and write its index shards and runtime config
//! - `glossa query --assets <dir|url> [--language ..] [--tags a,b] [text]`:
//!   load an exported index and print matching pages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{BuildArgs, Cli, Command, QueryArgs};
pub use commands::{cmd_build, cmd_query, render_build, render_pages, BuildSummary};
pub use error::{Error, Result};
