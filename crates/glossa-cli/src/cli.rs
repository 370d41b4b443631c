//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Glossa: multilingual collection indexing and search for static sites
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a site's collection and export its search index
    Build(BuildArgs),
    /// Query an exported search index
    Query(QueryArgs),
}

/// Arguments of `glossa build`.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Site root containing site.toml
    #[arg(long, env = "GLOSSA_SITE", default_value = ".")]
    pub site: PathBuf,

    /// Assets output directory
    #[arg(long, env = "GLOSSA_OUT")]
    pub out: PathBuf,

    /// Skip the collection for this run
    #[arg(long)]
    pub ignore_collection: bool,
}

/// Arguments of `glossa query`.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Assets directory or base URL
    #[arg(long, env = "GLOSSA_ASSETS")]
    pub assets: String,

    /// Language to query; defaults to the site's first language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Comma-separated category ids to filter by
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum results
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Override the minimum query length
    #[arg(long)]
    pub min_query_length: Option<usize>,

    /// Print pages as JSON
    #[arg(long)]
    pub json: bool,

    /// Free-text query
    pub text: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
