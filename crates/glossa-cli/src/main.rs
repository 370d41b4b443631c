//! Glossa CLI
//!
//! Builds and queries multilingual collection indexes.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use glossa_cli::{cmd_build, cmd_query, render_build, render_pages, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build(args) => {
            let summary = cmd_build(&args).await?;
            print!("{}", render_build(&summary));
        }
        Command::Query(args) => {
            let pages = cmd_query(&args).await?;
            print!("{}", render_pages(&pages, args.json)?);
        }
    }

    Ok(())
}
