//! Command handlers.
//!
//! Handlers return their results instead of printing them; [`render_pages`]
//! and [`render_build`] turn results into terminal output.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use glossa_collection::{
    BuildOptions, CollectionBuilder, CollectionIndexer, IndexReport, Page, SiteConfig, SiteLayout,
};
use glossa_query::{source_for, QueryEngine, QueryOptions};

use crate::cli::{BuildArgs, QueryArgs};
use crate::error::Result;

/// Outcome of `glossa build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages per language.
    pub sizes: BTreeMap<String, usize>,
    /// Index export report.
    pub report: IndexReport,
}

/// Assemble the collection and export its index.
pub async fn cmd_build(args: &BuildArgs) -> Result<BuildSummary> {
    let layout = SiteLayout::new(&args.site);
    let config = SiteConfig::load(layout.root()).await?;
    tracing::info!(
        "Building {} with languages {:?}",
        layout.root().display(),
        config.languages.enabled
    );

    let result = CollectionBuilder::new(&config, &layout)
        .with_options(BuildOptions {
            ignore_collection: args.ignore_collection,
        })
        .build()
        .await?;
    let report = CollectionIndexer::new(&config, &args.out)
        .index(&result)
        .await?;

    Ok(BuildSummary {
        sizes: result.sizes(),
        report,
    })
}

/// Load the requested language and run the query the arguments describe.
///
/// Text and tags run a tag-filtered query, text alone a free-text query,
/// tags alone a tag listing, and neither lists pages in collection order.
pub async fn cmd_query(args: &QueryArgs) -> Result<Vec<Page>> {
    let source = source_for(&args.assets);
    let engine = QueryEngine::load(source.as_ref(), args.language.as_deref()).await?;
    tracing::debug!("Querying {:?}", engine);

    let mut options = QueryOptions::window(args.offset, args.limit);
    if let Some(length) = args.min_query_length {
        options = options.with_min_query_length(length);
    }

    let pages = match (args.text.as_deref(), args.tags.is_empty()) {
        (Some(text), false) => {
            engine
                .query_and_filter_by_tags_with(text, args.tags.as_slice(), &options)
                .await?
        }
        (Some(text), true) => engine.query_with(text, &options).await?,
        (None, false) => {
            engine
                .get_documents_by_tags(args.tags.as_slice(), args.offset, args.limit)
                .await?
        }
        (None, true) => engine.get_documents(args.offset, args.limit).await?,
    };
    Ok(pages)
}

/// Pages as tab-separated `id  date  relUrl  name` lines, or as JSON.
pub fn render_pages(pages: &[Page], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(pages)?);
    }
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            page.id,
            page.date.format("%Y-%m-%d"),
            page.rel_url,
            page.name
        );
    }
    Ok(out)
}

/// One line per language, then the runtime config location.
pub fn render_build(summary: &BuildSummary) -> String {
    if summary.sizes.is_empty() {
        return "Collection skipped\n".to_string();
    }
    let mut out = String::new();
    for (language, size) in &summary.sizes {
        let shards = summary
            .report
            .language_index_keys
            .get(language)
            .map(Vec::len)
            .unwrap_or_default();
        let _ = writeln!(out, "{language}: {size} pages, {shards} shards");
    }
    if let Some(path) = &summary.report.runtime_config {
        let _ = writeln!(out, "Runtime config: {}", path.display());
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
