//! Site configuration, collection assembly, and index export.
//!
//! Build-time half of Glossa: read a site's configuration and language data,
//! assemble the admitted collection pages of every enabled language, and
//! write their index shards and the runtime configuration.
//!
//! # Modules
//!
//! - [`config`]: `site.toml`, sort keys, and the site directory layout
//! - [`language`]: Contributors and category taxonomy per language
//! - [`urls`]: `${pages.urls.…}` placeholder resolution
//! - [`page`]: The [`Page`] document model
//! - [`assembler`]: Per-language collection building
//! - [`indexer`]: Shard export
//! - [`runtime`]: Runtime configuration and asset paths
//!
//! # Example
//!
//! ```rust,ignore
//! use glossa_collection::{CollectionBuilder, CollectionIndexer, SiteConfig, SiteLayout};
//!
//! let layout = SiteLayout::new("my-site");
//! let config = SiteConfig::load(layout.root()).await?;
//!
//! let result = CollectionBuilder::new(&config, &layout).build().await?;
//! let report = CollectionIndexer::new(&config, "dist/assets").index(&result).await?;
//! println!("{} shards written", report.shards_written);
//! ```

pub mod assembler;
pub mod config;
pub mod indexer;
pub mod language;
pub mod page;
pub mod runtime;
pub mod urls;

// Re-exports
pub use assembler::{
    sort_pages, BuildCollectionResult, CategoryFacet, CollectionBuilder, CollectionMetadata,
    LanguageCollection, LanguageStats,
};
pub use config::{
    collate, BuildOptions, CollectionConfig, SiteConfig, SiteLayout, SortKey, SortOrder,
    SITE_CONFIG_FILE,
};
pub use indexer::{CollectionIndexer, IndexReport};
pub use language::{Contributor, ContributorTable, LanguageData, Taxonomy};
pub use page::{display_date, parse_date, CategoryLabel, Page, PageContext, PageSource};
pub use runtime::{
    collection_assets_dir, shard_path, shard_url_path, RuntimeConfig, COLLECTION_ASSETS_DIR,
    RUNTIME_CONFIG_FILE,
};
pub use urls::{language_prefix, resolve_url_placeholders};
