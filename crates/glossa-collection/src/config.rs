//! Site configuration for collection building.
//!
//! Loaded from `site.toml` at the site root:
//!
//! ```toml
//! [languages]
//! enabled = ["en", "ja"]
//!
//! [urls]
//! assets = "https://example.com/assets"
//!
//! [collection]
//! enabled = true
//! pages_dir = "blog"
//!
//! [collection.sort]
//! key = "date"
//! order = "desc"
//!
//! [collection.taxonomy]
//! categories = ["travel", "food"]
//!
//! [collection.index]
//! content = true
//! ```
//!
//! Every section has defaults, so only `languages.enabled` is required.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use glossa_core::{Error, Result};
use glossa_fts::IndexEngineConfig;
use serde::{Deserialize, Serialize};

use crate::page::Page;

/// Name of the site configuration file.
pub const SITE_CONFIG_FILE: &str = "site.toml";

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Enabled languages; the first one is the default language.
    #[serde(default)]
    pub languages: LanguagesConfig,

    /// Public URLs.
    #[serde(default)]
    pub urls: UrlsConfig,

    /// Collection settings.
    #[serde(default)]
    pub collection: CollectionConfig,
}

/// Enabled languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// Language codes in priority order.
    #[serde(default)]
    pub enabled: Vec<String>,
}

/// Public URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlsConfig {
    /// Base URL the generated assets are served from.
    #[serde(default = "default_assets_url")]
    pub assets: String,
}

fn default_assets_url() -> String {
    "/assets".to_string()
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            assets: default_assets_url(),
        }
    }
}

/// Collection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Build and index the collection at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory below `pages/` holding collection pages.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Pagination.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Sort order of the collection.
    #[serde(default)]
    pub sort: SortConfig,

    /// Runtime search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Category taxonomy.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    /// Index settings.
    #[serde(default)]
    pub index: IndexConfig,
}

fn default_true() -> bool {
    true
}

fn default_pages_dir() -> String {
    "collection".to_string()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            pages_dir: default_pages_dir(),
            pagination: PaginationConfig::default(),
            sort: SortConfig::default(),
            search: SearchConfig::default(),
            taxonomy: TaxonomyConfig::default(),
            index: IndexConfig::default(),
        }
    }
}

/// Pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Pages per listing page; also the size of the head slice.
    #[serde(default = "default_page_size")]
    pub size: usize,
}

fn default_page_size() -> usize {
    10
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            size: default_page_size(),
        }
    }
}

/// Page attribute the collection is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Page name.
    Name,
    /// Page description.
    Description,
    /// Publication date, compared as a timestamp.
    #[default]
    Date,
    /// Directory of the page.
    RelUrl,
    /// Author name.
    Author,
    /// Formatted date, compared as text.
    DisplayDate,
}

impl SortKey {
    /// Compare two pages by this key in ascending order.
    ///
    /// Text keys compare case-insensitively first and fall back to the raw
    /// text so the order is total.
    pub fn compare(self, a: &Page, b: &Page) -> Ordering {
        match self {
            SortKey::Name => collate(&a.name, &b.name),
            SortKey::Description => collate(&a.description, &b.description),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::RelUrl => collate(&a.rel_url, &b.rel_url),
            SortKey::Author => collate(&a.author, &b.author),
            SortKey::DisplayDate => collate(&a.display_date, &b.display_date),
        }
    }
}

/// Case-insensitive text ordering with a raw tie-break.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Collection sort settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Sort attribute.
    #[serde(default)]
    pub key: SortKey,
    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

/// Runtime search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum sanitized query length before the index is consulted.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

fn default_min_query_length() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
        }
    }
}

/// Category taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Category ids shown in the facet list.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Index settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Store and index each page's plain-text body.
    #[serde(default)]
    pub content: bool,

    /// Base document index configuration.
    #[serde(default)]
    pub document_store: IndexEngineConfig,
}

impl SiteConfig {
    /// Parse a TOML configuration string and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse site config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate `site.toml` from a site directory.
    pub async fn load(site_dir: &Path) -> Result<Self> {
        let path = site_dir.join(SITE_CONFIG_FILE);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        Self::from_toml_str(&content)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.languages.enabled.is_empty() {
            return Err(Error::config("at least one language must be enabled"));
        }
        if self.collection.pagination.size == 0 {
            return Err(Error::config("collection.pagination.size must be at least 1"));
        }
        if self.collection.index.document_store.index.is_empty() {
            return Err(Error::config(
                "collection.index.document_store.index must name at least one field",
            ));
        }
        Ok(())
    }

    /// The first enabled language.
    pub fn default_language(&self) -> &str {
        self.languages
            .enabled
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Base index configuration with the content field applied.
    pub fn index_engine_config(&self) -> IndexEngineConfig {
        self.collection
            .index
            .document_store
            .clone()
            .with_content(self.collection.index.content)
    }
}

/// Options for a single build run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Skip collection building and indexing for this run.
    pub ignore_collection: bool,
}

/// Directory layout of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    /// Layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Site root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/pages/{pages_dir}`.
    pub fn collection_dir(&self, config: &CollectionConfig) -> PathBuf {
        self.root.join("pages").join(&config.pages_dir)
    }

    /// `{root}/languages/{language}`.
    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.root.join("languages").join(language)
    }
}

// ============================================================================
// Tests
// ============================================================================
