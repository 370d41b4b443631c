//! Runtime search configuration and asset paths.
//!
//! The build writes one [`RuntimeConfig`] next to the exported index shards:
//!
//! ```text
//! {assets}/collection/config.json
//! {assets}/collection/{language}/{shard}.json
//! ```
//!
//! The query engine reads it back to learn which shards exist and how to
//! configure the index it imports them into.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glossa_core::{Error, Result};
use glossa_fts::IndexEngineConfig;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Directory below the assets root holding the collection index.
pub const COLLECTION_ASSETS_DIR: &str = "collection";

/// File name of the runtime configuration.
pub const RUNTIME_CONFIG_FILE: &str = "config.json";

/// Configuration handed from the build to the runtime query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Base URL the assets are served from.
    pub assets_base_url: String,
    /// First enabled language.
    pub default_language: String,
    /// Pages per listing page.
    pub pagination_size: usize,
    /// Minimum sanitized query length.
    pub min_query_length: usize,
    /// Base index configuration, specialised per language at load time.
    pub document_store: IndexEngineConfig,
    /// Shard names per language, in import order.
    pub language_index_keys: BTreeMap<String, Vec<String>>,
    /// Number of documents per language.
    pub collection_sizes: BTreeMap<String, usize>,
}

impl RuntimeConfig {
    /// Runtime configuration with no exported shards yet.
    pub fn from_site(config: &SiteConfig) -> Self {
        Self {
            assets_base_url: config.urls.assets.clone(),
            default_language: config.default_language().to_string(),
            pagination_size: config.collection.pagination.size,
            min_query_length: config.collection.search.min_query_length,
            document_store: config.index_engine_config(),
            language_index_keys: BTreeMap::new(),
            collection_sizes: BTreeMap::new(),
        }
    }

    /// Shard names of a language; empty when the language was not indexed.
    pub fn index_keys(&self, language: &str) -> &[String] {
        self.language_index_keys
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of documents of a language; 0 when unknown.
    pub fn collection_size(&self, language: &str) -> usize {
        self.collection_sizes.get(language).copied().unwrap_or_default()
    }

    /// Write `config.json` below `assets_dir` and return its path.
    pub async fn write(&self, assets_dir: &Path) -> Result<PathBuf> {
        let dir = collection_assets_dir(assets_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io_with_path(e, &dir))?;

        let path = dir.join(RUNTIME_CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        Ok(path)
    }

    /// Read `config.json` from below `assets_dir`.
    pub async fn read(assets_dir: &Path) -> Result<Self> {
        let path = collection_assets_dir(assets_dir).join(RUNTIME_CONFIG_FILE);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        Self::from_json(&content)
    }

    /// Parse a runtime configuration.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::parse(format!("Invalid runtime config: {e}")))
    }
}

/// `{assets}/collection`.
pub fn collection_assets_dir(assets_dir: &Path) -> PathBuf {
    assets_dir.join(COLLECTION_ASSETS_DIR)
}

/// `{assets}/collection/{language}/{shard}.json`.
pub fn shard_path(assets_dir: &Path, language: &str, shard: &str) -> PathBuf {
    collection_assets_dir(assets_dir)
        .join(language)
        .join(format!("{shard}.json"))
}

/// URL path of a shard relative to the assets base URL.
pub fn shard_url_path(language: &str, shard: &str) -> String {
    format!("{COLLECTION_ASSETS_DIR}/{language}/{shard}.json")
}

// ============================================================================
// Tests
// ============================================================================
