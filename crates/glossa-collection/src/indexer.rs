//! Index export.
//!
//! [`CollectionIndexer`] indexes every language of a [`BuildCollectionResult`]
//! and writes the shards and the [`RuntimeConfig`] below the assets
//! directory. Each language gets its own index, configured through
//! [`IndexEngineConfig::for_language`] so the query engine can rebuild the
//! same configuration when it imports the shards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glossa_core::{Error, Result};
use glossa_fts::{DocumentIndex, IndexEngineConfig, MemoryIndex};

use crate::assembler::{BuildCollectionResult, LanguageCollection};
use crate::config::SiteConfig;
use crate::runtime::{collection_assets_dir, shard_path, RuntimeConfig};

/// Outcome of an index export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Shard names written per language, in export order.
    pub language_index_keys: BTreeMap<String, Vec<String>>,
    /// Total number of shard files written.
    pub shards_written: usize,
    /// Location of the runtime configuration, when one was written.
    pub runtime_config: Option<PathBuf>,
}

/// Writes per-language index shards and the runtime configuration.
#[derive(Debug)]
pub struct CollectionIndexer<'a> {
    config: &'a SiteConfig,
    assets_dir: PathBuf,
}

impl<'a> CollectionIndexer<'a> {
    /// Create an indexer writing below `assets_dir`.
    pub fn new(config: &'a SiteConfig, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            assets_dir: assets_dir.into(),
        }
    }

    /// Assets root this indexer writes to.
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Index with [`MemoryIndex`].
    pub async fn index(&self, result: &BuildCollectionResult) -> Result<IndexReport> {
        self.index_with(result, MemoryIndex::new).await
    }

    /// Index with any [`DocumentIndex`] built by `make_index`.
    ///
    /// An empty build result (disabled or skipped collection) writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a page cannot be indexed or a file cannot be
    /// written.
    pub async fn index_with<I, F>(
        &self,
        result: &BuildCollectionResult,
        make_index: F,
    ) -> Result<IndexReport>
    where
        I: DocumentIndex,
        F: Fn(IndexEngineConfig) -> I,
    {
        let mut report = IndexReport::default();
        if result.is_empty() {
            log::info!("No collection to index");
            return Ok(report);
        }

        let base = self.config.index_engine_config();
        for collection in result.iter() {
            let mut index = make_index(base.for_language(&collection.language));
            let keys = self.export_language(collection, &mut index).await?;
            report.shards_written += keys.len();
            report
                .language_index_keys
                .insert(collection.language.clone(), keys);
        }

        let mut runtime = RuntimeConfig::from_site(self.config);
        runtime.language_index_keys = report.language_index_keys.clone();
        runtime.collection_sizes = result.sizes();
        report.runtime_config = Some(runtime.write(&self.assets_dir).await?);

        log::info!(
            "Wrote {} shards to {}",
            report.shards_written,
            collection_assets_dir(&self.assets_dir).display()
        );
        Ok(report)
    }

    async fn export_language<I: DocumentIndex>(
        &self,
        collection: &LanguageCollection,
        index: &mut I,
    ) -> Result<Vec<String>> {
        for page in &collection.pages {
            index.add(serde_json::to_value(page)?)?;
        }

        let shards = index.export_shards()?;
        let mut keys = Vec::with_capacity(shards.len());
        for shard in shards {
            let path = shard_path(&self.assets_dir, &collection.language, &shard.name);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::io_with_path(e, parent))?;
            }
            tokio::fs::write(&path, &shard.data)
                .await
                .map_err(|e| Error::io_with_path(e, &path))?;
            log::debug!("Wrote shard {}", path.display());
            keys.push(shard.name);
        }

        log::debug!(
            "Indexed {} pages for '{}' with {}",
            index.len(),
            collection.language,
            index.name()
        );
        Ok(keys)
    }
}

// ============================================================================
// Tests
// ============================================================================
