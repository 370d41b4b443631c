//! Runtime query engine.
//!
//! A [`QueryEngine`] owns one loaded language index. It only exists after a
//! successful load, so queries can never run against a half-imported index.
//!
//! # Example
//!
//! ```rust,ignore
//! use glossa_query::{DirShardSource, QueryEngine};
//!
//! let source = DirShardSource::new("dist/assets");
//! let engine = QueryEngine::load(&source, Some("en")).await?;
//!
//! let pages = engine.query("norway", 0, 10).await?;
//! let travel = engine.query_and_filter_by_tags("fjord", &["travel"], 0, 10).await?;
//! ```

use std::collections::HashSet;

use glossa_collection::{Page, RuntimeConfig};
use glossa_fts::{DocumentIndex, Hit, IndexEngineConfig, MemoryIndex, SearchRequest, Shard};

use crate::error::Result;
use crate::sanitize::{dedup_hits, sanitize_query};
use crate::source::ShardSource;

/// Per-call query options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Hits to skip.
    pub offset: usize,
    /// Maximum hits returned.
    pub limit: usize,
    /// Overrides the engine's minimum sanitized query length.
    pub min_query_length: Option<usize>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            min_query_length: None,
        }
    }
}

impl QueryOptions {
    /// Options for one result window.
    pub fn window(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit,
            min_query_length: None,
        }
    }

    /// Override the minimum query length.
    pub fn with_min_query_length(mut self, length: usize) -> Self {
        self.min_query_length = Some(length);
        self
    }
}

/// Loaded index of one language.
pub struct QueryEngine<I = MemoryIndex> {
    index: I,
    language: String,
    collection_size: usize,
    min_query_length: usize,
}

impl QueryEngine<MemoryIndex> {
    /// Load a language's index with [`MemoryIndex`].
    ///
    /// `language` defaults to the runtime configuration's default language.
    pub async fn load(source: &dyn ShardSource, language: Option<&str>) -> Result<Self> {
        let runtime = source.runtime_config().await?;
        let language = language.unwrap_or(&runtime.default_language).to_string();
        Self::load_index(source, &runtime, &language, MemoryIndex::new).await
    }
}

impl<I: DocumentIndex> QueryEngine<I> {
    /// Import every shard listed for `language` into a fresh index.
    ///
    /// The index configuration is rebuilt from the runtime configuration
    /// with [`IndexEngineConfig::for_language`], the same specialisation the
    /// indexer applied. A language with no listed shards loads an empty
    /// index.
    ///
    /// # Errors
    ///
    /// Returns an error if a shard cannot be fetched or imported.
    pub async fn load_index<F>(
        source: &dyn ShardSource,
        runtime: &RuntimeConfig,
        language: &str,
        make_index: F,
    ) -> Result<Self>
    where
        F: FnOnce(IndexEngineConfig) -> I,
    {
        let mut index = make_index(runtime.document_store.for_language(language));
        let keys = runtime.index_keys(language);
        if keys.is_empty() {
            log::warn!("No index shards listed for '{language}'");
        }

        for key in keys {
            let data = source.fetch_shard(language, key).await?;
            index.import_shard(&Shard::new(key.clone(), data))?;
        }
        log::debug!(
            "Loaded {} shards for '{}' from {}",
            keys.len(),
            language,
            source.location()
        );

        Ok(Self::from_index(
            index,
            language,
            runtime.collection_size(language),
            runtime.min_query_length,
        ))
    }

    /// Wrap an already populated index.
    pub fn from_index(
        index: I,
        language: impl Into<String>,
        collection_size: usize,
        min_query_length: usize,
    ) -> Self {
        Self {
            index,
            language: language.into(),
            collection_size,
            min_query_length,
        }
    }

    /// Language of the loaded index.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of documents the build reported for this language.
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    /// Default minimum sanitized query length.
    pub fn min_query_length(&self) -> usize {
        self.min_query_length
    }

    /// Get the underlying index.
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Fetch one page by id.
    pub async fn get_document(&self, id: u64) -> Result<Option<Page>> {
        match self.index.get(id).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// Pages with ids `offset..offset + limit`; missing ids are skipped.
    ///
    /// The range never extends past the collection size.
    pub async fn get_documents(&self, offset: usize, limit: usize) -> Result<Vec<Page>> {
        let end = offset.saturating_add(limit).min(self.collection_size);
        let mut pages = Vec::with_capacity(end.saturating_sub(offset));
        for id in offset..end {
            if let Some(page) = self.get_document(id as u64).await? {
                pages.push(page);
            }
        }
        Ok(pages)
    }

    /// Pages carrying any of `tags`.
    pub async fn get_documents_by_tags<S: AsRef<str>>(
        &self,
        tags: &[S],
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Page>> {
        let request = SearchRequest::tags(tags.iter().map(|t| t.as_ref())).window(offset, limit);
        let groups = self.index.search(&request).await?;
        self.pages(dedup_hits(&groups)).await
    }

    /// Free-text query.
    pub async fn query(&self, text: &str, offset: usize, limit: usize) -> Result<Vec<Page>> {
        self.query_with(text, &QueryOptions::window(offset, limit)).await
    }

    /// Free-text query with explicit options.
    ///
    /// A sanitized query shorter than the minimum length returns no pages
    /// without consulting the index.
    pub async fn query_with(&self, text: &str, options: &QueryOptions) -> Result<Vec<Page>> {
        let Some(text) = self.admit(text, options) else {
            return Ok(Vec::new());
        };
        let request = SearchRequest::text(text).window(options.offset, options.limit);
        let groups = self.index.search(&request).await?;
        self.pages(dedup_hits(&groups)).await
    }

    /// Free-text query restricted to pages carrying any of `tags`.
    pub async fn query_and_filter_by_tags<S: AsRef<str>>(
        &self,
        text: &str,
        tags: &[S],
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Page>> {
        self.query_and_filter_by_tags_with(text, tags, &QueryOptions::window(offset, limit))
            .await
    }

    /// Tag-filtered free-text query with explicit options.
    ///
    /// When the index only filters the current window of text matches, the
    /// window is advanced by `limit` until `limit` distinct pages are found
    /// or the offset passes the collection size.
    pub async fn query_and_filter_by_tags_with<S: AsRef<str>>(
        &self,
        text: &str,
        tags: &[S],
        options: &QueryOptions,
    ) -> Result<Vec<Page>> {
        let Some(text) = self.admit(text, options) else {
            return Ok(Vec::new());
        };
        let base = SearchRequest::text(text).with_tags(tags.iter().map(|t| t.as_ref()));

        if !self.index.truncates_tag_filtered_queries() {
            let request = base.window(options.offset, options.limit);
            let groups = self.index.search(&request).await?;
            return self.pages(dedup_hits(&groups)).await;
        }

        let limit = options.limit;
        let mut collected: Vec<Hit> = Vec::with_capacity(limit.min(self.collection_size));
        let mut seen = HashSet::new();
        let mut live_offset = options.offset;
        while limit > 0 && live_offset < self.collection_size {
            let request = base.clone().window(live_offset, limit);
            let groups = self.index.search(&request).await?;
            for hit in dedup_hits(&groups) {
                if collected.len() < limit && seen.insert(hit.id) {
                    collected.push(hit);
                }
            }
            if collected.len() == limit {
                break;
            }
            live_offset = live_offset.saturating_add(limit);
        }
        self.pages(collected).await
    }

    fn admit(&self, text: &str, options: &QueryOptions) -> Option<String> {
        let sanitized = sanitize_query(text);
        let min = options.min_query_length.unwrap_or(self.min_query_length);
        if sanitized.chars().count() < min {
            log::debug!("Query '{sanitized}' shorter than {min} characters, skipping");
            return None;
        }
        Some(sanitized)
    }

    async fn pages(&self, hits: Vec<Hit>) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(hits.len());
        for hit in hits {
            let doc = match hit.doc {
                Some(doc) => Some(doc),
                None => self.index.get(hit.id).await?,
            };
            if let Some(doc) = doc {
                pages.push(serde_json::from_value(doc)?);
            }
        }
        Ok(pages)
    }
}

impl<I: DocumentIndex> std::fmt::Debug for QueryEngine<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("index", &self.index.name())
            .field("language", &self.language)
            .field("collection_size", &self.collection_size)
            .field("min_query_length", &self.min_query_length)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
