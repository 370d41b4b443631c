//! Document index capability trait.
//!
//! Collection building and runtime querying only talk to an index through
//! [`DocumentIndex`]: add documents, search, look documents up by id, and
//! move the index between processes as a list of named [`Shard`]s.
//!
//! # Example
//!
//! ```rust
//! use glossa_fts::{DocumentIndex, IndexEngineConfig, MemoryIndex, SearchRequest};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let mut index = MemoryIndex::new(IndexEngineConfig::default().for_language("en"));
//! index.add(json!({"id": 0, "name": "Norway", "description": "Fjords", "tags": ["travel"]}))?;
//!
//! let groups = index.search(&SearchRequest::text("norway")).await?;
//! assert_eq!(groups[0].result[0].id, 0);
//! # Ok::<(), glossa_core::Error>(())
//! # });
//! ```

use async_trait::async_trait;
use glossa_core::Result;
use serde_json::Value;

use crate::types::{HitGroup, SearchRequest, Shard};

/// Abstract document index.
///
/// Documents are JSON objects; the id, tag, and indexed field names come
/// from the index's [`IndexEngineConfig`](crate::IndexEngineConfig).
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    /// Index one document under its own id.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no numeric id or the id is
    /// already indexed.
    fn add(&mut self, document: Value) -> Result<()>;

    /// Execute a search.
    ///
    /// Free-text searches return one group per indexed field with matches;
    /// tag-only searches return one group per requested tag.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<HitGroup>>;

    /// Fetch a stored document by id.
    async fn get(&self, id: u64) -> Result<Option<Value>>;

    /// Serialize the index as ordered, named shards.
    fn export_shards(&self) -> Result<Vec<Shard>>;

    /// Load one previously exported shard.
    fn import_shard(&mut self, shard: &Shard) -> Result<()>;

    /// Returns `true` if a search combining free text and tags only sees the
    /// `[offset, offset + limit)` window of each field's text matches.
    ///
    /// Callers that need complete tag-filtered results probe successive
    /// windows when this is set.
    fn truncates_tag_filtered_queries(&self) -> bool {
        false
    }

    /// Number of indexed documents.
    fn len(&self) -> usize;

    /// Returns `true` if no documents are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index implementation name for diagnostics.
    fn name(&self) -> &str;
}
