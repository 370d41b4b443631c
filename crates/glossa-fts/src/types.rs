//! Common types for document indexes.
//!
//! These types are shared by every [`DocumentIndex`](crate::DocumentIndex)
//! implementation and by the runtime query engine.

use glossa_core::{index_language, is_cjk_tag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tokenizer::TokenizerKind;

/// Name of the optional plain-text body field.
pub const CONTENT_FIELD: &str = "content";

/// Document index configuration.
///
/// The same configuration must be used to build an index and to import its
/// shards at query time; [`IndexEngineConfig::for_language`] is the single
/// place where a base configuration is specialised for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEngineConfig {
    /// Normalized index language tag (`en`, `jp`, `cn`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Encoder applied to indexed fields and queries.
    #[serde(default)]
    pub tokenizer: TokenizerKind,

    /// Document field holding the numeric id.
    #[serde(default = "default_id_field")]
    pub id: String,

    /// Document field holding the tag list.
    #[serde(default = "default_tag_field")]
    pub tag: String,

    /// Full-text indexed fields, in query order.
    #[serde(default = "default_index_fields")]
    pub index: Vec<String>,

    /// Keep whole documents so hits and lookups can be enriched.
    #[serde(default = "default_true")]
    pub store: bool,
}

fn default_id_field() -> String {
    "id".to_string()
}

fn default_tag_field() -> String {
    "tags".to_string()
}

fn default_index_fields() -> Vec<String> {
    vec!["name".to_string(), "description".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for IndexEngineConfig {
    fn default() -> Self {
        Self {
            language: None,
            tokenizer: TokenizerKind::default(),
            id: default_id_field(),
            tag: default_tag_field(),
            index: default_index_fields(),
            store: default_true(),
        }
    }
}

impl IndexEngineConfig {
    /// Specialise this configuration for a site language code.
    ///
    /// The code is mapped to its index language tag and, for CJK tags, the
    /// CJK tokenizer replaces the configured one.
    pub fn for_language(&self, language: &str) -> Self {
        let tag = index_language(language);
        let mut config = self.clone();
        if is_cjk_tag(tag) {
            config.tokenizer = TokenizerKind::Cjk;
        }
        config.language = Some(tag.to_string());
        config
    }

    /// Append the `content` field when content indexing is enabled.
    pub fn with_content(mut self, enabled: bool) -> Self {
        if enabled && !self.index.iter().any(|f| f == CONTENT_FIELD) {
            self.index.push(CONTENT_FIELD.to_string());
        }
        self
    }
}

/// A search against a document index.
///
/// Free text and tags may be combined. `offset` and `limit` apply to each
/// returned [`HitGroup`] separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, tokenized by the index.
    pub query: Option<String>,
    /// Tag filter; a document matches if it carries any of these tags.
    pub tags: Vec<String>,
    /// Hits to skip per group.
    pub offset: usize,
    /// Maximum hits per group.
    pub limit: usize,
}

impl SearchRequest {
    /// Free-text search.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            limit: 10,
            ..Default::default()
        }
    }

    /// Tag-only search.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            limit: 10,
            ..Default::default()
        }
    }

    /// Add a tag filter.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-group window.
    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// One matching document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Document id.
    pub id: u64,
    /// Stored document, when the index keeps documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<Value>,
}

/// Hits produced by one indexed field or one tag.
///
/// The same document can appear in several groups of one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitGroup {
    /// Field that matched, or the tag field for tag searches.
    pub field: String,
    /// Tag value for tag-only searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Matching documents in index order.
    pub result: Vec<Hit>,
}

/// A named, independently serialized fragment of an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    /// Shard name, used as the file stem when exported.
    pub name: String,
    /// JSON text of the shard.
    pub data: String,
}

impl Shard {
    /// Create a shard.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
