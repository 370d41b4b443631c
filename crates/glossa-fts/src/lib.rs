//! Script-aware tokenization and shardable document indexes.
//!
//! # Features
//!
//! - `fts-tantivy`: Tantivy adapter for the Glossa tokenizers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      glossa-fts                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tokenizers (script-aware, CJK, default)                    │
//! │  IndexEngineConfig (per-language specialisation)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DocumentIndex trait                                        │
//! │  └── MemoryIndex (inverted maps, JSON shards)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IndexTokenizer (Tantivy adapter, feature-gated)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use glossa_fts::{DocumentIndex, IndexEngineConfig, MemoryIndex};
//! use serde_json::json;
//!
//! let config = IndexEngineConfig::default().for_language("ja");
//! let mut index = MemoryIndex::new(config);
//! index.add(json!({"id": 0, "name": "東京", "tags": ["travel"]})).unwrap();
//!
//! let shards = index.export_shards().unwrap();
//! assert_eq!(shards[0].name, "reg");
//! ```

// Core modules (always available)
pub mod backend;
pub mod memory;
pub mod tokenizer;
pub mod types;

// Feature-gated Tantivy modules
#[cfg(feature = "fts-tantivy")]
pub mod tantivy_tokenizer;

// Re-exports
pub use backend::DocumentIndex;
pub use memory::MemoryIndex;
pub use tokenizer::{tokenize, tokenize_cjk, tokenize_default, TokenizerKind};
pub use types::{Hit, HitGroup, IndexEngineConfig, SearchRequest, Shard, CONTENT_FIELD};

#[cfg(feature = "fts-tantivy")]
pub use tantivy_tokenizer::{register_tokenizers, IndexTokenizer};
