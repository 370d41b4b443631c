//! In-memory document index.
//!
//! [`MemoryIndex`] keeps an inverted token map per indexed field, a tag map,
//! an id registry, and (optionally) the documents themselves. It exports to
//! and imports from these shards, in this order:
//!
//! | Shard | Contents |
//! |-------|----------|
//! | `reg` | document ids in insertion order |
//! | `store` | id → document (only when `store` is enabled) |
//! | `tag` | tag → ids |
//! | `{field}.map` | token → ids, one per indexed field |
//!
//! Text matching is conjunctive: a document matches a field when the field
//! contains every query token. Hits are returned in insertion order.
//!
//! # Combined text and tag searches
//!
//! By default a search that combines text with a tag filter windows each
//! field's text matches to `[offset, offset + limit)` *before* applying the
//! tag filter, so matches outside the window are never seen. The index
//! reports this through
//! [`DocumentIndex::truncates_tag_filtered_queries`]; use
//! [`MemoryIndex::with_windowed_tag_filter`] to filter first instead.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use glossa_core::{Error, Result};
use serde_json::Value;

use crate::backend::DocumentIndex;
use crate::types::{Hit, HitGroup, IndexEngineConfig, SearchRequest, Shard};

const REGISTRY_SHARD: &str = "reg";
const STORE_SHARD: &str = "store";
const TAG_SHARD: &str = "tag";
const FIELD_SHARD_SUFFIX: &str = ".map";

type PostingMap = BTreeMap<String, Vec<u64>>;

/// In-memory [`DocumentIndex`] with JSON shard export.
pub struct MemoryIndex {
    config: IndexEngineConfig,
    registry: Vec<u64>,
    registered: HashSet<u64>,
    store: BTreeMap<u64, Value>,
    tags: PostingMap,
    fields: BTreeMap<String, PostingMap>,
    windowed_tag_filter: bool,
}

impl MemoryIndex {
    /// Create an empty index.
    pub fn new(config: IndexEngineConfig) -> Self {
        let fields = config
            .index
            .iter()
            .map(|field| (field.clone(), PostingMap::new()))
            .collect();
        Self {
            config,
            registry: Vec::new(),
            registered: HashSet::new(),
            store: BTreeMap::new(),
            tags: PostingMap::new(),
            fields,
            windowed_tag_filter: true,
        }
    }

    /// Choose whether combined text and tag searches are windowed before the
    /// tag filter is applied (the default) or after.
    pub fn with_windowed_tag_filter(mut self, windowed: bool) -> Self {
        self.windowed_tag_filter = windowed;
        self
    }

    /// Get the index configuration.
    pub fn config(&self) -> &IndexEngineConfig {
        &self.config
    }

    /// Names of the shards [`export_shards`](DocumentIndex::export_shards)
    /// produces for this configuration.
    pub fn shard_names(&self) -> Vec<String> {
        let mut names = vec![REGISTRY_SHARD.to_string()];
        if self.config.store {
            names.push(STORE_SHARD.to_string());
        }
        names.push(TAG_SHARD.to_string());
        names.extend(
            self.config
                .index
                .iter()
                .map(|field| format!("{field}{FIELD_SHARD_SUFFIX}")),
        );
        names
    }

    fn query_tokens(&self, query: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.config
            .tokenizer
            .tokenize(query)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    /// Ids whose `field` contains every token, in insertion order.
    fn field_matches(&self, field: &str, tokens: &[String]) -> Vec<u64> {
        let Some(postings) = self.fields.get(field) else {
            return Vec::new();
        };
        let mut lists = Vec::with_capacity(tokens.len());
        for token in tokens {
            match postings.get(token) {
                Some(ids) => lists.push(ids),
                None => return Vec::new(),
            }
        }
        let Some((first, rest)) = lists.split_first() else {
            return Vec::new();
        };
        let rest: Vec<HashSet<u64>> = rest.iter().map(|ids| ids.iter().copied().collect()).collect();
        first
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|set| set.contains(id)))
            .collect()
    }

    fn tagged_ids(&self, tags: &[String]) -> HashSet<u64> {
        tags.iter()
            .filter_map(|tag| self.tags.get(tag))
            .flatten()
            .copied()
            .collect()
    }

    fn hit(&self, id: u64) -> Hit {
        Hit {
            id,
            doc: self.store.get(&id).cloned(),
        }
    }

    fn group(&self, field: &str, tag: Option<&str>, ids: impl Iterator<Item = u64>) -> HitGroup {
        HitGroup {
            field: field.to_string(),
            tag: tag.map(str::to_string),
            result: ids.map(|id| self.hit(id)).collect(),
        }
    }

    fn text_search(&self, tokens: &[String], request: &SearchRequest) -> Vec<HitGroup> {
        let filter = (!request.tags.is_empty()).then(|| self.tagged_ids(&request.tags));

        self.config
            .index
            .iter()
            .filter_map(|field| {
                let matches = self.field_matches(field, tokens);
                let ids: Vec<u64> = match &filter {
                    None => window(matches, request).collect(),
                    Some(tagged) if self.windowed_tag_filter => window(matches, request)
                        .filter(|id| tagged.contains(id))
                        .collect(),
                    Some(tagged) => {
                        let filtered = matches.into_iter().filter(|id| tagged.contains(id));
                        filtered.skip(request.offset).take(request.limit).collect()
                    }
                };
                (!ids.is_empty()).then(|| self.group(field, None, ids.into_iter()))
            })
            .collect()
    }

    fn tag_search(&self, request: &SearchRequest) -> Vec<HitGroup> {
        request
            .tags
            .iter()
            .filter_map(|tag| {
                let ids = self.tags.get(tag)?;
                let windowed = window(ids.clone(), request);
                let group = self.group(&self.config.tag, Some(tag), windowed);
                (!group.result.is_empty()).then_some(group)
            })
            .collect()
    }

    fn document_id(&self, document: &Value) -> Result<u64> {
        document
            .get(&self.config.id)
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                Error::parse(format!(
                    "document has no numeric '{}' field",
                    self.config.id
                ))
            })
    }

    fn parse_shard<T: serde::de::DeserializeOwned>(shard: &Shard) -> Result<T> {
        serde_json::from_str(&shard.data)
            .map_err(|e| Error::parse(format!("invalid shard '{}': {e}", shard.name)))
    }
}

fn window(ids: Vec<u64>, request: &SearchRequest) -> impl Iterator<Item = u64> {
    ids.into_iter().skip(request.offset).take(request.limit)
}

/// Text of a document field: strings as-is, arrays joined with spaces,
/// numbers formatted.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(field_text).collect();
            Some(parts.join(" "))
        }
        _ => None,
    }
}

fn document_tags(value: Option<&Value>) -> Vec<String> {
    let tags: Vec<&str> = match value {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty() && seen.insert(*t))
        .map(String::from)
        .collect()
}

fn push_posting(postings: &mut PostingMap, key: String, id: u64) {
    let ids = postings.entry(key).or_default();
    if ids.last() != Some(&id) {
        ids.push(id);
    }
}

#[async_trait]
impl DocumentIndex for MemoryIndex {
    fn add(&mut self, document: Value) -> Result<()> {
        let id = self.document_id(&document)?;
        if !self.registered.insert(id) {
            return Err(Error::operation(format!("document {id} is already indexed")));
        }
        self.registry.push(id);

        for tag in document_tags(document.get(&self.config.tag)) {
            push_posting(&mut self.tags, tag, id);
        }

        let tokenizer = self.config.tokenizer;
        for (field, postings) in self.fields.iter_mut() {
            let Some(text) = document.get(field).and_then(field_text) else {
                continue;
            };
            let mut seen = HashSet::new();
            for token in tokenizer.tokenize(&text) {
                if seen.insert(token.clone()) {
                    push_posting(postings, token, id);
                }
            }
        }

        if self.config.store {
            self.store.insert(id, document);
        }
        Ok(())
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<HitGroup>> {
        let groups = match request.query.as_deref() {
            Some(query) => {
                let tokens = self.query_tokens(query);
                if tokens.is_empty() {
                    Vec::new()
                } else {
                    self.text_search(&tokens, request)
                }
            }
            None if !request.tags.is_empty() => self.tag_search(request),
            None => Vec::new(),
        };
        log::debug!(
            "MemoryIndex: query={:?}, tags={:?}, window=[{}, +{}), groups={}",
            request.query,
            request.tags,
            request.offset,
            request.limit,
            groups.len()
        );
        Ok(groups)
    }

    async fn get(&self, id: u64) -> Result<Option<Value>> {
        Ok(self.store.get(&id).cloned())
    }

    fn export_shards(&self) -> Result<Vec<Shard>> {
        let mut shards = vec![Shard::new(
            REGISTRY_SHARD,
            serde_json::to_string(&self.registry)?,
        )];
        if self.config.store {
            shards.push(Shard::new(STORE_SHARD, serde_json::to_string(&self.store)?));
        }
        shards.push(Shard::new(TAG_SHARD, serde_json::to_string(&self.tags)?));
        for field in &self.config.index {
            let postings = self.fields.get(field).cloned().unwrap_or_default();
            shards.push(Shard::new(
                format!("{field}{FIELD_SHARD_SUFFIX}"),
                serde_json::to_string(&postings)?,
            ));
        }
        Ok(shards)
    }

    fn import_shard(&mut self, shard: &Shard) -> Result<()> {
        match shard.name.as_str() {
            REGISTRY_SHARD => {
                self.registry = Self::parse_shard(shard)?;
                self.registered = self.registry.iter().copied().collect();
            }
            STORE_SHARD if self.config.store => {
                self.store = Self::parse_shard(shard)?;
            }
            TAG_SHARD => {
                self.tags = Self::parse_shard(shard)?;
            }
            name => {
                let field = name
                    .strip_suffix(FIELD_SHARD_SUFFIX)
                    .filter(|field| self.fields.contains_key(*field))
                    .ok_or_else(|| {
                        Error::config(format!(
                            "shard '{name}' does not match the index configuration"
                        ))
                    })?
                    .to_string();
                let postings = Self::parse_shard(shard)?;
                self.fields.insert(field, postings);
            }
        }
        Ok(())
    }

    fn truncates_tag_filtered_queries(&self) -> bool {
        self.windowed_tag_filter
    }

    fn len(&self) -> usize {
        self.registry.len()
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for MemoryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryIndex")
            .field("language", &self.config.language)
            .field("tokenizer", &self.config.tokenizer)
            .field("documents", &self.registry.len())
            .field("windowed_tag_filter", &self.windowed_tag_filter)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
