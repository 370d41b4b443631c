//! Collection assembly.
//!
//! [`CollectionBuilder`] turns the markdown files of a site's collection
//! directory into one sorted, id-numbered [`LanguageCollection`] per enabled
//! language, together with the metadata listing pages need (head pages and
//! the category facet).
//!
//! # Usage
//!
//! ```rust,ignore
//! use glossa_collection::{CollectionBuilder, SiteConfig, SiteLayout};
//!
//! let layout = SiteLayout::new("my-site");
//! let config = SiteConfig::load(layout.root()).await?;
//! let result = CollectionBuilder::new(&config, &layout).build().await?;
//!
//! for collection in result.iter() {
//!     println!("{}: {} pages", collection.language, collection.metadata.size);
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::path::Path;

use chrono::{DateTime, Utc};
use glossa_content::parse_page;
use glossa_core::{has_language_suffix, list_files, Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::{collate, BuildOptions, SiteConfig, SiteLayout, SortKey, SortOrder};
use crate::language::LanguageData;
use crate::page::{Page, PageContext, PageSource};

/// One entry of the category facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    /// Category id.
    pub id: String,
    /// Localized label.
    pub label: String,
    /// Number of pages carrying the category.
    pub count: usize,
}

/// Listing metadata of one language's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    /// Number of pages.
    pub size: usize,
    /// Pages per listing page.
    pub pagination_size: usize,
    /// Sort attribute.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Minimum query length for runtime search.
    pub min_query_length: usize,
    /// First `pagination_size` pages, rendered before the index loads.
    pub head_pages: Vec<Page>,
    /// Every configured category with its page count, sorted by label.
    pub categories: Vec<CategoryFacet>,
}

/// Pages and metadata of one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCollection {
    /// Site language code.
    pub language: String,
    /// Pages in sort order; `pages[i].id == i`.
    pub pages: Vec<Page>,
    /// Listing metadata.
    pub metadata: CollectionMetadata,
}

/// Output of [`CollectionBuilder::build`], in enabled-language order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildCollectionResult {
    collections: Vec<LanguageCollection>,
}

impl BuildCollectionResult {
    /// Collections in enabled-language order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageCollection> {
        self.collections.iter()
    }

    /// Collection of one language.
    pub fn get(&self, language: &str) -> Option<&LanguageCollection> {
        self.collections.iter().find(|c| c.language == language)
    }

    /// Number of pages per language.
    pub fn sizes(&self) -> BTreeMap<String, usize> {
        self.collections
            .iter()
            .map(|c| (c.language.clone(), c.pages.len()))
            .collect()
    }

    /// Returns `true` if no language was built.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Statistics of one language build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStats {
    /// Markdown files for the language.
    pub files: usize,
    /// Pages admitted.
    pub admitted: usize,
    /// Files excluded by the admission gate or unreadable frontmatter.
    pub excluded: usize,
}

/// Builds per-language collections from a site's pages.
pub struct CollectionBuilder<'a> {
    config: &'a SiteConfig,
    layout: &'a SiteLayout,
    options: BuildOptions,
}

impl<'a> CollectionBuilder<'a> {
    /// Create a builder.
    pub fn new(config: &'a SiteConfig, layout: &'a SiteLayout) -> Self {
        Self {
            config,
            layout,
            options: BuildOptions::default(),
        }
    }

    /// Set per-run options.
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns `true` if this run builds the collection.
    pub fn is_active(&self) -> bool {
        self.config.collection.enabled && !self.options.ignore_collection
    }

    /// Build every enabled language.
    ///
    /// Pages that fail the admission gate are excluded, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or a language directory cannot be
    /// read, or a page names an unknown contributor.
    pub async fn build(&self) -> Result<BuildCollectionResult> {
        if !self.is_active() {
            log::info!("Collection disabled for this build, skipping");
            return Ok(BuildCollectionResult::default());
        }

        let collection_dir = self.layout.collection_dir(&self.config.collection);
        let files = list_files(&collection_dir).await?;
        log::debug!(
            "Found {} files in {}",
            files.len(),
            collection_dir.display()
        );

        let mut collections = Vec::with_capacity(self.config.languages.enabled.len());
        for language in &self.config.languages.enabled {
            let data = LanguageData::load(&self.layout.language_dir(language)).await?;
            let (collection, stats) = self
                .build_language(language, &collection_dir, &files, &data)
                .await?;
            log::info!(
                "Built collection '{}': {} pages ({} of {} files excluded)",
                language,
                stats.admitted,
                stats.excluded,
                stats.files
            );
            collections.push(collection);
        }

        Ok(BuildCollectionResult { collections })
    }

    async fn build_language(
        &self,
        language: &str,
        collection_dir: &Path,
        files: &[std::path::PathBuf],
        data: &LanguageData,
    ) -> Result<(LanguageCollection, LanguageStats)> {
        let collection = &self.config.collection;
        let ctx = PageContext {
            language,
            default_language: self.config.default_language(),
            data,
            index_content: collection.index.content,
        };

        let mut counts: HashMap<&str, usize> = collection
            .taxonomy
            .categories
            .iter()
            .map(|id| (id.as_str(), 0))
            .collect();
        let mut stats = LanguageStats::default();
        let mut pages = Vec::new();

        for rel_path in files.iter().filter(|p| {
            p.file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| has_language_suffix(name, language))
        }) {
            stats.files += 1;
            let path = collection_dir.join(rel_path);
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::io_with_path(e, &path))?;

            let parsed = match parse_page(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::warn!("Excluding {}: {}", rel_path.display(), e);
                    stats.excluded += 1;
                    continue;
                }
            };
            if !parsed.metadata.is_admitted() {
                log::debug!("Excluding {}: admission gate not met", rel_path.display());
                stats.excluded += 1;
                continue;
            }

            let modified = modified_time(&path).await?;
            let page = Page::assemble(
                PageSource {
                    rel_path: rel_path.as_path(),
                    metadata: &parsed.metadata,
                    body: &parsed.body,
                    modified,
                },
                ctx,
            )?;

            for tag in &page.tags {
                if let Some(count) = counts.get_mut(tag.as_str()) {
                    *count += 1;
                }
            }
            pages.push(page);
        }
        stats.admitted = pages.len();

        sort_pages(&mut pages, collection.sort.key, collection.sort.order);
        for (position, page) in pages.iter_mut().enumerate() {
            page.id = position as u64;
        }

        let mut categories: Vec<CategoryFacet> = collection
            .taxonomy
            .categories
            .iter()
            .map(|id| CategoryFacet {
                id: id.clone(),
                label: data.taxonomy.label(id).to_string(),
                count: counts.get(id.as_str()).copied().unwrap_or_default(),
            })
            .collect();
        categories.sort_by(|a, b| collate(&a.label, &b.label));

        let metadata = CollectionMetadata {
            size: pages.len(),
            pagination_size: collection.pagination.size,
            sort_key: collection.sort.key,
            sort_order: collection.sort.order,
            min_query_length: collection.search.min_query_length,
            head_pages: pages.iter().take(collection.pagination.size).cloned().collect(),
            categories,
        };

        Ok((
            LanguageCollection {
                language: language.to_string(),
                pages,
                metadata,
            },
            stats,
        ))
    }
}

impl std::fmt::Debug for CollectionBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionBuilder")
            .field("root", &self.layout.root())
            .field("languages", &self.config.languages.enabled)
            .field("options", &self.options)
            .finish()
    }
}

/// Stable sort by key and direction.
pub fn sort_pages(pages: &mut [Page], key: SortKey, order: SortOrder) {
    pages.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

async fn modified_time(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    let modified = metadata
        .modified()
        .map_err(|e| Error::io_with_path(e, path))?;
    Ok(DateTime::<Utc>::from(modified))
}

// ============================================================================
// Tests
// ============================================================================
