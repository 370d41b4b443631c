//! The Page model.
//!
//! A [`Page`] is the document stored in the collection index and handed to
//! the presentation layer, so it serializes with camelCase field names.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use glossa_content::{index_text, PageMetadata};
use glossa_core::{rel_url, Error, Result};
use serde::{Deserialize, Serialize};

use crate::language::LanguageData;
use crate::urls::resolve_url_placeholders;

/// Format of [`Page::display_date`], e.g. `1 April 2023`.
pub const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A category id with its label in the page's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    /// Category id.
    pub id: String,
    /// Localized label, or the id when the taxonomy has none.
    pub label: String,
}

/// One admitted collection page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Position in the sorted collection of its language.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Category ids, used as index tags.
    pub tags: Vec<String>,
    /// Category ids with localized labels.
    pub category_labels: Vec<CategoryLabel>,
    /// Publication date.
    pub date: DateTime<Utc>,
    /// Publication date for display.
    pub display_date: String,
    /// Directory of the page relative to the collection root.
    pub rel_url: String,
    /// Cover image, if any.
    pub cover: Option<String>,
    /// Whether the frontmatter names a cover image.
    pub cover_exists: bool,
    /// Author name.
    pub author: String,
    /// Author URL with placeholders resolved.
    pub author_url: String,
    /// Plain-text body, when content indexing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Language-level inputs shared by every page of one language.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Language being built.
    pub language: &'a str,
    /// First enabled language, which has no URL prefix.
    pub default_language: &'a str,
    /// Contributors and taxonomy of `language`.
    pub data: &'a LanguageData,
    /// Keep the plain-text body on each page.
    pub index_content: bool,
}

/// Source of one admitted page.
#[derive(Debug, Clone, Copy)]
pub struct PageSource<'a> {
    /// Path relative to the collection root.
    pub rel_path: &'a Path,
    /// Parsed frontmatter; must already pass the admission gate.
    pub metadata: &'a PageMetadata,
    /// Markdown body.
    pub body: &'a str,
    /// File modification time, the fallback publication date.
    pub modified: DateTime<Utc>,
}

impl Page {
    /// Build a page with a placeholder id of 0.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the page's author (or the
    /// language's default author) is not in the contributor table.
    pub fn assemble(source: PageSource<'_>, ctx: PageContext<'_>) -> Result<Self> {
        let metadata = source.metadata;

        let tags = metadata.category_ids();
        let category_labels = tags
            .iter()
            .map(|id| CategoryLabel {
                id: id.clone(),
                label: ctx.data.taxonomy.label(id).to_string(),
            })
            .collect();

        let date = metadata
            .date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .and_then(|raw| {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    log::warn!(
                        "Unparseable date '{}' in {}, using modification time",
                        raw,
                        source.rel_path.display()
                    );
                }
                parsed
            })
            .unwrap_or(source.modified);

        let author_id = metadata
            .author_id
            .as_deref()
            .unwrap_or_else(|| ctx.data.contributors.default_id());
        let author = ctx.data.contributors.get(author_id).ok_or_else(|| {
            Error::config(format!(
                "contributor '{}' is not defined for language '{}' (page {})",
                author_id,
                ctx.language,
                source.rel_path.display()
            ))
        })?;

        Ok(Self {
            id: 0,
            name: metadata.name.clone().unwrap_or_default(),
            description: metadata.description.clone().unwrap_or_default(),
            tags,
            category_labels,
            date,
            display_date: display_date(&date),
            rel_url: rel_url(source.rel_path),
            cover: metadata.cover.clone(),
            cover_exists: metadata.has_cover(),
            author: author.name.clone(),
            author_url: resolve_url_placeholders(ctx.language, ctx.default_language, &author.url),
            content: ctx.index_content.then(|| index_text(source.body)),
        })
    }
}

/// Parse a frontmatter date as UTC.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS`, the same
/// with a `T` separator, and RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a date as `{day} {MonthName} {year}`.
pub fn display_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

// ============================================================================
// Tests
// ============================================================================
