//! Collection page metadata parsed from frontmatter.
//!
//! Every field is optional: a page that lacks `name`, is not explicitly
//! `enabled`, or opts out with `index: false` is simply not admitted to the
//! collection. Scalar YAML values are normalized to strings, so
//! `enabled: true` and `enabled: "true"` mean the same thing.
//!
//! ```rust
//! use glossa_content::parse_page;
//!
//! let page = parse_page("---\nname: Norway\nenabled: true\n---\nBody").unwrap();
//! assert!(page.metadata.is_admitted());
//! assert_eq!(page.body, "Body");
//! ```

use glossa_core::Result;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::markdown::frontmatter::extract_frontmatter;
use crate::markdown::helpers::{dedup_trimmed, parse_comma_list};

/// Categories as written in frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    /// `categories: travel, europe`
    Text(String),
    /// `categories: [travel, europe]`
    List(Vec<String>),
}

/// Frontmatter of one collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMetadata {
    /// Display name; required for admission.
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: Option<String>,

    /// Short description shown in listings.
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: Option<String>,

    /// Category ids, doubling as the page's index tags.
    #[serde(default)]
    pub categories: Option<Categories>,

    /// Publication date, e.g. `2024-03-01 09:30:00`.
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: Option<String>,

    /// Cover image path relative to the page directory.
    #[serde(default, deserialize_with = "scalar_string")]
    pub cover: Option<String>,

    /// Contributor id overriding the language's default author.
    #[serde(default, rename = "authorId", deserialize_with = "scalar_string")]
    pub author_id: Option<String>,

    /// Must be `"true"` for the page to be built.
    #[serde(default, deserialize_with = "scalar_string")]
    pub enabled: Option<String>,

    /// When present, must be `"true"` for the page to be indexed.
    #[serde(default, deserialize_with = "scalar_string")]
    pub index: Option<String>,
}

impl PageMetadata {
    /// Check the admission gate.
    ///
    /// All of the following must hold:
    /// - `name` is present and non-empty
    /// - `enabled == "true"`
    /// - `index` is absent or `"true"`
    pub fn is_admitted(&self) -> bool {
        let named = self.name.as_deref().is_some_and(|n| !n.is_empty());
        let enabled = self.enabled.as_deref() == Some("true");
        let indexed = self.index.as_deref().is_none_or(|i| i == "true");
        named && enabled && indexed
    }

    /// Category ids: trimmed, de-duplicated, first-occurrence order.
    pub fn category_ids(&self) -> Vec<String> {
        match &self.categories {
            Some(Categories::Text(text)) => parse_comma_list(text),
            Some(Categories::List(items)) => dedup_trimmed(items.iter().map(String::as_str)),
            None => Vec::new(),
        }
    }

    /// Returns `true` if the frontmatter names a cover image.
    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }
}

/// A markdown page split into metadata and body.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Parsed frontmatter; default (not admitted) when absent.
    pub metadata: PageMetadata,
    /// Markdown after the frontmatter block.
    pub body: String,
}

/// Parse frontmatter and body of a collection page.
///
/// # Errors
///
/// Returns a parse error if the frontmatter is valid YAML but does not fit
/// [`PageMetadata`] (for example a mapping where a string is expected).
pub fn parse_page(content: &str) -> Result<ParsedPage> {
    let frontmatter = extract_frontmatter(content);
    let metadata = frontmatter.deserialize::<PageMetadata>()?.unwrap_or_default();
    Ok(ParsedPage {
        metadata,
        body: frontmatter.body().to_string(),
    })
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}
