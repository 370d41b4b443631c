//! Per-language site data: contributors and category taxonomy.
//!
//! Every `*.json` file in `{site}/languages/{language}/` is read and their
//! top-level keys are merged (later files win). The merged object must hold:
//!
//! ```json
//! {
//!   "contributors": {
//!     "default": "jill",
//!     "jill": { "name": "Jill", "url": "${pages.urls.about}" }
//!   },
//!   "taxonomy": {
//!     "categories": { "travel": "Travel", "food": "Food" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use glossa_core::{list_files, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name.
    pub name: String,
    /// Profile URL; may contain `${pages.urls.…}` placeholders.
    #[serde(default)]
    pub url: String,
}

/// Contributors of one language, with the id used when a page names none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ContributorTable {
    default: String,
    contributors: BTreeMap<String, Contributor>,
}

impl TryFrom<Map<String, Value>> for ContributorTable {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let default = match map.remove("default") {
            Some(Value::String(id)) => id,
            Some(_) => return Err("contributors.default must be a string".to_string()),
            None => return Err("contributors.default is missing".to_string()),
        };
        let contributors = map
            .into_iter()
            .map(|(id, value)| {
                serde_json::from_value::<Contributor>(value)
                    .map(|c| (id.clone(), c))
                    .map_err(|e| format!("contributor '{id}': {e}"))
            })
            .collect::<std::result::Result<_, _>>()?;
        Ok(Self {
            default,
            contributors,
        })
    }
}

impl ContributorTable {
    /// Build a table from a default id and contributors.
    pub fn new<I>(default: impl Into<String>, contributors: I) -> Self
    where
        I: IntoIterator<Item = (String, Contributor)>,
    {
        Self {
            default: default.into(),
            contributors: contributors.into_iter().collect(),
        }
    }

    /// Id of the default contributor.
    pub fn default_id(&self) -> &str {
        &self.default
    }

    /// Look up a contributor.
    pub fn get(&self, id: &str) -> Option<&Contributor> {
        self.contributors.get(id)
    }
}

/// Category labels of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Category id → label.
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

impl Taxonomy {
    /// Label of a category, falling back to the id.
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories.get(id).map(String::as_str).unwrap_or(id)
    }
}

/// Merged language data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageData {
    /// Contributors.
    pub contributors: ContributorTable,
    /// Category taxonomy.
    #[serde(default)]
    pub taxonomy: Taxonomy,
}

impl LanguageData {
    /// Load and merge every JSON file in a language directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist, a file is not a JSON
    /// object, or the merged data has no valid contributor table.
    pub async fn load(dir: &Path) -> Result<Self> {
        let mut merged = Map::new();
        let files = list_files(dir).await?;

        for rel in files
            .iter()
            .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
        {
            let path = dir.join(rel);
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::io_with_path(e, &path))?;
            match serde_json::from_str::<Value>(&content)? {
                Value::Object(object) => merged.extend(object),
                _ => {
                    return Err(Error::parse(format!(
                        "{} must contain a JSON object",
                        path.display()
                    )));
                }
            }
        }

        serde_json::from_value(Value::Object(merged)).map_err(|e| {
            Error::config(format!("Invalid language data in {}: {e}", dir.display()))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
