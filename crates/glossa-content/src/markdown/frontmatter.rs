//! YAML frontmatter extraction from markdown files.
//!
//! Collection pages carry their metadata at the start of the file, between
//! two lines consisting of `---`:
//!
//! ```markdown
//! ---
//! name: Norway
//! description: Fjords and northern lights
//! categories: travel, europe
//! enabled: true
//! ---
//!
//! # Norway
//! ```
//!
//! # Usage
//!
//! ```rust
//! use glossa_content::markdown::extract_frontmatter;
//!
//! let page = extract_frontmatter("---\nname: Norway\n---\nBody");
//!
//! assert!(page.value().is_some());
//! assert_eq!(page.body(), "Body");
//! ```

use glossa_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

const DELIMITER: &str = "---";

/// A page split into its frontmatter and body.
#[derive(Debug, Clone, PartialEq)]
pub enum Frontmatter<'a> {
    /// The file does not open with a closed `---` block.
    Absent {
        /// Whole file, minus a byte order mark.
        body: &'a str,
    },
    /// A closed block whose content is not YAML.
    Invalid {
        /// Text after the closing delimiter line.
        body: &'a str,
    },
    /// A parsed block.
    Parsed {
        /// YAML content; `Null` for an empty block.
        value: Value,
        /// Text after the closing delimiter line.
        body: &'a str,
    },
}

impl<'a> Frontmatter<'a> {
    /// Markdown after the frontmatter.
    pub fn body(&self) -> &'a str {
        match self {
            Frontmatter::Absent { body }
            | Frontmatter::Invalid { body }
            | Frontmatter::Parsed { body, .. } => body,
        }
    }

    /// Parsed YAML, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Frontmatter::Parsed { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if the file opened with a closed delimiter block.
    pub fn is_delimited(&self) -> bool {
        !matches!(self, Frontmatter::Absent { .. })
    }

    /// Deserialize the frontmatter.
    ///
    /// Returns `Ok(None)` for absent or invalid frontmatter; an empty block
    /// deserializes like an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the YAML does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let value = match self.value() {
            Some(Value::Null) => Value::Mapping(Default::default()),
            Some(value) => value.clone(),
            None => return Ok(None),
        };
        serde_yaml::from_value(value)
            .map(Some)
            .map_err(|e| Error::parse(format!("Invalid frontmatter: {e}")))
    }
}

/// Split `content` into the raw frontmatter block and the body.
///
/// Returns `None` unless the first line is `---` and a later line is `---`.
/// Trailing whitespace on delimiter lines is ignored.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Extract and parse the frontmatter of a page.
///
/// An unclosed block is treated as body text; a closed block with invalid
/// YAML is dropped with a warning.
pub fn extract_frontmatter(content: &str) -> Frontmatter<'_> {
    let Some((yaml, body)) = split_frontmatter(content) else {
        if content.trim_start_matches('\u{feff}').starts_with(DELIMITER) {
            log::warn!("Frontmatter opening delimiter found but no closing delimiter");
        }
        return Frontmatter::Absent {
            body: content.strip_prefix('\u{feff}').unwrap_or(content),
        };
    };

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => Frontmatter::Parsed { value, body },
        Err(e) => {
            log::warn!("Ignoring invalid frontmatter YAML: {e}");
            Frontmatter::Invalid { body }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
