//! Path and URL normalization helpers.
//!
//! Content files live at paths like `europe/norway/index.en.md`. The page's
//! URL is its directory (`europe/norway`), always with forward slashes, and
//! the language is encoded in the `.{language}.md` suffix.

use std::path::Path;

/// Compute the content-relative URL of a page from its relative file path.
///
/// Returns the parent directory with backslashes converted to forward
/// slashes. A file at the collection root yields `"."`, matching the
/// behavior of a POSIX `dirname`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use glossa_core::util::paths::rel_url;
///
/// assert_eq!(rel_url(Path::new("europe/norway/index.en.md")), "europe/norway");
/// assert_eq!(rel_url(Path::new("index.en.md")), ".");
/// ```
pub fn rel_url(rel_path: &Path) -> String {
    let parent = rel_path
        .parent()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();
    if parent.is_empty() {
        ".".to_string()
    } else {
        parent
    }
}

/// Returns `true` if the file name is a markdown file for the given language.
///
/// Only the file name is lower-cased: `Index.EN.md` matches `en`, while a
/// language code is compared exactly as configured.
pub fn has_language_suffix(file_name: &str, language: &str) -> bool {
    file_name
        .to_lowercase()
        .ends_with(&format!(".{language}.md"))
}

/// Normalize one URL path segment: lower-case, whitespace runs become `-`.
///
/// # Examples
///
/// ```
/// use glossa_core::util::paths::url_segment;
///
/// assert_eq!(url_segment("About  Us"), "about-us");
/// assert_eq!(url_segment("team"), "team");
/// ```
pub fn url_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_space = false;
    for c in segment.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }
    out
}
