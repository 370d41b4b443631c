//! Query sanitization and hit deduplication.

use std::collections::HashSet;
use std::sync::LazyLock;

use glossa_fts::{Hit, HitGroup};
use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\-\s]").expect("Invalid sanitization regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Strip everything but letters, numbers, `_`, `-` and whitespace, then
/// collapse whitespace runs and trim.
///
/// ```rust
/// use glossa_query::sanitize_query;
///
/// assert_eq!(sanitize_query("café!!  núñez"), "café núñez");
/// assert_eq!(sanitize_query("  東京?タワー "), "東京タワー");
/// ```
pub fn sanitize_query(text: &str) -> String {
    let kept = DISALLOWED.replace_all(text, "");
    WHITESPACE_RUN.replace_all(&kept, " ").trim().to_string()
}

/// Flatten hit groups into distinct hits.
///
/// Groups are visited in order, then hits within a group; the first
/// occurrence of an id wins.
pub fn dedup_hits(groups: &[HitGroup]) -> Vec<Hit> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|group| group.result.iter())
        .filter(|hit| seen.insert(hit.id))
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
