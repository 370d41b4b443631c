//! List parsing helpers for frontmatter values.

use std::collections::HashSet;

/// Parse a comma-separated list into trimmed, de-duplicated strings.
///
/// Order of first occurrence is preserved and empty entries are dropped.
///
/// # Example
///
/// ```rust
/// use glossa_content::markdown::helpers::parse_comma_list;
///
/// let items = parse_comma_list("travel, europe ,travel,, food");
/// assert_eq!(items, vec!["travel", "europe", "food"]);
/// ```
pub fn parse_comma_list(input: &str) -> Vec<String> {
    dedup_trimmed(input.split(','))
}

/// Trim every item, drop empty ones, and keep the first occurrence of each.
pub fn dedup_trimmed<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(*s))
        .map(String::from)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list_basic() {
        assert_eq!(
            parse_comma_list("apple, banana, cherry"),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_parse_comma_list_keeps_first_occurrence() {
        assert_eq!(parse_comma_list("b, a, b, c, a"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_comma_list_does_not_split_on_words() {
        // Category ids may contain "and"/"or" or semicolons.
        assert_eq!(
            parse_comma_list("rock and roll; live, pop"),
            vec!["rock and roll; live", "pop"]
        );
    }

    #[test]
    fn test_parse_comma_list_empty() {
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,").is_empty());
    }

    #[test]
    fn test_dedup_trimmed_unicode() {
        let items = dedup_trimmed(["旅行", " 旅行 ", "食べ物"]);
        assert_eq!(items, vec!["旅行", "食べ物"]);
    }
}
