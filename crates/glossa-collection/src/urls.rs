//! `${pages.urls.…}` placeholder resolution.
//!
//! Contributor URLs may point at site pages through placeholders such as
//! `${pages.urls.about.team}`. They resolve to a path under the language
//! prefix, which is empty for the default language:
//!
//! ```rust
//! use glossa_collection::urls::resolve_url_placeholders;
//!
//! assert_eq!(resolve_url_placeholders("en", "en", "${pages.urls.about}"), "/about");
//! assert_eq!(resolve_url_placeholders("ja", "en", "${pages.urls.about}"), "/ja/about");
//! assert_eq!(resolve_url_placeholders("ja", "en", "${pages.urls.home}"), "/ja/");
//! ```

use std::sync::LazyLock;

use glossa_core::url_segment;
use regex::{Captures, Regex};

static PAGES_URLS_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\{pages\.urls\.([^}]+)\}").expect("Invalid placeholder regex")
});

/// Path prefix of a language: empty for the default language.
pub fn language_prefix(language: &str, default_language: &str) -> String {
    if language == default_language {
        String::new()
    } else {
        format!("/{language}")
    }
}

/// Replace every `${pages.urls.a.b}` in `text` with `{prefix}/a/b`.
///
/// Path parts are lower-cased with whitespace runs turned into `-`; the
/// single part `home` resolves to `{prefix}/`.
pub fn resolve_url_placeholders(language: &str, default_language: &str, text: &str) -> String {
    let prefix = language_prefix(language, default_language);
    PAGES_URLS_PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            let parts: Vec<String> = caps[1].split('.').map(url_segment).collect();
            if parts.len() == 1 && parts[0] == "home" {
                format!("{prefix}/")
            } else {
                format!("{prefix}/{}", parts.join("/"))
            }
        })
        .into_owned()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_prefix() {
        assert_eq!(language_prefix("en", "en"), "");
        assert_eq!(language_prefix("zh-tw", "en"), "/zh-tw");
    }

    #[test]
    fn test_nested_placeholder() {
        assert_eq!(
            resolve_url_placeholders("en", "en", "${pages.urls.about.Our Team}"),
            "/about/our-team"
        );
    }

    #[test]
    fn test_placeholder_embedded_in_text() {
        let text = "https://example.com${pages.urls.blog}#top and ${pages.urls.blog}";
        assert_eq!(
            resolve_url_placeholders("ja", "en", text),
            "https://example.com/ja/blog#top and /ja/blog"
        );
    }

    #[test]
    fn test_home_placeholder() {
        assert_eq!(resolve_url_placeholders("en", "en", "${pages.urls.home}"), "/");
        assert_eq!(resolve_url_placeholders("en", "en", "${pages.urls.home.x}"), "/home/x");
    }

    #[test]
    fn test_other_namespaces_untouched() {
        let text = "${page.metadata.name} https://example.com/jill";
        assert_eq!(resolve_url_placeholders("ja", "en", text), text);
    }
}
