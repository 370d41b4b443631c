//! Language code normalization for index configuration.
//!
//! Collections are keyed by the site's language codes (`en`, `ja`, `zh-tw`,
//! ...). The index engine is configured with a normalized tag derived from an
//! ISO 639 → ISO 3166 style lookup. Build time and query time must resolve
//! the same tag, so both go through [`index_language`].

/// ISO 639 codes (and regional variants) mapped to the tag used by the index.
pub const ISO_639_3166_LOOKUP: &[(&str, &str)] = &[
    ("en", "en"),
    ("eng", "en"),
    ("ja", "jp"),
    ("jpn", "jp"),
    ("ko", "kr"),
    ("kor", "kr"),
    ("zh", "cn"),
    ("zh-hk", "cn"),
    ("zh-tw", "cn"),
];

/// Index language tags whose text is not space-delimited.
pub const CJK_LANGUAGE_TAGS: &[&str] = &["jp", "kr", "cn"];

/// Resolve the index language tag for a site language code.
///
/// Codes absent from [`ISO_639_3166_LOOKUP`] map to themselves.
pub fn index_language(code: &str) -> &str {
    ISO_639_3166_LOOKUP
        .iter()
        .find(|(iso639, _)| *iso639 == code)
        .map(|(_, tag)| *tag)
        .unwrap_or(code)
}

/// Returns `true` if the resolved index tag belongs to the CJK set.
pub fn is_cjk_tag(tag: &str) -> bool {
    CJK_LANGUAGE_TAGS.contains(&tag)
}
