//! Frontmatter extraction, page metadata, and markdown text utilities.
//!
//! This crate is the parser side of collection assembly: it splits a page
//! into [`PageMetadata`] and body, and reduces the body to the plain text
//! that is stored for full-text indexing.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter extraction
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction
//!   - [`markdown::parser`]: Plain text extraction
//!   - [`markdown::helpers`]: Comma list parsing
//! - [`metadata`]: Collection page metadata and the admission gate
//!
//! # Example
//!
//! ```rust
//! use glossa_content::{index_text, parse_page};
//!
//! let source = "---\nname: Norway\nenabled: true\ncategories: travel\n---\n# Fjords!";
//! let page = parse_page(source).unwrap();
//!
//! assert!(page.metadata.is_admitted());
//! assert_eq!(page.metadata.category_ids(), vec!["travel"]);
//! assert_eq!(index_text(&page.body), "Fjords");
//! ```

pub mod markdown;
pub mod metadata;

// Re-export commonly used types
pub use markdown::{
    dedup_trimmed, extract_frontmatter, extract_text_content, index_text, parse_comma_list,
    split_frontmatter, Frontmatter,
};
pub use metadata::{parse_page, Categories, PageMetadata, ParsedPage};
