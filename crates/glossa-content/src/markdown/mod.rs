//! Markdown parsing and frontmatter extraction utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`parser`]: Markdown to plain text for indexing
//! - [`helpers`]: Comma list parsing

pub mod frontmatter;
pub mod helpers;
pub mod parser;

pub use frontmatter::{extract_frontmatter, split_frontmatter, Frontmatter};
pub use helpers::{dedup_trimmed, parse_comma_list};
pub use parser::{extract_text_content, index_text};
