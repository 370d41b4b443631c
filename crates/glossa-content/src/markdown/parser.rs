//! Markdown to plain text conversion for content indexing.
//!
//! The collection index optionally stores a page's body as plain text. The
//! body is walked with `pulldown-cmark`, markup is dropped, and the result is
//! reduced to a single line of words:
//!
//! ```rust
//! use glossa_content::markdown::parser::index_text;
//!
//! let body = "# Norway\n\nFjords, *glaciers* and the (northern) lights.";
//! assert_eq!(index_text(body), "Norway Fjords glaciers and the northern lights");
//! ```

use std::sync::LazyLock;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("Invalid line break regex"));

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.,/#!$%\^&*;:{}=\-_`~()]").expect("Invalid punctuation regex")
});

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("Invalid whitespace regex"));

static HTML_HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("Invalid hidden HTML regex")
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Extract plain text content from markdown, stripping all formatting.
///
/// Emphasis, links, images and raw HTML tags are removed; the text of
/// headings, paragraphs, list items, inline code, code blocks and HTML
/// elements is kept. Comments, scripts and styles are dropped with their
/// content. Block boundaries become line breaks.
///
/// # Example
///
/// ```rust
/// use glossa_content::markdown::parser::extract_text_content;
///
/// let content = "# Title\n\nSome **bold** and *italic* text.";
/// let text = extract_text_content(content);
/// assert!(text.contains("Title"));
/// assert!(text.contains("Some bold and italic text."));
/// assert!(!text.contains('*'));
/// ```
pub fn extract_text_content(content: &str) -> String {
    let parser = Parser::new(content);
    let mut text_content = String::new();
    let mut html_block = String::new();

    for event in parser {
        if let Event::Html(html) = &event {
            html_block.push_str(html);
            continue;
        }
        flush_html_block(&mut text_content, &mut html_block);

        match event {
            Event::InlineHtml(html) => {
                text_content.push_str(&strip_html(&html, ""));
            }
            Event::Text(text) | Event::Code(text) => {
                text_content.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => {
                text_content.push(' ');
            }
            Event::Start(Tag::Item) => {
                push_line_break(&mut text_content);
            }
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::CodeBlock
                | TagEnd::Item
                | TagEnd::TableCell
                | TagEnd::TableRow,
            ) => {
                push_line_break(&mut text_content);
            }
            _ => {}
        }
    }
    flush_html_block(&mut text_content, &mut html_block);

    text_content.trim().to_string()
}

/// Remove hidden elements and tags, keeping the text between tags.
fn strip_html(html: &str, tag_replacement: &str) -> String {
    let visible = HTML_HIDDEN.replace_all(html, tag_replacement);
    HTML_TAG.replace_all(&visible, tag_replacement).into_owned()
}

// Raw HTML blocks arrive line by line; strip them whole so elements spanning
// lines are matched.
fn flush_html_block(text: &mut String, html_block: &mut String) {
    if html_block.is_empty() {
        return;
    }
    let stripped = strip_html(html_block, " ");
    html_block.clear();
    if !stripped.trim().is_empty() {
        text.push_str(stripped.trim());
        push_line_break(text);
    }
}

fn push_line_break(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

/// Reduce a markdown body to the single-line text stored for indexing.
///
/// After [`extract_text_content`]: line breaks and the punctuation set
/// `. , / # ! $ % ^ & * ; : { } = - _ ` ~ ( )` become spaces, runs of two or
/// more whitespace characters collapse to one space, and the result is
/// trimmed.
pub fn index_text(markdown: &str) -> String {
    let text = extract_text_content(markdown);
    let text = LINE_BREAKS.replace_all(&text, " ");
    let text = PUNCTUATION.replace_all(&text, " ");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // extract_text_content tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_text_strips_formatting() {
        let content = "# Title\n\nSome **bold** and *italic* text.";
        let text = extract_text_content(content);
        assert_eq!(text, "Title\nSome bold and italic text.");
    }

    #[test]
    fn test_extract_text_keeps_code() {
        let content = "Paragraph.\n\n```rust\nfn main() {}\n```\n\nUse `Result` here.";
        let text = extract_text_content(content);
        assert!(text.contains("fn main() {}"));
        assert!(text.contains("Use Result here."));
    }

    #[test]
    fn test_extract_text_handles_links() {
        let content = "Check out [this link](https://example.com) for more info.";
        let text = extract_text_content(content);
        assert!(text.contains("this link"));
        assert!(!text.contains("https://"));
    }

    #[test]
    fn test_extract_text_drops_html_tags() {
        let content = "<div class=\"note\">\n\nInside\n\n</div>";
        let text = extract_text_content(content);
        assert_eq!(text, "Inside");
    }

    #[test]
    fn test_extract_text_keeps_html_text() {
        let content = "<div class=\"note\">Fjords <b>and</b> glaciers</div>\n\nAfter";
        let text = extract_text_content(content);
        assert_eq!(text, "Fjords  and  glaciers\nAfter");
    }

    #[test]
    fn test_extract_text_inline_html() {
        let text = extract_text_content("Visit <em>Bergen</em> soon.");
        assert_eq!(text, "Visit Bergen soon.");
    }

    #[test]
    fn test_extract_text_drops_hidden_html() {
        let content = "<script>\nvar fjord = 1;\n</script>\n\n<!-- draft -->\n\nVisible";
        let text = extract_text_content(content);
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_extract_text_list_items() {
        let content = "- one\n- two\n- three";
        let text = extract_text_content(content);
        assert_eq!(text, "one\ntwo\nthree");
    }

    // ------------------------------------------------------------------------
    // index_text tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_index_text_single_line() {
        let content = "# Title\n\nFirst line.\n\nSecond: line!";
        assert_eq!(index_text(content), "Title First line Second line");
    }

    #[test]
    fn test_index_text_punctuation_becomes_space() {
        assert_eq!(index_text("snake_case-and/slash"), "snake case and slash");
        assert_eq!(index_text("a{b}c=d~e"), "a b c d e");
    }

    #[test]
    fn test_index_text_html_paragraphs() {
        assert_eq!(index_text("<p>Fjords</p><p>Glaciers</p>\n"), "Fjords Glaciers");
    }

    #[test]
    fn test_index_text_keeps_unlisted_symbols() {
        // Apostrophes and question marks are not in the punctuation set.
        assert_eq!(index_text("Who's there?"), "Who's there?");
    }

    #[test]
    fn test_index_text_unicode() {
        let content = "# ノルウェー\n\nフィヨルドの国。";
        assert_eq!(index_text(content), "ノルウェー フィヨルドの国。");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(extract_text_content(""), "");
        assert_eq!(index_text("   \n\n   \n"), "");
    }
}
