//! Tokenizers used by the document index.
//!
//! Three encoders are available and selected through [`TokenizerKind`]:
//!
//! - [`tokenize`]: script-aware. Runs of space-delimited scripts (Latin,
//!   Greek, Cyrillic, digits) form one lower-cased word; every Thai, Hiragana,
//!   CJK ideograph, or Hangul syllable is a word on its own.
//! - [`tokenize_cjk`]: drops ASCII and emits one token per remaining
//!   character. Substituted for CJK index languages.
//! - [`tokenize_default`]: splits on anything that is not alphanumeric.
//!
//! ```rust
//! use glossa_fts::tokenize;
//!
//! assert_eq!(
//!     tokenize("私の名前はJillurです"),
//!     vec!["私", "の", "名", "前", "は", "jillur", "で", "す"]
//! );
//! ```

use glossa_core::{classify, ScriptClass};
use serde::{Deserialize, Serialize};

/// Encoder selection for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Split on non-alphanumeric characters.
    Default,
    /// Mixed-script word segmentation.
    #[default]
    ScriptAware,
    /// One token per non-ASCII character.
    Cjk,
}

impl TokenizerKind {
    /// Tokenize `text` with this encoder.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        match self {
            TokenizerKind::Default => tokenize_default(text),
            TokenizerKind::ScriptAware => tokenize(text),
            TokenizerKind::Cjk => tokenize_cjk(text),
        }
    }

    pub(crate) fn spans(self, text: &str) -> Vec<Span> {
        match self {
            TokenizerKind::Default => default_spans(text),
            TokenizerKind::ScriptAware => script_aware_spans(text),
            TokenizerKind::Cjk => cjk_spans(text),
        }
    }

    /// Name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenizerKind::Default => "default",
            TokenizerKind::ScriptAware => "script_aware",
            TokenizerKind::Cjk => "cjk",
        }
    }
}

/// A token with its byte offsets in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub from: usize,
    pub to: usize,
    pub text: String,
}

/// Script-aware tokenization.
///
/// Alphabetic buffers holding a single character are dropped, so single
/// letters never become tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    into_texts(script_aware_spans(text))
}

/// CJK-only tokenization: ASCII and whitespace are removed and every other
/// character is its own token.
pub fn tokenize_cjk(text: &str) -> Vec<String> {
    into_texts(cjk_spans(text))
}

/// Engine default tokenization: lower-cased alphanumeric runs.
pub fn tokenize_default(text: &str) -> Vec<String> {
    into_texts(default_spans(text))
}

fn into_texts(spans: Vec<Span>) -> Vec<String> {
    spans.into_iter().map(|s| s.text).collect()
}

/// Pending run of alphabetic characters.
#[derive(Default)]
struct WordBuffer {
    start: Option<usize>,
    chars: usize,
}

impl WordBuffer {
    fn push(&mut self, pos: usize) {
        self.start.get_or_insert(pos);
        self.chars += 1;
    }

    fn flush(&mut self, text: &str, end: usize, spans: &mut Vec<Span>) {
        if let Some(start) = self.start.take()
            && self.chars > 1
        {
            spans.push(Span {
                from: start,
                to: end,
                text: text[start..end].to_lowercase(),
            });
        }
        self.chars = 0;
    }
}

fn script_aware_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut buffer = WordBuffer::default();

    for (pos, c) in text.char_indices() {
        match classify(c) {
            ScriptClass::Alphabetic => buffer.push(pos),
            ScriptClass::SingleCharWord => {
                buffer.flush(text, pos, &mut spans);
                spans.push(Span {
                    from: pos,
                    to: pos + c.len_utf8(),
                    text: c.to_string(),
                });
            }
            ScriptClass::Separator => buffer.flush(text, pos, &mut spans),
        }
    }
    buffer.flush(text, text.len(), &mut spans);

    spans
}

fn cjk_spans(text: &str) -> Vec<Span> {
    text.char_indices()
        .filter(|(_, c)| !c.is_ascii() && !c.is_whitespace())
        .map(|(pos, c)| Span {
            from: pos,
            to: pos + c.len_utf8(),
            text: c.to_string(),
        })
        .collect()
}

fn default_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = None;

    for (pos, c) in text.char_indices() {
        if c.is_alphanumeric() {
            start.get_or_insert(pos);
        } else if let Some(from) = start.take() {
            spans.push(Span {
                from,
                to: pos,
                text: text[from..pos].to_lowercase(),
            });
        }
    }
    if let Some(from) = start {
        spans.push(Span {
            from,
            to: text.len(),
            text: text[from..].to_lowercase(),
        });
    }

    spans
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // Script-aware tokenizer
    // ------------------------------------------------------------------------

    #[test]
    fn test_mixed_script_segmentation() {
        assert_eq!(
            tokenize("私の名前はJillurです"),
            vec!["私", "の", "名", "前", "は", "jillur", "で", "す"]
        );
    }

    #[test]
    fn test_latin_words_lowercased() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(tokenize("Crème Brûlée"), vec!["crème", "brûlée"]);
    }

    #[test]
    fn test_greek_and_cyrillic_words() {
        assert_eq!(tokenize("Αθήνα Москва"), vec!["αθήνα", "москва"]);
    }

    #[test]
    fn test_single_letters_dropped() {
        assert_eq!(tokenize("a b cd e"), vec!["cd"]);
        assert_eq!(tokenize("x"), Vec::<String>::new());
    }

    #[test]
    fn test_digits_join_words() {
        assert_eq!(tokenize("route66 to 2024"), vec!["route66", "to", "2024"]);
    }

    #[test]
    fn test_thai_and_hangul_per_character() {
        assert_eq!(tokenize("กข"), vec!["ก", "ข"]);
        assert_eq!(tokenize("한국"), vec!["한", "국"]);
    }

    #[test]
    fn test_katakana_is_separator() {
        // Katakana is outside both tables.
        assert_eq!(tokenize("ノルウェーtrip"), vec!["trip"]);
    }

    #[test]
    fn test_span_offsets() {
        let text = "Go 東京";
        let spans = TokenizerKind::ScriptAware.spans(text);
        assert_eq!(spans.len(), 3);
        assert_eq!(&text[spans[0].from..spans[0].to], "Go");
        assert_eq!(&text[spans[1].from..spans[1].to], "東");
        assert_eq!(&text[spans[2].from..spans[2].to], "京");
    }

    // ------------------------------------------------------------------------
    // CJK and default tokenizers
    // ------------------------------------------------------------------------

    #[test]
    fn test_cjk_strips_ascii_and_whitespace() {
        assert_eq!(tokenize_cjk("東京 Tokyo 2024"), vec!["東", "京"]);
        assert_eq!(tokenize_cjk("ノルウェー　旅"), vec!["ノ", "ル", "ウ", "ェ", "ー", "旅"]);
    }

    #[test]
    fn test_default_tokenizer() {
        assert_eq!(
            tokenize_default("snake_case-and a B"),
            vec!["snake", "case", "and", "a", "b"]
        );
    }

    #[test]
    fn test_kind_dispatch_and_names() {
        assert_eq!(TokenizerKind::Cjk.tokenize("漢字"), vec!["漢", "字"]);
        assert_eq!(TokenizerKind::default(), TokenizerKind::ScriptAware);
        assert_eq!(TokenizerKind::ScriptAware.as_str(), "script_aware");
        let kind: TokenizerKind = serde_json::from_str("\"cjk\"").unwrap();
        assert_eq!(kind, TokenizerKind::Cjk);
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_ideographs_each_become_tokens(
            cjk in proptest::collection::vec(0x4e00u32..=0x9fff, 1..6),
            word in "[a-zA-Z]{2,8}",
        ) {
            let ideographs: String = cjk
                .iter()
                .filter_map(|&c| char::from_u32(c))
                .collect();
            let text = format!("{ideographs}{word}{ideographs}");

            let mut expected: Vec<String> = ideographs.chars().map(String::from).collect();
            expected.push(word.to_lowercase());
            expected.extend(ideographs.chars().map(String::from));

            prop_assert_eq!(tokenize(&text), expected);
        }

        #[test]
        fn prop_tokens_are_never_single_letters(text in "\\PC{0,40}") {
            for token in tokenize(&text) {
                let c = token.chars().next().unwrap();
                if token.chars().count() == 1 {
                    prop_assert_eq!(classify(c), ScriptClass::SingleCharWord);
                }
            }
        }

        #[test]
        fn prop_cjk_tokens_never_ascii(text in "\\PC{0,40}") {
            for token in tokenize_cjk(&text) {
                prop_assert!(!token.is_ascii());
                prop_assert_eq!(token.chars().count(), 1);
            }
        }
    }
}
