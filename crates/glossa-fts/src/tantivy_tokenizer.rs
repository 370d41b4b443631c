//! Tantivy adapter for the Glossa tokenizers.
//!
//! Only available with the `fts-tantivy` feature. Registers the script-aware
//! and CJK encoders so a Tantivy schema can use them by name:
//!
//! ```rust,ignore
//! let index = Index::create_in_ram(schema);
//! register_tokenizers(&index);
//! let options = TextFieldIndexing::default().set_tokenizer(SCRIPT_AWARE_TOKENIZER);
//! ```

use tantivy::tokenizer::{TextAnalyzer, Token, TokenStream, Tokenizer};
use tantivy::Index;

use crate::tokenizer::TokenizerKind;

/// Registered name of the script-aware tokenizer.
pub const SCRIPT_AWARE_TOKENIZER: &str = "script_aware";

/// Registered name of the CJK tokenizer.
pub const CJK_TOKENIZER: &str = "cjk";

/// A [`TokenizerKind`] usable as a Tantivy [`Tokenizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexTokenizer {
    kind: TokenizerKind,
}

impl IndexTokenizer {
    /// Wrap an encoder.
    pub fn new(kind: TokenizerKind) -> Self {
        Self { kind }
    }
}

impl Tokenizer for IndexTokenizer {
    type TokenStream<'a> = SpanTokenStream;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        let tokens = self
            .kind
            .spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, span)| Token {
                offset_from: span.from,
                offset_to: span.to,
                position,
                text: span.text,
                position_length: 1,
            })
            .collect();
        SpanTokenStream { tokens, index: 0 }
    }
}

/// Precomputed token stream.
#[derive(Debug)]
pub struct SpanTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for SpanTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

/// Register the Glossa tokenizers with a Tantivy index.
pub fn register_tokenizers(index: &Index) {
    index.tokenizers().register(
        SCRIPT_AWARE_TOKENIZER,
        TextAnalyzer::from(IndexTokenizer::new(TokenizerKind::ScriptAware)),
    );
    index.tokenizers().register(
        CJK_TOKENIZER,
        TextAnalyzer::from(IndexTokenizer::new(TokenizerKind::Cjk)),
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, tokenize_cjk};
    use tantivy::schema::Schema;

    fn texts(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
        let mut stream = analyzer.token_stream(text);
        let mut out = Vec::new();
        while stream.advance() {
            out.push(stream.token().text.clone());
        }
        out
    }

    #[test]
    fn test_registration() {
        let index = Index::create_in_ram(Schema::builder().build());
        register_tokenizers(&index);

        assert!(index.tokenizers().get(SCRIPT_AWARE_TOKENIZER).is_some());
        assert!(index.tokenizers().get(CJK_TOKENIZER).is_some());
    }

    #[test]
    fn test_adapter_matches_tokenize() {
        let index = Index::create_in_ram(Schema::builder().build());
        register_tokenizers(&index);

        let text = "私の名前はJillurです, route 66";
        let mut analyzer = index.tokenizers().get(SCRIPT_AWARE_TOKENIZER).unwrap();
        assert_eq!(texts(&mut analyzer, text), tokenize(text));

        let mut cjk = index.tokenizers().get(CJK_TOKENIZER).unwrap();
        assert_eq!(texts(&mut cjk, text), tokenize_cjk(text));
    }

    #[test]
    fn test_positions_and_offsets() {
        let mut tokenizer = IndexTokenizer::new(TokenizerKind::ScriptAware);
        let text = "Oslo 駅";
        let mut stream = tokenizer.token_stream(text);

        assert!(stream.advance());
        assert_eq!(stream.token().position, 0);
        assert_eq!(&text[stream.token().offset_from..stream.token().offset_to], "Oslo");
        assert!(stream.advance());
        assert_eq!(stream.token().position, 1);
        assert_eq!(stream.token().text, "駅");
        assert!(!stream.advance());
    }
}
