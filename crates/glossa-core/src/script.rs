//! Unicode script classification for mixed-script tokenization.
//!
//! Characters fall into three classes:
//!
//! | Class | Scripts | Tokenization |
//! |-------|---------|--------------|
//! | [`ScriptClass::Alphabetic`] | digits, Latin, extended Latin, IPA, Greek, Cyrillic | runs form one word |
//! | [`ScriptClass::SingleCharWord`] | Thai, Hiragana, CJK unified ideographs, Hangul syllables | each char is a word |
//! | [`ScriptClass::Separator`] | everything else | splits words |
//!
//! The ranges are kept as plain inclusive tables so each one can be tested
//! and extended on its own.

/// Inclusive code point ranges of scripts that separate words with spaces.
pub const ALPHABETIC_RANGES: &[(u32, u32)] = &[
    (0x30, 0x39),   // 0-9
    (0x41, 0x5a),   // A-Z
    (0x61, 0x7a),   // a-z
    (0xc0, 0x2af),  // Latin-1 supplement, Latin extended A/B, IPA
    (0x370, 0x52f), // Greek, Cyrillic, Cyrillic supplement
];

/// Inclusive code point ranges of scripts where one character is one word.
pub const SINGLE_CHAR_WORD_RANGES: &[(u32, u32)] = &[
    (0xe00, 0xe5b),   // Thai
    (0x3040, 0x309f), // Hiragana
    (0x4e00, 0x9fff), // CJK unified ideographs
    (0xac00, 0xd7af), // Hangul syllables
];

/// Tokenization class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// Part of a space-delimited word.
    Alphabetic,
    /// A complete word on its own.
    SingleCharWord,
    /// Splits words and is never emitted.
    Separator,
}

fn in_ranges(ranges: &[(u32, u32)], code: u32) -> bool {
    ranges.iter().any(|&(lo, hi)| code >= lo && code <= hi)
}

/// Returns `true` if the code point belongs to a space-delimited script.
pub fn is_alphabetic(code: u32) -> bool {
    in_ranges(ALPHABETIC_RANGES, code)
}

/// Returns `true` if the code point is a single-character word.
pub fn is_single_char_word(code: u32) -> bool {
    in_ranges(SINGLE_CHAR_WORD_RANGES, code)
}

/// Classify a character.
///
/// Single-character words are checked first; the tables do not overlap, so
/// the order only matters if a future range does.
pub fn classify(c: char) -> ScriptClass {
    let code = c as u32;
    if is_single_char_word(code) {
        ScriptClass::SingleCharWord
    } else if is_alphabetic(code) {
        ScriptClass::Alphabetic
    } else {
        ScriptClass::Separator
    }
}
