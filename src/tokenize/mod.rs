// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Smart tokenizer: free-form search text to an ordered list of tokens.
//!
//! # Pipeline
//!
//! ```text
//! "가계CSS대출, 1,000만원 이하의 (지원)"
//!   │ NFC compose, replace symbols with spaces (keeps ',' and '.')
//!   ▼
//! "가계CSS대출, 1,000만원 이하의  지원 "
//!   │ split on whitespace, drop stop-words
//!   ▼
//! ["가계CSS대출,", "1,000만원", "이하의", "지원"]
//!   │ split each word by script, trim stray ',' '.'
//!   ▼
//! [가계, CSS, 대출, 1,000만원, 이하의, 지원]
//! ```

mod script;
mod stopwords;

pub use script::{is_hangul, is_latin_letter, split_by_script, CharClass, NUMERIC_UNIT_CHARS};
pub use stopwords::is_stop_word;

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::TextProcessingConfig;

/// Symbols replaced by whitespace before splitting. `,` and `.` are absent
/// on purpose: they belong to numbers like `1,000` and `3.5`.
pub const STRIPPED_SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '&', '\'', '(', ')', '*', '+', '/', ':', ';', '<', '=', '>', '?', '@',
    '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '-', '“', '”', '‘', '’', '「', '」', '『',
    '』', '《', '》', '〈', '〉', '【', '】', '·', '…', '※',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Korean,
    English,
    Number,
    Symbol,
    /// A number bound to its unit suffix, e.g. `1,000만원`.
    Mixed,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Korean => "korean",
            TokenType::English => "english",
            TokenType::Number => "number",
            TokenType::Symbol => "symbol",
            TokenType::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// One search term. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// The whitespace-delimited word this token was cut from.
    pub original: String,
}

impl Token {
    /// Hand-built token whose `original` is its own text.
    pub fn new(text: impl Into<String>, token_type: TokenType) -> Self {
        let text = text.into();
        Self {
            original: text.clone(),
            text,
            token_type,
        }
    }
}

/// Tokenize with the default text-processing settings.
pub fn smart_tokenize(text: &str) -> Vec<Token> {
    smart_tokenize_with(text, &TextProcessingConfig::default())
}

/// Tokenize `text`: strip symbols, split words, drop stop-words, then split
/// each word at script boundaries.
pub fn smart_tokenize_with(text: &str, options: &TextProcessingConfig) -> Vec<Token> {
    let composed = compose(text);
    let cleaned: String = if options.remove_punctuation {
        composed
            .chars()
            .map(|c| if STRIPPED_SYMBOLS.contains(&c) { ' ' } else { c })
            .collect()
    } else {
        composed
    };

    let mut tokens = Vec::new();
    for word in cleaned.split_whitespace() {
        if is_stop_word(word) || is_extra_stop_word(word, &options.extra_stop_words) {
            tracing::trace!(word, "dropping stop-word");
            continue;
        }

        let pieces = split_by_script(word);
        tracing::trace!(word, pieces = pieces.len(), "split word");
        tokens.extend(
            pieces
                .into_iter()
                .filter(|t| t.text.chars().count() >= options.min_token_length),
        );
    }

    tokens
}

fn is_extra_stop_word(word: &str, extra: &[String]) -> bool {
    !extra.is_empty() && {
        let lower = word.to_lowercase();
        extra.iter().any(|w| w.to_lowercase() == lower)
    }
}

/// NFC-compose so decomposed jamo sequences tokenize like precomposed syllables.
#[cfg(feature = "unicode-normalization")]
fn compose(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn compose(text: &str) -> String {
    text.to_string()
}
