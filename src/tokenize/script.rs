// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting a word where its script changes.
//!
//! `가계CSS대출` is three search terms glued together; documents are just as
//! likely to write them apart, so each same-script run becomes its own token.
//! The one exception is a number followed by Korean magnitude/unit syllables
//! (`1,000만원`, `3억`), which stays whole.

use super::{Token, TokenType};

/// Korean magnitude and currency/unit syllables that bind to a preceding number.
pub const NUMERIC_UNIT_CHARS: &[char] = &['억', '만', '천', '원', '위'];

/// Character class used for segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Korean,
    English,
    Number,
    Symbol,
}

impl CharClass {
    /// Class of `c`, given the class of the run it would extend.
    ///
    /// `,` and `.` continue a number (`1,000`, `3.5`) but are symbols anywhere else.
    pub fn of(c: char, current: Option<CharClass>) -> CharClass {
        if c.is_ascii_digit() || (matches!(c, ',' | '.') && current == Some(CharClass::Number)) {
            CharClass::Number
        } else if is_hangul(c) {
            CharClass::Korean
        } else if is_latin_letter(c) {
            CharClass::English
        } else {
            CharClass::Symbol
        }
    }

    fn token_type(self) -> TokenType {
        match self {
            CharClass::Korean => TokenType::Korean,
            CharClass::English => TokenType::English,
            CharClass::Number => TokenType::Number,
            CharClass::Symbol => TokenType::Symbol,
        }
    }
}

/// Hangul syllables plus conjoining and compatibility jamo.
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}' |  // Hangul Syllables
        '\u{1100}'..='\u{11FF}' |  // Hangul Jamo
        '\u{3130}'..='\u{318F}' |  // Hangul Compatibility Jamo
        '\u{A960}'..='\u{A97F}' |  // Hangul Jamo Extended-A
        '\u{D7B0}'..='\u{D7FF}'    // Hangul Jamo Extended-B
    )
}

/// ASCII letters and the Latin-1 / Latin Extended-A/B letters.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (matches!(c, '\u{00C0}'..='\u{024F}') && c.is_alphabetic())
}

fn is_numeric_unit(run: &str) -> bool {
    !run.is_empty() && run.chars().all(|c| NUMERIC_UNIT_CHARS.contains(&c))
}

/// Group `word` into maximal same-class runs.
fn runs(word: &str) -> Vec<(CharClass, String)> {
    let mut runs: Vec<(CharClass, String)> = Vec::new();

    for c in word.chars() {
        let current = runs.last().map(|(class, _)| *class);
        let class = CharClass::of(c, current);
        match runs.last_mut() {
            Some((last, text)) if *last == class => text.push(c),
            _ => runs.push((class, c.to_string())),
        }
    }

    runs
}

/// Split one word into script-homogeneous tokens.
///
/// A number run directly followed by a run made only of
/// [`NUMERIC_UNIT_CHARS`] merges into a single [`TokenType::Mixed`] token.
/// Stray `,`/`.` at token edges are trimmed and empty tokens dropped.
pub fn split_by_script(word: &str) -> Vec<Token> {
    let runs = runs(word);
    let mut tokens = Vec::with_capacity(runs.len());
    let mut i = 0;

    while i < runs.len() {
        let (class, text) = &runs[i];

        let unit = runs.get(i + 1).filter(|(next, unit)| {
            *class == CharClass::Number && *next == CharClass::Korean && is_numeric_unit(unit)
        });

        let (text, token_type) = match unit {
            Some((_, unit)) => {
                i += 2;
                (format!("{}{}", text, unit), TokenType::Mixed)
            }
            None => {
                i += 1;
                (text.clone(), class.token_type())
            }
        };

        let trimmed = text.trim().trim_matches(|c: char| c == ',' || c == '.');
        if trimmed.is_empty() {
            continue;
        }

        tokens.push(Token {
            text: trimmed.to_string(),
            token_type,
            original: word.to_string(),
        });
    }

    tokens
}
