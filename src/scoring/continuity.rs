// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Continuity and proximity: does the document show these tokens together?
//!
//! Two signals, summed:
//!
//! - **Word windows.** For every run of document words as long as the token
//!   list, token `j` is looked for at window position `j`, or up to
//!   [`LOOKAHEAD`] words further. A window where at least
//!   [`CONTINUITY_RATIO`] of the tokens were found is "continuous" and adds its
//!   hit ratio.
//! - **Sentences.** The best single sentence containing two or more distinct
//!   tokens adds [`SENTENCE_TOKEN_BONUS`] per distinct token.
//!
//! The sum is capped at `2 × tokens` and rounded to one decimal.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::tokenize::Token;

/// Minimum share of tokens a word window must contain.
pub const CONTINUITY_RATIO: f64 = 0.6;

/// Extra word positions a token may slide forward within a window.
pub const LOOKAHEAD: usize = 2;

/// Per distinct token found in the best sentence.
pub const SENTENCE_TOKEN_BONUS: f64 = 0.3;

/// Why a match earned its bonus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityInfo {
    pub has_document_continuity: bool,
    pub proximity_score: f64,
    /// Document words of each continuous window, space-joined.
    pub matched_sequences: Vec<String>,
}

/// Continuity of `tokens` across the whole of `document`.
pub fn calculate_continuity(document: &str, tokens: &[Token]) -> ContinuityInfo {
    ContinuityScanner::new(document).scan(tokens)
}

/// A document pre-split into lower-cased words and sentences, so that many
/// token combinations can be scored against it without re-splitting.
pub(crate) struct ContinuityScanner {
    words: Vec<String>,
    sentences: Vec<String>,
}

impl ContinuityScanner {
    pub(crate) fn new(document: &str) -> Self {
        let lower = document.to_lowercase();
        let words = lower.split_whitespace().map(str::to_string).collect();
        let sentences = lower
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self { words, sentences }
    }

    pub(crate) fn scan(&self, tokens: &[Token]) -> ContinuityInfo {
        let needles: Vec<String> = tokens
            .iter()
            .map(|t| t.text.to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if needles.is_empty() {
            return ContinuityInfo::default();
        }

        let mut info = ContinuityInfo::default();
        let mut proximity = 0.0;

        let size = needles.len();
        if self.words.len() >= size {
            for start in 0..=self.words.len() - size {
                let (hits, last) = self.window_hits(start, &needles);
                let ratio = hits as f64 / size as f64;
                if ratio >= CONTINUITY_RATIO {
                    info.has_document_continuity = true;
                    proximity += ratio;
                    let end = last.map_or(start + size, |p| p + 1);
                    info.matched_sequences.push(self.words[start..end].join(" "));
                }
            }
        }

        proximity += self.best_sentence_bonus(&needles);

        let capped = proximity.min(size as f64 * 2.0);
        info.proximity_score = (capped * 10.0).round() / 10.0;
        info
    }

    /// Token `j` of the window at `start` may sit anywhere in words
    /// `start + j ..= start + j + LOOKAHEAD`. Returns the hit count and the
    /// furthest word position that matched.
    fn window_hits(&self, start: usize, needles: &[String]) -> (usize, Option<usize>) {
        let mut hits = 0;
        let mut last: Option<usize> = None;

        for (j, needle) in needles.iter().enumerate() {
            let from = start + j;
            let to = (from + LOOKAHEAD + 1).min(self.words.len());
            let found = (from..to).find(|&p| related(&self.words[p], needle));

            if let Some(p) = found {
                hits += 1;
                last = Some(last.map_or(p, |l| l.max(p)));
            }
        }

        (hits, last)
    }

    fn best_sentence_bonus(&self, needles: &[String]) -> f64 {
        let distinct: HashSet<&str> = needles.iter().map(String::as_str).collect();
        if distinct.len() < 2 {
            return 0.0;
        }

        self.sentences
            .iter()
            .map(|sentence| distinct.iter().filter(|t| sentence.contains(*t)).count())
            .filter(|&found| found >= 2)
            .map(|found| found as f64 * SENTENCE_TOKEN_BONUS)
            .fold(0.0, f64::max)
    }
}

/// Substring match in either direction.
fn related(word: &str, token: &str) -> bool {
    word.contains(token) || token.contains(word)
}
