// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From query to renderer-ready spans.
//!
//! ```text
//! query ──smart_tokenize──▶ tokens ──find_combination_matches──▶ matches
//!                                                                  │
//!        spans ◀──determine_highlight_level── confidence = score / maxScore
//! ```
//!
//! Tokens that found no exact occurrence get one more chance: when fuzzy
//! matching is enabled, every document word not already covered is compared
//! with [`fuzzy_text_match`], and matching words become spans of their own.
//! That is also how `대출` finds `대출을`, which the strict word-boundary rule
//! rejects. Combination-only tokens never take this path.

use serde::{Deserialize, Serialize};

use crate::config::{determine_highlight_level, HighlightConfig, HighlightLevel, MatchType};
use crate::contracts::check_thresholds_ordered;
use crate::fuzzy::fuzzy_text_match;
use crate::scoring::{find_combination_matches_with, CombinationMatch, CombinationOnly};
use crate::tokenize::{smart_tokenize_with, Token};
use crate::utils::words_with_offsets;

/// A highlight for the renderer: char range, level and the score behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub level: HighlightLevel,
    /// Combination score, or the similarity confidence for a fuzzy word match.
    pub score: f64,
    pub text: String,
}

impl HighlightSpan {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Classify resolved matches and order them by position.
///
/// Confidence is the score as a fraction of `maxScore`. Multi-token matches
/// classify as phrases, single tokens as fuzzy matches. At most
/// `visual.max_highlights` spans are kept, best scores first.
pub fn highlight_spans(matches: &[CombinationMatch], config: &HighlightConfig) -> Vec<HighlightSpan> {
    check_thresholds_ordered(&config.thresholds);
    let max_score = config.priority.scoring.max_score;

    let spans = matches
        .iter()
        .map(|m| {
            let confidence = if max_score > 0.0 {
                (m.score / max_score).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let match_type = if m.tokens.len() > 1 {
                MatchType::Phrase
            } else {
                MatchType::Fuzzy
            };

            HighlightSpan {
                start: m.start_index,
                end: m.end_index,
                level: determine_highlight_level(confidence, match_type, &config.thresholds),
                score: m.score,
                text: m.matched_text.clone(),
            }
        })
        .collect();

    limit_and_order(spans, config.visual.max_highlights)
}

/// The whole pipeline: tokenize `query`, find combination matches in
/// `document`, fall back to fuzzy word matches for tokens nothing matched,
/// and return spans ordered by `start`.
pub fn highlight_document(document: &str, query: &str, config: &HighlightConfig) -> Vec<HighlightSpan> {
    let tokens = smart_tokenize_with(query, &config.text_processing);
    if tokens.is_empty() {
        return Vec::new();
    }

    let matches = find_combination_matches_with(
        document,
        &tokens,
        &config.priority.scoring,
        &config.priority.combination_only_words,
    );

    let mut spans = highlight_spans(&matches, config);

    if config.fuzzy_match.enabled {
        let restricted = &config.priority.combination_only_words;
        let unmatched: Vec<&Token> = tokens
            .iter()
            .filter(|t| !restricted.is_combination_only(&t.text))
            .filter(|t| !matches.iter().any(|m| m.tokens.contains(t)))
            .collect();
        spans.extend(fuzzy_word_spans(document, &unmatched, &spans, config));
    }

    tracing::debug!(
        tokens = tokens.len(),
        matches = matches.len(),
        spans = spans.len(),
        "highlighted document"
    );

    limit_and_order(spans, config.visual.max_highlights)
}

/// Spans for document words that fuzzily match one of `tokens` and do not
/// overlap `taken`.
fn fuzzy_word_spans(
    document: &str,
    tokens: &[&Token],
    taken: &[HighlightSpan],
    config: &HighlightConfig,
) -> Vec<HighlightSpan> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = document.chars().collect();
    let mut spans: Vec<HighlightSpan> = Vec::new();

    for (start, end, word) in words_with_offsets(&chars) {
        if taken.iter().chain(spans.iter()).any(|s| s.overlaps(start, end)) {
            continue;
        }

        let best = tokens
            .iter()
            .map(|t| fuzzy_text_match(&t.text, &word, &config.fuzzy_match))
            .filter(|r| r.is_match)
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence));

        if let Some(result) = best {
            spans.push(HighlightSpan {
                start,
                end,
                level: determine_highlight_level(
                    result.confidence,
                    MatchType::Fuzzy,
                    &config.thresholds,
                ),
                score: result.confidence,
                text: word,
            });
        }
    }

    spans
}

fn limit_and_order(mut spans: Vec<HighlightSpan>, max_highlights: usize) -> Vec<HighlightSpan> {
    if spans.len() > max_highlights {
        spans.sort_by(|a, b| b.score.total_cmp(&a.score));
        spans.truncate(max_highlights);
    }
    spans.sort_by_key(|s| s.start);
    spans
}
