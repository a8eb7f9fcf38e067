// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Combination match finder.
//!
//! Searches the document for every single token and for every contiguous
//! run of 2 to [`MAX_COMBINATION_SIZE`] tokens (space-joined and glued), scores
//! each hit, and prunes overlaps.
//!
//! # Scoring
//!
//! ```text
//! base  = size × singleTokenScore + (size − 1) × combinationBonus
//! bonus = continuityBonus   (if the document shows the tokens in order)
//!       + proximityScore × proximityBonus
//!       + 0.5 × combinationBonus   (combinations holding a combination-only token)
//! score = min(base + bonus, maxScore)
//! ```
//!
//! A combination-only token matched on its own is capped at
//! [`COMBINATION_ONLY_SOLO_CAP`], which the default `minScore` then discards.
//!
//! # Complexity
//!
//! Each single token and each combination scans the whole document, so a
//! call is `O(tokens × MAX_COMBINATION_SIZE × document)` character compares
//! plus one continuity scan per combination. Nothing caps the token count or
//! document length; callers feeding very long queries should trim them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::continuity::ContinuityScanner;
use super::{is_word_boundary_chars, resolve_overlaps, ContinuityInfo, ScoringConfig};
use crate::contracts::{check_match_range, check_no_overlaps};
use crate::tokenize::Token;
use crate::utils::{find_all, fold_char, fold_chars};

/// Largest token combination searched for.
pub const MAX_COMBINATION_SIZE: usize = 4;

/// Score ceiling for a combination-only token matched alone.
pub const COMBINATION_ONLY_SOLO_CAP: f64 = 0.5;

/// Share of `combinationBonus` awarded to combinations that include a
/// combination-only token.
pub const COMBINATION_ONLY_BONUS_FACTOR: f64 = 0.5;

/// A scored occurrence of one or more search tokens.
///
/// `[start_index, end_index)` is a half-open range of char offsets into the
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationMatch {
    pub tokens: Vec<Token>,
    pub matched_text: String,
    pub score: f64,
    pub base_score: f64,
    pub bonus_score: f64,
    pub start_index: usize,
    pub end_index: usize,
    pub continuity: ContinuityInfo,
}

impl CombinationMatch {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Do the two half-open ranges share at least one char?
    pub fn overlaps(&self, other: &CombinationMatch) -> bool {
        self.start_index < other.end_index && other.start_index < self.end_index
    }
}

/// Words that mean little alone (`지원`, `관련`) and only count as part of a
/// combination.
///
/// Implemented for string collections and for any `Fn(&str) -> bool`.
/// The collection impls compare case-insensitively; closures decide for
/// themselves.
pub trait CombinationOnly {
    fn is_combination_only(&self, token: &str) -> bool;
}

/// No token is restricted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCombinationOnly;

impl CombinationOnly for NoCombinationOnly {
    fn is_combination_only(&self, _token: &str) -> bool {
        false
    }
}

fn contains_folded<'a>(mut words: impl Iterator<Item = &'a String>, token: &str) -> bool {
    let lower = token.to_lowercase();
    words.any(|w| w.to_lowercase() == lower)
}

impl CombinationOnly for HashSet<String> {
    fn is_combination_only(&self, token: &str) -> bool {
        self.contains(token) || contains_folded(self.iter(), token)
    }
}

impl CombinationOnly for Vec<String> {
    fn is_combination_only(&self, token: &str) -> bool {
        contains_folded(self.iter(), token)
    }
}

impl<F> CombinationOnly for F
where
    F: Fn(&str) -> bool,
{
    fn is_combination_only(&self, token: &str) -> bool {
        self(token)
    }
}

/// Find and score occurrences of `tokens` in `document`, no token restricted.
pub fn find_combination_matches(
    document: &str,
    tokens: &[Token],
    config: &ScoringConfig,
) -> Vec<CombinationMatch> {
    find_combination_matches_with(document, tokens, config, &NoCombinationOnly)
}

/// Find and score occurrences of `tokens` in `document`.
///
/// The result holds no two overlapping matches. Its order follows the
/// score-descending resolution pass but is not otherwise guaranteed; re-sort
/// by `score` or `start_index` if you need either.
pub fn find_combination_matches_with<C>(
    document: &str,
    tokens: &[Token],
    config: &ScoringConfig,
    combination_only: &C,
) -> Vec<CombinationMatch>
where
    C: CombinationOnly + ?Sized,
{
    if document.is_empty() || tokens.is_empty() {
        return Vec::new();
    }

    let finder = Finder {
        chars: document.chars().collect(),
        folded: document.chars().map(fold_char).collect(),
        scanner: ContinuityScanner::new(document),
        config,
    };

    let mut candidates = Vec::new();

    for token in tokens {
        let restricted = combination_only.is_combination_only(&token.text);
        finder.collect(std::slice::from_ref(token), restricted, &mut candidates);
    }

    for size in 2..=MAX_COMBINATION_SIZE.min(tokens.len()) {
        for window in tokens.windows(size) {
            let restricted = window
                .iter()
                .any(|t| combination_only.is_combination_only(&t.text));
            finder.collect(window, restricted, &mut candidates);
        }
    }

    let generated = candidates.len();
    let kept = resolve_overlaps(candidates);
    check_no_overlaps(&kept);

    tracing::debug!(
        tokens = tokens.len(),
        candidates = generated,
        kept = kept.len(),
        "combination matches resolved"
    );

    kept
}

/// Run the finder over many documents, in parallel when the `parallel`
/// feature is on. Output order follows `documents`.
pub fn find_combination_matches_batch<D, C>(
    documents: &[D],
    tokens: &[Token],
    config: &ScoringConfig,
    combination_only: &C,
) -> Vec<Vec<CombinationMatch>>
where
    D: AsRef<str> + Sync,
    C: CombinationOnly + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        documents
            .par_iter()
            .map(|doc| find_combination_matches_with(doc.as_ref(), tokens, config, combination_only))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        documents
            .iter()
            .map(|doc| find_combination_matches_with(doc.as_ref(), tokens, config, combination_only))
            .collect()
    }
}

/// One document, prepared once per call.
struct Finder<'a> {
    chars: Vec<char>,
    folded: Vec<char>,
    scanner: ContinuityScanner,
    config: &'a ScoringConfig,
}

impl Finder<'_> {
    /// Score `group` and push every boundary-valid occurrence of it.
    ///
    /// Continuity depends only on the document and the group, so every
    /// occurrence of the group shares one score.
    fn collect(&self, group: &[Token], restricted: bool, out: &mut Vec<CombinationMatch>) {
        let config = self.config;
        let size = group.len();
        let continuity = self.scanner.scan(group);

        let base = size as f64 * config.single_token_score
            + (size - 1) as f64 * config.combination_bonus;
        let mut bonus = if continuity.has_document_continuity {
            config.continuity_bonus
        } else {
            0.0
        };
        bonus += continuity.proximity_score * config.proximity_bonus;
        if restricted && size > 1 {
            bonus += COMBINATION_ONLY_BONUS_FACTOR * config.combination_bonus;
        }

        let mut score = (base + bonus).min(config.max_score);
        if restricted && size == 1 {
            score = score.min(COMBINATION_ONLY_SOLO_CAP);
        }
        if score < config.min_score {
            return;
        }

        for pattern in search_patterns(group) {
            let needle = fold_chars(&pattern);
            for start in find_all(&self.folded, &needle) {
                if !is_word_boundary_chars(&self.chars, start, needle.len()) {
                    continue;
                }

                let end = start + needle.len();
                let found = CombinationMatch {
                    tokens: group.to_vec(),
                    matched_text: self.chars[start..end].iter().collect(),
                    score,
                    base_score: base,
                    bonus_score: bonus,
                    start_index: start,
                    end_index: end,
                    continuity: continuity.clone(),
                };
                check_match_range(&found, self.chars.len());
                out.push(found);
            }
        }
    }
}

/// A single token searches for itself; a combination searches for its
/// tokens joined by one space and glued together.
fn search_patterns(group: &[Token]) -> Vec<String> {
    let texts: Vec<&str> = group
        .iter()
        .map(|t| t.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if texts.is_empty() {
        return Vec::new();
    }

    let spaced = texts.join(" ");
    let glued = texts.concat();
    if spaced == glued {
        vec![spaced]
    } else {
        vec![spaced, glued]
    }
}
