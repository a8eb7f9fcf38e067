// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching pipeline.
//!
//! Debug-mode assertions (`debug_assert!`), so they cost nothing in release
//! builds. Each one guards a property that the property tests in
//! `tests/property.rs` also check from the outside.
//!
//! | Contract                   | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_similarity_bounded` | every metric returns a value in `[0, 1]`         |
//! | `check_match_range`        | `start < end <= document length`                 |
//! | `check_no_overlaps`        | finder output never shares a character           |
//! | `check_thresholds_ordered` | `exact >= similar >= related >= context`         |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Invariants of the default tables; editing a default that breaks one
/// fails the build.
const _: () = {
    const T: HighlightThresholds = HighlightThresholds::DEFAULT;
    assert!(T.exact >= T.similar && T.similar >= T.related && T.related >= T.context);

    const S: ScoringConfig = ScoringConfig::DEFAULT;
    // three tokens with no bonus vs. one token with continuity and the
    // proximity cap of 2 per token
    const THREE_TOKEN_BASE: f64 = 3.0 * S.single_token_score + 2.0 * S.combination_bonus;
    const BEST_SINGLE: f64 = S.single_token_score + S.continuity_bonus + 2.0 * S.proximity_bonus;
    assert!(THREE_TOKEN_BASE > BEST_SINGLE);

    // a lone combination-only token never survives the default floor
    assert!(COMBINATION_ONLY_SOLO_CAP < S.min_score);
};

use crate::config::HighlightThresholds;
use crate::scoring::{CombinationMatch, ScoringConfig, COMBINATION_ONLY_SOLO_CAP};

/// Similarity score lies in `[0, 1]`.
#[inline]
pub fn check_similarity_bounded(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: similarity {} outside [0, 1]",
        score
    );
}

/// Match range is non-empty and inside the document.
#[inline]
pub fn check_match_range(found: &CombinationMatch, document_len: usize) {
    debug_assert!(
        found.start_index < found.end_index,
        "Contract violation: empty match range [{}, {})",
        found.start_index,
        found.end_index
    );
    debug_assert!(
        found.end_index <= document_len,
        "Contract violation: match end {} > document length {}",
        found.end_index,
        document_len
    );
}

/// No two matches share a character.
#[inline]
pub fn check_no_overlaps(matches: &[CombinationMatch]) {
    if cfg!(debug_assertions) {
        for (i, a) in matches.iter().enumerate() {
            for b in &matches[i + 1..] {
                debug_assert!(
                    !a.overlaps(b),
                    "Contract violation: [{}, {}) overlaps [{}, {})",
                    a.start_index,
                    a.end_index,
                    b.start_index,
                    b.end_index
                );
            }
        }
    }
}

/// Cut-points descend. Configs built through `HighlightConfig::merge` are
/// validated already; this catches hand-assembled ones in debug builds.
#[inline]
pub fn check_thresholds_ordered(thresholds: &HighlightThresholds) {
    debug_assert!(
        thresholds.validate().is_ok(),
        "Contract violation: thresholds not descending within [0, 1]: {:?}",
        thresholds
    );
}
