// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overlap resolution: at most one match per stretch of document text.
//!
//! The finder deliberately over-generates. `가계 CSS 대출` yields the
//! three-token combination, both two-token combinations and all three single
//! tokens over the same characters. Only the best-scoring claim on any
//! character survives.
//!
//! **Invariant**: no two returned matches share a character.

use super::CombinationMatch;

/// Greedy keep-best: sort by score descending (stable, so equal scores keep
/// their generation order) and accept each match whose `[start, end)` range
/// is disjoint from everything accepted so far.
pub fn resolve_overlaps(mut candidates: Vec<CombinationMatch>) -> Vec<CombinationMatch> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut accepted: Vec<CombinationMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !accepted.iter().any(|kept| kept.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }

    accepted
}
