// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: turning token occurrences into ranked, non-overlapping matches.
//!
//! Longer combinations always start ahead: a three-token phrase has a base of
//! 5 against 1 for a single token, and continuity/proximity bonuses only
//! reorder matches of similar size. Overlap resolution then lets the best
//! claim on each stretch of text win.

mod boundary;
mod combination;
mod config;
mod continuity;
mod overlap;

pub(crate) use boundary::is_word_boundary_chars;
pub use boundary::is_word_boundary;
pub use combination::{
    find_combination_matches, find_combination_matches_batch, find_combination_matches_with,
    CombinationMatch, CombinationOnly, NoCombinationOnly, COMBINATION_ONLY_BONUS_FACTOR,
    COMBINATION_ONLY_SOLO_CAP, MAX_COMBINATION_SIZE,
};
pub use config::ScoringConfig;
pub use continuity::{
    calculate_continuity, ContinuityInfo, CONTINUITY_RATIO, LOOKAHEAD, SENTENCE_TOKEN_BONUS,
};
pub use overlap::resolve_overlaps;
