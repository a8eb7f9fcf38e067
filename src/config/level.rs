// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mapping a confidence value to a discrete highlight level.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HighlightThresholds;

/// Minimum confidence for entity and phrase matches to keep their own level.
pub const TYPED_MATCH_MIN_CONFIDENCE: f64 = 0.7;

/// Discrete highlight strength handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightLevel {
    Exact,
    Entity,
    Phrase,
    Similar,
    Related,
    Context,
}

impl fmt::Display for HighlightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HighlightLevel::Exact => "exact",
            HighlightLevel::Entity => "entity",
            HighlightLevel::Phrase => "phrase",
            HighlightLevel::Similar => "similar",
            HighlightLevel::Related => "related",
            HighlightLevel::Context => "context",
        };
        f.write_str(name)
    }
}

/// What kind of comparison produced the confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    #[default]
    Fuzzy,
    Entity,
    Phrase,
}

/// Classify `confidence`, first rule wins:
///
/// 1. `confidence >= exact` → `Exact`
/// 2. entity match with `confidence >= 0.7` → `Entity`
/// 3. phrase match with `confidence >= 0.7` → `Phrase`
/// 4. `similar`, `related`, `context` by descending cut-point
/// 5. `Context`
///
/// Rule 5 also covers confidences below `context`: there is no "no match"
/// level, callers filter on `is_match` before classifying.
pub fn determine_highlight_level(
    confidence: f64,
    match_type: MatchType,
    thresholds: &HighlightThresholds,
) -> HighlightLevel {
    if confidence >= thresholds.exact {
        return HighlightLevel::Exact;
    }

    match match_type {
        MatchType::Entity if confidence >= TYPED_MATCH_MIN_CONFIDENCE => {
            return HighlightLevel::Entity;
        }
        MatchType::Phrase if confidence >= TYPED_MATCH_MIN_CONFIDENCE => {
            return HighlightLevel::Phrase;
        }
        _ => {}
    }

    if confidence >= thresholds.similar {
        HighlightLevel::Similar
    } else if confidence >= thresholds.related {
        HighlightLevel::Related
    } else {
        HighlightLevel::Context
    }
}
