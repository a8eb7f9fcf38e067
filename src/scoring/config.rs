// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weights for the layered combination score.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Score weights for [`find_combination_matches`](super::find_combination_matches).
///
/// | Field | Default | Role |
/// |-------|---------|------|
/// | `single_token_score` | 1.0 | base per matched token |
/// | `combination_bonus` | 1.0 | per extra token in a combination |
/// | `continuity_bonus` | 1.0 | when the document shows the tokens in order |
/// | `proximity_bonus` | 0.5 | multiplier on the proximity score |
/// | `min_score` | 1.0 | candidates below this are dropped |
/// | `max_score` | 10.0 | final scores are clamped to this |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub single_token_score: f64,
    pub combination_bonus: f64,
    pub continuity_bonus: f64,
    pub proximity_bonus: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl ScoringConfig {
    pub const DEFAULT: ScoringConfig = ScoringConfig {
        single_token_score: 1.0,
        combination_bonus: 1.0,
        continuity_bonus: 1.0,
        proximity_bonus: 0.5,
        min_score: 1.0,
        max_score: 10.0,
    };

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("singleTokenScore", self.single_token_score),
            ("combinationBonus", self.combination_bonus),
            ("continuityBonus", self.continuity_bonus),
            ("proximityBonus", self.proximity_bonus),
            ("minScore", self.min_score),
            ("maxScore", self.max_score),
        ];

        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidScoring { field, value });
            }
        }

        if self.min_score > self.max_score {
            return Err(ConfigError::ScoreRangeInverted {
                min: self.min_score,
                max: self.max_score,
            });
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
