// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration errors.
//!
//! Matching itself never fails: every similarity, tokenizer and scoring
//! function is total over its inputs. The only thing that can go wrong is a
//! configuration that would silently degrade results (a threshold of 1.3, an
//! `exact` cut-point below `similar`), so those are rejected when the config
//! is built or merged.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{field} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },

    #[error("threshold {higher} must not be below {lower}")]
    ThresholdsNotDescending {
        higher: &'static str,
        lower: &'static str,
    },

    #[error("scoring weight {field} must be finite and non-negative, got {value}")]
    InvalidScoring { field: &'static str, value: f64 },

    #[error("minScore {min} exceeds maxScore {max}")]
    ScoreRangeInverted { min: f64, max: f64 },

    #[error("n-gram size must be at least 1")]
    InvalidNgramSize,

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
