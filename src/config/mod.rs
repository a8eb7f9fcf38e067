// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight configuration: thresholds, algorithm choice and scoring weights.
//!
//! The defaults are a process-wide constant ([`default_config`]). Callers
//! never mutate it; they describe the few leaves they want changed in a
//! [`HighlightConfigOverride`] and [`HighlightConfig::merge`] hands back a new,
//! validated config. That keeps one instance safely shareable across threads
//! without locking.

mod level;
mod model;
mod overrides;
mod thresholds;

pub use level::{determine_highlight_level, HighlightLevel, MatchType, TYPED_MATCH_MIN_CONFIDENCE};
pub use model::{
    default_config, FuzzyMatchConfig, HighlightConfig, LevelColors, PriorityConfig,
    SemanticMatchConfig, TextProcessingConfig, VisualConfig,
};
pub use overrides::{
    FuzzyMatchOverride, HighlightConfigOverride, LevelColorsOverride, PriorityOverride,
    ScoringOverride, SemanticMatchOverride, TextProcessingOverride, ThresholdsOverride,
    VisualOverride,
};
pub use thresholds::HighlightThresholds;
