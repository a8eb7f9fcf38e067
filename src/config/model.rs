// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The highlight configuration record and its process-wide defaults.
//!
//! Field names serialize in camelCase so JSON written for a browser viewer
//! (`{"fuzzyMatch": {"threshold": 0.8}}`) loads unchanged.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

use super::thresholds::check_unit_interval;
use super::{HighlightConfigOverride, HighlightLevel, HighlightThresholds};
use crate::error::{ConfigError, Result};
use crate::fuzzy::{SimilarityAlgorithm, DEFAULT_NGRAM_SIZE};
use crate::scoring::ScoringConfig;

static DEFAULT_CONFIG: LazyLock<HighlightConfig> = LazyLock::new(HighlightConfig::default);

/// Shared, never-mutated defaults. Derive per-call variants with
/// [`HighlightConfig::merge`].
pub fn default_config() -> &'static HighlightConfig {
    &DEFAULT_CONFIG
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub fuzzy_match: FuzzyMatchConfig,
    pub semantic_match: SemanticMatchConfig,
    pub visual: VisualConfig,
    pub text_processing: TextProcessingConfig,
    pub priority: PriorityConfig,
    pub thresholds: HighlightThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatchConfig {
    pub enabled: bool,
    /// Minimum confidence for `is_match`, in `[0, 1]`.
    pub threshold: f64,
    pub algorithm: SimilarityAlgorithm,
    pub case_sensitive: bool,
    /// n for [`SimilarityAlgorithm::Ngram`].
    pub ngram_size: usize,
}

impl Default for FuzzyMatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.7,
            algorithm: SimilarityAlgorithm::Levenshtein,
            case_sensitive: false,
            ngram_size: DEFAULT_NGRAM_SIZE,
        }
    }
}

/// Embedding-based matching settings. Carried as data only; nothing in this
/// crate performs semantic matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticMatchConfig {
    pub enabled: bool,
    pub threshold: f64,
    pub model: Option<String>,
}

impl Default for SemanticMatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 0.85,
            model: None,
        }
    }
}

/// Renderer-facing settings. Only `max_highlights` is read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualConfig {
    pub max_highlights: usize,
    pub show_confidence: bool,
    pub opacity: f64,
    pub colors: LevelColors,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            max_highlights: 50,
            show_confidence: false,
            opacity: 0.35,
            colors: LevelColors::default(),
        }
    }
}

/// CSS colors per highlight level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelColors {
    pub exact: String,
    pub entity: String,
    pub phrase: String,
    pub similar: String,
    pub related: String,
    pub context: String,
}

impl Default for LevelColors {
    fn default() -> Self {
        Self {
            exact: "#ffd54f".to_string(),
            entity: "#ce93d8".to_string(),
            phrase: "#81c784".to_string(),
            similar: "#ffe082".to_string(),
            related: "#b3e5fc".to_string(),
            context: "#eceff1".to_string(),
        }
    }
}

impl LevelColors {
    pub fn for_level(&self, level: HighlightLevel) -> &str {
        match level {
            HighlightLevel::Exact => &self.exact,
            HighlightLevel::Entity => &self.entity,
            HighlightLevel::Phrase => &self.phrase,
            HighlightLevel::Similar => &self.similar,
            HighlightLevel::Related => &self.related,
            HighlightLevel::Context => &self.context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProcessingConfig {
    /// Replace the tokenizer's symbol set with spaces before splitting.
    pub remove_punctuation: bool,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_length: usize,
    /// Added to the built-in stop-word list (case-insensitive).
    pub extra_stop_words: Vec<String>,
}

impl Default for TextProcessingConfig {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            min_token_length: 1,
            extra_stop_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityConfig {
    pub scoring: ScoringConfig,
    /// Tokens that only count when matched together with a neighbour.
    pub combination_only_words: Vec<String>,
}

impl HighlightConfig {
    /// Reject anything that would quietly degrade matching.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("fuzzyMatch.threshold", self.fuzzy_match.threshold)?;
        if self.fuzzy_match.ngram_size == 0 {
            return Err(ConfigError::InvalidNgramSize);
        }
        check_unit_interval("semanticMatch.threshold", self.semantic_match.threshold)?;
        check_unit_interval("visual.opacity", self.visual.opacity)?;
        self.thresholds.validate()?;
        self.priority.scoring.validate()?;
        Ok(())
    }

    /// `self ⊕ overrides`: every leaf set in `overrides` replaces the value
    /// here, everything else is kept. The result is validated.
    pub fn merge(&self, overrides: &HighlightConfigOverride) -> Result<HighlightConfig> {
        let mut merged = self.clone();
        overrides.apply_to(&mut merged);
        merged.validate()?;
        Ok(merged)
    }

    /// Defaults with a JSON override document applied on top.
    pub fn from_json_str(json: &str) -> Result<HighlightConfig> {
        let overrides: HighlightConfigOverride = serde_json::from_str(json)?;
        default_config().merge(&overrides)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<HighlightConfig> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
