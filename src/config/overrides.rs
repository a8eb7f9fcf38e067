// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partial configuration: the same shape as [`HighlightConfig`] with every
//! leaf optional.
//!
//! Unknown keys are rejected when deserializing, so a typo like
//! `"treshold"` fails loudly instead of being ignored.

use serde::Deserialize;

use super::{
    FuzzyMatchConfig, HighlightConfig, HighlightThresholds, LevelColors, PriorityConfig,
    SemanticMatchConfig, TextProcessingConfig, VisualConfig,
};
use crate::fuzzy::SimilarityAlgorithm;
use crate::scoring::ScoringConfig;

/// Copy every `Some` leaf from `$from` onto `$to`.
macro_rules! apply_leaves {
    ($from:expr => $to:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$from.$field {
                $to.$field = value.clone();
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HighlightConfigOverride {
    pub fuzzy_match: Option<FuzzyMatchOverride>,
    pub semantic_match: Option<SemanticMatchOverride>,
    pub visual: Option<VisualOverride>,
    pub text_processing: Option<TextProcessingOverride>,
    pub priority: Option<PriorityOverride>,
    pub thresholds: Option<ThresholdsOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FuzzyMatchOverride {
    pub enabled: Option<bool>,
    pub threshold: Option<f64>,
    pub algorithm: Option<SimilarityAlgorithm>,
    pub case_sensitive: Option<bool>,
    pub ngram_size: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SemanticMatchOverride {
    pub enabled: Option<bool>,
    pub threshold: Option<f64>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VisualOverride {
    pub max_highlights: Option<usize>,
    pub show_confidence: Option<bool>,
    pub opacity: Option<f64>,
    pub colors: Option<LevelColorsOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelColorsOverride {
    pub exact: Option<String>,
    pub entity: Option<String>,
    pub phrase: Option<String>,
    pub similar: Option<String>,
    pub related: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextProcessingOverride {
    pub remove_punctuation: Option<bool>,
    pub min_token_length: Option<usize>,
    pub extra_stop_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PriorityOverride {
    pub scoring: Option<ScoringOverride>,
    pub combination_only_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScoringOverride {
    pub single_token_score: Option<f64>,
    pub combination_bonus: Option<f64>,
    pub continuity_bonus: Option<f64>,
    pub proximity_bonus: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsOverride {
    pub exact: Option<f64>,
    pub similar: Option<f64>,
    pub related: Option<f64>,
    pub context: Option<f64>,
}

impl HighlightConfigOverride {
    pub(crate) fn apply_to(&self, config: &mut HighlightConfig) {
        if let Some(o) = &self.fuzzy_match {
            o.apply_to(&mut config.fuzzy_match);
        }
        if let Some(o) = &self.semantic_match {
            o.apply_to(&mut config.semantic_match);
        }
        if let Some(o) = &self.visual {
            o.apply_to(&mut config.visual);
        }
        if let Some(o) = &self.text_processing {
            o.apply_to(&mut config.text_processing);
        }
        if let Some(o) = &self.priority {
            o.apply_to(&mut config.priority);
        }
        if let Some(o) = &self.thresholds {
            o.apply_to(&mut config.thresholds);
        }
    }
}

impl FuzzyMatchOverride {
    fn apply_to(&self, target: &mut FuzzyMatchConfig) {
        apply_leaves!(self => target; enabled, threshold, algorithm, case_sensitive, ngram_size);
    }
}

impl SemanticMatchOverride {
    fn apply_to(&self, target: &mut SemanticMatchConfig) {
        apply_leaves!(self => target; enabled, threshold);
        if let Some(model) = &self.model {
            target.model = Some(model.clone());
        }
    }
}

impl VisualOverride {
    fn apply_to(&self, target: &mut VisualConfig) {
        apply_leaves!(self => target; max_highlights, show_confidence, opacity);
        if let Some(colors) = &self.colors {
            colors.apply_to(&mut target.colors);
        }
    }
}

impl LevelColorsOverride {
    fn apply_to(&self, target: &mut LevelColors) {
        apply_leaves!(self => target; exact, entity, phrase, similar, related, context);
    }
}

impl TextProcessingOverride {
    fn apply_to(&self, target: &mut TextProcessingConfig) {
        apply_leaves!(self => target; remove_punctuation, min_token_length, extra_stop_words);
    }
}

impl PriorityOverride {
    fn apply_to(&self, target: &mut PriorityConfig) {
        if let Some(scoring) = &self.scoring {
            scoring.apply_to(&mut target.scoring);
        }
        apply_leaves!(self => target; combination_only_words);
    }
}

impl ScoringOverride {
    fn apply_to(&self, target: &mut ScoringConfig) {
        apply_leaves!(self => target;
            single_token_score,
            combination_bonus,
            continuity_bonus,
            proximity_bonus,
            min_score,
            max_score,
        );
    }
}

impl ThresholdsOverride {
    fn apply_to(&self, target: &mut HighlightThresholds) {
        apply_leaves!(self => target; exact, similar, related, context);
    }
}
