// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match/no-match decisions between a search string and a target.
//!
//! Containment always wins: if the target already contains the search text
//! there is nothing fuzzy about it, so the configured metric is never
//! consulted and the result reports `exact` with full confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SimilarityAlgorithm;
use crate::config::FuzzyMatchConfig;
use crate::contracts::check_similarity_bounded;

/// Which path produced a [`FuzzyMatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchAlgorithm {
    Exact,
    Levenshtein,
    Jaro,
    Ngram,
}

impl From<SimilarityAlgorithm> for MatchAlgorithm {
    fn from(algorithm: SimilarityAlgorithm) -> Self {
        match algorithm {
            SimilarityAlgorithm::Levenshtein => MatchAlgorithm::Levenshtein,
            SimilarityAlgorithm::Jaro => MatchAlgorithm::Jaro,
            SimilarityAlgorithm::Ngram => MatchAlgorithm::Ngram,
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchAlgorithm::Exact => "exact",
            MatchAlgorithm::Levenshtein => "levenshtein",
            MatchAlgorithm::Jaro => "jaro",
            MatchAlgorithm::Ngram => "ngram",
        };
        f.write_str(name)
    }
}

/// Outcome of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatchResult {
    pub is_match: bool,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub algorithm: MatchAlgorithm,
}

/// Compare `search` against `target` under `options`.
///
/// 1. Case-fold both sides unless `case_sensitive`.
/// 2. `target` contains `search` → `{ true, 1.0, exact }`.
/// 3. Fuzzy matching disabled → `{ false, 0.0, exact }`.
/// 4. Otherwise score with the configured metric and compare to `threshold`.
pub fn fuzzy_text_match(search: &str, target: &str, options: &FuzzyMatchConfig) -> FuzzyMatchResult {
    let (search, target) = if options.case_sensitive {
        (search.to_string(), target.to_string())
    } else {
        (search.to_lowercase(), target.to_lowercase())
    };

    if target.contains(search.as_str()) {
        return FuzzyMatchResult {
            is_match: true,
            confidence: 1.0,
            algorithm: MatchAlgorithm::Exact,
        };
    }

    if !options.enabled {
        return FuzzyMatchResult {
            is_match: false,
            confidence: 0.0,
            algorithm: MatchAlgorithm::Exact,
        };
    }

    let confidence = options
        .algorithm
        .similarity_with(&search, &target, options.ngram_size);
    check_similarity_bounded(confidence);

    FuzzyMatchResult {
        is_match: confidence >= options.threshold,
        confidence,
        algorithm: options.algorithm.into(),
    }
}

/// [`fuzzy_text_match`] with the fixed defaults: threshold 0.7, Levenshtein,
/// case-insensitive.
pub fn fuzzy_match(search: &str, target: &str) -> FuzzyMatchResult {
    fuzzy_text_match(search, target, &FuzzyMatchConfig::default())
}
