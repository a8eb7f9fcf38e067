// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: three interchangeable similarity metrics plus the engine
//! that picks between containment and the configured metric.
//!
//! All metrics are pure `(str, str) -> [0, 1]` functions over characters.

mod jaro;
mod levenshtein;
mod matcher;
mod ngram;

pub use jaro::jaro_similarity;
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use matcher::{fuzzy_match, fuzzy_text_match, FuzzyMatchResult, MatchAlgorithm};
pub use ngram::{ngram_similarity, ngram_similarity_n, DEFAULT_NGRAM_SIZE};

use serde::{Deserialize, Serialize};

/// Metric used once containment has failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityAlgorithm {
    #[default]
    Levenshtein,
    Jaro,
    Ngram,
}

impl SimilarityAlgorithm {
    /// Score `a` against `b`; n-grams use bigrams.
    pub fn similarity(self, a: &str, b: &str) -> f64 {
        self.similarity_with(a, b, DEFAULT_NGRAM_SIZE)
    }

    /// Score `a` against `b` with an explicit n-gram size (ignored by the
    /// other metrics).
    pub fn similarity_with(self, a: &str, b: &str, ngram_size: usize) -> f64 {
        match self {
            SimilarityAlgorithm::Levenshtein => levenshtein_similarity(a, b),
            SimilarityAlgorithm::Jaro => jaro_similarity(a, b),
            SimilarityAlgorithm::Ngram => ngram_similarity_n(a, b, ngram_size),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SimilarityAlgorithm::Levenshtein => "levenshtein",
            SimilarityAlgorithm::Jaro => "jaro",
            SimilarityAlgorithm::Ngram => "ngram",
        }
    }
}
