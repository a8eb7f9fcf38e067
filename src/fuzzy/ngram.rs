// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram (Jaccard) similarity over lower-cased character n-grams.

use std::collections::HashSet;

/// Default n-gram length: bigrams.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Bigram Jaccard similarity.
pub fn ngram_similarity(a: &str, b: &str) -> f64 {
    ngram_similarity_n(a, b, DEFAULT_NGRAM_SIZE)
}

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` over the n-gram sets of both inputs.
///
/// A string shorter than `n` contributes itself as its only n-gram, so short
/// strings still compare by equality instead of producing empty sets. `n = 0`
/// is treated as 1.
pub fn ngram_similarity_n(a: &str, b: &str, n: usize) -> f64 {
    let n = n.max(1);
    let grams_a = ngrams(&a.to_lowercase(), n);
    let grams_b = ngrams(&b.to_lowercase(), n);

    let union = grams_a.union(&grams_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = grams_a.intersection(&grams_b).count();
    intersection as f64 / union as f64
}

fn ngrams(text: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < n {
        return HashSet::from([text.to_string()]);
    }

    chars.windows(n).map(|w| w.iter().collect()).collect()
}
