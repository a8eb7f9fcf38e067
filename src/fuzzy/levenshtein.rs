// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity derived from it.
//!
//! Distances are counted in characters, not bytes, so a Hangul syllable is one
//! edit just like an ASCII letter.

/// Classic Levenshtein distance: insert, delete and substitute all cost 1.
///
/// Single-row DP over the shorter string's length, O(n·m) time.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a_chars.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// `1 - distance / max(len)`, with two empty strings counting as identical.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - distance as f64 / max_len as f64
}
