// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro similarity.
//!
//! Characters match when equal and within `max(len)/2 - 1` positions of each
//! other; matched characters that appear in a different order count as
//! transpositions. No Winkler prefix boost.

/// Jaro similarity in `[0, 1]`.
///
/// Identical strings short-circuit to 1.0 (including two empty strings).
/// Either side empty, or no matching characters, gives 0.0.
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let window = (len_a.max(len_b) / 2).saturating_sub(1);

    let mut a_matched = vec![false; len_a];
    let mut b_matched = vec![false; len_b];
    let mut matches = 0usize;

    for i in 0..len_a {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);

        for j in start..end {
            if b_matched[j] || a_chars[i] != b_chars[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Out-of-order matched pairs; each swap is counted twice, hence the /2 below
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..len_a {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if a_chars[i] != b_chars[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / len_a as f64 + m / len_b as f64 + (m - t) / m) / 3.0
}
