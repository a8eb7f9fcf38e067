//! Similarity metrics: symmetry, identity, boundedness.

use hitmark::fuzzy::ngram_similarity_n;
use hitmark::{
    fuzzy_text_match, jaro_similarity, levenshtein_distance, levenshtein_similarity,
    ngram_similarity, FuzzyMatchConfig, MatchAlgorithm, SimilarityAlgorithm,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// ASCII, Hangul and a few accented Latin letters, empty strings included.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 가-힣éüñ]{0,12}").unwrap()
}

fn algorithm_strategy() -> impl Strategy<Value = SimilarityAlgorithm> {
    prop::sample::select(vec![
        SimilarityAlgorithm::Levenshtein,
        SimilarityAlgorithm::Jaro,
        SimilarityAlgorithm::Ngram,
    ])
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: Levenshtein and Jaro do not care about argument order.
    #[test]
    fn prop_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(levenshtein_similarity(&a, &b), levenshtein_similarity(&b, &a));
        prop_assert_eq!(jaro_similarity(&a, &b), jaro_similarity(&b, &a));
        prop_assert_eq!(ngram_similarity(&a, &b), ngram_similarity(&b, &a));
    }

    /// Property: every string is identical to itself.
    #[test]
    fn prop_identity(s in text_strategy()) {
        prop_assert_eq!(levenshtein_similarity(&s, &s), 1.0);
        prop_assert_eq!(jaro_similarity(&s, &s), 1.0);
        prop_assert_eq!(levenshtein_distance(&s, &s), 0);
    }

    /// Property: all metrics stay within [0, 1], empty strings included.
    #[test]
    fn prop_bounded(a in text_strategy(), b in text_strategy(), n in 1usize..5) {
        for score in [
            levenshtein_similarity(&a, &b),
            jaro_similarity(&a, &b),
            ngram_similarity(&a, &b),
            ngram_similarity_n(&a, &b, n),
        ] {
            prop_assert!((0.0..=1.0).contains(&score), "{} for {:?} / {:?}", score, a, b);
        }
    }

    /// Property: edit distance obeys the triangle inequality.
    #[test]
    fn prop_triangle_inequality(a in text_strategy(), b in text_strategy(), c in text_strategy()) {
        let ab = levenshtein_distance(&a, &b);
        let bc = levenshtein_distance(&b, &c);
        let ac = levenshtein_distance(&a, &c);
        prop_assert!(ac <= ab + bc);
    }

    /// Property: containment short-circuits whatever the metric.
    #[test]
    fn prop_containment_is_exact(
        prefix in text_strategy(),
        needle in text_strategy(),
        suffix in text_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let target = format!("{}{}{}", prefix, needle, suffix);
        let options = FuzzyMatchConfig { algorithm, ..FuzzyMatchConfig::default() };
        let result = fuzzy_text_match(&needle, &target, &options);
        prop_assert!(result.is_match);
        prop_assert_eq!(result.confidence, 1.0);
        prop_assert_eq!(result.algorithm, MatchAlgorithm::Exact);
    }
}
