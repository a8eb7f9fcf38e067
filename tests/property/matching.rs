//! Finder invariants over random documents.

use crate::common::{assert_no_overlaps, assert_ranges_match_text, tokens};
use hitmark::{
    calculate_continuity, find_combination_matches, is_word_boundary, resolve_overlaps,
    CombinationMatch, ContinuityInfo, ScoringConfig, Token, TokenType,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

const VOCABULARY: &[&str] = &["가계", "대출", "CSS", "지원", "신용", "loan", "대출을", "CSS대출"];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VOCABULARY.to_vec()).prop_map(str::to_string)
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..15).prop_map(|words| words.join(" "))
}

fn query_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(prop::sample::select(vec!["가계", "대출", "CSS", "지원", "loan"]), 1..5)
        .prop_map(|words| tokens(&words))
}

fn candidate_strategy() -> impl Strategy<Value = CombinationMatch> {
    (0usize..40, 1usize..8, 0.0f64..10.0).prop_map(|(start, len, score)| CombinationMatch {
        tokens: vec![Token::new("x", TokenType::English)],
        matched_text: String::new(),
        score,
        base_score: score,
        bonus_score: 0.0,
        start_index: start,
        end_index: start + len,
        continuity: ContinuityInfo::default(),
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: returned matches never overlap and always describe the
    /// document text they claim.
    #[test]
    fn prop_matches_well_formed(doc in document_strategy(), query in query_strategy()) {
        let matches = find_combination_matches(&doc, &query, &ScoringConfig::DEFAULT);
        assert_no_overlaps(&matches);
        assert_ranges_match_text(&doc, &matches);
    }

    /// Property: every score lies in [minScore, maxScore] and splits into
    /// base plus bonus before clamping.
    #[test]
    fn prop_scores_within_range(doc in document_strategy(), query in query_strategy()) {
        let config = ScoringConfig::DEFAULT;
        for m in find_combination_matches(&doc, &query, &config) {
            prop_assert!(m.score >= config.min_score && m.score <= config.max_score);
            prop_assert!((m.score - (m.base_score + m.bonus_score).min(config.max_score)).abs() < 1e-9);
            prop_assert!(m.base_score >= 1.0);
        }
    }

    /// Property: every match sits on word boundaries.
    #[test]
    fn prop_matches_on_boundaries(doc in document_strategy(), query in query_strategy()) {
        for m in find_combination_matches(&doc, &query, &ScoringConfig::DEFAULT) {
            prop_assert!(is_word_boundary(&doc, m.start_index, m.len()));
        }
    }

    /// Property: proximity is capped at twice the token count and rounded
    /// to one decimal.
    #[test]
    fn prop_proximity_capped(doc in document_strategy(), query in query_strategy()) {
        let info = calculate_continuity(&doc, &query);
        prop_assert!(info.proximity_score <= query.len() as f64 * 2.0);
        let tenths = info.proximity_score * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-6);
    }

    /// Property: overlap resolution keeps a disjoint set that includes the
    /// best-scoring candidate, and drops only candidates that collide with a
    /// kept one of at least equal score.
    #[test]
    fn prop_overlap_resolution(candidates in prop::collection::vec(candidate_strategy(), 0..20)) {
        let kept = resolve_overlaps(candidates.clone());
        assert_no_overlaps(&kept);

        if let Some(top) = candidates.iter().map(|c| c.score).max_by(f64::total_cmp) {
            prop_assert!(kept.iter().any(|k| k.score == top));
        }

        for dropped in candidates.iter().filter(|c| !kept.contains(c)) {
            prop_assert!(kept.iter().any(|k| k.overlaps(dropped) && k.score >= dropped.score));
        }
    }
}
