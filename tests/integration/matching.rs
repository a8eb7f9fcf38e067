//! Combination matching through the public API.

use std::collections::HashSet;

use crate::common::{
    assert_no_overlaps, assert_ranges_match_text, best, tokens, LOAN_NOTICE, TWO_SENTENCES,
};
use hitmark::{
    find_combination_matches, find_combination_matches_batch, find_combination_matches_with,
    smart_tokenize, NoCombinationOnly, ScoringConfig, TokenType,
};

#[test]
fn loan_notice_end_to_end() {
    let query = smart_tokenize("가계CSS대출");
    let kinds: Vec<(&str, TokenType)> = query
        .iter()
        .map(|t| (t.text.as_str(), t.token_type))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("가계", TokenType::Korean),
            ("CSS", TokenType::English),
            ("대출", TokenType::Korean)
        ]
    );

    let matches = find_combination_matches(LOAN_NOTICE, &query, &ScoringConfig::DEFAULT);
    assert_no_overlaps(&matches);
    assert_ranges_match_text(LOAN_NOTICE, &matches);

    let phrase = matches
        .iter()
        .find(|m| m.tokens.len() > 1 && m.matched_text == "가계 CSS 대출")
        .expect("three-token combination");
    assert!(phrase.score >= 3.0);
    assert_eq!((phrase.start_index, phrase.end_index), (15, 24));
}

#[test]
fn loan_notice_keeps_each_spelling_once() {
    let query = smart_tokenize("가계CSS대출");
    let mut matches = find_combination_matches(LOAN_NOTICE, &query, &ScoringConfig::DEFAULT);
    matches.sort_by_key(|m| m.start_index);

    let texts: Vec<&str> = matches.iter().map(|m| m.matched_text.as_str()).collect();
    // 대출 inside CSS대출 and CSS before 대출 fail the word-boundary check
    assert_eq!(texts, vec!["가계", "대출", "CSS대출", "가계 CSS 대출"]);
    assert_eq!(best(&matches).matched_text, "가계 CSS 대출");
}

#[test]
fn combination_outscores_every_single_token() {
    let doc = "가계 CSS 대출 지원";
    let combined = find_combination_matches(doc, &tokens(&["가계", "CSS", "대출"]), &ScoringConfig::DEFAULT);
    let phrase = best(&combined);
    assert_eq!(phrase.tokens.len(), 3);

    for single in ["가계", "CSS", "대출"] {
        let alone = find_combination_matches(doc, &tokens(&[single]), &ScoringConfig::DEFAULT);
        assert_eq!(alone.len(), 1);
        assert!(
            phrase.score > alone[0].score,
            "{} scored {} against {}",
            single,
            alone[0].score,
            phrase.score
        );
    }
}

#[test]
fn particles_attached_to_token_fail_boundary() {
    let matches = find_combination_matches("신용 대출을 신청", &tokens(&["대출"]), &ScoringConfig::DEFAULT);
    assert!(matches.is_empty());
}

#[test]
fn sentence_scoped_tokens() {
    let query = smart_tokenize("가계 대출 1,000만원");
    let mut matches = find_combination_matches(TWO_SENTENCES, &query, &ScoringConfig::DEFAULT);
    matches.sort_by_key(|m| m.start_index);

    let texts: Vec<&str> = matches.iter().map(|m| m.matched_text.as_str()).collect();
    assert_eq!(texts, vec!["가계 대출", "1,000만원"]);
    assert!(matches[0].continuity.has_document_continuity);
    assert_eq!(matches[1].tokens[0].token_type, TokenType::Mixed);
}

#[test]
fn combination_only_set() {
    let restricted: HashSet<String> = ["지원".to_string()].into_iter().collect();
    let config = ScoringConfig::DEFAULT;

    let alone = find_combination_matches_with("정부 지원 확대", &tokens(&["지원"]), &config, &restricted);
    assert!(alone.is_empty());

    let together = find_combination_matches_with(
        "대출 지원 확대",
        &tokens(&["대출", "지원"]),
        &config,
        &restricted,
    );
    assert_eq!(together.len(), 1);
    assert_eq!(together[0].matched_text, "대출 지원");
}

#[test]
fn raised_min_score_leaves_only_combinations() {
    let config = ScoringConfig {
        // a single token tops out at 1 + 1 + 2 × 0.5
        min_score: 3.5,
        ..ScoringConfig::DEFAULT
    };
    let matches = find_combination_matches(LOAN_NOTICE, &smart_tokenize("가계CSS대출"), &config);
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|m| m.tokens.len() >= 2 && m.score >= 3.5));
}

#[test]
fn batch_matches_individual_calls() {
    let docs = vec![
        LOAN_NOTICE.to_string(),
        "무관한 문서".to_string(),
        "가계 CSS 대출 지원".to_string(),
    ];
    let query = smart_tokenize("가계CSS대출");
    let batch = find_combination_matches_batch(&docs, &query, &ScoringConfig::DEFAULT, &NoCombinationOnly);

    assert_eq!(batch.len(), docs.len());
    for (doc, matches) in docs.iter().zip(&batch) {
        assert_eq!(matches, &find_combination_matches(doc, &query, &ScoringConfig::DEFAULT));
    }
    assert!(batch[1].is_empty());
}

#[test]
fn offsets_count_chars_not_bytes() {
    let doc = "Ünïcödé 가계 대출";
    let matches = find_combination_matches(doc, &tokens(&["가계", "대출"]), &ScoringConfig::DEFAULT);
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start_index, matches[0].end_index), (8, 13));
}

#[test]
fn repeated_calls_are_identical() {
    let query = smart_tokenize("가계CSS대출");
    let first = find_combination_matches(LOAN_NOTICE, &query, &ScoringConfig::DEFAULT);
    let second = find_combination_matches(LOAN_NOTICE, &query, &ScoringConfig::DEFAULT);
    assert_eq!(first, second);
}
