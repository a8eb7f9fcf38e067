//! Query in, classified spans out.

use crate::common::{assert_spans_ordered, LOAN_NOTICE, TWO_SENTENCES};
use hitmark::config::ThresholdsOverride;
use hitmark::{
    default_config, find_combination_matches, highlight_document, highlight_spans, smart_tokenize,
    HighlightConfigOverride, HighlightLevel, LevelColors, ScoringConfig,
};

#[test]
fn loan_notice_spans() {
    let spans = highlight_document(LOAN_NOTICE, "가계CSS대출", default_config());
    assert_spans_ordered(&spans);
    assert_eq!(spans.len(), 4);

    let phrase = spans.iter().find(|s| s.text == "가계 CSS 대출").unwrap();
    // 8.45 of 10
    assert_eq!(phrase.level, HighlightLevel::Phrase);
}

#[test]
fn spans_and_matches_agree() {
    let query = smart_tokenize("가계 대출 1,000만원");
    let matches = find_combination_matches(TWO_SENTENCES, &query, &ScoringConfig::DEFAULT);
    let from_matches = highlight_spans(&matches, default_config());
    let from_document = highlight_document(TWO_SENTENCES, "가계 대출 1,000만원", default_config());
    assert_eq!(from_matches, from_document);
}

#[test]
fn threshold_override_changes_level() {
    let doc = "가계 CSS 대출 지원";
    let before = highlight_document(doc, "가계CSS대출", default_config());
    assert_eq!(before[0].level, HighlightLevel::Related);

    let overrides = HighlightConfigOverride {
        thresholds: Some(ThresholdsOverride {
            similar: Some(0.65),
            ..Default::default()
        }),
        ..Default::default()
    };
    let config = default_config().merge(&overrides).unwrap();
    let after = highlight_document(doc, "가계CSS대출", &config);
    assert_eq!(after[0].level, HighlightLevel::Similar);
}

#[test]
fn fuzzy_spans_fill_gaps_between_exact_ones() {
    let spans = highlight_document("가계 대출을 위한 CSS 평가", "가계 대출 CSS", default_config());
    let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["가계", "대출을", "CSS"]);
    assert_spans_ordered(&spans);
}

#[test]
fn spans_serialize_for_renderer() {
    let spans = highlight_document("가계 대출", "가계 대출", default_config());
    let json = serde_json::to_value(&spans).unwrap();
    assert_eq!(json[0]["start"], 0);
    assert_eq!(json[0]["end"], 5);
    assert!(json[0]["level"].is_string());
}

#[test]
fn every_span_level_has_a_color() {
    let colors: &LevelColors = &default_config().visual.colors;
    let spans = highlight_document(LOAN_NOTICE, "가계CSS대출", default_config());
    assert!(!spans.is_empty());
    for span in &spans {
        assert!(colors.for_level(span.level).starts_with('#'), "{:?}", span.level);
    }
}
