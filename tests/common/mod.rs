//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hitmark::{CombinationMatch, HighlightSpan, Token, TokenType};

// ============================================================================
// FIXTURES
// ============================================================================

/// Loan-product notice with the same phrase written three ways.
pub const LOAN_NOTICE: &str = "가계 대출 CSS대출 적용 가계 CSS 대출 비적용";

/// Two sentences, tokens only co-occurring in the second.
pub const TWO_SENTENCES: &str = "신용 평가 기준 안내. 가계 대출 한도는 1,000만원 이하입니다.";

// ============================================================================
// BUILDERS
// ============================================================================

/// Hand-built tokens, all typed by their first character.
pub fn tokens(texts: &[&str]) -> Vec<Token> {
    texts
        .iter()
        .map(|t| {
            let token_type = match t.chars().next() {
                Some(c) if c.is_ascii_digit() => TokenType::Number,
                Some(c) if c.is_ascii_alphabetic() => TokenType::English,
                _ => TokenType::Korean,
            };
            Token::new(*t, token_type)
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// No two matches share a character.
pub fn assert_no_overlaps(matches: &[CombinationMatch]) {
    for (i, a) in matches.iter().enumerate() {
        for b in &matches[i + 1..] {
            assert!(
                !a.overlaps(b),
                "INVARIANT VIOLATED: [{}, {}) '{}' overlaps [{}, {}) '{}'",
                a.start_index,
                a.end_index,
                a.matched_text,
                b.start_index,
                b.end_index,
                b.matched_text
            );
        }
    }
}

/// Every match's text is exactly the document's chars in its range.
pub fn assert_ranges_match_text(document: &str, matches: &[CombinationMatch]) {
    let chars: Vec<char> = document.chars().collect();
    for m in matches {
        assert!(m.start_index < m.end_index, "INVARIANT VIOLATED: empty range");
        let slice: String = chars[m.start_index..m.end_index].iter().collect();
        assert_eq!(slice, m.matched_text, "INVARIANT VIOLATED: range/text mismatch");
    }
}

/// Spans are ordered by start and disjoint.
pub fn assert_spans_ordered(spans: &[HighlightSpan]) {
    for pair in spans.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "INVARIANT VIOLATED: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// The single highest-scoring match.
pub fn best(matches: &[CombinationMatch]) -> &CombinationMatch {
    matches
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .expect("at least one match")
}
