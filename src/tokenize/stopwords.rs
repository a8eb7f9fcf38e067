// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Words that carry no search meaning on their own.

/// Standalone Korean particles, conjunctions and copulas.
const KOREAN_STOP_WORDS: &[&str] = &[
    "은", "는", "이", "가", "을", "를", "의", "에", "에서", "에게", "께", "로", "으로", "와",
    "과", "도", "만", "및", "등", "또는", "그리고", "하지만", "그러나", "이다", "입니다", "있다",
    "있는", "하는", "된", "되는", "것", "수",
];

const GENERIC_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "to", "in", "on", "for", "is", "are", "with",
];

/// Case-insensitive membership in the built-in stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    KOREAN_STOP_WORDS.contains(&lower.as_str()) || GENERIC_STOP_WORDS.contains(&lower.as_str())
}
