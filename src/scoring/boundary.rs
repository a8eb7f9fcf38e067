// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-boundary validation for candidate occurrences.

/// Is `[start, start + len)` free of alphanumeric neighbours?
///
/// The char before `start` and the char at `start + len` must each be absent
/// (text edge) or non-alphanumeric. Hangul syllables, Latin letters and digits
/// all count as alphanumeric, so `대출` inside `CSS대출` is rejected.
///
/// Offsets are in chars.
pub fn is_word_boundary(text: &str, start: usize, len: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    is_word_boundary_chars(&chars, start, len)
}

pub(crate) fn is_word_boundary_chars(chars: &[char], start: usize, len: usize) -> bool {
    let before_ok = start
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = chars
        .get(start + len)
        .map_or(true, |c| !c.is_alphanumeric());

    before_ok && after_ok
}
