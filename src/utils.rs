//! Character-level helpers shared by the finder and the highlighter.
//!
//! Offsets everywhere in this crate count `char`s, not bytes, matching how a
//! renderer indexes BMP text. Case folding therefore has to be one char in,
//! one char out: `str::to_lowercase` can change the length (`İ` → `i̇`), which
//! would shift every offset after it.

/// Lowercase `c` when that yields exactly one char, otherwise keep it.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Length-preserving case fold of `text`.
pub fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Start offsets of every occurrence of `needle` in `haystack`, overlapping
/// occurrences included. An empty needle matches nowhere.
pub fn find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(start, _)| start)
        .collect()
}

/// Whitespace-delimited words with their char offsets `(start, end, text)`.
pub fn words_with_offsets(chars: &[char]) -> Vec<(usize, usize, String)> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                words.push((s, i, chars[s..i].iter().collect()));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push((s, chars.len(), chars[s..].iter().collect()));
    }

    words
}
