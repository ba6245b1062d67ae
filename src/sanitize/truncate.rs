//! Character and byte based tail truncation.
//!
//! Lengths throughout the sanitizers are counted in `char`s, so a name made of
//! multi-byte characters is limited the same way as an ASCII one. Slicing
//! always lands on a char boundary.

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keep the first `keep` characters of `s`.
pub(crate) fn keep_chars(s: &str, keep: usize) -> &str {
    match s.char_indices().nth(keep) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Remove `drop` characters from the end of `s`.
///
/// Dropping more characters than `s` holds yields the empty string.
pub(crate) fn drop_chars(s: &str, drop: usize) -> &str {
    keep_chars(s, char_len(s).saturating_sub(drop))
}

/// Keep at most `max` bytes of `s` without splitting a character.
pub(crate) fn keep_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
