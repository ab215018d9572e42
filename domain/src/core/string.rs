//! String utilities for the domain layer.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_len` bytes, ellipsis included.
///
/// Only whole characters are kept, so raw model output in any script stays
/// valid UTF-8 in log previews.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let end = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);
    format!("{}{}", &s[..end], ELLIPSIS)
}
