//! Utility functions for string processing.

/// Fold a string for comparison: lowercase only.
///
/// Matching is case-insensitive and nothing more. No diacritic stripping, no
/// whitespace collapsing, so character positions in the folded text line up
/// with positions in the original for the common (ASCII) case.
///
/// - "Spider-Man" → "spider-man"
/// - "Schwarzenegger" → "schwarzenegger"
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Length of the trimmed input in characters, the unit of the minimum-length
/// checks in the controller and the crossover form.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Convert a byte offset into `text` to a character offset.
///
/// `str::find` reports bytes; scores are defined over characters so that
/// multi-byte names don't get penalized for their encoding.
pub fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset).map_or(0, |prefix| prefix.chars().count())
}

/// Escape text for inclusion in HTML markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
