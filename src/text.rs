//! Text cleanup for the catalogue's markup.
//!
//! The site pads header cells with newlines and indentation, and mixes
//! full-width spaces into Japanese text. Three flavours of cleanup cover
//! everything the parsers need.

/// Strip all ASCII whitespace and turn full-width spaces into plain ones.
///
/// Meant for code- and period-style cells where whitespace is never part of
/// the value ("30001", "月曜3限、木曜3限").
pub(crate) fn squash(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '　' => Some(' '),
            ' ' | '\n' | '\r' | '\t' => None,
            _ => Some(c),
        })
        .collect()
}

/// Collapse whitespace runs into single spaces and trim the ends.
///
/// Meant for single-line human text (course titles, lecturer names) where
/// inner spaces are meaningful.
pub(crate) fn clean_inline(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim a multi-line block without touching its inner layout.
pub(crate) fn trim_block(text: &str) -> String {
    text.trim().to_string()
}
