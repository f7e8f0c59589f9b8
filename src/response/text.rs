// src/response/text.rs
// Character-safe echo of user text

/// Marker appended when an echo is cut short
pub const ELLIPSIS: &str = "...";

/// First `max_chars` characters of `text`, plus `...` when it was longer.
/// Counts Unicode scalar values, never splits a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
