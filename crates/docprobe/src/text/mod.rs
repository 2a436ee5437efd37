//! Text utilities: excerpt truncation and cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B-\x0C\x0E-\x1F\x7F-\x9F]").expect("control chars regex pattern is valid")
});

/// Truncate `text` to at most `max_chars` characters, on a character
/// boundary.
///
/// Truncation is idempotent: applying it twice yields the same string.
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Remove C0/C1 control characters (keeping tab, newline, carriage return).
pub fn strip_control_chars(text: &str) -> Cow<'_, str> {
    CONTROL_CHARS.replace_all(text, "")
}
