//! UTF-8 offset helpers shared by the buffer's editing operations.

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to its start.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The character boundary before `i`, or 0 at the start.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_cursor_boundary(s, 4), 1);
/// assert_eq!(prev_cursor_boundary(s, 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// The character boundary after `i`, or `s.len()` at the end.
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(next_cursor_boundary(s, 1), 4);
/// assert_eq!(next_cursor_boundary(s, 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Normalize line endings to LF (CRLF and lone CR both become `\n`).
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// True when `s` has no characters other than whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
