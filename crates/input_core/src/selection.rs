//! Selection ranges over the buffer's text.

use std::ops::Range;

/// A selection as a normalized byte range (`start <= end`).
///
/// Offsets produced by [`RichTextBuffer`](crate::RichTextBuffer) always sit on
/// UTF-8 character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Build a range from an anchor and a focus in either order.
    #[inline]
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self {
            start: anchor.min(focus),
            end: anchor.max(focus),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The selected text, or `None` when an endpoint is out of bounds or
    /// splits a character.
    pub fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.get(self.start..self.end)
    }
}

impl From<SelectionRange> for Range<usize> {
    fn from(sel: SelectionRange) -> Self {
        sel.as_range()
    }
}
