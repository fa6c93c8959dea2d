//! Rich-text buffer: a UTF-8 value, its style runs, caret and selection.
//!
//! The buffer is UI-agnostic: it never measures or lays out text. The shell
//! translates pointer and selection events into byte offsets and calls the
//! editing operations here.

use crate::format::{FormatSet, InlineFormat, StyleRuns};
use crate::selection::SelectionRange;
use crate::state::BufferState;
use crate::text::{
    clamp_to_char_boundary, is_blank, next_cursor_boundary, normalize_newlines,
    prev_cursor_boundary,
};

/// Editable text with inline formatting.
///
/// # Example
///
/// ```
/// use input_core::{InlineFormat, RichTextBuffer};
///
/// let mut buffer = RichTextBuffer::from_text("Hello");
/// buffer.insert_text(" World");
/// buffer.set_selection(0, 5);
/// buffer.toggle_format(InlineFormat::Bold);
///
/// assert_eq!(buffer.text(), "Hello World");
/// assert!(buffer.active_formats().contains(InlineFormat::Bold));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RichTextBuffer {
    st: BufferState,
}

impl RichTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unformatted buffer holding `text`, caret at the end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        load_plain(&mut buffer.st, text);
        buffer
    }

    /// Buffer built from consecutive `(text, formats)` pieces, caret at the end.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = (S, FormatSet)>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        load_segments(&mut buffer.st, segments);
        buffer
    }

    pub fn text(&self) -> &str {
        &self.st.value
    }

    pub fn len(&self) -> usize {
        self.st.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.st.value.is_empty()
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.st.value)
    }

    pub fn caret(&self) -> usize {
        self.st.caret
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        selection_range(&self.st.value, self.st.selection_anchor, self.st.caret)
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection().and_then(|sel| sel.slice(&self.st.value))
    }

    /// Increments on any text or style change. Useful for cache invalidation.
    pub fn value_revision(&self) -> u64 {
        self.st.value_rev
    }

    pub fn style_runs(&self) -> &StyleRuns {
        &self.st.runs
    }

    /// The text split at format changes, in order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, FormatSet)> + '_ {
        self.st
            .runs
            .segments()
            .filter_map(|(range, formats)| self.st.value.get(range).map(|s| (s, formats)))
    }

    /// Insert text at the caret, replacing any selection.
    ///
    /// Newlines are normalized (CRLF/CR -> LF). The new text takes the formats
    /// of the first selected character, or of the character before the caret.
    pub fn insert_text(&mut self, s: &str) {
        let st = &mut self.st;
        clamp_state(st);
        let s = normalize_newlines(s);
        if s.is_empty() {
            return;
        }

        let formats = match selection_range(&st.value, st.selection_anchor, st.caret) {
            Some(sel) => st.runs.formats_at(sel.start),
            None => st.runs.formats_before(st.caret),
        };
        delete_selection_if_any(st);

        let caret = st.caret;
        st.value.insert_str(caret, &s);
        st.runs.insert(caret, s.len(), formats);
        st.caret = clamp_to_char_boundary(&st.value, caret + s.len());
        mark_dirty(st);
    }

    /// Delete the character before the caret, or the selection if there is one.
    pub fn backspace(&mut self) {
        let st = &mut self.st;
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret == 0 {
            return;
        }

        let caret = st.caret;
        let prev = prev_cursor_boundary(&st.value, caret);
        st.value.drain(prev..caret);
        st.runs.remove(prev..caret);
        st.caret = prev;
        mark_dirty(st);
    }

    /// Delete the character after the caret, or the selection if there is one.
    pub fn delete(&mut self) {
        let st = &mut self.st;
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret >= st.value.len() {
            return;
        }

        let caret = st.caret;
        let next = next_cursor_boundary(&st.value, caret);
        st.value.drain(caret..next);
        st.runs.remove(caret..next);
        mark_dirty(st);
    }

    pub fn move_caret_left(&mut self, selecting: bool) {
        let st = &mut self.st;
        clamp_state(st);
        if !selecting {
            if let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) {
                st.caret = sel.start;
                st.selection_anchor = None;
                return;
            }
        }
        let caret = prev_cursor_boundary(&st.value, st.caret);
        set_caret_in_state(st, caret, selecting);
    }

    pub fn move_caret_right(&mut self, selecting: bool) {
        let st = &mut self.st;
        clamp_state(st);
        if !selecting {
            if let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) {
                st.caret = sel.end;
                st.selection_anchor = None;
                return;
            }
        }
        let caret = next_cursor_boundary(&st.value, st.caret);
        set_caret_in_state(st, caret, selecting);
    }

    pub fn move_caret_to_start(&mut self, selecting: bool) {
        clamp_state(&mut self.st);
        set_caret_in_state(&mut self.st, 0, selecting);
    }

    pub fn move_caret_to_end(&mut self, selecting: bool) {
        clamp_state(&mut self.st);
        let end = self.st.value.len();
        set_caret_in_state(&mut self.st, end, selecting);
    }

    pub fn select_all(&mut self) {
        self.set_selection(0, self.st.value.len());
    }

    /// Set the caret to a byte position, extending the selection when `selecting`.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        let st = &mut self.st;
        clamp_state(st);
        let caret = clamp_to_char_boundary(&st.value, caret);
        set_caret_in_state(st, caret, selecting);
    }

    /// Select `anchor..caret` (in either direction), as reported by the shell.
    pub fn set_selection(&mut self, anchor: usize, caret: usize) {
        let st = &mut self.st;
        st.caret = clamp_to_char_boundary(&st.value, caret);
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, anchor));
        normalize_selection_anchor(st);
    }

    /// Replace the whole content with unformatted text, caret at the end.
    pub fn replace_all(&mut self, text: &str) {
        load_plain(&mut self.st, text);
        mark_dirty(&mut self.st);
    }

    /// Replace the whole content with formatted pieces, caret at the end.
    pub fn replace_with_segments<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = (S, FormatSet)>,
        S: AsRef<str>,
    {
        load_segments(&mut self.st, segments);
        mark_dirty(&mut self.st);
    }

    pub fn clear(&mut self) {
        let st = &mut self.st;
        let changed = !st.value.is_empty();
        st.value.clear();
        st.runs.clear();
        st.caret = 0;
        st.selection_anchor = None;
        if changed {
            mark_dirty(st);
        }
    }

    /// Toggle `format` over the selection, or over the whole content when the
    /// selection is collapsed (the caret then moves to the end).
    ///
    /// The format is switched on unless the whole target already carries it.
    /// Returns the new state, or `None` when there is nothing to format.
    pub fn toggle_format(&mut self, format: InlineFormat) -> Option<bool> {
        let st = &mut self.st;
        clamp_state(st);
        let selection = selection_range(&st.value, st.selection_anchor, st.caret);
        let target = selection.map_or(0..st.value.len(), |sel| sel.as_range());
        if target.is_empty() {
            return None;
        }

        let enable = !st.runs.covers(target.clone(), format);
        log::trace!(
            target: "input_core.format",
            "{} {format} over {target:?}",
            if enable { "applying" } else { "removing" }
        );
        st.runs.update_range(target, |formats| {
            if enable {
                formats.with(format)
            } else {
                formats.without(format)
            }
        });
        if selection.is_none() {
            st.caret = st.value.len();
        }
        mark_dirty(st);
        Some(enable)
    }

    /// Formats shared by the whole selection, or those the caret would type
    /// with when the selection is collapsed. Derived from the style runs on
    /// every call.
    pub fn active_formats(&self) -> FormatSet {
        match self.selection() {
            Some(sel) => self.st.runs.common_formats(sel.as_range()),
            None if self.st.value.is_empty() => FormatSet::empty(),
            None => self.st.runs.formats_before(self.st.caret),
        }
    }
}

fn load_plain(st: &mut BufferState, text: &str) {
    let text = normalize_newlines(text).into_owned();
    st.runs = StyleRuns::uniform(text.len(), FormatSet::empty());
    st.caret = text.len();
    st.value = text;
    st.selection_anchor = None;
}

fn load_segments<I, S>(st: &mut BufferState, segments: I)
where
    I: IntoIterator<Item = (S, FormatSet)>,
    S: AsRef<str>,
{
    let mut value = String::new();
    let mut runs = StyleRuns::new();
    for (text, formats) in segments {
        let text = normalize_newlines(text.as_ref());
        value.push_str(&text);
        runs.push(text.len(), formats);
    }
    st.caret = value.len();
    st.value = value;
    st.runs = runs;
    st.selection_anchor = None;
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = clamp_to_char_boundary(value, anchor?);
    let caret = clamp_to_char_boundary(value, caret);
    let sel = SelectionRange::new(anchor, caret);
    (!sel.is_empty()).then_some(sel)
}

fn set_caret_in_state(st: &mut BufferState, caret: usize, selecting: bool) {
    if selecting {
        if st.selection_anchor.is_none() {
            st.selection_anchor = Some(st.caret);
        }
        st.caret = caret;
        normalize_selection_anchor(st);
    } else {
        st.caret = caret;
        st.selection_anchor = None;
    }
}

fn normalize_selection_anchor(st: &mut BufferState) {
    let Some(anchor) = st.selection_anchor else {
        return;
    };
    let anchor = clamp_to_char_boundary(&st.value, anchor);
    // A collapsed selection is just a caret.
    st.selection_anchor = (anchor != st.caret).then_some(anchor);
}

fn delete_selection_if_any(st: &mut BufferState) -> bool {
    let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) else {
        st.selection_anchor = None;
        return false;
    };

    st.value.drain(sel.as_range());
    st.runs.remove(sel.as_range());
    st.caret = sel.start;
    st.selection_anchor = None;
    mark_dirty(st);
    true
}

fn clamp_state(st: &mut BufferState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}

fn mark_dirty(st: &mut BufferState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
