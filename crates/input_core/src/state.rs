//! Internal buffer state.

use crate::format::StyleRuns;

/// Text, styles and caret of one editing surface.
///
/// Managed by [`RichTextBuffer`](crate::RichTextBuffer); `runs` always covers
/// `value` exactly.
#[derive(Clone, Debug, Default)]
pub(crate) struct BufferState {
    pub value: String,

    pub runs: StyleRuns,

    /// Monotonic revision counter, incremented on any text or style change.
    pub value_rev: u64,

    /// Caret position as a byte index into `value` (always on a UTF-8 char boundary).
    pub caret: usize,

    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,
}
