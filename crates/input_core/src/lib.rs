//! # input_core
//!
//! UI-agnostic editing layer for the rich-text surface.
//!
//! - [`RichTextBuffer`]: text value, inline style runs, caret and selection
//! - [`StyleRuns`] / [`FormatSet`]: run-length encoded inline formatting
//! - [`transform`]: case transformations over plain text
//!
//! Nothing here measures, lays out or renders text; the shell translates its
//! events into byte offsets and calls in.

mod buffer;
mod format;
mod selection;
mod state;
mod text;
mod transform;

pub use buffer::RichTextBuffer;
pub use format::{FormatSet, InlineFormat, StyleRun, StyleRuns, UnknownFormat};
pub use selection::SelectionRange;
pub use transform::{TransformKind, UnknownTransform, transform, transform_named};

pub use text::{
    clamp_to_char_boundary, is_blank, next_cursor_boundary, normalize_newlines,
    prev_cursor_boundary,
};
