//! # glasspad
//!
//! Core of a rich-text formatting widget: a content-editable region with case
//! transformation, inline formatting, clipboard copy and markup sanitization.
//!
//! The shell (whatever draws the widget) feeds raw events into a
//! [`TextEditor`] and displays what comes back: sanitized markup, plain text
//! and short-lived [`Feedback`]. The pure pieces live in their own crates and
//! are re-exported here:
//!
//! - [`html`]: tokenizer, fragment builder, allow-list sanitizer, serializer
//! - [`input_core`]: rich-text buffer and case transformations
//! - [`clipboard`]: two-tier clipboard write

pub mod config;
pub mod editor;
pub mod feedback;
pub mod markup;
pub mod shortcut;

pub use clipboard;
pub use html;
pub use input_core;

pub use config::{Chrome, EditorConfig};
pub use editor::{InputOutcome, TextEditor};
pub use feedback::{BANNER_MESSAGE, Feedback, FeedbackKind, StatusMessage};
pub use shortcut::{Key, KeyChord, Modifiers, Shortcut, resolve_shortcut};

pub use html::{SanitizePolicy, sanitize, sanitize_markup};
pub use input_core::{FormatSet, InlineFormat, TransformKind, transform, transform_named};
