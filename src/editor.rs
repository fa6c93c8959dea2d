//! Editing session: routes shell events through the sanitizer, the buffer, the
//! transformer and the clipboard, and queues feedback for the chrome.

use crate::config::EditorConfig;
use crate::feedback::{Feedback, StatusMessage};
use crate::markup::{fragment_to_segments, segments_to_markup};
use crate::shortcut::{Key, KeyChord, Shortcut, resolve_shortcut};
use clipboard::ClipboardBackend;
use html::{parse_fragment, sanitize_with_report};
use input_core::{FormatSet, InlineFormat, RichTextBuffer, TransformKind, transform};

/// Result of feeding edited markup back into the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The markup was already clean; caret and selection are kept.
    Unchanged,
    /// The markup was rewritten by the sanitizer; the caret moved to the end.
    Replaced,
}

pub struct TextEditor<C> {
    config: EditorConfig,
    buffer: RichTextBuffer,
    clipboard: C,
    focused: bool,
    status: Option<StatusMessage>,
    pending: Vec<Feedback>,
}

impl<C: ClipboardBackend> TextEditor<C> {
    pub fn new(config: EditorConfig, clipboard: C) -> Self {
        Self {
            config,
            buffer: RichTextBuffer::new(),
            clipboard,
            focused: false,
            status: None,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &RichTextBuffer {
        &self.buffer
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Plain text of the content.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Content rendered as canonical, sanitized markup.
    pub fn content_markup(&self) -> String {
        segments_to_markup(self.buffer.segments())
    }

    /// Formats of the selection (or at the caret), for the format buttons.
    pub fn active_formats(&self) -> FormatSet {
        self.buffer.active_formats()
    }

    /// Current status line text; always `None` without a status line.
    pub fn status(&self) -> Option<&'static str> {
        self.status.map(StatusMessage::as_str)
    }

    /// Feedback queued since the last [`take_feedback`](Self::take_feedback).
    pub fn feedback(&self) -> &[Feedback] {
        &self.pending
    }

    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.pending)
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.set_status(StatusMessage::Editing);
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.set_status(StatusMessage::ReadyToFormat);
    }

    /// Load markup produced by the editing surface after a change.
    ///
    /// The outcome compares the input with what the session now displays, so
    /// anything the buffer cannot carry (colors, block structure) counts as a
    /// replacement.
    pub fn handle_input(&mut self, markup: &str) -> InputOutcome {
        let (clean, report) = sanitize_with_report(&parse_fragment(markup), &self.config.policy);

        let caret = self.buffer.caret();
        let anchor = self.buffer.selection().map(|sel| {
            if sel.end == caret { sel.start } else { sel.end }
        });
        self.buffer.replace_with_segments(fragment_to_segments(&clean));

        let outcome = if self.content_markup() == markup {
            self.buffer.set_selection(anchor.unwrap_or(caret), caret);
            InputOutcome::Unchanged
        } else {
            InputOutcome::Replaced
        };
        log::debug!(
            target: "glasspad.editor",
            "input of {} byte(s): {outcome:?} ({report:?})",
            markup.len()
        );

        self.set_status(StatusMessage::Editing);
        outcome
    }

    /// Typed text from the shell, inserted at the caret.
    pub fn handle_text(&mut self, text: &str) {
        self.buffer.insert_text(text);
    }

    /// Paste a plain-text payload at the caret. Rich clipboard flavours are
    /// never consulted.
    pub fn handle_paste(&mut self, plain: &str) {
        self.buffer.insert_text(plain);
        self.set_status(StatusMessage::TextPasted);
    }

    /// Selection change reported by the shell (byte offsets).
    pub fn set_selection(&mut self, anchor: usize, caret: usize) {
        self.buffer.set_selection(anchor, caret);
    }

    /// Replace the content with its transformed plain text (dropping
    /// formatting) and copy it. Returns whether the copy succeeded.
    pub async fn apply_transformation(&mut self, kind: TransformKind) -> bool {
        if self.config.chrome.requires_content_to_transform() && self.buffer.is_blank() {
            self.set_status(StatusMessage::AddTextFirst);
            return false;
        }

        let transformed = transform(self.buffer.text(), kind);
        log::debug!(target: "glasspad.editor", "applying {kind} to {} byte(s)", transformed.len());
        self.buffer.replace_all(&transformed);

        let copied = self.clipboard.copy_text(&transformed).await;
        if copied {
            self.show_banner();
            self.set_status(StatusMessage::ConvertedAndCopied);
        } else {
            self.set_status(StatusMessage::CopyFailed);
        }
        copied
    }

    /// [`apply_transformation`](Self::apply_transformation) by button name;
    /// `None` (and nothing changes) for an unknown name.
    pub async fn apply_transformation_named(&mut self, name: &str) -> Option<bool> {
        match name.parse::<TransformKind>() {
            Ok(kind) => Some(self.apply_transformation(kind).await),
            Err(err) => {
                log::debug!(target: "glasspad.editor", "{err}");
                None
            }
        }
    }

    /// Toggle an inline format over the selection, or over everything when
    /// nothing is selected. Returns the new state of the format, `None` when
    /// the content is empty.
    pub fn apply_formatting(&mut self, format: InlineFormat) -> Option<bool> {
        let state = self.buffer.toggle_format(format);
        self.set_status(StatusMessage::FormattingApplied);
        state
    }

    /// Copy the whole plain text. Returns whether it reached the clipboard.
    pub async fn copy_text(&mut self) -> bool {
        if self.buffer.is_blank() {
            self.set_status(StatusMessage::NothingToCopy);
            return false;
        }

        let copied = self.clipboard.copy_text(self.buffer.text()).await;
        if copied {
            self.show_banner();
            self.set_status(StatusMessage::CopiedToClipboard);
        } else {
            self.set_status(StatusMessage::CopyFailed);
        }
        copied
    }

    /// Empty the content and keep editing.
    pub fn clear_text(&mut self) {
        self.buffer.clear();
        self.focused = true;
        self.set_status(StatusMessage::TextCleared);
    }

    /// Dispatch a key chord while focused. Returns `true` when the chord was
    /// consumed and the shell should suppress its default action.
    ///
    /// Ctrl/Cmd+C copies (when the chrome allows it) but is not consumed, so the
    /// platform's own copy of the selection still runs.
    pub async fn handle_key(&mut self, chord: KeyChord) -> bool {
        if !self.focused {
            return false;
        }

        if let Some(shortcut) = resolve_shortcut(chord, self.config.chrome) {
            log::trace!(target: "glasspad.editor", "shortcut {shortcut:?}");
            return match shortcut {
                Shortcut::ToggleFormat(format) => {
                    self.apply_formatting(format);
                    true
                }
                Shortcut::CopyAll => {
                    self.copy_text().await;
                    false
                }
            };
        }

        let selecting = chord.modifiers.shift;
        match chord.key {
            Key::Char(_) => return false,
            Key::Enter => self.buffer.insert_text("\n"),
            Key::Backspace => self.buffer.backspace(),
            Key::Delete => self.buffer.delete(),
            Key::ArrowLeft => self.buffer.move_caret_left(selecting),
            Key::ArrowRight => self.buffer.move_caret_right(selecting),
            Key::Home => self.buffer.move_caret_to_start(selecting),
            Key::End => self.buffer.move_caret_to_end(selecting),
        }
        true
    }

    fn set_status(&mut self, message: StatusMessage) {
        if !self.config.chrome.has_status_line() {
            return;
        }
        self.status = Some(message);
        self.pending.push(Feedback::status(message));
    }

    fn show_banner(&mut self) {
        self.pending
            .push(Feedback::banner(self.config.chrome.banner_duration()));
    }
}
