//! User-facing feedback the shell displays after editor operations.
//!
//! The editor only decides what to show and for how long; timers and
//! animations belong to the shell.

use std::fmt;
use std::time::Duration;

/// Text shown inside the success banner.
pub const BANNER_MESSAGE: &str = "Copied to clipboard!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusMessage {
    Editing,
    ReadyToFormat,
    TextPasted,
    AddTextFirst,
    ConvertedAndCopied,
    FormattingApplied,
    NothingToCopy,
    CopiedToClipboard,
    CopyFailed,
    TextCleared,
}

impl StatusMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusMessage::Editing => "Editing...",
            StatusMessage::ReadyToFormat => "Ready to format",
            StatusMessage::TextPasted => "Text pasted",
            StatusMessage::AddTextFirst => "Add some text first",
            StatusMessage::ConvertedAndCopied => "Text converted & copied",
            StatusMessage::FormattingApplied => "Formatting applied",
            StatusMessage::NothingToCopy => "Nothing to copy",
            StatusMessage::CopiedToClipboard => "Copied to clipboard",
            StatusMessage::CopyFailed => "Copy failed",
            StatusMessage::TextCleared => "Text cleared",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Replaces the status line text until the next status.
    Status,
    /// Shown, then hidden again after `duration`.
    Banner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
    pub duration: Option<Duration>,
}

impl Feedback {
    pub fn status(message: StatusMessage) -> Self {
        Self {
            kind: FeedbackKind::Status,
            message: message.as_str(),
            duration: None,
        }
    }

    pub fn banner(duration: Duration) -> Self {
        Self {
            kind: FeedbackKind::Banner,
            message: BANNER_MESSAGE,
            duration: Some(duration),
        }
    }
}
