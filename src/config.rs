//! Editor configuration: which chrome the widget is embedded in, and the
//! sanitize policy applied to incoming markup.

use html::SanitizePolicy;
use std::time::Duration;

/// Surface chrome around the editing region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Chrome {
    /// Status line under the editor, success banner, copy/clear buttons and a
    /// Ctrl/Cmd+C shortcut.
    #[default]
    StatusLine,
    /// Transient banner only; no status text, no copy or clear controls.
    FeedbackBanner,
}

impl Chrome {
    pub fn has_status_line(self) -> bool {
        matches!(self, Chrome::StatusLine)
    }

    /// How long the success banner stays up.
    pub fn banner_duration(self) -> Duration {
        match self {
            Chrome::StatusLine => Duration::from_millis(2500),
            Chrome::FeedbackBanner => Duration::from_millis(2000),
        }
    }

    /// Whether Ctrl/Cmd+C copies the whole content.
    pub fn copies_on_shortcut(self) -> bool {
        matches!(self, Chrome::StatusLine)
    }

    /// Whether a transformation of blank content is refused up front.
    pub fn requires_content_to_transform(self) -> bool {
        matches!(self, Chrome::StatusLine)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorConfig {
    pub chrome: Chrome,
    pub policy: SanitizePolicy,
}

impl EditorConfig {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            policy: SanitizePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SanitizePolicy) -> Self {
        self.policy = policy;
        self
    }
}
