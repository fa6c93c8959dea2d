use crate::{AsyncClipboard, LegacyCopy};
use std::future::Future;

/// Write `text` through `primary`, falling back to `legacy` once on failure.
///
/// Never fails: resolves to `true` when either tier took the text.
pub async fn copy_to_clipboard<P, L>(primary: &P, legacy: &L, text: &str) -> bool
where
    P: AsyncClipboard,
    L: LegacyCopy,
{
    match primary.write_text(text).await {
        Ok(()) => {
            log::debug!(target: "clipboard", "copied {} byte(s)", text.len());
            return true;
        }
        Err(err) => {
            log::warn!(target: "clipboard", "clipboard write failed ({err}), trying legacy copy");
        }
    }

    match legacy.exec_copy(text) {
        Ok(true) => {
            log::debug!(target: "clipboard", "copied {} byte(s) via legacy copy", text.len());
            true
        }
        Ok(false) => {
            log::warn!(target: "clipboard", "legacy copy command was refused");
            false
        }
        Err(err) => {
            log::warn!(target: "clipboard", "legacy copy failed: {err}");
            false
        }
    }
}

/// Anything the editor can hand text to for copying.
pub trait ClipboardBackend {
    fn copy_text(&self, text: &str) -> impl Future<Output = bool>;
}

/// Owns both tiers and exposes them as one [`ClipboardBackend`].
#[derive(Clone, Debug, Default)]
pub struct ClipboardAdapter<P, L> {
    primary: P,
    legacy: L,
}

impl<P, L> ClipboardAdapter<P, L> {
    pub fn new(primary: P, legacy: L) -> Self {
        Self { primary, legacy }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn legacy(&self) -> &L {
        &self.legacy
    }
}

impl<P: AsyncClipboard, L: LegacyCopy> ClipboardBackend for ClipboardAdapter<P, L> {
    fn copy_text(&self, text: &str) -> impl Future<Output = bool> {
        copy_to_clipboard(&self.primary, &self.legacy, text)
    }
}
