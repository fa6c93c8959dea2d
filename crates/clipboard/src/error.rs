use thiserror::Error;

/// Why a clipboard backend could not take the text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard access was denied")]
    PermissionDenied,

    #[error("clipboard is not available in this context")]
    Unsupported,

    #[error("copy command failed: {0}")]
    CommandFailed(String),
}
