use crate::ClipboardError;
use std::future::Future;
use std::rc::Rc;

/// Asynchronous platform clipboard (the primary tier).
pub trait AsyncClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Synchronous select-and-copy command (the fallback tier).
///
/// `Ok(false)` means the platform refused the command without raising an error.
pub trait LegacyCopy {
    fn exec_copy(&self, text: &str) -> Result<bool, ClipboardError>;
}

impl<T: AsyncClipboard + ?Sized> AsyncClipboard for Rc<T> {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        (**self).write_text(text)
    }
}

impl<T: LegacyCopy + ?Sized> LegacyCopy for Rc<T> {
    fn exec_copy(&self, text: &str) -> Result<bool, ClipboardError> {
        (**self).exec_copy(text)
    }
}
