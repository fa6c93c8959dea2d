//! Backends for embedding without a platform clipboard, and for tests.

use crate::{AsyncClipboard, ClipboardError, LegacyCopy};
use std::cell::{Cell, RefCell};
use std::future::{Future, ready};

/// Process-local clipboard. Serves as either tier.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
    writes: Cell<usize>,
    refuse: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A legacy tier whose copy command is refused (`Ok(false)`), like a
    /// platform that ignores copy requests outside a user gesture.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn store(&self, text: &str) {
        *self.contents.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
    }
}

impl AsyncClipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        let result = if self.refuse {
            Err(ClipboardError::PermissionDenied)
        } else {
            self.store(text);
            Ok(())
        };
        ready(result)
    }
}

impl LegacyCopy for MemoryClipboard {
    fn exec_copy(&self, text: &str) -> Result<bool, ClipboardError> {
        if self.refuse {
            return Ok(false);
        }
        self.store(text);
        Ok(true)
    }
}

/// Backend that rejects every write with the same error.
#[derive(Clone, Debug)]
pub struct FailingClipboard {
    error: ClipboardError,
}

impl FailingClipboard {
    pub fn new(error: ClipboardError) -> Self {
        Self { error }
    }

    pub fn error(&self) -> &ClipboardError {
        &self.error
    }
}

impl AsyncClipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        ready(Err(self.error.clone()))
    }
}

impl LegacyCopy for FailingClipboard {
    fn exec_copy(&self, _text: &str) -> Result<bool, ClipboardError> {
        Err(self.error.clone())
    }
}
