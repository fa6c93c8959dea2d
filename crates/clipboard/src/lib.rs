//! Clipboard writes for the editing surface.
//!
//! Platform access sits behind two traits: [`AsyncClipboard`] for the
//! asynchronous clipboard API and [`LegacyCopy`] for the older
//! select-and-copy command. [`copy_to_clipboard`] tries the first and falls
//! back to the second once; callers only ever see a `bool`.

mod adapter;
mod backend;
mod error;
mod memory;

pub use adapter::{ClipboardAdapter, ClipboardBackend, copy_to_clipboard};
pub use backend::{AsyncClipboard, LegacyCopy};
pub use error::ClipboardError;
pub use memory::{FailingClipboard, MemoryClipboard};
