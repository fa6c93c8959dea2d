use clipboard::{
    AsyncClipboard, ClipboardAdapter, ClipboardBackend, ClipboardError, FailingClipboard,
    LegacyCopy, MemoryClipboard, copy_to_clipboard,
};
use pollster::block_on;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Primary tier that suspends once before failing, like a permission prompt
/// the user dismisses.
struct PendingThenDenied {
    polls: Rc<Cell<usize>>,
}

struct YieldOnce {
    yielded: bool,
    polls: Rc<Cell<usize>>,
}

impl Future for YieldOnce {
    type Output = Result<(), ClipboardError>;

    fn poll(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Self::Output> {
        self.polls.set(self.polls.get() + 1);
        if self.yielded {
            std::task::Poll::Ready(Err(ClipboardError::PermissionDenied))
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    }
}

impl AsyncClipboard for PendingThenDenied {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        YieldOnce {
            yielded: false,
            polls: Rc::clone(&self.polls),
        }
    }
}

/// Legacy tier that counts invocations.
#[derive(Default)]
struct CountingLegacy {
    calls: Cell<usize>,
}

impl LegacyCopy for CountingLegacy {
    fn exec_copy(&self, _text: &str) -> Result<bool, ClipboardError> {
        self.calls.set(self.calls.get() + 1);
        Ok(true)
    }
}

#[test]
fn fallback_runs_after_the_primary_future_settles() {
    let polls = Rc::new(Cell::new(0));
    let primary = PendingThenDenied {
        polls: Rc::clone(&polls),
    };
    let legacy = CountingLegacy::default();

    assert!(block_on(copy_to_clipboard(&primary, &legacy, "text")));
    assert_eq!(polls.get(), 2);
    assert_eq!(legacy.calls.get(), 1);
}

#[test]
fn shared_backends_observe_writes() {
    let shared = Rc::new(MemoryClipboard::new());
    let adapter = ClipboardAdapter::new(
        FailingClipboard::new(ClipboardError::Unsupported),
        Rc::clone(&shared),
    );

    assert!(block_on(adapter.copy_text("first")));
    assert!(block_on(adapter.copy_text("second")));
    assert_eq!(shared.contents().as_deref(), Some("second"));
    assert_eq!(shared.write_count(), 2);
}

#[test]
fn empty_text_is_still_written() {
    let memory = MemoryClipboard::new();
    assert!(block_on(copy_to_clipboard(
        &memory,
        &FailingClipboard::new(ClipboardError::Unsupported),
        ""
    )));
    assert_eq!(memory.contents().as_deref(), Some(""));
}

#[test]
fn errors_render_for_logs() {
    assert_eq!(
        ClipboardError::CommandFailed("execCommand threw".into()).to_string(),
        "copy command failed: execCommand threw"
    );
    assert_eq!(
        ClipboardError::PermissionDenied.to_string(),
        "clipboard access was denied"
    );
}
