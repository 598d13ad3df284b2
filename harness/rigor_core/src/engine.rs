//! Notification routing from test contexts to the listener.

use parking_lot::Mutex;

use crate::event::Event;
use crate::listener::ResultsListener;

/// Forwards notifications to at most one [`ResultsListener`].
///
/// The engine performs no validation of its own. Without a listener every
/// notification is a silent no-op.
#[derive(Default)]
pub struct TestEngine {
    listener: Mutex<Option<Box<dyn ResultsListener>>>,
}

impl TestEngine {
    pub fn new() -> Self {
        TestEngine::default()
    }

    pub fn with_listener(listener: Box<dyn ResultsListener>) -> Self {
        TestEngine {
            listener: Mutex::new(Some(listener)),
        }
    }

    /// Take ownership of `listener`, dropping the one previously held.
    pub fn set_listener(&self, listener: Box<dyn ResultsListener>) {
        let previous = self.listener.lock().replace(listener);
        // Dropped outside the lock.
        drop(previous);
    }

    pub fn clear_listener(&self) {
        let previous = self.listener.lock().take();
        drop(previous);
    }

    pub fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }

    /// Deliver `event` to the listener, if any.
    ///
    /// Only contexts and scopes notify, so every reported failure is also
    /// counted toward the test's terminal event.
    pub(crate) fn notify(&self, event: &Event) {
        let mut slot = self.listener.lock();
        if let Some(listener) = slot.as_deref_mut() {
            tracing::trace!(kind = ?event.kind(), test = event.test(), "notify");
            event.deliver(listener);
        }
    }
}

impl std::fmt::Debug for TestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestEngine")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
