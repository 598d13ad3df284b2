//! RAII guard making a [`TestContext`] the current one for this thread.
//!
//! Check macros do not take a context parameter. They ask
//! [`ScopedTest::current`] for the innermost active context instead, which is
//! the top of a thread-local stack maintained by [`ScopedTest`] guards.
//!
//! # Design
//!
//! The stack holds `Rc<TestContext>`, so contexts never cross threads: each
//! thread has its own independent stack, and a check on one thread can never
//! observe a test running on another. Guards push on construction and pop on
//! drop, including during unwinding, so the stack stays strictly LIFO.
//!
//! Using a check with no active scope is a bug in the harness's usage, not a
//! test failure, and panics.
//!
//! # Usage
//!
//! ```text
//! let context = TestContext::new(engine, "addition", location!());
//! {
//!     let _scope = ScopedTest::new(context); // emits RunningTest
//!     check_eq!(2 + 2, 4);
//! } // emits TestSucceeded or TestFailed
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::context::TestContext;
use crate::event::Event;

thread_local! {
    /// Active contexts on this thread, innermost last.
    static CONTEXT_STACK: RefCell<Vec<Rc<TestContext>>> = const { RefCell::new(Vec::new()) };
}

const NO_ACTIVE_TEST: &str = "rigor check used outside of a running test";

/// Guard that keeps one [`TestContext`] current while it is alive.
///
/// On drop the previous context (if any) becomes current again and the test's
/// terminal event is emitted: `TestFailed` if a failure was reported through
/// the context or the scope is being left by a panic, `TestSucceeded`
/// otherwise.
#[must_use = "the test stops being current as soon as the guard is dropped"]
pub struct ScopedTest {
    context: Rc<TestContext>,
}

impl ScopedTest {
    /// Make `context` current and emit `RunningTest`.
    pub fn new(context: TestContext) -> Self {
        let context = Rc::new(context);
        CONTEXT_STACK.with(|stack| stack.borrow_mut().push(Rc::clone(&context)));
        context.notify_lifecycle(|test, location| Event::RunningTest { test, location });
        ScopedTest { context }
    }

    /// The context this guard made current.
    pub fn context(&self) -> &TestContext {
        &self.context
    }

    /// The innermost active context on this thread.
    ///
    /// # Panics
    ///
    /// Panics when no scope is active.
    pub fn current() -> Rc<TestContext> {
        match Self::try_current() {
            Some(context) => context,
            None => panic!("{NO_ACTIVE_TEST}"),
        }
    }

    pub fn try_current() -> Option<Rc<TestContext>> {
        CONTEXT_STACK.with(|stack| stack.borrow().last().cloned())
    }

    /// Run `f` against the current context.
    ///
    /// The stack is not borrowed while `f` runs, so `f` may open nested
    /// scopes.
    ///
    /// # Panics
    ///
    /// Panics when no scope is active.
    pub fn with_current<R>(f: impl FnOnce(&TestContext) -> R) -> R {
        let context = Self::current();
        f(&context)
    }
}

impl Drop for ScopedTest {
    fn drop(&mut self) {
        CONTEXT_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            // Guards are dropped in reverse creation order, so ours is on top.
            // A leaked inner guard would leave its context above ours; drop it
            // along with this scope.
            if let Some(pos) = stack.iter().rposition(|c| Rc::ptr_eq(c, &self.context)) {
                stack.truncate(pos);
            }
        });

        if self.context.has_failed() || std::thread::panicking() {
            self.context
                .notify_lifecycle(|test, location| Event::TestFailed { test, location });
        } else {
            self.context
                .notify_lifecycle(|test, location| Event::TestSucceeded { test, location });
        }
    }
}
