//! Test utilities for panel-dispatch hosts
//!
//! - [`TestHarness`]: state plus an action channel, for driving reducers
//!   and effect handlers without a terminal or a network
//! - [`assert_emitted!`] / [`assert_not_emitted!`] / [`count_emitted!`]:
//!   assertions over drained actions
//!
//! # Example
//!
//! ```ignore
//! let mut harness = TestHarness::<AppState, Action>::new(AppState::default());
//!
//! // Simulate what a completed dispatch task would send.
//! harness.emit(Action::DidSettle { id, generation, outcome });
//!
//! let actions = harness.drain_emitted();
//! assert_emitted!(actions, Action::DidSettle { .. });
//! ```

use tokio::sync::mpsc;

use crate::store::Action;

/// Generic test harness: host state plus an action channel for capturing
/// what handlers and tasks emit.
pub struct TestHarness<S, A: Action> {
    /// The host state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// A clone of the action sender, for handing to tasks under test.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action, as a handler or completed task would.
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Drain every emitted action.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Whether anything was emitted (drains the channel).
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Assert that an action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count the actions matching a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
