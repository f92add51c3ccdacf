//! Renderer boundary
//!
//! Display state (a disabled trigger, a status line, a table of users) is
//! global, mutable, host-owned state. It stays behind [`ResultRenderer`] so
//! the machine and the dispatcher remain pure and independently testable.

use crate::descriptor::ActionId;
use crate::outcome::Outcome;

/// Visual class of a rendered result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    /// Operation accepted and running; the eventual outcome is still open.
    Info,
}

impl Status {
    pub fn of(outcome: &Outcome) -> Self {
        if outcome.success {
            Status::Success
        } else {
            Status::Error
        }
    }
}

/// Projects dispatch progress and settled outcomes onto a visible
/// indication.
pub trait ResultRenderer {
    /// An accepted trigger started its dispatch; show an in-progress note.
    fn pending(&mut self, id: ActionId, note: &str);

    /// A non-stale outcome settled. Called exactly once per settled
    /// dispatch; the payload arrives unmodified.
    fn settled(&mut self, id: ActionId, outcome: &Outcome);
}

/// Renderer for headless hosts: outcomes go to the log and nowhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogRenderer;

impl ResultRenderer for LogRenderer {
    fn pending(&mut self, id: ActionId, note: &str) {
        tracing::info!(action = %id, "{note}");
    }

    fn settled(&mut self, id: ActionId, outcome: &Outcome) {
        if outcome.success {
            tracing::info!(action = %id, "✓ {}", outcome.message);
        } else {
            tracing::warn!(action = %id, "✗ {}", outcome.message);
        }
    }
}
