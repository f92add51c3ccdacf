//! Async task lifecycle for dispatches and cooldown timers
//!
//! The task manager owns the futures spawned for accepted triggers and the
//! one-shot timers that re-arm a trigger after its cooldown. Completions
//! come back as actions on the host's channel; the manager itself never
//! touches state.
//!
//! Keys are action ids and dispatch tasks are first-wins: while a task for
//! an id is live, `spawn` refuses to start another. In-flight work is never
//! cancelled and replaced (there is no request cancellation in this system);
//! superseded completions are made inert by the machine's generation check.
//!
//! # Example
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! tasks.spawn(ticket.id, async move {
//!     let outcome = dispatcher.dispatch(&descriptor, &fields).await;
//!     Action::DidSettle { id: ticket.id, generation: ticket.generation, outcome }
//! });
//!
//! // Re-arm the trigger after the cooldown.
//! tasks.schedule(ticket.id, descriptor.cooldown, move || {
//!     Action::CooldownDidExpire { id: ticket.id, generation: ticket.generation }
//! });
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::descriptor::ActionId;
use crate::store::Action;

/// Manages dispatch futures and cooldown timers for the panel.
pub struct TaskManager<A> {
    dispatches: HashMap<ActionId, AbortHandle>,
    timers: HashMap<ActionId, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a task manager sending completions to `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            dispatches: HashMap::new(),
            timers: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn the future for an accepted dispatch.
    ///
    /// Returns `false` (and spawns nothing) when a live dispatch task
    /// already holds the id. The state machine guard makes that unreachable
    /// in normal wiring; the check here keeps a missed guard from fanning
    /// out duplicate backend work.
    pub fn spawn<F>(&mut self, id: ActionId, future: F) -> bool
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.reap();
        if self.dispatches.contains_key(&id) {
            tracing::warn!(action = %id, "refusing duplicate dispatch task");
            return false;
        }

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });
        self.dispatches.insert(id, handle.abort_handle());
        true
    }

    /// Send an action after a delay.
    ///
    /// Used for cooldown expiry; at most one timer per id is live at a time
    /// (the machine settles before a new cooldown can start), so a stale
    /// finished entry is simply replaced.
    pub fn schedule<F>(&mut self, id: ActionId, delay: Duration, action_fn: F)
    where
        F: FnOnce() -> A + Send + 'static,
    {
        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(action_fn());
        });
        if let Some(old) = self.timers.insert(id, handle.abort_handle()) {
            old.abort();
        }
    }

    /// Whether a dispatch task for the id is still running.
    pub fn is_running(&self, id: ActionId) -> bool {
        self.dispatches
            .get(&id)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Number of live dispatch tasks.
    pub fn len(&self) -> usize {
        self.dispatches
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Abort everything. For shutdown only; in-flight dispatches are never
    /// cancelled during normal operation.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.dispatches.drain() {
            handle.abort();
        }
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    fn reap(&mut self) {
        self.dispatches.retain(|_, handle| !handle.is_finished());
        self.timers.retain(|_, handle| !handle.is_finished());
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.dispatches.drain() {
            handle.abort();
        }
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}
