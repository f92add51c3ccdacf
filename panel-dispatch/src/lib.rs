//! Action dispatch and status control for backend control panels
//!
//! This is the facade crate: it re-exports everything from
//! `panel-dispatch-core` so hosts depend on one crate.
//!
//! A control panel built on this stack describes each backend operation
//! once in an [`ActionTable`], guards it with an [`ActionMachine`]
//! (single-flight, stale-response suppression), dispatches it through the
//! [`Dispatcher`] (every failure folds into an [`Outcome`]), and renders
//! results behind the [`ResultRenderer`] boundary.
//!
//! Enable the `tasks` feature for the `TaskManager` that runs dispatch
//! futures and cooldown timers.

pub use panel_dispatch_core::*;

// Re-export the assertion macros alongside the harness.
pub use panel_dispatch_core::{assert_emitted, assert_not_emitted, count_emitted};
