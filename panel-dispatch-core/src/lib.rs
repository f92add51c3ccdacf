//! Core types for panel-dispatch
//!
//! This crate provides the client-side plumbing for a control panel that
//! triggers long-running backend operations over HTTP: a descriptor table
//! describing each dispatchable action, a per-action state machine that
//! enforces single-flight dispatch, an HTTP dispatcher that folds every
//! transport and application failure into one normalized [`Outcome`], and a
//! renderer boundary that keeps display mutation out of the control flow.
//!
//! # Core Concepts
//!
//! - **ActionDescriptor**: static description of one dispatchable action
//!   (method, payload builder, labels, cooldown)
//! - **ActionMachine**: lifecycle state per action (Idle, Pending, Settled,
//!   CoolingDown, back to Idle) plus the generation counter that makes
//!   stale responses inert
//! - **Dispatcher**: issues the request and classifies the result; it never
//!   returns an error, only outcomes
//! - **Store**: host state container with an effect-emitting reducer
//! - **ResultRenderer**: the only place display state is touched
//!
//! # Dispatch lifecycle
//!
//! Backend operations here run for minutes, so a trigger is a two-phase
//! exchange: an intent action asks the machine for a ticket, and a
//! completion action carries the outcome back with the ticket's generation.
//!
//! ```ignore
//! let mut machine = ActionMachine::new(ActionId::new("load"), Duration::from_secs(5));
//!
//! // Guard: a second trigger while one is in flight is rejected locally,
//! // before any network call.
//! let ticket = machine.try_begin(Instant::now())?;
//!
//! // The dispatch task captures the ticket and reports back through the
//! // action channel when the network call settles.
//! tasks.spawn(ticket.id, async move {
//!     let outcome = dispatcher.dispatch(&descriptor, &fields).await;
//!     Action::DidSettle { id: ticket.id, generation: ticket.generation, outcome }
//! });
//!
//! // Later, in the reducer: completions from superseded dispatches are
//! // dropped, never rendered.
//! match machine.settle(generation, outcome, Instant::now()) {
//!     Settle::Applied => { /* render, then start the cooldown */ }
//!     Settle::Stale => { /* nothing to do */ }
//! }
//! ```
//!
//! Responses may arrive out of order (a slow early request can settle after
//! a fast late one), which is why the generation check is load-bearing
//! rather than decorative. There is no true parallelism in the reducer loop,
//! so the counter substitutes for a lock.

pub mod descriptor;
pub mod dispatcher;
pub mod endpoints;
pub mod machine;
pub mod outcome;
pub mod render;
pub mod store;
#[cfg(feature = "tasks")]
pub mod tasks;
pub mod testing;

// Descriptor exports
pub use descriptor::{
    ActionDescriptor, ActionId, ActionTable, FieldValues, Method, PayloadBuilder, UnknownAction,
};

// Machine exports
pub use machine::{ActionMachine, AlreadyInFlight, Generation, Phase, Settle, Ticket};

// Dispatch exports
pub use dispatcher::{classify, ApiResponse, Dispatcher};
pub use endpoints::Endpoints;
pub use outcome::{Outcome, Payload};

// Renderer exports
pub use render::{LogRenderer, ResultRenderer, Status};

// Store exports
pub use store::{Action, ActionLogger, Middleware, Reducer, Store, Transition};

// Task exports (requires "tasks" feature)
#[cfg(feature = "tasks")]
pub use tasks::TaskManager;

// Testing exports
pub use testing::TestHarness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::descriptor::{
        ActionDescriptor, ActionId, ActionTable, FieldValues, Method, UnknownAction,
    };
    pub use crate::dispatcher::{classify, ApiResponse, Dispatcher};
    pub use crate::endpoints::Endpoints;
    pub use crate::machine::{ActionMachine, AlreadyInFlight, Generation, Phase, Settle, Ticket};
    pub use crate::outcome::{Outcome, Payload};
    pub use crate::render::{LogRenderer, ResultRenderer, Status};
    pub use crate::store::{Action, ActionLogger, Middleware, Reducer, Store, Transition};
    #[cfg(feature = "tasks")]
    pub use crate::tasks::TaskManager;
}
