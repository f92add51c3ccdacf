//! Console control panel for the cache/database demo backend
//!
//! A terminal control panel for the backend: five trigger controls (seed a
//! key, run the cache and database load tests, create and list users), each
//! driven through the panel-dispatch lifecycle: single-flight guard,
//! pending indication, normalized outcome, cooldown.
//!
//! Structure follows the usual dispatch layout:
//! - [`state`]: everything the UI renders from
//! - [`action`]: what can happen
//! - [`reducer`]: how state changes (pure; effects come back as data)
//! - [`effect`]: the side effects the main loop performs
//! - [`panel`]: the concrete action table, routes, and payload builders
//! - [`events`]: terminal event polling
//! - [`components`]: ratatui rendering

pub mod action;
pub mod components;
pub mod effect;
pub mod events;
pub mod panel;
pub mod reducer;
pub mod state;
