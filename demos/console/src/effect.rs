//! Side effects declared by the reducer
//!
//! Effects are data; the main loop performs them. Keeping the network and
//! the timers out of the reducer is what makes the dispatch flow testable
//! without a backend.

use std::time::Duration;

use panel_dispatch::{ActionId, FieldValues, Generation};

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Issue the network request for an accepted trigger. Carries the
    /// generation the completion must echo back and a snapshot of the form
    /// fields at trigger time.
    Dispatch {
        id: ActionId,
        generation: Generation,
        fields: FieldValues,
    },
    /// Arm the post-settlement cooldown timer.
    Cooldown {
        id: ActionId,
        generation: Generation,
        delay: Duration,
    },
}
