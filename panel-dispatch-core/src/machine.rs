//! Per-action lifecycle state machine
//!
//! One [`ActionMachine`] exists per registered action, lives for the host's
//! lifetime, and is mutated only through its transition methods. It owns
//! the two guarantees the whole panel hangs on:
//!
//! - **single-flight**: while a dispatch is outstanding (or its cooldown has
//!   not run out), a new trigger is rejected locally: no network call is
//!   issued and the generation does not move;
//! - **stale-response suppression**: a completion settles only if it still
//!   carries the machine's current generation. A response from a superseded
//!   dispatch is dropped, never rendered, never transitioned on.
//!
//! The backend jobs behind these actions run for minutes; without the guard,
//! impatient repeated triggers would fan out duplicate expensive work.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

use crate::descriptor::ActionId;
use crate::outcome::Outcome;

/// Monotonic counter distinguishing successive dispatches of one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of one action instance.
///
/// The cycle Idle -> Pending -> Settled -> CoolingDown -> Idle repeats for the
/// machine's lifetime; there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A dispatch is outstanding on the network.
    Pending { generation: Generation, since: Instant },
    /// The outcome arrived and is about to be rendered; the trigger is
    /// still guarded until the cooldown starts (and runs out).
    Settled { at: Instant },
    /// Post-settlement timer keeping the trigger disabled.
    CoolingDown { until: Instant },
}

/// An accepted trigger: the generation the dispatch task must hand back
/// with its completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: ActionId,
    pub generation: Generation,
}

/// Trigger rejection while a dispatch is outstanding or cooling down.
///
/// Expected and recoverable: the host absorbs it as a no-op, leaving the
/// existing in-progress indication on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyInFlight {
    pub id: ActionId,
}

impl fmt::Display for AlreadyInFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action `{}` is already running", self.id)
    }
}

impl std::error::Error for AlreadyInFlight {}

/// What became of a completion handed to [`ActionMachine::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Settle {
    /// The completion matched the current generation; the outcome was
    /// recorded and should be rendered.
    Applied,
    /// The completion came from a superseded dispatch and was dropped.
    Stale,
}

/// Lifecycle state for one action.
#[derive(Clone, Debug)]
pub struct ActionMachine {
    id: ActionId,
    cooldown: Duration,
    generation: Generation,
    phase: Phase,
    last_outcome: Option<Outcome>,
}

impl ActionMachine {
    pub fn new(id: ActionId, cooldown: Duration) -> Self {
        Self {
            id,
            cooldown,
            generation: Generation::default(),
            phase: Phase::Idle,
            last_outcome: None,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// The most recently settled outcome, if any dispatch has settled yet.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Whether a trigger would currently be rejected. Hosts use this to
    /// disable the trigger control and show the busy label.
    pub fn is_guarded(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::CoolingDown { until } => now < until,
            Phase::Pending { .. } | Phase::Settled { .. } => true,
        }
    }

    /// Attempt to begin a new dispatch.
    ///
    /// Allowed only from `Idle`, or from a `CoolingDown` whose deadline has
    /// already passed. On acceptance the generation advances and the new
    /// value is returned as the [`Ticket`] the dispatch task must echo back.
    pub fn try_begin(&mut self, now: Instant) -> Result<Ticket, AlreadyInFlight> {
        if self.is_guarded(now) {
            tracing::debug!(action = %self.id, phase = ?self.phase, "trigger rejected: already in flight");
            return Err(AlreadyInFlight { id: self.id });
        }
        self.generation = self.generation.next();
        self.phase = Phase::Pending {
            generation: self.generation,
            since: now,
        };
        Ok(Ticket {
            id: self.id,
            generation: self.generation,
        })
    }

    /// Deliver a dispatch completion.
    ///
    /// Applied only when the machine is `Pending` on exactly this
    /// generation; anything else is a stale arrival from a superseded
    /// dispatch and is silently dropped.
    pub fn settle(&mut self, generation: Generation, outcome: Outcome, now: Instant) -> Settle {
        match self.phase {
            Phase::Pending { generation: current, .. } if generation == current => {
                self.phase = Phase::Settled { at: now };
                self.last_outcome = Some(outcome);
                Settle::Applied
            }
            _ => {
                tracing::debug!(
                    action = %self.id,
                    generation = %generation,
                    current = %self.generation,
                    "stale completion dropped"
                );
                Settle::Stale
            }
        }
    }

    /// Arm the post-settlement cooldown.
    ///
    /// Returns the deadline the host must schedule a
    /// `cooldown elapsed` wakeup for, or `None` when the cooldown is zero
    /// and the machine went straight back to `Idle`.
    pub fn start_cooldown(&mut self, now: Instant) -> Option<Instant> {
        match self.phase {
            Phase::Settled { .. } if self.cooldown.is_zero() => {
                self.phase = Phase::Idle;
                None
            }
            Phase::Settled { .. } => {
                let until = now + self.cooldown;
                self.phase = Phase::CoolingDown { until };
                Some(until)
            }
            _ => None,
        }
    }

    /// Deliver a cooldown-expiry wakeup.
    ///
    /// The wakeup carries the generation it was scheduled for; if a newer
    /// trigger was accepted in the meantime (possible when the wall clock
    /// passed the deadline before the timer action was reduced), the stale
    /// wakeup is inert. Returns whether the machine returned to `Idle`.
    pub fn cooldown_elapsed(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            tracing::debug!(action = %self.id, generation = %generation, "stale cooldown wakeup dropped");
            return false;
        }
        match self.phase {
            Phase::CoolingDown { .. } => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}
