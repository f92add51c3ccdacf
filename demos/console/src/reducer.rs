//! Reducer: pure function (state, action) -> transition
//!
//! All state mutation happens here. Lifecycle decisions (may this trigger
//! dispatch? is this completion stale?) are delegated to the per-action
//! machines; accepted work comes back as effects for the main loop.

use panel_dispatch::{ActionId, Generation, Outcome, ResultRenderer, Settle, Transition};
use tokio::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::panel;
use crate::state::{AppState, Focusable};

/// Appended to the success line of long-running jobs.
const SLOW_NOTE: &str = " - This will take a few minutes.";

pub fn reducer(state: &mut AppState, action: Action) -> Transition<Effect> {
    match action {
        Action::Trigger(id) => trigger(state, id),
        Action::DidSettle {
            id,
            generation,
            outcome,
        } => settle(state, id, generation, outcome),
        Action::CooldownDidExpire { id, generation } => {
            let rearmed = state
                .machines
                .get_mut(&id)
                .map(|machine| machine.cooldown_elapsed(generation))
                .unwrap_or(false);
            if rearmed {
                Transition::changed()
            } else {
                Transition::unchanged()
            }
        }

        Action::FieldInput(c) => field_input(state, c),
        Action::FieldBackspace => field_backspace(state),
        Action::FieldToggle => field_toggle(state),

        Action::FocusNext => {
            state.focus_next();
            Transition::changed()
        }
        Action::FocusPrev => {
            state.focus_prev();
            Transition::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the busy spinner animates; skip re-rendering otherwise.
            if state.any_pending() {
                Transition::changed()
            } else {
                Transition::unchanged()
            }
        }

        // Quit is handled in the main loop, not here.
        Action::Quit => Transition::unchanged(),
    }
}

fn trigger(state: &mut AppState, id: ActionId) -> Transition<Effect> {
    let descriptor = match state.table.lookup(id) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            tracing::error!(action = %id, "trigger for unregistered action");
            state.display.show_error(id, format!("✗ {err}"));
            return Transition::changed();
        }
    };
    let Some(machine) = state.machines.get_mut(&id) else {
        tracing::error!(action = %id, "no machine for action");
        return Transition::unchanged();
    };

    match machine.try_begin(Instant::now()) {
        Ok(ticket) => {
            let note = if descriptor.cooldown.is_zero() {
                format!("⏳ {}", descriptor.busy_label)
            } else {
                format!(
                    "⏳ Starting {}... This may take several minutes. Check server logs for progress.",
                    descriptor.idle_label
                )
            };
            state.display.pending(id, &note);
            Transition::changed_with(Effect::Dispatch {
                id,
                generation: ticket.generation,
                fields: state.fields.clone(),
            })
        }
        // The existing in-progress indication stays; nothing re-renders.
        Err(_) => Transition::unchanged(),
    }
}

fn settle(
    state: &mut AppState,
    id: ActionId,
    generation: Generation,
    outcome: Outcome,
) -> Transition<Effect> {
    let Some(machine) = state.machines.get_mut(&id) else {
        tracing::error!(action = %id, "completion for unknown action");
        return Transition::unchanged();
    };

    let rendered = outcome.clone();
    match machine.settle(generation, outcome, Instant::now()) {
        Settle::Stale => Transition::unchanged(),
        Settle::Applied => {
            let slow = !machine.cooldown().is_zero();
            state.display.settled(id, &rendered);
            if rendered.success && slow {
                state.display.append_note(id, SLOW_NOTE);
            }
            if id == panel::SET && rendered.success {
                // The seed form clears after a successful store.
                state.fields.set("key", "");
                state.fields.set("value", "");
            }
            match machine.start_cooldown(Instant::now()) {
                Some(_) => Transition::changed_with(Effect::Cooldown {
                    id,
                    generation,
                    delay: machine.cooldown(),
                }),
                None => Transition::changed(),
            }
        }
    }
}

fn field_input(state: &mut AppState, c: char) -> Transition<Effect> {
    let Focusable::Field(name) = state.focused() else {
        return Transition::unchanged();
    };
    if name == panel::MARITAL_STATUS {
        return Transition::unchanged();
    }
    let mut value = state.fields.get(name).to_string();
    value.push(c);
    state.fields.set(name, value);
    Transition::changed()
}

fn field_backspace(state: &mut AppState) -> Transition<Effect> {
    let Focusable::Field(name) = state.focused() else {
        return Transition::unchanged();
    };
    let mut value = state.fields.get(name).to_string();
    if value.pop().is_none() {
        return Transition::unchanged();
    }
    state.fields.set(name, value);
    Transition::changed()
}

fn field_toggle(state: &mut AppState) -> Transition<Effect> {
    let Focusable::Field(name) = state.focused() else {
        return Transition::unchanged();
    };
    if name != panel::MARITAL_STATUS {
        return Transition::unchanged();
    }
    let flipped = !state.fields.flag(name);
    state.fields.set(name, flipped.to_string());
    Transition::changed()
}
