//! Host actions
//!
//! Trigger/DidSettle/CooldownDidExpire are the dispatch lifecycle; the rest
//! is form editing, focus movement, and the animation tick.

use panel_dispatch::{ActionId, Generation, Outcome};

#[derive(Clone, Debug)]
pub enum Action {
    /// Intent: dispatch a panel action.
    Trigger(ActionId),
    /// Result: a dispatch task settled with this outcome.
    DidSettle {
        id: ActionId,
        generation: Generation,
        outcome: Outcome,
    },
    /// Result: a cooldown timer ran out.
    CooldownDidExpire { id: ActionId, generation: Generation },

    /// Type into the focused form field.
    FieldInput(char),
    FieldBackspace,
    /// Flip the focused flag field.
    FieldToggle,

    FocusNext,
    FocusPrev,

    /// Periodic tick for the busy spinner.
    Tick,
    /// Exit the application.
    Quit,
}

impl panel_dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Trigger(_) => "Trigger",
            Action::DidSettle { .. } => "DidSettle",
            Action::CooldownDidExpire { .. } => "CooldownDidExpire",
            Action::FieldInput(_) => "FieldInput",
            Action::FieldBackspace => "FieldBackspace",
            Action::FieldToggle => "FieldToggle",
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
