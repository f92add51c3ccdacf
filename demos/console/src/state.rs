//! Application state: single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! Display state (status lines, the users table) lives behind
//! [`PanelDisplay`], the panel's [`ResultRenderer`], so the lifecycle code
//! never touches UI state directly.

use std::collections::HashMap;

use panel_dispatch::{
    ActionId, ActionMachine, ActionTable, Endpoints, FieldValues, Outcome, ResultRenderer, Status,
};
use serde_json::Value;
use tokio::time::Instant;

use crate::panel;

/// One rendered status line: a visual class plus the text.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusLine {
    pub status: Status,
    pub text: String,
}

/// Where keyboard focus currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focusable {
    Action(ActionId),
    Field(&'static str),
}

/// Display-side state: what each action last reported, plus the users
/// table. Implements [`ResultRenderer`], so every settled outcome lands
/// here exactly once.
#[derive(Debug, Default)]
pub struct PanelDisplay {
    results: HashMap<ActionId, StatusLine>,
    /// `None` until the first listing; `Some(vec![])` is an explicit empty
    /// list and renders as "No users found".
    users: Option<Vec<Value>>,
}

impl PanelDisplay {
    pub fn line(&self, id: ActionId) -> Option<&StatusLine> {
        self.results.get(&id)
    }

    pub fn users(&self) -> Option<&[Value]> {
        self.users.as_deref()
    }

    /// Append to an existing status line (used for the "takes a few
    /// minutes" decoration on slow actions).
    pub fn append_note(&mut self, id: ActionId, note: &str) {
        if let Some(line) = self.results.get_mut(&id) {
            line.text.push_str(note);
        }
    }

    pub fn show_error(&mut self, id: ActionId, text: impl Into<String>) {
        self.results.insert(
            id,
            StatusLine {
                status: Status::Error,
                text: text.into(),
            },
        );
    }
}

impl ResultRenderer for PanelDisplay {
    fn pending(&mut self, id: ActionId, note: &str) {
        self.results.insert(
            id,
            StatusLine {
                status: Status::Info,
                text: note.to_string(),
            },
        );
    }

    fn settled(&mut self, id: ActionId, outcome: &Outcome) {
        let prefix = if outcome.success { "✓" } else { "✗" };
        self.results.insert(
            id,
            StatusLine {
                status: Status::of(outcome),
                text: format!("{prefix} {}", outcome.message),
            },
        );
        if let Some(users) = outcome.users() {
            self.users = Some(users.to_vec());
        }
    }
}

/// Application state: everything the UI needs to render.
pub struct AppState {
    pub table: ActionTable,
    pub machines: HashMap<ActionId, ActionMachine>,
    /// Raw form input, shared by both forms.
    pub fields: FieldValues,
    pub display: PanelDisplay,
    focus_order: Vec<Focusable>,
    focus: usize,
    /// Resolved endpoint links for the footer.
    pub links: Vec<(ActionId, String)>,
    /// Animation frame counter for the busy spinner.
    pub tick_count: u32,
}

impl AppState {
    pub fn new(table: ActionTable, endpoints: &Endpoints) -> Self {
        let machines = table
            .iter()
            .map(|d| (d.id, ActionMachine::new(d.id, d.cooldown)))
            .collect();
        let mut focus_order: Vec<Focusable> = table.ids().map(Focusable::Action).collect();
        focus_order.extend(panel::SET_FIELDS.iter().copied().map(Focusable::Field));
        focus_order.extend(panel::USER_FIELDS.iter().copied().map(Focusable::Field));
        Self {
            table,
            machines,
            fields: FieldValues::new(),
            display: PanelDisplay::default(),
            focus_order,
            focus: 0,
            links: endpoints.iter().collect(),
            tick_count: 0,
        }
    }

    pub fn focused(&self) -> Focusable {
        self.focus_order[self.focus]
    }

    pub fn is_focused(&self, target: Focusable) -> bool {
        self.focused() == target
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_order.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.focus_order.len() - 1) % self.focus_order.len();
    }

    pub fn machine(&self, id: ActionId) -> Option<&ActionMachine> {
        self.machines.get(&id)
    }

    /// Whether any dispatch is outstanding (drives the spinner re-render).
    pub fn any_pending(&self) -> bool {
        self.machines
            .values()
            .any(|m| matches!(m.phase(), panel_dispatch::Phase::Pending { .. }))
    }

    /// Whether an action's trigger is currently disabled.
    pub fn is_guarded(&self, id: ActionId) -> bool {
        self.machines
            .get(&id)
            .map(|m| m.is_guarded(Instant::now()))
            .unwrap_or(false)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            panel::action_table(),
            &panel::endpoints(panel::DEFAULT_BASE_URL),
        )
    }
}
