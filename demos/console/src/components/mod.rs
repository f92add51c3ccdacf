//! UI components for the console panel
//!
//! Components are render-only: they receive props derived from `&AppState`
//! and never mutate anything. Key handling lives in [`map_key`], which
//! turns a key press into at most one action for the reducer.

pub mod action_list;
pub mod forms;
pub mod help_bar;
pub mod result_pane;
pub mod users_table;

pub use action_list::{ActionList, ActionListProps};
pub use forms::{Form, FormProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use result_pane::{ResultPane, ResultPaneProps};
pub use users_table::{UsersTable, UsersTableProps};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::action::Action;
use crate::panel;
use crate::state::{AppState, Focusable};

/// Busy spinner frames, advanced by the tick action while a dispatch is
/// outstanding.
pub const SPINNERS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Map a key press to an action, given where focus sits.
pub fn map_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => match state.focused() {
            Focusable::Action(id) => Some(Action::Trigger(id)),
            // Enter inside a form submits the form's action.
            Focusable::Field(name) => panel::form_action(name).map(Action::Trigger),
        },
        KeyCode::Backspace => match state.focused() {
            Focusable::Field(_) => Some(Action::FieldBackspace),
            Focusable::Action(_) => None,
        },
        KeyCode::Char(' ') => match state.focused() {
            Focusable::Action(id) => Some(Action::Trigger(id)),
            Focusable::Field(name) if name == panel::MARITAL_STATUS => Some(Action::FieldToggle),
            Focusable::Field(_) => Some(Action::FieldInput(' ')),
        },
        KeyCode::Char('q') if matches!(state.focused(), Focusable::Action(_)) => Some(Action::Quit),
        KeyCode::Char(c) => match state.focused() {
            Focusable::Field(name) if name != panel::MARITAL_STATUS => Some(Action::FieldInput(c)),
            _ => None,
        },
        _ => None,
    }
}

/// Top-level layout: actions, their results, the two forms, the users
/// table, and the footer.
pub fn render(frame: &mut Frame, state: &AppState) {
    let action_rows = state.table.len() as u16;
    let [actions_area, results_area, forms_area, users_area, help_area] = Layout::vertical([
        Constraint::Length(action_rows + 2),
        Constraint::Length(action_rows + 2),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    ActionList::render(frame, actions_area, ActionListProps { state });
    ResultPane::render(frame, results_area, ResultPaneProps { state });

    let [set_area, user_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(forms_area);
    Form::render(
        frame,
        set_area,
        FormProps {
            title: " Seed Key ",
            fields: panel::SET_FIELDS,
            state,
        },
    );
    Form::render(
        frame,
        user_area,
        FormProps {
            title: " Create User ",
            fields: panel::USER_FIELDS,
            state,
        },
    );

    UsersTable::render(
        frame,
        users_area,
        UsersTableProps {
            users: state.display.users(),
        },
    );
    HelpBar::render(frame, help_area, HelpBarProps { links: &state.links });
}
