//! Render tests against a test backend buffer

use panel_dispatch::{Outcome, Payload, ResultRenderer};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

use console_panel::action::Action;
use console_panel::components;
use console_panel::panel;
use console_panel::reducer::reducer;
use console_panel::state::AppState;

fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| components::render(frame, state))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_initial_screen_lists_all_triggers() {
    let state = AppState::default();
    let output = render_to_string(&state);

    for label in ["Set Key", "Load Cache", "Load Database", "Create User", "List Users"] {
        assert!(output.contains(label), "missing trigger label {label:?}");
    }
    assert!(output.contains("Trigger List Users to fetch."));
    assert!(output.contains("http://localhost:8080/api/set"));
}

#[test]
fn test_pending_action_shows_busy_label_and_note() {
    let mut state = AppState::default();
    let _ = reducer(&mut state, Action::Trigger(panel::LOAD));

    let output = render_to_string(&state);
    assert!(output.contains("Loading..."), "busy label should replace idle label");
    assert!(output.contains("several minutes"), "pending note should render");
}

#[test]
fn test_settled_outcomes_render_with_marks() {
    let mut state = AppState::default();
    state.display.settled(panel::SET, &Outcome::success("stored"));
    state.display.settled(panel::USER, &Outcome::transport("connection refused"));

    let output = render_to_string(&state);
    assert!(output.contains("✓ stored"));
    assert!(output.contains("✗ Error: connection refused"));
}

#[test]
fn test_empty_user_list_renders_no_users_line() {
    let mut state = AppState::default();
    state.display.settled(
        panel::LIST_USERS,
        &Outcome::success_with("Retrieved 0 users", Payload::Users(vec![])),
    );

    let output = render_to_string(&state);
    assert!(output.contains("No users found"));
}

#[test]
fn test_users_table_fills_missing_fields_with_placeholder() {
    let mut state = AppState::default();
    state.display.settled(
        panel::LIST_USERS,
        &Outcome::success_with(
            "Retrieved 2 users",
            Payload::Users(vec![
                json!({"user_id": "1700-42", "data": {"first_name": "Ada"}}),
                json!({"data": {"first_name": "Grace"}}),
            ]),
        ),
    );

    let output = render_to_string(&state);
    assert!(output.contains("User ID"));
    assert!(output.contains("1700-42"));
    assert!(output.contains("N/A"), "missing user_id should render as N/A");
}

#[test]
fn test_form_input_renders_typed_value() {
    let mut state = AppState::default();
    state.fields.set("key", "hot-key");
    state.fields.set("first_name", "Ada");

    let output = render_to_string(&state);
    assert!(output.contains("hot-key"));
    assert!(output.contains("Ada"));
    assert!(output.contains("[ ]"), "unchecked flag renders as empty box");
}
