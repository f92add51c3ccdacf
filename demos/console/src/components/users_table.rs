//! The users table
//!
//! Renders the records exactly as the backend sent them: `user_id` and
//! `data` when present, a fixed "N/A" placeholder when not. An empty list
//! is an explicit "No users found", distinct from never having listed.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;
use serde_json::Value;

pub struct UsersTable;

pub struct UsersTableProps<'a> {
    pub users: Option<&'a [Value]>,
}

const PLACEHOLDER: &str = "N/A";

fn cell_text(record: &Value, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl UsersTable {
    pub fn render(frame: &mut Frame, area: Rect, props: UsersTableProps<'_>) {
        let block = Block::default().title(" Users ").borders(Borders::ALL);

        match props.users {
            None => {
                let hint = Paragraph::new("Trigger List Users to fetch.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(hint, area);
            }
            Some([]) => {
                let empty = Paragraph::new("No users found")
                    .style(Style::default().fg(Color::Yellow))
                    .block(block);
                frame.render_widget(empty, area);
            }
            Some(users) => {
                let rows: Vec<Row> = users
                    .iter()
                    .map(|record| {
                        Row::new(vec![cell_text(record, "user_id"), cell_text(record, "data")])
                    })
                    .collect();
                let table = Table::new(
                    rows,
                    [Constraint::Length(28), Constraint::Fill(1)],
                )
                .header(
                    Row::new(vec!["User ID", "Data"])
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .block(block);
                frame.render_widget(table, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_placeholders() {
        let record = json!({"user_id": "1700-42", "data": {"first_name": "Ada"}});
        assert_eq!(cell_text(&record, "user_id"), "1700-42");
        assert_eq!(cell_text(&record, "data"), r#"{"first_name":"Ada"}"#);

        let bare = json!({});
        assert_eq!(cell_text(&bare, "user_id"), PLACEHOLDER);
        assert_eq!(cell_text(&bare, "data"), PLACEHOLDER);

        let nulled = json!({"user_id": null});
        assert_eq!(cell_text(&nulled, "user_id"), PLACEHOLDER);

        let numeric = json!({"user_id": 7});
        assert_eq!(cell_text(&numeric, "user_id"), "7");
    }
}
