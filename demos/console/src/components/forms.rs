//! Form inputs
//!
//! One reusable form component, fed a field list and the shared
//! [`FieldValues`](panel_dispatch::FieldValues). The focused field shows a
//! cursor; the flag field renders as a checkbox.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::panel;
use crate::state::{AppState, Focusable};

pub struct Form;

pub struct FormProps<'a> {
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub state: &'a AppState,
}

impl Form {
    pub fn render(frame: &mut Frame, area: Rect, props: FormProps<'_>) {
        let state = props.state;

        let lines: Vec<Line> = props
            .fields
            .iter()
            .map(|&field| {
                let focused = state.is_focused(Focusable::Field(field));
                let label_style = if focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let value = if field == panel::MARITAL_STATUS {
                    let checked = state.fields.flag(field);
                    format!("[{}]", if checked { "x" } else { " " })
                } else {
                    let mut value = state.fields.get(field).to_string();
                    if focused {
                        value.push('▏');
                    }
                    value
                };

                Line::from(vec![
                    Span::styled(format!("{field}: "), label_style),
                    Span::raw(value),
                ])
            })
            .collect();

        let block = Block::default().title(props.title).borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
