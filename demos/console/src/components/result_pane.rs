//! Per-action status lines, one per action, colored by outcome class

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use panel_dispatch::Status;

use crate::state::AppState;

pub struct ResultPane;

pub struct ResultPaneProps<'a> {
    pub state: &'a AppState,
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Success => Color::Green,
        Status::Error => Color::Red,
        Status::Info => Color::Cyan,
    }
}

impl ResultPane {
    pub fn render(frame: &mut Frame, area: Rect, props: ResultPaneProps<'_>) {
        let state = props.state;

        let lines: Vec<Line> = state
            .table
            .iter()
            .map(|descriptor| {
                let mut spans = vec![Span::styled(
                    format!("{}: ", descriptor.idle_label),
                    Style::default().fg(Color::DarkGray),
                )];
                match state.display.line(descriptor.id) {
                    Some(line) => spans.push(Span::styled(
                        line.text.clone(),
                        Style::default().fg(status_color(line.status)),
                    )),
                    None => spans.push(Span::styled(
                        "—".to_string(),
                        Style::default().fg(Color::DarkGray),
                    )),
                }
                Line::from(spans)
            })
            .collect();

        let block = Block::default().title(" Results ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
