//! The trigger controls, one row per registered action

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use panel_dispatch::Phase;

use super::SPINNERS;
use crate::state::{AppState, Focusable};

pub struct ActionList;

pub struct ActionListProps<'a> {
    pub state: &'a AppState,
}

impl ActionList {
    pub fn render(frame: &mut Frame, area: Rect, props: ActionListProps<'_>) {
        let state = props.state;
        let spinner = SPINNERS[state.tick_count as usize % SPINNERS.len()];

        let lines: Vec<Line> = state
            .table
            .iter()
            .map(|descriptor| {
                let focused = state.is_focused(Focusable::Action(descriptor.id));
                let guarded = state.is_guarded(descriptor.id);
                let pending = state
                    .machine(descriptor.id)
                    .map(|m| matches!(m.phase(), Phase::Pending { .. }))
                    .unwrap_or(false);

                let label = if guarded {
                    descriptor.busy_label
                } else {
                    descriptor.idle_label
                };
                let style = if guarded {
                    Style::default().fg(Color::DarkGray)
                } else if focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let mut spans = vec![
                    Span::raw(if focused { "❯ " } else { "  " }),
                    Span::styled(format!("[ {label} ]"), style),
                ];
                if pending {
                    spans.push(Span::styled(
                        format!(" {spinner}"),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let block = Block::default().title(" Actions ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
