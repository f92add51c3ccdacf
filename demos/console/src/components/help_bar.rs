//! Footer: key hints and the resolved endpoint links

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use panel_dispatch::ActionId;

pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub links: &'a [(ActionId, String)],
}

impl HelpBar {
    pub fn render(frame: &mut Frame, area: Rect, props: HelpBarProps<'_>) {
        let [hints_area, links_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let hints = Paragraph::new("tab/↓ next · ↑ prev · enter trigger · space toggle · esc quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, hints_area);

        let links = props
            .links
            .iter()
            .map(|(_, url)| url.as_str())
            .collect::<Vec<_>>()
            .join("  ");
        let links = Paragraph::new(format!("API: {links}"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(links, links_area);
    }
}
