//! Query plan overlay.
//!
//! The query service answers with an opaque `dsl` plan alongside the
//! result. It is shown pretty-printed, display-only, never interpreted.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

use super::centered_rect;

/// Render a centered overlay with the backend's query plan.
pub fn render_plan_overlay(frame: &mut Frame, plan: &Value) {
    let area = frame.area();
    let popup_area = centered_rect(70, 70, area);

    frame.render_widget(Clear, popup_area);

    let pretty =
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| plan.to_string());
    let lines: Vec<Line> = pretty.lines().map(Line::raw).collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Query plan ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
