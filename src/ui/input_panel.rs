//! Question and CSV path input boxes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Focus};

/// Render both input boxes.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Length(3), // CSV path
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        " Question ",
        &app.question,
        app.focus == Focus::Question,
        app.status.as_deref(),
        app.asking,
    );
    render_field(
        frame,
        chunks[1],
        " CSV file ",
        &app.upload_path,
        app.focus == Focus::UploadPath,
        app.upload_status.as_deref(),
        app.uploading,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    buffer: &str,
    focused: bool,
    status: Option<&str>,
    busy: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(buffer.to_string())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    if let Some(status) = status {
        let status_color = if busy { Color::Yellow } else { Color::DarkGray };
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(status_color),
        ));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(field, area);
}
