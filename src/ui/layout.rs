//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ASKCSV v0.1.0              ● connected      answered 14:02:11  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Question  > ...                                                │
//! │  CSV file  > ...                                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  RESULT                                                         │
//! │  ...                                                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ [Tab] Field [Enter] Submit [^D] Plan [↑↓] Scroll [F1] Help ...  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::App;

use super::{input_panel, result_panel, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Input fields
            Constraint::Min(8),    // Result
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    input_panel::render(frame, main_chunks[1], app);
    result_panel::render(frame, main_chunks[2], app);
    render_footer(frame, main_chunks[3]);

    if app.show_dsl {
        if let Some(plan) = &app.dsl {
            widgets::render_plan_overlay(frame, plan);
        }
    }
    if app.show_help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " ASKCSV ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let connection = if app.connected {
        Span::styled(" ● connected ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ offline ", Style::default().fg(Color::Red))
    };

    let status = if let Some(time) = app.last_answered {
        Span::styled(
            format!(" answered {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" no answers yet ", Style::default().fg(Color::DarkGray))
    };

    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let right_len = connection.content.chars().count() + status.content.chars().count();
    let padding = area
        .width
        .saturating_sub((title_len + right_len + 2) as u16);

    let mut spans = title;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.push(connection);
    spans.push(status);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit  "),
        Span::styled("[^D]", Style::default().fg(Color::Yellow)),
        Span::raw(" Plan  "),
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Scroll  "),
        Span::styled("[F1]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
