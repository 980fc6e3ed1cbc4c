//! Result panel: projects a visual tree onto terminal lines.
//!
//! The projection itself ([`tree_lines`]) is a pure function from tree to
//! styled lines, so it is testable without a terminal. The panel renderer
//! wraps it in a scrollable paragraph.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Section, TableView, VisualTree};

/// Render the result panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" RESULT ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match &app.result {
        Some(tree) => Paragraph::new(tree_lines(tree)).scroll((app.scroll, 0)),
        None => {
            let hint = if app.asking {
                "waiting for the query service..."
            } else {
                "upload a CSV, then ask a question about it"
            };
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
        }
    };

    frame.render_widget(paragraph.block(block), area);
}

/// Project a visual tree into styled terminal lines.
pub fn tree_lines(tree: &VisualTree) -> Vec<Line<'static>> {
    match tree {
        VisualTree::Empty => Vec::new(),
        VisualTree::EmptyMarker => vec![Line::from(Span::styled(
            "empty",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))],
        VisualTree::Text(text) => text
            .split('\n')
            .map(|line| Line::raw(line.to_string()))
            .collect(),
        VisualTree::Emphasis(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))],
        VisualTree::Bullets(items) => bullet_lines(items),
        VisualTree::Sections(sections) => section_lines(sections),
        VisualTree::Table(table) => table_lines(table),
        VisualTree::Notice(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::DarkGray),
        ))],
        VisualTree::Callout(text) => text
            .split('\n')
            .map(|line| {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect(),
        VisualTree::Unsupported => vec![Line::from(Span::styled(
            "unsupported type",
            Style::default().fg(Color::Red),
        ))],
    }
}

/// Flatten a visual tree to unstyled text, one projected line per row.
/// Used by the one-shot CLI mode.
pub fn plain_text(tree: &VisualTree) -> String {
    tree_lines(tree)
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// One bulleted entry per element, in order. An element whose own
/// projection is empty still gets its bullet, so a list of n elements
/// always shows n entries.
fn bullet_lines(items: &[VisualTree]) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for item in items {
        let child = tree_lines(item);
        if child.is_empty() {
            out.push(Line::from(marker_span("• ")));
            continue;
        }
        for (i, line) in child.into_iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            out.push(prepend(line, marker_span(marker)));
        }
    }
    out
}

/// A bold title per section, body nested under a gutter that conveys
/// containment, blank line between sections.
fn section_lines(sections: &[Section]) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push(Line::raw(String::new()));
        }
        out.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for line in tree_lines(&section.body) {
            out.push(prepend(line, marker_span("│ ")));
        }
    }
    out
}

/// Header plus body rows as aligned text columns. All cells are
/// right-aligned, matching the right-to-left layout of the source data.
fn table_lines(table: &TableView) -> Vec<Line<'static>> {
    if table.columns.is_empty() {
        return Vec::new();
    }

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(col)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::new();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad_right_aligned(col, *w))
        .collect();
    out.push(Line::from(Span::styled(
        header.join(" │ "),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    let rule_width: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push(Line::from(Span::styled(
        "─".repeat(rule_width),
        Style::default().fg(Color::DarkGray),
    )));

    for row in &table.rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad_right_aligned(row.get(i).map(String::as_str).unwrap_or(""), *w))
            .collect();
        out.push(Line::raw(cells.join(" │ ")));
    }

    out
}

fn marker_span(marker: &str) -> Span<'static> {
    Span::styled(marker.to_string(), Style::default().fg(Color::DarkGray))
}

fn prepend(line: Line<'static>, marker: Span<'static>) -> Line<'static> {
    let mut spans = vec![marker];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Cells can carry embedded line breaks; they collapse to spaces inside a
/// table so alignment holds.
fn display_width(cell: &str) -> usize {
    cell.chars().filter(|c| *c != '\n').count()
}

fn pad_right_aligned(cell: &str, width: usize) -> String {
    let flat: String = cell
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{flat:>width$}")
}
