use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::tui::item_row::RowControl;
use crate::util::unicode;

/// Key hints for whatever currently has focus
pub fn key_hint(app: &App) -> &'static str {
    match app.focus {
        Focus::Quantity => "\u{2191}\u{2193} quantity  Enter add  Tab next  Esc quit",
        Focus::Description | Focus::AddButton => "Enter add  Tab next  Esc quit",
        Focus::Row {
            index,
            control: RowControl::Toggle,
        } => {
            if app.list.items().get(index).is_some_and(|item| item.packed) {
                "Enter unpack  \u{2191}\u{2193} rows  Tab next  Esc quit"
            } else {
                "Enter pack  \u{2191}\u{2193} rows  Tab next  Esc quit"
            }
        }
        Focus::Row {
            control: RowControl::Remove,
            ..
        } => "\u{2191}\u{2193} rows  Tab next  Esc quit",
        Focus::ClearAll => "Enter clear all  Tab next  Esc quit",
    }
}

/// Render the status row (bottom of screen): packed summary on the left,
/// key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if !app.list.is_empty() {
        spans.push(Span::styled(
            format!(" {}/{} packed", app.list.packed_count(), app.list.len()),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hint(app);
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
