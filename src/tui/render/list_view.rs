use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::tui::item_row;
use crate::util::unicode;

pub const EMPTY_MESSAGE: &str = "No items added yet.";
pub const CLEAR_ALL_LABEL: &str = "[ Clear all ]";

/// Render the item rows followed by the clear-all button, or the
/// empty-state message when there is nothing to show.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.list.is_empty() {
        app.list_scroll = 0;
        let empty = Paragraph::new(format!(" {}", EMPTY_MESSAGE))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (index, item) in app.list.items().iter().enumerate() {
        let focused = match app.focus {
            Focus::Row { index: i, control } if i == index => Some(control),
            _ => None,
        };
        lines.push(item_row::row_line(item, width, &app.theme, focused));
    }
    lines.push(Line::from(""));
    lines.push(clear_all_line(app, width));

    let focus_line = match app.focus {
        Focus::Row { index, .. } => Some(index),
        Focus::ClearAll => Some(lines.len() - 1),
        _ => None,
    };

    // Never scroll past the end, then bring the focused line into view
    let max_scroll = lines.len().saturating_sub(height);
    let mut scroll = app.list_scroll.min(max_scroll);
    if let Some(line) = focus_line {
        if line < scroll {
            scroll = line;
        } else if height > 0 && line >= scroll + height {
            scroll = line + 1 - height;
        }
    }
    app.list_scroll = scroll;

    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The centered "Clear all" button
fn clear_all_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let style = if app.focus == Focus::ClearAll {
        Style::default()
            .fg(bg)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let pad = width.saturating_sub(unicode::display_width(CLEAR_ALL_LABEL)) / 2;
    Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(CLEAR_ALL_LABEL, style),
    ])
}
