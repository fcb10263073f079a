use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::model::Quantity;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Placeholder shown in the empty description field
pub const PLACEHOLDER: &str = "Add item";

/// Width of the quantity selector: all five options plus borders
const QUANTITY_WIDTH: u16 = 11;
const ADD_BUTTON_WIDTH: u16 = 7;

/// Render the add form: quantity selector, description field, Add button
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(QUANTITY_WIDTH),
            Constraint::Min(1),
            Constraint::Length(ADD_BUTTON_WIDTH),
        ])
        .split(area);

    render_quantity(frame, app, chunks[0]);
    render_description(frame, app, chunks[1]);
    render_add_button(frame, app, chunks[2]);
}

fn bordered(app: &App, focused: bool) -> Block<'static> {
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background))
}

/// Every option 1..=5 laid out inline, the selected one highlighted
fn render_quantity(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Quantity;
    let selected = app.list.pending_quantity();
    let bg = app.theme.background;

    let mut spans: Vec<Span> = Vec::new();
    for (i, q) in Quantity::all().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        let style = if q == selected && focused {
            Style::default()
                .fg(bg)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else if q == selected {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(q.to_string(), style));
    }

    let block = bordered(app, focused);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_description(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Description;
    let block = bordered(app, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = app.list.pending_description();
    let bg = app.theme.background;
    if text.is_empty() {
        let placeholder = Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(Paragraph::new(placeholder), inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // Scroll horizontally so the cursor stays inside the field
    let cursor = app.edit_cursor.min(text.len());
    let room = (inner.width as usize).saturating_sub(1);
    let before = unicode::tail_to_width(&text[..cursor], room);
    let start = cursor - before.len();
    let shown = &text[start..];
    let style = Style::default().fg(app.theme.text_bright).bg(bg);
    frame.render_widget(
        Paragraph::new(Span::styled(shown.to_string(), style)),
        inner,
    );

    if focused {
        let col = unicode::byte_offset_to_display_col(shown, cursor - start) as u16;
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

fn render_add_button(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::AddButton;
    let style = if focused {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
    };
    let block = bordered(app, focused);
    frame.render_widget(
        Paragraph::new(Span::styled(" Add ", style)).block(block),
        area,
    );
}
