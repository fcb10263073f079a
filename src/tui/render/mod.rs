pub mod form;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | add form (3 rows) | gap | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // bordered form controls
            Constraint::Length(1), // gap
            Constraint::Min(1),    // list area
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    form::render_form(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);
}

/// The configured title, upper-cased and dimmed
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Span::styled(
        format!(" {}", app.title.to_uppercase()),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );
    frame.render_widget(Paragraph::new(title), area);
}
