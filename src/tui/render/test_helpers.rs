use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{PackConfig, Quantity};
use crate::tui::app::App;

pub const TERM_W: u16 = 40;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App with the default config and no items.
pub fn empty_app() -> App {
    App::new(&PackConfig::default())
}

/// Build an App whose list holds `(description, quantity)` items, in order.
pub fn app_with_items(items: &[(&str, u8)]) -> App {
    let mut app = empty_app();
    for (description, quantity) in items {
        let quantity = Quantity::try_from(*quantity).unwrap();
        app.list.add(*description, quantity);
    }
    app
}
