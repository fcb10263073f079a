//! The per-item row: a pure view of one [`Item`] plus its two controls.
//!
//! The row holds no state. The owning list passes in the item and, when a
//! control is activated, a toggle callback.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{Item, ItemId};
use crate::util::unicode;

use super::theme::Theme;

/// The two controls on every row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    /// Flip packed/unpacked
    Toggle,
    /// Remove the item. Shown, but not wired to anything.
    Remove,
}

/// Glyph meaning "mark packed"
pub const MARK_PACKED: &str = "\u{2713}";
/// Glyph meaning "mark unpacked"
pub const MARK_UNPACKED: &str = "\u{2717}";
pub const REMOVE_LABEL: &str = "del";

/// Glyph for the toggle control given the item's current state
pub fn toggle_glyph(item: &Item) -> &'static str {
    if item.packed {
        MARK_UNPACKED
    } else {
        MARK_PACKED
    }
}

/// Handle activation of one of the row's controls.
pub fn activate(item: &Item, control: RowControl, on_toggle: impl FnOnce(ItemId)) {
    match control {
        RowControl::Toggle => on_toggle(item.id),
        RowControl::Remove => {}
    }
}

/// Build the display line for one item, exactly `width` cells wide.
///
/// Layout: ` {qty} x {description}   [✓] [del] `
pub fn row_line(
    item: &Item,
    width: usize,
    theme: &Theme,
    focused: Option<RowControl>,
) -> Line<'static> {
    let bg = theme.background;
    let toggle = format!("[{}]", toggle_glyph(item));
    let remove = format!("[{}]", REMOVE_LABEL);
    let controls_width = unicode::display_width(&toggle) + 1 + unicode::display_width(&remove);

    // leading space + gap before controls + trailing space
    let available = width.saturating_sub(controls_width + 3);
    let label = unicode::truncate_to_width(&item.label(), available);
    let label_style = if item.packed {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright).bg(bg)
    };

    let used = 1 + unicode::display_width(&label) + controls_width + 1;
    let padding = width.saturating_sub(used);

    let control_style = |control: RowControl, fg: Color| {
        if focused == Some(control) {
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg).bg(bg)
        }
    };
    let toggle_fg = if item.packed { theme.red } else { theme.green };

    Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(label, label_style),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(toggle, control_style(RowControl::Toggle, toggle_fg)),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(remove, control_style(RowControl::Remove, theme.dim)),
        Span::styled(" ", Style::default().bg(bg)),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;
    use crate::model::{PackingList, Quantity};
    use crate::tui::render::test_helpers::render_to_string;

    fn item(description: &str, quantity: u8, packed: bool) -> Item {
        let mut list = PackingList::new();
        let id = list
            .add(description, Quantity::try_from(quantity).unwrap())
            .unwrap();
        if packed {
            list.toggle(id);
        }
        list.items()[0].clone()
    }

    fn render_row(item: &Item, width: u16, focused: Option<RowControl>) -> String {
        let theme = Theme::default();
        render_to_string(width, 1, |frame, area| {
            let line = row_line(item, area.width as usize, &theme, focused);
            frame.render_widget(Paragraph::new(line), area);
        })
    }

    #[test]
    fn row_unpacked() {
        let output = render_row(&item("Socks", 2, false), 30, None);
        assert_eq!(output, format!(" 2 x Socks{}[✓] [del]", " ".repeat(10)));
    }

    #[test]
    fn row_packed_shows_unpack_glyph() {
        let output = render_row(&item("Socks", 2, true), 30, None);
        assert_eq!(output, format!(" 2 x Socks{}[✗] [del]", " ".repeat(10)));
    }

    #[test]
    fn row_truncates_long_description() {
        let output = render_row(&item("Very long description of things", 5, false), 24, None);
        assert_eq!(output, " 5 x Very lo\u{2026} [✓] [del]");
    }

    #[test]
    fn row_line_fills_width() {
        let theme = Theme::default();
        let line = row_line(&item("Passport", 1, false), 40, &theme, None);
        let width: usize = line
            .spans
            .iter()
            .map(|s| unicode::display_width(&s.content))
            .sum();
        assert_eq!(width, 40);
    }

    #[test]
    fn packed_label_is_crossed_out() {
        let theme = Theme::default();
        let packed = row_line(&item("Socks", 2, true), 30, &theme, None);
        let unpacked = row_line(&item("Socks", 2, false), 30, &theme, None);
        assert!(
            packed.spans[1]
                .style
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
        assert!(
            !unpacked.spans[1]
                .style
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn focused_control_is_highlighted() {
        let theme = Theme::default();
        let line = row_line(&item("Socks", 2, false), 30, &theme, Some(RowControl::Remove));
        assert_eq!(line.spans[5].style.bg, Some(theme.highlight));
        assert_eq!(line.spans[3].style.bg, Some(theme.background));
    }

    #[test]
    fn toggle_invokes_callback_with_id() {
        let it = item("Socks", 2, false);
        let mut seen = None;
        activate(&it, RowControl::Toggle, |id| seen = Some(id));
        assert_eq!(seen, Some(it.id));
    }

    #[test]
    fn remove_never_invokes_callback() {
        let it = item("Socks", 2, false);
        let mut called = false;
        activate(&it, RowControl::Remove, |_| called = true);
        assert!(!called);
    }

    #[test]
    fn glyph_follows_packed_state() {
        assert_eq!(toggle_glyph(&item("Hat", 1, false)), MARK_PACKED);
        assert_eq!(toggle_glyph(&item("Hat", 1, true)), MARK_UNPACKED);
    }
}
