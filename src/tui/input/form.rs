use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Quantity;
use crate::tui::app::App;
use crate::util::unicode;

pub(super) fn handle_quantity(app: &mut App, key: KeyEvent) {
    let current = app.list.pending_quantity();
    match key.code {
        KeyCode::Up | KeyCode::Char('+') => {
            app.list.set_pending_quantity(current.increment());
        }
        KeyCode::Down | KeyCode::Char('-') => {
            app.list.set_pending_quantity(current.decrement());
        }
        KeyCode::Char(c) => {
            // Digits outside 1-5 are ignored
            if let Some(q) = c
                .to_digit(10)
                .and_then(|d| Quantity::try_from(d as u8).ok())
            {
                app.list.set_pending_quantity(q);
            }
        }
        KeyCode::Enter => app.submit_form(),
        _ => {}
    }
}

pub(super) fn handle_description(app: &mut App, key: KeyEvent) {
    let cursor = app.edit_cursor.min(app.list.pending_description().len());
    match key.code {
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.list.pending_description_mut().insert(cursor, c);
            app.edit_cursor = cursor + c.len_utf8();
            return;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Delete back to the start of the field
            app.list.pending_description_mut().drain(..cursor);
            app.edit_cursor = 0;
            return;
        }
        _ => {}
    }

    let text = app.list.pending_description();
    match key.code {
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(text, cursor) {
                app.list.pending_description_mut().drain(prev..cursor);
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(text, cursor) {
                app.list.pending_description_mut().drain(cursor..next);
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(text, cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(text, cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = text.len(),
        _ => {}
    }
}

pub(super) fn handle_add_button(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        app.submit_form();
    }
}
