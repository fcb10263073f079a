mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use form::*;
use list::*;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Global keys
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return;
        }
        (_, KeyCode::Tab) => {
            app.focus_next();
            return;
        }
        (_, KeyCode::BackTab) => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    app.normalize_focus();
    match app.focus {
        Focus::Quantity => handle_quantity(app, key),
        Focus::Description => handle_description(app, key),
        Focus::AddButton => handle_add_button(app, key),
        Focus::Row { .. } => handle_row(app, key),
        Focus::ClearAll => handle_clear_all(app, key),
    }
}
