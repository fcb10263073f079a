use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};
use crate::tui::item_row::RowControl;

pub(super) fn handle_row(app: &mut App, key: KeyEvent) {
    let Focus::Row { index, control } = app.focus else {
        return;
    };
    let last = app.list.len().saturating_sub(1);
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus = if index == 0 {
                Focus::AddButton
            } else {
                Focus::Row {
                    index: index - 1,
                    control,
                }
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.focus = if index >= last {
                Focus::ClearAll
            } else {
                Focus::Row {
                    index: index + 1,
                    control,
                }
            };
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.focus = Focus::Row {
                index,
                control: RowControl::Toggle,
            };
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.focus = Focus::Row {
                index,
                control: RowControl::Remove,
            };
        }
        _ => {}
    }
}

pub(super) fn handle_clear_all(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(index) = app.list.len().checked_sub(1) {
                app.focus = Focus::Row {
                    index,
                    control: RowControl::Toggle,
                };
            }
        }
        _ => {}
    }
}
