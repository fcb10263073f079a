use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{PackConfig, PackingList};

use super::input;
use super::item_row::{self, RowControl};
use super::render;
use super::theme::Theme;

/// Which interactive element receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Quantity selector of the add form
    Quantity,
    /// Description text field of the add form
    Description,
    /// The "Add" button
    AddButton,
    /// A control on the item row at `index`
    Row { index: usize, control: RowControl },
    /// The "Clear all" button (only exists while the list is non-empty)
    ClearAll,
}

/// Main application state
pub struct App {
    /// The list and its pending form fields
    pub list: PackingList,
    /// Display title, as configured (rendered upper-cased)
    pub title: String,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub focus: Focus,
    /// Byte offset of the cursor in the pending description
    pub edit_cursor: usize,
    /// First visible line of the list area
    pub list_scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &PackConfig) -> Self {
        App {
            list: PackingList::new(),
            title: config.title.clone(),
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            focus: Focus::Description,
            edit_cursor: 0,
            list_scroll: 0,
            should_quit: false,
        }
    }

    /// All focusable elements in Tab order
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Quantity, Focus::Description, Focus::AddButton];
        for index in 0..self.list.len() {
            order.push(Focus::Row {
                index,
                control: RowControl::Toggle,
            });
            order.push(Focus::Row {
                index,
                control: RowControl::Remove,
            });
        }
        if self.list.show_clear_all() {
            order.push(Focus::ClearAll);
        }
        order
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.focus_order().len();
        self.step_focus(len - 1);
    }

    fn step_focus(&mut self, by: usize) {
        self.normalize_focus();
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + by) % order.len()];
    }

    /// Pull focus back onto an element that still exists after the list
    /// shrank (e.g. after clear all).
    pub fn normalize_focus(&mut self) {
        let len = self.list.len();
        match self.focus {
            Focus::Row { .. } | Focus::ClearAll if len == 0 => {
                self.focus = Focus::Description;
            }
            Focus::Row { index, control } if index >= len => {
                self.focus = Focus::Row {
                    index: len - 1,
                    control,
                };
            }
            _ => {}
        }
    }

    /// Submit the add form. On success the description field is emptied,
    /// so the cursor goes back to the start.
    pub fn submit_form(&mut self) {
        if self.list.submit_add().is_some() {
            self.edit_cursor = 0;
        }
    }

    /// Activate whatever is focused: submit the form, a row control, or
    /// clear all.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Quantity | Focus::Description | Focus::AddButton => self.submit_form(),
            Focus::Row { index, control } => {
                let Some(item) = self.list.items().get(index).cloned() else {
                    return;
                };
                let list = &mut self.list;
                item_row::activate(&item, control, |id| list.toggle(id));
            }
            Focus::ClearAll => {
                self.list.clear_all();
                self.list_scroll = 0;
                self.normalize_focus();
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: PackConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);
    log::info!("starting with title {:?}", app.title);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!(
        "exiting with {} items ({} packed)",
        app.list.len(),
        app.list.packed_count()
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
