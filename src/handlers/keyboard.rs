//! Keyboard Input Handler
//!
//! Dispatches key presses by screen: the home screen only opens the
//! gallery or quits; the gallery handles search input, shortcuts, paging,
//! grid movement and selection.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::gallery::GridMove;
use crate::model::types::Screen;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    match app.model.ui.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::Gallery => {
            if app.model.gallery.search_mode {
                handle_search_key(app, key);
            } else {
                handle_gallery_key(app, key);
            }
        }
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') | KeyCode::Enter => app.mount_gallery(),
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        _ => {}
    }
}

/// Search input is active: printable keys edit the term
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Accept - keep the filter, return keys to the grid
            app.model.gallery.search_mode = false;
        }
        KeyCode::Esc => {
            app.model.gallery.search_mode = false;
            app.set_search_term(String::new());
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        }
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let columns = app.model.gallery.grid_columns;

    match key.code {
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.gallery.search_mode = true;
        }
        KeyCode::Char('/') => app.model.gallery.search_mode = true,

        KeyCode::Esc => {
            if app.model.gallery.search_term.is_empty() {
                app.back_to_home();
            } else {
                app.set_search_term(String::new());
            }
        }
        KeyCode::Backspace | KeyCode::Char('b') => app.back_to_home(),
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        KeyCode::Left => app.move_selection(GridMove::Left, columns),
        KeyCode::Right => app.move_selection(GridMove::Right, columns),
        KeyCode::Up => app.move_selection(GridMove::Up, columns),
        KeyCode::Down => app.move_selection(GridMove::Down, columns),
        KeyCode::Char('h') if vim_mode => app.move_selection(GridMove::Left, columns),
        KeyCode::Char('l') if vim_mode => app.move_selection(GridMove::Right, columns),
        KeyCode::Char('k') if vim_mode => app.move_selection(GridMove::Up, columns),
        KeyCode::Char('j') if vim_mode => app.move_selection(GridMove::Down, columns),

        KeyCode::PageDown | KeyCode::Char(']') | KeyCode::Char('n') => app.next_page(),
        KeyCode::PageUp | KeyCode::Char('[') | KeyCode::Char('p') => app.prev_page(),

        KeyCode::Tab => app.cycle_category_shortcut(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.apply_shortcut_index(c.to_digit(10).unwrap_or(0) as usize);
        }

        KeyCode::Enter => app.choose_selected(),
        _ => {}
    }
}
