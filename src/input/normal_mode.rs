use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => state.move_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_selection_up(),
        KeyCode::Char('/') => state.mode = Mode::Search,
        KeyCode::Char('f') => state.cycle_filter(true),
        KeyCode::Char('F') => state.cycle_filter(false),
        KeyCode::Char('c') => state.clear_filters(),
        KeyCode::Char('a') => state.open_add_form(),
        KeyCode::Char('e') => state.open_edit_form(),
        KeyCode::Char('x') => state.request_delete_selected(),
        KeyCode::Char('m') => state.open_ministry_form(),
        _ => {}
    }
}
