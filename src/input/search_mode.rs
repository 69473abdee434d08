use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Enter => {
            state.mode = Mode::Browse;
        }
        KeyCode::Esc => {
            state.search_input.clear();
            state.clamp_selection();
            state.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.clamp_selection();
        }
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.clamp_selection();
        }
        _ => {}
    }
}
