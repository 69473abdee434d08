use crossterm::event::KeyCode;

use crate::app::{AppState, FormField};

const DATE_INPUT_MAX: usize = 10;
const TIME_INPUT_MAX: usize = 5;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Tab => {
            if let Some(form) = state.event_form.as_mut() {
                form.next_field();
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = state.event_form.as_mut() {
                form.prev_field();
            }
        }
        KeyCode::Left => {
            if active_field(state) == Some(FormField::Ministry) {
                state.cycle_form_ministry(false);
            }
        }
        KeyCode::Right => {
            if active_field(state) == Some(FormField::Ministry) {
                state.cycle_form_ministry(true);
            }
        }
        KeyCode::Backspace => {
            let Some(form) = state.event_form.as_mut() else {
                return;
            };
            match form.active_field {
                FormField::Title => {
                    form.title.pop();
                }
                FormField::Ministry => {
                    form.ministry = None;
                }
                FormField::Date => {
                    form.date_input.pop();
                }
                FormField::Time => {
                    form.time_input.pop();
                }
                FormField::Venue => {
                    form.venue.pop();
                }
                FormField::Description => {
                    form.description.pop();
                }
            }
        }
        KeyCode::Char(c) => {
            let Some(form) = state.event_form.as_mut() else {
                return;
            };
            match form.active_field {
                FormField::Title => form.title.push(c),
                // The ministry is a selector, not a text field.
                FormField::Ministry => {}
                FormField::Date => {
                    if (c.is_ascii_digit() || c == '-') && form.date_input.len() < DATE_INPUT_MAX {
                        form.date_input.push(c);
                    }
                }
                FormField::Time => {
                    if (c.is_ascii_digit() || c == ':') && form.time_input.len() < TIME_INPUT_MAX {
                        form.time_input.push(c);
                    }
                }
                FormField::Venue => form.venue.push(c),
                FormField::Description => form.description.push(c),
            }
        }
        _ => {}
    }
}

fn active_field(state: &AppState) -> Option<FormField> {
    state.event_form.as_ref().map(|f| f.active_field.clone())
}
