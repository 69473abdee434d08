use std::collections::VecDeque;

use crate::store::{
    DATE_FORMAT, Event, EventDraft, EventPatch, EventStore, MinistryFilter, TIME_FORMAT,
};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Search,
    EventForm,
    MinistryForm,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Reminder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn reminder(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Reminder,
            message: message.into(),
        }
    }
}

const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Title,
    Ministry,
    Date,
    Time,
    Venue,
    Description,
}

/// Draft buffers for the create/edit dialog. The ministry is picked from
/// the roster rather than typed, so an untouched selector stays empty and
/// trips the required-field validation exactly like a blank text field.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub ministry: Option<String>,
    pub date_input: String,
    pub time_input: String,
    pub venue: String,
    pub description: String,
    pub active_field: FormField,
    pub event_id: Option<i64>,
}

impl EventForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            ministry: None,
            date_input: String::new(),
            time_input: String::new(),
            venue: String::new(),
            description: String::new(),
            active_field: FormField::Title,
            event_id: None,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            ministry: Some(event.ministry.clone()),
            date_input: event.date.format(DATE_FORMAT).to_string(),
            time_input: event.time.format(TIME_FORMAT).to_string(),
            venue: event.venue.clone(),
            description: event.description.clone(),
            active_field: FormField::Title,
            event_id: Some(event.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Ministry,
            FormField::Ministry => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Venue,
            FormField::Venue => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Description,
            FormField::Ministry => FormField::Title,
            FormField::Date => FormField::Ministry,
            FormField::Time => FormField::Date,
            FormField::Venue => FormField::Time,
            FormField::Description => FormField::Venue,
        };
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            ministry: self.ministry.clone().unwrap_or_default(),
            date: self.date_input.clone(),
            time: self.time_input.clone(),
            venue: self.venue.clone(),
            description: self.description.clone(),
        }
    }
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub store: EventStore,
    pub mode: Mode,
    pub search_input: String,
    pub ministry_filter: MinistryFilter,
    pub selected_index: usize,
    pub event_form: Option<EventForm>,
    pub ministry_input: String,
    pub pending_delete: Option<i64>,
    pub toasts: VecDeque<Toast>,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(EventStore::new())
    }

    pub fn with_store(store: EventStore) -> Self {
        let mut state = Self {
            store,
            mode: Mode::Browse,
            search_input: String::new(),
            ministry_filter: MinistryFilter::All,
            selected_index: 0,
            event_form: None,
            ministry_input: String::new(),
            pending_delete: None,
            toasts: VecDeque::new(),
            theme: Theme::default(),
        };
        // Greet the session with tomorrow's reminders, as the dashboard
        // does on load.
        state.refresh_reminders();
        state
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The event list as currently displayed: sorted, then narrowed by the
    /// ministry filter and search term.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.store
            .filtered(&self.search_input, &self.ministry_filter)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.visible_events().get(self.selected_index).copied()
    }

    pub fn move_selection_down(&mut self) {
        let count = self.visible_events().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let count = self.visible_events().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Walks All -> each ministry -> All, in roster order.
    pub fn cycle_filter(&mut self, forward: bool) {
        let ministries = self.store.ministries();
        let count = ministries.len() + 1;
        let current = match &self.ministry_filter {
            MinistryFilter::All => 0,
            MinistryFilter::Ministry(name) => ministries
                .iter()
                .position(|m| m == name)
                .map(|i| i + 1)
                .unwrap_or(0),
        };
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.ministry_filter = if next == 0 {
            MinistryFilter::All
        } else {
            MinistryFilter::Ministry(ministries[next - 1].clone())
        };
        self.selected_index = 0;
    }

    pub fn filter_by_ministry(&mut self, name: &str) {
        self.ministry_filter = MinistryFilter::Ministry(name.to_string());
        self.selected_index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        self.ministry_filter = MinistryFilter::All;
        self.selected_index = 0;
    }

    pub fn open_add_form(&mut self) {
        self.event_form = Some(EventForm::new());
        self.mode = Mode::EventForm;
    }

    pub fn open_edit_form(&mut self) {
        let Some(event) = self.selected_event().cloned() else {
            return;
        };
        self.event_form = Some(EventForm::for_event(&event));
        self.mode = Mode::EventForm;
    }

    pub fn open_ministry_form(&mut self) {
        self.ministry_input.clear();
        self.mode = Mode::MinistryForm;
    }

    pub fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_event().map(|e| e.id) else {
            return;
        };
        self.pending_delete = Some(id);
        self.mode = Mode::ConfirmDelete;
    }

    pub fn cancel_dialog(&mut self) {
        self.event_form = None;
        self.ministry_input.clear();
        self.pending_delete = None;
        self.mode = Mode::Browse;
    }

    pub fn cycle_form_ministry(&mut self, forward: bool) {
        let Some(form) = self.event_form.as_mut() else {
            return;
        };
        let ministries = self.store.ministries();
        if ministries.is_empty() {
            return;
        }
        let current = form
            .ministry
            .as_ref()
            .and_then(|name| ministries.iter().position(|m| m == name));
        let next = match current {
            None => {
                if forward {
                    0
                } else {
                    ministries.len() - 1
                }
            }
            Some(i) if forward => (i + 1) % ministries.len(),
            Some(i) => (i + ministries.len() - 1) % ministries.len(),
        };
        form.ministry = Some(ministries[next].clone());
    }

    /// Commits the open event form. Validation failures surface as an
    /// error toast and leave the dialog open with its buffers intact.
    pub fn submit_event_form(&mut self) {
        let Some(form) = self.event_form.take() else {
            return;
        };
        let draft = form.draft();

        if let Some(id) = form.event_id {
            match draft.validate() {
                Ok((date, time)) => {
                    self.store.update_event(
                        id,
                        EventPatch {
                            title: Some(draft.title),
                            ministry: Some(draft.ministry),
                            date: Some(date),
                            time: Some(time),
                            venue: Some(draft.venue),
                            description: Some(draft.description),
                            ..EventPatch::default()
                        },
                    );
                    tracing::info!("Updated event {}", id);
                    self.push_toast(Toast::success("Event has been updated successfully"));
                    self.after_mutation();
                }
                Err(err) => {
                    self.push_toast(Toast::error(err.to_string()));
                    self.event_form = Some(form);
                }
            }
        } else {
            match self.store.add_event(&draft) {
                Ok(event) => {
                    tracing::info!("Created event {} '{}'", event.id, event.title);
                    self.push_toast(Toast::success("Event has been created successfully"));
                    self.after_mutation();
                }
                Err(err) => {
                    self.push_toast(Toast::error(err.to_string()));
                    self.event_form = Some(form);
                }
            }
        }
    }

    pub fn submit_ministry_form(&mut self) {
        match self.store.add_ministry(&self.ministry_input) {
            Ok(name) => {
                tracing::info!("Added ministry '{}'", name);
                self.push_toast(Toast::success("New ministry has been added"));
                self.ministry_input.clear();
                self.mode = Mode::Browse;
            }
            Err(err) => {
                // Dialog stays open so the name can be corrected.
                self.push_toast(Toast::error(err.to_string()));
            }
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            self.mode = Mode::Browse;
            return;
        };
        self.store.delete_event(id);
        tracing::info!("Deleted event {}", id);
        self.push_toast(Toast::success("Event has been removed successfully"));
        self.after_mutation();
    }

    fn after_mutation(&mut self) {
        self.mode = Mode::Browse;
        self.clamp_selection();
        self.refresh_reminders();
    }

    /// Recomputes the tomorrow list and queues one reminder per match.
    /// Runs after every mutation rather than on a timer, so reminders are
    /// only as fresh as the last change.
    pub fn refresh_reminders(&mut self) {
        let reminders: Vec<String> = self
            .store
            .happening_tomorrow()
            .iter()
            .map(|e| {
                format!(
                    "{} is happening tomorrow at {}",
                    e.title,
                    e.time.format(TIME_FORMAT)
                )
            })
            .collect();
        for message in reminders {
            self.push_toast(Toast::reminder(message));
        }
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn latest_toast(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
