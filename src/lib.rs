pub mod app;
pub mod config;
pub mod input;
pub mod server;
pub mod store;
pub mod ui;

pub use app::{AppState, EventForm, Mode, Toast, ToastKind};
pub use store::{Event, EventStore, MinistryFilter, ValidationError};

pub use input::{insert_mode, normal_mode, search_mode};
