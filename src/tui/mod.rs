mod dialogs;
mod presentation;
mod session;
mod views;

pub use session::run_dashboard;
