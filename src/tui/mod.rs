//! Terminal User Interface module
//!
//! A single dashboard: summary cards, month calendar, spending charts and
//! the expense table, with modal forms for new expenses and events.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
