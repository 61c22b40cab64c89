//! Application state and commands
//!
//! Everything the interactive surface can change goes through
//! [`AppState::apply`]: open or close a form, submit a draft, delete an
//! entity, move the displayed month. Drawing code only reads the state.

pub mod app_state;
pub mod command;
pub mod draft;

pub use app_state::{AppState, EventForm, UiState};
pub use command::{Command, Outcome};
pub use draft::{parse_date, EventDraft, ExpenseDraft};
