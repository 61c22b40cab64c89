//! Modal dialogs

pub mod event;
pub mod expense;
pub mod help;
