//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, persistence after every mutation, and audit logging.

pub mod event;
pub mod expense;

pub use event::{CreateEventInput, EventService};
pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
