//! Core data models for fintrack
//!
//! Expenses, calendar events, and the small value types they are built from.

pub mod color;
pub mod event;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use event::CalendarEvent;
pub use expense::{Category, Expense, ExpenseValidationError, PaymentType};
pub use ids::{EventId, ExpenseId};
pub use money::Money;
pub use month::{MonthCursor, MonthParseError};
