//! Reports module for fintrack
//!
//! Pure aggregation over the expense collection: totals per payment type,
//! per category and per month, plus a bundled summary for display.

pub mod summary;
pub mod totals;

pub use summary::SpendingSummary;
pub use totals::{
    monthly_totals, total_by_payment_type, totals_by_category, totals_by_payment_type,
    uncategorized_total, CategoryTotal, MonthlyTotal, PaymentTotal,
};
