//! Spending summary
//!
//! Bundles every aggregate the summary cards and charts need, computed in
//! one pass over a snapshot of the expense collection.

use crate::models::{Expense, Money};

use super::totals::{
    monthly_totals, totals_by_category, totals_by_payment_type, uncategorized_total,
    CategoryTotal, MonthlyTotal, PaymentTotal,
};

/// All derived totals for a set of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingSummary {
    pub by_payment_type: Vec<PaymentTotal>,
    pub by_category: Vec<CategoryTotal>,
    pub uncategorized: Money,
    pub by_month: Vec<MonthlyTotal>,
    pub total: Money,
    pub expense_count: usize,
}

impl SpendingSummary {
    /// Compute the summary for the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            by_payment_type: totals_by_payment_type(expenses),
            by_category: totals_by_category(expenses),
            uncategorized: uncategorized_total(expenses),
            by_month: monthly_totals(expenses),
            total: expenses.iter().map(|e| e.value).sum(),
            expense_count: expenses.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total: {} ({} expenses)\n\n",
            money(self.total),
            self.expense_count
        ));

        output.push_str("By payment type\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for entry in &self.by_payment_type {
            output.push_str(&format!(
                "  {:<20} {:>16}\n",
                format!("Total {}", entry.payment_type),
                money(entry.total)
            ));
        }

        output.push_str("\nBy category\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for entry in &self.by_category {
            output.push_str(&format!(
                "  {:<20} {:>16}\n",
                entry.category.label(),
                money(entry.total)
            ));
        }
        if !self.uncategorized.is_zero() {
            output.push_str(&format!(
                "  {:<20} {:>16}\n",
                "(uncategorized)",
                money(self.uncategorized)
            ));
        }

        output.push_str("\nBy month\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        if self.by_month.is_empty() {
            output.push_str("  No expenses recorded.\n");
        }
        for entry in &self.by_month {
            output.push_str(&format!(
                "  {:<20} {:>16}\n",
                entry.month,
                money(entry.total)
            ));
        }

        output
    }
}
