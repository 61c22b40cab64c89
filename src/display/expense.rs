//! Expense display formatting

use super::truncate;
use crate::config::settings::Settings;
use crate::models::Expense;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    let category = expense.category.map(|c| c.label()).unwrap_or("-");

    format!(
        "{:12} {:10} {:24} {:10} {:6} {:>14}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.description, 24),
        category,
        expense.payment_type.label(),
        expense.value.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:10} {:6} {:>14}\n",
        "ID", "Date", "Description", "Category", "Type", "Value"
    ));
    output.push_str(&"-".repeat(81));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:      {}\n", expense.id));
    output.push_str(&format!(
        "Date:         {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Description:  {}\n", expense.description));
    match expense.category {
        Some(category) => output.push_str(&format!("Category:     {}\n", category)),
        None => output.push_str("Category:     (uncategorized)\n"),
    }
    output.push_str(&format!("Payment type: {}\n", expense.payment_type));
    output.push_str(&format!(
        "Value:        {}\n",
        expense.value.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentType};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Market",
            Some(Category::Food),
            PaymentType::InstantTransfer,
            Money::from_cents(8000),
        )
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&sample(), &Settings::default());
        assert!(formatted.contains("15/01/2025"));
        assert!(formatted.contains("Market"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("PIX"));
        assert!(formatted.contains("R$ 80.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_expense_list(&[], &Settings::default()).contains("No expenses found"));
    }

    #[test]
    fn test_format_expense_details_uses_settings() {
        let settings = Settings {
            currency_symbol: "$".into(),
            date_format: "%Y-%m-%d".into(),
            ..Settings::default()
        };
        let mut expense = sample();
        expense.category = None;

        let formatted = format_expense_details(&expense, &settings);
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("$ 80.00"));
        assert!(formatted.contains("(uncategorized)"));
    }
}
