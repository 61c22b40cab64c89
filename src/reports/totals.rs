//! Aggregation functions over expenses
//!
//! None of these functions fail or have side effects; an empty slice simply
//! yields zero totals.

use crate::models::{Category, Expense, Money, PaymentType};

/// Total for one payment type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTotal {
    pub payment_type: PaymentType,
    pub total: Money,
}

/// Total for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Total for one month key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// Two-digit month ("01".."12")
    pub month: String,
    pub total: Money,
}

/// Sum of values over expenses paid with `payment_type`
pub fn total_by_payment_type(expenses: &[Expense], payment_type: PaymentType) -> Money {
    expenses
        .iter()
        .filter(|e| e.payment_type == payment_type)
        .map(|e| e.value)
        .sum()
}

/// One total per payment type, in `PaymentType::ALL` order
pub fn totals_by_payment_type(expenses: &[Expense]) -> Vec<PaymentTotal> {
    PaymentType::ALL
        .iter()
        .map(|&payment_type| PaymentTotal {
            payment_type,
            total: total_by_payment_type(expenses, payment_type),
        })
        .collect()
}

/// One total per category, in `Category::ALL` order, zeros included
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            total: expenses
                .iter()
                .filter(|e| e.category == Some(category))
                .map(|e| e.value)
                .sum(),
        })
        .collect()
}

/// Sum of values over expenses without a category
pub fn uncategorized_total(expenses: &[Expense]) -> Money {
    expenses
        .iter()
        .filter(|e| e.category.is_none())
        .map(|e| e.value)
        .sum()
}

/// Totals grouped by two-digit month, in order of first appearance
///
/// Years are not part of the key: January 2024 and January 2025 land in the
/// same "01" bucket.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for expense in expenses {
        let key = expense.month_key();
        match totals.iter_mut().find(|t| t.month == key) {
            Some(entry) => entry.total += expense.value,
            None => totals.push(MonthlyTotal {
                month: key,
                total: expense.value,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(date: &str, cents: i64, payment_type: PaymentType, category: Option<Category>) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "test",
            category,
            payment_type,
            Money::from_cents(cents),
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("2025-03-01", 1200, PaymentType::Debit, Some(Category::Food)),
            expense("2025-01-05", 800, PaymentType::Credit, Some(Category::Transport)),
            expense("2025-03-15", 5000, PaymentType::InstantTransfer, None),
            expense("2024-01-20", 250, PaymentType::Debit, Some(Category::Food)),
            expense("2025-02-02", 999, PaymentType::Credit, Some(Category::Health)),
        ]
    }

    #[test]
    fn test_scenario_pix_and_monthly() {
        let expenses = vec![
            expense("2025-01-10", 5000, PaymentType::InstantTransfer, None),
            expense("2025-01-20", 3000, PaymentType::InstantTransfer, None),
        ];

        assert_eq!(
            total_by_payment_type(&expenses, PaymentType::InstantTransfer),
            Money::from_cents(8000)
        );
        assert_eq!(
            monthly_totals(&expenses),
            vec![MonthlyTotal {
                month: "01".into(),
                total: Money::from_cents(8000),
            }]
        );
    }

    #[test]
    fn test_no_matches_is_zero() {
        let expenses = vec![expense("2025-01-10", 5000, PaymentType::Debit, None)];
        assert!(total_by_payment_type(&expenses, PaymentType::Credit).is_zero());
        assert!(total_by_payment_type(&[], PaymentType::Debit).is_zero());
    }

    #[test]
    fn test_payment_types_partition_total() {
        let expenses = sample();
        let grand: Money = expenses.iter().map(|e| e.value).sum();
        let partitioned: Money = totals_by_payment_type(&expenses)
            .iter()
            .map(|t| t.total)
            .sum();
        assert_eq!(grand, partitioned);

        let per_type: Money = PaymentType::ALL
            .iter()
            .map(|&p| total_by_payment_type(&expenses, p))
            .sum();
        assert_eq!(grand, per_type);
    }

    #[test]
    fn test_category_totals_cover_every_category() {
        let totals = totals_by_category(&sample());

        let categories: Vec<_> = totals.iter().map(|t| t.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        assert_eq!(totals[0].total, Money::from_cents(1450)); // Food
        assert_eq!(totals[1].total, Money::from_cents(800)); // Transport
        assert!(totals[2].total.is_zero()); // Leisure
        assert_eq!(totals[3].total, Money::from_cents(999)); // Health

        let empty = totals_by_category(&[]);
        assert_eq!(empty.len(), Category::ALL.len());
        assert!(empty.iter().all(|t| t.total.is_zero()));
    }

    #[test]
    fn test_uncategorized_total() {
        assert_eq!(uncategorized_total(&sample()), Money::from_cents(5000));
    }

    #[test]
    fn test_monthly_totals_first_seen_order_and_merged_years() {
        let totals = monthly_totals(&sample());
        let keys: Vec<_> = totals.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(keys, ["03", "01", "02"]);

        assert_eq!(totals[0].total, Money::from_cents(6200));
        assert_eq!(totals[1].total, Money::from_cents(1050));
        assert_eq!(totals[2].total, Money::from_cents(999));
    }

    #[test]
    fn test_huge_values_saturate_instead_of_overflowing() {
        let value = Money::parse("90000000000000000").unwrap();
        let expenses = vec![
            expense("2025-01-10", value.cents(), PaymentType::Debit, Some(Category::Food)),
            expense("2025-01-11", value.cents(), PaymentType::Debit, Some(Category::Food)),
        ];

        let max = Money::from_cents(i64::MAX);
        assert_eq!(total_by_payment_type(&expenses, PaymentType::Debit), max);
        assert_eq!(totals_by_category(&expenses)[0].total, max);
        assert_eq!(monthly_totals(&expenses)[0].total, max);
    }
}
