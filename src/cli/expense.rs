//! Expense CLI commands

use chrono::Local;
use clap::Subcommand;

use super::parse_month_arg;
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, PaymentType};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::state::parse_date;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount (e.g., "80", "80.50" or "R$ 80,50")
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
        /// Payment type (debit, credit, pix)
        #[arg(short, long)]
        payment: String,
        /// Category (food, transport, leisure, health, education, other)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD or the configured display format; default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List expenses
    List {
        /// Only expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only expenses paid this way
        #[arg(short, long)]
        payment: Option<String>,
        /// Only expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show expense details
    Show {
        /// Expense ID (full or short)
        expense: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (full or short)
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            value,
            payment,
            category,
            date,
        } => {
            let date = match date {
                Some(date) => parse_date(&date, &settings.date_format).ok_or_else(|| {
                    TrackerError::Validation(format!(
                        "Invalid date: '{}'. Use YYYY-MM-DD or {}.",
                        date, settings.date_format
                    ))
                })?,
                None => Local::now().date_naive(),
            };

            let value = Money::parse(&value).map_err(|e| {
                TrackerError::Validation(format!(
                    "Invalid value: '{}'. Use a format like '80.50'. Error: {}",
                    value, e
                ))
            })?;

            let payment_type = payment
                .parse::<PaymentType>()
                .map_err(TrackerError::Validation)?;

            let category = category
                .map(|c| c.parse::<Category>().map_err(TrackerError::Validation))
                .transpose()?;

            let expense = service.create(CreateExpenseInput {
                date,
                description,
                category,
                payment_type,
                value,
            })?;

            println!("Recorded expense: {}", expense.description);
            println!(
                "  Value: {}",
                expense.value.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Payment type: {}", expense.payment_type);
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            month,
            payment,
            category,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(month) = parse_month_arg(month.as_deref())? {
                filter = filter.month(month);
            }
            if let Some(payment) = payment {
                filter = filter.payment_type(payment.parse().map_err(TrackerError::Validation)?);
            }
            if let Some(category) = category {
                filter = filter.category(category.parse().map_err(TrackerError::Validation)?);
            }

            let expenses = service.list(&filter)?;
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { expense } => {
            let found = service
                .find(&expense)?
                .ok_or_else(|| TrackerError::expense_not_found(&expense))?;
            print!("{}", format_expense_details(&found, settings));
        }

        ExpenseCommands::Delete { expense } => {
            let deleted = service.delete_by_identifier(&expense)?;
            println!("Deleted expense: {} ({})", deleted.description, deleted.id);
        }
    }

    Ok(())
}
