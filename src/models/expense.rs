//! Expense model
//!
//! An expense is a single recorded outflow: date, description, optional
//! category, payment type and a non-negative amount.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// Fixed set of spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Leisure,
    Health,
    Education,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Leisure,
        Self::Health,
        Self::Education,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_lowercase() == needle)
            .ok_or_else(|| format!("Unknown category: {}", s.trim()))
    }
}

/// Settlement channel used for an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Debit,
    Credit,
    /// Instant bank transfer (PIX)
    #[serde(alias = "pix")]
    InstantTransfer,
}

impl PaymentType {
    /// All payment types in display order
    pub const ALL: [PaymentType; 3] = [Self::Debit, Self::Credit, Self::InstantTransfer];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
            Self::InstantTransfer => "PIX",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            "pix" | "instant" | "instant-transfer" | "instant_transfer" => {
                Ok(Self::InstantTransfer)
            }
            _ => Err(format!(
                "Unknown payment type: {} (expected debit, credit or pix)",
                s.trim()
            )),
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Spending category, if one was chosen
    #[serde(default)]
    pub category: Option<Category>,

    /// How the expense was paid
    pub payment_type: PaymentType,

    /// Amount spent (never negative)
    pub value: Money,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Option<Category>,
        payment_type: PaymentType,
        value: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            description: description.into(),
            category,
            payment_type,
            value,
            created_at: Utc::now(),
        }
    }

    /// Two-digit month key ("01".."12") used by the monthly totals
    pub fn month_key(&self) -> String {
        format!("{:02}", self.date.month())
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.value.is_negative() {
            return Err(ExpenseValidationError::NegativeValue(self.value));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.payment_type,
            self.value
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeValue(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeValue(value) => {
                write!(f, "Expense value cannot be negative: {}", value)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
