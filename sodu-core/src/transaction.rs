//! Transaction input types consumed by the classifier and feature extractor.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Direction of money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    #[default]
    Expense,
}

/// A single transaction to classify.
///
/// Amounts are VND. Of `date`, only hour-of-day, day-of-week and day-of-month
/// are consumed downstream. Callers are responsible for validating that
/// `amount` is a finite non-negative number; degenerate values flow through
/// the heuristics unchecked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Free-text description, may be empty
    pub description: String,
    /// Positive amount in VND
    pub amount: f64,
    /// Wall-clock timestamp of the transaction
    pub date: NaiveDateTime,
    /// Income or expense (defaults to expense)
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create an expense transaction.
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            kind: TransactionKind::Expense,
        }
    }

    /// Override the transaction kind.
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn hour(&self) -> u32 {
        self.date.hour()
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Monday = 0 ... Sunday = 6
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// True when the transaction's own date falls on Saturday/Sunday.
    pub fn falls_on_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
