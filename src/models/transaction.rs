//! Transaction and tag models.
//!
//! Transactions are the user's manually recorded income and expenses.
//! Tags categorise them and are themselves typed as income or expense.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// A category label for transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique identifier for the tag.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display colour (hex or CSS variable).
    pub color: String,
    /// Whether the tag categorises income or expenses.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// The tags a fresh ledger starts with.
pub fn default_tags() -> Vec<Tag> {
    let tag = |id: &str, name: &str, color: &str, kind| Tag {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        kind,
    };
    vec![
        tag("1", "Food", "#ff6b6b", TransactionType::Expense),
        tag("2", "Transport", "#4ecdc4", TransactionType::Expense),
        tag("3", "Salary", "#ffe66d", TransactionType::Income),
    ]
}

/// A recorded income or expense.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{Transaction, TransactionType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let lunch = Transaction::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     Decimal::new(850, 0),
///     TransactionType::Expense,
///     "1",
/// );
/// assert!(lunch.is_expense());
/// assert!(lunch.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for the transaction.
    pub id: String,
    /// The day the transaction happened.
    pub date: NaiveDate,
    /// The (non-negative) amount; direction comes from `kind`.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The tag categorising this transaction.
    pub tag_id: String,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Creates a transaction with a freshly generated id.
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        kind: TransactionType,
        tag_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            amount,
            kind,
            tag_id: tag_id.into(),
            description: None,
        }
    }

    /// Returns true for income transactions.
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Returns true for expense transactions.
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Rejects negative amounts; the sign is carried by `kind`.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.amount < Decimal::ZERO {
            return Err(LedgerError::InvalidTransaction {
                transaction_id: self.id.clone(),
                message: format!("amount cannot be negative: {}", self.amount),
            });
        }
        Ok(())
    }
}
