//! Entries shown in a month's ledger.
//!
//! A month's ledger mixes the user's real transactions with a projected
//! salary entry derived from logged shifts. The two are kept apart as
//! variants of [`LedgerEntry`] so a projection can never be mistaken for
//! a stored transaction: it has no id and no way back into the document.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Transaction, TransactionType};

/// Expected salary for a worked month, paid on a later pay date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedSalaryEntry {
    /// The pay date the salary is expected on.
    pub date: NaiveDate,
    /// The projected amount in whole currency units.
    pub amount: Decimal,
    /// Year of the month whose shifts were summed.
    pub source_year: i32,
    /// Month (1-12) whose shifts were summed.
    pub source_month: u32,
}

/// One line of a month's ledger.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{LedgerEntry, ProjectedSalaryEntry, TransactionType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = LedgerEntry::ProjectedSalary(ProjectedSalaryEntry {
///     date: NaiveDate::from_ymd_opt(2026, 2, 25).unwrap(),
///     amount: Decimal::new(98_000, 0),
///     source_year: 2026,
///     source_month: 1,
/// });
/// assert!(entry.is_projected());
/// assert_eq!(entry.kind(), TransactionType::Income);
/// assert!(entry.as_transaction().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LedgerEntry {
    /// A transaction recorded by the user.
    Real(Transaction),
    /// A salary projection computed from shifts; never persisted.
    ProjectedSalary(ProjectedSalaryEntry),
}

impl LedgerEntry {
    /// The day the entry falls on.
    pub fn date(&self) -> NaiveDate {
        match self {
            LedgerEntry::Real(transaction) => transaction.date,
            LedgerEntry::ProjectedSalary(projection) => projection.date,
        }
    }

    /// The entry amount.
    pub fn amount(&self) -> Decimal {
        match self {
            LedgerEntry::Real(transaction) => transaction.amount,
            LedgerEntry::ProjectedSalary(projection) => projection.amount,
        }
    }

    /// Income or expense. Projected salary is always income.
    pub fn kind(&self) -> TransactionType {
        match self {
            LedgerEntry::Real(transaction) => transaction.kind,
            LedgerEntry::ProjectedSalary(_) => TransactionType::Income,
        }
    }

    /// The tag of a real transaction.
    pub fn tag_id(&self) -> Option<&str> {
        self.as_transaction().map(|t| t.tag_id.as_str())
    }

    /// Returns true for the projected salary entry.
    pub fn is_projected(&self) -> bool {
        matches!(self, LedgerEntry::ProjectedSalary(_))
    }

    /// The underlying transaction, if this entry is a real one.
    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            LedgerEntry::Real(transaction) => Some(transaction),
            LedgerEntry::ProjectedSalary(_) => None,
        }
    }
}
