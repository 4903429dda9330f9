//! Salary projection and month ledger views.
//!
//! Pay for a month's shifts arrives on the pay day of the following month.
//! The ledger for a month therefore shows the previous month's shift pay as
//! a projected income entry next to the user's real transactions.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{AppData, LedgerEntry, ProjectedSalaryEntry, Tag, TransactionType};

use super::monthly_pay::calculate_monthly_pay;

/// The month before `(year, month)`; January rolls back to the previous December.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> LedgerResult<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|_| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| LedgerError::InvalidDate {
            message: format!("{}-{:02} is not a calendar month", year, month),
        })
}

/// The pay date within a month.
///
/// A pay day past the end of the month falls back to the last day, so a
/// pay day of 31 lands on 28 or 29 February.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDate`] for a month outside 1-12 or a pay
/// day of zero.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::pay_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(pay_date(2026, 2, 31).unwrap(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert_eq!(pay_date(2026, 3, 25).unwrap(), NaiveDate::from_ymd_opt(2026, 3, 25).unwrap());
/// ```
pub fn pay_date(year: i32, month: u32, pay_day: u32) -> LedgerResult<NaiveDate> {
    if pay_day == 0 {
        return Err(LedgerError::InvalidDate {
            message: "pay day must be at least 1".to_string(),
        });
    }

    let day = pay_day.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| LedgerError::InvalidDate {
        message: format!("{}-{:02}-{:02} is not a valid date", year, month, day),
    })
}

/// Projects the salary paid in `(year, month)`.
///
/// The amount is the pay for shifts booked in the previous month, using the
/// document's night multiplier, dated on this month's pay date.
pub fn project_salary(data: &AppData, year: i32, month: u32) -> LedgerResult<ProjectedSalaryEntry> {
    let config = &data.user_config;
    let date = pay_date(year, month, config.pay_day)?;
    let (source_year, source_month) = previous_month(year, month);

    Ok(ProjectedSalaryEntry {
        date,
        amount: calculate_monthly_pay(
            &data.shifts,
            source_year,
            source_month,
            config.night_wage_multiplier,
        ),
        source_year,
        source_month,
    })
}

/// The ledger for a month: real transactions dated in the month plus the
/// projected salary, newest first.
///
/// Entries on the same day keep document order, with the projection after
/// the real transactions.
pub fn month_ledger(data: &AppData, year: i32, month: u32) -> LedgerResult<Vec<LedgerEntry>> {
    let projected = project_salary(data, year, month)?;

    let mut entries: Vec<LedgerEntry> = data
        .transactions_in_month(year, month)
        .cloned()
        .map(LedgerEntry::Real)
        .collect();
    entries.push(LedgerEntry::ProjectedSalary(projected));

    entries.sort_by(|a, b| b.date().cmp(&a.date()));
    Ok(entries)
}

fn total_of(entries: &[LedgerEntry], kind: TransactionType) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.kind() == kind)
        .map(LedgerEntry::amount)
        .sum()
}

/// Sum of income entries, projected salary included.
pub fn income_total(entries: &[LedgerEntry]) -> Decimal {
    total_of(entries, TransactionType::Income)
}

/// Sum of expense entries.
pub fn expense_total(entries: &[LedgerEntry]) -> Decimal {
    total_of(entries, TransactionType::Expense)
}

/// Spending in one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagTotal {
    /// The category.
    pub tag: Tag,
    /// Sum of expense entries carrying the tag.
    pub total: Decimal,
}

/// Expense totals per expense tag.
///
/// Tags appear in the order given; income tags and tags with nothing spent
/// are left out.
pub fn expense_by_tag(entries: &[LedgerEntry], tags: &[Tag]) -> Vec<TagTotal> {
    tags.iter()
        .filter(|tag| tag.kind == TransactionType::Expense)
        .filter_map(|tag| {
            let total: Decimal = entries
                .iter()
                .filter(|entry| entry.kind() == TransactionType::Expense)
                .filter(|entry| entry.tag_id() == Some(tag.id.as_str()))
                .map(LedgerEntry::amount)
                .sum();

            (total > Decimal::ZERO).then(|| TagTotal {
                tag: tag.clone(),
                total,
            })
        })
        .collect()
}

/// Income and expense on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotals {
    /// The day.
    pub date: NaiveDate,
    /// Income entries on the day.
    pub income: Decimal,
    /// Expense entries on the day.
    pub expense: Decimal,
}

/// Totals for the entries dated on `date`, as shown in a calendar cell.
pub fn day_totals(entries: &[LedgerEntry], date: NaiveDate) -> DayTotals {
    let mut totals = DayTotals {
        date,
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
    };

    for entry in entries.iter().filter(|entry| entry.date() == date) {
        match entry.kind() {
            TransactionType::Income => totals.income += entry.amount(),
            TransactionType::Expense => totals.expense += entry.amount(),
        }
    }

    totals
}
