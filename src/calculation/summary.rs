//! Monthly income, expense and budget summary.
//!
//! Combines the month's shift salary with recorded transactions and the
//! user's budget settings into the figures shown on the summary screen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AppData;

use super::monthly_pay::calculate_monthly_pay;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Budget progress above this percentage is a warning.
pub const BUDGET_WARNING_PERCENT: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Budget progress above this percentage is critical.
pub const BUDGET_DANGER_PERCENT: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// How close spending is to the monthly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    /// At most 75% of the budget spent.
    Healthy,
    /// More than 75% spent.
    Warning,
    /// More than 90% spent.
    Danger,
}

impl BudgetHealth {
    /// Classifies a budget progress percentage.
    pub fn from_progress(progress_percent: Decimal) -> Self {
        if progress_percent > BUDGET_DANGER_PERCENT {
            BudgetHealth::Danger
        } else if progress_percent > BUDGET_WARNING_PERCENT {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Healthy
        }
    }
}

/// Income, spending and budget figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Pay for shifts booked in the month.
    pub salary: Decimal,
    /// Income transactions dated in the month.
    pub other_income: Decimal,
    /// `salary + other_income`.
    pub total_income: Decimal,
    /// Expense transactions dated in the month.
    pub total_expense: Decimal,
    /// `total_income - total_expense`; may be negative.
    pub balance: Decimal,
    /// Balance as a percentage of income; zero without income.
    pub savings_rate: Decimal,
    /// Spending as a percentage of the budget, capped at 100.
    pub budget_progress: Decimal,
    /// Classification of `budget_progress`.
    pub budget_health: BudgetHealth,
    /// Budget left to spend, never negative.
    pub remaining_budget: Decimal,
    /// The month's contribution to savings, never negative.
    pub month_savings: Decimal,
    /// `month_savings` as a percentage of the savings goal, capped at 100.
    pub savings_goal_progress: Decimal,
}

/// Builds the summary for a month from the ledger document.
///
/// Salary uses the night multiplier from the document's user settings.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::{summarize_month, BudgetHealth};
/// use shift_ledger::models::AppData;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_month(&AppData::default(), 2026, 1);
/// assert_eq!(summary.total_income, Decimal::ZERO);
/// assert_eq!(summary.budget_health, BudgetHealth::Healthy);
/// ```
pub fn summarize_month(data: &AppData, year: i32, month: u32) -> MonthlySummary {
    let config = &data.user_config;
    let salary = calculate_monthly_pay(&data.shifts, year, month, config.night_wage_multiplier);

    let (other_income, total_expense) = data.transactions_in_month(year, month).fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expense), t| {
            if t.is_income() {
                (income + t.amount, expense)
            } else {
                (income, expense + t.amount)
            }
        },
    );

    let total_income = salary + other_income;
    let balance = total_income - total_expense;

    let savings_rate = if total_income > Decimal::ZERO {
        balance / total_income * HUNDRED
    } else {
        Decimal::ZERO
    };

    let budget_progress = if config.monthly_budget > Decimal::ZERO {
        capped_percent(total_expense, config.monthly_budget)
    } else if total_expense > Decimal::ZERO {
        HUNDRED
    } else {
        Decimal::ZERO
    };

    let month_savings = balance.max(Decimal::ZERO);
    let savings_goal_progress = if config.savings_goal > Decimal::ZERO {
        capped_percent(month_savings, config.savings_goal)
    } else {
        Decimal::ZERO
    };

    MonthlySummary {
        year,
        month,
        salary,
        other_income,
        total_income,
        total_expense,
        balance,
        savings_rate,
        budget_progress,
        budget_health: BudgetHealth::from_progress(budget_progress),
        remaining_budget: (config.monthly_budget - total_expense).max(Decimal::ZERO),
        month_savings,
        savings_goal_progress,
    }
}

/// `part / whole * 100`, capped at 100. `whole` must be positive.
fn capped_percent(part: Decimal, whole: Decimal) -> Decimal {
    (part / whole * HUNDRED).min(HUNDRED)
}
