//! Calculation logic for the shift ledger.
//!
//! This module contains the pure calculation functions: worked duration,
//! per-shift pay with the night differential, monthly pay aggregation,
//! salary projection onto the pay date, and the monthly budget summary.
//! None of these functions perform I/O or fail on validated input.

mod duration;
mod monthly_pay;
mod projection;
mod shift_pay;
mod summary;

pub use duration::calculate_duration;
pub use monthly_pay::{
    MonthlyShiftSummary, calculate_monthly_pay, shifts_in_month, summarize_month_shifts,
};
pub use projection::{
    DayTotals, TagTotal, day_totals, days_in_month, expense_by_tag, expense_total, income_total,
    month_ledger, pay_date, previous_month, project_salary,
};
pub use shift_pay::{
    DEFAULT_NIGHT_MULTIPLIER, NIGHT_WINDOW_END_MINUTES, NIGHT_WINDOW_START_MINUTES,
    ShiftPayBreakdown, calculate_shift_pay, calculate_shift_pay_breakdown,
};
pub use summary::{
    BUDGET_DANGER_PERCENT, BUDGET_WARNING_PERCENT, BudgetHealth, MonthlySummary, summarize_month,
};
