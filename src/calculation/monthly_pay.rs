//! Monthly pay aggregation.
//!
//! Shifts are bucketed by the calendar month of their booked date, so an
//! overnight shift starting on the last day of a month counts entirely
//! toward that month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Shift, in_month};

use super::duration::calculate_duration;
use super::shift_pay::calculate_shift_pay;

/// Shifts booked in the given calendar month, in input order.
pub fn shifts_in_month(shifts: &[Shift], year: i32, month: u32) -> impl Iterator<Item = &Shift> {
    shifts
        .iter()
        .filter(move |shift| in_month(shift.date, year, month))
}

/// Sums the pay of every shift booked in the given month.
///
/// # Arguments
///
/// * `shifts` - All known shifts, in any order
/// * `year` - Calendar year
/// * `month` - Calendar month (1-12)
/// * `night_multiplier` - Multiplier for night hours
///
/// # Returns
///
/// The total in whole currency units; zero when no shift matches.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::{calculate_monthly_pay, DEFAULT_NIGHT_MULTIPLIER};
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_monthly_pay(&[], 2026, 1, DEFAULT_NIGHT_MULTIPLIER), Decimal::ZERO);
/// ```
pub fn calculate_monthly_pay(
    shifts: &[Shift],
    year: i32,
    month: u32,
    night_multiplier: Decimal,
) -> Decimal {
    shifts_in_month(shifts, year, month)
        .map(|shift| calculate_shift_pay(shift, night_multiplier))
        .sum()
}

/// Worked hours and pay for one month of shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyShiftSummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Number of shifts booked in the month.
    pub shift_count: usize,
    /// Worked hours after breaks.
    pub total_hours: Decimal,
    /// Total pay, equal to [`calculate_monthly_pay`] for the same inputs.
    pub total_pay: Decimal,
}

/// Summarises the shifts booked in a month.
pub fn summarize_month_shifts(
    shifts: &[Shift],
    year: i32,
    month: u32,
    night_multiplier: Decimal,
) -> MonthlyShiftSummary {
    let mut summary = MonthlyShiftSummary {
        year,
        month,
        shift_count: 0,
        total_hours: Decimal::ZERO,
        total_pay: Decimal::ZERO,
    };

    for shift in shifts_in_month(shifts, year, month) {
        summary.shift_count += 1;
        summary.total_hours += calculate_duration(shift.start_time, shift.end_time, shift.break_minutes);
        summary.total_pay += calculate_shift_pay(shift, night_multiplier);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DEFAULT_NIGHT_MULTIPLIER;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(date: &str, start: &str, end: &str, break_minutes: u32) -> Shift {
        Shift {
            id: format!("shift_{}_{}", date, start),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            break_minutes,
            hourly_wage: dec("1000"),
            job_id: None,
        }
    }

    #[test]
    fn test_empty_shift_list_is_zero() {
        assert_eq!(
            calculate_monthly_pay(&[], 2026, 2, DEFAULT_NIGHT_MULTIPLIER),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_sums_only_shifts_in_month() {
        let shifts = vec![
            make_shift("2026-01-31", "22:00", "06:00", 0), // previous month, crosses into Feb
            make_shift("2026-02-01", "09:00", "17:00", 60), // 7000
            make_shift("2026-02-14", "20:00", "24:00", 0),  // 4500
            make_shift("2026-03-01", "09:00", "17:00", 0),  // next month
            make_shift("2025-02-10", "09:00", "17:00", 0),  // same month, other year
        ];

        assert_eq!(
            calculate_monthly_pay(&shifts, 2026, 2, DEFAULT_NIGHT_MULTIPLIER),
            dec("11500")
        );
    }

    #[test]
    fn test_overnight_shift_counts_toward_start_month() {
        // 22:00-06:00: 7h night + 1h normal = 8750 + 1000 = 9750
        let shifts = vec![make_shift("2026-01-31", "22:00", "06:00", 0)];

        assert_eq!(
            calculate_monthly_pay(&shifts, 2026, 1, DEFAULT_NIGHT_MULTIPLIER),
            dec("9750")
        );
        assert_eq!(
            calculate_monthly_pay(&shifts, 2026, 2, DEFAULT_NIGHT_MULTIPLIER),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_floor_applies_per_shift() {
        // Two half-hour shifts at 999: 499 + 499, not floor(999)
        let mut shifts = vec![
            make_shift("2026-04-01", "09:00", "09:30", 0),
            make_shift("2026-04-02", "09:00", "09:30", 0),
        ];
        for shift in &mut shifts {
            shift.hourly_wage = dec("999");
        }

        assert_eq!(
            calculate_monthly_pay(&shifts, 2026, 4, DEFAULT_NIGHT_MULTIPLIER),
            dec("998")
        );
    }

    #[test]
    fn test_summary_counts_hours_and_pay() {
        let shifts = vec![
            make_shift("2026-02-01", "09:00", "17:00", 60),
            make_shift("2026-02-14", "20:00", "24:00", 0),
            make_shift("2026-03-01", "09:00", "17:00", 0),
        ];

        let summary = summarize_month_shifts(&shifts, 2026, 2, DEFAULT_NIGHT_MULTIPLIER);
        assert_eq!(summary.shift_count, 2);
        assert_eq!(summary.total_hours, dec("11"));
        assert_eq!(summary.total_pay, dec("11500"));
        assert_eq!(
            summary.total_pay,
            calculate_monthly_pay(&shifts, 2026, 2, DEFAULT_NIGHT_MULTIPLIER)
        );
    }

    #[test]
    fn test_shifts_in_month_preserves_order() {
        let shifts = vec![
            make_shift("2026-02-20", "09:00", "10:00", 0),
            make_shift("2026-01-20", "09:00", "10:00", 0),
            make_shift("2026-02-02", "09:00", "10:00", 0),
        ];
        let ids: Vec<&str> = shifts_in_month(&shifts, 2026, 2)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["shift_2026-02-20_09:00", "shift_2026-02-02_09:00"]);
    }
}
