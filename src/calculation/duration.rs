//! Worked-duration calculation.
//!
//! This module converts a shift's start time, end time and unpaid break
//! into worked hours. An end time earlier than the start time means the
//! shift ran past midnight.

use rust_decimal::Decimal;

use crate::models::{MINUTES_PER_DAY, TimeOfDay};

/// Minutes in an hour, as a decimal divisor.
pub(crate) const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Places a shift on a single minute axis measured from midnight of its
/// start day, moving the end into the next day when it is earlier than
/// the start.
///
/// Returns `(start_minutes, end_minutes)` with `end_minutes >= start_minutes`.
pub(crate) fn shift_span(start: TimeOfDay, end: TimeOfDay) -> (i64, i64) {
    let start_minutes = i64::from(start.minutes());
    let mut end_minutes = i64::from(end.minutes());

    if end_minutes < start_minutes {
        end_minutes += i64::from(MINUTES_PER_DAY);
    }

    (start_minutes, end_minutes)
}

/// Calculates worked hours for a time range minus an unpaid break.
///
/// The calculation:
/// 1. Converts both times to minutes since midnight
/// 2. Adds 24 hours to the end if it is earlier than the start
/// 3. Subtracts the break from the span
/// 4. Clamps at zero and converts to hours
///
/// Equal start and end times give a zero-length span, not a 24 hour one.
///
/// # Arguments
///
/// * `start` - Shift start time
/// * `end` - Shift end time
/// * `break_minutes` - Unpaid break in minutes
///
/// # Returns
///
/// Worked hours as a `Decimal`, never negative.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::calculate_duration;
/// use rust_decimal::Decimal;
///
/// // Overnight shift
/// let hours = calculate_duration("22:00".parse().unwrap(), "06:00".parse().unwrap(), 0);
/// assert_eq!(hours, Decimal::new(8, 0));
///
/// // Break longer than the shift
/// let hours = calculate_duration("09:00".parse().unwrap(), "10:00".parse().unwrap(), 120);
/// assert_eq!(hours, Decimal::ZERO);
/// ```
pub fn calculate_duration(start: TimeOfDay, end: TimeOfDay, break_minutes: u32) -> Decimal {
    let (start_minutes, end_minutes) = shift_span(start, end);
    let worked_minutes = end_minutes - start_minutes - i64::from(break_minutes);

    Decimal::from(worked_minutes.max(0)) / MINUTES_PER_HOUR
}
