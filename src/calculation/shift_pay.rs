//! Shift pay calculation with the night differential.
//!
//! This module splits a shift's worked minutes into a normal portion and
//! a night portion, then prices the night portion at the night multiplier.
//! The night window is the fixed band 22:00 to 05:00, expressed on the
//! shift's start-day minute axis as [1320, 1740).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

use super::duration::{MINUTES_PER_HOUR, shift_span};

/// Start of the night window, in minutes from midnight of the start day (22:00).
pub const NIGHT_WINDOW_START_MINUTES: i64 = 22 * 60;

/// End of the night window, in minutes from midnight of the start day (05:00 next day).
pub const NIGHT_WINDOW_END_MINUTES: i64 = 29 * 60;

/// Default multiplier for hours worked inside the night window (125%).
pub const DEFAULT_NIGHT_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// The normal/night split of a shift and the resulting pay.
///
/// Minutes and hours keep full precision; only `pay` is rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayBreakdown {
    /// Worked minutes after the break (zero when the break swallows the shift).
    pub worked_minutes: i64,
    /// Worked minutes paid at the base rate.
    pub normal_minutes: Decimal,
    /// Worked minutes paid at the night rate, after break proration.
    pub night_minutes: Decimal,
    /// `normal_minutes / 60`.
    pub normal_hours: Decimal,
    /// `night_minutes / 60`.
    pub night_hours: Decimal,
    /// Pay in whole currency units, floored.
    pub pay: Decimal,
}

impl ShiftPayBreakdown {
    fn unpaid() -> Self {
        Self {
            worked_minutes: 0,
            normal_minutes: Decimal::ZERO,
            night_minutes: Decimal::ZERO,
            normal_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            pay: Decimal::ZERO,
        }
    }
}

/// Calculates a shift's pay split into normal and night portions.
///
/// The calculation:
/// 1. Places start and end on the start-day minute axis (end + 24h if earlier)
/// 2. Returns zero pay when the break leaves no worked time
/// 3. Intersects the span with the night window [1320, 1740)
/// 4. Removes the break from the night overlap in proportion to the
///    overlap's share of the raw span
/// 5. Treats the remaining worked minutes as normal time
/// 6. Pays `normal_hours * wage + night_hours * wage * night_multiplier`,
///    floored to a whole currency unit
///
/// # Arguments
///
/// * `shift` - The shift to price
/// * `night_multiplier` - Multiplier for night hours (see [`DEFAULT_NIGHT_MULTIPLIER`])
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::{calculate_shift_pay_breakdown, DEFAULT_NIGHT_MULTIPLIER};
/// use shift_ledger::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 20:00 to midnight: two normal hours, two night hours
/// let shift = Shift::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "20:00".parse().unwrap(),
///     "24:00".parse().unwrap(),
///     0,
///     Decimal::new(1000, 0),
/// );
///
/// let breakdown = calculate_shift_pay_breakdown(&shift, DEFAULT_NIGHT_MULTIPLIER);
/// assert_eq!(breakdown.normal_hours, Decimal::new(2, 0));
/// assert_eq!(breakdown.night_hours, Decimal::new(2, 0));
/// assert_eq!(breakdown.pay, Decimal::new(4500, 0));
/// ```
pub fn calculate_shift_pay_breakdown(shift: &Shift, night_multiplier: Decimal) -> ShiftPayBreakdown {
    let (start_minutes, end_minutes) = shift_span(shift.start_time, shift.end_time);
    let break_minutes = i64::from(shift.break_minutes);

    let worked_minutes = end_minutes - start_minutes - break_minutes;
    if worked_minutes <= 0 {
        return ShiftPayBreakdown::unpaid();
    }

    let overlap_start = start_minutes.max(NIGHT_WINDOW_START_MINUTES);
    let overlap_end = end_minutes.min(NIGHT_WINDOW_END_MINUTES);
    let raw_night_minutes = (overlap_end - overlap_start).max(0);

    // worked_minutes > 0 implies a positive raw span.
    let raw_span = end_minutes - start_minutes;

    // Everything below is scaled by raw_span so the prorated split stays
    // integral: night = raw_night - break * raw_night / span
    //                 = raw_night * worked / span.
    let night_scaled = (raw_night_minutes * raw_span - break_minutes * raw_night_minutes).max(0);
    let normal_scaled = (worked_minutes * raw_span - night_scaled).max(0);

    let wage = shift.hourly_wage;
    let scaled_amount = Decimal::from(normal_scaled) * wage
        + Decimal::from(night_scaled) * wage * night_multiplier;
    let divisor = Decimal::from(raw_span) * MINUTES_PER_HOUR;
    let pay = (scaled_amount / divisor).floor().max(Decimal::ZERO);

    let span = Decimal::from(raw_span);
    let normal_minutes = Decimal::from(normal_scaled) / span;
    let night_minutes = Decimal::from(night_scaled) / span;

    ShiftPayBreakdown {
        worked_minutes,
        normal_minutes,
        night_minutes,
        normal_hours: normal_minutes / MINUTES_PER_HOUR,
        night_hours: night_minutes / MINUTES_PER_HOUR,
        pay,
    }
}

/// Calculates a shift's pay in whole currency units.
///
/// See [`calculate_shift_pay_breakdown`] for the rules.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::{calculate_shift_pay, DEFAULT_NIGHT_MULTIPLIER};
/// use shift_ledger::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "09:00".parse().unwrap(),
///     "17:00".parse().unwrap(),
///     60,
///     Decimal::new(1000, 0),
/// );
/// assert_eq!(calculate_shift_pay(&shift, DEFAULT_NIGHT_MULTIPLIER), Decimal::new(7000, 0));
/// ```
pub fn calculate_shift_pay(shift: &Shift, night_multiplier: Decimal) -> Decimal {
    calculate_shift_pay_breakdown(shift, night_multiplier).pay
}
