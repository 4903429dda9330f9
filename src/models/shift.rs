//! Shift model and related types.
//!
//! This module defines the [`Shift`] and [`ShiftProfile`] structs for
//! representing logged work sessions and reusable shift templates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::calculate_duration;
use crate::error::{LedgerError, LedgerResult};

use super::{MINUTES_PER_DAY, TimeOfDay};

/// `24:00` only marks the end of a day; a shift cannot start there.
fn check_start_time(id: &str, start_time: TimeOfDay) -> LedgerResult<()> {
    if start_time.minutes() == MINUTES_PER_DAY {
        return Err(LedgerError::InvalidShift {
            shift_id: id.to_string(),
            message: "start time must be between 00:00 and 23:59, got 24:00".to_string(),
        });
    }
    Ok(())
}

/// Represents a logged work shift.
///
/// The `hourly_wage` is a snapshot taken when the shift was created or
/// edited; later changes to a job's rate never alter historical pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar day the shift is booked on (its start day).
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: TimeOfDay,
    /// The end time of the shift; earlier than `start_time` means the next day.
    pub end_time: TimeOfDay,
    /// Unpaid break in minutes.
    #[serde(rename = "breakTimeMinutes", alias = "breakTime", default)]
    pub break_minutes: u32,
    /// Base hourly rate captured at creation time.
    pub hourly_wage: Decimal,
    /// Optional reference to the job the shift was worked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl Shift {
    /// Creates a shift with a freshly generated id.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert_eq!(shift.worked_hours(), Decimal::new(7, 0));
    /// ```
    pub fn new(
        date: NaiveDate,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        break_minutes: u32,
        hourly_wage: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time,
            end_time,
            break_minutes,
            hourly_wage,
            job_id: None,
        }
    }

    /// Returns the worked hours after the unpaid break, never negative.
    pub fn worked_hours(&self) -> Decimal {
        calculate_duration(self.start_time, self.end_time, self.break_minutes)
    }

    /// Checks the invariants the calculators rely on.
    ///
    /// Times are range-checked when parsed. The start must also be a time
    /// within the day (not `24:00`) and the wage must be non-negative.
    pub fn validate(&self) -> LedgerResult<()> {
        check_start_time(&self.id, self.start_time)?;
        if self.hourly_wage < Decimal::ZERO {
            return Err(LedgerError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!("hourly wage cannot be negative: {}", self.hourly_wage),
            });
        }
        Ok(())
    }
}

/// A reusable shift template ("day shift", "closing", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftProfile {
    /// Unique identifier for the profile.
    pub id: String,
    /// Display name of the profile.
    pub name: String,
    /// Template start time.
    pub start_time: TimeOfDay,
    /// Template end time.
    pub end_time: TimeOfDay,
    /// Template unpaid break in minutes.
    #[serde(rename = "breakTimeMinutes", alias = "breakTime", default)]
    pub break_minutes: u32,
    /// Job the template belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl ShiftProfile {
    /// Rejects a template whose start time is `24:00`.
    pub fn validate(&self) -> LedgerResult<()> {
        check_start_time(&self.id, self.start_time)
    }

    /// Builds a new shift on `date` from this template.
    pub fn instantiate(&self, date: NaiveDate, hourly_wage: Decimal) -> LedgerResult<Shift> {
        self.validate()?;
        let shift = Shift {
            job_id: self.job_id.clone(),
            ..Shift::new(
                date,
                self.start_time,
                self.end_time,
                self.break_minutes,
                hourly_wage,
            )
        };
        shift.validate()?;
        Ok(shift)
    }
}
