//! Wall-clock time of day with minute resolution.
//!
//! Shift times are stored as `"HH:MM"` strings in the ledger document.
//! [`TimeOfDay`] parses them once at the boundary so the calculation
//! functions only ever see valid minute offsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, stored as minutes since midnight.
///
/// Valid values run from `00:00` to `23:59`, plus `24:00` which denotes
/// the end of the day (1440 minutes) and may be used as a shift end time.
///
/// # Example
///
/// ```
/// use shift_ledger::models::TimeOfDay;
///
/// let time: TimeOfDay = "22:30".parse().unwrap();
/// assert_eq!(time.minutes(), 1350);
/// assert_eq!(time.to_string(), "22:30");
///
/// assert!("24:01".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Creates a time of day from an hour and a minute.
    ///
    /// Returns `InvalidTimeFormat` unless `hour < 24 && minute < 60`, or
    /// the value is exactly `24:00`.
    pub fn from_hm(hour: u32, minute: u32) -> LedgerResult<Self> {
        if minute >= 60 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(LedgerError::InvalidTimeFormat {
                value: format!("{:02}:{:02}", hour, minute),
            });
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Minutes since midnight (0..=1440).
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// The hour component.
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    /// The minute component.
    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidTimeFormat {
            value: s.to_string(),
        };

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if hours.len() > 2 || minutes.len() != 2 || !all_digits(hours) || !all_digits(minutes) {
            return Err(invalid());
        }

        let hour: u32 = hours.parse().map_err(|_| invalid())?;
        let minute: u32 = minutes.parse().map_err(|_| invalid())?;

        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
