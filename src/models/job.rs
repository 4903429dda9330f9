//! Job (employer) model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// An employer or position the user works shifts for.
///
/// A job's `hourly_wage` seeds new shifts; existing shifts keep the wage
/// they were created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the job.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current hourly rate for new shifts.
    pub hourly_wage: Decimal,
    /// Display colour.
    pub color: String,
}

impl Job {
    /// Rejects a negative hourly wage.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.hourly_wage < Decimal::ZERO {
            return Err(LedgerError::InvalidConfig {
                field: "hourly_wage".to_string(),
                message: format!("job '{}' hourly wage cannot be negative", self.id),
            });
        }
        Ok(())
    }
}
