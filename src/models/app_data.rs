//! The complete persisted ledger document.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;

use super::{Job, Shift, ShiftProfile, Tag, Transaction, UserConfig, default_tags};

/// Schema version written by this build.
///
/// Version 1 is the unversioned shape the ledger started with; see
/// [`crate::store::migrate_document`] for the upgrade path.
pub const CURRENT_SCHEMA_VERSION: u64 = 2;

/// Everything the ledger persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Version of the document layout.
    pub schema_version: u64,
    /// Logged shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Recorded transactions.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Transaction categories.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Employers.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Reusable shift templates.
    #[serde(default)]
    pub shift_profiles: Vec<ShiftProfile>,
    /// User settings.
    #[serde(default)]
    pub user_config: UserConfig,
}

impl Default for AppData {
    fn default() -> Self {
        Self::new(UserConfig::default(), default_tags())
    }
}

impl AppData {
    /// Creates an empty ledger with the given settings and tags.
    pub fn new(user_config: UserConfig, tags: Vec<Tag>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            shifts: Vec::new(),
            transactions: Vec::new(),
            tags,
            jobs: Vec::new(),
            shift_profiles: Vec::new(),
            user_config,
        }
    }

    /// Checks every record against the rules enforced on mutation.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> LedgerResult<()> {
        self.user_config.validate()?;
        self.shifts.iter().try_for_each(Shift::validate)?;
        self.shift_profiles.iter().try_for_each(ShiftProfile::validate)?;
        self.transactions.iter().try_for_each(Transaction::validate)?;
        self.jobs.iter().try_for_each(Job::validate)
    }

    /// Transactions dated in the given calendar month, in document order.
    pub fn transactions_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |t| in_month(t.date, year, month))
    }
}

/// Calendar year/month equality, used for all monthly bucketing.
pub(crate) fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
