//! The write-through ledger store.
//!
//! [`LedgerStore`] owns the in-memory [`AppData`] document and persists the
//! whole document after every successful mutation. A mutation that fails
//! validation or fails to persist leaves both copies unchanged.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{
    MonthlySummary, calculate_monthly_pay, calculate_shift_pay, month_ledger, summarize_month,
};
use crate::config::AppConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AppData, Job, LedgerEntry, Shift, ShiftProfile, Tag, Transaction, UserConfig, UserConfigPatch,
};

use super::migration::migrate_document;
use super::storage::DocumentStorage;

/// Items kept in an id-keyed list of the ledger document.
trait Identified {
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

impl Identified for Shift {
    const ENTITY: &'static str = "shift";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Transaction {
    const ENTITY: &'static str = "transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Tag {
    const ENTITY: &'static str = "tag";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Job {
    const ENTITY: &'static str = "job";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ShiftProfile {
    const ENTITY: &'static str = "shift profile";

    fn id(&self) -> &str {
        &self.id
    }
}

fn replace_by_id<T: Identified>(items: &mut [T], item: T) -> LedgerResult<()> {
    match items.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            Ok(())
        }
        None => Err(LedgerError::NotFound {
            entity: T::ENTITY,
            id: item.id().to_string(),
        }),
    }
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> LedgerResult<T> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| LedgerError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })?;
    Ok(items.remove(index))
}

/// Owns the ledger document and keeps storage in step with it.
///
/// # Example
///
/// ```
/// use shift_ledger::config::AppConfig;
/// use shift_ledger::models::Shift;
/// use shift_ledger::store::{LedgerStore, MemoryStorage};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = LedgerStore::open(MemoryStorage::new(), &AppConfig::default()).unwrap();
/// store
///     .add_shift(Shift::new(
///         NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///         "09:00".parse().unwrap(),
///         "17:00".parse().unwrap(),
///         60,
///         Decimal::new(1000, 0),
///     ))
///     .unwrap();
///
/// assert_eq!(store.monthly_pay(2026, 1), Decimal::new(7000, 0));
/// assert!(store.storage().get("manage-app-data").is_some());
/// ```
#[derive(Debug)]
pub struct LedgerStore<S: DocumentStorage> {
    storage: S,
    key: String,
    data: AppData,
}

impl<S: DocumentStorage> LedgerStore<S> {
    /// Opens the ledger stored under the configured key.
    ///
    /// A stored document is parsed and migrated to the current schema. When
    /// nothing is stored yet, a fresh document is built from the configured
    /// defaults; it is not written until the first mutation.
    ///
    /// # Errors
    ///
    /// Storage failures, unparseable documents and documents from a newer
    /// schema are returned as errors. A bad document is never replaced.
    pub fn open(storage: S, config: &AppConfig) -> LedgerResult<Self> {
        let key = config.storage().key.clone();

        let data = match storage.read(&key)? {
            Some(raw) => migrate_document(&raw, config).inspect_err(|e| {
                warn!(key = %key, error = %e, "stored ledger document could not be loaded");
            })?,
            None => {
                info!(key = %key, "no stored ledger document, starting fresh");
                config.fresh_document()
            }
        };

        info!(
            key = %key,
            shifts = data.shifts.len(),
            transactions = data.transactions.len(),
            "opened ledger"
        );

        Ok(Self { storage, key, data })
    }

    /// The current document.
    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Persists `next` and, once written, makes it the current document.
    fn commit(&mut self, next: AppData, action: &str) -> LedgerResult<()> {
        let json = serde_json::to_string(&next).map_err(|e| LedgerError::StorageError {
            key: self.key.clone(),
            message: e.to_string(),
        })?;

        self.storage.write(&self.key, &json).inspect_err(|e| {
            warn!(key = %self.key, action, error = %e, "failed to persist ledger");
        })?;

        self.data = next;
        info!(key = %self.key, action, "ledger updated");
        Ok(())
    }

    /// Applies `change` to a copy of the document and commits it.
    fn mutate<T>(
        &mut self,
        action: &str,
        change: impl FnOnce(&mut AppData) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut next = self.data.clone();
        let outcome = change(&mut next)?;
        self.commit(next, action)?;
        Ok(outcome)
    }

    // =========================================================================
    // Shifts
    // =========================================================================

    /// Adds a shift after validating it.
    pub fn add_shift(&mut self, shift: Shift) -> LedgerResult<()> {
        shift.validate()?;
        self.mutate("add_shift", |data| {
            data.shifts.push(shift);
            Ok(())
        })
    }

    /// Replaces the shift with the same id.
    pub fn update_shift(&mut self, shift: Shift) -> LedgerResult<()> {
        shift.validate()?;
        self.mutate("update_shift", |data| replace_by_id(&mut data.shifts, shift))
    }

    /// Removes a shift, returning it.
    pub fn delete_shift(&mut self, id: &str) -> LedgerResult<Shift> {
        self.mutate("delete_shift", |data| remove_by_id(&mut data.shifts, id))
    }

    /// Looks up a shift by id.
    pub fn shift(&self, id: &str) -> Option<&Shift> {
        self.data.shifts.iter().find(|shift| shift.id == id)
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Adds a transaction after validating it.
    pub fn add_transaction(&mut self, transaction: Transaction) -> LedgerResult<()> {
        transaction.validate()?;
        self.mutate("add_transaction", |data| {
            data.transactions.push(transaction);
            Ok(())
        })
    }

    /// Removes a transaction, returning it.
    pub fn delete_transaction(&mut self, id: &str) -> LedgerResult<Transaction> {
        self.mutate("delete_transaction", |data| {
            remove_by_id(&mut data.transactions, id)
        })
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// Adds a tag.
    pub fn add_tag(&mut self, tag: Tag) -> LedgerResult<()> {
        self.mutate("add_tag", |data| {
            data.tags.push(tag);
            Ok(())
        })
    }

    /// Replaces the tag with the same id.
    pub fn update_tag(&mut self, tag: Tag) -> LedgerResult<()> {
        self.mutate("update_tag", |data| replace_by_id(&mut data.tags, tag))
    }

    /// Removes a tag, returning it. Transactions referencing it keep the id.
    pub fn delete_tag(&mut self, id: &str) -> LedgerResult<Tag> {
        self.mutate("delete_tag", |data| remove_by_id(&mut data.tags, id))
    }

    // =========================================================================
    // Jobs and shift profiles
    // =========================================================================

    /// Adds a job.
    pub fn add_job(&mut self, job: Job) -> LedgerResult<()> {
        job.validate()?;
        self.mutate("add_job", |data| {
            data.jobs.push(job);
            Ok(())
        })
    }

    /// Replaces the job with the same id. Existing shifts keep the wage
    /// they were logged with.
    pub fn update_job(&mut self, job: Job) -> LedgerResult<()> {
        job.validate()?;
        self.mutate("update_job", |data| replace_by_id(&mut data.jobs, job))
    }

    /// Removes a job, returning it.
    pub fn delete_job(&mut self, id: &str) -> LedgerResult<Job> {
        self.mutate("delete_job", |data| remove_by_id(&mut data.jobs, id))
    }

    /// Adds a shift template after validating it.
    pub fn add_shift_profile(&mut self, profile: ShiftProfile) -> LedgerResult<()> {
        profile.validate()?;
        self.mutate("add_shift_profile", |data| {
            data.shift_profiles.push(profile);
            Ok(())
        })
    }

    /// Removes a shift template, returning it.
    pub fn delete_shift_profile(&mut self, id: &str) -> LedgerResult<ShiftProfile> {
        self.mutate("delete_shift_profile", |data| {
            remove_by_id(&mut data.shift_profiles, id)
        })
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Merges `patch` into the user settings.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidConfig`] if the merged settings are
    /// invalid; nothing is changed in that case.
    pub fn update_user_config(&mut self, patch: &UserConfigPatch) -> LedgerResult<&UserConfig> {
        let updated = patch.apply_to(&self.data.user_config);
        updated.validate()?;
        self.mutate("update_user_config", |data| {
            data.user_config = updated;
            Ok(())
        })?;
        Ok(&self.data.user_config)
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Pay for a single stored shift at the configured night multiplier.
    pub fn shift_pay(&self, id: &str) -> LedgerResult<Decimal> {
        let shift = self.shift(id).ok_or_else(|| LedgerError::NotFound {
            entity: Shift::ENTITY,
            id: id.to_string(),
        })?;
        Ok(calculate_shift_pay(shift, self.data.user_config.night_wage_multiplier))
    }

    /// Pay for shifts booked in a month at the configured night multiplier.
    pub fn monthly_pay(&self, year: i32, month: u32) -> Decimal {
        calculate_monthly_pay(
            &self.data.shifts,
            year,
            month,
            self.data.user_config.night_wage_multiplier,
        )
    }

    /// Income, spending and budget figures for a month.
    pub fn summary(&self, year: i32, month: u32) -> MonthlySummary {
        summarize_month(&self.data, year, month)
    }

    /// The month's ledger, including the projected salary entry.
    pub fn month_ledger(&self, year: i32, month: u32) -> LedgerResult<Vec<LedgerEntry>> {
        month_ledger(&self.data, year, month)
    }
}
