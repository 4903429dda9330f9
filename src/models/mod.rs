//! Core data models for the shift ledger.
//!
//! This module contains the domain models that make up the persisted
//! ledger document, plus the non-persisted [`LedgerEntry`] view type.

mod app_data;
mod job;
mod ledger_entry;
mod shift;
mod time_of_day;
mod transaction;
mod user_config;

pub(crate) use app_data::in_month;
pub use app_data::{AppData, CURRENT_SCHEMA_VERSION};
pub use job::Job;
pub use ledger_entry::{LedgerEntry, ProjectedSalaryEntry};
pub use shift::{Shift, ShiftProfile};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
pub use transaction::{Tag, Transaction, TransactionType, default_tags};
pub use user_config::{ThemeMode, UserConfig, UserConfigPatch};
