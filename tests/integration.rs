//! Integration tests for the shift ledger.
//!
//! This test suite covers complete flows through the public API:
//! - Shift pay for day, night and mixed shifts
//! - Opening, mutating and reopening a file-backed ledger
//! - Migrating a document written before schema versioning
//! - Salary projection onto the pay date
//! - Month summaries
//! - Error cases

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::fs;
use std::str::FromStr;

use shift_ledger::calculation::{
    BudgetHealth, DEFAULT_NIGHT_MULTIPLIER, calculate_duration, calculate_monthly_pay,
    calculate_shift_pay, calculate_shift_pay_breakdown, expense_by_tag, income_total,
};
use shift_ledger::config::{AppConfig, ConfigLoader, StorageConfig};
use shift_ledger::error::LedgerError;
use shift_ledger::models::{
    CURRENT_SCHEMA_VERSION, LedgerEntry, Shift, Transaction, TransactionType, UserConfigPatch,
    default_tags,
};
use shift_ledger::store::{FileStorage, LedgerStore, MemoryStorage};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn make_shift(date: &str, start: &str, end: &str, break_minutes: u32, wage: &str) -> Shift {
    Shift::new(
        make_date(date),
        start.parse().unwrap(),
        end.parse().unwrap(),
        break_minutes,
        decimal(wage),
    )
}

fn test_config(directory: &std::path::Path) -> AppConfig {
    let shipped = ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .into_config();
    AppConfig::new(
        StorageConfig {
            directory: directory.display().to_string(),
            key: "ledger".to_string(),
        },
        shipped.user_defaults().clone(),
        shipped.default_tags().to_vec(),
    )
}

fn open_file_store(config: &AppConfig) -> LedgerStore<FileStorage> {
    LedgerStore::open(FileStorage::new(&config.storage().directory), config)
        .expect("Failed to open ledger")
}

fn read_document(config: &AppConfig) -> Value {
    let path = FileStorage::new(&config.storage().directory).path_for(&config.storage().key);
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Shift pay
// =============================================================================

#[test]
fn test_day_shift_pay() {
    let shift = make_shift("2026-01-15", "09:00", "17:00", 60, "1000");
    assert_eq!(calculate_duration(shift.start_time, shift.end_time, 60), decimal("7"));
    assert_eq!(calculate_shift_pay(&shift, DEFAULT_NIGHT_MULTIPLIER), decimal("7000"));
}

#[test]
fn test_night_shift_pay() {
    let shift = make_shift("2026-01-15", "23:00", "04:00", 0, "1000");
    let breakdown = calculate_shift_pay_breakdown(&shift, DEFAULT_NIGHT_MULTIPLIER);

    assert_eq!(breakdown.night_hours, decimal("5"));
    assert_eq!(breakdown.normal_hours, Decimal::ZERO);
    assert_eq!(breakdown.pay, decimal("6250"));
}

#[test]
fn test_mixed_shift_pay() {
    let shift = make_shift("2026-01-15", "20:00", "24:00", 0, "1000");
    assert_eq!(calculate_shift_pay(&shift, DEFAULT_NIGHT_MULTIPLIER), decimal("4500"));
}

#[test]
fn test_half_hour_pay_rounds_down() {
    let shift = make_shift("2026-01-15", "09:00", "09:30", 0, "999");
    assert_eq!(calculate_shift_pay(&shift, DEFAULT_NIGHT_MULTIPLIER), decimal("499"));
}

#[test]
fn test_shift_parsed_from_document_json() {
    let shift: Shift = serde_json::from_value(json!({
        "id": "s1",
        "date": "2026-01-15",
        "startTime": "22:00",
        "endTime": "06:00",
        "breakTimeMinutes": 0,
        "hourlyWage": 1000
    }))
    .unwrap();

    // 7h night + 1h normal
    assert_eq!(calculate_shift_pay(&shift, DEFAULT_NIGHT_MULTIPLIER), decimal("9750"));
}

// =============================================================================
// File-backed ledger lifecycle
// =============================================================================

#[test]
fn test_file_ledger_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    {
        let mut store = open_file_store(&config);
        store
            .add_shift(make_shift("2026-01-10", "09:00", "17:00", 60, "1000"))
            .unwrap();
        store
            .add_shift(make_shift("2026-01-31", "22:00", "06:00", 0, "1000"))
            .unwrap();
        store
            .add_transaction(Transaction::new(
                make_date("2026-02-03"),
                decimal("1200"),
                TransactionType::Expense,
                "1",
            ))
            .unwrap();
    }

    let reopened = open_file_store(&config);
    assert_eq!(reopened.data().shifts.len(), 2);
    assert_eq!(reopened.data().transactions.len(), 1);
    assert_eq!(reopened.monthly_pay(2026, 1), decimal("16750"));
}

#[test]
fn test_fresh_ledger_is_not_written_until_mutated() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let path = FileStorage::new(dir.path()).path_for("ledger");

    let mut store = open_file_store(&config);
    assert!(!path.exists());

    store
        .update_user_config(&UserConfigPatch {
            pay_day: Some(15),
            ..Default::default()
        })
        .unwrap();
    assert!(path.exists());

    let document = read_document(&config);
    assert_eq!(document["schemaVersion"], json!(CURRENT_SCHEMA_VERSION));
    assert_eq!(document["userConfig"]["payDay"], json!(15));
}

#[test]
fn test_projected_salary_is_never_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut store = open_file_store(&config);
    store
        .add_shift(make_shift("2026-01-10", "09:00", "17:00", 0, "1000"))
        .unwrap();

    let ledger = store.month_ledger(2026, 2).unwrap();
    assert!(ledger.iter().any(LedgerEntry::is_projected));

    let document = read_document(&config);
    assert_eq!(document["transactions"], json!([]));
    assert!(store.data().transactions.is_empty());
}

// =============================================================================
// Migration
// =============================================================================

#[test]
fn test_legacy_document_is_migrated_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let legacy = json!({
        "shifts": [{
            "id": "s1", "date": "2026-03-02", "startTime": "18:00", "endTime": "02:00",
            "breakTime": 60, "hourlyWage": 1000
        }],
        "transactions": [],
        "tags": [],
        "shiftProfiles": [],
        "userConfig": {
            "hourlyWage": 1000, "monthlyBudget": 50000, "savingsGoal": 100000,
            "payDay": 25, "themeMode": "light", "themeColor": "blue"
        }
    });
    fs::write(dir.path().join("ledger.json"), legacy.to_string()).unwrap();

    let mut store = open_file_store(&config);
    assert_eq!(store.data().schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(store.data().tags, default_tags());
    assert_eq!(store.data().user_config.night_wage_multiplier, decimal("1.25"));
    assert_eq!(store.data().shifts[0].break_minutes, 60);

    // 18:00-02:00 with a 60 minute break: 3.5h normal + 3.5h night
    assert_eq!(store.monthly_pay(2026, 3), decimal("7875"));

    // The upgraded shape is written back with the next mutation
    store.delete_shift("s1").unwrap();
    let document = read_document(&config);
    assert_eq!(document["schemaVersion"], json!(CURRENT_SCHEMA_VERSION));
    assert_eq!(document["jobs"], json!([]));
}

#[test]
fn test_corrupt_document_is_an_error_and_left_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let path = dir.path().join("ledger.json");
    fs::write(&path, "{\"shifts\": [").unwrap();

    let result = LedgerStore::open(FileStorage::new(dir.path()), &config);
    assert!(matches!(result, Err(LedgerError::DocumentParse { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"shifts\": [");
}

#[test]
fn test_newer_document_is_rejected() {
    let storage = MemoryStorage::with_document(
        "manage-app-data",
        &json!({ "schemaVersion": CURRENT_SCHEMA_VERSION + 1 }).to_string(),
    );

    let result = LedgerStore::open(storage, &AppConfig::default());
    assert!(matches!(
        result,
        Err(LedgerError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn test_current_document_with_invalid_settings_is_rejected_and_left_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let path = dir.path().join("ledger.json");

    let mut document = serde_json::to_value(config.fresh_document()).unwrap();
    document["userConfig"]["payDay"] = json!(0);
    document["userConfig"]["nightWageMultiplier"] = json!("-1");
    let raw = document.to_string();
    fs::write(&path, &raw).unwrap();

    let result = LedgerStore::open(FileStorage::new(dir.path()), &config);
    assert!(matches!(result, Err(LedgerError::InvalidConfig { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn test_end_of_day_start_time_is_rejected() {
    let mut store = LedgerStore::open(MemoryStorage::new(), &AppConfig::default()).unwrap();

    let result = store.add_shift(make_shift("2026-01-15", "24:00", "05:00", 0, "1000"));
    assert!(matches!(result, Err(LedgerError::InvalidShift { .. })));
    assert!(store.data().shifts.is_empty());
    assert!(store.storage().get("manage-app-data").is_none());
}

// =============================================================================
// Projection and summaries
// =============================================================================

#[test]
fn test_month_views_through_store() {
    let mut store = LedgerStore::open(MemoryStorage::new(), &AppConfig::default()).unwrap();

    store
        .update_user_config(&UserConfigPatch {
            pay_day: Some(31),
            monthly_budget: Some(decimal("10000")),
            ..Default::default()
        })
        .unwrap();

    // January shifts are paid on the last day of February
    store
        .add_shift(make_shift("2026-01-05", "09:00", "17:00", 60, "1000"))
        .unwrap();
    store
        .add_shift(make_shift("2026-01-06", "20:00", "24:00", 0, "1000"))
        .unwrap();
    store
        .add_transaction(Transaction::new(
            make_date("2026-02-14"),
            decimal("8000"),
            TransactionType::Expense,
            "1",
        ))
        .unwrap();
    store
        .add_transaction(Transaction::new(
            make_date("2026-02-20"),
            decimal("1500"),
            TransactionType::Expense,
            "2",
        ))
        .unwrap();

    let ledger = store.month_ledger(2026, 2).unwrap();
    assert_eq!(ledger.len(), 3);
    assert!(ledger[0].is_projected());
    assert_eq!(ledger[0].date(), make_date("2026-02-28"));
    assert_eq!(income_total(&ledger), decimal("11500"));

    let by_tag = expense_by_tag(&ledger, &store.data().tags);
    assert_eq!(by_tag.len(), 2);
    assert_eq!(by_tag[0].total, decimal("8000"));

    let january = store.summary(2026, 1);
    assert_eq!(january.salary, decimal("11500"));
    assert_eq!(january.budget_health, BudgetHealth::Healthy);

    let february = store.summary(2026, 2);
    assert_eq!(february.salary, Decimal::ZERO);
    assert_eq!(february.total_expense, decimal("9500"));
    assert_eq!(february.budget_progress, decimal("95"));
    assert_eq!(february.budget_health, BudgetHealth::Danger);
    assert_eq!(february.remaining_budget, decimal("500"));
}

#[test]
fn test_monthly_pay_excludes_adjacent_months() {
    let shifts = vec![
        make_shift("2026-01-31", "22:00", "06:00", 0, "1000"),
        make_shift("2026-02-01", "09:00", "17:00", 60, "1000"),
        make_shift("2026-03-01", "00:00", "08:00", 0, "1000"),
    ];

    assert_eq!(
        calculate_monthly_pay(&shifts, 2026, 2, DEFAULT_NIGHT_MULTIPLIER),
        decimal("7000")
    );
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_invalid_time_is_rejected_at_parse() {
    let result = "24:30".parse::<shift_ledger::models::TimeOfDay>();
    assert!(matches!(result, Err(LedgerError::InvalidTimeFormat { .. })));

    let result: Result<Shift, _> = serde_json::from_value(json!({
        "id": "s1",
        "date": "2026-01-15",
        "startTime": "9am",
        "endTime": "17:00",
        "hourlyWage": 1000
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_ids_are_not_found() {
    let mut store = LedgerStore::open(MemoryStorage::new(), &AppConfig::default()).unwrap();
    let result = store.delete_tag("missing");

    match result {
        Err(LedgerError::NotFound { entity, id }) => {
            assert_eq!(entity, "tag");
            assert_eq!(id, "missing");
        }
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}
