//! Ledger document parsing and schema migration.
//!
//! Documents written before versioning carry no `schemaVersion` and are
//! treated as version 1. Version 1 documents may lack the jobs and shift
//! profile lists, may have a missing or zero night multiplier, may have
//! lost their tags, and name the shift break `breakTime`.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AppData, CURRENT_SCHEMA_VERSION};

/// Schema version assumed for documents without a `schemaVersion` field.
pub const LEGACY_SCHEMA_VERSION: u64 = 1;

const LIST_FIELDS: [&str; 4] = ["shifts", "transactions", "jobs", "shiftProfiles"];

/// Parses a stored document, upgrading it to [`CURRENT_SCHEMA_VERSION`].
///
/// Gaps in older documents are filled from `config`'s defaults.
///
/// # Errors
///
/// - [`LedgerError::DocumentParse`] if the text is not a JSON object or
///   does not describe a valid ledger after migration
/// - [`LedgerError::UnsupportedSchemaVersion`] if the document is newer
///   than this build
/// - the validation error of the first record that breaks the rules
///   mutations enforce, such as [`LedgerError::InvalidConfig`] for a pay
///   day of 0 or a non-positive night multiplier
///
/// # Examples
///
/// ```
/// use shift_ledger::config::AppConfig;
/// use shift_ledger::models::CURRENT_SCHEMA_VERSION;
/// use shift_ledger::store::migrate_document;
///
/// let legacy = r#"{"shifts":[],"transactions":[],"tags":[],"userConfig":{"payDay":10}}"#;
/// let data = migrate_document(legacy, &AppConfig::default()).unwrap();
///
/// assert_eq!(data.schema_version, CURRENT_SCHEMA_VERSION);
/// assert_eq!(data.user_config.pay_day, 10);
/// assert_eq!(data.tags.len(), 3);
/// ```
pub fn migrate_document(raw: &str, config: &AppConfig) -> LedgerResult<AppData> {
    let value: Value = serde_json::from_str(raw).map_err(|e| LedgerError::DocumentParse {
        message: e.to_string(),
    })?;

    let Value::Object(mut document) = value else {
        return Err(LedgerError::DocumentParse {
            message: "ledger document must be a JSON object".to_string(),
        });
    };

    let version = match document.get("schemaVersion") {
        None | Some(Value::Null) => LEGACY_SCHEMA_VERSION,
        Some(v) => v.as_u64().ok_or_else(|| LedgerError::DocumentParse {
            message: format!("schemaVersion must be a non-negative integer, got {}", v),
        })?,
    };

    if version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::UnsupportedSchemaVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    if version < 2 {
        info!(
            from = version,
            to = CURRENT_SCHEMA_VERSION,
            "migrating ledger document"
        );
        upgrade_v1(&mut document, config)?;
    }

    let data: AppData =
        serde_json::from_value(Value::Object(document)).map_err(|e| LedgerError::DocumentParse {
            message: e.to_string(),
        })?;
    data.validate()?;
    Ok(data)
}

/// Brings a version 1 document up to version 2 in place.
fn upgrade_v1(document: &mut Map<String, Value>, config: &AppConfig) -> LedgerResult<()> {
    for field in LIST_FIELDS {
        if !document.get(field).is_some_and(Value::is_array) {
            debug!(field, "filling missing list");
            document.insert(field.to_string(), Value::Array(Vec::new()));
        }
    }

    let has_tags = document
        .get("tags")
        .and_then(Value::as_array)
        .is_some_and(|tags| !tags.is_empty());
    if !has_tags {
        debug!("restoring default tags");
        document.insert("tags".to_string(), to_value(config.default_tags())?);
    }

    fill_user_config(document, config)?;

    for list in ["shifts", "shiftProfiles"] {
        if let Some(Value::Array(items)) = document.get_mut(list) {
            items
                .iter_mut()
                .filter_map(Value::as_object_mut)
                .for_each(rename_break_field);
        }
    }

    document.insert("schemaVersion".to_string(), Value::from(CURRENT_SCHEMA_VERSION));
    Ok(())
}

/// Fills missing user config fields from the defaults and replaces a
/// missing or zero night multiplier.
fn fill_user_config(document: &mut Map<String, Value>, config: &AppConfig) -> LedgerResult<()> {
    let Value::Object(defaults) = to_value(config.user_defaults())? else {
        return Ok(());
    };

    let user_config = document
        .entry("userConfig")
        .or_insert_with(|| Value::Object(Map::new()));
    if !user_config.is_object() {
        *user_config = Value::Object(Map::new());
    }

    if let Value::Object(fields) = user_config {
        for (key, default) in defaults {
            let missing = fields.get(&key).is_none_or(Value::is_null);
            let zero_multiplier =
                key == "nightWageMultiplier" && fields.get(&key).is_some_and(is_zero);

            if missing || zero_multiplier {
                debug!(field = %key, "filling user config default");
                fields.insert(key, default);
            }
        }
    }

    Ok(())
}

fn rename_break_field(item: &mut Map<String, Value>) {
    if let Some(minutes) = item.remove("breakTime") {
        item.entry("breakTimeMinutes").or_insert(minutes);
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => Decimal::from_str(s).is_ok_and(|d| d.is_zero()),
        _ => false,
    }
}

fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> LedgerResult<Value> {
    serde_json::to_value(value).map_err(|e| LedgerError::DocumentParse {
        message: e.to_string(),
    })
}
