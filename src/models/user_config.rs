//! User settings persisted alongside the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_NIGHT_MULTIPLIER;
use crate::error::{LedgerError, LedgerResult};

/// Light or dark appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

/// User-owned settings that feed the budget and salary calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    /// Fallback wage for new shifts without a job.
    pub hourly_wage: Decimal,
    /// Monthly spending budget.
    pub monthly_budget: Decimal,
    /// Savings target.
    pub savings_goal: Decimal,
    /// Day of month salary is paid (1-31, clamped to the month's length).
    pub pay_day: u32,
    /// Appearance preference.
    pub theme_mode: ThemeMode,
    /// Accent colour name.
    pub theme_color: String,
    /// Multiplier applied to hours inside the night window.
    pub night_wage_multiplier: Decimal,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            hourly_wage: Decimal::new(1000, 0),
            monthly_budget: Decimal::new(50_000, 0),
            savings_goal: Decimal::new(100_000, 0),
            pay_day: 25,
            theme_mode: ThemeMode::Light,
            theme_color: "blue".to_string(),
            night_wage_multiplier: DEFAULT_NIGHT_MULTIPLIER,
        }
    }
}

impl UserConfig {
    /// Checks every field holds a usable value.
    pub fn validate(&self) -> LedgerResult<()> {
        let invalid = |field: &str, message: String| -> LedgerResult<()> {
            Err(LedgerError::InvalidConfig {
                field: field.to_string(),
                message,
            })
        };

        if !(1..=31).contains(&self.pay_day) {
            return invalid("pay_day", format!("must be between 1 and 31, got {}", self.pay_day));
        }
        if self.night_wage_multiplier <= Decimal::ZERO {
            return invalid(
                "night_wage_multiplier",
                format!("must be positive, got {}", self.night_wage_multiplier),
            );
        }
        for (field, value) in [
            ("hourly_wage", self.hourly_wage),
            ("monthly_budget", self.monthly_budget),
            ("savings_goal", self.savings_goal),
        ] {
            if value < Decimal::ZERO {
                return invalid(field, format!("cannot be negative, got {}", value));
            }
        }
        Ok(())
    }
}

/// A partial update to [`UserConfig`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfigPatch {
    /// New fallback wage.
    pub hourly_wage: Option<Decimal>,
    /// New monthly budget.
    pub monthly_budget: Option<Decimal>,
    /// New savings goal.
    pub savings_goal: Option<Decimal>,
    /// New pay day.
    pub pay_day: Option<u32>,
    /// New appearance preference.
    pub theme_mode: Option<ThemeMode>,
    /// New accent colour.
    pub theme_color: Option<String>,
    /// New night multiplier.
    pub night_wage_multiplier: Option<Decimal>,
}

impl UserConfigPatch {
    /// Returns a copy of `config` with this patch applied.
    pub fn apply_to(&self, config: &UserConfig) -> UserConfig {
        UserConfig {
            hourly_wage: self.hourly_wage.unwrap_or(config.hourly_wage),
            monthly_budget: self.monthly_budget.unwrap_or(config.monthly_budget),
            savings_goal: self.savings_goal.unwrap_or(config.savings_goal),
            pay_day: self.pay_day.unwrap_or(config.pay_day),
            theme_mode: self.theme_mode.unwrap_or(config.theme_mode),
            theme_color: self
                .theme_color
                .clone()
                .unwrap_or_else(|| config.theme_color.clone()),
            night_wage_multiplier: self
                .night_wage_multiplier
                .unwrap_or(config.night_wage_multiplier),
        }
    }
}
