use crate::errors::{AppError, AppResult};
use crate::utils::number::check_max;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Per-user preferences. Only `savings_target_percent` and `daily_goal`
/// feed the statistics; `tax_percent` drives a display-only estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub currency: String,
    pub tax_percent: Decimal,
    pub savings_target_percent: Decimal,
    pub daily_goal: Decimal,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            tax_percent: dec!(15),
            savings_target_percent: dec!(20),
            daily_goal: dec!(150),
            theme: Theme::Light,
        }
    }
}

impl UserSettings {
    /// Reject values the statistics cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.currency.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                field: "currency",
                reason: "symbol must not be empty".into(),
            });
        }
        if self.daily_goal <= Decimal::ZERO {
            return Err(AppError::InvalidSetting {
                field: "dailyGoal",
                reason: format!("must be greater than 0 (got {})", self.daily_goal),
            });
        }
        check_max("dailyGoal", self.daily_goal)?;
        check_percent("taxPercent", self.tax_percent)?;
        check_percent("savingsTargetPercent", self.savings_target_percent)?;
        Ok(())
    }
}

fn check_percent(field: &'static str, value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AppError::PercentOutOfRange {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
