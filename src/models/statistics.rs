use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate figures over a user's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_net: Decimal,
    pub avg_daily_net: Decimal,
    pub monthly_projection: Decimal,
    /// Percentage of gross consumed by expenses.
    pub burn_rate: Decimal,
    pub savings_target: Decimal,
    /// Nominally 0..=100; negative when average income is negative.
    pub health_score: i64,
}
