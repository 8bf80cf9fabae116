use crate::models::statistics::Statistics;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub statistics: Statistics,
    pub latest_net: Decimal,
    pub goal_progress_percent: i64,
    pub goal_met: bool,
    pub estimated_tax: Decimal,
    pub burn_rate_high: bool,
    pub trend: Vec<TrendPoint>,
}
