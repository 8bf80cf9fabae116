use crate::core::calculator::net::calculate_net;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's earnings record.
///
/// Entries are immutable: `net` is derived once, when the entry is built,
/// and is stored alongside the inputs. Editing an entry means deleting it
/// and appending a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningEntry {
    id: String,
    date: NaiveDate,
    gross: Decimal,
    expenses: Decimal,
    platform_fee_percent: Decimal,
    hours_worked: Decimal,
    net: Decimal,
}

impl EarningEntry {
    /// Build a new entry with a fresh id and `net` computed from the inputs.
    pub fn new(
        date: NaiveDate,
        gross: Decimal,
        expenses: Decimal,
        platform_fee_percent: Decimal,
        hours_worked: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            gross,
            expenses,
            platform_fee_percent,
            hours_worked,
            net: calculate_net(gross, expenses, platform_fee_percent),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn gross(&self) -> Decimal {
        self.gross
    }

    pub fn expenses(&self) -> Decimal {
        self.expenses
    }

    pub fn platform_fee_percent(&self) -> Decimal {
        self.platform_fee_percent
    }

    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    pub fn net(&self) -> Decimal {
        self.net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_entry_derives_net() {
        let e = EarningEntry::new(day("2025-03-01"), dec!(100), dec!(20), dec!(10), dec!(6));
        assert_eq!(e.net(), dec!(70));
        assert_eq!(e.hours_worked(), dec!(6));
    }

    #[test]
    fn ids_are_unique() {
        let a = EarningEntry::new(day("2025-03-01"), dec!(1), dec!(0), dec!(0), dec!(0));
        let b = EarningEntry::new(day("2025-03-01"), dec!(1), dec!(0), dec!(0), dec!(0));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let e = EarningEntry::new(day("2025-03-01"), dec!(100), dec!(0), dec!(5), dec!(0));
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"platformFeePercent\""));
        assert!(json.contains("\"hoursWorked\""));
        assert!(json.contains("\"date\":\"2025-03-01\""));
    }

    #[test]
    fn accepts_numeric_json_from_other_clients() {
        let raw = r#"{"id":"abc","date":"2025-01-02","gross":120.5,"expenses":10,
            "platformFeePercent":0,"hoursWorked":4,"net":110.5}"#;
        let e: EarningEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.id(), "abc");
        assert_eq!(e.gross(), dec!(120.5));
        assert_eq!(e.net(), dec!(110.5));
    }
}
