use crate::models::dashboard::TrendPoint;
use crate::models::entry::EarningEntry;

/// Number of points shown in the dashboard trend.
pub const TREND_LEN: usize = 7;

/// Last `TREND_LEN` entries by work date, oldest first.
pub fn build_trend(entries: &[EarningEntry]) -> Vec<TrendPoint> {
    let mut sorted: Vec<&EarningEntry> = entries.iter().collect();
    // stable sort: same-day entries keep insertion order
    sorted.sort_by_key(|e| e.date());

    let skip = sorted.len().saturating_sub(TREND_LEN);
    sorted
        .into_iter()
        .skip(skip)
        .map(|e| TrendPoint {
            date: e.date(),
            net: e.net(),
        })
        .collect()
}

/// History view: newest work date first.
pub fn sort_history(entries: &[EarningEntry]) -> Vec<&EarningEntry> {
    let mut sorted: Vec<&EarningEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn entry_on(day: u32, gross: i64) -> EarningEntry {
        let date = NaiveDate::from_ymd_opt(2025, 4, day).unwrap();
        EarningEntry::new(
            date,
            Decimal::from(gross),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    #[test]
    fn trend_keeps_last_seven_by_date() {
        // appended out of order
        let entries: Vec<EarningEntry> = [9, 1, 5, 3, 2, 8, 7, 4, 6]
            .iter()
            .map(|d| entry_on(*d, *d as i64 * 10))
            .collect();

        let trend = build_trend(&entries);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2025, 4, 3).unwrap());
        assert_eq!(trend[6].date, NaiveDate::from_ymd_opt(2025, 4, 9).unwrap());
        assert_eq!(trend[6].net, Decimal::from(90));
    }

    #[test]
    fn short_trend_returns_everything() {
        let entries = vec![entry_on(2, 10), entry_on(1, 20)];
        let trend = build_trend(&entries);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].net, Decimal::from(20));
    }

    #[test]
    fn history_is_newest_first() {
        let entries = vec![entry_on(1, 10), entry_on(15, 20), entry_on(7, 30)];
        let days: Vec<u32> = sort_history(&entries)
            .iter()
            .map(|e| chrono::Datelike::day(&e.date()))
            .collect();
        assert_eq!(days, vec![15, 7, 1]);
    }
}
