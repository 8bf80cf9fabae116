use crate::core::calculator::{stats, trend};
use crate::models::dashboard::Dashboard;
use crate::models::entry::EarningEntry;
use crate::models::settings::UserSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Burn rate above which the dashboard flags expenses as high.
pub const HIGH_BURN_RATE: Decimal = dec!(30);

pub struct Core;

impl Core {
    pub fn build_dashboard(entries: &[EarningEntry], settings: &UserSettings) -> Dashboard {
        let statistics = stats::get_statistics(entries, settings);

        // last appended, not latest work date
        let latest_net = entries.last().map(EarningEntry::net).unwrap_or_default();

        let goal_progress_percent = stats::round_half_up(stats::goal_ratio_percent(
            statistics.avg_daily_net,
            settings.daily_goal,
        ));

        Dashboard {
            statistics,
            latest_net,
            goal_progress_percent,
            goal_met: statistics.avg_daily_net >= settings.daily_goal,
            estimated_tax: stats::percent_of(statistics.total_net, settings.tax_percent),
            burn_rate_high: statistics.burn_rate > HIGH_BURN_RATE,
            trend: trend::build_trend(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(day: u32, gross: Decimal, expenses: Decimal) -> EarningEntry {
        let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        EarningEntry::new(date, gross, expenses, Decimal::ZERO, Decimal::ZERO)
    }

    #[test]
    fn empty_dashboard() {
        let d = Core::build_dashboard(&[], &UserSettings::default());
        assert_eq!(d.latest_net, Decimal::ZERO);
        assert_eq!(d.goal_progress_percent, 0);
        assert!(!d.goal_met);
        assert!(d.trend.is_empty());
    }

    #[test]
    fn latest_net_follows_append_order() {
        let entries = vec![entry(20, dec!(300), dec!(0)), entry(3, dec!(45), dec!(5))];
        let d = Core::build_dashboard(&entries, &UserSettings::default());
        assert_eq!(d.latest_net, dec!(40));
    }

    #[test]
    fn goal_and_tax_figures() {
        let entries = vec![entry(1, dec!(100), dec!(40)), entry(2, dec!(200), dec!(60))];
        let settings = UserSettings {
            daily_goal: dec!(200),
            tax_percent: dec!(10),
            ..UserSettings::default()
        };
        let d = Core::build_dashboard(&entries, &settings);

        // avg 100 of 200
        assert_eq!(d.goal_progress_percent, 50);
        assert!(!d.goal_met);
        assert_eq!(d.estimated_tax, dec!(20));
        // 100 / 300 ≈ 33.3 %
        assert!(d.burn_rate_high);
    }
}
