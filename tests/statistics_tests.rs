use chrono::NaiveDate;
use dailypay::models::entry::EarningEntry;
use dailypay::models::settings::UserSettings;
use dailypay::{calculate_net, get_statistics};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amounts in cents, as typed into the form.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Percent with one decimal, 0.0..=100.0
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn entry(gross: Decimal, expenses: Decimal, fee: Decimal) -> EarningEntry {
    let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    EarningEntry::new(date, gross, expenses, fee, Decimal::ZERO)
}

proptest! {
    #[test]
    fn net_matches_formula(gross in money(), expenses in money(), fee in percent()) {
        let expected = gross - expenses - gross * fee / dec!(100);
        prop_assert_eq!(calculate_net(gross, expenses, fee), expected);
    }

    #[test]
    fn net_never_exceeds_gross(gross in money(), expenses in money(), fee in percent()) {
        prop_assert!(calculate_net(gross, expenses, fee) <= gross);
    }

    #[test]
    fn savings_target_tracks_total_net(
        amounts in prop::collection::vec((money(), money(), percent()), 1..20),
        savings in percent(),
    ) {
        let entries: Vec<EarningEntry> = amounts
            .iter()
            .map(|(g, e, f)| entry(*g, *e, *f))
            .collect();
        let settings = UserSettings {
            savings_target_percent: savings,
            ..UserSettings::default()
        };

        let stats = get_statistics(&entries, &settings);
        prop_assert_eq!(stats.savings_target, stats.total_net * savings / dec!(100));
        prop_assert_eq!(stats, get_statistics(&entries, &settings));
    }

    #[test]
    fn health_score_stays_in_range_for_non_negative_income(
        amounts in prop::collection::vec((money(), percent()), 1..20),
    ) {
        // no expenses: net is never negative
        let entries: Vec<EarningEntry> = amounts
            .iter()
            .map(|(g, f)| entry(*g, Decimal::ZERO, *f))
            .collect();
        let stats = get_statistics(&entries, &UserSettings::default());
        prop_assert!((0..=100).contains(&stats.health_score));
    }
}

#[test]
fn calculator_reference_value() {
    assert_eq!(calculate_net(dec!(100), dec!(20), dec!(10)), dec!(70.0));
}

#[test]
fn empty_list_is_all_zero() {
    let settings = UserSettings {
        daily_goal: dec!(1),
        ..UserSettings::default()
    };
    let stats = get_statistics(&[], &settings);
    assert_eq!(stats.total_net, Decimal::ZERO);
    assert_eq!(stats.avg_daily_net, Decimal::ZERO);
    assert_eq!(stats.monthly_projection, Decimal::ZERO);
    assert_eq!(stats.burn_rate, Decimal::ZERO);
    assert_eq!(stats.savings_target, Decimal::ZERO);
    assert_eq!(stats.health_score, 0);
}

#[test]
fn two_entry_reference_case() {
    let entries = vec![
        entry(dec!(100), dec!(0), dec!(0)),
        entry(dec!(200), dec!(0), dec!(0)),
    ];
    let stats = get_statistics(&entries, &UserSettings::default());
    assert_eq!(stats.total_net, dec!(300));
    assert_eq!(stats.avg_daily_net, dec!(150));
    assert_eq!(stats.monthly_projection, dec!(4500));
    assert_eq!(stats.burn_rate, dec!(0));
}

#[test]
fn oversized_stored_entries_do_not_panic() {
    // records written by other clients skip the CLI amount cap
    let huge = entry(dec!(50000000000000000000000000000), dec!(0), dec!(50));
    let stats = get_statistics(&[huge.clone(), huge], &UserSettings::default());
    assert!(stats.total_net > Decimal::ZERO);
    assert_eq!(stats.monthly_projection, Decimal::MAX);
}

#[test]
fn burn_rate_reference_case() {
    let entries = vec![
        entry(dec!(150), dec!(50), dec!(0)),
        entry(dec!(50), dec!(0), dec!(0)),
    ];
    let stats = get_statistics(&entries, &UserSettings::default());
    assert_eq!(stats.burn_rate, dec!(25.0));
}
