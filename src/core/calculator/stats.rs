//! Aggregate statistics over a list of entries.

use crate::models::entry::EarningEntry;
use crate::models::settings::UserSettings;
use crate::models::statistics::Statistics;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Fixed month length used by the projection.
pub const PROJECTION_DAYS: Decimal = dec!(30);

const GOAL_WEIGHT: Decimal = dec!(0.7);
const EFFICIENCY_WEIGHT: Decimal = dec!(0.3);

pub fn get_statistics(entries: &[EarningEntry], settings: &UserSettings) -> Statistics {
    if entries.is_empty() {
        return Statistics::default();
    }

    let total_net = saturating_sum(entries.iter().map(EarningEntry::net));
    // Every entry counts once, even when several share a date.
    let avg_daily_net = total_net / Decimal::from(entries.len());
    let monthly_projection = avg_daily_net.saturating_mul(PROJECTION_DAYS);

    let total_gross = saturating_sum(entries.iter().map(EarningEntry::gross));
    let total_expenses = saturating_sum(entries.iter().map(EarningEntry::expenses));
    let burn_rate = burn_rate(total_gross, total_expenses);

    let savings_target = percent_of(total_net, settings.savings_target_percent);

    let goal_achievement = goal_ratio_percent(avg_daily_net, settings.daily_goal)
        .min(Decimal::ONE_HUNDRED);
    let efficiency = (Decimal::ONE_HUNDRED - burn_rate).max(Decimal::ZERO);
    let health_score = round_half_up(goal_achievement * GOAL_WEIGHT + efficiency * EFFICIENCY_WEIGHT);

    Statistics {
        total_net,
        avg_daily_net,
        monthly_projection,
        burn_rate,
        savings_target,
        health_score,
    }
}

/// Sum that sticks at `Decimal::MIN`/`MAX` instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `value * percent / 100`, saturating.
pub fn percent_of(value: Decimal, percent: Decimal) -> Decimal {
    match value.checked_mul(percent) {
        Some(v) => v / Decimal::ONE_HUNDRED,
        None => value.saturating_mul(percent / Decimal::ONE_HUNDRED),
    }
}

/// `numerator / denominator * 100`, saturating. Callers rule out a zero
/// denominator.
fn ratio_percent(numerator: Decimal, denominator: Decimal) -> Decimal {
    match numerator.checked_div(denominator) {
        Some(q) => q.saturating_mul(Decimal::ONE_HUNDRED),
        None if numerator.is_sign_negative() != denominator.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Expenses as a percentage of gross; 0 when there is no gross.
pub fn burn_rate(total_gross: Decimal, total_expenses: Decimal) -> Decimal {
    if total_gross > Decimal::ZERO {
        ratio_percent(total_expenses, total_gross)
    } else {
        Decimal::ZERO
    }
}

/// `avg / goal * 100`, unclamped. A zero goal yields 0.
pub fn goal_ratio_percent(avg_daily_net: Decimal, daily_goal: Decimal) -> Decimal {
    if daily_goal.is_zero() {
        return Decimal::ZERO;
    }
    ratio_percent(avg_daily_net, daily_goal)
}

/// Halves round toward positive infinity (2.5 → 3, -2.5 → -2).
/// Values outside the `i64` range clamp to its bounds.
pub fn round_half_up(value: Decimal) -> i64 {
    let rounded = value.saturating_add(dec!(0.5)).floor();
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
