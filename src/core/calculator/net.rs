use rust_decimal::Decimal;

/// Net income for one day: `gross - expenses - gross * fee_percent / 100`.
///
/// No range checks happen here; negative results are returned as-is.
/// Results beyond the `Decimal` range saturate at `Decimal::MIN`/`MAX`.
pub fn calculate_net(gross: Decimal, expenses: Decimal, fee_percent: Decimal) -> Decimal {
    let fee = match gross.checked_mul(fee_percent) {
        Some(v) => v / Decimal::ONE_HUNDRED,
        None => gross.saturating_mul(fee_percent / Decimal::ONE_HUNDRED),
    };
    gross.saturating_sub(expenses).saturating_sub(fee)
}
