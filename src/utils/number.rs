//! Parse-and-validate helpers turning CLI strings into decimals.

use crate::errors::{AppError, AppResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Largest amount accepted for a single field. Sums of many such values
/// stay far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

pub fn parse_decimal(field: &'static str, raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| AppError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Money or hours: must be in `0..=MAX_AMOUNT`.
pub fn parse_amount(field: &'static str, raw: &str) -> AppResult<Decimal> {
    let value = parse_decimal(field, raw)?;
    if value < Decimal::ZERO {
        return Err(AppError::NegativeAmount {
            field,
            value: raw.to_string(),
        });
    }
    check_max(field, value)?;
    Ok(value)
}

pub fn check_max(field: &'static str, value: Decimal) -> AppResult<()> {
    if value > MAX_AMOUNT {
        return Err(AppError::AmountTooLarge {
            field,
            value: value.to_string(),
            max: MAX_AMOUNT.to_string(),
        });
    }
    Ok(())
}

/// Percentage in 0..=100.
pub fn parse_percent(field: &'static str, raw: &str) -> AppResult<Decimal> {
    let value = parse_decimal(field, raw)?;
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AppError::PercentOutOfRange {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Optional amount, defaulting to zero when absent.
pub fn parse_optional_amount(field: &'static str, raw: Option<&String>) -> AppResult<Decimal> {
    raw.map_or(Ok(Decimal::ZERO), |s| parse_amount(field, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_amount("gross", " 120.50 ").unwrap(), dec!(120.50));
        assert_eq!(parse_percent("fee", "0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_percent("fee", "100").unwrap(), dec!(100));
    }

    #[test]
    fn rejects_garbage_instead_of_defaulting() {
        assert!(matches!(
            parse_amount("gross", "12abc"),
            Err(AppError::InvalidNumber { field: "gross", .. })
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            parse_amount("expenses", "-3"),
            Err(AppError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn rejects_amounts_above_the_cap() {
        assert!(matches!(
            parse_amount("gross", "79228162514264337593543950335"),
            Err(AppError::AmountTooLarge { field: "gross", .. })
        ));
        assert_eq!(parse_amount("gross", "1000000000").unwrap(), MAX_AMOUNT);
        assert!(parse_amount("gross", "1000000000.01").is_err());
    }

    #[test]
    fn rejects_out_of_range_percent() {
        assert!(parse_percent("fee", "100.01").is_err());
        assert!(parse_percent("fee", "-1").is_err());
    }

    #[test]
    fn optional_defaults_to_zero() {
        assert_eq!(parse_optional_amount("hours", None).unwrap(), Decimal::ZERO);
    }
}
