//! Currency rounding and overflow-checked arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PayrollError, PayrollResult};

/// Number of decimal places every monetary stage is rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to whole cents, with halves rounded away from zero.
///
/// The result always carries exactly two decimal places, so whole amounts
/// display as `7875.00` rather than `7875`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_currency(Decimal::from_str("16666.6666").unwrap());
/// assert_eq!(rounded, Decimal::from_str("16666.67").unwrap());
///
/// let whole = round_currency(Decimal::from_str("7875").unwrap());
/// assert_eq!(whole.to_string(), "7875.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Turns the result of a `checked_*` operation into an overflow error for `stage`.
pub(crate) fn checked(value: Option<Decimal>, stage: &str) -> PayrollResult<Decimal> {
    value.ok_or_else(|| PayrollError::AmountOverflow {
        stage: stage.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_half_cent() {
        assert_eq!(round_currency(dec("4166.664")), dec("4166.66"));
    }

    #[test]
    fn test_rounds_half_cent_away_from_zero() {
        assert_eq!(round_currency(dec("0.125")), dec("0.13"));
        assert_eq!(round_currency(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_whole_amount_unchanged() {
        assert_eq!(round_currency(dec("7875")), dec("7875.00"));
    }

    #[test]
    fn test_result_always_has_two_decimal_places() {
        assert_eq!(round_currency(dec("7875")).to_string(), "7875.00");
        assert_eq!(round_currency(dec("94500.0")).to_string(), "94500.00");
        assert_eq!(round_currency(dec("12.5")).to_string(), "12.50");
        assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
        assert_eq!(
            round_currency(dec("1.23456")).scale(),
            CURRENCY_DECIMAL_PLACES
        );
    }

    #[test]
    fn test_checked_passes_value_through() {
        let value = checked(dec("2").checked_mul(dec("3")), "product").unwrap();
        assert_eq!(value, dec("6"));
    }

    #[test]
    fn test_checked_reports_overflowing_stage() {
        let err = checked(Decimal::MAX.checked_mul(dec("2")), "regular_pay").unwrap_err();
        assert!(matches!(
            err,
            PayrollError::AmountOverflow { ref stage } if stage == "regular_pay"
        ));
    }
}
