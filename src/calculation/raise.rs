//! Raise application.

use rust_decimal::Decimal;

use crate::error::PayrollResult;

use super::{checked, round_currency};

/// Scales `amount` by `1 + percent / 100` and rounds to cents.
///
/// Negative percentages reduce the amount; no bound is enforced.
///
/// # Errors
///
/// Returns [`PayrollError::AmountOverflow`](crate::error::PayrollError::AmountOverflow)
/// when the raised amount exceeds the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_raise;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("90000").unwrap();
/// let raised = apply_raise(salary, Decimal::from_str("5.0").unwrap()).unwrap();
/// assert_eq!(raised.to_string(), "94500.00");
/// ```
pub fn apply_raise(amount: Decimal, percent: Decimal) -> PayrollResult<Decimal> {
    let factor = checked(
        Decimal::ONE.checked_add(percent / Decimal::ONE_HUNDRED),
        "raise_factor",
    )?;
    let raised = checked(amount.checked_mul(factor), "raised_amount")?;
    Ok(round_currency(raised))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_percent_is_identity() {
        let raised = apply_raise(dec("1234.56"), Decimal::ZERO).unwrap();
        assert_eq!(raised, dec("1234.56"));
    }

    #[test]
    fn test_negative_percent_cuts_pay() {
        let raised = apply_raise(dec("50000"), dec("-20")).unwrap();
        assert_eq!(raised, dec("40000.00"));
    }

    #[test]
    fn test_result_is_rounded_to_cents() {
        // 33.33 * 1.075 = 35.82975
        assert_eq!(apply_raise(dec("33.33"), dec("7.5")).unwrap(), dec("35.83"));
    }

    #[test]
    fn test_minus_one_hundred_percent_zeroes_amount() {
        let raised = apply_raise(dec("70000"), dec("-100")).unwrap();
        assert_eq!(raised, Decimal::ZERO);
        assert_eq!(raised.to_string(), "0.00");
    }

    #[test]
    fn test_overflowing_raise_is_an_error() {
        let err = apply_raise(Decimal::MAX, dec("50")).unwrap_err();
        assert!(matches!(
            err,
            PayrollError::AmountOverflow { ref stage } if stage == "raised_amount"
        ));
    }
}
