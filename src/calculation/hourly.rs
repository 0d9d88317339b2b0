//! Hourly pay calculation.
//!
//! Splits logged hours into regular and overtime portions at the overtime
//! threshold and prices each portion, rounding only the final gross figure.

use rust_decimal::Decimal;

use crate::config::CompensationPolicy;
use crate::error::PayrollResult;
use crate::models::AuditStep;

use super::{checked, round_currency};

/// Default weekly threshold beyond which hours are paid as overtime.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Default multiplier applied to the hourly rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The result of pricing an hourly employee's logged hours.
#[derive(Debug, Clone)]
pub struct HourlyPayResult {
    /// Hours paid at the base rate (capped at the threshold).
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate (zero when under the threshold).
    pub overtime_hours: Decimal,
    /// Exact pay for the regular hours.
    pub regular_pay: Decimal,
    /// Exact pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// The rate applied to overtime hours.
    pub overtime_rate: Decimal,
    /// Total pay rounded to cents.
    pub gross_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices logged hours at the hourly rate, with overtime beyond the threshold.
///
/// Hours at or below the threshold (including negative totals) are all
/// regular. Only the gross figure is rounded.
///
/// # Errors
///
/// Returns [`PayrollError::AmountOverflow`](crate::error::PayrollError::AmountOverflow)
/// when a product or sum exceeds the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use payroll_engine::config::CompensationPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_hourly_pay(
///     Decimal::from_str("25.0").unwrap(),
///     Decimal::from_str("42").unwrap(),
///     &CompensationPolicy::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.regular_hours, Decimal::from_str("40").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("2").unwrap());
/// assert_eq!(result.gross_pay, Decimal::from_str("1075.00").unwrap());
/// ```
pub fn calculate_hourly_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    policy: &CompensationPolicy,
    step_number: u32,
) -> PayrollResult<HourlyPayResult> {
    let threshold = policy.overtime_threshold_hours;

    let regular_hours = hours_worked.min(threshold);
    let excess_hours = checked(hours_worked.checked_sub(threshold), "overtime_hours")?;
    let overtime_hours = excess_hours.max(Decimal::ZERO);

    let overtime_rate = checked(
        hourly_rate.checked_mul(policy.overtime_multiplier),
        "overtime_rate",
    )?;
    let regular_pay = checked(regular_hours.checked_mul(hourly_rate), "regular_pay")?;
    let overtime_pay = checked(overtime_hours.checked_mul(overtime_rate), "overtime_pay")?;
    let total_pay = checked(regular_pay.checked_add(overtime_pay), "hourly_gross_pay")?;
    let gross_pay = round_currency(total_pay);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} regular hours x ${} + {} overtime hours x ${} = ${}",
            regular_hours.normalize(),
            hourly_rate.normalize(),
            overtime_hours.normalize(),
            overtime_rate.normalize(),
            gross_pay
        )
    } else {
        format!(
            "{} hours x ${} = ${} (no overtime, threshold {} hours)",
            regular_hours.normalize(),
            hourly_rate.normalize(),
            gross_pay,
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_pay".to_string(),
        rule_name: "Hourly Pay With Overtime".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_worked": hours_worked.normalize().to_string(),
            "threshold": threshold.normalize().to_string(),
            "overtime_multiplier": policy.overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "gross_pay": gross_pay.to_string()
        }),
        reasoning,
    };

    Ok(HourlyPayResult {
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        overtime_rate,
        gross_pay,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> CompensationPolicy {
        CompensationPolicy::default()
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_OVERTIME_THRESHOLD_HOURS, dec("40"));
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.5"));
    }

    #[test]
    fn test_under_threshold_has_no_overtime() {
        let result = calculate_hourly_pay(dec("22.50"), dec("38"), &policy(), 1).unwrap();

        assert_eq!(result.regular_hours, dec("38"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.overtime_pay, Decimal::ZERO);
        assert_eq!(result.gross_pay, dec("855.00"));
        assert!(result.audit_step.reasoning.contains("no overtime"));
    }

    #[test]
    fn test_exactly_at_threshold_has_no_overtime() {
        let result = calculate_hourly_pay(dec("25"), dec("40"), &policy(), 1).unwrap();

        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.gross_pay, dec("1000.00"));
    }

    #[test]
    fn test_overtime_paid_at_time_and_a_half() {
        let result = calculate_hourly_pay(dec("25.0"), dec("42"), &policy(), 1).unwrap();

        assert_eq!(result.regular_pay, dec("1000"));
        assert_eq!(result.overtime_rate, dec("37.5"));
        assert_eq!(result.overtime_pay, dec("75"));
        assert_eq!(result.gross_pay, dec("1075.00"));
        assert_eq!(result.audit_step.rule_id, "hourly_pay");
        assert_eq!(
            result.audit_step.output["overtime_hours"].as_str().unwrap(),
            "2"
        );
    }

    #[test]
    fn test_only_gross_is_rounded() {
        // 40 x 10.333 = 413.32, 1 x 15.4995 = 15.4995, sum 428.8195
        let result = calculate_hourly_pay(dec("10.333"), dec("41"), &policy(), 1).unwrap();

        assert_eq!(result.regular_pay, dec("413.320"));
        assert_eq!(result.overtime_pay, dec("15.4995"));
        assert_eq!(result.gross_pay, dec("428.82"));
    }

    #[test]
    fn test_negative_hours_are_regular() {
        let result = calculate_hourly_pay(dec("20"), dec("-3"), &policy(), 1).unwrap();

        assert_eq!(result.regular_hours, dec("-3"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.gross_pay, dec("-60.00"));
    }

    #[test]
    fn test_custom_policy_threshold_and_multiplier() {
        let custom = CompensationPolicy {
            overtime_threshold_hours: dec("38"),
            overtime_multiplier: dec("2"),
        };
        let result = calculate_hourly_pay(dec("30"), dec("40"), &custom, 3).unwrap();

        assert_eq!(result.overtime_hours, dec("2"));
        assert_eq!(result.gross_pay, dec("1260.00"));
        assert_eq!(result.audit_step.step_number, 3);
    }

    #[test]
    fn test_gross_pay_carries_two_decimal_places() {
        let result = calculate_hourly_pay(dec("25"), dec("40"), &policy(), 1).unwrap();

        assert_eq!(result.gross_pay.to_string(), "1000.00");
        assert_eq!(
            result.audit_step.output["gross_pay"].as_str().unwrap(),
            "1000.00"
        );
    }

    #[test]
    fn test_overflowing_rate_is_an_error() {
        let err = calculate_hourly_pay(Decimal::MAX, dec("42"), &policy(), 1).unwrap_err();
        assert!(matches!(err, PayrollError::AmountOverflow { .. }));
    }

    #[test]
    fn test_overflowing_hours_is_an_error() {
        let err = calculate_hourly_pay(dec("2"), Decimal::MAX, &policy(), 1).unwrap_err();
        assert!(matches!(
            err,
            PayrollError::AmountOverflow { ref stage } if stage == "overtime_pay"
        ));
    }
}
