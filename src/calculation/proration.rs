//! Pro-ration of annual amounts into per-period pay components.
//!
//! Salary, bonus and equity are all yearly figures. Each is divided by the
//! number of periods in a year and rounded to cents on its own, before any
//! component is added to another.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{AuditStep, PayComponent, Period};

use super::{checked, round_currency};

/// A yearly amount converted to a single period's share.
#[derive(Debug, Clone)]
pub struct ProratedComponent {
    /// Which pay component this is.
    pub component: PayComponent,
    /// The yearly amount before pro-ration.
    pub annual_amount: Decimal,
    /// The per-period share, rounded to cents.
    pub per_period: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Divides an annual amount by the periods in a year and rounds to cents.
///
/// The divisor is at least one, so this cannot overflow.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::prorate;
/// use payroll_engine::models::Period;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let monthly = prorate(Decimal::from_str("200000").unwrap(), Period::Monthly);
/// assert_eq!(monthly, Decimal::from_str("16666.67").unwrap());
/// ```
pub fn prorate(annual_amount: Decimal, period: Period) -> Decimal {
    round_currency(annual_amount / period.divisor())
}

/// Pro-rates the annual salary.
pub fn calculate_base_salary(
    annual_salary: Decimal,
    period: Period,
    step_number: u32,
) -> ProratedComponent {
    prorated(
        PayComponent::BaseSalary,
        "base_salary",
        "Base Salary Pro-ration",
        annual_salary,
        period,
        step_number,
    )
}

/// Pro-rates the annual bonus, which is `bonus_percent` of the annual salary.
///
/// The annual bonus itself is left unrounded; only the per-period share is
/// rounded.
///
/// # Errors
///
/// Returns [`PayrollError::AmountOverflow`](crate::error::PayrollError::AmountOverflow)
/// when the annual bonus exceeds the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_bonus;
/// use payroll_engine::models::Period;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bonus = calculate_bonus(
///     Decimal::from_str("120000").unwrap(),
///     Decimal::from_str("12").unwrap(),
///     Period::Monthly,
///     2,
/// )
/// .unwrap();
/// assert_eq!(bonus.annual_amount, Decimal::from_str("14400").unwrap());
/// assert_eq!(bonus.per_period, Decimal::from_str("1200.00").unwrap());
/// ```
pub fn calculate_bonus(
    annual_salary: Decimal,
    bonus_percent: Decimal,
    period: Period,
    step_number: u32,
) -> PayrollResult<ProratedComponent> {
    let bonus_rate = bonus_percent / Decimal::ONE_HUNDRED;
    let annual_bonus = checked(annual_salary.checked_mul(bonus_rate), "annual_bonus")?;
    let mut result = prorated(
        PayComponent::Bonus,
        "bonus",
        "Bonus Pro-ration",
        annual_bonus,
        period,
        step_number,
    );
    result.audit_step.input["annual_salary"] =
        serde_json::json!(annual_salary.normalize().to_string());
    result.audit_step.input["bonus_percent"] =
        serde_json::json!(bonus_percent.normalize().to_string());
    result.audit_step.reasoning = format!(
        "{}% of ${} = ${}; {}",
        bonus_percent.normalize(),
        annual_salary.normalize(),
        annual_bonus.normalize(),
        result.audit_step.reasoning
    );
    Ok(result)
}

/// Pro-rates the yearly cash equity.
pub fn calculate_equity(
    equity_cash_per_year: Decimal,
    period: Period,
    step_number: u32,
) -> ProratedComponent {
    prorated(
        PayComponent::Equity,
        "equity",
        "Equity Pro-ration",
        equity_cash_per_year,
        period,
        step_number,
    )
}

fn prorated(
    component: PayComponent,
    rule_id: &str,
    rule_name: &str,
    annual_amount: Decimal,
    period: Period,
    step_number: u32,
) -> ProratedComponent {
    let per_period = prorate(annual_amount, period);

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "annual_amount": annual_amount.normalize().to_string(),
            "period": period.as_str(),
            "periods_per_year": period.periods_per_year()
        }),
        output: serde_json::json!({
            "per_period": per_period.to_string()
        }),
        reasoning: format!(
            "${} / {} {} periods = ${}",
            annual_amount.normalize(),
            period.periods_per_year(),
            period,
            per_period
        ),
    };

    ProratedComponent {
        component,
        annual_amount,
        per_period,
        audit_step,
    }
}
