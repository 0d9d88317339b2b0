//! Per-employee pay pipeline.
//!
//! Hourly employees are priced from their logged hours. Every other scheme is
//! a fixed stack of pro-rated components: base salary, then bonus (managers
//! and executives), then equity (executives). Each tier's total is the tier
//! below plus one component, rounded to cents.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CompensationPolicy;
use crate::error::PayrollResult;
use crate::models::{Compensation, Employee, PayBreakdown, PayComponent, PayLine, Period};

use super::{
    ProratedComponent, calculate_base_salary, calculate_bonus, calculate_equity,
    calculate_hourly_pay, checked, round_currency,
};

/// Computes one period's gross pay for an employee.
///
/// The employee is not modified. Hourly employees are paid for the hours
/// currently logged; emptying the accumulator afterwards is up to the caller
/// (see [`Employee::pay_breakdown`]).
///
/// # Errors
///
/// Returns [`PayrollError::AmountOverflow`](crate::error::PayrollError::AmountOverflow)
/// when any amount exceeds the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::config::CompensationPolicy;
/// use payroll_engine::models::{Employee, PayComponent, Period};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let manager = Employee::manager(
///     "Manny Manager",
///     "M001",
///     Decimal::from_str("120000").unwrap(),
///     Decimal::from_str("12").unwrap(),
/// );
/// let policy = CompensationPolicy::default();
/// let breakdown = calculate_pay(&manager, Period::Monthly, &policy).unwrap();
///
/// let bonus = breakdown.component(PayComponent::Bonus).unwrap();
/// assert_eq!(bonus.to_string(), "1200.00");
/// assert_eq!(breakdown.gross_pay.to_string(), "11200.00");
/// ```
pub fn calculate_pay(
    employee: &Employee,
    period: Period,
    policy: &CompensationPolicy,
) -> PayrollResult<PayBreakdown> {
    let (lines, gross_pay, audit_steps) = match employee.compensation() {
        Compensation::Hourly {
            hourly_rate,
            hours_worked,
        } => {
            let result = calculate_hourly_pay(*hourly_rate, *hours_worked, policy, 1)?;
            let lines = vec![
                PayLine {
                    component: PayComponent::Regular,
                    hours: Some(result.regular_hours),
                    basis: *hourly_rate,
                    amount: result.regular_pay,
                },
                PayLine {
                    component: PayComponent::Overtime,
                    hours: Some(result.overtime_hours),
                    basis: result.overtime_rate,
                    amount: result.overtime_pay,
                },
            ];
            (lines, result.gross_pay, vec![result.audit_step])
        }
        salaried => {
            let tiers = salaried_tiers(salaried, period)?;
            let mut gross_pay = round_currency(Decimal::ZERO);
            let mut lines = Vec::with_capacity(tiers.len());
            let mut audit_steps = Vec::with_capacity(tiers.len());
            for tier in tiers {
                let tier_total = checked(gross_pay.checked_add(tier.per_period), "tier_total")?;
                gross_pay = round_currency(tier_total);
                lines.push(PayLine {
                    component: tier.component,
                    hours: None,
                    basis: tier.annual_amount,
                    amount: tier.per_period,
                });
                audit_steps.push(tier.audit_step);
            }
            (lines, gross_pay, audit_steps)
        }
    };

    debug!(
        emp_id = %employee.emp_id(),
        kind = %employee.kind(),
        period = %period,
        gross_pay = %gross_pay,
        "Pay computed"
    );

    Ok(PayBreakdown {
        emp_id: employee.emp_id().to_string(),
        kind: employee.kind(),
        period,
        lines,
        gross_pay,
        audit_steps,
    })
}

/// Builds the pro-rated components for a salaried scheme, base tier first.
fn salaried_tiers(
    compensation: &Compensation,
    period: Period,
) -> PayrollResult<Vec<ProratedComponent>> {
    let Some(annual_salary) = compensation.annual_salary() else {
        return Ok(Vec::new());
    };

    let mut tiers = vec![calculate_base_salary(annual_salary, period, 1)];
    if let Some(bonus_percent) = compensation.bonus_percent() {
        let step = tiers.len() as u32 + 1;
        tiers.push(calculate_bonus(annual_salary, bonus_percent, period, step)?);
    }
    if let Some(equity) = compensation.equity_cash_per_year() {
        let step = tiers.len() as u32 + 1;
        tiers.push(calculate_equity(equity, period, step));
    }
    Ok(tiers)
}
