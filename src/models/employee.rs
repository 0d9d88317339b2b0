//! Employee model and compensation variants.
//!
//! This module defines the [`Employee`] record and the closed set of
//! [`Compensation`] schemes an employee can be paid under. Manager and
//! executive pay layer extra pro-rated components on top of a salaried base.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{apply_raise, calculate_pay, checked};
use crate::config::CompensationPolicy;
use crate::error::{PayrollError, PayrollResult};

use super::{PayBreakdown, Period};

/// Bonus percentage given to a manager when none is specified.
pub const DEFAULT_MANAGER_BONUS_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Bonus percentage given to an executive when none is specified.
pub const DEFAULT_EXECUTIVE_BONUS_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// The compensation scheme an employee is paid under, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid per hour worked, with overtime.
    Hourly,
    /// Paid a pro-rated annual salary.
    Salaried,
    /// Salaried, plus a pro-rated bonus.
    Manager,
    /// Manager pay, plus pro-rated cash equity.
    Executive,
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmployeeKind::Hourly => "Hourly",
            EmployeeKind::Salaried => "Salaried",
            EmployeeKind::Manager => "Manager",
            EmployeeKind::Executive => "Executive",
        };
        f.write_str(name)
    }
}

/// Compensation parameters for each pay scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    /// Hourly pay with an hours accumulator that empties on every pay computation.
    Hourly {
        /// Currency per hour.
        hourly_rate: Decimal,
        /// Hours accumulated since the last pay computation.
        hours_worked: Decimal,
    },
    /// Annual salary paid out evenly across the year's periods.
    Salaried {
        /// Currency per year.
        annual_salary: Decimal,
    },
    /// Annual salary plus a bonus expressed as a percentage of salary.
    Manager {
        /// Currency per year.
        annual_salary: Decimal,
        /// Bonus as a percentage of the annual salary.
        bonus_percent: Decimal,
    },
    /// Manager pay plus a yearly cash equity amount.
    Executive {
        /// Currency per year.
        annual_salary: Decimal,
        /// Bonus as a percentage of the annual salary.
        bonus_percent: Decimal,
        /// Cash equity paid per year.
        equity_cash_per_year: Decimal,
    },
}

impl Compensation {
    /// Returns the kind of scheme.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Compensation::Hourly { .. } => EmployeeKind::Hourly,
            Compensation::Salaried { .. } => EmployeeKind::Salaried,
            Compensation::Manager { .. } => EmployeeKind::Manager,
            Compensation::Executive { .. } => EmployeeKind::Executive,
        }
    }

    /// Returns the annual salary for salaried, manager and executive schemes.
    pub fn annual_salary(&self) -> Option<Decimal> {
        match self {
            Compensation::Hourly { .. } => None,
            Compensation::Salaried { annual_salary }
            | Compensation::Manager { annual_salary, .. }
            | Compensation::Executive { annual_salary, .. } => Some(*annual_salary),
        }
    }

    /// Returns the bonus percentage for manager and executive schemes.
    pub fn bonus_percent(&self) -> Option<Decimal> {
        match self {
            Compensation::Manager { bonus_percent, .. }
            | Compensation::Executive { bonus_percent, .. } => Some(*bonus_percent),
            _ => None,
        }
    }

    /// Returns the yearly cash equity for the executive scheme.
    pub fn equity_cash_per_year(&self) -> Option<Decimal> {
        match self {
            Compensation::Executive {
                equity_cash_per_year,
                ..
            } => Some(*equity_cash_per_year),
            _ => None,
        }
    }

    /// The amount a raise is applied to: the hourly rate or the annual salary.
    fn raise_base_mut(&mut self) -> &mut Decimal {
        match self {
            Compensation::Hourly { hourly_rate, .. } => hourly_rate,
            Compensation::Salaried { annual_salary }
            | Compensation::Manager { annual_salary, .. }
            | Compensation::Executive { annual_salary, .. } => annual_salary,
        }
    }
}

/// An employee paid under one compensation scheme.
///
/// The name and ID are fixed at construction. Compensation changes only
/// through raises and, for hourly staff, through logged hours being consumed
/// by pay computation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, Period};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::hourly("Sam Hourly", "H001", Decimal::new(25, 0));
/// employee.add_hours(Decimal::new(42, 0)).unwrap();
///
/// let pay = employee.compute_pay(Period::Weekly).unwrap();
/// assert_eq!(pay.to_string(), "1075.00");
/// assert_eq!(employee.hours_worked(), Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    emp_id: String,
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee from an explicit compensation scheme.
    pub fn new(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            name: name.into(),
            emp_id: emp_id.into(),
            compensation,
        }
    }

    /// Creates an hourly employee with no hours logged.
    pub fn hourly(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self::new(
            name,
            emp_id,
            Compensation::Hourly {
                hourly_rate,
                hours_worked: Decimal::ZERO,
            },
        )
    }

    /// Creates a salaried employee.
    pub fn salaried(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        annual_salary: Decimal,
    ) -> Self {
        Self::new(name, emp_id, Compensation::Salaried { annual_salary })
    }

    /// Creates a manager.
    pub fn manager(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        annual_salary: Decimal,
        bonus_percent: Decimal,
    ) -> Self {
        Self::new(
            name,
            emp_id,
            Compensation::Manager {
                annual_salary,
                bonus_percent,
            },
        )
    }

    /// Creates a manager on the default 10% bonus.
    pub fn manager_with_default_bonus(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        annual_salary: Decimal,
    ) -> Self {
        Self::manager(name, emp_id, annual_salary, DEFAULT_MANAGER_BONUS_PERCENT)
    }

    /// Creates an executive.
    pub fn executive(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        annual_salary: Decimal,
        bonus_percent: Decimal,
        equity_cash_per_year: Decimal,
    ) -> Self {
        Self::new(
            name,
            emp_id,
            Compensation::Executive {
                annual_salary,
                bonus_percent,
                equity_cash_per_year,
            },
        )
    }

    /// Creates an executive on the default 20% bonus with no equity.
    pub fn executive_with_defaults(
        name: impl Into<String>,
        emp_id: impl Into<String>,
        annual_salary: Decimal,
    ) -> Self {
        Self::executive(
            name,
            emp_id,
            annual_salary,
            DEFAULT_EXECUTIVE_BONUS_PERCENT,
            Decimal::ZERO,
        )
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique employee ID.
    pub fn emp_id(&self) -> &str {
        &self.emp_id
    }

    /// Returns the compensation scheme and its parameters.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the kind of compensation scheme.
    pub fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    /// Returns the hourly rate, for hourly employees.
    pub fn hourly_rate(&self) -> Option<Decimal> {
        match self.compensation {
            Compensation::Hourly { hourly_rate, .. } => Some(hourly_rate),
            _ => None,
        }
    }

    /// Returns the hours logged since the last pay computation, for hourly employees.
    pub fn hours_worked(&self) -> Option<Decimal> {
        match self.compensation {
            Compensation::Hourly { hours_worked, .. } => Some(hours_worked),
            _ => None,
        }
    }

    /// Returns the annual salary, for salaried, manager and executive employees.
    pub fn annual_salary(&self) -> Option<Decimal> {
        self.compensation.annual_salary()
    }

    /// Adds worked hours to an hourly employee's accumulator.
    ///
    /// Negative values are accepted and reduce the accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::HoursNotApplicable`] for non-hourly employees,
    /// and [`PayrollError::AmountOverflow`] when the total would exceed the
    /// range of [`Decimal`]. The accumulator is unchanged on error.
    pub fn add_hours(&mut self, hours: Decimal) -> PayrollResult<()> {
        match &mut self.compensation {
            Compensation::Hourly { hours_worked, .. } => {
                *hours_worked = checked(hours_worked.checked_add(hours), "hours_worked")?;
                debug!(
                    emp_id = %self.emp_id,
                    hours = %hours,
                    hours_worked = %hours_worked,
                    "Hours logged"
                );
                Ok(())
            }
            other => Err(PayrollError::HoursNotApplicable {
                emp_id: self.emp_id.clone(),
                kind: other.kind(),
            }),
        }
    }

    /// Empties the hours accumulator and returns what it held.
    ///
    /// Non-hourly employees always return zero.
    pub(crate) fn take_hours(&mut self) -> Decimal {
        match &mut self.compensation {
            Compensation::Hourly { hours_worked, .. } => std::mem::take(hours_worked),
            _ => Decimal::ZERO,
        }
    }

    /// Computes gross pay for one `period` under the default policy.
    ///
    /// For hourly employees this consumes the logged hours: a second call
    /// without new hours pays nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::AmountOverflow`] when the pay exceeds the range
    /// of [`Decimal`]. Logged hours are kept in that case.
    pub fn compute_pay(&mut self, period: Period) -> PayrollResult<Decimal> {
        self.compute_pay_with_policy(period, &CompensationPolicy::default())
    }

    /// Computes gross pay for one `period` under the given policy.
    pub fn compute_pay_with_policy(
        &mut self,
        period: Period,
        policy: &CompensationPolicy,
    ) -> PayrollResult<Decimal> {
        Ok(self.pay_breakdown(period, policy)?.gross_pay)
    }

    /// Computes gross pay with its component lines and audit steps.
    ///
    /// Has the same side effect on logged hours as [`Employee::compute_pay`],
    /// and only once the pay has been computed.
    pub fn pay_breakdown(
        &mut self,
        period: Period,
        policy: &CompensationPolicy,
    ) -> PayrollResult<PayBreakdown> {
        let breakdown = calculate_pay(self, period, policy)?;
        self.take_hours();
        Ok(breakdown)
    }

    /// Scales the hourly rate or annual salary by `1 + percent / 100`,
    /// rounded to cents, and returns the new amount.
    ///
    /// Negative percentages are pay cuts.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::AmountOverflow`] when the raised amount exceeds
    /// the range of [`Decimal`]. The compensation is unchanged in that case.
    pub fn apply_raise(&mut self, percent: Decimal) -> PayrollResult<Decimal> {
        let base = self.compensation.raise_base_mut();
        let previous = *base;
        *base = apply_raise(previous, percent)?;
        debug!(
            emp_id = %self.emp_id,
            percent = %percent,
            previous = %previous,
            updated = %base,
            "Raise applied"
        );
        Ok(*base)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {} {}>", self.kind(), self.emp_id, self.name)
    }
}
