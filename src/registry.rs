//! Employee registry for one organization.
//!
//! The [`Registry`] owns every employee it holds, keyed by employee ID and
//! kept in hire order. It never prices pay itself: payroll runs delegate to
//! each employee and aggregate the results.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay, checked, round_currency};
use crate::config::{CompensationPolicy, PayrollConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayrollEntry, PayrollRun, Period};

/// The owning collection of employees for one organization.
///
/// Employees are stored in hire order; a map from employee ID to slot keeps
/// lookups constant-time.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, Period};
/// use payroll_engine::registry::Registry;
/// use rust_decimal::Decimal;
///
/// let mut acme = Registry::new("ACME Inc.");
/// acme.hire(Employee::salaried("Sara Salary", "S001", Decimal::new(90000, 0)))?;
/// acme.give_raise("S001", Decimal::new(5, 0))?;
///
/// let run = acme.run_payroll(Period::Monthly)?;
/// assert_eq!(run.total.to_string(), "7875.00");
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    name: String,
    policy: CompensationPolicy,
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry using the default compensation policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, CompensationPolicy::default())
    }

    /// Creates an empty registry using the given compensation policy.
    pub fn with_policy(name: impl Into<String>, policy: CompensationPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            employees: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty registry from loaded configuration.
    pub fn from_config(config: &PayrollConfig) -> Self {
        Self::with_policy(config.organization().name.clone(), config.policy().clone())
    }

    /// Returns the organization name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the compensation policy used for payroll runs.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody is employed.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns true if an employee with this ID is registered.
    pub fn contains(&self, emp_id: &str) -> bool {
        self.index.contains_key(emp_id)
    }

    fn position(&self, emp_id: &str) -> PayrollResult<usize> {
        self.index
            .get(emp_id)
            .copied()
            .ok_or_else(|| Self::not_found(emp_id))
    }

    fn not_found(emp_id: &str) -> PayrollError {
        warn!(emp_id = %emp_id, "Employee not found");
        PayrollError::EmployeeNotFound {
            emp_id: emp_id.to_string(),
        }
    }

    /// Takes ownership of an employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DuplicateEmployee`] if the ID is already
    /// registered. The error carries the candidate back, untouched; see
    /// [`PayrollError::into_rejected_employee`].
    pub fn hire(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.contains(employee.emp_id()) {
            warn!(
                organization = %self.name,
                emp_id = %employee.emp_id(),
                "Rejected hire with duplicate employee ID"
            );
            return Err(PayrollError::DuplicateEmployee {
                emp_id: employee.emp_id().to_string(),
                employee: Box::new(employee),
            });
        }

        info!(
            organization = %self.name,
            emp_id = %employee.emp_id(),
            kind = %employee.kind(),
            "Employee hired"
        );
        self.index
            .insert(employee.emp_id().to_string(), self.employees.len());
        self.employees.push(employee);
        Ok(())
    }

    /// Removes an employee and hands it back to the caller.
    ///
    /// Later hires shift down one slot, so hire order is preserved.
    pub fn fire(&mut self, emp_id: &str) -> PayrollResult<Employee> {
        let removed = self.position(emp_id)?;
        self.index.remove(emp_id);
        for slot in self.index.values_mut() {
            if *slot > removed {
                *slot -= 1;
            }
        }
        let employee = self.employees.remove(removed);
        info!(
            organization = %self.name,
            emp_id = %emp_id,
            "Employee fired"
        );
        Ok(employee)
    }

    /// Returns an employee without removing it.
    pub fn get(&self, emp_id: &str) -> PayrollResult<&Employee> {
        let slot = self.position(emp_id)?;
        Ok(&self.employees[slot])
    }

    /// Returns an employee for in-place updates.
    pub fn get_mut(&mut self, emp_id: &str) -> PayrollResult<&mut Employee> {
        let slot = self.position(emp_id)?;
        Ok(&mut self.employees[slot])
    }

    /// Returns every employee in hire order.
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Applies a percentage raise to an employee's rate or salary.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::EmployeeNotFound`] for an unknown ID, or
    /// [`PayrollError::AmountOverflow`] if the raised amount is out of range.
    pub fn give_raise(&mut self, emp_id: &str, percent: Decimal) -> PayrollResult<()> {
        self.get_mut(emp_id)?.apply_raise(percent)?;
        Ok(())
    }

    /// Adds worked hours to an hourly employee.
    pub fn log_hours(&mut self, emp_id: &str, hours: Decimal) -> PayrollResult<()> {
        self.get_mut(emp_id)?.add_hours(hours)
    }

    /// Pays every employee for one period, in hire order.
    ///
    /// Every employee is priced before anyone's logged hours are consumed.
    /// The total is rounded to cents after each addition.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::PayrollAborted`] naming the first employee
    /// whose pay, or whose addition to the total, overflows. No employee is
    /// modified by a failed run.
    pub fn run_payroll(&mut self, period: Period) -> PayrollResult<PayrollRun> {
        let mut detail = Vec::with_capacity(self.employees.len());
        let mut total = round_currency(Decimal::ZERO);

        for employee in &self.employees {
            let gross_pay = calculate_pay(employee, period, &self.policy)
                .and_then(|breakdown| {
                    let sum = checked(total.checked_add(breakdown.gross_pay), "payroll_total")?;
                    total = round_currency(sum);
                    Ok(breakdown.gross_pay)
                })
                .map_err(|source| self.aborted(employee.emp_id(), source))?;
            detail.push(PayrollEntry {
                emp_id: employee.emp_id().to_string(),
                name: employee.name().to_string(),
                gross_pay,
            });
        }

        for employee in &mut self.employees {
            employee.take_hours();
        }

        let run = PayrollRun {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            organization: self.name.clone(),
            period,
            detail,
            total,
        };

        info!(
            run_id = %run.run_id,
            organization = %self.name,
            period = %period,
            employees = run.detail.len(),
            total = %run.total,
            "Payroll run completed"
        );

        Ok(run)
    }

    fn aborted(&self, emp_id: &str, source: PayrollError) -> PayrollError {
        warn!(
            organization = %self.name,
            emp_id = %emp_id,
            error = %source,
            "Payroll run aborted"
        );
        PayrollError::PayrollAborted {
            emp_id: emp_id.to_string(),
            source: Box::new(source),
        }
    }

    /// Parses a period name, then pays every employee for that period.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::UnsupportedPeriod`] for an unknown name. The
    /// name is checked before any employee is paid, so a failed call leaves
    /// every employee untouched. Otherwise fails as [`Registry::run_payroll`].
    pub fn run_payroll_named(&mut self, period: &str) -> PayrollResult<PayrollRun> {
        let period = period.parse::<Period>().inspect_err(|err| {
            warn!(organization = %self.name, error = %err, "Payroll run rejected");
        })?;
        debug!(organization = %self.name, period = %period, "Period resolved");
        self.run_payroll(period)
    }
}
