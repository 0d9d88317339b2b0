//! Pay result models for the payroll engine.
//!
//! This module contains the per-employee [`PayBreakdown`] and the
//! organization-wide [`PayrollRun`], together with the pay lines and audit
//! steps that explain how each figure was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeKind, Period};

/// The component of pay a pay line represents.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayComponent;
///
/// let component = PayComponent::Overtime;
/// assert_eq!(format!("{:?}", component), "Overtime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponent {
    /// Hours up to the overtime threshold at the base hourly rate.
    Regular,
    /// Hours beyond the overtime threshold at the overtime multiplier.
    Overtime,
    /// The pro-rated annual salary.
    BaseSalary,
    /// The pro-rated annual bonus.
    Bonus,
    /// The pro-rated yearly cash equity.
    Equity,
}

/// A single line item of an employee's pay for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// Which component this line pays.
    pub component: PayComponent,
    /// Hours for hourly components, `None` for pro-rated amounts.
    pub hours: Option<Decimal>,
    /// Hourly rate (after any multiplier) or the annual amount being pro-rated.
    pub basis: Decimal,
    /// The amount contributed by this line.
    pub amount: Decimal,
}

/// A single step in the audit trail recording one rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Gross pay for one employee and one period, with its derivation.
///
/// Hourly line amounts are exact; the gross figure is rounded to cents.
/// Pro-rated line amounts are already rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The employee this pay belongs to.
    pub emp_id: String,
    /// The employee's compensation kind.
    pub kind: EmployeeKind,
    /// The period the pay covers.
    pub period: Period,
    /// The components making up the pay.
    pub lines: Vec<PayLine>,
    /// The gross pay for the period, rounded to cents.
    pub gross_pay: Decimal,
    /// Every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl PayBreakdown {
    /// Returns the amount paid for a component, if the breakdown has one.
    pub fn component(&self, component: PayComponent) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|line| line.component == component)
            .map(|line| line.amount)
    }
}

/// One employee's line in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee's ID.
    pub emp_id: String,
    /// The employee's display name.
    pub name: String,
    /// The gross pay computed for the period.
    pub gross_pay: Decimal,
}

/// The result of paying every employee in a registry for one period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Period, PayrollEntry, PayrollRun};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let run = PayrollRun {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     organization: "ACME Inc.".to_string(),
///     period: Period::Monthly,
///     detail: vec![PayrollEntry {
///         emp_id: "S001".to_string(),
///         name: "Sara Salary".to_string(),
///         gross_pay: Decimal::new(787500, 2),
///     }],
///     total: Decimal::new(787500, 2),
/// };
/// assert_eq!(run.pay_for("S001"), Some(Decimal::new(787500, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The organization that was paid.
    pub organization: String,
    /// The period that was paid.
    pub period: Period,
    /// Per-employee pay, in hire order.
    pub detail: Vec<PayrollEntry>,
    /// Sum of all entries, rounded to cents after each addition.
    pub total: Decimal,
}

impl PayrollRun {
    /// Returns the gross pay computed for an employee in this run.
    pub fn pay_for(&self, emp_id: &str) -> Option<Decimal> {
        self.detail
            .iter()
            .find(|entry| entry.emp_id == emp_id)
            .map(|entry| entry.gross_pay)
    }

    /// Splits the run into its `(emp_id, pay)` detail and total.
    pub fn into_parts(self) -> (Vec<(String, Decimal)>, Decimal) {
        let detail = self
            .detail
            .into_iter()
            .map(|entry| (entry.emp_id, entry.gross_pay))
            .collect();
        (detail, self.total)
    }
}
