//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the compensation model, the registry and the
//! configuration loader can report.

use thiserror::Error;

use crate::models::{Employee, EmployeeKind};

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     emp_id: "X999".to_string(),
/// };
/// assert_eq!(error.to_string(), "No such employee: X999");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee with the same ID is already registered.
    ///
    /// The rejected candidate travels with the error so the caller keeps
    /// ownership of it.
    #[error("Employee ID '{emp_id}' already exists")]
    DuplicateEmployee {
        /// The ID that collided.
        emp_id: String,
        /// The candidate that was not hired.
        employee: Box<Employee>,
    },

    /// No employee is registered under the given ID.
    #[error("No such employee: {emp_id}")]
    EmployeeNotFound {
        /// The ID that was looked up.
        emp_id: String,
    },

    /// The requested pay period is not one of the recognized cycles.
    #[error("Unsupported pay period: '{period}'")]
    UnsupportedPeriod {
        /// The period name as supplied by the caller.
        period: String,
    },

    /// Hours were logged against an employee who is not paid by the hour.
    #[error("Employee '{emp_id}' is {kind} and does not accumulate hours")]
    HoursNotApplicable {
        /// The ID of the employee.
        emp_id: String,
        /// The employee's compensation kind.
        kind: EmployeeKind,
    },

    /// A monetary or hours computation exceeded the representable range.
    #[error("Amount overflowed while computing {stage}")]
    AmountOverflow {
        /// The computation stage that overflowed (e.g. "overtime_pay").
        stage: String,
    },

    /// A payroll run stopped because one employee's pay could not be computed.
    ///
    /// Pay is priced for every employee before any hours are consumed, so a
    /// run that fails this way leaves every employee untouched.
    #[error("Payroll run aborted at employee '{emp_id}': {source}")]
    PayrollAborted {
        /// The employee whose pay could not be computed.
        emp_id: String,
        /// Why the pay could not be computed.
        #[source]
        source: Box<PayrollError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its permitted range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl PayrollError {
    /// Hands back the employee rejected by a duplicate hire, if any.
    pub fn into_rejected_employee(self) -> Option<Employee> {
        match self {
            PayrollError::DuplicateEmployee { employee, .. } => Some(*employee),
            _ => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
