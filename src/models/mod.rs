//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_result;
mod period;

pub use employee::{
    Compensation, DEFAULT_EXECUTIVE_BONUS_PERCENT, DEFAULT_MANAGER_BONUS_PERCENT, Employee,
    EmployeeKind,
};
pub use pay_result::{AuditStep, PayBreakdown, PayComponent, PayLine, PayrollEntry, PayrollRun};
pub use period::Period;
