//! Payroll Engine
//!
//! This crate computes periodic gross pay for hourly, salaried, managerial and
//! executive employees, and manages the registry of employees an organization
//! runs payroll over.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
