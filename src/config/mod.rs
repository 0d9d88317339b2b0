//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the organization name and the
//! compensation policy from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded organization: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationPolicy, OrganizationConfig, PayrollConfig};
