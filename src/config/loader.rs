//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::{CompensationPolicy, OrganizationConfig, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/acme/
/// ├── organization.yaml  # Organization name
/// └── policy.yaml        # Overtime threshold and multiplier
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/acme")?;
/// println!("Organization: {}", loader.organization().name);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The compensation policy fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;
        let policy = Self::load_yaml::<CompensationPolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        info!(
            path = %path.display(),
            organization = %organization.name,
            overtime_threshold_hours = %policy.overtime_threshold_hours,
            overtime_multiplier = %policy.overtime_multiplier,
            "Payroll configuration loaded"
        );

        Ok(Self {
            config: PayrollConfig::new(organization, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the payroll configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// Returns the organization details.
    pub fn organization(&self) -> &OrganizationConfig {
        self.config.organization()
    }

    /// Returns the compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        self.config.policy()
    }
}
