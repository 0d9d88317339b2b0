//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS};
use crate::error::{PayrollError, PayrollResult};

/// Organization details from `organization.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationConfig {
    /// The organization's display name.
    pub name: String,
}

/// Rules applied when pricing hourly work.
///
/// Fields missing from `policy.yaml` take their defaults, so an empty file
/// reproduces the standard 40-hour threshold at time and a half.
///
/// # Example
///
/// ```
/// use payroll_engine::config::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = CompensationPolicy::default();
/// assert_eq!(policy.overtime_threshold_hours, Decimal::new(40, 0));
/// assert_eq!(policy.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompensationPolicy {
    /// Hours per period paid at the base rate before overtime applies.
    pub overtime_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for CompensationPolicy {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl CompensationPolicy {
    /// Checks that the threshold is non-negative and overtime is not paid below the base rate.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.overtime_threshold_hours.is_sign_negative() {
            return Err(PayrollError::InvalidConfig {
                field: "overtime_threshold_hours".to_string(),
                message: format!(
                    "must not be negative, got {}",
                    self.overtime_threshold_hours
                ),
            });
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(PayrollError::InvalidConfig {
                field: "overtime_multiplier".to_string(),
                message: format!("must be at least 1, got {}", self.overtime_multiplier),
            });
        }
        Ok(())
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    organization: OrganizationConfig,
    policy: CompensationPolicy,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(organization: OrganizationConfig, policy: CompensationPolicy) -> Self {
        Self {
            organization,
            policy,
        }
    }

    /// Returns the organization details.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }
}
