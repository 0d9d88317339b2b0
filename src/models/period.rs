//! Pay period model.
//!
//! A [`Period`] names one payroll cycle and knows how many times that cycle
//! occurs in a year. The mapping is fixed and shared by every employee.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// A recognized payroll cycle length.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
///
/// let period: Period = "monthly".parse().unwrap();
/// assert_eq!(period, Period::Monthly);
/// assert_eq!(period.periods_per_year(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every two weeks (26 periods per year).
    Biweekly,
    /// Paid every month (12 periods per year). The default cycle.
    #[default]
    Monthly,
    /// Paid once a year.
    Annual,
}

impl Period {
    /// Every recognized period, shortest first.
    pub const ALL: [Period; 4] = [
        Period::Weekly,
        Period::Biweekly,
        Period::Monthly,
        Period::Annual,
    ];

    /// Returns how many times this period occurs in a year.
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Period::Weekly => 52,
            Period::Biweekly => 26,
            Period::Monthly => 12,
            Period::Annual => 1,
        }
    }

    /// Returns the periods-per-year count as a divisor for pro-ration.
    pub fn divisor(self) -> Decimal {
        Decimal::from(self.periods_per_year())
    }

    /// Returns the canonical lowercase name of the period.
    pub const fn as_str(self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Biweekly => "biweekly",
            Period::Monthly => "monthly",
            Period::Annual => "annual",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Period::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PayrollError::UnsupportedPeriod {
                period: s.to_string(),
            })
    }
}
