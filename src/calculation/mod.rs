//! Calculation logic for the payroll engine.
//!
//! This module contains the pay rules: currency rounding, hourly pay with
//! overtime, pro-ration of salary, bonus and equity, raise application, and
//! the pipeline that combines them for each compensation scheme.

mod hourly;
mod pipeline;
mod proration;
mod raise;
mod rounding;

pub use hourly::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS, HourlyPayResult,
    calculate_hourly_pay,
};
pub use pipeline::calculate_pay;
pub use proration::{
    ProratedComponent, calculate_base_salary, calculate_bonus, calculate_equity, prorate,
};
pub use raise::apply_raise;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};

pub(crate) use rounding::checked;
