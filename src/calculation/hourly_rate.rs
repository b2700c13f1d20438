//! Hourly rate derivation.

use crate::error::EngineResult;
use crate::models::{HourlyRate, PayrollConfig};

/// Derives the hourly rate as `base_salary / full_month_hours`.
///
/// The quotient is kept at full precision; only amounts derived from it
/// are rounded.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`](crate::error::EngineError::DivisionByZero)
/// if `full_month_hours` is zero.
pub fn calculate_hourly_rate(config: &PayrollConfig) -> EngineResult<HourlyRate> {
    config.base_salary.per_hour(config.full_month_hours)
}
