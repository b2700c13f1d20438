//! Absence-adjusted base pay.

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, HourlyRate, Money, PayrollConfig};

use super::calculate_hourly_rate;

/// Calculates base pay for the period.
///
/// `hourly_rate * work_hours - hourly_rate * absence_hours`, rounded to
/// cents half-away-from-zero. The hourly rate itself is never rounded.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`](crate::error::EngineError::DivisionByZero)
/// if the configured full-month hours is zero, and
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if the pay leaves the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_pay;
/// use payroll_engine::models::{AttendanceRecord, Hours, Money, PayrollConfig, Rate};
///
/// let config = PayrollConfig {
///     base_salary: Money::from_minor_units(800000),
///     full_month_hours: Hours::from(160),
///     pension_rate: Rate::ZERO,
///     medical_rate: Rate::ZERO,
///     unemployment_rate: Rate::ZERO,
///     housing_fund_rate: Rate::ZERO,
///     overtime_weekday_rate: Rate::ZERO,
///     overtime_weekend_rate: Rate::ZERO,
///     overtime_holiday_rate: Rate::ZERO,
/// };
/// let attendance = AttendanceRecord {
///     work_hours: Hours::from(160),
///     absence_hours: Hours::from(8),
///     ..Default::default()
/// };
///
/// let base_pay = calculate_base_pay(&config, &attendance).unwrap();
/// assert_eq!(base_pay, Money::from_minor_units(760000));
/// ```
pub fn calculate_base_pay(
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
) -> EngineResult<Money> {
    let hourly_rate = calculate_hourly_rate(config)?;
    base_pay_at(hourly_rate, attendance)
}

/// Base pay for an already derived hourly rate.
pub(crate) fn base_pay_at(
    hourly_rate: HourlyRate,
    attendance: &AttendanceRecord,
) -> EngineResult<Money> {
    let worked = hourly_rate.checked_mul(attendance.work_hours)?;
    let absence_deduction = hourly_rate.checked_mul(attendance.absence_hours)?;
    Ok(worked.checked_sub(absence_deduction)?.round_to_cents())
}
