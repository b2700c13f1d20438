//! Category-weighted overtime pay.
//!
//! ## Rate Structure
//!
//! Each overtime category has its own multiplier on the hourly rate:
//! - Weekday overtime: `overtime_weekday_rate`
//! - Weekend overtime: `overtime_weekend_rate`
//! - Holiday overtime: `overtime_holiday_rate`
//!
//! Category amounts are summed at full precision and only the sum is rounded.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, HourlyRate, Hours, Money, OvertimeCategory, PayrollConfig, Rate,
};

use super::calculate_hourly_rate;

/// Unrounded overtime pay for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeLine {
    /// The overtime category.
    pub category: OvertimeCategory,
    /// Overtime hours in this category.
    pub hours: Hours,
    /// The multiplier applied to the hourly rate.
    pub multiplier: Rate,
    /// `hourly_rate * hours * multiplier`, unrounded.
    pub amount: Money,
}

/// Calculates overtime pay across the weekday, weekend and holiday
/// categories.
///
/// Categories with zero hours are skipped. The sum of the remaining
/// categories is rounded to cents half-away-from-zero.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`](crate::error::EngineError::DivisionByZero)
/// if the configured full-month hours is zero, and
/// [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if a category amount or the total leaves the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::models::{AttendanceRecord, Hours, Money, PayrollConfig, Rate};
/// use std::str::FromStr;
///
/// let config = PayrollConfig {
///     base_salary: Money::from_minor_units(800000),
///     full_month_hours: Hours::from(160),
///     pension_rate: Rate::ZERO,
///     medical_rate: Rate::ZERO,
///     unemployment_rate: Rate::ZERO,
///     housing_fund_rate: Rate::ZERO,
///     overtime_weekday_rate: Rate::from_str("1.5").unwrap(),
///     overtime_weekend_rate: Rate::from_str("2").unwrap(),
///     overtime_holiday_rate: Rate::from_str("3").unwrap(),
/// };
/// let attendance = AttendanceRecord {
///     overtime_weekday: Hours::from(2),
///     overtime_holiday: Hours::from(1),
///     ..Default::default()
/// };
///
/// // 5000 * 2 * 1.5 + 5000 * 1 * 3
/// let overtime = calculate_overtime_pay(&config, &attendance).unwrap();
/// assert_eq!(overtime, Money::from_minor_units(30000));
/// ```
pub fn calculate_overtime_pay(
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
) -> EngineResult<Money> {
    let hourly_rate = calculate_hourly_rate(config)?;
    overtime_pay_at(hourly_rate, config, attendance)
}

/// Overtime pay for an already derived hourly rate.
pub(crate) fn overtime_pay_at(
    hourly_rate: HourlyRate,
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
) -> EngineResult<Money> {
    let lines = overtime_lines(hourly_rate, config, attendance)?;
    let total = Money::checked_sum(lines.into_iter().map(|line| line.amount))?;
    Ok(total.round_to_cents())
}

/// Breaks overtime down by category, omitting categories with no hours.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if a category amount overflows.
pub fn overtime_lines(
    hourly_rate: HourlyRate,
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
) -> EngineResult<Vec<OvertimeLine>> {
    OvertimeCategory::ALL
        .into_iter()
        .filter(|category| !attendance.overtime_hours(*category).is_zero())
        .map(|category| {
            let hours = attendance.overtime_hours(category);
            let multiplier = config.overtime_multiplier(category);
            let amount = hourly_rate.checked_mul(hours)?.checked_mul(multiplier)?;
            Ok(OvertimeLine {
                category,
                hours,
                multiplier,
                amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn hours(s: &str) -> Hours {
        Hours::from_str(s).unwrap()
    }

    fn rate(s: &str) -> Rate {
        Rate::from_str(s).unwrap()
    }

    fn create_test_config(base_salary: &str, full_month_hours: &str) -> PayrollConfig {
        PayrollConfig {
            base_salary: money(base_salary),
            full_month_hours: hours(full_month_hours),
            pension_rate: rate("0.08"),
            medical_rate: rate("0.20"),
            unemployment_rate: rate("0.05"),
            housing_fund_rate: rate("0.07"),
            overtime_weekday_rate: rate("1.0"),
            overtime_weekend_rate: rate("1.2"),
            overtime_holiday_rate: rate("3.0"),
        }
    }

    fn overtime(weekday: &str, weekend: &str, holiday: &str) -> AttendanceRecord {
        AttendanceRecord {
            work_hours: hours("174"),
            overtime_weekday: hours(weekday),
            overtime_weekend: hours(weekend),
            overtime_holiday: hours(holiday),
            absence_hours: Hours::ZERO,
        }
    }

    #[test]
    fn test_no_overtime_is_exactly_zero() {
        let config = create_test_config("800000", "174");
        let pay = calculate_overtime_pay(&config, &overtime("0", "0", "0")).unwrap();
        assert_eq!(pay, Money::ZERO);
        assert!(pay.is_zero());
    }

    #[test]
    fn test_weekday_and_weekend_hour() {
        let config = create_test_config("800000", "174");
        let pay = calculate_overtime_pay(&config, &overtime("1", "1", "0")).unwrap();

        // 800000 / 174 * 2.2 = 10114.9425...
        assert_eq!(pay, money("10114.94"));
    }

    #[test]
    fn test_holiday_multiplier() {
        let config = create_test_config("800000", "160");
        let pay = calculate_overtime_pay(&config, &overtime("0", "0", "8")).unwrap();

        // 5000 * 8 * 3.0
        assert_eq!(pay, money("120000"));
    }

    #[test]
    fn test_sum_is_rounded_not_each_category() {
        // Hourly rate 0.3335: each category alone is 0.3335 (rounds to 0.33),
        // together 0.667 rounds to 0.67
        let mut config = create_test_config("0.3335", "1");
        config.overtime_weekday_rate = rate("1");
        config.overtime_weekend_rate = rate("1");

        let pay = calculate_overtime_pay(&config, &overtime("1", "1", "0")).unwrap();
        assert_eq!(pay, money("0.67"));
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        let mut config = create_test_config("100.005", "1");
        config.overtime_weekday_rate = rate("1");

        let pay = calculate_overtime_pay(&config, &overtime("1", "0", "0")).unwrap();
        assert_eq!(pay, money("100.01"));
    }

    #[test]
    fn test_lines_skip_zero_hour_categories() {
        let config = create_test_config("800000", "160");
        let hourly_rate = calculate_hourly_rate(&config).unwrap();

        let lines = overtime_lines(hourly_rate, &config, &overtime("2", "0", "1")).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].category, OvertimeCategory::Weekday);
        assert_eq!(lines[0].amount, money("10000"));
        assert_eq!(lines[1].category, OvertimeCategory::Holiday);
        assert_eq!(lines[1].multiplier, rate("3.0"));
        assert_eq!(lines[1].amount, money("15000"));
    }

    #[test]
    fn test_zero_full_month_hours_is_division_by_zero() {
        let config = create_test_config("800000", "0");
        let result = calculate_overtime_pay(&config, &overtime("1", "0", "0"));
        assert!(matches!(result, Err(EngineError::DivisionByZero { .. })));
    }

    #[test]
    fn test_overtime_beyond_decimal_range_is_a_calculation_error() {
        let mut config = create_test_config("79228162514264337593543950335", "1");

        // a single line past the range
        let result = calculate_overtime_pay(&config, &overtime("0", "1", "0"));
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));

        // two lines that fit but whose sum does not
        config.overtime_weekend_rate = rate("1.0");
        let result = calculate_overtime_pay(&config, &overtime("1", "1", "0"));
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
