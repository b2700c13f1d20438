//! Payroll policy parameters for one employee.

use serde::{Deserialize, Serialize};

use super::{Hours, Money, OvertimeCategory, Rate};

/// Compensation and withholding parameters for a single calculation.
///
/// `full_month_hours` must be greater than zero; a zero value surfaces as
/// [`EngineError::DivisionByZero`](crate::error::EngineError::DivisionByZero)
/// when the hourly rate is derived. Rates are not validated here.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Hours, Money, PayrollConfig, Rate};
/// use std::str::FromStr;
///
/// let config = PayrollConfig {
///     base_salary: Money::from_minor_units(800000),
///     full_month_hours: Hours::from(174),
///     pension_rate: Rate::from_str("0.08").unwrap(),
///     medical_rate: Rate::from_str("0.20").unwrap(),
///     unemployment_rate: Rate::from_str("0.05").unwrap(),
///     housing_fund_rate: Rate::from_str("0.07").unwrap(),
///     overtime_weekday_rate: Rate::from_str("1.0").unwrap(),
///     overtime_weekend_rate: Rate::from_str("1.2").unwrap(),
///     overtime_holiday_rate: Rate::from_str("3.0").unwrap(),
/// };
/// assert_eq!(config.base_salary, Money::from_minor_units(800000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Contracted monthly salary in minor units.
    pub base_salary: Money,
    /// Standard working hours in a full month.
    pub full_month_hours: Hours,
    /// Pension insurance contribution rate.
    pub pension_rate: Rate,
    /// Medical insurance contribution rate.
    pub medical_rate: Rate,
    /// Unemployment insurance contribution rate.
    pub unemployment_rate: Rate,
    /// Housing provident fund contribution rate.
    pub housing_fund_rate: Rate,
    /// Multiplier for overtime worked on a weekday.
    pub overtime_weekday_rate: Rate,
    /// Multiplier for overtime worked on a weekend.
    pub overtime_weekend_rate: Rate,
    /// Multiplier for overtime worked on a public holiday.
    pub overtime_holiday_rate: Rate,
}

impl PayrollConfig {
    /// Returns the overtime multiplier for a category.
    pub fn overtime_multiplier(&self, category: OvertimeCategory) -> Rate {
        match category {
            OvertimeCategory::Weekday => self.overtime_weekday_rate,
            OvertimeCategory::Weekend => self.overtime_weekend_rate,
            OvertimeCategory::Holiday => self.overtime_holiday_rate,
        }
    }

    /// Returns a copy of this policy with a different base salary.
    pub fn with_base_salary(&self, base_salary: Money) -> Self {
        Self {
            base_salary,
            ..self.clone()
        }
    }
}
