//! Social insurance and housing fund withholding.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Money, PayrollConfig};

/// Amounts withheld from pay for insurance and the housing fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withholding {
    /// Pension, medical and unemployment insurance, rounded as one sum.
    pub social_insurance: Money,
    /// Housing provident fund contribution.
    pub housing_fund: Money,
}

impl Withholding {
    /// Returns social insurance plus housing fund.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
    /// if the sum overflows.
    pub fn total(&self) -> EngineResult<Money> {
        self.social_insurance.checked_add(self.housing_fund)
    }
}

/// Applies the configured contribution rates to a wage base.
///
/// The three insurance contributions are summed unrounded and the sum is
/// rounded to cents; the housing fund is rounded on its own. The wage base
/// is base pay, never gross pay including overtime.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
/// if a contribution leaves the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_insurance;
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
///     overtime_weekday_rate: Rate::ZERO,
///     overtime_weekend_rate: Rate::ZERO,
///     overtime_holiday_rate: Rate::ZERO,
/// };
///
/// let withholding =
///     calculate_social_insurance(&config, Money::from_minor_units(800000)).unwrap();
/// assert_eq!(withholding.social_insurance, Money::from_minor_units(264000));
/// assert_eq!(withholding.housing_fund, Money::from_minor_units(56000));
/// ```
pub fn calculate_social_insurance(
    config: &PayrollConfig,
    wage_base: Money,
) -> EngineResult<Withholding> {
    let insurance = Money::checked_sum([
        wage_base.checked_mul(config.pension_rate)?,
        wage_base.checked_mul(config.medical_rate)?,
        wage_base.checked_mul(config.unemployment_rate)?,
    ])?;
    let housing_fund = wage_base.checked_mul(config.housing_fund_rate)?;

    Ok(Withholding {
        social_insurance: insurance.round_to_cents(),
        housing_fund: housing_fund.round_to_cents(),
    })
}
