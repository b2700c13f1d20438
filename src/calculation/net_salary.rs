//! Net salary orchestration.
//!
//! Sequences the calculators into gross pay, withholding, income tax and
//! take-home pay:
//!
//! 1. base pay
//! 2. overtime pay
//! 3. social insurance and housing fund on base pay (not gross)
//! 4. gross = base pay + overtime pay
//! 5. taxable income = gross - social insurance - housing fund
//! 6. income tax on taxable income less special deductions
//! 7. net = gross - social insurance - housing fund - income tax

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Money, NetSalary, PayrollConfig, SpecialDeductions, TaxBracketTable,
    default_tax_table,
};

use super::base_pay::base_pay_at;
use super::overtime_pay::overtime_pay_at;
use super::{Withholding, calculate_hourly_rate, calculate_income_tax_with_table, calculate_social_insurance};

/// Calculates the net salary against the process-wide default bracket table.
///
/// Pure: no I/O and no shared mutable state, so identical inputs always
/// give identical results.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`](crate::error::EngineError::DivisionByZero)
///   if full-month hours is zero
/// - [`EngineError::NoBracketMatch`](crate::error::EngineError::NoBracketMatch)
///   if the bracket table has no threshold below the taxable income
/// - [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
///   if an amount leaves the decimal range
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_salary;
/// use payroll_engine::models::{
///     AttendanceRecord, Hours, Money, PayrollConfig, Rate, SpecialDeductions,
/// };
/// use std::str::FromStr;
///
/// let config = PayrollConfig {
///     base_salary: Money::from_minor_units(500000),
///     full_month_hours: Hours::from(160),
///     pension_rate: Rate::from_str("0.08").unwrap(),
///     medical_rate: Rate::from_str("0.02").unwrap(),
///     unemployment_rate: Rate::from_str("0.005").unwrap(),
///     housing_fund_rate: Rate::from_str("0.07").unwrap(),
///     overtime_weekday_rate: Rate::from_str("1.5").unwrap(),
///     overtime_weekend_rate: Rate::from_str("2").unwrap(),
///     overtime_holiday_rate: Rate::from_str("3").unwrap(),
/// };
/// let attendance = AttendanceRecord {
///     work_hours: Hours::from(160),
///     ..Default::default()
/// };
///
/// let salary =
///     calculate_net_salary(&config, &attendance, &SpecialDeductions::default()).unwrap();
/// assert_eq!(salary.gross, Money::from_minor_units(500000));
/// assert_eq!(salary.net, salary.gross - salary.insurance_and_fund - salary.income_tax);
/// ```
pub fn calculate_net_salary(
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
    deductions: &SpecialDeductions,
) -> EngineResult<NetSalary> {
    calculate_net_salary_with_table(config, attendance, deductions, default_tax_table())
}

/// Calculates the net salary against an explicit bracket table.
///
/// # Errors
///
/// Same as [`calculate_net_salary`].
pub fn calculate_net_salary_with_table(
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
    deductions: &SpecialDeductions,
    table: &TaxBracketTable,
) -> EngineResult<NetSalary> {
    let hourly_rate = calculate_hourly_rate(config)?;
    let base_pay = base_pay_at(hourly_rate, attendance)?;
    let overtime_pay = overtime_pay_at(hourly_rate, config, attendance)?;
    let withholding = calculate_social_insurance(config, base_pay)?;

    let gross = base_pay.checked_add(overtime_pay)?;
    let taxable_income = taxable_income(gross, &withholding)?;
    let income_tax = calculate_income_tax_with_table(taxable_income, deductions, table)?;

    assemble(base_pay, overtime_pay, withholding, income_tax)
}

/// Gross pay less withholding, before special deductions.
pub(crate) fn taxable_income(gross: Money, withholding: &Withholding) -> EngineResult<Money> {
    gross
        .checked_sub(withholding.social_insurance)?
        .checked_sub(withholding.housing_fund)
}

/// Assembles the final figures from the stage results.
pub(crate) fn assemble(
    base_pay: Money,
    overtime_pay: Money,
    withholding: Withholding,
    income_tax: Money,
) -> EngineResult<NetSalary> {
    let gross = base_pay.checked_add(overtime_pay)?;
    let taxable_income = taxable_income(gross, &withholding)?;

    Ok(NetSalary {
        base_pay,
        overtime_pay,
        gross,
        social_insurance: withholding.social_insurance,
        housing_fund: withholding.housing_fund,
        insurance_and_fund: withholding.total()?,
        taxable_income,
        income_tax,
        net: taxable_income.checked_sub(income_tax)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{Hours, Rate, TaxBracket};
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

    fn create_reference_config() -> PayrollConfig {
        PayrollConfig {
            base_salary: money("800000"),
            full_month_hours: hours("174"),
            pension_rate: rate("0.08"),
            medical_rate: rate("0.20"),
            unemployment_rate: rate("0.05"),
            housing_fund_rate: rate("0.07"),
            overtime_weekday_rate: rate("1.0"),
            overtime_weekend_rate: rate("1.2"),
            overtime_holiday_rate: rate("3.0"),
        }
    }

    fn create_reference_attendance() -> AttendanceRecord {
        AttendanceRecord {
            work_hours: hours("174"),
            overtime_weekday: hours("1"),
            overtime_weekend: hours("1"),
            overtime_holiday: Hours::ZERO,
            absence_hours: Hours::ZERO,
        }
    }

    fn create_reference_deductions() -> SpecialDeductions {
        SpecialDeductions {
            housing_loan_interest: money("10000"),
            support_elderly: money("20000"),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        let salary = calculate_net_salary(
            &create_reference_config(),
            &create_reference_attendance(),
            &create_reference_deductions(),
        )
        .unwrap();

        assert_eq!(salary.base_pay, money("800000.00"));
        assert_eq!(salary.overtime_pay, money("10114.94"));
        assert_eq!(salary.gross, money("810114.94"));
        assert_eq!(salary.social_insurance, money("264000.00"));
        assert_eq!(salary.housing_fund, money("56000.00"));
        assert_eq!(salary.insurance_and_fund, money("320000.00"));
        assert_eq!(salary.taxable_income, money("490114.94"));
        assert_eq!(salary.income_tax, money("655946.66"));
        assert_eq!(salary.net, money("-165831.72"));
    }

    #[test]
    fn test_withholding_uses_base_pay_not_gross() {
        let mut attendance = create_reference_attendance();
        attendance.overtime_holiday = hours("10");

        let salary = calculate_net_salary(
            &create_reference_config(),
            &attendance,
            &create_reference_deductions(),
        )
        .unwrap();

        assert!(salary.overtime_pay > money("10114.94"));
        assert_eq!(salary.insurance_and_fund, money("320000.00"));
    }

    #[test]
    fn test_statutory_table_scenario() {
        let salary = calculate_net_salary_with_table(
            &create_reference_config(),
            &create_reference_attendance(),
            &create_reference_deductions(),
            &TaxBracketTable::statutory_monthly(),
        )
        .unwrap();

        // 460114.94 falls in the 10% slice: 160114.94 * 0.10 + 9000
        assert_eq!(salary.income_tax, money("25011.49"));
        assert_eq!(salary.net, money("465103.45"));
    }

    #[test]
    fn test_large_deductions_mean_no_tax() {
        let deductions = SpecialDeductions {
            housing_rent: money("600000"),
            ..Default::default()
        };

        let salary = calculate_net_salary(
            &create_reference_config(),
            &create_reference_attendance(),
            &deductions,
        )
        .unwrap();

        assert_eq!(salary.income_tax, Money::ZERO);
        assert_eq!(salary.net, salary.taxable_income);
    }

    #[test]
    fn test_invariants_hold() {
        let salary = calculate_net_salary(
            &create_reference_config(),
            &create_reference_attendance(),
            &create_reference_deductions(),
        )
        .unwrap();

        assert_eq!(salary.gross, salary.base_pay + salary.overtime_pay);
        assert_eq!(
            salary.insurance_and_fund,
            salary.social_insurance + salary.housing_fund
        );
        assert_eq!(
            salary.net,
            salary.gross - salary.social_insurance - salary.housing_fund - salary.income_tax
        );
    }

    #[test]
    fn test_zero_full_month_hours_propagates() {
        let mut config = create_reference_config();
        config.full_month_hours = Hours::ZERO;

        let result = calculate_net_salary(
            &config,
            &create_reference_attendance(),
            &create_reference_deductions(),
        );
        assert!(matches!(result, Err(EngineError::DivisionByZero { .. })));
    }

    #[test]
    fn test_no_bracket_match_propagates() {
        let table = TaxBracketTable::new(vec![TaxBracket::new(
            money("10000000"),
            rate("0.1"),
            Money::ZERO,
        )])
        .unwrap();

        let result = calculate_net_salary_with_table(
            &create_reference_config(),
            &create_reference_attendance(),
            &create_reference_deductions(),
            &table,
        );
        assert!(matches!(result, Err(EngineError::NoBracketMatch { .. })));
    }

    #[test]
    fn test_oversized_deductions_propagate_as_calculation_error() {
        let deductions = SpecialDeductions {
            children_education: money("50000000000000000000000000000"),
            continuing_education: money("50000000000000000000000000000"),
            ..Default::default()
        };

        let result = calculate_net_salary(
            &create_reference_config(),
            &create_reference_attendance(),
            &deductions,
        );
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_gross_beyond_decimal_range_is_a_calculation_error() {
        let mut config = create_reference_config();
        config.base_salary = money("50000000000000000000000000000");
        config.full_month_hours = hours("1");
        let attendance = AttendanceRecord {
            work_hours: hours("1"),
            overtime_weekday: hours("1"),
            ..Default::default()
        };

        let result = calculate_net_salary(&config, &attendance, &SpecialDeductions::default());
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_is_deterministic() {
        let config = create_reference_config();
        let attendance = create_reference_attendance();
        let deductions = create_reference_deductions();

        let first = calculate_net_salary(&config, &attendance, &deductions).unwrap();
        let second = calculate_net_salary(&config, &attendance, &deductions).unwrap();
        assert_eq!(first, second);
    }
}
