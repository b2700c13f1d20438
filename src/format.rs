//! Display formatting for payroll amounts.
//!
//! Amounts are stored in minor units; display converts them to major units
//! and rounds half-to-even. This is the only place banker's rounding is used.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Money, Payslip};

/// Symbol prefixed by [`format_currency`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

const MINOR_UNITS_PER_MAJOR: i64 = 100;
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Formats a minor-unit amount as a major-unit string with the default
/// currency symbol and exactly two decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::format::format_currency;
/// use payroll_engine::models::Money;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Money::from_minor_units(800000)), "¥8000.00");
/// assert_eq!(format_currency(Money::from_str("10114.94").unwrap()), "¥101.15");
/// ```
pub fn format_currency(amount: Money) -> String {
    format_currency_with_symbol(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Formats a minor-unit amount with an arbitrary currency symbol.
///
/// Negative amounts keep the sign after the symbol (`¥-12.50`).
pub fn format_currency_with_symbol(amount: Money, symbol: &str) -> String {
    let major = amount.amount() / Decimal::from(MINOR_UNITS_PER_MAJOR);
    let mut rounded = major
        .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    format!("{}{}", symbol, rounded)
}

/// Renders a payslip as the fixed-width salary breakdown report.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::build_payslip;
/// use payroll_engine::format::render_report;
/// use payroll_engine::models::{
///     AttendanceRecord, Hours, Money, PayrollConfig, Rate, SpecialDeductions,
///     default_tax_table,
/// };
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
///     ..Default::default()
/// };
/// let payslip = build_payslip(
///     "emp_001",
///     &config,
///     &attendance,
///     &SpecialDeductions::default(),
///     default_tax_table(),
/// )
/// .unwrap();
///
/// let report = render_report(&payslip);
/// assert!(report.contains("Salary Breakdown: emp_001"));
/// assert!(report.contains("¥8000.00"));
/// ```
pub fn render_report(payslip: &Payslip) -> String {
    let salary = &payslip.salary;
    let rows = [
        ("Base salary", payslip.base_salary),
        ("Overtime pay", salary.overtime_pay),
        ("Gross salary", salary.gross),
        ("Insurance and fund", salary.insurance_and_fund),
        ("Income tax", salary.income_tax),
    ];

    let rule = "-".repeat(40);
    let mut report = String::new();
    report.push_str(&format!(
        "============ Salary Breakdown: {} ============\n",
        payslip.employee_id
    ));
    report.push_str(&format!("{:<20} {:>19}\n", "Item", "Amount"));
    report.push_str(&rule);
    report.push('\n');
    for (label, amount) in rows {
        report.push_str(&format!("{:<20} {:>19}\n", label, format_currency(amount)));
    }
    report.push_str(&rule);
    report.push('\n');
    report.push_str(&format!(
        "{:<20} {:>19}\n",
        "Net salary",
        format_currency(salary.net)
    ));

    report
}
