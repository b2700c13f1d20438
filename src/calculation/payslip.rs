//! Payslip assembly with an audit trace.
//!
//! Runs the same pipeline as [`calculate_net_salary_with_table`](super::calculate_net_salary_with_table)
//! and records one [`AuditStep`] per stage so every figure on the payslip can
//! be traced back to its inputs.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, PayrollConfig, Payslip, SpecialDeductions,
    TaxBracketTable,
};

use super::base_pay::base_pay_at;
use super::net_salary::{assemble, taxable_income};
use super::overtime_pay::overtime_pay_at;
use super::{assess_income_tax, calculate_hourly_rate, calculate_social_insurance, overtime_lines};

/// The engine version stamped on every payslip.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calculates a payslip for one employee and period.
///
/// # Errors
///
/// Same as [`calculate_net_salary`](super::calculate_net_salary).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_payslip;
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
///
/// let payslip = build_payslip(
///     "emp_001",
///     &config,
///     &attendance,
///     &SpecialDeductions::default(),
///     default_tax_table(),
/// )
/// .unwrap();
/// assert_eq!(payslip.employee_id, "emp_001");
/// assert_eq!(payslip.audit_trace.steps.len(), 6);
/// ```
pub fn build_payslip(
    employee_id: &str,
    config: &PayrollConfig,
    attendance: &AttendanceRecord,
    deductions: &SpecialDeductions,
    table: &TaxBracketTable,
) -> EngineResult<Payslip> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(6);

    let hourly_rate = calculate_hourly_rate(config)?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        input: serde_json::json!({
            "base_salary": config.base_salary.to_string(),
            "full_month_hours": config.full_month_hours.to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.to_string()
        }),
        reasoning: format!(
            "{} / {} hours = {} per hour (unrounded)",
            config.base_salary, config.full_month_hours, hourly_rate
        ),
    });

    let base_pay = base_pay_at(hourly_rate, attendance)?;
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        input: serde_json::json!({
            "work_hours": attendance.work_hours.to_string(),
            "absence_hours": attendance.absence_hours.to_string()
        }),
        output: serde_json::json!({
            "base_pay": base_pay.to_string()
        }),
        reasoning: format!(
            "hourly rate x ({} worked - {} absent) hours = {}",
            attendance.work_hours, attendance.absence_hours, base_pay
        ),
    });

    let lines = overtime_lines(hourly_rate, config, attendance)?;
    let overtime_pay = overtime_pay_at(hourly_rate, config, attendance)?;
    let line_summary: Vec<String> = lines
        .iter()
        .map(|line| {
            format!(
                "{} {}h x {}",
                line.category.as_str(),
                line.hours,
                line.multiplier
            )
        })
        .collect();
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "weekday_hours": attendance.overtime_weekday.to_string(),
            "weekend_hours": attendance.overtime_weekend.to_string(),
            "holiday_hours": attendance.overtime_holiday.to_string()
        }),
        output: serde_json::json!({
            "categories": lines
                .iter()
                .map(|line| serde_json::json!({
                    "category": line.category.as_str(),
                    "amount": line.amount.to_string()
                }))
                .collect::<Vec<_>>(),
            "overtime_pay": overtime_pay.to_string()
        }),
        reasoning: if lines.is_empty() {
            "No overtime recorded".to_string()
        } else {
            format!(
                "hourly rate x ({}), summed and rounded = {}",
                line_summary.join(" + "),
                overtime_pay
            )
        },
    });

    let withholding = calculate_social_insurance(config, base_pay)?;
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "social_insurance".to_string(),
        rule_name: "Social Insurance and Housing Fund".to_string(),
        input: serde_json::json!({
            "wage_base": base_pay.to_string(),
            "pension_rate": config.pension_rate.to_string(),
            "medical_rate": config.medical_rate.to_string(),
            "unemployment_rate": config.unemployment_rate.to_string(),
            "housing_fund_rate": config.housing_fund_rate.to_string()
        }),
        output: serde_json::json!({
            "social_insurance": withholding.social_insurance.to_string(),
            "housing_fund": withholding.housing_fund.to_string()
        }),
        reasoning: format!(
            "{} x ({} + {} + {}) = {}; {} x {} = {}",
            base_pay,
            config.pension_rate,
            config.medical_rate,
            config.unemployment_rate,
            withholding.social_insurance,
            base_pay,
            config.housing_fund_rate,
            withholding.housing_fund
        ),
    });

    let gross = base_pay.checked_add(overtime_pay)?;
    let taxable_gross = taxable_income(gross, &withholding)?;
    let assessment = assess_income_tax(taxable_gross, deductions, table)?;
    steps.push(AuditStep {
        step_number: 5,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "taxable_gross": taxable_gross.to_string(),
            "total_deductions": assessment.total_deductions.to_string()
        }),
        output: serde_json::json!({
            "taxable_income": assessment.taxable_income.to_string(),
            "bracket_threshold": assessment.bracket.map(|b| b.threshold.to_string()),
            "income_tax": assessment.tax.to_string()
        }),
        reasoning: match assessment.bracket {
            Some(bracket) => format!(
                "({} - {}) x {} - {} = {}",
                assessment.taxable_income,
                bracket.threshold,
                bracket.rate,
                bracket.deduction,
                assessment.tax
            ),
            None => format!(
                "Taxable income {} is not positive; no tax due",
                assessment.taxable_income
            ),
        },
    });

    let salary = assemble(base_pay, overtime_pay, withholding, assessment.tax)?;
    steps.push(AuditStep {
        step_number: 6,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross": salary.gross.to_string(),
            "insurance_and_fund": salary.insurance_and_fund.to_string(),
            "income_tax": salary.income_tax.to_string()
        }),
        output: serde_json::json!({
            "net": salary.net.to_string()
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            salary.gross, salary.insurance_and_fund, salary.income_tax, salary.net
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        employee_id = %employee_id,
        gross = %salary.gross,
        net = %salary.net,
        duration_us,
        "Payslip calculated"
    );

    Ok(Payslip {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_id: employee_id.to_string(),
        base_salary: config.base_salary,
        salary,
        audit_trace: AuditTrace { steps, duration_us },
    })
}
