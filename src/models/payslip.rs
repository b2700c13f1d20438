//! Salary result models for the Payroll Engine.
//!
//! This module contains [`NetSalary`], the figures produced by one salary
//! calculation, and [`Payslip`], which wraps them with identifying metadata
//! and an audit trace of how each figure was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Money;

/// Every total produced while computing a net salary.
///
/// `gross`, `net`, `insurance_and_fund` and `income_tax` are the headline
/// figures; the rest are the intermediate totals they were assembled from.
///
/// Invariants:
/// - `gross == base_pay + overtime_pay`
/// - `insurance_and_fund == social_insurance + housing_fund`
/// - `taxable_income == gross - insurance_and_fund`
/// - `net == gross - insurance_and_fund - income_tax`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalary {
    /// Base pay after absence deduction.
    pub base_pay: Money,
    /// Overtime pay across all categories.
    pub overtime_pay: Money,
    /// Base pay plus overtime pay.
    pub gross: Money,
    /// Pension, medical and unemployment insurance combined.
    pub social_insurance: Money,
    /// Housing provident fund contribution.
    pub housing_fund: Money,
    /// Social insurance plus housing fund.
    pub insurance_and_fund: Money,
    /// Gross pay less withholding, before special deductions.
    pub taxable_income: Money,
    /// Individual income tax.
    pub income_tax: Money,
    /// Take-home pay.
    pub net: Money,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// salary pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Identifier of the stage (e.g. "overtime_pay").
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary calculation for one employee and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The contracted base salary the calculation started from.
    pub base_salary: Money,
    /// The computed figures.
    pub salary: NetSalary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
