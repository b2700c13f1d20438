//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files in a configuration directory.

use serde::Deserialize;

use crate::models::{Hours, Money, PayrollConfig, Rate, TaxBracket};

/// Contribution rates withheld from base pay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsuranceRates {
    /// Pension insurance rate.
    pub pension: Rate,
    /// Medical insurance rate.
    pub medical: Rate,
    /// Unemployment insurance rate.
    pub unemployment: Rate,
    /// Housing provident fund rate.
    pub housing_fund: Rate,
}

/// Overtime multipliers by category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeMultipliers {
    /// Weekday overtime multiplier.
    pub weekday: Rate,
    /// Weekend overtime multiplier.
    pub weekend: Rate,
    /// Public holiday overtime multiplier.
    pub holiday: Rate,
}

/// The contents of `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollPolicy {
    /// Monthly base salary in minor units.
    pub base_salary: Money,
    /// Standard working hours in a full month.
    pub full_month_hours: Hours,
    /// Insurance and housing fund rates.
    pub insurance: InsuranceRates,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
}

impl From<PayrollPolicy> for PayrollConfig {
    fn from(policy: PayrollPolicy) -> Self {
        PayrollConfig {
            base_salary: policy.base_salary,
            full_month_hours: policy.full_month_hours,
            pension_rate: policy.insurance.pension,
            medical_rate: policy.insurance.medical,
            unemployment_rate: policy.insurance.unemployment,
            housing_fund_rate: policy.insurance.housing_fund,
            overtime_weekday_rate: policy.overtime.weekday,
            overtime_weekend_rate: policy.overtime.weekend,
            overtime_holiday_rate: policy.overtime.holiday,
        }
    }
}

/// The contents of `tax_brackets.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracketsFile {
    /// Brackets in ascending threshold order.
    pub brackets: Vec<TaxBracket>,
}
