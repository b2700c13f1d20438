//! Calculation logic for the Payroll Engine.
//!
//! This module contains the salary pipeline: hourly rate derivation,
//! absence-adjusted base pay, category-weighted overtime pay, social
//! insurance and housing fund withholding, progressive income tax, and the
//! orchestration that assembles them into a net salary and payslip.

mod base_pay;
mod hourly_rate;
mod income_tax;
mod net_salary;
mod overtime_pay;
mod payslip;
mod social_insurance;

pub use base_pay::calculate_base_pay;
pub use hourly_rate::calculate_hourly_rate;
pub use income_tax::{
    TaxAssessment, assess_income_tax, calculate_income_tax, calculate_income_tax_with_table,
};
pub use net_salary::{calculate_net_salary, calculate_net_salary_with_table};
pub use overtime_pay::{OvertimeLine, calculate_overtime_pay, overtime_lines};
pub use payslip::{ENGINE_VERSION, build_payslip};
pub use social_insurance::{Withholding, calculate_social_insurance};
