//! Core data models for the Payroll Engine.
//!
//! This module contains the value types, inputs and results used
//! throughout the engine.

mod attendance;
mod deductions;
mod money;
mod payroll_config;
mod payslip;
mod tax_bracket;

pub use attendance::{AttendanceRecord, OvertimeCategory};
pub use deductions::SpecialDeductions;
pub use money::{HourlyRate, Hours, MONEY_DECIMAL_PLACES, Money, Rate};
pub use payroll_config::PayrollConfig;
pub use payslip::{AuditStep, AuditTrace, NetSalary, Payslip};
pub use tax_bracket::{TaxBracket, TaxBracketTable, default_tax_table};
