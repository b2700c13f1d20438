//! Payroll Engine
//!
//! This crate computes an employee's monthly net salary from a base salary,
//! attendance, overtime, social insurance and housing fund contributions,
//! special deductions and a progressive income tax bracket table. All
//! arithmetic uses exact decimals; monetary amounts are in minor units.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
