//! Configuration loading for the Payroll Engine.
//!
//! Payroll policy (base salary, hours, insurance and overtime rates) and the
//! tax bracket table are loaded from YAML files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Brackets: {}", config.tax_table().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InsuranceRates, OvertimeMultipliers, PayrollPolicy, TaxBracketsFile};
