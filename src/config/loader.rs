//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policy and tax brackets from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Hours, PayrollConfig, Rate, TaxBracketTable};

use super::types::{PayrollPolicy, TaxBracketsFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml       # Base salary, hours, insurance and overtime rates
/// └── tax_brackets.yaml  # Optional; the built-in table is used when absent
/// ```
///
/// Validation performed on load:
/// - base salary, full-month hours and every rate are non-negative
/// - the bracket table is non-empty, strictly ascending, starts at zero
///
/// A zero `full_month_hours` is accepted and reported by the calculation as
/// [`EngineError::DivisionByZero`].
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Base salary: {}", loader.payroll_config().base_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    payroll: PayrollConfig,
    tax_table: TaxBracketTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `payroll.yaml` is missing (`ConfigNotFound`)
    /// - a file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - a value is out of range (`InvalidConfig`, `InvalidBracketTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&payroll_path)?;
        let payroll: PayrollConfig = policy.into();
        Self::validate_payroll(&payroll)?;

        let brackets_path = path.join("tax_brackets.yaml");
        let tax_table = if brackets_path.exists() {
            let file = Self::load_yaml::<TaxBracketsFile>(&brackets_path)?;
            TaxBracketTable::new(file.brackets)?
        } else {
            debug!(path = %brackets_path.display(), "No tax bracket file, using built-in table");
            TaxBracketTable::reference()
        };
        Self::validate_tax_table(&tax_table)?;

        debug!(
            path = %path.display(),
            brackets = tax_table.len(),
            "Loaded payroll configuration"
        );

        Ok(Self { payroll, tax_table })
    }

    /// Creates a loader from already built parts, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(payroll: PayrollConfig, tax_table: TaxBracketTable) -> EngineResult<Self> {
        Self::validate_payroll(&payroll)?;
        Self::validate_tax_table(&tax_table)?;
        Ok(Self { payroll, tax_table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_payroll(payroll: &PayrollConfig) -> EngineResult<()> {
        if payroll.base_salary.is_negative() {
            return Err(EngineError::InvalidConfig {
                field: "base_salary".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if payroll.full_month_hours < Hours::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "full_month_hours".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let rates: [(&str, Rate); 7] = [
            ("insurance.pension", payroll.pension_rate),
            ("insurance.medical", payroll.medical_rate),
            ("insurance.unemployment", payroll.unemployment_rate),
            ("insurance.housing_fund", payroll.housing_fund_rate),
            ("overtime.weekday", payroll.overtime_weekday_rate),
            ("overtime.weekend", payroll.overtime_weekend_rate),
            ("overtime.holiday", payroll.overtime_holiday_rate),
        ];

        match rates.iter().find(|(_, rate)| rate.is_negative()) {
            Some((field, rate)) => Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("must not be negative, got {}", rate),
            }),
            None => Ok(()),
        }
    }

    fn validate_tax_table(table: &TaxBracketTable) -> EngineResult<()> {
        if !table.starts_at_zero() {
            return Err(EngineError::InvalidBracketTable {
                message: "the lowest bracket must start at a threshold of 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the payroll policy.
    pub fn payroll_config(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Returns the tax bracket table.
    pub fn tax_table(&self) -> &TaxBracketTable {
        &self.tax_table
    }
}
