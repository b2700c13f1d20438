//! Request types for the Payroll Engine API.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Money, PayrollConfig, SpecialDeductions};

/// Request body for the `/calculate` endpoint.
///
/// Only `employee_id` is required. Missing attendance fields default to zero
/// hours and missing deductions default to zero.
///
/// # Example
///
/// ```
/// use payroll_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(r#"{
///     "employee_id": "emp_001",
///     "attendance": { "work_hours": "174", "overtime_weekday": "1" }
/// }"#).unwrap();
/// assert!(request.base_salary.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Identifier echoed back on the payslip.
    pub employee_id: String,
    /// Overrides the configured base salary for this calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<Money>,
    /// Hours worked, overtime by category, and absence for the period.
    #[serde(default)]
    pub attendance: AttendanceRecord,
    /// Special additional deductions claimed for the period.
    #[serde(default)]
    pub deductions: SpecialDeductions,
}

impl CalculationRequest {
    /// Returns the payroll policy for this request, applying the
    /// `base_salary` override when present.
    pub fn effective_config(&self, configured: &PayrollConfig) -> PayrollConfig {
        match self.base_salary {
            Some(base_salary) => configured.with_base_salary(base_salary),
            None => configured.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hours;
    use std::str::FromStr;

    fn create_config() -> PayrollConfig {
        crate::config::ConfigLoader::load("./config/default")
            .unwrap()
            .payroll_config()
            .clone()
    }

    #[test]
    fn test_minimal_request_uses_defaults() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"employee_id": "emp_001"}"#).unwrap();

        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.attendance, AttendanceRecord::default());
        assert_eq!(request.deductions.total().unwrap(), Money::ZERO);
    }

    #[test]
    fn test_missing_employee_id_is_rejected() {
        let result: Result<CalculationRequest, _> =
            serde_json::from_str(r#"{"attendance": {"work_hours": "174"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_amounts_parse_from_strings() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "employee_id": "emp_002",
                "base_salary": "650000",
                "attendance": {"work_hours": "174", "absence_hours": "8.5"},
                "deductions": {"housing_rent": "150000"}
            }"#,
        )
        .unwrap();

        assert_eq!(request.base_salary, Some(Money::from_minor_units(650000)));
        assert_eq!(
            request.attendance.absence_hours,
            Hours::from_str("8.5").unwrap()
        );
        assert_eq!(
            request.deductions.housing_rent,
            Money::from_minor_units(150000)
        );
    }

    #[test]
    fn test_effective_config_applies_override() {
        let configured = create_config();
        let mut request: CalculationRequest =
            serde_json::from_str(r#"{"employee_id": "emp_001"}"#).unwrap();

        assert_eq!(request.effective_config(&configured), configured);

        request.base_salary = Some(Money::from_minor_units(500000));
        let effective = request.effective_config(&configured);
        assert_eq!(effective.base_salary, Money::from_minor_units(500000));
        assert_eq!(effective.full_month_hours, configured.full_month_hours);
    }
}
