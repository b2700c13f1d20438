//! Response types for the Payroll Engine API.
//!
//! This module defines the success body returned by `/calculate` and the
//! error body and status mapping used for every failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::format::format_currency;
use crate::models::Payslip;

/// Display strings for the headline figures of a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedAmounts {
    /// Contracted base salary.
    pub base_salary: String,
    /// Overtime pay.
    pub overtime_pay: String,
    /// Gross pay.
    pub gross: String,
    /// Social insurance plus housing fund.
    pub insurance_and_fund: String,
    /// Income tax.
    pub income_tax: String,
    /// Net pay.
    pub net: String,
}

impl From<&Payslip> for FormattedAmounts {
    fn from(payslip: &Payslip) -> Self {
        let salary = &payslip.salary;
        Self {
            base_salary: format_currency(payslip.base_salary),
            overtime_pay: format_currency(salary.overtime_pay),
            gross: format_currency(salary.gross),
            insurance_and_fund: format_currency(salary.insurance_and_fund),
            income_tax: format_currency(salary.income_tax),
            net: format_currency(salary.net),
        }
    }
}

/// Success body for `/calculate`: the payslip with display strings alongside.
#[derive(Debug, Clone, Serialize)]
pub struct PayslipResponse {
    /// The computed payslip.
    #[serde(flatten)]
    pub payslip: Payslip,
    /// Display strings for the headline figures.
    pub formatted: FormattedAmounts,
}

impl From<Payslip> for PayslipResponse {
    fn from(payslip: Payslip) -> Self {
        let formatted = FormattedAmounts::from(&payslip);
        Self { payslip, formatted }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::DivisionByZero { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "DIVISION_BY_ZERO",
                    message,
                    "The configured full-month hours must be greater than zero",
                ),
            },
            EngineError::NoBracketMatch { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_BRACKET_MATCH",
                    message,
                    "The tax bracket table does not cover this taxable income",
                ),
            },
            EngineError::InvalidBracketTable { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
