//! HTTP API module for the Payroll Engine.
//!
//! Exposes `POST /calculate`, which computes a payslip from attendance and
//! special deductions against the loaded payroll policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, FormattedAmounts, PayslipResponse};
pub use state::AppState;
