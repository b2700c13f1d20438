//! Special additional deductions for individual income tax.

use serde::{Deserialize, Serialize};

use super::Money;
use crate::error::EngineResult;

/// The five special deductions an employee can elect, in minor units.
///
/// Amounts are summed as given. Statutory caps are the caller's concern.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Money, SpecialDeductions};
///
/// let deductions = SpecialDeductions {
///     housing_loan_interest: Money::from_minor_units(10000),
///     support_elderly: Money::from_minor_units(20000),
///     ..Default::default()
/// };
/// assert_eq!(deductions.total().unwrap(), Money::from_minor_units(30000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDeductions {
    /// Children's education.
    #[serde(default)]
    pub children_education: Money,
    /// Continuing education.
    #[serde(default)]
    pub continuing_education: Money,
    /// Interest on a first-home loan.
    #[serde(default)]
    pub housing_loan_interest: Money,
    /// Housing rent.
    #[serde(default)]
    pub housing_rent: Money,
    /// Support for elderly parents.
    #[serde(default)]
    pub support_elderly: Money,
}

impl SpecialDeductions {
    /// Returns the sum of all five deductions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::CalculationError`] if the sum
    /// overflows.
    pub fn total(&self) -> EngineResult<Money> {
        Money::checked_sum([
            self.children_education,
            self.continuing_education,
            self.housing_loan_interest,
            self.housing_rent,
            self.support_elderly,
        ])
    }
}
