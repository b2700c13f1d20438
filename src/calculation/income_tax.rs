//! Progressive individual income tax.
//!
//! Special deductions are subtracted from the taxable gross, the single
//! applicable bracket is found, and its quick-deduction formula is applied:
//!
//! ```text
//! tax = (taxable_income - threshold) * rate - deduction
//! ```
//!
//! Negative results clamp to zero and the tax is rounded to cents
//! half-away-from-zero.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Money, SpecialDeductions, TaxBracket, TaxBracketTable, default_tax_table};

/// How the income tax for a period was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Sum of the special deductions.
    pub total_deductions: Money,
    /// Taxable gross less special deductions.
    pub taxable_income: Money,
    /// The bracket applied, or `None` when taxable income was not positive.
    pub bracket: Option<TaxBracket>,
    /// The tax due, clamped at zero and rounded.
    pub tax: Money,
}

/// Calculates income tax against the process-wide default bracket table.
///
/// # Errors
///
/// Returns [`EngineError::NoBracketMatch`] if the income is positive but no
/// bracket threshold lies below it. The default table starts at zero, so
/// this cannot happen with it.
///
/// Returns [`EngineError::CalculationError`] if the deductions or the
/// bracket formula leave the decimal range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::models::{Money, SpecialDeductions};
///
/// // 5000 falls in the first bracket: 5000 * 0.03
/// let tax = calculate_income_tax(Money::from_minor_units(5000), &SpecialDeductions::default())
///     .unwrap();
/// assert_eq!(tax, Money::from_minor_units(150));
///
/// // Deductions larger than income leave nothing to tax
/// let deductions = SpecialDeductions {
///     housing_rent: Money::from_minor_units(150000),
///     ..Default::default()
/// };
/// let tax = calculate_income_tax(Money::from_minor_units(5000), &deductions).unwrap();
/// assert!(tax.is_zero());
/// ```
pub fn calculate_income_tax(
    taxable_gross: Money,
    deductions: &SpecialDeductions,
) -> EngineResult<Money> {
    calculate_income_tax_with_table(taxable_gross, deductions, default_tax_table())
}

/// Calculates income tax against an explicit bracket table.
///
/// # Errors
///
/// Returns [`EngineError::NoBracketMatch`] if the income is positive but no
/// bracket threshold lies below it, and [`EngineError::CalculationError`] on
/// arithmetic overflow.
pub fn calculate_income_tax_with_table(
    taxable_gross: Money,
    deductions: &SpecialDeductions,
    table: &TaxBracketTable,
) -> EngineResult<Money> {
    assess_income_tax(taxable_gross, deductions, table).map(|assessment| assessment.tax)
}

/// Calculates income tax and reports the bracket and intermediate figures.
///
/// # Errors
///
/// Returns [`EngineError::NoBracketMatch`] if the income is positive but no
/// bracket threshold lies below it, and [`EngineError::CalculationError`] on
/// arithmetic overflow.
pub fn assess_income_tax(
    taxable_gross: Money,
    deductions: &SpecialDeductions,
    table: &TaxBracketTable,
) -> EngineResult<TaxAssessment> {
    let total_deductions = deductions.total()?;
    let taxable_income = taxable_gross.checked_sub(total_deductions)?;

    if taxable_income <= Money::ZERO {
        return Ok(TaxAssessment {
            total_deductions,
            taxable_income,
            bracket: None,
            tax: Money::ZERO,
        });
    }

    let bracket = table
        .find_bracket(taxable_income)
        .ok_or_else(|| EngineError::NoBracketMatch {
            taxable_income: taxable_income.amount(),
        })?;

    let tax = bracket.tax_on(taxable_income)?.max(Money::ZERO);

    Ok(TaxAssessment {
        total_deductions,
        taxable_income,
        bracket: Some(*bracket),
        tax: tax.round_to_cents(),
    })
}
