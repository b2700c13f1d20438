//! Progressive income tax brackets.
//!
//! A [`TaxBracketTable`] is an ascending, immutable list of [`TaxBracket`]s.
//! The engine applies exactly one bracket to a taxable income: the one with
//! the highest threshold strictly below it.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Money, Rate};

/// The table used when no other is supplied, shared read-only by every
/// calculation in the process.
static DEFAULT_TABLE: Lazy<TaxBracketTable> = Lazy::new(TaxBracketTable::reference);

/// Returns the process-wide default table ([`TaxBracketTable::reference`]).
pub fn default_tax_table() -> &'static TaxBracketTable {
    &DEFAULT_TABLE
}

/// A single progressive-tax bracket.
///
/// Tax for an income `x` falling in this bracket is
/// `(x - threshold) * rate - deduction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Taxable-income floor above which this bracket applies.
    pub threshold: Money,
    /// Marginal rate.
    pub rate: Rate,
    /// Quick deduction subtracted after applying the rate.
    pub deduction: Money,
}

impl TaxBracket {
    /// Creates a bracket.
    pub const fn new(threshold: Money, rate: Rate, deduction: Money) -> Self {
        Self {
            threshold,
            rate,
            deduction,
        }
    }

    /// Applies this bracket's formula to a taxable income, unclamped and
    /// unrounded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if an intermediate amount
    /// overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Money, Rate, TaxBracket};
    /// use std::str::FromStr;
    ///
    /// let bracket = TaxBracket::new(
    ///     Money::from_minor_units(6000),
    ///     Rate::from_str("1.45").unwrap(),
    ///     Money::from_minor_units(2520),
    /// );
    /// assert_eq!(
    ///     bracket.tax_on(Money::from_minor_units(10000)).unwrap(),
    ///     Money::from_minor_units(3280)
    /// );
    /// ```
    pub fn tax_on(&self, taxable_income: Money) -> EngineResult<Money> {
        taxable_income
            .checked_sub(self.threshold)?
            .checked_mul(self.rate)?
            .checked_sub(self.deduction)
    }
}

/// An ordered set of brackets, ascending by threshold.
///
/// Thresholds are strictly increasing and rates are non-negative. Tables
/// loaded from configuration additionally start at a zero threshold, so
/// every positive income finds a bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

/// The seven-rate monthly schedule in cents: threshold, percent, and the
/// deduction [`TaxBracketTable::from_marginal_rates`] derives for it.
const STATUTORY_MONTHLY: [(i64, i64, i64); 7] = [
    (0, 3, 0),
    (300_000, 10, -9_000),
    (1_200_000, 20, -99_000),
    (2_500_000, 25, -359_000),
    (3_500_000, 30, -609_000),
    (5_500_000, 35, -1_209_000),
    (8_000_000, 45, -2_084_000),
];

impl TaxBracketTable {
    /// Creates a table from brackets already sorted by threshold.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] if the list is empty,
    /// thresholds are not strictly increasing, or a rate is negative.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidBracketTable {
                message: "at least one bracket is required".to_string(),
            });
        }

        if let Some(bracket) = brackets.iter().find(|b| b.rate.is_negative()) {
            return Err(EngineError::InvalidBracketTable {
                message: format!(
                    "bracket at threshold {} has negative rate {}",
                    bracket.threshold, bracket.rate
                ),
            });
        }

        if let Some(pair) = brackets
            .windows(2)
            .find(|pair| pair[0].threshold >= pair[1].threshold)
        {
            return Err(EngineError::InvalidBracketTable {
                message: format!(
                    "thresholds must be strictly increasing: {} is followed by {}",
                    pair[0].threshold, pair[1].threshold
                ),
            });
        }

        Ok(Self { brackets })
    }

    /// The three-bracket table the engine uses by default.
    ///
    /// | threshold | rate | deduction |
    /// |-----------|------|-----------|
    /// | 0         | 0.03 | 0         |
    /// | 6000      | 1.45 | 2520      |
    /// | 1440000   | 0.80 | 16920     |
    pub fn reference() -> Self {
        let bracket = |threshold: i64, rate: Decimal, deduction: i64| {
            TaxBracket::new(
                Money::from_minor_units(threshold),
                Rate::new(rate),
                Money::from_minor_units(deduction),
            )
        };

        Self {
            brackets: vec![
                bracket(0, Decimal::new(3, 2), 0),
                bracket(6000, Decimal::new(145, 2), 2520),
                bracket(1_440_000, Decimal::new(80, 2), 16920),
            ],
        }
    }

    /// Builds a continuous schedule from `(threshold, marginal rate)` slices.
    ///
    /// Each bracket's deduction is the negated tax accumulated on the slices
    /// below its threshold, so `(x - threshold) * rate - deduction` equals the
    /// slice-by-slice tax and the schedule never jumps at a threshold.
    ///
    /// # Errors
    ///
    /// Same validation as [`TaxBracketTable::new`], plus
    /// [`EngineError::CalculationError`] if an accumulated deduction
    /// overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Money, Rate, TaxBracketTable};
    /// use std::str::FromStr;
    ///
    /// let table = TaxBracketTable::from_marginal_rates(&[
    ///     (Money::ZERO, Rate::from_str("0.10").unwrap()),
    ///     (Money::from_minor_units(1000), Rate::from_str("0.20").unwrap()),
    /// ])
    /// .unwrap();
    ///
    /// // 1000 at 10% below the second threshold
    /// assert_eq!(table.brackets()[1].deduction, Money::from_minor_units(-100));
    /// ```
    pub fn from_marginal_rates(slices: &[(Money, Rate)]) -> EngineResult<Self> {
        Self::new(
            slices
                .iter()
                .map(|(threshold, rate)| TaxBracket::new(*threshold, *rate, Money::ZERO))
                .collect(),
        )?;

        Ok(Self {
            brackets: derive_deductions(slices)?,
        })
    }

    /// The seven-rate monthly schedule (3% to 45%) in cents, with
    /// continuous deductions.
    pub fn statutory_monthly() -> Self {
        Self {
            brackets: STATUTORY_MONTHLY
                .iter()
                .map(|(threshold, percent, deduction)| {
                    TaxBracket::new(
                        Money::from_minor_units(*threshold),
                        Rate::new(Decimal::new(*percent, 2)),
                        Money::from_minor_units(*deduction),
                    )
                })
                .collect(),
        }
    }

    /// Returns the brackets in ascending threshold order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the number of brackets.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Returns true if the table has no brackets. Never true for a table
    /// built through [`TaxBracketTable::new`].
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Returns true if the lowest bracket starts at zero.
    pub fn starts_at_zero(&self) -> bool {
        self.brackets
            .first()
            .is_some_and(|b| b.threshold.is_zero())
    }

    /// Finds the bracket with the highest threshold strictly below
    /// `taxable_income`.
    ///
    /// Binary search over the ascending table; equivalent to scanning from
    /// the highest threshold down and taking the first match.
    pub fn find_bracket(&self, taxable_income: Money) -> Option<&TaxBracket> {
        let above = self
            .brackets
            .partition_point(|b| b.threshold < taxable_income);
        above.checked_sub(1).map(|index| &self.brackets[index])
    }
}

fn derive_deductions(slices: &[(Money, Rate)]) -> EngineResult<Vec<TaxBracket>> {
    let mut accumulated = Money::ZERO;
    let mut brackets = Vec::with_capacity(slices.len());

    for (index, (threshold, rate)) in slices.iter().enumerate() {
        if index > 0 {
            let (lower_threshold, lower_rate) = slices[index - 1];
            let slice_tax = threshold
                .checked_sub(lower_threshold)?
                .checked_mul(lower_rate)?;
            accumulated = accumulated.checked_add(slice_tax)?;
        }
        brackets.push(TaxBracket::new(
            *threshold,
            *rate,
            Money::ZERO.checked_sub(accumulated)?,
        ));
    }

    Ok(brackets)
}
