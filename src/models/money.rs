//! Exact decimal value types for payroll arithmetic.
//!
//! [`Money`], [`Hours`], [`Rate`] and [`HourlyRate`] are distinct wrappers over
//! [`rust_decimal::Decimal`]. Only the combinations that make sense in a payroll
//! calculation are implemented, so mixing units (adding hours to money, say)
//! fails to compile.
//!
//! Money is always expressed in minor units (cents). Computation rounding is
//! half-away-from-zero; half-to-even rounding is reserved for display and lives
//! in [`crate::format`].
//!
//! The `+` and `-` operators panic when the result leaves the `Decimal`
//! range. The calculators use the `checked_*` methods, which report
//! [`EngineError::CalculationError`] instead.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of decimal places money amounts are rounded to during computation.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// A currency amount in minor units (e.g. cents).
///
/// # Example
///
/// ```
/// use payroll_engine::models::Money;
/// use std::str::FromStr;
///
/// let amount = Money::from_str("100.005").unwrap();
/// assert_eq!(amount.round_to_cents(), Money::from_str("100.01").unwrap());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero minor units.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wraps a decimal amount of minor units.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from a whole number of minor units.
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to `dp` decimal places, midpoints away from zero.
    pub fn round_dp(self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds to [`MONEY_DECIMAL_PLACES`], midpoints away from zero.
    pub fn round_to_cents(self) -> Self {
        self.round_dp(MONEY_DECIMAL_PLACES)
    }

    /// Divides this amount over a number of hours without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `hours` is zero, and
    /// [`EngineError::CalculationError`] if the quotient overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Hours, Money};
    ///
    /// let rate = Money::from_minor_units(800000).per_hour(Hours::from(160)).unwrap();
    /// assert_eq!(rate.amount().to_string(), "5000");
    ///
    /// assert!(Money::from_minor_units(800000).per_hour(Hours::ZERO).is_err());
    /// ```
    pub fn per_hour(self, hours: Hours) -> EngineResult<HourlyRate> {
        if hours.is_zero() {
            return Err(EngineError::DivisionByZero { dividend: self.0 });
        }

        self.0
            .checked_div(hours.0)
            .map(HourlyRate)
            .ok_or_else(|| overflow(self.0, "/", hours.0))
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the sum overflows.
    pub fn checked_add(self, rhs: Money) -> EngineResult<Money> {
        self.0
            .checked_add(rhs.0)
            .map(Money)
            .ok_or_else(|| overflow(self.0, "+", rhs.0))
    }

    /// Subtracts `rhs` from this amount.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the difference overflows.
    pub fn checked_sub(self, rhs: Money) -> EngineResult<Money> {
        self.0
            .checked_sub(rhs.0)
            .map(Money)
            .ok_or_else(|| overflow(self.0, "-", rhs.0))
    }

    /// Applies a rate to this amount.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the product overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Money, Rate};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let rate = Rate::from_str("0.08").unwrap();
    /// assert_eq!(
    ///     Money::from_minor_units(800000).checked_mul(rate).unwrap(),
    ///     Money::from_minor_units(64000)
    /// );
    /// assert!(Money::new(Decimal::MAX).checked_mul(Rate::from_str("2").unwrap()).is_err());
    /// ```
    pub fn checked_mul(self, rate: Rate) -> EngineResult<Money> {
        self.0
            .checked_mul(rate.0)
            .map(Money)
            .ok_or_else(|| overflow(self.0, "*", rate.0))
    }

    /// Sums amounts, stopping at the first overflow.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the running total overflows.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> EngineResult<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }
}

fn overflow(lhs: Decimal, op: &str, rhs: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} {} {} overflowed", lhs, op, rhs),
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}


/// Elapsed work time in hours.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hours(Decimal);

impl Hours {
    /// Zero hours.
    pub const ZERO: Hours = Hours(Decimal::ZERO);

    /// Wraps a decimal number of hours.
    pub const fn new(hours: Decimal) -> Self {
        Self(hours)
    }

    /// Returns the underlying decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if no time is recorded.
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Hours {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl From<Decimal> for Hours {
    fn from(hours: Decimal) -> Self {
        Self(hours)
    }
}

impl From<u32> for Hours {
    fn from(hours: u32) -> Self {
        Self(Decimal::from(hours))
    }
}

impl Sub for Hours {
    type Output = Hours;

    fn sub(self, rhs: Hours) -> Hours {
        Hours(self.0 - rhs.0)
    }
}

/// A decimal fraction or multiplier (0.08 is 8%, 1.5 is 150%).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// A rate of zero.
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Wraps a decimal rate.
    pub const fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    /// Returns the underlying decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the rate is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Rate {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl From<Decimal> for Rate {
    fn from(rate: Decimal) -> Self {
        Self(rate)
    }
}

/// Money earned per hour, kept at full precision.
///
/// Produced only by [`Money::per_hour`]. [`HourlyRate::checked_mul`] by
/// [`Hours`] gives [`Money`]; nothing rounds the rate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HourlyRate(Decimal);

impl HourlyRate {
    /// Returns the underlying decimal value.
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Pays this rate for a number of hours, unrounded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the product overflows.
    pub fn checked_mul(self, hours: Hours) -> EngineResult<Money> {
        self.0
            .checked_mul(hours.0)
            .map(Money)
            .ok_or_else(|| overflow(self.0, "*", hours.0))
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(money("100.005").round_to_cents(), money("100.01"));
        assert_eq!(money("-100.005").round_to_cents(), money("-100.01"));
    }

    #[test]
    fn test_below_half_cent_rounds_down() {
        assert_eq!(money("100.00499").round_to_cents(), money("100.00"));
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(money("800000"), money("800000.00"));
    }

    #[test]
    fn test_per_hour_keeps_full_precision() {
        let rate = Money::from_minor_units(800000)
            .per_hour(Hours::from(174))
            .unwrap();
        assert!(rate.amount().scale() > 20);
        assert!(rate.amount().to_string().starts_with("4597.70114942528735632183"));
        assert_eq!(
            rate.checked_mul(Hours::from(174)).unwrap().round_to_cents(),
            money("800000")
        );
    }

    #[test]
    fn test_per_hour_zero_hours_is_division_by_zero() {
        let result = Money::from_minor_units(800000).per_hour(Hours::ZERO);
        match result {
            Err(EngineError::DivisionByZero { dividend }) => {
                assert_eq!(dividend, Decimal::from(800000));
            }
            other => panic!("Expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_hourly_rate_times_hours_is_money() {
        let rate = Money::from_minor_units(5000)
            .per_hour(Hours::from(2))
            .unwrap();
        assert_eq!(
            rate.checked_mul(Hours::from_str("1.5").unwrap()).unwrap(),
            money("3750")
        );
    }

    #[test]
    fn test_money_times_rate() {
        assert_eq!(
            money("800000").checked_mul(Rate::from_str("0.08").unwrap()).unwrap(),
            money("64000")
        );
    }

    #[test]
    fn test_money_checked_sum() {
        let total = Money::checked_sum([money("1.10"), money("2.20"), money("3.30")]).unwrap();
        assert_eq!(total, money("6.60"));
    }

    #[test]
    fn test_checked_operations_report_overflow() {
        let max = Money::new(Decimal::MAX);

        match max.checked_add(Money::from_minor_units(1)) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("overflowed"), "{}", message);
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
        assert!(Money::new(Decimal::MIN).checked_sub(Money::from_minor_units(1)).is_err());
        assert!(max.checked_mul(Rate::from_str("1.5").unwrap()).is_err());
        assert!(Money::checked_sum([max, max]).is_err());
    }

    #[test]
    fn test_hourly_rate_checked_mul_overflow() {
        let rate = Money::new(Decimal::MAX).per_hour(Hours::from(1)).unwrap();
        assert!(rate.checked_mul(Hours::from(2)).is_err());
        assert_eq!(
            rate.checked_mul(Hours::from(1)).unwrap(),
            Money::new(Decimal::MAX)
        );
    }

    #[test]
    fn test_checked_operations_match_operators_in_range() {
        let a = money("800000");
        let b = money("0.01");
        assert_eq!(a.checked_add(b).unwrap(), a + b);
        assert_eq!(a.checked_sub(b).unwrap(), a - b);
    }

    #[test]
    fn test_money_serializes_as_string() {
        let json = serde_json::to_string(&money("123.45")).unwrap();
        assert_eq!(json, "\"123.45\"");

        let parsed: Money = serde_json::from_str("\"10000\"").unwrap();
        assert_eq!(parsed, Money::from_minor_units(10000));
    }

    #[test]
    fn test_negative_checks() {
        assert!(money("-0.01").is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Rate::from_str("-0.5").unwrap().is_negative());
    }
}
