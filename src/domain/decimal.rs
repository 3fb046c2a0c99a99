//! Lossless decimal numeric type backed by rust_decimal.
//!
//! Every amount, price, rate, percentage and chart angle in the crate is a
//! `Decimal`. Division by zero is never performed implicitly; callers that can
//! see a zero divisor use [`Decimal::checked_div_or_zero`].
//!
//! Arithmetic saturates: a result outside the representable range clamps to
//! `rust_decimal::Decimal::MAX` or `MIN` by the sign the exact result would
//! have had, so long-running compounding never panics.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal as RustDecimal;
use rust_decimal::{MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Lossless decimal numeric type for financial calculations.
///
/// Serializes to a JSON number (not a string).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    pub const fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Build from an `f64` coming off a JSON feed. Non-finite input maps to zero.
    pub fn from_f64_lossy(value: f64) -> Self {
        RustDecimal::from_f64_retain(value)
            .map(Decimal)
            .unwrap_or_default()
    }

    /// Format without exponent notation and without trailing zeros.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    pub fn one() -> Self {
        Decimal(RustDecimal::ONE)
    }

    pub fn hundred() -> Self {
        Decimal(RustDecimal::ONE_HUNDRED)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is > 0.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    pub fn abs(&self) -> Self {
        Decimal(self.0.abs())
    }

    /// Round half away from zero to `dp` decimal places.
    pub fn round_dp(&self, dp: u32) -> Self {
        Decimal(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Integer power, saturating on overflow.
    pub fn powu(&self, exp: u64) -> Self {
        let negative = self.is_negative() && exp % 2 == 1;
        Decimal(
            self.0
                .checked_powu(exp)
                .unwrap_or_else(|| saturated(negative)),
        )
    }

    pub fn max_value() -> Self {
        Decimal(RustDecimal::MAX)
    }

    pub fn min_value() -> Self {
        Decimal(RustDecimal::MIN)
    }

    /// True when the value sits at either end of the representable range.
    pub fn is_saturated(&self) -> bool {
        self.0 == RustDecimal::MAX || self.0 == RustDecimal::MIN
    }

    /// `self / rhs`, or zero when `rhs` is zero.
    pub fn checked_div_or_zero(&self, rhs: Decimal) -> Self {
        self.0
            .checked_div(rhs.0)
            .map(Decimal)
            .unwrap_or_default()
    }

    /// Express `self` as a percentage of `whole` (`self / whole * 100`), zero when `whole` is zero.
    pub fn percent_of(&self, whole: Decimal) -> Self {
        self.checked_div_or_zero(whole) * Decimal::hundred()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

fn saturated(negative: bool) -> RustDecimal {
    if negative {
        RustDecimal::MIN
    } else {
        RustDecimal::MAX
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        // Overflow needs both operands on the same side of zero.
        Decimal(
            self.0
                .checked_add(rhs.0)
                .unwrap_or_else(|| saturated(self.is_negative())),
        )
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal(
            self.0
                .checked_sub(rhs.0)
                .unwrap_or_else(|| saturated(self.is_negative())),
        )
    }
}

impl std::ops::Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal(
            self.0
                .checked_mul(rhs.0)
                .unwrap_or_else(|| saturated(self.is_negative() != rhs.is_negative())),
        )
    }
}

impl std::ops::Div for Decimal {
    type Output = Decimal;

    /// A zero divisor yields zero, like [`Decimal::checked_div_or_zero`].
    fn div(self, rhs: Decimal) -> Decimal {
        if rhs.is_zero() {
            return Decimal::zero();
        }
        Decimal(
            self.0
                .checked_div(rhs.0)
                .unwrap_or_else(|| saturated(self.is_negative() != rhs.is_negative())),
        )
    }
}

impl std::ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_canonical_string_strips_trailing_zeros() {
        assert_eq!(d("92.500").to_canonical_string(), "92.5");
        assert_eq!(d("100.00").to_canonical_string(), "100");
        assert!(!d("0.0000001").to_canonical_string().contains('e'));
    }

    #[test]
    fn test_json_serializes_as_number() {
        let json = serde_json::to_value(d("123.456")).unwrap();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "123.456");
    }

    #[test]
    fn test_json_accepts_plain_numbers() {
        let parsed: Decimal = serde_json::from_str("30000").unwrap();
        assert_eq!(parsed, d("30000"));
        let parsed: Decimal = serde_json::from_str("0.5").unwrap();
        assert_eq!(parsed, d("0.5"));
    }

    #[test]
    fn test_checked_div_or_zero() {
        assert_eq!(d("10").checked_div_or_zero(d("4")), d("2.5"));
        assert_eq!(d("10").checked_div_or_zero(Decimal::zero()), Decimal::zero());
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(d("25").percent_of(d("200")), d("12.5"));
        assert_eq!(d("25").percent_of(Decimal::zero()), Decimal::zero());
    }

    #[test]
    fn test_powu() {
        assert_eq!(d("1.01").powu(0), Decimal::one());
        assert_eq!(d("1.1").powu(2), d("1.21"));
        assert_eq!(d("2").powu(10), d("1024"));
    }

    #[test]
    fn test_sum() {
        let values = vec![d("1.5"), d("2.25"), d("-0.75")];
        let total: Decimal = values.iter().sum();
        assert_eq!(total, d("3"));
        let empty: Vec<Decimal> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Decimal>(), Decimal::zero());
    }

    #[test]
    fn test_powu_saturates_by_sign() {
        assert_eq!(d("1000").powu(400), Decimal::max_value());
        assert_eq!(d("-1000").powu(400), Decimal::max_value());
        assert_eq!(d("-1000").powu(401), Decimal::min_value());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_panicking() {
        let max = Decimal::max_value();
        let min = Decimal::min_value();

        assert_eq!(max * d("2"), max);
        assert_eq!(max * d("-2"), min);
        assert_eq!(min * d("-2"), max);
        assert_eq!(max + max, max);
        assert_eq!(min + min, min);
        assert_eq!(min - max, min);
        assert_eq!(max - min, max);
        assert_eq!(max / d("0.5"), max);
        assert_eq!(min / d("0.5"), min);
        assert!((max * d("2")).is_saturated());

        let mut acc = max;
        acc += d("1");
        assert_eq!(acc, max);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Decimal = vec![Decimal::max_value(), d("1"), Decimal::max_value()]
            .into_iter()
            .sum();
        assert_eq!(total, Decimal::max_value());
    }

    #[test]
    fn test_div_by_zero_is_zero() {
        assert_eq!(d("5") / Decimal::zero(), Decimal::zero());
        assert_eq!(d("5") / d("2"), d("2.5"));
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(d("104.16666").round_dp(2), d("104.17"));
        assert_eq!(d("11.115").round_dp(2), d("11.12"));
    }

    #[test]
    fn test_from_f64_lossy() {
        assert_eq!(Decimal::from_f64_lossy(f64::NAN), Decimal::zero());
        assert_eq!(Decimal::from_f64_lossy(92.5), d("92.5"));
    }

    #[test]
    fn test_sign_helpers() {
        assert!(d("0.01").is_positive());
        assert!(!Decimal::zero().is_positive());
        assert!(!Decimal::zero().is_negative());
        assert!(d("-3").is_negative());
        assert_eq!(d("-3").abs(), d("3"));
    }
}
