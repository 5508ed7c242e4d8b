//! Money value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative price held in the smallest currency unit (cents).
///
/// Decimal inputs are rounded to two places on the way in, so equality,
/// hashing and sums are exact.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal amount such as `15.99`.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_argument("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_argument("price cannot be negative"));
        }
        cents_from_f64((amount * 100.0).round())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_argument("price is too large"))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Line total for `quantity` units, `None` on overflow.
    pub fn checked_times(self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(quantity)).map(Price)
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Fixed two-decimal rendering with the given decimal separator
    /// (`137,97`, `0,00`).
    pub fn format_fixed(&self, decimal_separator: char) -> String {
        format!("{}{}{:02}", self.0 / 100, decimal_separator, self.0 % 100)
    }
}

/// Whole cents from an already rounded float, `None` past `u64::MAX`.
///
/// `u64::MAX as f64` rounds up to 2^64, so the bound must be exclusive.
fn cents_from_f64(cents: f64) -> Option<u64> {
    (cents < u64::MAX as f64).then_some(cents as u64)
}

/// Prices from this many units upward print in scientific form.
const SCIENTIFIC_THRESHOLD: u64 = 10_000_000;

/// Receipt line form: `45.0`, `15.9`, `15.99` below ten million units,
/// `1.0E7`, `1.23456789E7` from there on.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let units = self.0 / 100;
        let fraction = self.0 % 100;
        if units >= SCIENTIFIC_THRESHOLD {
            return write_scientific(f, self.0);
        }
        if fraction % 10 == 0 {
            write!(f, "{}.{}", units, fraction / 10)
        } else {
            write!(f, "{}.{:02}", units, fraction)
        }
    }
}

/// `d.dddE<exp>` with the significant digits of `cents / 100`.
fn write_scientific(f: &mut core::fmt::Formatter<'_>, cents: u64) -> core::fmt::Result {
    let all_digits = cents.to_string();
    // Two of the digits are the cents.
    let exponent = all_digits.len() - 3;
    let significant = all_digits.trim_end_matches('0');
    let (lead, rest) = significant.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    write!(f, "{lead}.{rest}E{exponent}")
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_decimal()
    }
}
