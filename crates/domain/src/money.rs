// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use num_traits::ToPrimitive;

/// A non-negative monetary amount with two decimal places, stored as cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    cents: i64,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from a number of cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `cents` is negative.
    pub fn from_cents(cents: i64) -> Result<Self, DomainError> {
        if cents < 0 {
            return Err(DomainError::InvalidAmount(format!(
                "{cents} cents is negative"
            )));
        }
        Ok(Self { cents })
    }

    /// Creates an amount from a decimal value, rounding to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is negative, not
    /// finite, or too large to represent.
    pub fn from_decimal(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidAmount(format!(
                "{value} is not a non-negative number"
            )));
        }
        let cents = (value * 100.0)
            .round()
            .to_i64()
            .ok_or_else(|| DomainError::InvalidAmount(format!("{value} is too large")))?;
        Ok(Self { cents })
    }

    /// Parses a decimal amount, accepting either `.` or `,` as the separator.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the text is not a non-negative number.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let normalized = text.trim().replace(',', ".");
        let value: f64 = normalized
            .parse()
            .map_err(|_| DomainError::InvalidAmount(format!("'{text}' is not a number")))?;
        Self::from_decimal(value)
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` on overflow.
    pub fn checked_add(self, other: Self) -> Result<Self, DomainError> {
        self.cents
            .checked_add(other.cents)
            .map(|cents| Self { cents })
            .ok_or_else(|| DomainError::InvalidAmount(format!("{self} + {other} overflows")))
    }

    /// Signed difference `self - other`, in cents.
    #[must_use]
    pub const fn cents_minus(self, other: Self) -> i64 {
        self.cents - other.cents
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.cents == 0
    }

    /// Returns the amount as a decimal value.
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        cents_to_decimal(self.cents)
    }
}

/// Converts a signed count of cents, such as a profit, to a decimal value.
#[must_use]
pub fn cents_to_decimal(cents: i64) -> f64 {
    cents.to_f64().map_or(0.0, |cents| cents / 100.0)
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_rounds_to_cents() {
        assert_eq!(Amount::from_decimal(450.0).unwrap().cents(), 45_000);
        assert_eq!(Amount::from_decimal(0.105).unwrap().cents(), 11);
        assert_eq!(Amount::from_decimal(19.99).unwrap().to_string(), "19.99");
    }

    #[test]
    fn test_parse_accepts_comma_separator() {
        assert_eq!(Amount::parse("450,00").unwrap(), Amount::parse("450.00").unwrap());
        assert_eq!(Amount::parse(" 7,5 ").unwrap().to_string(), "7.50");
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        assert!(Amount::from_decimal(-0.01).is_err());
        assert!(Amount::from_decimal(f64::NAN).is_err());
        assert!(Amount::from_decimal(f64::INFINITY).is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::from_cents(-1).is_err());
    }

    #[test]
    fn test_checked_add_and_signed_difference() {
        let a = Amount::from_cents(1_050).unwrap();
        let b = Amount::from_cents(2_000).unwrap();

        assert_eq!(a.checked_add(b).unwrap().cents(), 3_050);
        assert_eq!(a.cents_minus(b), -950);
        assert!(Amount::from_cents(i64::MAX).unwrap().checked_add(a).is_err());
        assert!((cents_to_decimal(a.cents_minus(b)) + 9.5).abs() < f64::EPSILON);
    }
}
