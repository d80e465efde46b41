//! # Money Module
//!
//! Provides the `Money` type for room prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats, "total == rate × nights" only holds by luck once a       │
//! │  price has been through a text file and back.                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Single, 3 nights = 40000 cents × 3 = 120000 cents, exactly           │
//! │    bookings.txt stores "1200.00" and parses back to 120000             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rasa_core::money::Money;
//!
//! let rate = Money::from_major_minor(400, 0);
//! let total = rate * 3u32;
//! assert_eq!(total.to_decimal_string(), "1200.00");
//! assert_eq!(Money::parse_decimal("1200.000000"), Some(total));
//! ```

use std::fmt;
use std::ops::Mul;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so that arithmetic on differences never underflows, although
/// every room price is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Formats as a plain decimal with two fractional digits, e.g. `1200.00`.
    ///
    /// This is the form written to `bookings.txt`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }

    /// Parses a decimal such as `1200`, `1200.5` or `1200.000000`.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - At least one digit before the point
    /// - Any number of fractional digits; the third and later digits are
    ///   rounded half-up into the cents
    /// - Surrounding whitespace is ignored
    ///
    /// Returns `None` for anything else (including exponent notation).
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = whole.parse().ok()?;
        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map_or(0, |b| i64::from(b - b'0'));

        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = whole.checked_mul(100)?.checked_add(cents)?;
        Some(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money with a dollar sign, as the front desk prints prices.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

/// Multiplication by a night count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: u32) -> Self {
        Money(self.0 * i64::from(nights))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(text: &str) -> Option<i64> {
        Money::parse_decimal(text).map(|m| m.cents())
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major_minor(1200, 0)), "$1200.00");
        assert_eq!(format!("{}", Money::from_major_minor(5, 5)), "$5.05");
        assert_eq!(format!("{}", Money::from_major_minor(-5, 50)), "-$5.50");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_major_minor(1200, 0).to_decimal_string(), "1200.00");
        assert_eq!(Money::from_major_minor(0, 7).to_decimal_string(), "0.07");
        assert_eq!(Money::from_major_minor(0, 0).to_decimal_string(), "0.00");
    }

    #[test]
    fn test_parse_decimal_accepts_legacy_precision() {
        assert_eq!(cents("1200.000000"), Some(120_000));
        assert_eq!(cents("1200.00"), Some(120_000));
        assert_eq!(cents("1200"), Some(120_000));
        assert_eq!(cents("12.5"), Some(1250));
        assert_eq!(cents(" 0.07 "), Some(7));
        assert_eq!(cents("-5.50"), Some(-550));
    }

    #[test]
    fn test_parse_decimal_rounds_extra_digits() {
        assert_eq!(cents("3.333333"), Some(333));
        assert_eq!(cents("2.005"), Some(201));
        assert_eq!(cents("9.999"), Some(1000));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(cents(""), None);
        assert_eq!(cents(".50"), None);
        assert_eq!(cents("12a.00"), None);
        assert_eq!(cents("1e3"), None);
        assert_eq!(cents("1.2.3"), None);
    }

    #[test]
    fn test_price_for_nights() {
        let rate = Money::from_major_minor(400, 0);
        assert_eq!((rate * 3u32).cents(), 120_000);
        assert_eq!((rate * 0u32).to_decimal_string(), "0.00");
    }
}
