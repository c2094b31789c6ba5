//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kwacha                                           │
//! │    Rates are quoted in whole Kwacha (K50,000 per night), so the        │
//! │    smallest unit we ever handle IS the major unit. All arithmetic      │
//! │    stays in i64 and every total is exact.                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lodge_core::money::Money;
//!
//! // Create from whole Kwacha
//! let rate = Money::from_kwacha(50_000);
//!
//! // Arithmetic operations
//! let three_nights = rate * 3;                   // K150,000
//! let with_extra = rate + Money::from_kwacha(5_000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(50000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Kwacha.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  RateTable entry ──► Quote.nightly_rate ──► Quote.total                 │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole Kwacha.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    ///
    /// let rate = Money::from_kwacha(75_000);
    /// assert_eq!(rate.kwacha(), 75_000);
    /// ```
    #[inline]
    pub const fn from_kwacha(kwacha: i64) -> Self {
        Money(kwacha)
    }

    /// Returns the value in whole Kwacha.
    #[inline]
    pub const fn kwacha(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a nightly rate by a night count.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    ///
    /// let nightly = Money::from_kwacha(75_000);
    /// let total = nightly.multiply_nights(3);
    /// assert_eq!(total.kwacha(), 225_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Executive Suite, Double: K75,000/night
    /// Nights: 3
    ///      │
    ///      ▼
    /// multiply_nights(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Total: K225,000
    /// ```
    #[inline]
    pub const fn multiply_nights(&self, nights: i64) -> Self {
        Money(self.0 * nights)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the lodge publishes it:
/// `K` prefix with thousands grouping, e.g. `K75,000`.
///
/// ## Note
/// This is for receipts, logs and debugging. The frontend formats amounts
/// itself for localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();

        // Group digits in threes from the right: 225000 -> 225,000
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{}K{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for night-count calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: i32) -> Self {
        Money(self.0 * nights as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: i64) -> Self {
        Money(self.0 * nights)
    }
}

/// Summation over an iterator of Money values.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kwacha() {
        let money = Money::from_kwacha(50_000);
        assert_eq!(money.kwacha(), 50_000);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Money::from_kwacha(75_000)), "K75,000");
        assert_eq!(format!("{}", Money::from_kwacha(225_000)), "K225,000");
        assert_eq!(format!("{}", Money::from_kwacha(1_950_000)), "K1,950,000");
        assert_eq!(format!("{}", Money::from_kwacha(500)), "K500");
        assert_eq!(format!("{}", Money::from_kwacha(0)), "K0");
        assert_eq!(format!("{}", Money::from_kwacha(-65_000)), "-K65,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kwacha(50_000);
        let b = Money::from_kwacha(15_000);

        assert_eq!((a + b).kwacha(), 65_000);
        assert_eq!((a - b).kwacha(), 35_000);
        let result: Money = a * 3;
        assert_eq!(result.kwacha(), 150_000);
    }

    #[test]
    fn test_multiply_nights() {
        let nightly = Money::from_kwacha(75_000);
        let total = nightly.multiply_nights(3);
        assert_eq!(total.kwacha(), 225_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_kwacha(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_kwacha(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_sum() {
        let total: Money = [50_000, 65_000, 60_000]
            .iter()
            .map(|&k| Money::from_kwacha(k))
            .sum();
        assert_eq!(total.kwacha(), 175_000);
    }
}
