//! # Stay Duration Resolution
//!
//! Determines the effective night count from the manual counter and the
//! optional check-in/check-out pair supplied by the reservation form.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              resolve_nights(manual, dates)                              │
//! │                                                                         │
//! │  dates = None ──────────────────────────────► manual                   │
//! │                                                                         │
//! │  dates = Some, check_out - check_in > 0 ────► derived days (clamped)   │
//! │                                               dates take precedence;   │
//! │                                               the counter is kept but  │
//! │                                               superseded               │
//! │                                                                         │
//! │  dates = Some, check_out - check_in <= 0 ───► manual (silent fallback) │
//! │                                               same-day or inverted     │
//! │                                               ranges never break the   │
//! │                                               live estimate            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The manual counter stays intact while dates are present and becomes
//! effective again the moment they are cleared.

use crate::types::{Nights, StayDates};

/// Resolves the effective night count for a quote.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use lodge_core::stay::resolve_nights;
/// use lodge_core::types::{Nights, StayDates};
///
/// let manual = Nights::clamped(1);
/// let dates = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
/// );
///
/// // External dates win over the counter
/// assert_eq!(resolve_nights(manual, Some(dates)).count(), 4);
///
/// // No dates: the counter is effective
/// assert_eq!(resolve_nights(manual, None).count(), 1);
/// ```
pub fn resolve_nights(manual: Nights, dates: Option<StayDates>) -> Nights {
    match dates {
        Some(dates) if dates.is_forward() => Nights::clamped(dates.derived_nights()),
        _ => manual,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_dates_returns_manual() {
        assert_eq!(resolve_nights(Nights::clamped(7), None).count(), 7);
    }

    #[test]
    fn test_dates_take_precedence() {
        let dates = StayDates::new(date(2024, 1, 1), date(2024, 1, 5));
        assert_eq!(
            resolve_nights(Nights::clamped(1), Some(dates)).count(),
            4
        );
    }

    #[test]
    fn test_same_day_falls_back_to_manual() {
        let dates = StayDates::new(date(2024, 1, 5), date(2024, 1, 5));
        assert_eq!(
            resolve_nights(Nights::clamped(3), Some(dates)).count(),
            3
        );
    }

    #[test]
    fn test_inverted_dates_fall_back_to_manual() {
        let dates = StayDates::new(date(2024, 1, 5), date(2024, 1, 1));
        assert_eq!(
            resolve_nights(Nights::clamped(3), Some(dates)).count(),
            3
        );
    }

    #[test]
    fn test_long_stay_clamps_to_upper_bound() {
        // A 60-day range still yields a valid night count
        let dates = StayDates::new(date(2024, 1, 1), date(2024, 3, 1));
        assert_eq!(
            resolve_nights(Nights::clamped(1), Some(dates)).count(),
            30
        );
    }

    #[test]
    fn test_month_boundary() {
        let dates = StayDates::new(date(2024, 1, 30), date(2024, 2, 2));
        assert_eq!(
            resolve_nights(Nights::clamped(1), Some(dates)).count(),
            3
        );
    }
}
