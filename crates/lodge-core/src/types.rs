//! # Domain Types
//!
//! Core domain types used throughout the lodge booking engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │  RoomCategory   │   │ BedConfiguration  │   │     Nights      │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  Standard       │   │  Single           │   │  i64, clamped   │     │
//! │  │  Executive      │   │  Double           │   │  1 ..= 30       │     │
//! │  └─────────────────┘   └───────────────────┘   └─────────────────┘     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────────────────────────────┐   │
//! │  │   StayDates     │   │                 Quote                     │   │
//! │  │  ─────────────  │   │  ─────────────────────────────────────    │   │
//! │  │  check_in       │   │  room_category, bed_configuration,        │   │
//! │  │  check_out      │   │  nights, nightly_rate, subtotal, total    │   │
//! │  └─────────────────┘   └───────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `Nights` can only hold values in `1..=30` (clamp on construction)
//! - `Quote.subtotal` and `Quote.total` are derived, never set independently

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{MAX_STAY_NIGHTS, MIN_STAY_NIGHTS};

// =============================================================================
// Room Category
// =============================================================================

/// Tier of accommodation, affecting the base nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// Standard room.
    Standard,
    /// Executive suite.
    Executive,
}

impl RoomCategory {
    /// Every category, for exhaustive iteration (rate table validation,
    /// property tests).
    pub const ALL: [RoomCategory; 2] = [RoomCategory::Standard, RoomCategory::Executive];

    /// Human-readable label matching what guests see on the booking page.
    pub const fn label(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "Standard Room",
            RoomCategory::Executive => "Executive Suite",
        }
    }
}

impl Default for RoomCategory {
    fn default() -> Self {
        RoomCategory::Standard
    }
}

// =============================================================================
// Bed Configuration
// =============================================================================

/// Occupancy-affecting room layout, affecting the base nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BedConfiguration {
    /// One guest.
    Single,
    /// Two guests (double or twin).
    Double,
}

impl BedConfiguration {
    /// Every configuration, for exhaustive iteration.
    pub const ALL: [BedConfiguration; 2] = [BedConfiguration::Single, BedConfiguration::Double];

    /// Human-readable label matching what guests see on the booking page.
    pub const fn label(&self) -> &'static str {
        match self {
            BedConfiguration::Single => "Single Bed",
            BedConfiguration::Double => "Double/Twin",
        }
    }
}

impl Default for BedConfiguration {
    fn default() -> Self {
        BedConfiguration::Single
    }
}

// =============================================================================
// Nights
// =============================================================================

/// Length of stay in whole calendar nights.
///
/// ## Why Clamp Instead of Reject?
/// The night counter is driven by a slider and +/- buttons. Out-of-range
/// input (0, 31, a fat-fingered 300) snaps to the nearest bound so the
/// estimate stays live; it is never a user-visible error.
///
/// ## Invariant
/// `MIN_STAY_NIGHTS <= count <= MAX_STAY_NIGHTS` for every constructed
/// value. There is no unchecked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Nights(i64);

impl Nights {
    /// Creates a night count, clamping into the valid range.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::types::Nights;
    ///
    /// assert_eq!(Nights::clamped(3).count(), 3);
    /// assert_eq!(Nights::clamped(0).count(), 1);   // below range
    /// assert_eq!(Nights::clamped(31).count(), 30); // above range
    /// ```
    #[inline]
    pub const fn clamped(count: i64) -> Self {
        if count < MIN_STAY_NIGHTS {
            Nights(MIN_STAY_NIGHTS)
        } else if count > MAX_STAY_NIGHTS {
            Nights(MAX_STAY_NIGHTS)
        } else {
            Nights(count)
        }
    }

    /// One night, the counter's starting value.
    #[inline]
    pub const fn one() -> Self {
        Nights(MIN_STAY_NIGHTS)
    }

    /// Returns the night count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.0
    }

    /// Adds one night, saturating at the upper bound.
    #[inline]
    pub const fn increment(&self) -> Self {
        Nights::clamped(self.0 + 1)
    }

    /// Removes one night, saturating at the lower bound.
    #[inline]
    pub const fn decrement(&self) -> Self {
        Nights::clamped(self.0 - 1)
    }
}

impl Default for Nights {
    fn default() -> Self {
        Nights::one()
    }
}

// =============================================================================
// Stay Dates
// =============================================================================

/// A check-in/check-out date pair supplied by the reservation form.
///
/// The pair itself carries no validity guarantee; whether it yields a
/// usable night count is decided by [`crate::stay::resolve_nights`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayDates {
    /// Arrival date.
    #[ts(as = "String")]
    pub check_in: NaiveDate,

    /// Departure date.
    #[ts(as = "String")]
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Creates a date pair.
    pub const fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        StayDates {
            check_in,
            check_out,
        }
    }

    /// Calendar-day difference between check-out and check-in.
    ///
    /// Zero or negative means same-day or inverted dates; callers fall
    /// back to the manual counter in that case.
    #[inline]
    pub fn derived_nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether check-out falls strictly after check-in.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.derived_nights() > 0
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The computed pricing result for a category/configuration/nights tuple.
///
/// ## Invariant
/// `subtotal == total == nightly_rate × nights`, always. Both money fields
/// exist because the summary payload carries both; both are derived in
/// [`crate::estimator::compute_quote`] and never mutated independently.
///
/// ## Lifecycle
/// Quotes are ephemeral. One is recomputed on every input change and
/// published to the consumer; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Selected room tier.
    pub room_category: RoomCategory,

    /// Selected bed layout.
    pub bed_configuration: BedConfiguration,

    /// Effective night count the price covers.
    pub nights: Nights,

    /// Nightly rate from the rate table.
    pub nightly_rate: Money,

    /// Rate × nights.
    pub subtotal: Money,

    /// Amount payable. Equal to subtotal; no taxes or fees apply on top.
    pub total: Money,
}

impl Quote {
    /// One-line summary for logs and the booking confirmation panel,
    /// e.g. `Executive Suite - Double/Twin, 3 nights @ K75,000/night = K225,000`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {}, {} {} @ {}/night = {}",
            self.room_category.label(),
            self.bed_configuration.label(),
            self.nights.count(),
            if self.nights.count() == 1 {
                "night"
            } else {
                "nights"
            },
            self.nightly_rate,
            self.total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nights_clamped() {
        assert_eq!(Nights::clamped(1).count(), 1);
        assert_eq!(Nights::clamped(30).count(), 30);
        assert_eq!(Nights::clamped(15).count(), 15);

        // Clamp idempotence at both bounds
        assert_eq!(Nights::clamped(0), Nights::clamped(1));
        assert_eq!(Nights::clamped(-5), Nights::clamped(1));
        assert_eq!(Nights::clamped(31), Nights::clamped(30));
        assert_eq!(Nights::clamped(300), Nights::clamped(30));
    }

    #[test]
    fn test_nights_increment_saturates() {
        let mut n = Nights::clamped(29);
        n = n.increment();
        assert_eq!(n.count(), 30);
        n = n.increment();
        assert_eq!(n.count(), 30);
    }

    #[test]
    fn test_nights_decrement_saturates() {
        let mut n = Nights::clamped(2);
        n = n.decrement();
        assert_eq!(n.count(), 1);
        n = n.decrement();
        assert_eq!(n.count(), 1);
    }

    #[test]
    fn test_stay_dates_derived_nights() {
        let dates = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        assert_eq!(dates.derived_nights(), 4);
        assert!(dates.is_forward());

        let same_day = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        assert_eq!(same_day.derived_nights(), 0);
        assert!(!same_day.is_forward());

        let inverted = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(inverted.derived_nights(), -4);
        assert!(!inverted.is_forward());
    }

    #[test]
    fn test_enum_serde_names_match_frontend() {
        assert_eq!(
            serde_json::to_string(&RoomCategory::Executive).unwrap(),
            "\"executive\""
        );
        assert_eq!(
            serde_json::to_string(&BedConfiguration::Double).unwrap(),
            "\"double\""
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(RoomCategory::Standard.label(), "Standard Room");
        assert_eq!(RoomCategory::Executive.label(), "Executive Suite");
        assert_eq!(BedConfiguration::Single.label(), "Single Bed");
        assert_eq!(BedConfiguration::Double.label(), "Double/Twin");
    }

    #[test]
    fn test_defaults_match_form_initial_state() {
        assert_eq!(RoomCategory::default(), RoomCategory::Standard);
        assert_eq!(BedConfiguration::default(), BedConfiguration::Single);
        assert_eq!(Nights::default().count(), 1);
    }
}
