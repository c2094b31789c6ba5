//! # Rate Table
//!
//! The static configuration mapping room category × bed configuration to
//! a nightly rate.
//!
//! ## Fail Fast, Look Up Free
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rate Table Lifecycle                                │
//! │                                                                         │
//! │  Configuration (entry list / rate map)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RateTable::from_entries ── validates ──► Err(RateTableError)          │
//! │       │                     • every combination present                 │
//! │       │                     • no duplicates                             │
//! │       │                     • every rate positive                       │
//! │       ▼                                                                 │
//! │  RateTable (immutable) ──► lookup(category, bed) ──► Money             │
//! │                            total function, no error path               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing entry is a configuration defect caught at construction, not a
//! runtime condition. Once a table exists, `lookup` cannot fail.

use serde::{Deserialize, Serialize};

use crate::error::RateTableError;
use crate::money::Money;
use crate::types::{BedConfiguration, RoomCategory};

// =============================================================================
// Rate Table
// =============================================================================

/// Immutable nightly-rate configuration for the lodge.
///
/// ## Design Notes
/// - Backed by a fixed 2×2 array indexed by the two enums, so `lookup` is
///   a pair of array accesses
/// - Constructed once and injected into the estimator; never module-level
///   mutable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    // rates[category][bed]
    rates: [[Money; 2]; 2],
}

const fn category_index(category: RoomCategory) -> usize {
    match category {
        RoomCategory::Standard => 0,
        RoomCategory::Executive => 1,
    }
}

const fn bed_index(bed: BedConfiguration) -> usize {
    match bed {
        BedConfiguration::Single => 0,
        BedConfiguration::Double => 1,
    }
}

impl RateTable {
    /// Builds a rate table from an entry list, validating completeness.
    ///
    /// ## Validation Rules
    /// - Every (category, bed) combination present exactly once
    /// - Every rate strictly positive
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    /// use lodge_core::rates::RateTable;
    /// use lodge_core::types::{BedConfiguration, RoomCategory};
    ///
    /// let table = RateTable::from_entries(&[
    ///     (RoomCategory::Standard, BedConfiguration::Single, Money::from_kwacha(50_000)),
    ///     (RoomCategory::Standard, BedConfiguration::Double, Money::from_kwacha(65_000)),
    ///     (RoomCategory::Executive, BedConfiguration::Single, Money::from_kwacha(60_000)),
    ///     (RoomCategory::Executive, BedConfiguration::Double, Money::from_kwacha(75_000)),
    /// ]).unwrap();
    ///
    /// let rate = table.lookup(RoomCategory::Executive, BedConfiguration::Double);
    /// assert_eq!(rate.kwacha(), 75_000);
    /// ```
    pub fn from_entries(
        entries: &[(RoomCategory, BedConfiguration, Money)],
    ) -> Result<Self, RateTableError> {
        let mut rates = [[None::<Money>; 2]; 2];

        for &(category, bed, rate) in entries {
            if !rate.is_positive() {
                return Err(RateTableError::NonPositiveRate {
                    category,
                    bed,
                    kwacha: rate.kwacha(),
                });
            }

            let slot = &mut rates[category_index(category)][bed_index(bed)];
            if slot.is_some() {
                return Err(RateTableError::DuplicateRate { category, bed });
            }
            *slot = Some(rate);
        }

        let mut table = [[Money::zero(); 2]; 2];
        for category in RoomCategory::ALL {
            for bed in BedConfiguration::ALL {
                match rates[category_index(category)][bed_index(bed)] {
                    Some(rate) => table[category_index(category)][bed_index(bed)] = rate,
                    None => return Err(RateTableError::MissingRate { category, bed }),
                }
            }
        }

        Ok(RateTable { rates: table })
    }

    /// The lodge's published rates.
    ///
    /// | Category  | Single  | Double  |
    /// |-----------|---------|---------|
    /// | Standard  | K50,000 | K65,000 |
    /// | Executive | K60,000 | K75,000 |
    pub const fn lodge_standard() -> Self {
        RateTable {
            rates: [
                [Money::from_kwacha(50_000), Money::from_kwacha(65_000)],
                [Money::from_kwacha(60_000), Money::from_kwacha(75_000)],
            ],
        }
    }

    /// Returns the nightly rate for a room selection.
    ///
    /// Total over the finite domain; every combination is guaranteed
    /// present by construction.
    #[inline]
    pub const fn lookup(&self, category: RoomCategory, bed: BedConfiguration) -> Money {
        self.rates[category_index(category)][bed_index(bed)]
    }

    /// Cheapest and most expensive nightly rate within a category.
    ///
    /// The accommodation page shows each tier as a range
    /// (`K50,000-K65,000` for standard rooms).
    pub fn rate_range(&self, category: RoomCategory) -> (Money, Money) {
        let single = self.lookup(category, BedConfiguration::Single);
        let double = self.lookup(category, BedConfiguration::Double);
        (single.min(double), single.max(double))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::lodge_standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
