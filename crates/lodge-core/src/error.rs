//! # Error Types
//!
//! Domain-specific error types for lodge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lodge-core errors (this file)                                         │
//! │  ├── RateTableError   - Rate configuration defects (construction only) │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── CoreError        - General domain errors                          │
//! │                                                                         │
//! │  lodge-booking errors (separate crate)                                 │
//! │  ├── SubmitError      - Submission boundary failures                   │
//! │  └── BookingError     - What the form surfaces to its caller           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → BookingError → Caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, category, bounds)
//! 3. Errors are enum variants, never String
//! 4. Rate table defects are construction errors, never lookup errors

use thiserror::Error;

use crate::types::{BedConfiguration, RoomCategory};

// =============================================================================
// Rate Table Error
// =============================================================================

/// Rate configuration defects.
///
/// These can only occur while constructing a [`crate::rates::RateTable`].
/// Once a table exists, every lookup over the finite room domain is total,
/// so no lookup path carries an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateTableError {
    /// A (category, bed) combination has no configured rate.
    ///
    /// ## When This Occurs
    /// - The entry list handed to `RateTable::from_entries` skipped a
    ///   combination
    /// - A deserialized rate map was missing a key
    #[error("no rate configured for {category:?}/{bed:?}")]
    MissingRate {
        category: RoomCategory,
        bed: BedConfiguration,
    },

    /// The same (category, bed) combination was configured twice.
    #[error("rate for {category:?}/{bed:?} configured more than once")]
    DuplicateRate {
        category: RoomCategory,
        bed: BedConfiguration,
    },

    /// A configured rate is zero or negative.
    ///
    /// Nightly rates are prices; a non-positive price is a configuration
    /// defect, not a discount mechanism.
    #[error("rate for {category:?}/{bed:?} must be positive, got {kwacha}")]
    NonPositiveRate {
        category: RoomCategory,
        bed: BedConfiguration,
        kwacha: i64,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when guest input doesn't meet requirements.
/// Used for early validation before an inquiry crosses the submission seam.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Check-out does not fall strictly after check-in.
    #[error("check-out must be after check-in")]
    StayNotForward,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or configuration
/// defects. They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Rate configuration defect (wraps RateTableError).
    #[error("rate configuration error: {0}")]
    RateTable(#[from] RateTableError),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
