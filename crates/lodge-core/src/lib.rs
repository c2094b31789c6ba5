//! # lodge-core: Pure Business Logic for the Lodge Booking Engine
//!
//! This crate is the **heart** of the booking estimate flow. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Lodge Booking Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React/TS)                          │   │
//! │  │    Room picker ──► Night slider ──► Summary ──► Inquiry form   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  lodge-booking (form layer)                     │   │
//! │  │    BookingForm, InquiryRequest, submission seam                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lodge-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   rates   │  │   stay    │  │   │
//! │  │   │  Quote    │  │   Money   │  │ RateTable │  │ resolver  │  │   │
//! │  │   │  Nights   │  │  Kwacha   │  │  lookup   │  │ date diff │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ estimator │  │ validation│                                 │   │
//! │  │   │ recompute │  │   rules   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK READS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RoomCategory, BedConfiguration, Nights, Quote)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rates`] - The rate table, validated for completeness at construction
//! - [`stay`] - Effective night count resolution
//! - [`estimator`] - Quote computation and the change-gated publisher
//! - [`error`] - Domain error types
//! - [`validation`] - Guest input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole Kwacha (i64), no floats
//! 4. **Clamp, Don't Reject**: Night counts snap to the nearest bound
//! 5. **Fail Fast on Config**: A rate table with a hole never constructs
//!
//! ## Example Usage
//!
//! ```rust
//! use lodge_core::estimator::BookingEstimator;
//! use lodge_core::rates::RateTable;
//! use lodge_core::types::{BedConfiguration, RoomCategory};
//!
//! let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
//!
//! estimator.set_room_category(RoomCategory::Executive);
//! estimator.set_bed_configuration(BedConfiguration::Double);
//! estimator.set_nights(3);
//!
//! // Executive suite, double bed, 3 nights at K75,000
//! assert_eq!(estimator.quote().total.kwacha(), 225_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod estimator;
pub mod money;
pub mod rates;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lodge_core::Money` instead of
// `use lodge_core::money::Money`

pub use error::{CoreError, CoreResult, RateTableError, ValidationError};
pub use estimator::{compute_quote, BookingEstimator};
pub use money::Money;
pub use rates::RateTable;
pub use stay::resolve_nights;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum bookable stay in nights.
pub const MIN_STAY_NIGHTS: i64 = 1;

/// Maximum bookable stay in nights.
///
/// ## Business Reason
/// The booking slider offers 1-30 nights; longer stays are negotiated
/// directly with the lodge, not quoted by the calculator.
pub const MAX_STAY_NIGHTS: i64 = 30;

/// Minimum guests per inquiry.
pub const MIN_GUESTS: i64 = 1;

/// Maximum guests per inquiry.
///
/// ## Business Reason
/// The largest room sleeps four; bigger parties book multiple rooms
/// through direct contact.
pub const MAX_GUESTS: i64 = 4;
