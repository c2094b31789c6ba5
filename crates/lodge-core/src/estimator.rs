//! # Booking Estimator
//!
//! The reactive core: derives a price quote from the current room
//! selection and stay duration, and publishes it to a consumer whenever
//! the derived value actually changes.
//!
//! ## Recompute Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Estimator Recompute Flow                             │
//! │                                                                         │
//! │  Input Change              Derivation              Publish              │
//! │  ────────────              ──────────              ───────              │
//! │                                                                         │
//! │  set_room_category ──┐                                                  │
//! │  set_bed_config ─────┤                                                  │
//! │  set_nights ─────────┼──► resolve_nights ──► compute_quote ──► gate    │
//! │  increment/decrement ┤    (stay.rs)          (this module)      │      │
//! │  set_stay_dates ─────┘                                          ▼      │
//! │                                              quote != published?        │
//! │                                              ├── yes → callback fires   │
//! │                                              └── no  → nothing          │
//! │                                                                         │
//! │  Every setter recomputes synchronously. The gate compares by VALUE,    │
//! │  so re-running with identical inputs never re-fires the consumer.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No background work, no I/O. "State" is just the last-known input tuple
//! plus the last published quote.

use std::fmt;

use crate::rates::RateTable;
use crate::stay::resolve_nights;
use crate::types::{BedConfiguration, Nights, Quote, RoomCategory, StayDates};

// =============================================================================
// Quote Computation
// =============================================================================

/// Computes a quote for a room selection and night count.
///
/// Pure and deterministic: rate table lookup, then one multiplication.
///
/// ## Example
/// ```rust
/// use lodge_core::estimator::compute_quote;
/// use lodge_core::rates::RateTable;
/// use lodge_core::types::{BedConfiguration, Nights, RoomCategory};
///
/// let quote = compute_quote(
///     &RateTable::lodge_standard(),
///     RoomCategory::Executive,
///     BedConfiguration::Double,
///     Nights::clamped(3),
/// );
/// assert_eq!(quote.nightly_rate.kwacha(), 75_000);
/// assert_eq!(quote.total.kwacha(), 225_000);
/// ```
pub fn compute_quote(
    rates: &RateTable,
    category: RoomCategory,
    bed: BedConfiguration,
    nights: Nights,
) -> Quote {
    let nightly_rate = rates.lookup(category, bed);
    let total = nightly_rate.multiply_nights(nights.count());

    Quote {
        room_category: category,
        bed_configuration: bed,
        nights,
        nightly_rate,
        subtotal: total,
        total,
    }
}

// =============================================================================
// Booking Estimator
// =============================================================================

/// Callback type for quote consumers.
pub type QuoteSubscriber = Box<dyn FnMut(&Quote)>;

/// Owns the calculator's input tuple and pushes recomputed quotes to a
/// registered consumer.
///
/// ## Invariants
/// - Each estimator instance is independently owned by its containing form;
///   no cross-instance sharing
/// - The published quote is always the quote of the current inputs (every
///   setter recomputes synchronously before returning)
/// - The subscriber fires exactly once per value change, never on
///   recomputations that produce an identical quote
///
/// ## Usage
/// ```rust
/// use lodge_core::estimator::BookingEstimator;
/// use lodge_core::rates::RateTable;
/// use lodge_core::types::{BedConfiguration, RoomCategory};
///
/// let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
/// estimator.set_room_category(RoomCategory::Executive);
/// estimator.set_bed_configuration(BedConfiguration::Double);
/// estimator.set_nights(3);
///
/// assert_eq!(estimator.quote().total.kwacha(), 225_000);
/// ```
pub struct BookingEstimator {
    rates: RateTable,
    room_category: RoomCategory,
    bed_configuration: BedConfiguration,
    manual_nights: Nights,
    stay_dates: Option<StayDates>,
    published: Quote,
    subscriber: Option<QuoteSubscriber>,
}

impl BookingEstimator {
    /// Creates an estimator over the given rate table.
    ///
    /// Starts from the form's initial state: standard room, single bed,
    /// one night, no dates.
    pub fn new(rates: RateTable) -> Self {
        let room_category = RoomCategory::default();
        let bed_configuration = BedConfiguration::default();
        let manual_nights = Nights::default();
        let published = compute_quote(&rates, room_category, bed_configuration, manual_nights);

        BookingEstimator {
            rates,
            room_category,
            bed_configuration,
            manual_nights,
            stay_dates: None,
            published,
            subscriber: None,
        }
    }

    /// Registers the consumer callback.
    ///
    /// Fires immediately with the current quote so the consumer never
    /// renders an empty summary, then once per subsequent value change.
    /// Registering a new subscriber replaces the previous one.
    pub fn on_quote(&mut self, mut subscriber: impl FnMut(&Quote) + 'static) {
        subscriber(&self.published);
        self.subscriber = Some(Box::new(subscriber));
    }

    // -------------------------------------------------------------------------
    // Input surface
    // -------------------------------------------------------------------------

    /// Selects the room tier.
    pub fn set_room_category(&mut self, category: RoomCategory) {
        self.room_category = category;
        self.publish();
    }

    /// Selects the bed layout.
    pub fn set_bed_configuration(&mut self, bed: BedConfiguration) {
        self.bed_configuration = bed;
        self.publish();
    }

    /// Sets the manual night counter, clamping into range.
    ///
    /// While a forward date pair is present the counter is superseded:
    /// its value updates but the quote keeps following the dates.
    pub fn set_nights(&mut self, count: i64) {
        self.manual_nights = Nights::clamped(count);
        self.publish();
    }

    /// Adds one night to the manual counter (saturating at 30).
    pub fn increment_nights(&mut self) {
        self.manual_nights = self.manual_nights.increment();
        self.publish();
    }

    /// Removes one night from the manual counter (saturating at 1).
    pub fn decrement_nights(&mut self) {
        self.manual_nights = self.manual_nights.decrement();
        self.publish();
    }

    /// Supplies the external check-in/check-out pair.
    ///
    /// A forward pair overrides the manual counter; a same-day or inverted
    /// pair leaves the counter effective.
    pub fn set_stay_dates(&mut self, dates: StayDates) {
        self.stay_dates = Some(dates);
        self.publish();
    }

    /// Clears the date pair; the manual counter becomes effective again.
    pub fn clear_stay_dates(&mut self) {
        self.stay_dates = None;
        self.publish();
    }

    // -------------------------------------------------------------------------
    // Output surface
    // -------------------------------------------------------------------------

    /// The quote for the current inputs.
    #[inline]
    pub fn quote(&self) -> Quote {
        self.published
    }

    /// The night count the current quote covers.
    #[inline]
    pub fn effective_nights(&self) -> Nights {
        self.published.nights
    }

    /// The manual counter's value (retained even while dates supersede it).
    #[inline]
    pub fn manual_nights(&self) -> Nights {
        self.manual_nights
    }

    /// The currently supplied date pair, if any.
    #[inline]
    pub fn stay_dates(&self) -> Option<StayDates> {
        self.stay_dates
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Recomputes and publishes if the quote changed by value.
    fn publish(&mut self) {
        let nights = resolve_nights(self.manual_nights, self.stay_dates);
        let quote = compute_quote(
            &self.rates,
            self.room_category,
            self.bed_configuration,
            nights,
        );

        if quote != self.published {
            self.published = quote;
            if let Some(subscriber) = self.subscriber.as_mut() {
                subscriber(&quote);
            }
        }
    }
}

/// The subscriber closure has no useful Debug form; show the inputs and
/// the published quote instead.
impl fmt::Debug for BookingEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingEstimator")
            .field("room_category", &self.room_category)
            .field("bed_configuration", &self.bed_configuration)
            .field("manual_nights", &self.manual_nights)
            .field("stay_dates", &self.stay_dates)
            .field("published", &self.published)
            .field("has_subscriber", &self.subscriber.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Attaches a recording subscriber and returns the shared log.
    fn record(estimator: &mut BookingEstimator) -> Rc<RefCell<Vec<Quote>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        estimator.on_quote(move |quote| sink.borrow_mut().push(*quote));
        log
    }

    #[test]
    fn test_total_matches_rate_times_nights_exhaustively() {
        let rates = RateTable::lodge_standard();
        for category in RoomCategory::ALL {
            for bed in BedConfiguration::ALL {
                for count in 1..=30 {
                    let quote = compute_quote(&rates, category, bed, Nights::clamped(count));
                    assert_eq!(
                        quote.total.kwacha(),
                        rates.lookup(category, bed).kwacha() * count
                    );
                    assert_eq!(quote.subtotal, quote.total);
                }
            }
        }
    }

    #[test]
    fn test_literal_executive_double_three_nights() {
        let quote = compute_quote(
            &RateTable::lodge_standard(),
            RoomCategory::Executive,
            BedConfiguration::Double,
            Nights::clamped(3),
        );
        assert_eq!(quote.nightly_rate.kwacha(), 75_000);
        assert_eq!(quote.total.kwacha(), 225_000);
    }

    #[test]
    fn test_literal_standard_single_one_night() {
        let quote = compute_quote(
            &RateTable::lodge_standard(),
            RoomCategory::Standard,
            BedConfiguration::Single,
            Nights::clamped(1),
        );
        assert_eq!(quote.nightly_rate.kwacha(), 50_000);
        assert_eq!(quote.total.kwacha(), 50_000);
    }

    #[test]
    fn test_total_strictly_increasing_in_nights() {
        let rates = RateTable::lodge_standard();
        for category in RoomCategory::ALL {
            for bed in BedConfiguration::ALL {
                let mut previous = 0;
                for count in 1..=30 {
                    let quote = compute_quote(&rates, category, bed, Nights::clamped(count));
                    assert!(quote.total.kwacha() > previous);
                    previous = quote.total.kwacha();
                }
            }
        }
    }

    #[test]
    fn test_subscriber_fires_immediately_with_current_quote() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        let log = record(&mut estimator);

        let published = log.borrow();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].total.kwacha(), 50_000); // standard/single × 1
    }

    #[test]
    fn test_identical_inputs_do_not_refire() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        let log = record(&mut estimator);

        // Re-setting the same values recomputes but publishes nothing new
        estimator.set_room_category(RoomCategory::Standard);
        estimator.set_bed_configuration(BedConfiguration::Single);
        estimator.set_nights(1);

        assert_eq!(log.borrow().len(), 1); // only the registration fire
    }

    #[test]
    fn test_bed_flip_fires_exactly_once_with_new_total() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        estimator.set_nights(2);
        let log = record(&mut estimator);

        estimator.set_bed_configuration(BedConfiguration::Double);

        let published = log.borrow();
        assert_eq!(published.len(), 2); // registration + the flip
        assert_eq!(published[1].nightly_rate.kwacha(), 65_000);
        assert_eq!(published[1].total.kwacha(), 130_000);
    }

    #[test]
    fn test_dates_supersede_manual_counter() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        estimator.set_stay_dates(StayDates::new(date(2024, 1, 1), date(2024, 1, 5)));

        assert_eq!(estimator.effective_nights().count(), 4);
        assert_eq!(estimator.manual_nights().count(), 1); // retained

        // Counter mutations are inert while dates rule the duration
        let log = record(&mut estimator);
        estimator.set_nights(9);
        assert_eq!(estimator.effective_nights().count(), 4);
        assert_eq!(log.borrow().len(), 1); // no value change, no fire
    }

    #[test]
    fn test_clearing_dates_restores_manual_counter() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        estimator.set_nights(9);
        estimator.set_stay_dates(StayDates::new(date(2024, 1, 1), date(2024, 1, 5)));
        assert_eq!(estimator.effective_nights().count(), 4);

        estimator.clear_stay_dates();
        assert_eq!(estimator.effective_nights().count(), 9);
    }

    #[test]
    fn test_inverted_dates_keep_counter_effective() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        estimator.set_nights(3);
        estimator.set_stay_dates(StayDates::new(date(2024, 1, 5), date(2024, 1, 1)));

        assert_eq!(estimator.effective_nights().count(), 3);
    }

    #[test]
    fn test_last_write_wins() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        let log = record(&mut estimator);

        estimator.set_nights(5);
        estimator.set_nights(7);

        let published = log.borrow();
        assert_eq!(published.last().unwrap().nights.count(), 7);
        assert_eq!(estimator.quote().nights.count(), 7);
    }

    #[test]
    fn test_quote_always_current_without_subscriber() {
        let mut estimator = BookingEstimator::new(RateTable::lodge_standard());
        estimator.set_room_category(RoomCategory::Executive);
        estimator.increment_nights();
        estimator.increment_nights();

        let quote = estimator.quote();
        assert_eq!(quote.nights.count(), 3);
        assert_eq!(quote.total.kwacha(), 180_000); // executive/single × 3
    }
}
