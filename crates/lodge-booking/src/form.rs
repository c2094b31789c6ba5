//! # Reservation Form
//!
//! The consumer of the estimation engine: one `BookingForm` per guest
//! session, owning its own estimator instance and the guest's details.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Form Operations                          │
//! │                                                                         │
//! │  Guest Action              Form Method             Effect               │
//! │  ────────────              ───────────             ──────               │
//! │                                                                         │
//! │  Pick room tier ─────────► select_room() ────────► estimator recompute │
//! │  Pick bed layout ────────► select_bed() ─────────► estimator recompute │
//! │  Move night slider ──────► set_nights() ─────────► estimator recompute │
//! │  Pick dates ─────────────► set_check_in/out() ───► dates override      │
//! │                                                    the night counter    │
//! │  Type contact details ───► set_guest_name() etc. ► stored, no quote    │
//! │                                                    change               │
//! │  Press submit ───────────► submit() ─────────────► validate, bundle    │
//! │                                                    quote, hand to the  │
//! │                                                    submission seam     │
//! │                                                                         │
//! │  The estimator publishes into the form's summary slot; the summary     │
//! │  panel and the submitted payload always show the same quote.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Single-threaded by contract: each form exclusively owns its estimator,
//! and the summary slot is shared only between the form and the estimator's
//! callback, so `Rc<RefCell<_>>` suffices. Nothing here crosses threads.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use lodge_core::{
    BedConfiguration, BookingEstimator, Quote, RateTable, RoomCategory, StayDates,
};

use crate::error::BookingResult;
use crate::inquiry::InquiryRequest;
use crate::submit::{InquiryReceipt, InquirySubmitter};

// =============================================================================
// Booking Form
// =============================================================================

/// Reservation form state: the estimator, its latest published quote, and
/// the guest's contact details.
pub struct BookingForm {
    estimator: BookingEstimator,

    /// Latest quote the estimator published. Shared with the estimator's
    /// subscriber callback; always holds the quote of the current inputs.
    summary: Rc<RefCell<Quote>>,

    name: String,
    email: String,
    phone: Option<String>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: i64,
    message: Option<String>,
}

impl BookingForm {
    /// Creates a form over the given rate table.
    pub fn new(rates: RateTable) -> Self {
        let mut estimator = BookingEstimator::new(rates);

        let summary = Rc::new(RefCell::new(estimator.quote()));
        let slot = Rc::clone(&summary);
        estimator.on_quote(move |quote| *slot.borrow_mut() = *quote);

        BookingForm {
            estimator,
            summary,
            name: String::new(),
            email: String::new(),
            phone: None,
            check_in: None,
            check_out: None,
            guests: 1,
            message: None,
        }
    }

    /// A form using the lodge's published rates.
    pub fn with_lodge_rates() -> Self {
        BookingForm::new(RateTable::lodge_standard())
    }

    // -------------------------------------------------------------------------
    // Room selection (passed through to the estimator)
    // -------------------------------------------------------------------------

    /// Selects the room tier.
    pub fn select_room(&mut self, category: RoomCategory) {
        debug!(?category, "select_room");
        self.estimator.set_room_category(category);
    }

    /// Selects the bed layout.
    pub fn select_bed(&mut self, bed: BedConfiguration) {
        debug!(?bed, "select_bed");
        self.estimator.set_bed_configuration(bed);
    }

    /// Sets the manual night counter (clamped to the bookable range).
    pub fn set_nights(&mut self, count: i64) {
        debug!(count, "set_nights");
        self.estimator.set_nights(count);
    }

    /// Adds one night.
    pub fn add_night(&mut self) {
        self.estimator.increment_nights();
    }

    /// Removes one night.
    pub fn remove_night(&mut self) {
        self.estimator.decrement_nights();
    }

    // -------------------------------------------------------------------------
    // Stay dates
    // -------------------------------------------------------------------------

    /// Sets or clears the arrival date.
    ///
    /// Once both dates are present, they drive the night count; the
    /// manual counter is superseded until a date is cleared.
    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        debug!(?date, "set_check_in");
        self.check_in = date;
        self.sync_stay_dates();
    }

    /// Sets or clears the departure date.
    pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
        debug!(?date, "set_check_out");
        self.check_out = date;
        self.sync_stay_dates();
    }

    /// Pushes the current date pair (or its absence) into the estimator.
    fn sync_stay_dates(&mut self) {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                self.estimator
                    .set_stay_dates(StayDates::new(check_in, check_out));
            }
            _ => self.estimator.clear_stay_dates(),
        }
    }

    // -------------------------------------------------------------------------
    // Guest details (never touch the quote)
    // -------------------------------------------------------------------------

    /// Sets the guest's full name.
    pub fn set_guest_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the guest's email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Sets or clears the guest's phone number.
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    /// Sets the guest count. Validated at submission (1-4).
    pub fn set_guests(&mut self, guests: i64) {
        self.guests = guests;
    }

    /// Sets or clears the special-requests message.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    // -------------------------------------------------------------------------
    // Output surface
    // -------------------------------------------------------------------------

    /// The quote currently shown in the booking summary panel.
    pub fn summary(&self) -> Quote {
        *self.summary.borrow()
    }

    /// Read access to the owned estimator.
    pub fn estimator(&self) -> &BookingEstimator {
        &self.estimator
    }

    /// Assembles the inquiry payload from the current form state,
    /// bundling the summary quote as a snapshot.
    pub fn assemble_request(&self) -> InquiryRequest {
        InquiryRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            message: self.message.clone(),
            quote: Some(self.summary()),
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validates and submits the inquiry.
    ///
    /// ## Behavior
    /// - Validation failure or submitter failure leaves every field intact
    ///   so the guest can correct and retry
    /// - On success the guest details reset for the next inquiry; the room
    ///   selection survives (the calculator panel keeps its state)
    pub fn submit(
        &mut self,
        submitter: &mut dyn InquirySubmitter,
    ) -> BookingResult<InquiryReceipt> {
        let request = self.assemble_request();
        request.validate()?;

        let receipt = match submitter.submit(&request) {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, "inquiry submission failed");
                return Err(err.into());
            }
        };

        info!(
            inquiry_id = %receipt.id,
            total = %self.summary().total,
            "inquiry accepted"
        );

        self.reset_guest_details();
        Ok(receipt)
    }

    /// Clears the guest's details and dates after a successful submission.
    fn reset_guest_details(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone = None;
        self.message = None;
        self.guests = 1;
        self.check_in = None;
        self.check_out = None;
        self.estimator.clear_stay_dates();
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        BookingForm::with_lodge_rates()
    }
}

impl fmt::Debug for BookingForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingForm")
            .field("estimator", &self.estimator)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("guests", &self.guests)
            .field("check_in", &self.check_in)
            .field("check_out", &self.check_out)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
