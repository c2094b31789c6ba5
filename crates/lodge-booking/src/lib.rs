//! # lodge-booking: Reservation Form Layer
//!
//! The consumer side of the estimation engine. Each guest session owns a
//! [`form::BookingForm`], which owns a `BookingEstimator`, captures its
//! published quotes, and hands validated inquiry payloads to the
//! submission seam.
//!
//! ## Module Organization
//! ```text
//! lodge_booking/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── form.rs         ◄─── BookingForm state owner
//! ├── inquiry.rs      ◄─── InquiryRequest payload + accepted Inquiry record
//! ├── submit.rs       ◄─── InquirySubmitter trait + in-memory impl
//! ├── error.rs        ◄─── BookingError for form operations
//! └── bin/
//!     └── walkthrough.rs ◄─ Dev binary: scripted estimate + submission run
//! ```
//!
//! ## Boundary
//! This crate stops at the [`submit::InquirySubmitter`] trait. No HTTP
//! transport lives here; quotes are computable and displayable with zero
//! network access, and submission can never block an estimate.

pub mod error;
pub mod form;
pub mod inquiry;
pub mod submit;

pub use error::{BookingError, BookingResult};
pub use form::BookingForm;
pub use inquiry::{Inquiry, InquiryRequest};
pub use submit::{InMemorySubmitter, InquiryReceipt, InquirySubmitter, SubmitError};
