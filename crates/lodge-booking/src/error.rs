//! # Booking Error Type
//!
//! Unified error type for reservation form operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at Submission                             │
//! │                                                                         │
//! │  BookingForm::submit                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Payload invalid? ──── ValidationError ──┐                             │
//! │         │                                │                             │
//! │         ▼                                ▼                             │
//! │  Submitter failed? ─── SubmitError ──── BookingError ──► caller        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────── InquiryReceipt               │
//! │                                                                         │
//! │  Either failure leaves the form's fields untouched so the guest        │
//! │  can correct and retry.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::submit::SubmitError;
use lodge_core::ValidationError;

/// Errors surfaced by reservation form operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The assembled inquiry payload failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The submission collaborator rejected or failed to accept the inquiry.
    #[error("submission failed: {0}")]
    Submit(#[from] SubmitError),
}

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_booking_error() {
        let err: BookingError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, BookingError::Validation(_)));
        assert_eq!(err.to_string(), "validation error: name is required");
    }

    #[test]
    fn test_submit_converts_to_booking_error() {
        let err: BookingError = SubmitError::Rejected {
            reason: "duplicate inquiry".to_string(),
        }
        .into();
        assert!(matches!(err, BookingError::Submit(_)));
    }
}
