//! # Submission Seam
//!
//! The boundary between the reservation form and whatever actually
//! delivers inquiries to the lodge.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Submission Boundary                                  │
//! │                                                                         │
//! │  BookingForm::submit ──► dyn InquirySubmitter ──► ???                  │
//! │                                │                                        │
//! │                                ├── InMemorySubmitter (tests, demo)     │
//! │                                └── HTTP client (outside this repo)     │
//! │                                                                         │
//! │  The form never learns what transport sits behind the trait, and       │
//! │  quote computation never waits on it.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::inquiry::{Inquiry, InquiryRequest};

// =============================================================================
// Submit Error
// =============================================================================

/// Failures at the submission boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The collaborator refused the inquiry.
    #[error("inquiry rejected: {reason}")]
    Rejected { reason: String },

    /// The collaborator could not be reached or did not answer.
    ///
    /// The transport's own error text rides along for logging; the form
    /// shows the guest a generic retry message.
    #[error("submission service unavailable: {detail}")]
    Unavailable { detail: String },
}

// =============================================================================
// Inquiry Receipt
// =============================================================================

/// Acknowledgement returned to the form on successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InquiryReceipt {
    /// Identifier assigned to the accepted inquiry.
    #[ts(as = "String")]
    pub id: Uuid,

    /// When the inquiry was accepted.
    #[ts(as = "String")]
    pub received_at: DateTime<Utc>,
}

// =============================================================================
// Submitter Trait
// =============================================================================

/// The opaque collaborator that delivers inquiries.
pub trait InquirySubmitter {
    /// Attempts to deliver one inquiry, returning a receipt on acceptance.
    fn submit(&mut self, request: &InquiryRequest) -> Result<InquiryReceipt, SubmitError>;
}

// =============================================================================
// In-Memory Submitter
// =============================================================================

/// A submitter that accepts everything and keeps the records.
///
/// Ships for the walkthrough binary and tests; production deployments
/// plug a real transport into the trait instead.
#[derive(Debug, Default)]
pub struct InMemorySubmitter {
    accepted: Vec<Inquiry>,
}

impl InMemorySubmitter {
    /// Creates an empty submitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every inquiry accepted so far, in arrival order.
    pub fn accepted(&self) -> &[Inquiry] {
        &self.accepted
    }
}

impl InquirySubmitter for InMemorySubmitter {
    fn submit(&mut self, request: &InquiryRequest) -> Result<InquiryReceipt, SubmitError> {
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            request: request.clone(),
        };

        let receipt = InquiryReceipt {
            id: inquiry.id,
            received_at: inquiry.received_at,
        };

        self.accepted.push(inquiry);
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> InquiryRequest {
        InquiryRequest {
            name: "Thandiwe Phiri".to_string(),
            email: "thandiwe@example.com".to_string(),
            phone: None,
            check_in: None,
            check_out: None,
            guests: 1,
            message: None,
            quote: None,
        }
    }

    #[test]
    fn test_in_memory_submitter_accepts_and_records() {
        let mut submitter = InMemorySubmitter::new();

        let receipt = submitter.submit(&request()).unwrap();

        assert_eq!(submitter.accepted().len(), 1);
        let stored = &submitter.accepted()[0];
        assert_eq!(stored.id, receipt.id);
        assert_eq!(stored.request.name, "Thandiwe Phiri");
    }

    #[test]
    fn test_receipts_are_distinct() {
        let mut submitter = InMemorySubmitter::new();

        let first = submitter.submit(&request()).unwrap();
        let second = submitter.submit(&request()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(submitter.accepted().len(), 2);
    }

    #[test]
    fn test_submit_error_messages() {
        let err = SubmitError::Rejected {
            reason: "duplicate inquiry".to_string(),
        };
        assert_eq!(err.to_string(), "inquiry rejected: duplicate inquiry");

        let err = SubmitError::Unavailable {
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "submission service unavailable: connection refused"
        );
    }
}
