//! # Inquiry Types
//!
//! The payload the reservation form bundles for submission, and the
//! accepted record a submitter produces from it.
//!
//! ## Request vs Record
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InquiryRequest            what the guest typed + the quote snapshot   │
//! │       │                    (no identity, not yet accepted)             │
//! │       ▼  submitter.submit                                              │
//! │  Inquiry                   id + received_at + the request              │
//! │                            (what the lodge's inbox holds)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The quote travels as a snapshot: whatever the estimator last published
//! when the guest pressed submit. Rate changes after that moment do not
//! rewrite an inquiry already sent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lodge_core::validation::{
    validate_email, validate_guest_count, validate_guest_name, validate_message, validate_phone,
    validate_stay_dates,
};
use lodge_core::{Quote, StayDates, ValidationError};

// =============================================================================
// Inquiry Request
// =============================================================================

/// A booking inquiry as assembled by the reservation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    /// Guest's full name.
    pub name: String,

    /// Guest's email address.
    pub email: String,

    /// Guest's phone number, if provided.
    pub phone: Option<String>,

    /// Requested arrival date, if chosen.
    #[ts(as = "Option<String>")]
    pub check_in: Option<NaiveDate>,

    /// Requested departure date, if chosen.
    #[ts(as = "Option<String>")]
    pub check_out: Option<NaiveDate>,

    /// Number of guests (1-4).
    pub guests: i64,

    /// Special requests, if any.
    pub message: Option<String>,

    /// The price estimate shown to the guest at submission time.
    pub quote: Option<Quote>,
}

impl InquiryRequest {
    /// Validates every field against the submission rules.
    ///
    /// ## Rules
    /// - name, email: required, format-checked
    /// - phone, message: checked only when present
    /// - guests: 1-4
    /// - dates: when BOTH are present, check-out must fall strictly after
    ///   check-in; a single date is fine (guests often inquire before
    ///   settling on a departure day)
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_guest_name(&self.name)?;
        validate_email(&self.email)?;

        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }

        validate_guest_count(self.guests)?;

        if let Some(message) = &self.message {
            validate_message(message)?;
        }

        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            validate_stay_dates(&StayDates::new(check_in, check_out))?;
        }

        Ok(())
    }

    /// The stay range, when both dates are present.
    pub fn stay_dates(&self) -> Option<StayDates> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(StayDates::new(check_in, check_out)),
            _ => None,
        }
    }
}

// =============================================================================
// Inquiry Record
// =============================================================================

/// An accepted inquiry, as held by whatever inbox sits behind the
/// submission seam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Unique identifier (UUID v4), assigned on acceptance.
    pub id: uuid::Uuid,

    /// When the inquiry was accepted.
    pub received_at: DateTime<Utc>,

    /// The request as submitted.
    pub request: InquiryRequest,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> InquiryRequest {
        InquiryRequest {
            name: "Chimwemwe Banda".to_string(),
            email: "chimwemwe@example.com".to_string(),
            phone: Some("+265 999 123 456".to_string()),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 10),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 14),
            guests: 2,
            message: Some("Arriving after dark.".to_string()),
            quote: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut request = valid_request();
        request.name = "  ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_optional_fields_can_be_absent() {
        let mut request = valid_request();
        request.phone = None;
        request.message = None;
        request.check_in = None;
        request.check_out = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_single_date_is_allowed() {
        let mut request = valid_request();
        request.check_out = None;
        assert!(request.validate().is_ok());
        assert!(request.stay_dates().is_none());
    }

    #[test]
    fn test_inverted_dates_rejected_at_submission() {
        let mut request = valid_request();
        request.check_in = NaiveDate::from_ymd_opt(2024, 6, 14);
        request.check_out = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert!(matches!(
            request.validate(),
            Err(ValidationError::StayNotForward)
        ));
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut request = valid_request();
        request.guests = 0;
        assert!(request.validate().is_err());
        request.guests = 5;
        assert!(request.validate().is_err());
        request.guests = 4;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert!(json.get("checkIn").is_some());
        assert!(json.get("checkOut").is_some());
        assert_eq!(json["guests"], 2);
    }
}
