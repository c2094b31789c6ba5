//! # Validation Module
//!
//! Input validation for the reservation flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate guest feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field rules re-checked before an inquiry crosses the              │
//! │  │   submission seam                                                   │
//! │  └── Stay-date sanity (check-out strictly after check-in)              │
//! │                                                                         │
//! │  Night counts never reach here: the Nights type clamps on             │
//! │  construction, so out-of-range counts cannot exist.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::StayDates;
use crate::{MAX_GUESTS, MIN_GUESTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest's full name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_guest_name;
///
/// assert!(validate_guest_name("Chimwemwe Banda").is_ok());
/// assert!(validate_guest_name("").is_err());
/// ```
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain an `@` with a non-empty local part
/// - Domain must contain a dot; no whitespace anywhere
///
/// Deliverability is the mail server's problem; this catches the typos
/// worth rejecting before submission.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() {
        return Err(invalid("missing local part"));
    }

    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(invalid("invalid domain"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Optional at the form level; an empty string is rejected here, so
///   callers skip validation when the field is absent
/// - Digits, spaces, and `+ - ( )` only (the form placeholder is
///   `+265 999 123 456`)
/// - At least 7 digits, at most 30 characters
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() > 30 {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: 30,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == '(' || c == ')' || c == ' ')
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    if phone.chars().filter(char::is_ascii_digit).count() < 7 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain at least 7 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a special-requests message.
///
/// ## Rules
/// - Can be empty (the field is optional)
/// - Maximum 2000 characters
pub fn validate_message(message: &str) -> ValidationResult<()> {
    if message.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: 2000,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a guest count.
///
/// ## Rules
/// - Must be between 1 and 4 (the options the form offers)
pub fn validate_guest_count(guests: i64) -> ValidationResult<()> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: MIN_GUESTS,
            max: MAX_GUESTS,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a stay range for submission.
///
/// ## Rules
/// - Check-out must fall strictly after check-in
///
/// The estimator tolerates same-day and inverted ranges mid-edit (it
/// silently falls back to the manual counter); this check is the
/// submission-time gate that finally reports the inconsistency.
pub fn validate_stay_dates(dates: &StayDates) -> ValidationResult<()> {
    if !dates.is_forward() {
        return Err(ValidationError::StayNotForward);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_guest_name() {
        assert!(validate_guest_name("Chimwemwe Banda").is_ok());
        assert!(validate_guest_name("  trimmed  ").is_ok());

        assert!(validate_guest_name("").is_err());
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("guest@").is_err());
        assert!(validate_email("guest@nodot").is_err());
        assert!(validate_email("guest@.com").is_err());
        assert!(validate_email("gu est@example.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+265 999 123 456").is_ok());
        assert!(validate_phone("0999123456").is_ok());
        assert!(validate_phone("(01) 234-5678").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12345").is_err()); // too few digits
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("").is_ok());
        assert!(validate_message("Late arrival, please hold the room.").is_ok());
        assert!(validate_message(&"x".repeat(3000)).is_err());
    }

    #[test]
    fn test_validate_guest_count() {
        assert!(validate_guest_count(1).is_ok());
        assert!(validate_guest_count(4).is_ok());

        assert!(validate_guest_count(0).is_err());
        assert!(validate_guest_count(5).is_err());
        assert!(validate_guest_count(-1).is_err());
    }

    #[test]
    fn test_validate_stay_dates() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        let forward = StayDates::new(date(2024, 1, 1), date(2024, 1, 5));
        assert!(validate_stay_dates(&forward).is_ok());

        let same_day = StayDates::new(date(2024, 1, 5), date(2024, 1, 5));
        assert!(validate_stay_dates(&same_day).is_err());

        let inverted = StayDates::new(date(2024, 1, 5), date(2024, 1, 1));
        assert!(validate_stay_dates(&inverted).is_err());
    }
}
