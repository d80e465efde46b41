//! # Validation Module
//!
//! Business rule validation for booking input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu prompts (frontdesk)                                      │
//! │  ├── Re-prompt until the line parses as a number                        │
//! │  └── Re-prompt contact / check-in using THIS MODULE                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: BookingStore operations                                       │
//! │  └── THIS MODULE again, before any state changes                        │
//! │                                                                         │
//! │  Defense in depth: the rules are domain rules, not UI rules             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::date::Date;
use crate::error::ValidationError;
use crate::{MAX_CONTACT_CHARS, MAX_GUEST_NAME_CHARS, MAX_NIGHTS, MIN_CONTACT_CHARS, MIN_NIGHTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks a contact number.
///
/// ## Rules
/// - 8 to 12 characters long
/// - Only digits, `+` and `-`
///
/// The position and count of `+`/`-` are not checked.
///
/// ## Example
/// ```rust
/// use rasa_core::validation::is_valid_contact;
///
/// assert!(is_valid_contact("12345678"));
/// assert!(is_valid_contact("12-34+567"));
/// assert!(!is_valid_contact("1234567"));
/// assert!(!is_valid_contact("1234 5678"));
/// ```
pub fn is_valid_contact(contact: &str) -> bool {
    let len = contact.chars().count();
    (MIN_CONTACT_CHARS..=MAX_CONTACT_CHARS).contains(&len)
        && contact
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == '-')
}

/// [`is_valid_contact`] as a `Result`.
pub fn validate_contact(contact: &str) -> ValidationResult<()> {
    if is_valid_contact(contact) {
        Ok(())
    } else {
        Err(ValidationError::InvalidContact {
            contact: contact.to_string(),
        })
    }
}

/// Normalizes a guest name for storage.
///
/// Anything from the first line break on is dropped and the rest is cut to
/// [`MAX_GUEST_NAME_CHARS`] characters, so one name is always one line of
/// `bookings.txt`.
pub fn normalize_guest_name(name: &str) -> String {
    let line = name.split(|c: char| c == '\n' || c == '\r').next().unwrap_or_default();
    line.chars().take(MAX_GUEST_NAME_CHARS).collect()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a length of stay.
///
/// ## Rules
/// - Between 1 and 30 nights inclusive
pub fn validate_nights(nights: u32) -> ValidationResult<()> {
    if (MIN_NIGHTS..=MAX_NIGHTS).contains(&nights) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNights {
            nights,
            min: MIN_NIGHTS,
            max: MAX_NIGHTS,
        })
    }
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a check-in date against today.
///
/// ## Rules
/// 1. The date must exist (`InvalidDate`)
/// 2. It must fall between today and one year from today (`DateOutOfWindow`)
///
/// ```text
///   today            today + 1y
///     │◄──── allowed ────►│
/// ────┼───────────────────┼────►
/// ```
pub fn validate_check_in(check_in: Date, today: Date) -> ValidationResult<()> {
    if !check_in.is_valid() {
        return Err(ValidationError::InvalidDate { date: check_in });
    }

    if !check_in.is_within_booking_window(today) {
        return Err(ValidationError::DateOutOfWindow {
            date: check_in,
            today,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
