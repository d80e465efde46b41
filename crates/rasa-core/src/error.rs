//! # Error Types
//!
//! Domain-specific error types for rasa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rasa-core errors (this file)                                          │
//! │  ├── CoreError        - Store operation failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rasa-storage errors (separate crate)                                  │
//! │  └── StorageError     - File I/O and parse failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → menu message                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is recoverable: the menu prints the message and returns to
//! the main screen.

use thiserror::Error;

use crate::date::Date;
use crate::types::RoomCategory;

// =============================================================================
// Core Error
// =============================================================================

/// Booking store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The store already holds the maximum number of bookings.
    #[error("No more rooms can be booked. Hotel is full ({max} bookings)")]
    CapacityExceeded { max: usize },

    /// Every room in the requested category is taken.
    ///
    /// ## When This Occurs
    /// - Adding a 21st Suite booking
    /// - Moving a booking into a category with no free room
    #[error("No available room of type {category}")]
    NoRoomAvailable { category: RoomCategory },

    /// No active booking holds this room number.
    #[error("Room {room_number} not found or not booked")]
    NotFound { room_number: u32 },

    /// A restored booking's room lies outside its category's band.
    #[error("Room {room_number} is not a {category} room")]
    RoomOutOfRange {
        room_number: u32,
        category: RoomCategory,
    },

    /// A restored booking's room is already held by another booking.
    #[error("Room {room_number} is already booked")]
    RoomTaken { room_number: u32 },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the checks a caller-side parser is expected to make before
/// invoking the store; the store re-checks them because they are domain rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Contact is not 8-12 characters of digits, `+` and `-`.
    #[error("Invalid contact number '{contact}': use 8-12 digits with optional +/- symbols")]
    InvalidContact { contact: String },

    /// Nights outside 1..=30.
    #[error("Invalid number of nights {nights}: must be between {min} and {max}")]
    InvalidNights { nights: u32, min: u32, max: u32 },

    /// Date does not exist on the calendar.
    #[error("Invalid date {date}")]
    InvalidDate { date: Date },

    /// Check-in is in the past or more than one year ahead.
    #[error("Check-in {date} must be between {today} and one year later")]
    DateOutOfWindow { date: Date, today: Date },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
