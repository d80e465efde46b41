//! # rasa-core: Pure Booking Logic for the Rasa Ria Front Desk
//!
//! This crate contains all booking rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rasa Ria Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   frontdesk (menu loop)                         │   │
//! │  │     Add ──► Cancel ──► Display ──► Search ──► Modify ──► Exit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rasa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   date    │  │   types   │  │   store   │  │ validation│  │   │
//! │  │   │   Date    │  │  Booking  │  │ Booking-  │  │  contact  │  │   │
//! │  │   │  window   │  │ RoomCat.  │  │   Store   │  │  nights   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                rasa-storage (bookings.txt codec)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`date`] - Calendar dates, naive check-out arithmetic, booking window
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Domain types (RoomCategory, Booking, ...)
//! - [`validation`] - Business rule validation
//! - [`store`] - The capacity-bounded [`BookingStore`]
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rasa_core::{BookingStore, Date, NewBooking, RoomCategory};
//!
//! let mut store = BookingStore::new();
//! let today = Date::new(1, 3, 2025);
//!
//! let booking = store
//!     .add(
//!         NewBooking {
//!             guest_name: "Anna".to_string(),
//!             contact: "012-3456789".to_string(),
//!             category: RoomCategory::Single,
//!             nights: 3,
//!             check_in: Date::new(10, 3, 2025),
//!         },
//!         today,
//!     )
//!     .unwrap();
//!
//! assert_eq!(booking.room_number, 61);
//! assert_eq!(booking.total_price.cents(), 120_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod date;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use date::Date;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::BookingStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of bookings the store holds at once.
///
/// ## Business Reason
/// The hotel has exactly 100 rooms (1-100), so the store can never hold
/// more live bookings than that.
pub const MAX_BOOKINGS: usize = 100;

/// Guest names longer than this are truncated.
pub const MAX_GUEST_NAME_CHARS: usize = 49;

/// Contact numbers must be at least this many characters.
pub const MIN_CONTACT_CHARS: usize = 8;

/// Contact numbers must be at most this many characters.
pub const MAX_CONTACT_CHARS: usize = 12;

/// Shortest allowed stay.
pub const MIN_NIGHTS: u32 = 1;

/// Longest allowed stay.
pub const MAX_NIGHTS: u32 = 30;
