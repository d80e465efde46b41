//! # Domain Types
//!
//! Core domain types used throughout the front desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  RoomCategory   │   │     Booking     │   │  BookingChange  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Suite   1-20   │   │  room_number    │   │  RenameGuest    │       │
//! │  │  Double 21-60   │   │  guest_name     │   │  ChangeContact  │       │
//! │  │  Single 61-100  │   │  total_price    │   │  ChangeCategory │       │
//! │  └─────────────────┘   │  check_in/out   │   │  ChangeCheckIn  │       │
//! │                        └─────────────────┘   │  ChangeNights   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Room Number Identity
//! A booking has no id of its own: its room number identifies it while it is
//! active, and the room number alone determines its category.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::date::Date;
use crate::money::Money;

// =============================================================================
// Room Category
// =============================================================================

/// The three kinds of room the hotel sells.
///
/// Each category owns a fixed nightly rate and a reserved band of room
/// numbers; the bands never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    Suite,
    Double,
    Single,
}

impl RoomCategory {
    /// All categories, in menu order.
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Suite,
        RoomCategory::Double,
        RoomCategory::Single,
    ];

    /// Nightly rate.
    pub const fn rate(&self) -> Money {
        match self {
            RoomCategory::Suite => Money::from_major_minor(1000, 0),
            RoomCategory::Double => Money::from_major_minor(600, 0),
            RoomCategory::Single => Money::from_major_minor(400, 0),
        }
    }

    /// Room numbers reserved for this category.
    pub const fn rooms(&self) -> RangeInclusive<u32> {
        match self {
            RoomCategory::Suite => 1..=20,
            RoomCategory::Double => 21..=60,
            RoomCategory::Single => 61..=100,
        }
    }

    /// Integer code used in `bookings.txt` and the menu (1, 2, 3).
    pub const fn code(&self) -> u8 {
        match self {
            RoomCategory::Suite => 1,
            RoomCategory::Double => 2,
            RoomCategory::Single => 3,
        }
    }

    /// Inverse of [`RoomCategory::code`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RoomCategory::Suite),
            2 => Some(RoomCategory::Double),
            3 => Some(RoomCategory::Single),
            _ => None,
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            RoomCategory::Suite => "Suite",
            RoomCategory::Double => "Double",
            RoomCategory::Single => "Single",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either the menu code (`"1"`) or the name (`"suite"`).
impl FromStr for RoomCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| format!("Unknown room type code: {}", code));
        }
        match s.to_lowercase().as_str() {
            "suite" => Ok(RoomCategory::Suite),
            "double" => Ok(RoomCategory::Double),
            "single" => Ok(RoomCategory::Single),
            other => Err(format!(
                "Unknown room type: '{}'. Valid options: suite, double, single",
                other
            )),
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A reservation held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Room assigned from the category's band.
    pub room_number: u32,

    /// Guest name, at most 49 characters, single line.
    pub guest_name: String,

    /// Contact number, 8-12 characters of digits, `+` and `-`.
    pub contact: String,

    pub category: RoomCategory,

    /// Length of stay, 1-30.
    pub nights: u32,

    /// Always `category.rate() * nights` for bookings made by the store.
    pub total_price: Money,

    /// Whether the booking occupies its room. Bookings in the store are
    /// always active; cancelled ones are removed outright.
    pub active: bool,

    pub check_in: Date,

    /// `check_in.add_nights(nights)`.
    pub check_out: Date,
}

impl Booking {
    /// Recomputes price and check-out from category, nights and check-in.
    pub(crate) fn refresh_derived(&mut self) {
        self.total_price = self.category.rate() * self.nights;
        self.check_out = self.check_in.add_nights(self.nights);
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Everything the caller supplies to make a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub guest_name: String,
    pub contact: String,
    pub category: RoomCategory,
    pub nights: u32,
    pub check_in: Date,
}

/// How to look bookings up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Exact room number; yields at most one booking.
    ByRoom(u32),
    /// Case-sensitive substring of the guest name.
    ByGuestName(String),
}

impl SearchCriteria {
    /// Whether `booking` satisfies the criteria.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            SearchCriteria::ByRoom(room_number) => booking.room_number == *room_number,
            SearchCriteria::ByGuestName(query) => booking.guest_name.contains(query.as_str()),
        }
    }
}

/// A single-field modification of an existing booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingChange {
    RenameGuest(String),
    ChangeContact(String),
    /// Moves the guest to the lowest free room of the new category.
    ChangeCategory(RoomCategory),
    ChangeCheckIn { check_in: Date, today: Date },
    ChangeNights(u32),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(RoomCategory::Suite.rate().cents(), 100_000);
        assert_eq!(RoomCategory::Double.rate().cents(), 60_000);
        assert_eq!(RoomCategory::Single.rate().cents(), 40_000);
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        for room in 1..=100 {
            let owners = RoomCategory::ALL
                .iter()
                .filter(|c| c.rooms().contains(&room))
                .count();
            assert_eq!(owners, 1, "room {} owned by {} categories", room, owners);
        }
        assert!(RoomCategory::ALL.iter().all(|c| !c.rooms().contains(&0)));
    }

    #[test]
    fn test_codes_round_trip() {
        for category in RoomCategory::ALL {
            assert_eq!(RoomCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(RoomCategory::from_code(0), None);
        assert_eq!(RoomCategory::from_code(4), None);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("2".parse::<RoomCategory>().unwrap(), RoomCategory::Double);
        assert_eq!("Suite".parse::<RoomCategory>().unwrap(), RoomCategory::Suite);
        assert_eq!(" double ".parse::<RoomCategory>().unwrap(), RoomCategory::Double);
        assert!("4".parse::<RoomCategory>().is_err());
        assert!("penthouse".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_search_criteria_matches() {
        let booking = Booking {
            room_number: 61,
            guest_name: "Anna Lee".to_string(),
            contact: "12345678".to_string(),
            category: RoomCategory::Single,
            nights: 1,
            total_price: RoomCategory::Single.rate(),
            active: true,
            check_in: Date::new(1, 1, 2025),
            check_out: Date::new(2, 1, 2025),
        };

        assert!(SearchCriteria::ByRoom(61).matches(&booking));
        assert!(!SearchCriteria::ByRoom(62).matches(&booking));
        assert!(SearchCriteria::ByGuestName("na L".to_string()).matches(&booking));
        assert!(!SearchCriteria::ByGuestName("anna".to_string()).matches(&booking));
    }
}
