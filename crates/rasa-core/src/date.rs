//! # Date Module
//!
//! Calendar dates as the front desk sees them: a plain day/month/year
//! triple with no timezone.
//!
//! ## Naive Arithmetic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CHECK-OUT IS DAY + NIGHTS, NOTHING ELSE                                │
//! │                                                                         │
//! │    check-in  28/04/2025, 5 nights                                       │
//! │    check-out 33/04/2025   (month and year never roll over)              │
//! │                                                                         │
//! │  BOOKING WINDOW IS TODAY ..= SAME DAY NEXT YEAR                         │
//! │                                                                         │
//! │    today 29/02/2024 → last allowed check-in 29/02/2025                  │
//! │    (compared field by field, the window end itself is never validated) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bookings stored in `bookings.txt` depend on this exact arithmetic, so it
//! is kept as-is rather than normalized through a calendar library.

use std::cmp::Ordering;
use std::fmt;

use chrono::Datelike;

/// A calendar date.
///
/// Any triple can be represented (check-out dates routinely have a day past
/// the end of the month); [`Date::is_valid`] says whether it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Date {
    /// Creates a date from day, month and year, in that order.
    #[inline]
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Date { day, month, year }
    }

    /// Checks that the month is 1-12 and the day exists in that month.
    ///
    /// ## Example
    /// ```rust
    /// use rasa_core::Date;
    ///
    /// assert!(Date::new(29, 2, 2024).is_valid());
    /// assert!(!Date::new(29, 2, 2023).is_valid());
    /// assert!(!Date::new(1, 13, 2023).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        match days_in_month(self.month, self.year) {
            Some(days) => self.day >= 1 && self.day <= days,
            None => false,
        }
    }

    /// Returns the check-out date for a stay of `nights` nights.
    ///
    /// Only the day moves; month and year are copied unchanged even when the
    /// day runs past the end of the month. The day saturates at `u32::MAX`.
    #[inline]
    pub const fn add_nights(&self, nights: u32) -> Date {
        Date {
            day: self.day.saturating_add(nights),
            month: self.month,
            year: self.year,
        }
    }

    /// Compares two dates on (year, month, day).
    #[inline]
    pub fn compare(&self, other: &Date) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }

    /// The same day and month one year later, without validation. The year
    /// saturates at `i32::MAX`.
    #[inline]
    pub const fn one_year_later(&self) -> Date {
        Date {
            day: self.day,
            month: self.month,
            year: self.year.saturating_add(1),
        }
    }

    /// True when `self` is between `today` and one year after `today`,
    /// both ends inclusive.
    ///
    /// ## Example
    /// ```rust
    /// use rasa_core::Date;
    ///
    /// let today = Date::new(15, 6, 2025);
    /// assert!(Date::new(15, 6, 2025).is_within_booking_window(today));
    /// assert!(Date::new(15, 6, 2026).is_within_booking_window(today));
    /// assert!(!Date::new(16, 6, 2026).is_within_booking_window(today));
    /// assert!(!Date::new(14, 6, 2025).is_within_booking_window(today));
    /// ```
    pub fn is_within_booking_window(&self, today: Date) -> bool {
        *self >= today && *self <= today.one_year_later()
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats as `DD/MM/YYYY`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl From<chrono::NaiveDate> for Date {
    fn from(date: chrono::NaiveDate) -> Self {
        Date::new(date.day(), date.month(), date.year())
    }
}

// =============================================================================
// Calendar Helpers
// =============================================================================

/// Gregorian leap year: divisible by 400, or by 4 and not by 100.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` of `year`, or `None` if the month is not 1-12.
pub const fn days_in_month(month: u32, year: i32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

// =============================================================================
// Unit Tests
// =============================================================================
