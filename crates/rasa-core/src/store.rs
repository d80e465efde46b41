//! # Booking Store
//!
//! The in-memory collection of live bookings.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Store Operations                             │
//! │                                                                         │
//! │  Menu Action              Store Method            State Change          │
//! │  ───────────              ────────────            ────────────          │
//! │                                                                         │
//! │  Add New Booking ────────► add() ───────────────► bookings.push(b)     │
//! │                                                                         │
//! │  Cancel Booking ─────────► cancel() ────────────► bookings.remove(i)   │
//! │                                                                         │
//! │  Modify Booking ─────────► modify() ────────────► bookings[i].field=x  │
//! │                                                                         │
//! │  Search / Display ───────► search() / list() ───► (read only)          │
//! │                                                                         │
//! │  Startup load ───────────► restore() ───────────► bookings.push(b)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most [`MAX_BOOKINGS`] bookings
//! - No two bookings share a room number
//! - Every room number lies in its category's band
//! - Insertion order is kept; cancelling shifts later bookings left
//!
//! Every lookup is a linear scan. With at most 100 bookings that is all the
//! indexing the store needs.

use crate::date::Date;
use crate::error::{CoreError, CoreResult};
use crate::types::{Booking, BookingChange, NewBooking, RoomCategory, SearchCriteria};
use crate::validation::{normalize_guest_name, validate_check_in, validate_contact, validate_nights};
use crate::MAX_BOOKINGS;

/// Ordered, capacity-bounded collection of active bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl Default for BookingStore {
    fn default() -> Self {
        BookingStore::new()
    }
}

impl BookingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BookingStore {
            bookings: Vec::with_capacity(MAX_BOOKINGS),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of bookings held.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bookings.len() >= MAX_BOOKINGS
    }

    /// All bookings in insertion order, for snapshotting.
    pub fn as_slice(&self) -> &[Booking] {
        &self.bookings
    }

    /// The active booking holding `room_number`, if any.
    pub fn get(&self, room_number: u32) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.active && b.room_number == room_number)
    }

    fn position(&self, room_number: u32) -> CoreResult<usize> {
        self.bookings
            .iter()
            .position(|b| b.active && b.room_number == room_number)
            .ok_or(CoreError::NotFound { room_number })
    }

    fn is_room_taken(&self, room_number: u32) -> bool {
        self.get(room_number).is_some()
    }

    // =========================================================================
    // Room Assignment
    // =========================================================================

    /// Lowest room number in `category`'s band not held by an active booking.
    ///
    /// ## Example
    /// ```rust
    /// use rasa_core::{BookingStore, RoomCategory};
    ///
    /// let store = BookingStore::new();
    /// assert_eq!(store.find_available_room(RoomCategory::Double), Some(21));
    /// ```
    pub fn find_available_room(&self, category: RoomCategory) -> Option<u32> {
        category.rooms().find(|room| !self.is_room_taken(*room))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Makes a new booking.
    ///
    /// ## Checks (in order)
    /// 1. Store not full → `CapacityExceeded`
    /// 2. Contact → `InvalidContact`
    /// 3. Nights in 1..=30 → `InvalidNights`
    /// 4. Check-in exists → `InvalidDate`
    /// 5. Check-in within a year of `today` → `DateOutOfWindow`
    /// 6. A room is free in the category → `NoRoomAvailable`
    ///
    /// On success the booking gets the lowest free room, its price and
    /// check-out are derived, and it is appended at the end.
    pub fn add(&mut self, request: NewBooking, today: Date) -> CoreResult<&Booking> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded { max: MAX_BOOKINGS });
        }

        validate_contact(&request.contact)?;
        validate_nights(request.nights)?;
        validate_check_in(request.check_in, today)?;

        let room_number = self
            .find_available_room(request.category)
            .ok_or(CoreError::NoRoomAvailable {
                category: request.category,
            })?;

        let mut booking = Booking {
            room_number,
            guest_name: normalize_guest_name(&request.guest_name),
            contact: request.contact,
            category: request.category,
            nights: request.nights,
            total_price: request.category.rate(),
            active: true,
            check_in: request.check_in,
            check_out: request.check_in,
        };
        booking.refresh_derived();

        self.bookings.push(booking);
        Ok(&self.bookings[self.bookings.len() - 1])
    }

    /// Removes the booking holding `room_number` and returns it.
    ///
    /// Later bookings keep their relative order. Asking the guest for
    /// confirmation is up to the caller.
    pub fn cancel(&mut self, room_number: u32) -> CoreResult<Booking> {
        let index = self.position(room_number)?;
        Ok(self.bookings.remove(index))
    }

    /// Bookings matching `criteria`, in insertion order.
    ///
    /// The iterator borrows the live store; call again for fresh results.
    pub fn search<'a>(
        &'a self,
        criteria: &'a SearchCriteria,
    ) -> impl Iterator<Item = &'a Booking> + 'a {
        self.list().filter(move |b| criteria.matches(b))
    }

    /// All active bookings in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Booking> + '_ {
        self.bookings.iter().filter(|b| b.active)
    }

    /// Applies one change to the booking holding `room_number`.
    ///
    /// ## Behavior
    /// - `RenameGuest`: always succeeds
    /// - `ChangeContact`: `InvalidContact` if the new contact is rejected
    /// - `ChangeCategory`: `NoRoomAvailable` if the new band is full; otherwise
    ///   moves to its lowest free room and reprices
    /// - `ChangeCheckIn`: same date checks as [`BookingStore::add`]; moves
    ///   check-out with it
    /// - `ChangeNights`: `InvalidNights` outside 1..=30; reprices and moves
    ///   check-out
    ///
    /// A failed change leaves the booking untouched.
    pub fn modify(&mut self, room_number: u32, change: BookingChange) -> CoreResult<&Booking> {
        let index = self.position(room_number)?;

        match change {
            BookingChange::RenameGuest(name) => {
                self.bookings[index].guest_name = normalize_guest_name(&name);
            }
            BookingChange::ChangeContact(contact) => {
                validate_contact(&contact)?;
                self.bookings[index].contact = contact;
            }
            BookingChange::ChangeCategory(category) => {
                let new_room = self
                    .find_available_room(category)
                    .ok_or(CoreError::NoRoomAvailable { category })?;
                let booking = &mut self.bookings[index];
                booking.category = category;
                booking.room_number = new_room;
                booking.refresh_derived();
            }
            BookingChange::ChangeCheckIn { check_in, today } => {
                validate_check_in(check_in, today)?;
                let booking = &mut self.bookings[index];
                booking.check_in = check_in;
                booking.refresh_derived();
            }
            BookingChange::ChangeNights(nights) => {
                validate_nights(nights)?;
                let booking = &mut self.bookings[index];
                booking.nights = nights;
                booking.refresh_derived();
            }
        }

        Ok(&self.bookings[index])
    }

    /// Appends a booking read back from storage, as-is.
    ///
    /// Nothing is recomputed, but the store invariants are enforced:
    /// - `CapacityExceeded` when full
    /// - `RoomOutOfRange` when the room is outside the booking's category band
    /// - `RoomTaken` when another active booking already holds the room
    pub fn restore(&mut self, booking: Booking) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded { max: MAX_BOOKINGS });
        }

        if !booking.category.rooms().contains(&booking.room_number) {
            return Err(CoreError::RoomOutOfRange {
                room_number: booking.room_number,
                category: booking.category,
            });
        }

        if booking.active && self.is_room_taken(booking.room_number) {
            return Err(CoreError::RoomTaken {
                room_number: booking.room_number,
            });
        }

        self.bookings.push(booking);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::collections::HashSet;

    const TODAY: Date = Date::new(1, 3, 2025);

    fn request(name: &str, category: RoomCategory) -> NewBooking {
        NewBooking {
            guest_name: name.to_string(),
            contact: "012-3456789".to_string(),
            category,
            nights: 2,
            check_in: Date::new(10, 3, 2025),
        }
    }

    fn add(store: &mut BookingStore, name: &str, category: RoomCategory) -> u32 {
        store.add(request(name, category), TODAY).unwrap().room_number
    }

    fn assert_rooms_unique(store: &BookingStore) {
        let mut seen = HashSet::new();
        for booking in store.list() {
            assert!(
                seen.insert(booking.room_number),
                "room {} booked twice",
                booking.room_number
            );
        }
    }

    #[test]
    fn test_add_assigns_room_in_category_band() {
        let mut store = BookingStore::new();

        for category in RoomCategory::ALL {
            let room = add(&mut store, "Guest", category);
            assert!(category.rooms().contains(&room));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_derives_price_and_check_out() {
        let mut store = BookingStore::new();
        let mut req = request("Anna", RoomCategory::Single);
        req.nights = 3;
        req.check_in = Date::new(30, 4, 2025);

        let booking = store.add(req, TODAY).unwrap();

        assert_eq!(booking.total_price.cents(), 120_000);
        assert_eq!(booking.check_out, Date::new(33, 4, 2025));
        assert!(booking.active);
        assert_eq!(booking.room_number, 61);
    }

    #[test]
    fn test_add_validation_order() {
        let mut store = BookingStore::new();

        let mut req = request("Anna", RoomCategory::Suite);
        req.contact = "123".to_string();
        req.nights = 0;
        assert!(matches!(
            store.add(req, TODAY),
            Err(CoreError::Validation(ValidationError::InvalidContact { .. }))
        ));

        let mut req = request("Anna", RoomCategory::Suite);
        req.nights = 31;
        req.check_in = Date::new(31, 2, 2025);
        assert!(matches!(
            store.add(req, TODAY),
            Err(CoreError::Validation(ValidationError::InvalidNights { nights: 31, .. }))
        ));

        let mut req = request("Anna", RoomCategory::Suite);
        req.check_in = Date::new(31, 2, 2020);
        assert!(matches!(
            store.add(req, TODAY),
            Err(CoreError::Validation(ValidationError::InvalidDate { .. }))
        ));

        let mut req = request("Anna", RoomCategory::Suite);
        req.check_in = Date::new(28, 2, 2025);
        assert!(matches!(
            store.add(req, TODAY),
            Err(CoreError::Validation(ValidationError::DateOutOfWindow { .. }))
        ));

        assert!(store.is_empty());
    }

    #[test]
    fn test_add_fails_when_category_full() {
        let mut store = BookingStore::new();
        for _ in 0..20 {
            add(&mut store, "Suite guest", RoomCategory::Suite);
        }

        let err = store
            .add(request("One too many", RoomCategory::Suite), TODAY)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::NoRoomAvailable {
                category: RoomCategory::Suite
            }
        );
        assert_eq!(add(&mut store, "Double guest", RoomCategory::Double), 21);
    }

    #[test]
    fn test_capacity_bound() {
        let mut store = BookingStore::new();
        for category in RoomCategory::ALL {
            for _ in category.rooms() {
                add(&mut store, "Guest", category);
            }
        }
        assert_eq!(store.len(), 100);
        assert!(store.is_full());

        for category in RoomCategory::ALL {
            assert_eq!(
                store.add(request("Late", category), TODAY).unwrap_err(),
                CoreError::CapacityExceeded { max: 100 }
            );
        }
        assert_rooms_unique(&store);
    }

    #[test]
    fn test_lowest_free_room_is_reused() {
        let mut store = BookingStore::new();
        assert_eq!(add(&mut store, "A", RoomCategory::Suite), 1);
        assert_eq!(add(&mut store, "B", RoomCategory::Suite), 2);

        store.cancel(1).unwrap();

        assert_eq!(add(&mut store, "C", RoomCategory::Suite), 1);
    }

    #[test]
    fn test_cancel_compacts_in_order() {
        let mut store = BookingStore::new();
        add(&mut store, "First", RoomCategory::Double);
        add(&mut store, "Second", RoomCategory::Double);
        add(&mut store, "Third", RoomCategory::Double);

        let removed = store.cancel(22).unwrap();
        assert_eq!(removed.guest_name, "Second");

        let names: Vec<_> = store.list().map(|b| b.guest_name.as_str()).collect();
        assert_eq!(names, ["First", "Third"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_cancel_unknown_room() {
        let mut store = BookingStore::new();
        add(&mut store, "A", RoomCategory::Suite);

        assert_eq!(
            store.cancel(5).unwrap_err(),
            CoreError::NotFound { room_number: 5 }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_by_guest_substring() {
        let mut store = BookingStore::new();
        add(&mut store, "Anna", RoomCategory::Suite);
        add(&mut store, "Bob", RoomCategory::Suite);

        let criteria = SearchCriteria::ByGuestName("An".to_string());
        let found: Vec<_> = store.search(&criteria).map(|b| b.guest_name.as_str()).collect();
        assert_eq!(found, ["Anna"]);

        // case-sensitive
        let criteria = SearchCriteria::ByGuestName("an".to_string());
        assert_eq!(store.search(&criteria).count(), 0);

        // restartable: a second call sees later changes
        add(&mut store, "Hannah", RoomCategory::Single);
        let criteria = SearchCriteria::ByGuestName("an".to_string());
        assert_eq!(store.search(&criteria).count(), 1);
    }

    #[test]
    fn test_search_by_room() {
        let mut store = BookingStore::new();
        add(&mut store, "Anna", RoomCategory::Double);

        assert_eq!(store.search(&SearchCriteria::ByRoom(21)).count(), 1);
        assert_eq!(store.search(&SearchCriteria::ByRoom(22)).count(), 0);
    }

    #[test]
    fn test_modify_rename_and_contact() {
        let mut store = BookingStore::new();
        add(&mut store, "Anna", RoomCategory::Suite);

        let updated = store
            .modify(1, BookingChange::RenameGuest("Anna Lee".to_string()))
            .unwrap();
        assert_eq!(updated.guest_name, "Anna Lee");

        let err = store
            .modify(1, BookingChange::ChangeContact("12ab".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidContact { .. })
        ));
        assert_eq!(store.get(1).unwrap().contact, "012-3456789");

        store
            .modify(1, BookingChange::ChangeContact("+6012345678".to_string()))
            .unwrap();
        assert_eq!(store.get(1).unwrap().contact, "+6012345678");
    }

    #[test]
    fn test_modify_category_moves_and_reprices() {
        let mut store = BookingStore::new();
        add(&mut store, "Anna", RoomCategory::Suite);
        add(&mut store, "Bob", RoomCategory::Single);

        let updated = store
            .modify(1, BookingChange::ChangeCategory(RoomCategory::Single))
            .unwrap();
        assert_eq!(updated.room_number, 62);
        assert_eq!(updated.total_price, RoomCategory::Single.rate() * 2u32);
        assert!(store.get(1).is_none());
        assert_rooms_unique(&store);

        // room 1 is free again
        assert_eq!(store.find_available_room(RoomCategory::Suite), Some(1));
    }

    #[test]
    fn test_modify_category_without_free_room() {
        let mut store = BookingStore::new();
        for _ in 0..20 {
            add(&mut store, "Suite guest", RoomCategory::Suite);
        }
        add(&mut store, "Anna", RoomCategory::Double);

        let err = store
            .modify(21, BookingChange::ChangeCategory(RoomCategory::Suite))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::NoRoomAvailable {
                category: RoomCategory::Suite
            }
        );
        assert_eq!(store.get(21).unwrap().category, RoomCategory::Double);
    }

    #[test]
    fn test_modify_check_in_and_nights() {
        let mut store = BookingStore::new();
        add(&mut store, "Anna", RoomCategory::Double);

        let updated = store
            .modify(
                21,
                BookingChange::ChangeCheckIn {
                    check_in: Date::new(28, 2, 2026),
                    today: TODAY,
                },
            )
            .unwrap();
        assert_eq!(updated.check_out, Date::new(30, 2, 2026));

        let err = store
            .modify(
                21,
                BookingChange::ChangeCheckIn {
                    check_in: Date::new(2, 3, 2026),
                    today: TODAY,
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::DateOutOfWindow { .. })
        ));

        let updated = store.modify(21, BookingChange::ChangeNights(5)).unwrap();
        assert_eq!(updated.total_price.cents(), 300_000);
        assert_eq!(updated.check_out, Date::new(33, 2, 2026));

        assert!(store.modify(21, BookingChange::ChangeNights(0)).is_err());
        assert_eq!(store.get(21).unwrap().nights, 5);
    }

    #[test]
    fn test_modify_unknown_room() {
        let mut store = BookingStore::new();
        assert_eq!(
            store.modify(7, BookingChange::ChangeNights(3)).unwrap_err(),
            CoreError::NotFound { room_number: 7 }
        );
    }

    #[test]
    fn test_uniqueness_under_mixed_operations() {
        let mut store = BookingStore::new();
        let categories = RoomCategory::ALL;

        for i in 0..60u32 {
            let category = categories[(i % 3) as usize];
            let _ = store.add(request("Guest", category), TODAY);

            if i % 4 == 0 {
                let first = store.list().next().map(|b| b.room_number);
                if let Some(room) = first {
                    store.cancel(room).unwrap();
                }
            }
            if i % 5 == 0 {
                if let Some(room) = store.list().last().map(|b| b.room_number) {
                    let target = categories[((i / 5) % 3) as usize];
                    let _ = store.modify(room, BookingChange::ChangeCategory(target));
                }
            }
            assert_rooms_unique(&store);
        }
    }

    #[test]
    fn test_restore_enforces_invariants() {
        let mut source = BookingStore::new();
        add(&mut source, "Anna", RoomCategory::Suite);
        let booking = source.get(1).unwrap().clone();

        let mut store = BookingStore::new();
        store.restore(booking.clone()).unwrap();
        assert_eq!(
            store.restore(booking.clone()).unwrap_err(),
            CoreError::RoomTaken { room_number: 1 }
        );

        let mut misplaced = booking;
        misplaced.room_number = 50;
        assert_eq!(
            store.restore(misplaced).unwrap_err(),
            CoreError::RoomOutOfRange {
                room_number: 50,
                category: RoomCategory::Suite
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_modify_restored_booking_with_huge_day() {
        let mut source = BookingStore::new();
        add(&mut source, "Anna", RoomCategory::Suite);
        let mut damaged = source.get(1).unwrap().clone();
        damaged.check_in = Date::new(u32::MAX, 6, 2025);

        let mut store = BookingStore::new();
        store.restore(damaged).unwrap();

        let booking = store.modify(1, BookingChange::ChangeNights(3)).unwrap();
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.check_out, Date::new(u32::MAX, 6, 2025));

        let booking = store
            .modify(1, BookingChange::ChangeCategory(RoomCategory::Single))
            .unwrap();
        assert_eq!(booking.room_number, 61);
    }
}
