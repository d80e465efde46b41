//! # Front Desk Menu
//!
//! The interactive session the reception clerk drives.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Session                                    │
//! │                                                                         │
//! │   ┌──────────────┐    1-5    ┌────────────────┐   Enter   ┌──────────┐ │
//! │   │ banner +     │──────────►│ action screen  │──────────►│  back to │ │
//! │   │ choices 1-6  │           │ (BookingStore) │           │  menu    │ │
//! │   └──────┬───────┘           └───────┬────────┘           └──────────┘ │
//! │          │ 6                          │ end of input                    │
//! │          ▼                            ▼                                 │
//! │      run() returns ◄──────────────────┘   caller saves the store        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rule violations reported by the store are shown to the clerk and the
//! session carries on. Only terminal I/O failures end it early.

use std::io::{self, BufRead, Write};

use rasa_core::validation::{is_valid_contact, validate_check_in};
use rasa_core::{
    Booking, BookingChange, BookingStore, CoreError, Date, NewBooking, RoomCategory,
    SearchCriteria, ValidationError, MAX_NIGHTS, MIN_NIGHTS,
};
use tracing::{debug, info};

use crate::prompt::{parse_leading_integer, Console};

/// Propagates end of input out of an action as [`Flow::Exit`].
macro_rules! or_exit {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

const INVALID_CONTACT: &str =
    "Invalid contact number. Please enter 8-12 digits with optional +/- symbols.";

// =============================================================================
// Session
// =============================================================================

/// Where the session gets "today" from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Today {
    /// The local system clock.
    Clock,
    /// Asked of the clerk each time a date is checked.
    Prompt,
    /// A fixed date, for rehearsals and tests.
    Fixed(Date),
}

/// What to do after an action screen.
enum Flow {
    Continue,
    Exit,
}

/// An interactive front desk session over one booking store.
pub struct Frontdesk<R, W> {
    console: Console<R, W>,
    store: BookingStore,
    today: Today,
    hotel_name: String,
}

impl<R: BufRead, W: Write> Frontdesk<R, W> {
    pub fn new(
        store: BookingStore,
        console: Console<R, W>,
        today: Today,
        hotel_name: impl Into<String>,
    ) -> Self {
        Frontdesk {
            console,
            store,
            today,
            hotel_name: hotel_name.into(),
        }
    }

    /// Hands back the store and console once the session is over.
    pub fn into_parts(self) -> (BookingStore, Console<R, W>) {
        (self.store, self.console)
    }

    /// Runs the menu until Save & Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.console.ask_integer("Enter your choice: ")? else {
                return Ok(());
            };

            let flow = match choice {
                1 => self.add_booking()?,
                2 => self.cancel_booking()?,
                3 => self.display_bookings()?,
                4 => self.search_bookings()?,
                5 => self.modify_booking()?,
                6 => return Ok(()),
                _ => {
                    self.console
                        .notice("Invalid choice. Please enter a number from 1 to 6.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
            if self.console.ask("\nPress Enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let title = format!("{} ROOM BOOKING", self.hotel_name.to_uppercase());
        let rule = "=".repeat(45);
        let blank = format!("|{:43}|", "");
        let dashes = format!("|{:^43}|", "-".repeat(28));

        let c = &mut self.console;
        c.say("\n")?;
        c.say(format!("\t\t{}", rule))?;
        c.say(format!("\t\t{}", blank))?;
        c.say(format!("\t\t{}", dashes))?;
        c.say(format!("\t\t|{:^43}|", title))?;
        c.say(format!("\t\t{}", dashes))?;
        c.say(format!("\t\t{}", blank))?;
        c.say(format!("\t\t{}\n", rule))?;
        c.say(format!(
            "===== {} HOTEL SERVICES =====",
            self.hotel_name.to_uppercase()
        ))?;
        c.say("1. Add New Booking")?;
        c.say("2. Cancel Booking")?;
        c.say("3. Display All Bookings")?;
        c.say("4. Search for a Booking")?;
        c.say("5. Modify Existing Booking")?;
        c.say("6. Save & Exit")?;
        c.say("==================================")
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_booking(&mut self) -> io::Result<Flow> {
        if self.store.is_full() {
            self.console
                .notice("No more rooms can be booked. Hotel is full!")?;
            return Ok(Flow::Continue);
        }

        self.console.say("\n=== ADDING NEW BOOKING ===")?;
        let guest_name = or_exit!(self.console.ask("Enter guest name      : "));
        let contact = or_exit!(self.ask_contact("Enter contact number(8-12 digits) : "));

        self.show_rates()?;
        let line = or_exit!(self
            .console
            .ask("Enter room type (1 for Suite, 2 for Double, 3 for Single): "));
        let Some(category) = parse_category(&line) else {
            self.console
                .notice("Invalid input. Please enter a valid room type (1-3).")?;
            return Ok(Flow::Continue);
        };

        let line = or_exit!(self.console.ask("Enter number of nights(1-30): "));
        let Some(nights) = parse_nights(&line) else {
            self.console
                .notice("Invalid input. Please enter a positive number of nights.")?;
            return Ok(Flow::Continue);
        };

        self.console.say("\nCheck-in Date:")?;
        let today = or_exit!(self.today());
        self.console.say(format!("Today is: {}", today))?;
        let check_in = or_exit!(self.ask_check_in(
            today,
            [
                "Enter check-in day (DD): ",
                "Enter check-in month (MM): ",
                "Enter check-in year (YYYY): ",
            ],
        ));

        let request = NewBooking {
            guest_name,
            contact,
            category,
            nights,
            check_in,
        };

        match self.store.add(request, today).cloned() {
            Ok(booking) => {
                info!(
                    room = booking.room_number,
                    category = %booking.category,
                    nights = booking.nights,
                    "Booking added"
                );
                let rule = "=".repeat(59);
                let c = &mut self.console;
                c.say(format!("\n{}", rule))?;
                c.say("Booking added successfully!")?;
                c.say(format!("Room number assigned: {}", booking.room_number))?;
                c.say(format!("Check-in date: {}", booking.check_in))?;
                c.say(format!("Check-out date: {}", booking.check_out))?;
                c.say(format!("Total price: {}", booking.total_price))?;
                c.say(rule)?;
            }
            Err(CoreError::NoRoomAvailable { .. }) => {
                self.console
                    .notice("No available room of the selected type. Sorry!")?;
            }
            Err(err) => self.console.notice(err.to_string())?,
        }

        Ok(Flow::Continue)
    }

    fn cancel_booking(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.notice("No bookings found.")?;
            return Ok(Flow::Continue);
        }

        let room_number = or_exit!(self.ask_room_number("\nEnter room number to cancel: "));
        let Some(booking) = room_number.and_then(|room| self.store.get(room)).cloned() else {
            self.console
                .notice(format!("Room {} not found or not booked.", show_room(room_number)))?;
            return Ok(Flow::Continue);
        };

        let c = &mut self.console;
        c.say("\n=== BOOKING DETAILS ===")?;
        c.say(format!("Room Number: {}", booking.room_number))?;
        c.say(format!("Guest Name : {}", booking.guest_name))?;
        c.say(format!("Room Type  : {}", booking.category))?;
        c.say(format!("Check-in   : {}", booking.check_in))?;
        c.say(format!("Check-out  : {}", booking.check_out))?;

        let answer = or_exit!(self
            .console
            .ask("\nAre you sure you want to cancel this booking? (y/n): "));

        if matches!(answer.trim_start().chars().next(), Some('y' | 'Y')) {
            match self.store.cancel(booking.room_number) {
                Ok(removed) => {
                    info!(room = removed.room_number, "Booking cancelled");
                    self.console.notice("Booking canceled successfully.")?;
                }
                Err(err) => self.console.notice(err.to_string())?,
            }
        } else {
            self.console.notice("Cancellation aborted.")?;
        }

        Ok(Flow::Continue)
    }

    fn display_bookings(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.notice("No bookings found.")?;
            return Ok(Flow::Continue);
        }

        let c = &mut self.console;
        c.say("\n========================== BOOKING DETAILS ==========================")?;
        c.say(format!(
            "{:<5} {:<20} {:<15} {:<10} {:<12} {:<12} {:<10}",
            "Room", "Guest Name", "Contact", "Type", "Check-in", "Check-out", "Price"
        ))?;
        c.say("-".repeat(68))?;
        for booking in self.store.list() {
            c.say(table_row(booking))?;
        }
        c.say("=".repeat(68))?;

        Ok(Flow::Continue)
    }

    fn search_bookings(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.notice("No bookings found.")?;
            return Ok(Flow::Continue);
        }

        self.console.say("\n=== SEARCH BOOKING ===")?;
        self.console.say("1. Search by Room Number")?;
        self.console.say("2. Search by Guest Name")?;

        match or_exit!(self.console.ask_integer("Enter your choice: ")) {
            1 => {
                let room_number = or_exit!(self.ask_room_number("Enter room number: "));
                let criteria = SearchCriteria::ByRoom(room_number.unwrap_or(0));
                debug!(?criteria, "Searching bookings");

                let c = &mut self.console;
                match self.store.search(&criteria).next() {
                    Some(booking) => {
                        c.say("\n=== BOOKING DETAILS ===")?;
                        c.say(full_details(booking))?;
                        c.say(format!("Nights     : {}", booking.nights))?;
                        c.say(format!("Total Price: {}", booking.total_price))?;
                        c.say("=======================")?;
                    }
                    None => c.notice(format!(
                        "No booking found for Room {}.",
                        show_room(room_number)
                    ))?,
                };
            }
            2 => {
                let query = or_exit!(self.console.ask("Enter guest name: "));
                let criteria = SearchCriteria::ByGuestName(query.clone());
                debug!(?criteria, "Searching bookings");

                let c = &mut self.console;
                c.say("\n=== SEARCH RESULTS ===")?;
                let mut found = 0;
                for booking in self.store.search(&criteria) {
                    found += 1;
                    c.say(format!("\n--- Booking {} ---", found))?;
                    c.say(full_details(booking))?;
                    c.say(format!("Total Price: {}", booking.total_price))?;
                }
                if found == 0 {
                    c.notice(format!("No bookings found for guest: {}", query))?;
                } else {
                    c.say("\n=== End of Search Results ===")?;
                }
            }
            _ => self.console.notice("Invalid choice. Try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn modify_booking(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            self.console.notice("No bookings found.")?;
            return Ok(Flow::Continue);
        }

        let room_number = or_exit!(self.ask_room_number("\nEnter room number to modify: "));
        let Some(booking) = room_number.and_then(|room| self.store.get(room)).cloned() else {
            self.console
                .notice(format!("Room {} not found or not booked.", show_room(room_number)))?;
            return Ok(Flow::Continue);
        };

        let c = &mut self.console;
        c.say("\n=== CURRENT BOOKING DETAILS ===")?;
        c.say(format!("1. Guest Name : {}", booking.guest_name))?;
        c.say(format!("2. Contact    : {}", booking.contact))?;
        c.say(format!("3. Room Type  : {}", booking.category))?;
        c.say(format!("4. Check-in   : {}", booking.check_in))?;
        c.say(format!("5. Nights     : {}", booking.nights))?;
        c.say("6. Return to Main Menu")?;

        let room = booking.room_number;
        let (change, done) = match or_exit!(self.console.ask_integer("\nEnter what to modify (1-6): ")) {
            1 => {
                let name = or_exit!(self.console.ask("Enter new guest name: "));
                (BookingChange::RenameGuest(name), Done::GuestName)
            }
            2 => {
                let contact = or_exit!(self.ask_contact("Enter new contact number: "));
                (BookingChange::ChangeContact(contact), Done::Contact)
            }
            3 => {
                self.console
                    .say(format!("Current room type: {}", booking.category))?;
                self.show_rates()?;
                let category = or_exit!(self.ask_category());
                (BookingChange::ChangeCategory(category), Done::Category { was: room })
            }
            4 => {
                let today = or_exit!(self.today());
                self.console.say(format!("Today is: {}", today))?;
                let check_in = or_exit!(self.ask_check_in(
                    today,
                    [
                        "Enter new check-in day (DD): ",
                        "Enter new check-in month (MM): ",
                        "Enter new check-in year (YYYY): ",
                    ],
                ));
                (BookingChange::ChangeCheckIn { check_in, today }, Done::CheckIn)
            }
            5 => {
                let nights = or_exit!(self.ask_nights());
                (BookingChange::ChangeNights(nights), Done::Nights)
            }
            6 => {
                self.console.say("Returning to main menu.")?;
                return Ok(Flow::Continue);
            }
            _ => {
                self.console.notice("Invalid choice. Try again.")?;
                return Ok(Flow::Continue);
            }
        };

        match self.store.modify(room, change).cloned() {
            Ok(updated) => {
                info!(room, now = updated.room_number, "Booking modified");
                self.report_change(&updated, done)?;
            }
            Err(CoreError::NoRoomAvailable { .. }) => {
                self.console.say(
                    "\nNo available rooms of the selected type. Modification canceled.",
                )?;
            }
            Err(err) => self.console.notice(err.to_string())?,
        }

        Ok(Flow::Continue)
    }

    fn report_change(&mut self, booking: &Booking, done: Done) -> io::Result<()> {
        let c = &mut self.console;
        match done {
            Done::GuestName => c.say("\nGuest name updated successfully."),
            Done::Contact => c.say("\nContact updated successfully."),
            Done::Category { was } => {
                c.say("\nRoom type updated successfully.")?;
                c.say(format!(
                    "New room number: {} (was {})",
                    booking.room_number, was
                ))?;
                c.say(format!("New total price: {}", booking.total_price))
            }
            Done::CheckIn => {
                c.say("\nCheck-in date updated successfully.")?;
                c.say(format!("New check-in date: {}", booking.check_in))?;
                c.say(format!("New check-out date: {}", booking.check_out))
            }
            Done::Nights => {
                c.say("\nBooking duration updated successfully.")?;
                c.say(format!("New number of nights: {}", booking.nights))?;
                c.say(format!("New check-out date: {}", booking.check_out))?;
                c.say(format!("New total price: {}", booking.total_price))
            }
        }
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    fn today(&mut self) -> io::Result<Option<Date>> {
        match self.today {
            Today::Clock => Ok(Some(Date::from(chrono::Local::now().date_naive()))),
            Today::Fixed(date) => Ok(Some(date)),
            Today::Prompt => {
                self.console.say("Enter today's date.")?;
                loop {
                    let Some(date) =
                        self.console
                            .ask_date(["Day (DD): ", "Month (MM): ", "Year (YYYY): "])?
                    else {
                        return Ok(None);
                    };
                    if date.is_valid() {
                        return Ok(Some(date));
                    }
                    self.console.say("Invalid date. Please enter a valid date.")?;
                }
            }
        }
    }

    fn ask_contact(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(contact) = self.console.ask(prompt)? else {
                return Ok(None);
            };
            if is_valid_contact(&contact) {
                return Ok(Some(contact));
            }
            self.console.say(INVALID_CONTACT)?;
        }
    }

    fn ask_category(&mut self) -> io::Result<Option<RoomCategory>> {
        loop {
            let Some(line) = self.console.ask("Enter new room type (1-3): ")? else {
                return Ok(None);
            };
            if let Some(category) = parse_category(&line) {
                return Ok(Some(category));
            }
            self.console
                .say("Invalid room type. Please enter 1, 2, or 3.")?;
        }
    }

    fn ask_nights(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(nights) = self
                .console
                .ask_integer("Enter new number of nights (1-30): ")?
            else {
                return Ok(None);
            };
            if let Some(nights) = nights_in_range(nights) {
                return Ok(Some(nights));
            }
            self.console.say(
                "Invalid number of nights. Please enter a value between 1 and 30.",
            )?;
        }
    }

    /// Reads a room number; `Some(None)` when the number cannot be a room.
    fn ask_room_number(&mut self, prompt: &str) -> io::Result<Option<Option<u32>>> {
        Ok(self
            .console
            .ask_integer(prompt)?
            .map(|n| u32::try_from(n).ok()))
    }

    /// Asks for a check-in date until it passes the booking checks.
    fn ask_check_in(&mut self, today: Date, labels: [&str; 3]) -> io::Result<Option<Date>> {
        loop {
            let Some(date) = self.console.ask_date(labels)? else {
                return Ok(None);
            };
            let problem = match validate_check_in(date, today) {
                Ok(()) => return Ok(Some(date)),
                Err(ValidationError::InvalidDate { .. }) => {
                    "Invalid date. Please enter a valid date."
                }
                Err(_) if date < today => {
                    "Check-in date cannot be in the past. Please enter a valid date."
                }
                Err(_) => {
                    "Cannot book more than one year in advance. Please enter a valid date."
                }
            };
            self.console.say(problem)?;
        }
    }

    fn show_rates(&mut self) -> io::Result<()> {
        self.console.say("Room Types:")?;
        for category in RoomCategory::ALL {
            self.console.say(format!(
                "{}. {:<6} - {} per night",
                category.code(),
                category.name(),
                category.rate()
            ))?;
        }
        Ok(())
    }
}

/// Which confirmation to print after a successful modify.
enum Done {
    GuestName,
    Contact,
    Category { was: u32 },
    CheckIn,
    Nights,
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Accepts the menu code or the category name, in any case.
fn parse_category(line: &str) -> Option<RoomCategory> {
    line.parse().ok()
}

fn parse_nights(line: &str) -> Option<u32> {
    parse_leading_integer(line).and_then(nights_in_range)
}

fn nights_in_range(nights: i64) -> Option<u32> {
    u32::try_from(nights)
        .ok()
        .filter(|n| (MIN_NIGHTS..=MAX_NIGHTS).contains(n))
}

/// A room number as typed, for "not found" messages.
fn show_room(room_number: Option<u32>) -> String {
    room_number.map_or_else(|| "?".to_string(), |n| n.to_string())
}

fn full_details(booking: &Booking) -> String {
    format!(
        "Room Number: {}\nGuest Name : {}\nContact    : {}\nRoom Type  : {}\nCheck-in   : {}\nCheck-out  : {}",
        booking.room_number,
        booking.guest_name,
        booking.contact,
        booking.category,
        booking.check_in,
        booking.check_out
    )
}

fn table_row(booking: &Booking) -> String {
    format!(
        "{:<5} {:<20} {:<15} {:<10} {}  {}  ${:<9}",
        booking.room_number,
        booking.guest_name,
        booking.contact,
        booking.category.name(),
        booking.check_in,
        booking.check_out,
        booking.total_price.to_decimal_string()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
