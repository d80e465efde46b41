//! # Snapshot Codec
//!
//! The `bookings.txt` format: a record count, then nine lines per booking.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  2                     ◄── number of records                            │
//! │  61                    ◄── room number                                  │
//! │  Anna                  ◄── guest name (whole line)                      │
//! │  012-3456789           ◄── contact (whole line)                         │
//! │  3                     ◄── room type: 1=Suite 2=Double 3=Single         │
//! │  3                     ◄── nights                                       │
//! │  1200.00               ◄── total price                                  │
//! │  1                     ◄── active (0 or 1)                              │
//! │  10 3 2025             ◄── check-in  day month year                     │
//! │  13 3 2025             ◄── check-out day month year                     │
//! │  ...                   ◄── next record                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Loading
//! Decoding stops at the first record that cannot be read and keeps every
//! record before it. The reason is reported in [`LoadReport::stopped`]; only
//! genuine I/O failures are returned as errors.

use std::io::{BufRead, ErrorKind, Lines, Write};
use std::str::FromStr;

use rasa_core::{Booking, BookingStore, Date, Money, RoomCategory};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Lines per record after the count line.
pub const LINES_PER_RECORD: usize = 9;

// =============================================================================
// Load Results
// =============================================================================

/// What a decode pass found.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Record count announced on the first line (0 if unreadable).
    pub declared: usize,
    /// Records restored into the store.
    pub loaded: usize,
    /// Records read with `active = 0`, which are dropped.
    pub skipped_inactive: usize,
    /// Why decoding stopped before `declared` records, if it did.
    pub stopped: Option<StorageError>,
}

impl LoadReport {
    /// True if every declared record was read.
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

/// A decoded store together with its report.
#[derive(Debug, Default)]
pub struct Loaded {
    pub store: BookingStore,
    pub report: LoadReport,
}

// =============================================================================
// Encoding
// =============================================================================

/// Writes every booking in `store` to `writer`, count line first.
pub fn encode<W: Write>(store: &BookingStore, mut writer: W) -> StorageResult<()> {
    let bookings = store.as_slice();
    writeln!(writer, "{}", bookings.len())?;

    for booking in bookings {
        writeln!(writer, "{}", booking.room_number)?;
        writeln!(writer, "{}", booking.guest_name)?;
        writeln!(writer, "{}", booking.contact)?;
        writeln!(writer, "{}", booking.category.code())?;
        writeln!(writer, "{}", booking.nights)?;
        writeln!(writer, "{}", booking.total_price.to_decimal_string())?;
        writeln!(writer, "{}", u8::from(booking.active))?;
        write_date(&mut writer, booking.check_in)?;
        write_date(&mut writer, booking.check_out)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_date<W: Write>(writer: &mut W, date: Date) -> StorageResult<()> {
    writeln!(writer, "{} {} {}", date.day, date.month, date.year)?;
    Ok(())
}

// =============================================================================
// Decoding
// =============================================================================

/// Reads a snapshot from `reader`.
///
/// ## Returns
/// * `Ok(Loaded)` - always, unless the reader itself fails; a malformed
///   file yields the records before the bad one and a `stopped` reason
/// * `Err(StorageError::Io)` - the underlying read failed
pub fn decode<R: BufRead>(reader: R) -> StorageResult<Loaded> {
    let mut lines = LineReader::new(reader);
    let mut loaded = Loaded::default();

    loaded.report.declared = match lines.next_value::<usize>("booking count") {
        Ok(count) => count,
        Err(StorageError::Io(err)) => return Err(StorageError::Io(err)),
        Err(err) => {
            loaded.report.stopped = Some(err);
            return Ok(loaded);
        }
    };

    for record in 1..=loaded.report.declared {
        let booking = match read_booking(&mut lines) {
            Ok(booking) => booking,
            Err(StorageError::Io(err)) => return Err(StorageError::Io(err)),
            Err(err) => {
                loaded.report.stopped = Some(err);
                break;
            }
        };

        if !booking.active {
            loaded.report.skipped_inactive += 1;
            continue;
        }

        if !booking.check_in.is_valid() {
            debug!(
                record,
                room = booking.room_number,
                check_in = %booking.check_in,
                "Loaded booking has an impossible check-in date"
            );
        }

        if let Err(source) = loaded.store.restore(booking) {
            loaded.report.stopped = Some(StorageError::Rejected { record, source });
            break;
        }
        loaded.report.loaded += 1;
    }

    Ok(loaded)
}

fn read_booking<R: BufRead>(lines: &mut LineReader<R>) -> StorageResult<Booking> {
    let room_number = lines.next_value::<u32>("room number")?;
    let guest_name = lines.next_line("guest name")?;
    let contact = lines.next_line("contact")?;

    let code = lines.next_value::<u8>("room type")?;
    let category = RoomCategory::from_code(code)
        .ok_or_else(|| lines.error(format!("unknown room type code {}", code)))?;

    let nights = lines.next_value::<u32>("nights")?;

    let price = lines.next_line("total price")?;
    let total_price = Money::parse_decimal(&price)
        .ok_or_else(|| lines.error(format!("invalid total price '{}'", price.trim())))?;

    let active = match lines.next_line("active flag")?.trim() {
        "1" => true,
        "0" => false,
        other => return Err(lines.error(format!("active flag must be 0 or 1, got '{}'", other))),
    };

    let check_in = lines.next_date("check-in date")?;
    let check_out = lines.next_date("check-out date")?;

    Ok(Booking {
        room_number,
        guest_name,
        contact,
        category,
        nights,
        total_price,
        active,
        check_in,
        check_out,
    })
}

// =============================================================================
// Line Reader
// =============================================================================

/// Line iterator that remembers the current line number for error messages.
struct LineReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> StorageError {
        StorageError::parse(self.line, reason)
    }

    /// Next line without its terminator (`\n` or `\r\n`).
    fn next_line(&mut self, field: &str) -> StorageResult<String> {
        self.line += 1;
        match self.lines.next() {
            Some(Ok(text)) => Ok(text),
            // not UTF-8: a corrupt line, not a failing disk
            Some(Err(err)) if err.kind() == ErrorKind::InvalidData => {
                Err(self.error(format!("{} is not valid text", field)))
            }
            Some(Err(err)) => Err(StorageError::Io(err)),
            None => Err(self.error(format!("unexpected end of file, expected {}", field))),
        }
    }

    fn next_value<T: FromStr>(&mut self, field: &str) -> StorageResult<T> {
        let text = self.next_line(field)?;
        text.trim()
            .parse()
            .map_err(|_| self.error(format!("invalid {} '{}'", field, text.trim())))
    }

    /// `day month year`, whitespace separated.
    fn next_date(&mut self, field: &str) -> StorageResult<Date> {
        let text = self.next_line(field)?;
        let mut parts = text.split_whitespace();

        let parsed = (|| {
            let day: u32 = parts.next()?.parse().ok()?;
            let month: u32 = parts.next()?.parse().ok()?;
            let year: i32 = parts.next()?.parse().ok()?;
            match parts.next() {
                Some(_) => None,
                None => Some(Date::new(day, month, year)),
            }
        })();

        parsed.ok_or_else(|| self.error(format!("invalid {} '{}'", field, text.trim())))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
