//! # Snapshot Files
//!
//! Loading and saving the booking snapshot at a filesystem path.
//!
//! ## Lifecycle
//! ```text
//! startup ──► load_from_file(path)
//!               ├── file missing ─────► empty store (first run)
//!               ├── file malformed ───► records before the bad one + warning
//!               └── file fine ────────► every record
//!
//! exit ─────► save_to_file(path, &store)   (truncate + rewrite, no rename)
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use rasa_core::BookingStore;
use tracing::{debug, info, warn};

use crate::codec::{decode, encode, Loaded};
use crate::error::StorageResult;

/// Loads the booking snapshot at `path`.
///
/// A missing file is a first run, not an error, and gives an empty store.
/// A malformed file keeps the records before the first bad one; the reason
/// is logged and kept in the report.
pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<Loaded> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(?path, "No previous bookings found");
            return Ok(Loaded::default());
        }
        Err(err) => return Err(err.into()),
    };

    let loaded = decode(BufReader::new(file))?;
    let report = &loaded.report;

    if let Some(reason) = &report.stopped {
        warn!(
            ?path,
            declared = report.declared,
            loaded = report.loaded,
            %reason,
            "Booking file is damaged; keeping the records read so far"
        );
    }
    if report.skipped_inactive > 0 {
        debug!(skipped = report.skipped_inactive, "Dropped inactive bookings");
    }

    info!(?path, count = loaded.store.len(), "Bookings loaded");
    Ok(loaded)
}

/// Writes every booking in `store` to `path`, replacing the file.
pub fn save_to_file(path: impl AsRef<Path>, store: &BookingStore) -> StorageResult<()> {
    let path = path.as_ref();

    let file = File::create(path)?;
    encode(store, BufWriter::new(file))?;

    info!(?path, count = store.len(), "Bookings saved");
    Ok(())
}
