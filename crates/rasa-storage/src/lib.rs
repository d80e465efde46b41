//! # rasa-storage: Booking Snapshot Persistence
//!
//! This crate stores the [`BookingStore`](rasa_core::BookingStore) in a plain
//! text file between runs of the front desk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rasa Ria Data Flow                                │
//! │                                                                         │
//! │  frontdesk startup ──► load_from_file() ──► BookingStore               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  rasa-storage (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐            ┌───────────────┐               │   │
//! │  │   │    codec      │            │     file      │               │   │
//! │  │   │ encode/decode │◄───────────│ load / save   │               │   │
//! │  │   │ BufRead/Write │            │ File, paths   │               │   │
//! │  │   └───────────────┘            └───────────────┘               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  frontdesk "Save & Exit" ──► save_to_file() ──► bookings.txt           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`] - The line-oriented format over any reader/writer
//! - [`file`] - Loading from and saving to a path
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rasa_storage::{load_from_file, save_to_file};
//!
//! let loaded = load_from_file("bookings.txt")?;
//! println!("{} bookings", loaded.store.len());
//! save_to_file("bookings.txt", &loaded.store)?;
//! # Ok::<(), rasa_storage::StorageError>(())
//! ```

pub mod codec;
pub mod error;
pub mod file;

pub use codec::{decode, encode, LoadReport, Loaded};
pub use error::{StorageError, StorageResult};
pub use file::{load_from_file, save_to_file};
