//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error ──────────────► StorageError::Io  ──► caller (hard)     │
//! │                                                                         │
//! │  bad line / bad number ───────► StorageError::Parse    ┐                │
//! │  store refuses record ────────► StorageError::Rejected ┴► LoadReport    │
//! │                                                   (load truncated, soft)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rasa_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not have the expected shape.
    ///
    /// ## When This Occurs
    /// - A numeric field is not a number
    /// - The room type code is not 1, 2 or 3
    /// - The file ends in the middle of a record
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A record parsed but the store would not take it.
    #[error("Record {record} rejected: {source}")]
    Rejected {
        record: usize,
        #[source]
        source: CoreError,
    },
}

impl StorageError {
    /// Creates a Parse error for a line number.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        StorageError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::parse(7, "expected nights");
        assert_eq!(err.to_string(), "Parse error on line 7: expected nights");

        let err = StorageError::Rejected {
            record: 3,
            source: CoreError::RoomTaken { room_number: 12 },
        };
        assert_eq!(err.to_string(), "Record 3 rejected: Room 12 is already booked");
    }
}
