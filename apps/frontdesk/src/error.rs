//! # Front Desk Error Type
//!
//! Configuration failures stop the program before the menu opens. Booking
//! rule violations never get here; the menu prints them and carries on.

use thiserror::Error;

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum FrontdeskError {
    /// The config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// frontdesk.toml is not valid TOML for this program.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration parsed but makes no sense.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for front desk operations.
pub type FrontdeskResult<T> = Result<T, FrontdeskError>;
