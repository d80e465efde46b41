//! # Front Desk Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RASA_BOOKINGS_PATH=/srv/rasa/bookings.txt                          │
//! │     RASA_HOTEL_NAME="Rasa Ria Kota Kinabalu"                           │
//! │     RASA_TODAY_FROM_CLOCK=false                                        │
//! │     RASA_LOG=debug                                                     │
//! │                                                                         │
//! │  2. TOML Config File (--config <path>, or the per-user default)        │
//! │     ~/.config/rasaria/frontdesk.toml (Linux)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     bookings.txt in the working directory, today from the clock        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # frontdesk.toml
//! [hotel]
//! name = "Rasa Ria"
//!
//! [storage]
//! bookings_path = "bookings.txt"
//!
//! [session]
//! today_from_clock = true
//!
//! [logging]
//! filter = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{FrontdeskError, FrontdeskResult};

// =============================================================================
// Sections
// =============================================================================

/// Hotel identity shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelConfig {
    #[serde(default = "default_hotel_name")]
    pub name: String,
}

fn default_hotel_name() -> String {
    "Rasa Ria".to_string()
}

impl Default for HotelConfig {
    fn default() -> Self {
        HotelConfig {
            name: default_hotel_name(),
        }
    }
}

/// Where the booking snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Read at startup, overwritten on Save & Exit.
    #[serde(default = "default_bookings_path")]
    pub bookings_path: PathBuf,
}

fn default_bookings_path() -> PathBuf {
    PathBuf::from("bookings.txt")
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            bookings_path: default_bookings_path(),
        }
    }
}

/// Per-session behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Take "today" from the local clock. When false the clerk types it in,
    /// which is how the desk is rehearsed against a fixed date.
    #[serde(default = "default_true")]
    pub today_from_clock: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            today_from_clock: true,
        }
    }
}

/// Log filter handed to `tracing_subscriber::EnvFilter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete front desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontdeskConfig {
    #[serde(default)]
    pub hotel: HotelConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FrontdeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (frontdesk.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// per-user default file is not.
    pub fn load(config_path: Option<PathBuf>) -> FrontdeskResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading front desk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else if explicit {
                return Err(FrontdeskError::InvalidConfig(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> FrontdeskResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> FrontdeskResult<()> {
        if self.storage.bookings_path.as_os_str().is_empty() {
            return Err(FrontdeskError::InvalidConfig(
                "storage.bookings_path must not be empty".into(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(FrontdeskError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `RASA_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("RASA_BOOKINGS_PATH") {
            debug!(path = %path, "Overriding bookings path from environment");
            self.storage.bookings_path = PathBuf::from(path);
        }

        if let Some(name) = lookup("RASA_HOTEL_NAME") {
            self.hotel.name = name;
        }

        if let Some(value) = lookup("RASA_TODAY_FROM_CLOCK") {
            match parse_flag(&value) {
                Some(flag) => self.session.today_from_clock = flag,
                None => warn!(value = %value, "Ignoring unrecognised RASA_TODAY_FROM_CLOCK"),
            }
        }

        if let Some(filter) = lookup("RASA_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rasaria", "frontdesk")
            .map(|dirs| dirs.config_dir().join("frontdesk.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = FrontdeskConfig::default();
        assert_eq!(config.storage.bookings_path, PathBuf::from("bookings.txt"));
        assert!(config.session.today_from_clock);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FrontdeskConfig::from_toml(
            r#"
            [storage]
            bookings_path = "/var/lib/rasa/bookings.txt"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.storage.bookings_path,
            PathBuf::from("/var/lib/rasa/bookings.txt")
        );
        assert_eq!(config.hotel.name, "Rasa Ria");
        assert!(config.session.today_from_clock);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let err = FrontdeskConfig::from_toml("[session]\ntoday_from_clock = \"sometimes\"")
            .unwrap_err();
        assert!(matches!(err, FrontdeskError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = FrontdeskConfig::from_toml("[hotel]\nname = \"From File\"").unwrap();

        config.apply_overrides(env(&[
            ("RASA_HOTEL_NAME", "From Env"),
            ("RASA_BOOKINGS_PATH", "elsewhere.txt"),
            ("RASA_TODAY_FROM_CLOCK", "no"),
            ("RASA_LOG", "debug"),
        ]));

        assert_eq!(config.hotel.name, "From Env");
        assert_eq!(config.storage.bookings_path, PathBuf::from("elsewhere.txt"));
        assert!(!config.session.today_from_clock);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unrecognised_flag_is_ignored() {
        let mut config = FrontdeskConfig::default();
        config.apply_overrides(env(&[("RASA_TODAY_FROM_CLOCK", "maybe")]));
        assert!(config.session.today_from_clock);
    }

    #[test]
    fn test_config_validation() {
        let mut config = FrontdeskConfig::default();
        config.storage.bookings_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(FrontdeskError::InvalidConfig(_))
        ));

        // Empty path from the environment is caught the same way
        let mut config = FrontdeskConfig::default();
        config.apply_overrides(env(&[("RASA_BOOKINGS_PATH", "")]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join(format!(
            "rasa-frontdesk-{}-absent.toml",
            std::process::id()
        ));
        let err = FrontdeskConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, FrontdeskError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let config = FrontdeskConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("[storage]"));
        assert!(text.contains("bookings_path = \"bookings.txt\""));

        let parsed = FrontdeskConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
