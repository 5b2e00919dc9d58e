//! # Bakery Configuration
//!
//! The runtime half of a bakery declaration. The product list, currency and
//! measurement type are fixed by the bakery's *type*; what is left is data.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "name": "Corner Bakery",
//!   "capacity": 1000000
//! }
//! ```
//!
//! `name` is optional and defaults to [`DEFAULT_BAKERY_NAME`]. `capacity` is
//! parsed as the bakery's measurement type, so a negative capacity on a
//! `u32` bakery is rejected here rather than later.
//!
//! This module parses strings only; reading files is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigurationError;
use crate::units::Measurement;
use crate::DEFAULT_BAKERY_NAME;

/// Name and shelf capacity of a bakery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: Measurement"))]
pub struct BakeryConfig<A: Measurement> {
    /// Human-readable name, used in logs and snapshots.
    #[serde(default = "default_name")]
    pub name: String,

    /// Maximum total product area.
    pub capacity: A,
}

fn default_name() -> String {
    DEFAULT_BAKERY_NAME.to_string()
}

impl<A: Measurement> BakeryConfig<A> {
    /// Config with the default name.
    pub fn new(capacity: A) -> Self {
        BakeryConfig {
            name: default_name(),
            capacity,
        }
    }

    /// Replaces the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parses a JSON configuration document.
    ///
    /// ## Example
    /// ```rust
    /// use bakery_core::config::BakeryConfig;
    ///
    /// let config: BakeryConfig<u32> =
    ///     BakeryConfig::from_json(r#"{ "name": "Corner", "capacity": 500 }"#).unwrap();
    /// assert_eq!(config.capacity, 500);
    ///
    /// assert!(BakeryConfig::<u32>::from_json(r#"{ "capacity": -5 }"#).is_err());
    /// ```
    pub fn from_json(input: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(input).map_err(|e| {
            warn!(error = %e, "Rejected bakery configuration");
            ConfigurationError::InvalidConfig(e.to_string())
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BakeryConfig::new(1_000_000u32);
        assert_eq!(config.name, DEFAULT_BAKERY_NAME);
        assert_eq!(config.capacity, 1_000_000);

        let config = config.with_name("Corner");
        assert_eq!(config.name, "Corner");
    }

    #[test]
    fn test_from_json_default_name() {
        let config = BakeryConfig::<i64>::from_json(r#"{ "capacity": 42 }"#).unwrap();
        assert_eq!(config.name, DEFAULT_BAKERY_NAME);
        assert_eq!(config.capacity, 42);
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            BakeryConfig::<u8>::from_json(r#"{ "capacity": 300 }"#),
            Err(ConfigurationError::InvalidConfig(_))
        ));
        assert!(BakeryConfig::<u32>::from_json(r#"{ "name": "x" }"#).is_err());
        assert!(BakeryConfig::<u32>::from_json("not json").is_err());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = BakeryConfig::new(250u16).with_name("Kiosk");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BakeryConfig::<u16>::from_json(&json).unwrap(), config);
    }
}
