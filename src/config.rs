//! Configuration management and validation.
//!
//! Provides the runtime options for lookup presentation. The reference
//! directories themselves are versioned static data compiled into the
//! binary and carry no configuration.

use crate::constants::MAPS_REGION_SUFFIX;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Runtime configuration for the decoder CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Region suffix appended to map-search queries
    pub maps_region_suffix: String,

    /// Include successor/record-holder notes when reporting closed
    /// facilities
    pub show_facility_notes: bool,

    /// Include a map-search URL in lookup output
    pub show_map_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maps_region_suffix: MAPS_REGION_SUFFIX.to_string(),
            show_facility_notes: true,
            show_map_links: false,
        }
    }
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.maps_region_suffix.trim().is_empty() {
            return Err(Error::configuration(
                "maps_region_suffix cannot be empty; map queries need a region",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.maps_region_suffix, "BC");
        assert!(config.show_facility_notes);
    }

    #[test]
    fn test_blank_region_suffix_is_rejected() {
        let config = Config {
            maps_region_suffix: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
