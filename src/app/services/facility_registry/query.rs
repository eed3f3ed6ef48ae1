//! Facility lookup and search functionality
//!
//! This module provides query methods for finding facilities in the
//! registry by criteria other than the exact code: name patterns,
//! location patterns, and operational status.

use super::FacilityRegistry;
use crate::app::models::FacilityRecord;

impl FacilityRegistry {
    /// Get all facilities in the registry, mainland partition first
    pub fn facilities(&self) -> Vec<&FacilityRecord> {
        self.mainland.values().chain(self.island.values()).collect()
    }

    /// Find facilities by name pattern (case-insensitive)
    ///
    /// Searches both partitions for facilities whose names contain the
    /// given pattern. The search is case-insensitive and supports partial
    /// matches; results are sorted by code for stable output.
    ///
    /// # Arguments
    /// * `pattern` - Text pattern to search for in facility names
    ///
    /// # Returns
    /// Vector of facilities whose names contain the pattern
    ///
    /// # Examples
    /// ```
    /// # use tattoo_decoder::FacilityRegistry;
    /// let registry = FacilityRegistry::load();
    /// let killarney = registry.find_facilities_by_name("killarney");
    /// assert_eq!(killarney[0].code, "MK");
    /// ```
    pub fn find_facilities_by_name(&self, pattern: &str) -> Vec<&FacilityRecord> {
        let pattern_lower = pattern.to_lowercase();
        self.filter_sorted(|facility| facility.name.to_lowercase().contains(&pattern_lower))
    }

    /// Find facilities by location pattern (case-insensitive)
    ///
    /// The `location` field is free text, so this is a substring match
    /// over whatever the source guide recorded, closure notes included.
    ///
    /// # Arguments
    /// * `pattern` - Text pattern to search for in facility locations
    ///
    /// # Returns
    /// Vector of facilities whose location text contains the pattern
    pub fn find_facilities_by_location(&self, pattern: &str) -> Vec<&FacilityRecord> {
        let pattern_lower = pattern.to_lowercase();
        self.filter_sorted(|facility| facility.location.to_lowercase().contains(&pattern_lower))
    }

    /// Find facilities that are no longer operating
    pub fn find_closed_facilities(&self) -> Vec<&FacilityRecord> {
        self.filter_sorted(|facility| facility.closed)
    }

    fn filter_sorted<F>(&self, predicate: F) -> Vec<&FacilityRecord>
    where
        F: Fn(&FacilityRecord) -> bool,
    {
        let mut matches: Vec<&FacilityRecord> = self
            .mainland
            .values()
            .chain(self.island.values())
            .filter(|facility| predicate(facility))
            .collect();
        matches.sort_by(|a, b| (a.island, &a.code).cmp(&(b.island, &b.code)));
        matches
    }
}
