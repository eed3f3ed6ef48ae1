//! Facility registry service for O(1) facility metadata lookups
//!
//! This module indexes the embedded facility directory for exact-match
//! lookup by facility code. The directory is partitioned into two code
//! spaces - mainland and Vancouver Island - because some short codes are
//! assigned to different facilities in each scheme; the layout that
//! matched a tattoo code determines which partition is consulted.

use crate::app::models::{FacilityRecord, FormatFamily};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

pub(crate) mod data;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;

/// Facility registry providing O(1) facility metadata lookups
///
/// The registry loads the embedded facility table once at construction
/// and indexes it by code into two partitions. It is immutable afterwards:
/// no insert, update, or delete operations exist, and shared references
/// can be used freely from any number of threads.
#[derive(Debug, Clone)]
pub struct FacilityRegistry {
    /// Mainland code space (2-3 letter codes), indexed for O(1) lookups
    pub(crate) mainland: HashMap<String, FacilityRecord>,

    /// Vancouver Island code space (1-2 letter codes)
    pub(crate) island: HashMap<String, FacilityRecord>,

    /// Statistics gathered while building the index
    pub(crate) load_stats: LoadStats,
}

impl FacilityRegistry {
    /// Build the registry from the embedded facility table
    ///
    /// Duplicate codes within a partition are a known defect of the source
    /// guide (`ME` is assigned twice). The loader keeps the last-defined
    /// entry, records every collision in [`LoadStats`], and logs a warning
    /// naming both facilities so the defect is flagged rather than
    /// silently resolved.
    pub fn load() -> Self {
        let start = Instant::now();
        let mut mainland = HashMap::new();
        let mut island = HashMap::new();
        let mut stats = LoadStats::new();

        for raw in data::FACILITY_TABLE {
            let record = FacilityRecord {
                code: raw.code.to_string(),
                name: raw.name.to_string(),
                location: raw.location.to_string(),
                closed: raw.closed,
                note: raw.note.map(str::to_string),
                island: raw.island,
            };

            stats.records_in_table += 1;
            if record.closed {
                stats.closed_count += 1;
            }

            let partition = if record.island {
                &mut island
            } else {
                &mut mainland
            };
            if let Some(previous) = partition.insert(record.code.clone(), record) {
                let current = &partition[&previous.code];
                warn!(
                    "Duplicate facility code {}: \"{}\" superseded by \"{}\" (source data defect)",
                    previous.code, previous.name, current.name
                );
                stats.duplicate_codes.push(previous.code);
            }
        }

        stats.mainland_loaded = mainland.len();
        stats.island_loaded = island.len();
        stats.load_duration = start.elapsed();
        debug!("Facility registry loaded: {}", stats.summary());

        Self {
            mainland,
            island,
            load_stats: stats,
        }
    }

    /// Get a facility record by code within the partition for a layout
    /// (O(1) lookup)
    pub fn get(&self, code: &str, family: FormatFamily) -> Option<&FacilityRecord> {
        self.partition(family).get(code)
    }

    /// Check whether a code exists in the partition for a layout
    pub fn contains(&self, code: &str, family: FormatFamily) -> bool {
        self.partition(family).contains_key(code)
    }

    /// Check whether a code that missed its own partition is assigned
    /// in the other code space
    pub fn exists_in_other_partition(&self, code: &str, family: FormatFamily) -> bool {
        let other = if family.is_island() {
            &self.mainland
        } else {
            &self.island
        };
        other.contains_key(code)
    }

    /// Number of mainland facilities in the registry
    pub fn mainland_count(&self) -> usize {
        self.mainland.len()
    }

    /// Number of Vancouver Island facilities in the registry
    pub fn island_count(&self) -> usize {
        self.island.len()
    }

    /// Total number of facilities across both partitions
    pub fn facility_count(&self) -> usize {
        self.mainland.len() + self.island.len()
    }

    /// Statistics gathered while the registry was built
    pub fn load_stats(&self) -> &LoadStats {
        &self.load_stats
    }

    fn partition(&self, family: FormatFamily) -> &HashMap<String, FacilityRecord> {
        if family.is_island() {
            &self.island
        } else {
            &self.mainland
        }
    }
}

impl Default for FacilityRegistry {
    fn default() -> Self {
        Self::load()
    }
}
