//! Facility registry load statistics
//!
//! Tracks what the loader found while indexing the embedded facility
//! table, including the data-quality defects it is required to flag.

use std::time::Duration;

/// Statistics about the facility registry loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of rows in the embedded table (before de-duplication)
    pub records_in_table: usize,

    /// Number of mainland facilities indexed
    pub mainland_loaded: usize,

    /// Number of Vancouver Island facilities indexed
    pub island_loaded: usize,

    /// Codes assigned more than once within a partition. A non-empty list
    /// is a source-data defect; the loader keeps the last-defined entry.
    pub duplicate_codes: Vec<String>,

    /// Number of facilities marked as no longer operating
    pub closed_count: usize,

    /// Time taken to build the index
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            records_in_table: 0,
            mainland_loaded: 0,
            island_loaded: 0,
            duplicate_codes: Vec::new(),
            closed_count: 0,
            load_duration: Duration::ZERO,
        }
    }

    /// Total facilities indexed across both partitions
    pub fn total_loaded(&self) -> usize {
        self.mainland_loaded + self.island_loaded
    }

    /// Whether any duplicate codes were found in the source table
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_codes.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "{} records indexed ({} mainland, {} island, {} closed, {} duplicate codes) in {:.2}ms",
            self.total_loaded(),
            self.mainland_loaded,
            self.island_loaded,
            self.closed_count,
            self.duplicate_codes.len(),
            self.load_duration.as_secs_f64() * 1000.0
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
