//! Tattoo Decoder Library
//!
//! A Rust library for decoding BC pet registry tattoo codes into their
//! issuing veterinary facility and candidate issue years.
//!
//! This library provides tools for:
//! - Parsing tattoo codes in the three accepted layouts (mainland-numeric,
//!   mainland-alpha, Vancouver Island)
//! - Loading and indexing the facility directory for O(1) lookups,
//!   partitioned into mainland and island code spaces
//! - Resolving single-letter year codes, including the 21-year alphabet
//!   recycling that makes some letters ambiguous between two years
//! - Building map-search URLs for resolved facilities
//! - Comprehensive error handling with partial results for near-misses

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod facility_registry;
        pub mod map_search;
        pub mod tattoo_parser;
        pub mod year_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FacilityRecord, FailureKind, FormatFamily, ParseOutcome, TattooDecode};
pub use app::services::facility_registry::FacilityRegistry;
pub use app::services::tattoo_parser::TattooParser;
pub use app::services::year_registry::YearRegistry;
pub use config::Config;

/// Result type alias for the tattoo decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tattoo decoder operations
///
/// Malformed tattoo codes are NOT errors: the parser reports them as
/// ordinary [`ParseOutcome`] values so callers can surface partial
/// information. This enum covers the operational failures around the
/// parser (configuration, registry construction, output encoding).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Facility registry error
    #[error("Facility registry error: {message}")]
    Registry { message: String },

    /// Invalid command-line argument combination
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// JSON output encoding error
    #[error("JSON encoding error: {0}")]
    JsonEncoding(#[from] serde_json::Error),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a facility registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
