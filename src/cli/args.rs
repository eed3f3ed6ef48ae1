//! Command-line argument definitions for the tattoo decoder
//!
//! This module defines the complete CLI interface using the clap derive
//! API: code lookup, facility directory search, the year-code table, and
//! map-search URL generation.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the tattoo decoder
///
/// Decodes BC pet registry tattoo codes into their issuing veterinary
/// facility and candidate issue years.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tattoo-decoder",
    version,
    about = "Decode BC pet registry tattoo codes into facility and issue year",
    long_about = "Decodes the alphanumeric tattoo codes applied by BC veterinary facilities \
                  into the issuing facility and the candidate issue years. Handles the three \
                  code layouts (mainland-numeric, mainland-alpha, Vancouver Island), the \
                  21-year recycling year alphabet, and the partitioned facility directory \
                  from the BC Pet Registry Tattoo Code Guide."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Get the tracing level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Available subcommands for the tattoo decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode one or more tattoo codes (default command)
    Lookup(LookupArgs),
    /// Search the facility directory by name, location, or status
    Facilities(FacilitiesArgs),
    /// Print the year-code table
    Years,
    /// Build a map-search URL for a facility
    Maps(MapsArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Machine-readable JSON, one document per result
    Json,
}

/// Arguments for the lookup command
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    /// Tattoo codes to decode, as printed on the animal
    ///
    /// Whitespace and letter case are ignored. Examples of the three
    /// accepted layouts: 131MKP, MKP131, D123V.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Include a map-search URL for each resolved facility
    #[arg(long = "maps", help = "Include a map-search URL for resolved facilities")]
    pub maps: bool,
}

impl LookupArgs {
    /// Validate lookup arguments
    pub fn validate(&self) -> Result<()> {
        // clap enforces at least one code; reject codes that are pure
        // whitespace before they reach the parser as confusing failures
        if self.codes.iter().all(|code| code.trim().is_empty()) {
            return Err(Error::invalid_argument(
                "all supplied codes are blank; pass at least one tattoo code",
            ));
        }
        Ok(())
    }
}

/// Arguments for the facilities command
#[derive(Debug, Clone, Parser)]
pub struct FacilitiesArgs {
    /// Filter by facility name (case-insensitive substring)
    #[arg(short = 'n', long = "name", value_name = "PATTERN")]
    pub name: Option<String>,

    /// Filter by location text (case-insensitive substring)
    #[arg(short = 'l', long = "location", value_name = "PATTERN")]
    pub location: Option<String>,

    /// List only facilities that are no longer operating
    #[arg(long = "closed", help = "List only closed facilities")]
    pub closed: bool,

    /// List the whole directory
    #[arg(long = "all", help = "List the whole directory")]
    pub all: bool,

    /// Show directory load statistics instead of records
    #[arg(long = "stats", help = "Show directory load statistics")]
    pub stats: bool,
}

impl FacilitiesArgs {
    /// Validate facilities arguments
    pub fn validate(&self) -> Result<()> {
        let has_selection = self.name.is_some()
            || self.location.is_some()
            || self.closed
            || self.all
            || self.stats;
        if !has_selection {
            return Err(Error::invalid_argument(
                "pass --name, --location, --closed, --all, or --stats to select facilities",
            ));
        }
        if self.all && (self.name.is_some() || self.location.is_some()) {
            return Err(Error::invalid_argument(
                "--all cannot be combined with --name or --location",
            ));
        }
        Ok(())
    }
}

/// Arguments for the maps command
#[derive(Debug, Clone, Parser)]
pub struct MapsArgs {
    /// Facility name to search for
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Facility location (city or region)
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Region suffix appended to the query
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,
}

impl MapsArgs {
    /// Validate maps arguments
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("facility name cannot be blank"));
        }
        if let Some(region) = &self.region
            && region.trim().is_empty()
        {
            return Err(Error::invalid_argument("--region cannot be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_rejects_blank_codes() {
        let args = LookupArgs {
            codes: vec!["  ".to_string()],
            maps: false,
        };
        assert!(args.validate().is_err());

        let args = LookupArgs {
            codes: vec!["131MKP".to_string()],
            maps: false,
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_facilities_requires_a_selection() {
        let args = FacilitiesArgs {
            name: None,
            location: None,
            closed: false,
            all: false,
            stats: false,
        };
        assert!(args.validate().is_err());

        let args = FacilitiesArgs {
            name: Some("cat".to_string()),
            location: None,
            closed: false,
            all: false,
            stats: false,
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_facilities_all_excludes_patterns() {
        let args = FacilitiesArgs {
            name: Some("cat".to_string()),
            location: None,
            closed: false,
            all: true,
            stats: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_from_verbosity() {
        let mut args = Args {
            command: None,
            verbose: 0,
            quiet: false,
            format: OutputFormat::Text,
        };
        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
