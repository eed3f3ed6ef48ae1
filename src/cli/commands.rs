//! Command implementations for the tattoo decoder CLI
//!
//! This module contains the command execution logic: decoding codes,
//! searching the facility directory, printing the year-code table, and
//! building map-search URLs, with colored text or JSON output.

use crate::app::models::{FacilityRecord, ParseOutcome, TattooDecode};
use crate::app::services::map_search;
use crate::cli::args::{Args, Commands, FacilitiesArgs, LookupArgs, MapsArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result, TattooParser};
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Main command runner for the tattoo decoder
///
/// Sets up logging, dispatches to the requested subcommand, and returns
/// a process-level error only for operational failures; unparseable
/// tattoo codes are reported as normal command output.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    debug!("Command line arguments: {:?}", args);

    let Some(command) = args.command.clone() else {
        return Err(Error::invalid_argument("no command given"));
    };

    match command {
        Commands::Lookup(lookup_args) => run_lookup(&lookup_args, args.format),
        Commands::Facilities(facilities_args) => run_facilities(&facilities_args, args.format),
        Commands::Years => run_years(args.format),
        Commands::Maps(maps_args) => run_maps(&maps_args, args.format),
    }
}

// =============================================================================
// Lookup Command
// =============================================================================

/// JSON report for one decoded code
#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    outcome: &'a ParseOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    map_url: Option<String>,
}

fn run_lookup(args: &LookupArgs, format: OutputFormat) -> Result<()> {
    args.validate()?;
    let config = Config {
        show_map_links: args.maps,
        ..Config::default()
    };
    config.validate()?;

    let parser = TattooParser::bundled();
    info!(
        "Facility directory ready: {}",
        parser.facilities().load_stats().summary()
    );

    for code in &args.codes {
        let outcome = parser.parse(code);
        let map_url = match (&outcome, config.show_map_links) {
            (ParseOutcome::Decoded(decode), true) => Some(map_search_url_for(decode, &config)),
            _ => None,
        };

        match format {
            OutputFormat::Json => {
                let report = LookupReport {
                    input: code,
                    outcome: &outcome,
                    map_url,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => print_outcome(code, &outcome, map_url.as_deref(), &config),
        }
    }

    Ok(())
}

fn map_search_url_for(decode: &TattooDecode, config: &Config) -> String {
    map_search::map_search_url_in_region(
        &decode.facility.name,
        &decode.facility.location,
        &config.maps_region_suffix,
    )
}

fn print_outcome(input: &str, outcome: &ParseOutcome, map_url: Option<&str>, config: &Config) {
    match outcome {
        ParseOutcome::Decoded(decode) => {
            println!(
                "{} {}",
                "✓".bright_green().bold(),
                decode.fields.normalized.bright_white().bold()
            );
            println!(
                "  Facility: {} - {}{}",
                decode.fields.facility_code.bold(),
                decode.facility.label(),
                facility_badges(&decode.facility)
            );
            println!(
                "  Year:     {} ({})",
                decode.fields.year_code,
                decode.year_text.bold()
            );
            println!("  Animal #: {}", decode.fields.animal_id);
            println!("  Format:   {}", decode.fields.family);
            if config.show_facility_notes
                && let Some(note) = &decode.facility.note
            {
                println!("  Note:     {}", note.yellow());
            }
            if let Some(url) = map_url {
                println!("  Map:      {}", url.underline());
            }
        }
        ParseOutcome::PartialMatch {
            message,
            fields,
            candidate_years,
        } => {
            println!("{} {}", "⚠".yellow().bold(), fields.normalized.bold());
            println!("  {}", message.yellow());
            println!(
                "  Extracted: facility {}, year {} ({}), animal #{}",
                fields.facility_code.bold(),
                fields.year_code,
                candidate_years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
                fields.animal_id
            );
        }
        ParseOutcome::Failure { message, .. } => {
            println!("{} {}", "✗".bright_red().bold(), input.trim().bold());
            println!("  {}", message.bright_red());
        }
    }
}

fn facility_badges(facility: &FacilityRecord) -> String {
    let mut badges = String::new();
    if facility.closed {
        badges.push_str(&format!(" {}", "[CLOSED]".bright_red()));
    }
    if facility.island {
        badges.push_str(&format!(" {}", "[ISLAND]".bright_cyan()));
    }
    badges
}

// =============================================================================
// Facilities Command
// =============================================================================

fn run_facilities(args: &FacilitiesArgs, format: OutputFormat) -> Result<()> {
    args.validate()?;
    let parser = TattooParser::bundled();
    let registry = parser.facilities();

    if args.stats {
        let stats = registry.load_stats();
        match format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct StatsReport<'a> {
                    mainland: usize,
                    island: usize,
                    closed: usize,
                    duplicate_codes: &'a [String],
                }
                let report = StatsReport {
                    mainland: stats.mainland_loaded,
                    island: stats.island_loaded,
                    closed: stats.closed_count,
                    duplicate_codes: &stats.duplicate_codes,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                println!("{}", "Facility Directory".bright_green().bold());
                println!("  {}", stats.summary());
                if stats.has_duplicates() {
                    println!(
                        "  {} duplicate code(s) in source data: {}",
                        "Warning:".yellow().bold(),
                        stats.duplicate_codes.join(", ")
                    );
                }
            }
        }
        return Ok(());
    }

    let mut records: Vec<&FacilityRecord> = if let Some(pattern) = &args.name {
        registry.find_facilities_by_name(pattern)
    } else if let Some(pattern) = &args.location {
        registry.find_facilities_by_location(pattern)
    } else if args.closed {
        registry.find_closed_facilities()
    } else {
        let mut all = registry.facilities();
        all.sort_by(|a, b| (a.island, &a.code).cmp(&(b.island, &b.code)));
        all
    };

    // --closed combined with a pattern narrows the pattern's results
    if args.closed {
        records.retain(|facility| facility.closed);
    }

    info!("{} facilities matched", records.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            for facility in &records {
                println!(
                    "{:4} {}{}",
                    facility.code.bold(),
                    facility.label(),
                    facility_badges(facility)
                );
            }
            if records.is_empty() {
                println!("{}", "No facilities matched".yellow());
            }
        }
    }

    Ok(())
}

// =============================================================================
// Years Command
// =============================================================================

fn run_years(format: OutputFormat) -> Result<()> {
    let parser = TattooParser::bundled();
    let entries = parser.years().entries_sorted();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            println!("{}", "Year Codes".bright_green().bold());
            for entry in entries {
                let marker = if entry.is_ambiguous() {
                    " (ambiguous)".yellow().to_string()
                } else {
                    String::new()
                };
                println!("  {}: {}{}", entry.code, entry.year_text(), marker);
            }
            println!("  Excluded letters: D, I, O, Q, U");
        }
    }

    Ok(())
}

// =============================================================================
// Maps Command
// =============================================================================

fn run_maps(args: &MapsArgs, format: OutputFormat) -> Result<()> {
    args.validate()?;
    let config = Config {
        maps_region_suffix: args
            .region
            .clone()
            .unwrap_or_else(|| Config::default().maps_region_suffix),
        ..Config::default()
    };
    config.validate()?;

    let url = map_search::map_search_url_in_region(
        &args.name,
        &args.location,
        &config.maps_region_suffix,
    );

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct MapsReport<'a> {
                name: &'a str,
                location: &'a str,
                url: &'a str,
            }
            let report = MapsReport {
                name: &args.name,
                location: &args.location,
                url: &url,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => println!("{}", url),
    }

    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tattoo_decoder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
