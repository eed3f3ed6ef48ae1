//! Tattoo code parser service
//!
//! This module implements the decoding contract: a pure function from a
//! free-form input string to a structured [`ParseOutcome`]. The parser
//! reads only the immutable facility and year registries, allocates a
//! fresh result per call, and is therefore idempotent and safe to call
//! from any number of threads without coordination.
//!
//! Malformed input is an ordinary result value, never an error or panic:
//! every failure path carries a human-readable message and whatever
//! fields were extracted before the parse stopped.

use crate::app::models::{FailureKind, ParseOutcome, ParsedFields, TattooDecode};
use crate::app::services::facility_registry::FacilityRegistry;
use crate::app::services::year_registry::YearRegistry;
use crate::constants::{VALID_YEAR_CODES_HELP, messages};
use tracing::debug;

mod format;
mod normalize;

#[cfg(test)]
pub mod tests;

use format::UnmatchedShape;

/// Tattoo code parser backed by the facility and year registries
///
/// Construction is cheap relative to registry loading; callers that parse
/// many codes should build one parser and reuse it.
#[derive(Debug, Clone)]
pub struct TattooParser {
    facilities: FacilityRegistry,
    years: YearRegistry,
}

impl TattooParser {
    /// Create a parser over previously built registries
    pub fn new(facilities: FacilityRegistry, years: YearRegistry) -> Self {
        Self { facilities, years }
    }

    /// Create a parser over the embedded reference directories
    pub fn bundled() -> Self {
        Self::new(FacilityRegistry::load(), YearRegistry::new())
    }

    /// The facility registry backing this parser
    pub fn facilities(&self) -> &FacilityRegistry {
        &self.facilities
    }

    /// The year registry backing this parser
    pub fn years(&self) -> &YearRegistry {
        &self.years
    }

    /// Parse a tattoo code into a structured outcome
    ///
    /// Normalizes the input (whitespace stripped, uppercased), matches it
    /// against the three accepted layouts, validates the year code, and
    /// resolves the facility code in the directory partition belonging to
    /// the matched layout.
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        let normalized = match normalize::normalize(raw) {
            Ok(normalized) => normalized,
            Err(kind) => {
                let message = match kind {
                    FailureKind::EmptyInput => messages::EMPTY_INPUT,
                    _ => messages::TOO_SHORT,
                };
                return ParseOutcome::Failure {
                    kind,
                    message: message.to_string(),
                };
            }
        };

        let decomposition = match format::decompose(&normalized) {
            Ok(decomposition) => decomposition,
            Err(UnmatchedShape::DigitLed) => {
                return ParseOutcome::Failure {
                    kind: FailureKind::UnrecognizedFormat,
                    message: messages::INVALID_FORMAT_DIGIT_LED.to_string(),
                };
            }
            Err(UnmatchedShape::LetterLed) => {
                return ParseOutcome::Failure {
                    kind: FailureKind::UnrecognizedFormat,
                    message: messages::INVALID_FORMAT_LETTER_LED.to_string(),
                };
            }
        };

        let fields = ParsedFields {
            original: raw.to_string(),
            normalized,
            family: decomposition.family,
            animal_id: decomposition.animal_id,
            facility_code: decomposition.facility_code,
            year_code: decomposition.year_code,
        };

        // Year code first: a bad year letter is a total failure, while an
        // unknown facility still yields the resolved years below.
        let Some(year_entry) = self.years.get(fields.year_code) else {
            return ParseOutcome::Failure {
                kind: FailureKind::InvalidYearCode,
                message: format!(
                    "Invalid year code \"{}\". {}",
                    fields.year_code, VALID_YEAR_CODES_HELP
                ),
            };
        };

        let Some(facility) = self.facilities.get(&fields.facility_code, fields.family) else {
            let mut message = format!(
                "Facility code \"{}\" not found in the {} directory",
                fields.facility_code, fields.family
            );
            if self
                .facilities
                .exists_in_other_partition(&fields.facility_code, fields.family)
            {
                message.push_str(" (the code is assigned in the other code space)");
            }
            debug!("Partial match for {}: {}", fields.normalized, message);
            return ParseOutcome::PartialMatch {
                message,
                candidate_years: year_entry.years.clone(),
                fields,
            };
        };

        ParseOutcome::Decoded(TattooDecode {
            fields,
            facility: facility.clone(),
            candidate_years: year_entry.years.clone(),
            year_text: year_entry.year_text(),
        })
    }
}

impl Default for TattooParser {
    fn default() -> Self {
        Self::bundled()
    }
}
