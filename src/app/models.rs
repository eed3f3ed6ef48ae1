//! Data models for tattoo code decoding
//!
//! This module contains the core data structures for representing facility
//! directory records, year-code entries, and the structured outcome of a
//! tattoo code parse, following the BC pet registry tattoo code guide.

use serde::{Deserialize, Serialize};

// =============================================================================
// Facility Record Structure
// =============================================================================

/// Facility directory record for a veterinary clinic or shelter
///
/// One record exists per facility code. Records are immutable reference
/// data: they are loaded once into the registry at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FacilityRecord {
    /// Facility code, 1-3 uppercase letters - primary key for lookups
    pub code: String,

    /// Display name of the veterinary facility
    pub name: String,

    /// Free-text city/region string. Not normalized; malformed source rows
    /// occasionally carry closure notes here and are kept as-is.
    pub location: String,

    /// Facility no longer operating
    #[serde(default)]
    pub closed: bool,

    /// Optional annotation, typically naming a successor facility or a
    /// record-holding contact when `closed` is true
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,

    /// Facility belongs to the Vancouver Island code space rather than
    /// the mainland one
    #[serde(default)]
    pub island: bool,
}

impl FacilityRecord {
    /// Short human-readable label, e.g. "Killarney Animal Hospital (Vancouver)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.location)
    }
}

// =============================================================================
// Year Code Entry Structure
// =============================================================================

/// Year-code directory entry for a single letter
///
/// Most letters map to exactly one calendar year. Letters that fall 21
/// years after an earlier assignment (L, M, N, P, R) map to two candidate
/// years, and the code alone cannot disambiguate them: both years must be
/// surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct YearEntry {
    /// Single uppercase letter (A-H, J-N, P-Z; D, I, O, Q, U excluded)
    pub code: char,

    /// Candidate calendar years in ascending order, 1 or 2 entries
    pub years: Vec<i32>,
}

impl YearEntry {
    /// Whether this letter is ambiguous between two calendar years
    pub fn is_ambiguous(&self) -> bool {
        self.years.len() > 1
    }

    /// Render the candidate years as display text
    ///
    /// A single year renders as its numeral; two candidate years render
    /// joined by " or " in ascending order.
    pub fn year_text(&self) -> String {
        self.years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

// =============================================================================
// Format Family
// =============================================================================

/// The three mutually exclusive tattoo code layouts
///
/// Which layout matched determines the field order of the extracted
/// components and which partition of the facility directory is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FormatFamily {
    /// Digits, then 2-3 facility letters, then 1 year letter (e.g. 131MKP)
    MainlandNumeric,
    /// 2-3 facility letters, then 1 year letter, then digits (e.g. MKP131)
    MainlandAlpha,
    /// 1-2 facility letters, then digits, then 1 year letter (e.g. D123V)
    Island,
}

impl FormatFamily {
    /// Display name of the issuing region for this layout
    pub fn display_name(&self) -> &'static str {
        match self {
            FormatFamily::MainlandNumeric | FormatFamily::MainlandAlpha => "BC Mainland",
            FormatFamily::Island => "Vancouver Island",
        }
    }

    /// Whether this layout consults the island partition of the directory
    pub fn is_island(&self) -> bool {
        matches!(self, FormatFamily::Island)
    }
}

impl std::fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Parse Outcome Structures
// =============================================================================

/// Classification of total parse failures
///
/// Facility-not-found is deliberately absent: a valid format with an
/// unknown facility code is a [`ParseOutcome::PartialMatch`], not a
/// failure, because the year information is still usable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FailureKind {
    /// Input was empty or whitespace-only
    EmptyInput,
    /// Fewer than three significant characters after normalization
    TooShort,
    /// Input matched none of the three accepted layouts
    UnrecognizedFormat,
    /// Extracted year letter is outside the accepted alphabet
    InvalidYearCode,
}

/// Fields extracted from a tattoo code once a layout has matched
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedFields {
    /// Raw input as supplied by the caller
    pub original: String,

    /// Normalized code: trimmed, whitespace removed, uppercased
    pub normalized: String,

    /// Which layout matched
    pub family: FormatFamily,

    /// Animal sequence number (kept as text; leading zeros are significant
    /// on physical tattoos)
    pub animal_id: String,

    /// Extracted facility code, 1-3 uppercase letters
    pub facility_code: String,

    /// Extracted single-letter year code
    pub year_code: char,
}

/// Fully resolved tattoo code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TattooDecode {
    /// Extracted code components
    pub fields: ParsedFields,

    /// Resolved facility directory record
    pub facility: FacilityRecord,

    /// Candidate issue years, ascending, never empty
    pub candidate_years: Vec<i32>,

    /// Candidate years rendered for display ("2008" or "2004 or 2025")
    pub year_text: String,
}

/// Structured result of parsing a tattoo code
///
/// The parser never returns a crate [`Error`](crate::Error) for malformed
/// input: every failure path is an ordinary value carrying a
/// human-readable message and whatever fields were extracted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ParseOutcome {
    /// Input malformed or year code invalid
    Failure {
        /// Failure classification
        kind: FailureKind,
        /// Human-readable explanation
        message: String,
    },

    /// Format parsed and year code validated, but the facility code is
    /// absent from the directory partition for the matched layout
    PartialMatch {
        /// Human-readable explanation
        message: String,
        /// Fields extracted before the lookup missed
        fields: ParsedFields,
        /// Candidate years for the already-validated year code
        candidate_years: Vec<i32>,
    },

    /// Fully resolved
    Decoded(TattooDecode),
}

impl ParseOutcome {
    /// Whether this outcome is a full decode
    pub fn is_decoded(&self) -> bool {
        matches!(self, ParseOutcome::Decoded(_))
    }

    /// The decoded record, if fully resolved
    pub fn decode(&self) -> Option<&TattooDecode> {
        match self {
            ParseOutcome::Decoded(decode) => Some(decode),
            _ => None,
        }
    }

    /// The failure or partial-match message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ParseOutcome::Failure { message, .. } => Some(message),
            ParseOutcome::PartialMatch { message, .. } => Some(message),
            ParseOutcome::Decoded(_) => None,
        }
    }

    /// Candidate years, where the parse got far enough to resolve them
    pub fn candidate_years(&self) -> Option<&[i32]> {
        match self {
            ParseOutcome::Failure { .. } => None,
            ParseOutcome::PartialMatch {
                candidate_years, ..
            } => Some(candidate_years),
            ParseOutcome::Decoded(decode) => Some(&decode.candidate_years),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_entry_text_single_year() {
        let entry = YearEntry {
            code: 'V',
            years: vec![2008],
        };
        assert!(!entry.is_ambiguous());
        assert_eq!(entry.year_text(), "2008");
    }

    #[test]
    fn test_year_entry_text_two_years_ascending() {
        let entry = YearEntry {
            code: 'P',
            years: vec![2004, 2025],
        };
        assert!(entry.is_ambiguous());
        assert_eq!(entry.year_text(), "2004 or 2025");
    }

    #[test]
    fn test_format_family_display_names() {
        assert_eq!(FormatFamily::MainlandNumeric.display_name(), "BC Mainland");
        assert_eq!(FormatFamily::MainlandAlpha.display_name(), "BC Mainland");
        assert_eq!(FormatFamily::Island.display_name(), "Vancouver Island");
        assert!(FormatFamily::Island.is_island());
        assert!(!FormatFamily::MainlandAlpha.is_island());
    }

    #[test]
    fn test_facility_record_label() {
        let record = FacilityRecord {
            code: "MK".to_string(),
            name: "Killarney Animal Hospital".to_string(),
            location: "Vancouver".to_string(),
            closed: false,
            note: None,
            island: false,
        };
        assert_eq!(record.label(), "Killarney Animal Hospital (Vancouver)");
    }
}
