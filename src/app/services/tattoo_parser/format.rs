//! Layout detection and decomposition for normalized tattoo codes
//!
//! Exactly one of three mutually exclusive layouts is attempted per code,
//! short-circuiting on the first match:
//!
//! | Family            | Shape                                  | Field order              |
//! |-------------------|----------------------------------------|--------------------------|
//! | Mainland-numeric  | digits, 2-3 letters, 1 letter          | animal, facility, year   |
//! | Mainland-alpha    | 2-3 letters, 1 letter, digits          | facility, year, animal   |
//! | Island            | 1-2 letters, digits, 1 letter          | facility, animal, year   |
//!
//! Digit-led codes are committed to the mainland-numeric layout: a
//! mismatch fails outright and never falls back to the other two.
//! Letter-led codes try mainland-alpha first, then island.

use crate::app::models::FormatFamily;
use regex::Regex;
use std::sync::LazyLock;

static MAINLAND_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Z]{2,3})([A-Z])$").expect("valid pattern"));

static MAINLAND_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{2,3})([A-Z])(\d+)$").expect("valid pattern"));

static ISLAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{1,2})(\d+)([A-Z])$").expect("valid pattern"));

/// Components extracted from a normalized code by a matching layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decomposition {
    pub family: FormatFamily,
    pub animal_id: String,
    pub facility_code: String,
    pub year_code: char,
}

/// Why no layout matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnmatchedShape {
    /// Digit-led code that failed the mainland-numeric layout; the other
    /// layouts are deliberately not tried
    DigitLed,
    /// Letter-led code that matched neither mainland-alpha nor island
    LetterLed,
}

/// Decompose a normalized code into its components
///
/// With exactly three trailing letters, the mainland-numeric facility
/// group backtracks from its greedy 3-letter capture to 2 letters so the
/// final letter remains for the year code; `131MKP` therefore splits as
/// facility `MK`, year `P`.
pub(crate) fn decompose(code: &str) -> Result<Decomposition, UnmatchedShape> {
    let digit_led = code.chars().next().is_some_and(|c| c.is_ascii_digit());

    if digit_led {
        let captures = MAINLAND_NUMERIC
            .captures(code)
            .ok_or(UnmatchedShape::DigitLed)?;
        return Ok(Decomposition {
            family: FormatFamily::MainlandNumeric,
            animal_id: captures[1].to_string(),
            facility_code: captures[2].to_string(),
            year_code: first_char(&captures[3]),
        });
    }

    if let Some(captures) = MAINLAND_ALPHA.captures(code) {
        return Ok(Decomposition {
            family: FormatFamily::MainlandAlpha,
            facility_code: captures[1].to_string(),
            year_code: first_char(&captures[2]),
            animal_id: captures[3].to_string(),
        });
    }

    if let Some(captures) = ISLAND.captures(code) {
        return Ok(Decomposition {
            family: FormatFamily::Island,
            facility_code: captures[1].to_string(),
            animal_id: captures[2].to_string(),
            year_code: first_char(&captures[3]),
        });
    }

    Err(UnmatchedShape::LetterLed)
}

fn first_char(capture: &str) -> char {
    // The year-code capture groups are exactly one character wide
    capture.chars().next().expect("non-empty capture")
}
