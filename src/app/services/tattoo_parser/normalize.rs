//! Input normalization for tattoo codes
//!
//! Codes arrive as free-form text typed into a form field; transcriptions
//! commonly carry stray spaces and mixed case. Normalization strips all
//! whitespace (internal included) and uppercases before any layout is
//! attempted.

use crate::app::models::FailureKind;
use crate::constants::MIN_CODE_LENGTH;

/// Normalize raw input into a candidate code
///
/// Returns the failure classification instead of a message so the parser
/// owns the user-facing wording.
pub(crate) fn normalize(raw: &str) -> Result<String, FailureKind> {
    if raw.trim().is_empty() {
        return Err(FailureKind::EmptyInput);
    }

    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if normalized.len() < MIN_CODE_LENGTH {
        return Err(FailureKind::TooShort);
    }

    Ok(normalized)
}
