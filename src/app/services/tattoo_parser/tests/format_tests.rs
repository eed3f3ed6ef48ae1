//! Tests for layout detection and decomposition

use crate::app::models::FormatFamily;
use crate::app::services::tattoo_parser::format::{UnmatchedShape, decompose};
use crate::app::services::tattoo_parser::normalize::normalize;

#[test]
fn test_mainland_numeric_decomposition() {
    let d = decompose("131MKP").unwrap();
    assert_eq!(d.family, FormatFamily::MainlandNumeric);
    assert_eq!(d.animal_id, "131");
    assert_eq!(d.facility_code, "MK");
    assert_eq!(d.year_code, 'P');
}

#[test]
fn test_mainland_numeric_three_letter_facility() {
    // Four trailing letters leave three for the facility group
    let d = decompose("45AAHN").unwrap();
    assert_eq!(d.family, FormatFamily::MainlandNumeric);
    assert_eq!(d.animal_id, "45");
    assert_eq!(d.facility_code, "AAH");
    assert_eq!(d.year_code, 'N');
}

#[test]
fn test_mainland_alpha_greedy_facility_group() {
    let d = decompose("AAHN45").unwrap();
    assert_eq!(d.family, FormatFamily::MainlandAlpha);
    assert_eq!(d.facility_code, "AAH");
    assert_eq!(d.year_code, 'N');
    assert_eq!(d.animal_id, "45");
}

#[test]
fn test_mainland_alpha_two_letter_facility() {
    let d = decompose("MKP131").unwrap();
    assert_eq!(d.family, FormatFamily::MainlandAlpha);
    assert_eq!(d.facility_code, "MK");
    assert_eq!(d.year_code, 'P');
    assert_eq!(d.animal_id, "131");
}

#[test]
fn test_island_decomposition() {
    let d = decompose("D123V").unwrap();
    assert_eq!(d.family, FormatFamily::Island);
    assert_eq!(d.facility_code, "D");
    assert_eq!(d.animal_id, "123");
    assert_eq!(d.year_code, 'V');
}

#[test]
fn test_island_two_letter_facility() {
    let d = decompose("RE456H").unwrap();
    assert_eq!(d.family, FormatFamily::Island);
    assert_eq!(d.facility_code, "RE");
    assert_eq!(d.animal_id, "456");
    assert_eq!(d.year_code, 'H');
}

#[test]
fn test_mainland_alpha_tried_before_island() {
    // ZZ999Z could only be island-shaped; MKP131 is alpha-shaped. A code
    // matching the alpha layout must never reach the island attempt.
    let d = decompose("ABV12").unwrap();
    assert_eq!(d.family, FormatFamily::MainlandAlpha);
    assert_eq!(d.facility_code, "AB");
    assert_eq!(d.year_code, 'V');
}

#[test]
fn test_digit_led_mismatch_fails_without_fallback() {
    // 12AB has only two trailing letters: the mainland-numeric layout
    // cannot split them into a 2-3 letter facility plus a year letter,
    // and no other layout may be tried.
    assert_eq!(decompose("12AB").unwrap_err(), UnmatchedShape::DigitLed);
    assert_eq!(decompose("123").unwrap_err(), UnmatchedShape::DigitLed);
}

#[test]
fn test_letter_led_mismatch() {
    assert_eq!(decompose("ABCDE").unwrap_err(), UnmatchedShape::LetterLed);
    assert_eq!(decompose("A1B2C").unwrap_err(), UnmatchedShape::LetterLed);
}

#[test]
fn test_normalize_strips_internal_whitespace_and_uppercases() {
    assert_eq!(normalize(" d 123 v ").unwrap(), "D123V");
    assert_eq!(normalize("mkp131").unwrap(), "MKP131");
}

#[test]
fn test_normalize_rejects_empty_and_short_input() {
    use crate::app::models::FailureKind;
    assert_eq!(normalize("").unwrap_err(), FailureKind::EmptyInput);
    assert_eq!(normalize("   ").unwrap_err(), FailureKind::EmptyInput);
    assert_eq!(normalize("AB").unwrap_err(), FailureKind::TooShort);
    assert_eq!(normalize(" A B ").unwrap_err(), FailureKind::TooShort);
}
