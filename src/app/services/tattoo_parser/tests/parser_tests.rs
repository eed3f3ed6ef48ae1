//! End-to-end parser tests covering the decoding contract

use crate::app::models::{FailureKind, FormatFamily, ParseOutcome};
use crate::app::services::tattoo_parser::TattooParser;

fn parser() -> TattooParser {
    TattooParser::bundled()
}

fn expect_failure(outcome: ParseOutcome) -> (FailureKind, String) {
    match outcome {
        ParseOutcome::Failure { kind, message } => (kind, message),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_mainland_numeric_decode() {
    let outcome = parser().parse("131MKP");
    let decode = outcome.decode().expect("should decode");
    assert_eq!(decode.fields.animal_id, "131");
    assert_eq!(decode.fields.facility_code, "MK");
    assert_eq!(decode.fields.year_code, 'P');
    assert_eq!(decode.facility.name, "Killarney Animal Hospital");
    assert_eq!(decode.candidate_years, vec![2004, 2025]);
    assert_eq!(decode.year_text, "2004 or 2025");
    assert_eq!(decode.fields.family.display_name(), "BC Mainland");
}

#[test]
fn test_mainland_alpha_decode() {
    let outcome = parser().parse("AAHN45");
    let decode = outcome.decode().expect("should decode");
    assert_eq!(decode.fields.facility_code, "AAH");
    assert_eq!(decode.fields.year_code, 'N');
    assert_eq!(decode.fields.animal_id, "45");
    assert_eq!(decode.facility.name, "Yaletown Pet Hospital");
    assert_eq!(decode.candidate_years, vec![2003, 2024]);
    assert_eq!(decode.fields.family, FormatFamily::MainlandAlpha);
}

#[test]
fn test_island_decode() {
    let outcome = parser().parse("D123V");
    let decode = outcome.decode().expect("should decode");
    assert_eq!(decode.fields.facility_code, "D");
    assert_eq!(decode.fields.animal_id, "123");
    assert_eq!(decode.fields.year_code, 'V');
    assert_eq!(decode.facility.name, "Island Veterinary Hospital-Central");
    assert!(decode.facility.island);
    assert_eq!(decode.candidate_years, vec![2008]);
    assert_eq!(decode.year_text, "2008");
    assert_eq!(decode.fields.family.display_name(), "Vancouver Island");
}

#[test]
fn test_unknown_facility_yields_partial_match() {
    let outcome = parser().parse("ZZ999Z");
    match outcome {
        ParseOutcome::PartialMatch {
            message,
            fields,
            candidate_years,
        } => {
            assert!(message.contains("ZZ"));
            assert_eq!(fields.facility_code, "ZZ");
            assert_eq!(fields.year_code, 'Z');
            assert_eq!(fields.animal_id, "999");
            assert_eq!(candidate_years, vec![2012]);
        }
        other => panic!("expected partial match, got {:?}", other),
    }
}

#[test]
fn test_partial_match_mentions_other_code_space() {
    // TAK is unassigned everywhere; TA belongs to the island partition,
    // so an alpha-shaped code extracting TA should hint at the collision.
    let outcome = parser().parse("TAK123");
    match outcome {
        ParseOutcome::PartialMatch { message, fields, .. } => {
            assert_eq!(fields.facility_code, "TA");
            assert_eq!(fields.family, FormatFamily::MainlandAlpha);
            assert!(message.contains("other code space"), "message: {message}");
        }
        other => panic!("expected partial match, got {:?}", other),
    }
}

#[test]
fn test_empty_and_whitespace_input() {
    let (kind, message) = expect_failure(parser().parse(""));
    assert_eq!(kind, FailureKind::EmptyInput);
    assert_eq!(message, "Please enter a tattoo code");

    let (kind, _) = expect_failure(parser().parse("   \t "));
    assert_eq!(kind, FailureKind::EmptyInput);
}

#[test]
fn test_too_short_input() {
    let (kind, message) = expect_failure(parser().parse("AB"));
    assert_eq!(kind, FailureKind::TooShort);
    assert_eq!(message, "Tattoo code too short");
}

#[test]
fn test_three_character_code_is_accepted() {
    // Exactly three valid characters must parse when they match a layout
    let outcome = parser().parse("D1V");
    let decode = outcome.decode().expect("should decode");
    assert_eq!(decode.fields.animal_id, "1");
    assert_eq!(decode.fields.facility_code, "D");
}

#[test]
fn test_digit_led_exclusivity() {
    // 12AB starts with a digit and fails the mainland-numeric layout;
    // it must fail outright with the digit-led example message rather
    // than falling back to the other layouts.
    let (kind, message) = expect_failure(parser().parse("12AB"));
    assert_eq!(kind, FailureKind::UnrecognizedFormat);
    assert_eq!(message, "Invalid format. Example: 131MKP");
}

#[test]
fn test_letter_led_mismatch_lists_all_examples() {
    let (kind, message) = expect_failure(parser().parse("ABCDE"));
    assert_eq!(kind, FailureKind::UnrecognizedFormat);
    assert_eq!(message, "Invalid format. Examples: 131MKP, MKP131, or D123V");
}

#[test]
fn test_invalid_year_code() {
    // Q is excluded from the year alphabet
    let (kind, message) = expect_failure(parser().parse("AAHQ45"));
    assert_eq!(kind, FailureKind::InvalidYearCode);
    assert!(message.contains("\"Q\""));
    assert!(message.contains("D, I, O, Q, U"));
}

#[test]
fn test_year_validated_before_facility_lookup() {
    // Unknown facility AND invalid year: the year failure wins, so no
    // partial match leaks an unvalidated year.
    let (kind, _) = expect_failure(parser().parse("ZZQ45"));
    assert_eq!(kind, FailureKind::InvalidYearCode);
}

#[test]
fn test_parse_is_idempotent() {
    let parser = parser();
    for input in ["131MKP", "ZZ999Z", "12AB", "", "AAHN45"] {
        assert_eq!(parser.parse(input), parser.parse(input), "input {input:?}");
    }
}

#[test]
fn test_normalization_invariance() {
    let parser = parser();
    let spaced = parser.parse(" d123v ");
    let plain = parser.parse("D123V");

    let spaced_decode = spaced.decode().expect("should decode");
    let plain_decode = plain.decode().expect("should decode");

    // Identical apart from the recorded original input
    assert_eq!(spaced_decode.fields.original, " d123v ");
    assert_eq!(plain_decode.fields.original, "D123V");
    let mut spaced_neutral = spaced_decode.clone();
    spaced_neutral.fields.original.clear();
    let mut plain_neutral = plain_decode.clone();
    plain_neutral.fields.original.clear();
    assert_eq!(spaced_neutral, plain_neutral);
}

#[test]
fn test_ambiguous_year_text_is_ascending() {
    let parser = parser();
    for (code, expected) in [
        ("AAHL1", "2001 or 2022"),
        ("AAHM1", "2002 or 2023"),
        ("AAHN1", "2003 or 2024"),
        ("AAHP1", "2004 or 2025"),
        ("AAHR1", "2005 or 2026"),
    ] {
        let outcome = parser.parse(code);
        let decode = outcome.decode().expect("should decode");
        assert_eq!(decode.year_text, expected, "code {code}");
        assert!(decode.candidate_years[0] < decode.candidate_years[1]);
    }
}

#[test]
fn test_decoded_invariants() {
    // A decode always carries a resolved facility and non-empty years
    let parser = parser();
    for input in ["131MKP", "AAHN45", "D123V", "RE456H", "MKP131"] {
        let outcome = parser.parse(input);
        let decode = outcome.decode().expect("should decode");
        assert!(!decode.candidate_years.is_empty());
        assert!(!decode.facility.name.is_empty());
    }
}
