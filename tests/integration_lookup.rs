//! Integration tests for tattoo code decoding through the public API
//!
//! These tests exercise the complete pipeline - normalization, layout
//! detection, year validation, and partitioned facility lookup - exactly
//! as a downstream caller would use it.

use tattoo_decoder::app::services::map_search::map_search_url;
use tattoo_decoder::{FailureKind, FormatFamily, ParseOutcome, TattooParser};

/// Decode a mainland-numeric code end to end
///
/// Purpose: Validate the 2+1 facility/year split of trailing letters
/// Benefit: Guards the layout rule that makes 131MKP resolve to MK, not MKP
#[test]
fn test_decode_mainland_numeric_code() {
    let parser = TattooParser::bundled();
    let outcome = parser.parse("131MKP");

    let decode = outcome.decode().expect("131MKP should fully decode");
    assert_eq!(decode.fields.facility_code, "MK");
    assert_eq!(decode.fields.year_code, 'P');
    assert_eq!(decode.fields.animal_id, "131");
    assert_eq!(decode.facility.name, "Killarney Animal Hospital");
    assert_eq!(decode.year_text, "2004 or 2025");
    assert_eq!(decode.fields.family, FormatFamily::MainlandNumeric);
}

/// Decode an island code end to end
#[test]
fn test_decode_island_code() {
    let parser = TattooParser::bundled();
    let outcome = parser.parse("re456h");

    let decode = outcome.decode().expect("RE456H should fully decode");
    assert_eq!(decode.facility.name, "Elk Lake Veterinary Clinic");
    assert!(decode.facility.island);
    assert_eq!(decode.candidate_years, vec![2019]);
    assert_eq!(decode.fields.family.display_name(), "Vancouver Island");
}

/// A valid layout with an unknown facility still surfaces the years
#[test]
fn test_partial_match_keeps_year_information() {
    let parser = TattooParser::bundled();
    let outcome = parser.parse("ZZ999Z");

    assert!(!outcome.is_decoded());
    assert_eq!(outcome.candidate_years(), Some(&[2012][..]));
    let message = outcome.message().expect("partial match carries a message");
    assert!(message.contains("\"ZZ\""));
}

/// Malformed input never panics or errors, whatever the shape
#[test]
fn test_malformed_input_is_a_value_not_a_panic() {
    let parser = TattooParser::bundled();
    for input in ["", " ", "A", "12AB", "!!!", "123456", "ABCDEFG", "1A2B3C"] {
        match parser.parse(input) {
            ParseOutcome::Failure { message, .. } => assert!(!message.is_empty()),
            other => panic!("input {:?} should fail, got {:?}", input, other),
        }
    }
}

/// The parser is safe to share across threads without coordination
#[test]
fn test_concurrent_parsing_is_consistent() {
    use std::sync::Arc;
    use std::thread;

    let parser = Arc::new(TattooParser::bundled());
    let expected = parser.parse("AAHN45");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || parser.parse("AAHN45"))
        })
        .collect();

    for handle in handles {
        let outcome = handle.join().expect("thread should not panic");
        assert_eq!(outcome, expected);
    }
}

/// Failure kinds match the documented taxonomy
#[test]
fn test_failure_taxonomy() {
    let parser = TattooParser::bundled();
    let cases = [
        ("", FailureKind::EmptyInput),
        ("AB", FailureKind::TooShort),
        ("12AB", FailureKind::UnrecognizedFormat),
        ("AAHQ45", FailureKind::InvalidYearCode),
    ];
    for (input, expected) in cases {
        match parser.parse(input) {
            ParseOutcome::Failure { kind, .. } => assert_eq!(kind, expected, "input {input:?}"),
            other => panic!("input {:?} should fail, got {:?}", input, other),
        }
    }
}

/// Decoded results serialize to tagged JSON for downstream callers
#[test]
fn test_outcome_serializes_to_tagged_json() {
    let parser = TattooParser::bundled();
    let outcome = parser.parse("D123V");

    let json = serde_json::to_value(&outcome).expect("outcome should serialize");
    assert_eq!(json["outcome"], "decoded");
    assert_eq!(json["facility"]["name"], "Island Veterinary Hospital-Central");
    assert_eq!(json["year_text"], "2008");
}

/// Map-search URLs follow the facility record
#[test]
fn test_map_search_url_for_decoded_facility() {
    let parser = TattooParser::bundled();
    let outcome = parser.parse("131MKP");
    let decode = outcome.decode().expect("should decode");

    let url = map_search_url(&decode.facility.name, &decode.facility.location);
    assert_eq!(
        url,
        "https://www.google.com/maps/search/Killarney%20Animal%20Hospital%20Vancouver%20BC"
    );
}
