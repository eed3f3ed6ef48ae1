//! Map-search query building for resolved facilities
//!
//! A convenience operation independent of the parser: given a facility
//! name and location, produce a URL that searches the maps service for
//! the facility within the registry's region. Pure string transform with
//! no failure modes.

use crate::constants::{MAPS_REGION_SUFFIX, MAPS_SEARCH_BASE_URL};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in the query component.
///
/// Matches the JavaScript `encodeURIComponent` set: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a map-search URL for a facility
///
/// The query is the facility name, its location, and the fixed region
/// suffix, percent-encoded as one component.
pub fn map_search_url(facility_name: &str, location: &str) -> String {
    map_search_url_in_region(facility_name, location, MAPS_REGION_SUFFIX)
}

/// Build a map-search URL with an explicit region suffix
pub fn map_search_url_in_region(facility_name: &str, location: &str, region: &str) -> String {
    let query = format!("{} {} {}", facility_name, location, region);
    format!(
        "{}{}",
        MAPS_SEARCH_BASE_URL,
        utf8_percent_encode(&query, QUERY_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_percent_encoded() {
        let url = map_search_url("Killarney Animal Hospital", "Vancouver");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/Killarney%20Animal%20Hospital%20Vancouver%20BC"
        );
    }

    #[test]
    fn test_encode_uri_component_safe_set_is_kept() {
        let url = map_search_url("Hill 'n Dale (Mission)", "BC");
        assert!(url.ends_with("Hill%20'n%20Dale%20(Mission)%20BC%20BC"));
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let url = map_search_url("Spay & Neuter Clinic", "Langley/Surrey");
        assert!(url.contains("%26"), "ampersand must be escaped: {url}");
        assert!(url.contains("%2F"), "slash must be escaped: {url}");
    }

    #[test]
    fn test_region_override() {
        let url = map_search_url_in_region("Clinic", "Town", "Yukon");
        assert!(url.ends_with("Clinic%20Town%20Yukon"));
    }
}
