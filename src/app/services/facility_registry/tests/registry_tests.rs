//! Tests for facility registry loading and partitioned lookup

use crate::app::models::FormatFamily;
use crate::app::services::facility_registry::FacilityRegistry;

#[test]
fn test_registry_loads_both_partitions() {
    let registry = FacilityRegistry::load();
    assert!(registry.mainland_count() > 400, "mainland partition too small");
    assert!(registry.island_count() > 80, "island partition too small");
    assert_eq!(
        registry.facility_count(),
        registry.mainland_count() + registry.island_count()
    );
}

#[test]
fn test_mainland_lookup() {
    let registry = FacilityRegistry::load();
    let record = registry.get("MK", FormatFamily::MainlandNumeric).unwrap();
    assert_eq!(record.name, "Killarney Animal Hospital");
    assert_eq!(record.location, "Vancouver");
    assert!(!record.island);
    assert!(!record.closed);
}

#[test]
fn test_both_mainland_layouts_share_a_partition() {
    let registry = FacilityRegistry::load();
    let numeric = registry.get("AAH", FormatFamily::MainlandNumeric);
    let alpha = registry.get("AAH", FormatFamily::MainlandAlpha);
    assert_eq!(numeric, alpha);
    assert_eq!(numeric.unwrap().name, "Yaletown Pet Hospital");
}

#[test]
fn test_island_lookup_uses_island_partition() {
    let registry = FacilityRegistry::load();
    let record = registry.get("D", FormatFamily::Island).unwrap();
    assert_eq!(record.name, "Island Veterinary Hospital-Central");
    assert_eq!(record.location, "Nanaimo");
    assert!(record.island);
}

#[test]
fn test_single_letter_codes_never_resolve_on_mainland() {
    // Mainland layouts require 2-3 facility letters, so the mainland
    // partition must hold no single-letter codes at all.
    let registry = FacilityRegistry::load();
    for facility in registry.facilities() {
        if !facility.island {
            assert!(
                facility.code.len() >= 2,
                "mainland partition holds single-letter code {}",
                facility.code
            );
        }
    }
    assert!(registry.get("D", FormatFamily::MainlandNumeric).is_none());
    assert!(registry.get("A", FormatFamily::MainlandAlpha).is_none());
}

#[test]
fn test_partitions_keep_colliding_codes_apart() {
    // RA is Dr. R.F. Abernathy on the island; the mainland scheme never
    // assigned it. A flat table could not tell these spaces apart.
    let registry = FacilityRegistry::load();
    assert!(registry.get("RA", FormatFamily::Island).is_some());
    assert!(registry.get("RA", FormatFamily::MainlandAlpha).is_none());
    assert!(registry.exists_in_other_partition("RA", FormatFamily::MainlandAlpha));
    assert!(!registry.exists_in_other_partition("RA", FormatFamily::Island));
}

#[test]
fn test_duplicate_me_code_is_flagged_not_resolved() {
    let registry = FacilityRegistry::load();
    let stats = registry.load_stats();
    assert!(stats.has_duplicates());
    assert_eq!(stats.duplicate_codes, vec!["ME".to_string()]);

    // Last-defined entry wins, matching the source guide's own ordering
    let record = registry.get("ME", FormatFamily::MainlandAlpha).unwrap();
    assert_eq!(record.name, "Merritt Veterinary Hospital");
}

#[test]
fn test_closed_facility_carries_note() {
    let registry = FacilityRegistry::load();
    let record = registry.get("BT", FormatFamily::MainlandNumeric).unwrap();
    assert!(record.closed);
    assert_eq!(
        record.note.as_deref(),
        Some("Records held by Eagle Hill Animal Hospital - AGJ")
    );
}

#[test]
fn test_load_stats_accounting() {
    let registry = FacilityRegistry::load();
    let stats = registry.load_stats();
    assert_eq!(stats.records_in_table, 560);
    // One duplicate collapses into a single indexed entry
    assert_eq!(
        stats.total_loaded(),
        stats.records_in_table - stats.duplicate_codes.len()
    );
    assert!(stats.closed_count > 100);
    assert!(stats.summary().contains("mainland"));
}

#[test]
fn test_year_letter_o_is_still_a_valid_island_facility() {
    // O is excluded from the year alphabet but is a legitimate island
    // facility code (Alberni Veterinary Clinic).
    let registry = FacilityRegistry::load();
    let record = registry.get("O", FormatFamily::Island).unwrap();
    assert_eq!(record.name, "Alberni Veterinary Clinic");
}
