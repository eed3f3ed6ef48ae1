//! Year-code registry service for single-letter year lookups
//!
//! The BC pet registry encodes the issue year as one letter from a
//! 21-letter alphabet (A-H, J-N, P-Z; D, I, O, Q, U are excluded) that
//! recycles every 21 years. Letters reassigned in the current cycle
//! therefore map to two candidate years, and the registry surfaces both.

use crate::app::models::YearEntry;
use std::collections::HashMap;

/// The year-code table from the BC Pet Registry Tattoo Code Guide 2026.
///
/// Second element is the primary assignment; letters recycled from the
/// previous cycle carry the earlier year as a third element.
const YEAR_TABLE: &[(char, i32, Option<i32>)] = &[
    ('A', 2013, None),
    ('B', 2014, None),
    ('C', 2015, None),
    ('E', 2016, None),
    ('F', 2017, None),
    ('G', 2018, None),
    ('H', 2019, None),
    ('J', 2020, None),
    ('K', 2021, None),
    ('L', 2022, Some(2001)),
    ('M', 2023, Some(2002)),
    ('N', 2024, Some(2003)),
    ('P', 2025, Some(2004)),
    ('R', 2026, Some(2005)),
    ('S', 2006, None),
    ('T', 2007, None),
    ('V', 2008, None),
    ('W', 2009, None),
    ('X', 2010, None),
    ('Y', 2011, None),
    ('Z', 2012, None),
];

/// Year-code registry providing O(1) candidate-year lookups
///
/// The registry is immutable reference data: it is built once from the
/// embedded table and never mutated. Lookup is exact-match on the
/// (already uppercased) year letter.
#[derive(Debug, Clone)]
pub struct YearRegistry {
    entries: HashMap<char, YearEntry>,
}

impl YearRegistry {
    /// Build the registry from the embedded year-code table
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(YEAR_TABLE.len());
        for &(code, primary, recycled) in YEAR_TABLE {
            let mut years = match recycled {
                Some(earlier) => vec![earlier, primary],
                None => vec![primary],
            };
            years.sort_unstable();
            entries.insert(code, YearEntry { code, years });
        }
        Self { entries }
    }

    /// Get the year entry for a letter (O(1) lookup)
    pub fn get(&self, code: char) -> Option<&YearEntry> {
        self.entries.get(&code)
    }

    /// Check whether a letter is a valid year code
    pub fn contains(&self, code: char) -> bool {
        self.entries.contains_key(&code)
    }

    /// Number of letters in the year-code alphabet
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries sorted by letter, for tabular display
    pub fn entries_sorted(&self) -> Vec<&YearEntry> {
        let mut entries: Vec<&YearEntry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.code);
        entries
    }
}

impl Default for YearRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EXCLUDED_YEAR_LETTERS, YEAR_ALPHABET, YEAR_CYCLE_LENGTH};

    #[test]
    fn test_registry_covers_full_alphabet() {
        let registry = YearRegistry::new();
        assert_eq!(registry.entry_count(), 21);
        for &letter in YEAR_ALPHABET {
            assert!(registry.contains(letter), "missing year code {}", letter);
        }
    }

    #[test]
    fn test_excluded_letters_are_absent() {
        let registry = YearRegistry::new();
        for &letter in EXCLUDED_YEAR_LETTERS {
            assert!(!registry.contains(letter), "{} should be excluded", letter);
        }
    }

    #[test]
    fn test_single_year_lookup() {
        let registry = YearRegistry::new();
        let entry = registry.get('V').unwrap();
        assert_eq!(entry.years, vec![2008]);
        assert_eq!(entry.year_text(), "2008");
    }

    #[test]
    fn test_recycled_letters_carry_both_years() {
        let registry = YearRegistry::new();
        for (letter, expected) in [
            ('L', vec![2001, 2022]),
            ('M', vec![2002, 2023]),
            ('N', vec![2003, 2024]),
            ('P', vec![2004, 2025]),
            ('R', vec![2005, 2026]),
        ] {
            let entry = registry.get(letter).unwrap();
            assert_eq!(entry.years, expected, "years for {}", letter);
        }
    }

    #[test]
    fn test_recycled_years_are_one_cycle_apart() {
        let registry = YearRegistry::new();
        for entry in registry.entries_sorted() {
            if entry.is_ambiguous() {
                assert_eq!(entry.years[1] - entry.years[0], YEAR_CYCLE_LENGTH);
            }
        }
    }

    #[test]
    fn test_entries_sorted_by_letter() {
        let registry = YearRegistry::new();
        let letters: Vec<char> = registry.entries_sorted().iter().map(|e| e.code).collect();
        let mut expected = letters.clone();
        expected.sort_unstable();
        assert_eq!(letters, expected);
    }
}
