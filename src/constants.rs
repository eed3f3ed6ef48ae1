//! Application constants for the tattoo decoder
//!
//! This module contains the fixed vocabulary of the BC pet registry tattoo
//! scheme: the year-code alphabet, user-facing format examples and error
//! messages, and the map-search endpoint.

// =============================================================================
// Year Code Alphabet
// =============================================================================

/// Letters used by the year-code alphabet, in cycle order.
///
/// The registry assigns one letter per calendar year and recycles the
/// alphabet every 21 years, so a letter near the start of the current
/// cycle also denotes a year from the previous one.
pub const YEAR_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

/// Letters excluded from the year-code alphabet
pub const EXCLUDED_YEAR_LETTERS: &[char] = &['D', 'I', 'O', 'Q', 'U'];

/// Length of the recycling cycle in years
pub const YEAR_CYCLE_LENGTH: i32 = 21;

/// Human-readable description of the accepted year-code letters,
/// used in invalid-year-code messages
pub const VALID_YEAR_CODES_HELP: &str =
    "Valid codes: A-H, J-N, P-Z (letters D, I, O, Q, U are excluded)";

// =============================================================================
// Tattoo Code Formats
// =============================================================================

/// Minimum significant length of a tattoo code after normalization
pub const MIN_CODE_LENGTH: usize = 3;

/// Example of the mainland-numeric layout (animal id, facility, year)
pub const EXAMPLE_MAINLAND_NUMERIC: &str = "131MKP";

/// Example of the mainland-alpha layout (facility, year, animal id)
pub const EXAMPLE_MAINLAND_ALPHA: &str = "MKP131";

/// Example of the Vancouver Island layout (facility, animal id, year)
pub const EXAMPLE_ISLAND: &str = "D123V";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Failure messages returned by the parser
pub mod messages {
    /// Empty or whitespace-only input
    pub const EMPTY_INPUT: &str = "Please enter a tattoo code";

    /// Fewer than three significant characters
    pub const TOO_SHORT: &str = "Tattoo code too short";

    /// Digit-led input that does not match the mainland-numeric layout
    pub const INVALID_FORMAT_DIGIT_LED: &str = "Invalid format. Example: 131MKP";

    /// Letter-led input that matches neither remaining layout
    pub const INVALID_FORMAT_LETTER_LED: &str =
        "Invalid format. Examples: 131MKP, MKP131, or D123V";
}

// =============================================================================
// Map Search
// =============================================================================

/// Base URL for facility map searches
pub const MAPS_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/";

/// Region suffix appended to every map-search query
pub const MAPS_REGION_SUFFIX: &str = "BC";
