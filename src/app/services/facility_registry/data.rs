//! Embedded facility directory reference data
//!
//! The table below is the facility directory from the BC Pet Registry
//! Tattoo Code Guide 2026, carried verbatim as versioned static data.
//! It is inert: all lookup semantics live in the registry that indexes
//! it at startup.
//!
//! Known defects inherited from the source guide and preserved here for
//! the loader to flag rather than silently resolve:
//! - `ME` is defined twice (Logan Lake Vet Clinic and Merritt Veterinary
//!   Hospital); the loader records the collision in its load statistics.
//! - Some `location` strings embed closure notes or neighbouring rows'
//!   text; they are kept as-is because the field is free text.
//!
//! The source guide's `NEW` separator row ("3-LETTER FACILITY CODES") is
//! not a facility and is omitted.

/// One row of the embedded facility table
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawFacility {
    pub code: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub closed: bool,
    pub note: Option<&'static str>,
    pub island: bool,
}

/// Shorthand constructor keeping the table rows readable
const fn row(
    code: &'static str,
    name: &'static str,
    location: &'static str,
    closed: bool,
    note: Option<&'static str>,
    island: bool,
) -> RawFacility {
    RawFacility {
        code,
        name,
        location,
        closed,
        note,
        island,
    }
}

/// The facility directory, in source-guide order
#[rustfmt::skip]
pub(crate) const FACILITY_TABLE: &[RawFacility] = &[
    row("AA", "Vancouver Veterinary Hospital", "Vancouver", false, None, false),
    row("AB", "BC SPCA Animal Hospital", "Vancouver", false, None, false),
    row("AC", "Anderson Animal Hospital", "Vancouver", true, Some("Merged with Vancouver South Animal Hospital June 2020"), false),
    row("AD", "Aberdeen Animal Hospital", "Burnaby", true, None, false),
    row("AE", "Terrace Veterinary Hospital", "Terrace", true, None, false),
    row("AF", "Animal Care Clinic & Hospital FC/Fairview Van", "BC", true, Some("No records available since 1997"), false),
    row("AG", "Austin Animal Hospital", "Coquitlam", true, None, false),
    row("AH", "All Critters Animal Hospital Fleetwood", "Surrey", false, None, false),
    row("AJ", "Arbutus West Animal Clinic", "Vancouver", false, None, false),
    row("AK", "Ocean Park Veterinary Clinic", "Surrey", false, None, false),
    row("AL", "Alouette Animal Hosp", "Maple Ridge", false, None, false),
    row("AM", "Aldergrove Animal Hospital", "Aldergrove", false, None, false),
    row("AN", "Aldor Veterinary Clinic", "Langley", false, None, false),
    row("AP", "Animal Medical Hospital", "West Van", false, None, false),
    row("AR", "Ambleside Animal Hospital", "West Van", false, None, false),
    row("AS", "Allondale Animal Hospital", "Surrey", false, None, false),
    row("AT", "Armstrong Veterinary Clinic", "BC", false, None, false),
    row("AV", "King George Veterinary Hospital", "Surrey", false, None, false),
    row("AX", "No. 2 Road Animal Hosp", "Richmond", false, None, false),
    row("AY", "Accord Veterinary Services", "Kamloops", true, None, false),
    row("BA", "Burquitlam Animal Hosp", "Coquitlam", false, None, false),
    row("BB", "Burton Veterinary Services", "Abbotsford", false, None, false),
    row("BC", "Blue Cross Pet Hospital", "Vancouver", false, None, false),
    row("BE", "North Burnaby Pet Hosp", "North Burnaby", false, None, false),
    row("BF", "Dolphin Veterinary Services", "Langley", false, None, false),
    row("BG", "Coast Mountain Vet Services", "Whistler", false, None, false),
    row("BH", "Bulkley Valley Vet Clinic", "Smithers", true, None, false),
    row("BJ", "Atlas Animal Hospital-North Vancouver", "BC", false, None, false),
    row("BK", "Newton Animal Hospital", "Surrey", false, None, false),
    row("BM", "Acadia Veterinary Clinic", "Vancouver", false, None, false),
    row("BN", "Care Pet Wellness Burnaby/New West", "BC", false, None, false),
    row("BP", "Pacific Dental Service for Animals", "Princeton", true, None, false),
    row("BR", "Blueridge Cove Animal Hosp", "North Van", false, None, false),
    row("BS", "South Burnaby Veterinary Hospital", "Burnaby", false, None, false),
    row("BT", "Eagle Road Animal Hospital", "Mission", true, Some("Records held by Eagle Hill Animal Hospital - AGJ"), false),
    row("BV", "Burnaby Veterinary Hospital", "Burnaby", false, None, false),
    row("BW", "Brookswood Veterinary Hosp", "Langley", false, None, false),
    row("BX", "Greenbelt Veterinary Services", "Chilliwack", false, None, false),
    row("BY", "Pineview Pet Hospital", "Aldergrove", true, None, false),
    row("CA", "Cambie Animal Hospital", "Vancouver", true, Some("Merged with Vancouver South Animal Hospital June 2020"), false),
    row("CB", "Coast Meridian Animal Hosp", "Port Coquitlam", false, None, false),
    row("CC", "Cranbrook Veterinary Hospital", "Cranbrook", false, None, false),
    row("CD", "Cedar Hills Animal Hospital", "Surrey", false, None, false),
    row("CF", "Central Animal Hospital", "Kamloops", false, None, false),
    row("CG", "Aaron Animal Hospital", "Cloverdale", false, None, false),
    row("CH", "Central Veterinary Clinic", "Chilliwack", false, None, false),
    row("CK", "Lifetime Pet Care Practice of Strawberry Hill", "Surrey", false, None, false),
    row("CL", "Coquitlam Animal Hospital", "Coquitlam", false, None, false),
    row("CN", "Cats Only Vet Clinic", "Vancouver", false, None, false),
    row("CP", "Central Park Veterinary Hospital", "Burnaby", true, None, false),
    row("CR", "Cheam View Vet Hospital", "Chilliwack", false, None, false),
    row("CS", "Capilano Pet Hospital", "North Van", true, None, false),
    row("CT", "Cat Hospital", "The, West Vancouver", true, None, false),
    row("CV", "Tri-Lake Animal Hospital", "Winfield", false, None, false),
    row("CW", "Champlain Animal Clinic", "Vancouver", false, None, false),
    row("CX", "Nelson Animal Hospital", "Nelson", false, None, false),
    row("CY", "Chetwynd Veterinary Hospital", "Chetwynd", false, None, false),
    row("DA", "Dear Animal Hospital", "The, Richmond", true, Some("Closed 05/10/18, records held by Island Animal Hospital – HH"), false),
    row("DB", "Dunbar Veterinary Hospital", "Vancouver", true, None, false),
    row("DC", "Care Pet Wellness Group-Seymour Animal", "BC", true, None, false),
    row("DD", "Westview Vet Hospital", "Powell River", false, None, false),
    row("DE", "South Valley Veterinary Hospital", "Osoyoos", false, None, false),
    row("DF", "Vancouver City Pound", "Vancouver", false, None, false),
    row("DH", "Sunshine Hills Veterinary Clinic", "Delta", false, None, false),
    row("DJ", "Creston Veterinary Hospital", "Creston", false, None, false),
    row("DK", "Dawson Creek Vet Clinic", "Dawson Creek", false, None, false),
    row("DL", "South Valley Vet Hospital", "Keremeos", true, None, false),
    row("DM", "Dewdney Animal Hospital", "Maple Ridge", false, None, false),
    row("DN", "North & West Van Mobile Veterinary Services", "BC", false, None, false),
    row("DP", "Central Animal Hospital", "Vernon", false, None, false),
    row("DR", "Queen Charlotte Island Animal Hospital", "Tlell", false, None, false),
    row("DS", "Vernon Veterinary Clinic", "Vernon", false, None, false),
    row("DV", "Dundarave Vet Clinic", "West Vancouver", true, None, false),
    row("DW", "Castlegar Veterinary Hospital", "Castlegar", false, None, false),
    row("DX", "Boundary Animal Hospital", "BC", false, None, false),
    row("DY", "Driftwood Veterinary Clinic", "Houston", true, None, false),
    row("EA", "Ellis Animal Hospital", "Kelowna", true, None, false),
    row("EC", "Central City Animal Hospital", "New West", false, None, false),
    row("EE", "Pacific Equine Clinic", "Surrey", false, None, false),
    row("EF", "Eagle Ridge Veterinary Hospital", "Sechelt", false, None, false),
    row("EH", "Vancouver Animal Emerg. Clinic", "Vancouver", false, None, false),
    row("EJ", "Terra Nova Village Veterinarian", "Richmond", false, None, false),
    row("EK", "West Kelowna Animal Hospital", "BC", false, None, false),
    row("EL", "Kitsilano Animal Clinic", "Vancouver", false, None, false),
    row("EN", "Nicola Valley Veterinary Clinic", "Merritt", true, Some("Closed 12/31/18, records held by Merritt Veterinary Hospital – ME"), false),
    row("ER", "Eagle Ridge Animal & Bird Hosp.", "Coquitlam", false, None, false),
    row("ES", "Dr. R. Estensen", "Abbotsford", true, None, false),
    row("ET", "Valleyview Veterinary Clinic", "Kamloops", false, None, false),
    row("EV", "Garibaldi Vet Hosp", "Garibaldi Highlands", false, None, false),
    row("EW", "Surrey Animal Hospital", "Surrey", false, None, false),
    row("EX", "Bakerview Pet Hospital", "Abbotsford", true, Some("Records held by Elwood Animal Hospital – PP"), false),
    row("EY", "West Kootenay Animal Hospital", "Trail", false, None, false),
    row("FA", "Vetcetera Pet Hospital of Richmond", "BC", true, Some("New name/code: Central Richmond Pet Hospital - ACV"), false),
    row("FB", "Arrow Lake Veterinary Hospital", "Castlegar", false, None, false),
    row("FC", "S. Cariboo Animal Hosp", "100 Mile House", true, None, false),
    row("FD", "Mackenzie Veterinary Clinic", "MacKenzie .", true, Some("Closed as of September 1, 2019. For medical records, contact Chetwynd Veterinary Hospital at 250-788-9374"), false),
    row("FE", "Vetcetera Pet Hosp", "Lougheed/Pinetree", true, Some("New name/code: Oxford Animal Hospital - ACU"), false),
    row("FF", "Squamish Veterinary Hospital", "Squamish", true, None, false),
    row("FG", "Fairfield Animal Hospital", "Kelowna", false, None, false),
    row("FH", "Fraser Heights Animal Hospital", "Surrey", false, None, false),
    row("FJ", "North Peace Vet Clinic", "Fort St. John", false, None, false),
    row("FL", "Fort Langley Veterinary Clinic", "Fort Langley", false, None, false),
    row("FN", "Central Langley Pet Hospital", "Langley", false, None, false),
    row("FP", "Fraser Pet Hospital", "Vancouver", true, None, false),
    row("FR", "Mills Veterinary Services", "Armstrong", false, None, false),
    row("FS", "Ospika Animal Hospital", "Prince George", false, Some("Former name: All-Mobile Veterinary Services"), false),
    row("FT", "Leishman Veterinary Services", "Mission", true, None, false),
    row("FV", "Fraserview Animal Clinic", "Vancouver", true, None, false),
    row("FW", "Tumbler Ridge Vet Clinic", "Tumbler Ridge", true, None, false),
    row("FX", "Alexander Mobile Equine Surgery", "Langley", true, None, false),
    row("FY", "Anderson Veterinary Clinic", "Penticton", false, None, false),
    row("GA", "Kimberly Veterinary Clinic", "Kimberley", false, None, false),
    row("GB", "Gibsons Animal Hospital", "Gibsons", true, None, false),
    row("GC", "Garden City Veterinary Hospital", "Richmond", false, None, false),
    row("GD", "Vanderhoof Veterinary Clinic", "Vanderhoof", false, None, false),
    row("GE", "Olson Animal Hospital", "Prince George", true, None, false),
    row("GF", "Glenn Mountain Animal Hospital", "Abbotsford", false, None, false),
    row("GG", "Chilliwack Veterinary Clinic", "Chilliwack", true, None, false),
    row("GH", "Guildford Animal Hospital", "Surrey", false, None, false),
    row("GJ", "Gresley-Jones Veterinary Services", "Trail", true, None, false),
    row("GK", "Lakeland Vet Clinic", "100 Mile House", false, None, false),
    row("GL", "Cache Creek Veterinary Hospital", "BC", false, None, false),
    row("GM", "White Rock Veterinary Hospital", "White Rock", false, None, false),
    row("GN", "Nechako Veterinary Clinic", "Langley", true, None, false),
    row("GP", "Point Grey Veterinary Clinic", "Vancouver", false, None, false),
    row("GR", "Steveston Veterinary Hospital", "Richmond", false, None, false),
    row("GS", "Granville Island Veterinary Hospital", "Vancouver", false, None, false),
    row("GT", "Abbotsford Veterinary Clinic", "Abbotsford", false, None, false),
    row("GV", "Valley Veterinary Services", "Chilliwack", false, None, false),
    row("GW", "Riverside Small Animal Hospital", "Kamloops 48th GY Avenue Animal Hospital, Ladner", false, None, false),
    row("GX", "Country Grove Vet Clinic", "Aldergrove", false, None, false),
    row("HA", "Care Pet Wellness Group Highlands Animal Hosp.", "North Van", false, None, false),
    row("HB", "Night Owl Bird Hospital", "Vancouver", false, None, false),
    row("HC", "Mayne Island Veterinary Clinic", "Mayne Island", false, None, false),
    row("HD", "Hill ‘n Dale Animal Hospital", "Mission", true, None, false),
    row("HE", "Penticton Veterinary Hospital", "Penticton", false, None, false),
    row("HF", "Huff Animal Hospital", "Delta", false, None, false),
    row("HG", "Valley Veterinary Clinic", "Windermere", true, None, false),
    row("HH", "Island Veterinary Hospital", "Richmond", false, None, false),
    row("HJ", "Hornby Veterinary Clinic", "Hornby Island", true, None, false),
    row("HK", "Summerland Animal Clinic", "Summerland", false, None, false),
    row("HL", "The Lions Vet Clinic", "North Vancouver", true, None, false),
    row("HM", "Tsawwassen Animal Hospital", "Delta", false, None, false),
    row("HN", "Oak Animal Hospital", "Vancouver", false, None, false),
    row("HP", "Vancouver Animal Wellness Hosp.", "Van", false, None, false),
    row("HR", "Port Coquitlam Animal Hospital", "Port Coquitlam", false, None, false),
    row("HS", "Chase Veterinary Clinic", "Chase", false, None, false),
    row("HT", "Invermere Veterinary Hospital", "Invermere", false, None, false),
    row("HV", "Hollyburn Veterinary Clinic", "West Vancouver", false, None, false),
    row("HW", "Babine Pet Hospital", "Smithers", false, None, false),
    row("HX", "The Cat Hospital", "West Vancouver", true, None, false),
    row("HY", "Harbourside Vet Housecall Service", "North Van", false, None, false),
    row("JA", "Sardis Animal Hospital", "Sardis", false, None, false),
    row("JB", "Jade Bay Veterinary Services Oyama", "BC", true, None, false),
    row("JC", "Shuswap Veterinary Clinic", "Salmon Arm", false, None, false),
    row("JD", "Prince George Vet Hospital", "Prince George", false, None, false),
    row("JE", "Sechelt Animal Hospital", "Sechelt", false, None, false),
    row("JF", "Sitara Animal Hospital", "Kelowna", false, None, false),
    row("JG", "Animal Medical Clinic-Okanagan", "Penticton", true, Some("Closed June 2020, For records, contact Dr. George Proudfoot at South Okanagan Animal Care Centre"), false),
    row("JH", "Cypress St. Animal Hospital", "Vancouver", false, None, false),
    row("JJ", "Pawsitive Veterinary Care", "Kelowna", false, None, false),
    row("JK", "Avon Animal Hospital", "Surrey", false, None, false),
    row("JL", "Urban Animal Hospital", "Vancouver", false, None, false),
    row("JM", "Richmond Animal Hospital", "Richmond", false, None, false),
    row("JN", "Panorama Veterinary Services", "Winfield", false, None, false),
    row("JP", "West Boulevard Vet Clinic", "Vancouver", false, None, false),
    row("JR", "Kettle River Veterinary Service", "Grand Forks", true, None, false),
    row("JS", "South Surrey Veterinary Hospital", "Surrey", false, None, false),
    row("JT", "South Peace Animal Hosp.", "Dawson Creek", true, Some("Closed 12/21/18, for records email southpeaceanimalhospital@hotmail.com"), false),
    row("KA", "Kamloops Vet Clinic", "Kamloops", false, None, false),
    row("KB", "Kent Veterinary Clinic", "Agassiz", false, None, false),
    row("KC", "Kelowna Vet Hospital", "Kelowna", false, None, false),
    row("KD", "Kerrisdale Veterinary Hospital", "Vancouver", false, None, false),
    row("KE", "Parkside Veterinary Hospital", "Kitimat", true, None, false),
    row("KF", "Oliver Veterinary Hospital", "Oliver", false, None, false),
    row("KG", "Chinook Veterinary Services", "Williams Lake", false, None, false),
    row("KH", "Kennedy Heights Animal & Bird Hosp.", "Surrey", false, None, false),
    row("KJ", "Okanagan Veterinary Hospital", "Kelowna", false, None, false),
    row("KK", "Kootenay Animal Clinic", "Creston", true, None, false),
    row("KL", "Creekside Animal Clinic", "Vernon", false, None, false),
    row("KM", "Abbotsford Veterinary Hospital", "Abbotsford", true, None, false),
    row("KN", "Rutland Pet Hospital", "Kelowna", false, None, false),
    row("KP", "Pacific Coast Vet Hospital", "Prince Rupert", false, None, false),
    row("KR", "Knight Road Veterinary Clinic", "Vancouver", true, None, false),
    row("KS", "Williams Lake Veterinary Hosp.", "Williams Lake", false, None, false),
    row("KT", "Coquihalla Veterinary Clinic", "Hope", false, Some("Former name: Coquihalla Veterinary Services and Bate Veterinary Clinic"), false),
    row("KV", "Kingsway Veterinary Clinic", "Vancouver", false, None, false),
    row("KW", "Quesnel Veterinary Clinic", "Quesnel", false, None, false),
    row("KX", "Thompson Rivers University", "Kamloops", false, None, false),
    row("KY", "Kootenay Veterinary Clinic", "Cranbrook .", true, Some("Closed Feb 2021. records, contact Dr. Gerry MacIntyre at kootenayvetrecords@gmail.com"), false),
    row("LA", "Langley Animal Clinic/Spay & Neuter Clinic", "Langley", false, None, false),
    row("LB", "Albatross Vet Services", "Langley", false, None, false),
    row("LC", "Scottsdale Veterinary Hospital", "Surrey", false, None, false),
    row("LD", "Coldstream Veterinary Clinic", "Vernon", true, None, false),
    row("LE", "Clearbrook Animal Hospital", "Clearbrook", false, None, false),
    row("LF", "Sunridge Veterinary Clinic", "Vernon", false, None, false),
    row("LG", "All About Pet Clinic", "Langley", false, None, false),
    row("LJ", "Steeples Veterinary Clinic", "Cranbrook", false, None, false),
    row("LK", "Lakeshore Animal Clinic", "Kelowna", false, None, false),
    row("LM", "Mission Creek Animal Hospital", "Kelowna", false, None, false),
    row("LN", "Ladner Animal Hospital", "Delta", true, None, false),
    row("LP", "Lonsdale Pet Hospital", "North Vancouver", false, None, false),
    row("LS", "Lindsey Veterinary Hospital", "Penticton", false, None, false),
    row("LT", "Seafair Animal Clinic", "Richmond", false, None, false),
    row("LV", "Lynn Valley Vet Clinic", "North Vancouver", false, None, false),
    row("LW", "Columbia Veterinary Services", "Golden", false, None, false),
    row("LX", "Pitt Meadows Animal Clinic", "Pitt Meadows", false, None, false),
    row("LY", "Surdel Animal Hospital", "Delta", true, None, false),
    row("MA", "Maple Ridge Veterinary Hospital", "Maple Ridge", false, None, false),
    row("MB", "CRC Veterinary Hospital", "Dawson Creek", true, None, false),
    row("MC", "Marshall Veterinary Hospital", "Quesnel", false, Some("Relinquished tattoo code July 29/09"), false),
    row("MD", "Care Pet Wellness Group Marine Drive", "BC", true, None, false),
    row("ME", "Logan Lake Vet Clinic", "Merritt", false, Some("Same code as Merritt Veterinary Hospital"), false),
    row("ME", "Merritt Veterinary Hospital", "Merritt", false, None, false),
    row("MF", "Mission Veterinary Hospital", "BC", false, None, false),
    row("MG", "Alta Vista Animal Hospital", "Vancouver", false, None, false),
    row("MH", "Crescent Beach Vet Clinic", "Surrey", false, None, false),
    row("MJ", "Metrotown Animal Hospital", "Burnaby", false, None, false),
    row("MK", "Killarney Animal Hospital", "Vancouver", false, None, false),
    row("ML", "Walnut Grove Animal Hospital", "Langley", false, None, false),
    row("MM", "Amherst Veterinary Hospital", "Vancouver", false, None, false),
    row("MR", "Cedar Grove Animal Hospital", "Mission", false, None, false),
    row("MS", "Westview Veterinary Services", "North Van", false, None, false),
    row("MT", "West King Edward Animal Clinic", "Vancouver", false, None, false),
    row("MV", "Wells Gray Vet Clinic", "Clearwater", true, None, false),
    row("MW", "Gladwin Veterinary Clinic", "Abbotsford", false, None, false),
    row("MX", "Caulfeild Veterinary Hospital", "North Van", false, None, false),
    row("MY", "Clayton Animal Hospital", "Langley", true, None, false),
    row("NA", "Mundy Animal Hospital", "Coquitlam", false, None, false),
    row("NB", "Central Valley Veterinary Hospital", "Kelowna", false, Some("Former name: Vetcetera Pet Hospital"), false),
    row("NC", "Kensington Animal Hospital", "Burnaby", false, None, false),
    row("ND", "DeBruin Veterinary Clinic", "Quesnel", true, None, false),
    row("NE", "University Veterinary Clinic", "Vancouver", false, None, false),
    row("NG", "Central Ridge Vet Clinic", "Maple Ridge", true, None, false),
    row("NH", "The Burns Lake Veterinary Clinic", "Burns Lake", false, None, false),
    row("NJ", "Gold Creek Vet Clinic", "Cranbrook", true, None, false),
    row("NK", "Fraser Highway Animal Clinic", "Surrey", true, None, false),
    row("NL", "Jean Lauder", "Qulchena", false, None, false),
    row("NM", "Westwood Heights Pet Hospital", "Coquitlam", false, None, false),
    row("NN", "Animal Care Hospital of Williams Lake", "BC", false, None, false),
    row("NP", "North Fraser Veterinary Hospital", "Mission", true, None, false),
    row("NR", "Fleetwood Vet Services", "Surrey", false, None, false),
    row("NT", "Trenant Park Pet Clinic", "Ladner", false, None, false),
    row("NV", "Capitol Hill Animal Hospital", "Burnaby", false, Some("Former name: The Coast Cat Clinic"), false),
    row("NW", "Westbank Animal Care Hospital", "Kelowna", false, None, false),
    row("NX", "Newlands Veterinary Clinic", "Langley", true, None, false),
    row("NY", "Nakusp & Valhalla Vet Clinics", "Nakusp", true, None, false),
    row("PA", "Housecall Vet Services of Greater Van.", "Burnaby", true, None, false),
    row("PB", "Elk Valley Animal Clinic", "Fernie", false, None, false),
    row("PD", "Fraser Valley Animal Hospital", "Abbotsford", false, None, false),
    row("PE", "Bird & Exotic Animal Hospital", "Surrey", true, None, false),
    row("PF", "Animal Housecall Practice", "North Van", true, None, false),
    row("PG", "Exclusively Cats Hsecal Practice", "Vancouver", true, None, false),
    row("PH", "Clayburn Pet Hospital", "Abbotsford", false, None, false),
    row("PJ", "Mosquito Creek Vet Hosp", "North Vancouver", false, None, false),
    row("PK", "Como Lake Veterinary Hospital", "Coquitlam", false, None, false),
    row("PL", "Park Gate Animal & Bird Hospital", "North Van", false, None, false),
    row("PM", "Murdoch Vet Services", "Prince George", false, None, false),
    row("PN", "Selkirk Veterinary Hospital", "Nelson", false, None, false),
    row("PP", "Elwood Park Animal Hospital", "Abbotsford", false, None, false),
    row("PS", "Andersen Veterinary Services", "Aldergrove", false, None, false),
    row("PT", "Lansdowne Animal Hospital", "Richmond", false, None, false),
    row("PV", "Companion Animal Clinic", "Richmond", false, None, false),
    row("PW", "White Valley Veterinary Services", "Lumby", false, Some("Former name: Flater Veterinary Services"), false),
    row("PX", "Heartland Veterinary Services", "Kelowna", false, None, false),
    row("PY", "Grand Forks Central Vet Services", "renamed Boundary Country Veterinarian Services Ltd. Closed Oct 2020. For medical records, please email boundarycountryvetservices@gmail.com", true, None, false),
    row("XA", "North Kootenay Veterinary Services", "Kaslo", false, None, false),
    row("XC", "Pet Care Small Animal Vet Serv", "Creston", true, None, false),
    row("XD", "North Shore Veterinary Clinic", "North Van", false, None, false),
    row("XF", "Agwest Group", "Abbotsford", true, None, false),
    row("XG", "Aggasiz Animal Hospital", "Aggasiz", false, None, false),
    row("XH", "Sunwood Vet Hospital", "Coquitlam", false, None, false),
    row("XJ", "The Animal Clinic of Vancouver", "Vancouver", true, None, false),
    row("XK", "Carepoint Vet Hospital", "Chilliwack", true, None, false),
    row("XL", "Small Creatures Pet Clinic", "Langley", false, None, false),
    row("XM", "Vedder Mountain Vet Clinic", "Chilliwack", false, None, false),
    row("XN", "Skeena Animal Hospital", "Terrace", false, None, false),
    row("XP", "Little Mountain Vet Clinic", "Chilliwack", false, None, false),
    row("XR", "Cats at Home Feline Hsecall Practice", "Surrey", false, None, false),
    row("XS", "North Road Animal Hospital", "Coquitlam", false, None, false),
    row("XT", "Country Meadows Pet Hosp", "Maple Ridge", false, None, false),
    row("XV", "Atlas Animal Hospital", "Vancouver", false, None, false),
    row("XW", "All About Cats Veterinary Clinic", "North Van", false, None, false),
    row("XX", "Angel Animal Hospital", "Surrey", false, None, false),
    row("XY", "Apex Animal Hospital", "Langley", false, None, false),
    row("XZ", "Atlas Animal Hospital", "Sechelt", true, None, false),
    row("YA", "Pals With Paws Vet Hospital", "Salmon Arm", false, None, false),
    row("YB", "Carrington Animal Hospital", "Westbank", false, None, false),
    row("YC", "Animal Emerg Clinic of Fraser Vlly", "Langley", false, None, false),
    row("YD", "South Peace Animal Hospital", "Dawson Creek", true, Some("Closed 12/21/18, for records email southpeaceanimalhospital@hotmail.com"), false),
    row("YE", "Catcare Veterinary Clinic", "Richmond", false, None, false),
    row("YF", "The Animal Clinic on Cornwall", "BC", true, None, false),
    row("YG", "Pemberton Veterinary Hospital", "Pemberton", true, None, false),
    row("YH", "Shaughnessy Vet Hospital", "Port Coquitlam", false, None, false),
    row("YJ", "Columbia Summit Vet Hospital", "Kamloops", false, None, false),
    row("YK", "Murrayville Veterinary Clinic", "Langley", true, None, false),
    row("YL", "Eastridge Animal Hospital", "Maple Ridge", false, None, false),
    row("YM", "Princeton Animal Clinic", "Princeton", true, None, false),
    row("YN", "Kermodei Veterinary Hospital", "Terrace", false, None, false),
    row("YP", "Allwest Animal Hospital", "Abbotsford", false, None, false),
    row("YR", "Alpine Animal Hospital", "New Westminster", false, None, false),
    row("YS", "Bowen Vet Services", "Bowen Island", false, Some("Reopened - was temporarily closed 06/30/18"), false),
    row("YT", "Port Moody Animal Hospital", "Port Moody", false, None, false),
    row("YV", "Wilson Veterinary Housecall", "North Vancouver", true, None, false),
    row("YW", "Healing Place Veterinary Clinic", "North Van", true, None, false),
    row("YX", "The Animal Clinic on Burrard", "Vancouver", true, None, false),
    row("YY", "Stevens Veterinary Services", "Horsefly Lake", true, None, false),
    row("YZ", "Powell River Veterinary Hospital", "Powell River", false, None, false),
    row("AAA", "Vetcetera Pet Hospital-Park Royal", "BC", true, Some("New name/code = West Vancouver Veterinary Hospital - ACT"), false),
    row("AAB", "Crescent Falls Veterinary Hospital", "Vernon", false, None, false),
    row("AAC", "Hastings Veterinary Hospital", "Burnaby", false, None, false),
    row("AAD", "Tender Care Vet Hospital", "Surrey", true, None, false),
    row("AAE", "Westgate Animal Hospital", "Maple Ridge", false, None, false),
    row("AAF", "Vancouver Feline Hospital", "Vancouver", false, None, false),
    row("AAG", "Second Chance Animal Shelter", "Nelson", false, None, false),
    row("AAH", "Yaletown Pet Hospital", "Vancouver", false, None, false),
    row("AAJ", "Delbrook Mall Animal Hospital", "North Van", false, None, false),
    row("AAK", "K.L.O. Veterinary Hospital", "Kelowna", false, None, false),
    row("AAM", "Oak Bay Pet Clinic", "Victoria", false, None, false),
    row("AAN", "Haney Animal Hospital", "Maple Ridge", false, None, false),
    row("AAP", "Cloverdale Animal Hospital", "Cloverdale", false, None, false),
    row("AAR", "Lifeline Animal Clinic", "Victoria", false, None, false),
    row("AAS", "Paws & Claws Animal Hospital", "Langley", false, None, false),
    row("AAT", "Madeira Park Veterinary Clinic", "Mad. Park", false, None, false),
    row("AAV", "Sunshine Coast Pet Hosp & Mobile Service", "Gibson’s Landing", false, None, false),
    row("AAW", "Rivers Animal Hospital", "Fort St. John", false, None, false),
    row("AAX", "Lougheed Animal Hospital", "Mission", false, None, false),
    row("AAY", "Menzies Pet Hospital", "Chilliwack", false, None, false),
    row("ABA", "Atlantic Animal Hospital", "Surrey", false, None, false),
    row("ABB", "South Point Pet Hospital", "Surrey", false, None, false),
    row("ABC", "Whatcom Road Veterinary Hosp", "Abbotsford", true, None, false),
    row("ABD", "Panorama Village Animal Hospital", "Surrey", false, None, false),
    row("ABE", "Lincoln Animal Hospital", "Coquitlam", false, None, false),
    row("ABF", "Central Cowichan Animal Hosp", "Cowichan", false, None, false),
    row("ABG", "BCSPCA Prince George Spay/Neuter Clinic", "BC", false, None, false),
    row("ABH", "Cottonwood Veterinary Clinic", "Chilliwack", false, None, false),
    row("ABI", "Family Pet Hospital", "Chilliwack", false, None, false),
    row("ABJ", "Alpine Pet Hospital", "Kelowna", false, None, false),
    row("ABK", "VetCare Mobile Animal Clinic & Surgery", "Salmon Arm", true, None, false),
    row("ABL", "Rose Valley Veterinary Hospital", "Kelowna", false, None, false),
    row("ABM", "North Delta Hospital", "Delta", false, Some("Former name: Delta Animal Hospital"), false),
    row("ABN", "Pacific Rim Veterinary Hosp", "Port Alberni", false, None, false),
    row("ABO", "Willowbrook Animal Hospital", "Langley", false, None, false),
    row("ABP", "Canada West Veterinary Specialists", "Van", false, None, false),
    row("ABR", "Sunoka Veterinary Clinic", "Summerland", false, None, false),
    row("ABS", "Central Ridge Vet Clinic", "Okanagan Falls", true, None, false),
    row("ABT", "Sunshine Plaza Animal Hospital", "Vancouver", false, None, false),
    row("ABV", "South Fraser Animal Hospital", "Abbotsford", false, None, false),
    row("ABW", "Coombs Veterinary Hospital", "Coombs", false, Some("See Norgate Animal Hospital"), false),
    row("ABX", "Alpenlofts Veterinary Hospital", "Garibaldi Highlands", false, None, false),
    row("ABY", "City Petcare Hospital", "Surrey", false, None, false),
    row("ABZ", "Peninsula Crossing Animal Hospital", "Surrey", false, None, false),
    row("ACA", "The Landing Veterinary Clinic", "Gibsons", false, None, false),
    row("ACB", "High Point Animal Hospital", "Surrey", false, None, false),
    row("ACC", "Salmon Arm Mobile Veterinary Clinic", "BC", true, None, false),
    row("ACD", "Tricity Animal Hospital", "Port Coquitlam", false, None, false),
    row("ACE", "Norgate Animal Hospital", "North Van", false, None, false),
    row("ACF", "Apollo Animal Hospital", "Surrey", false, None, false),
    row("ACG", "Grand Street Cat Clinic", "Mission", true, Some("Records with: South Fraser Animal Hospital - ABV"), false),
    row("ACH", "Thunderbird Animal Hospital", "Langley", false, None, false),
    row("ACI", "Douglas College", "New West", false, Some("AHT Program"), false),
    row("ACJ", "BC SPCA Kamloops Spay Neuter Clinic", "Kamloops", false, None, false),
    row("ACK", "Dr. Jim Proctor", "BC", true, None, false),
    row("ACL", "186 St. Animal Hospital", "BC", false, None, false),
    row("ACM", "Eagle Rise Animal Hospital", "BC", false, None, false),
    row("ACN", "Mainland Animal Emergency Clinic", "BC", false, None, false),
    row("ACP", "West Coast Veterinary Dental Services Inc.", "BC", false, None, false),
    row("ACR", "Healing Paws Veterinary Care", "BC", false, None, false),
    row("ACS", "Lions Gate Animal Hospital", "BC", true, None, false),
    row("ACT", "West Vancouver Veterinary Hospital", "BC", false, None, false),
    row("ACU", "Oxford Animal Hospital", "BC", false, None, false),
    row("ACV", "Central Richmond Pet Hospital", "BC", true, None, false),
    row("ACW", "Little Paws Animal Clinic", "BC", false, None, false),
    row("ACX", "Pemberton Veterinary Hospital", "BC", false, None, false),
    row("ACY", "Hope Veterinary Services", "BC", false, None, false),
    row("ACZ", "Meadowvale Animal Hospital", "BC", false, None, false),
    row("ADA", "Otter Point Veterinary Hospital", "BC", false, None, false),
    row("ADB", "Revelstoke Veterinary Clinic", "BC", false, None, false),
    row("ADC", "Edmonds St. Animal Hospital", "BC", false, None, false),
    row("ADD", "Chase River Animal Hospital", "BC", false, None, false),
    row("ADE", "Fraser Village Pet Hospital", "BC", true, None, false),
    row("ADF", "Townline Veterinary Hospital", "BC", false, None, false),
    row("ADG", "Tranquille Road Animal Hospital", "BC", false, None, false),
    row("AEA", "Main Street Animal Hospital", "BC", false, None, false),
    row("AEB", "Pacific Animal Hospital (Closed as of June 11", "2019. For medical records, contact 604-585-1177", true, None, false),
    row("AEC", "Capital Cat Clinic", "BC", false, None, false),
    row("AEE", "Head to Tail Veterinary Hospital", "BC", false, None, false),
    row("AEF", "Deep Creek Veterinary Services", "BC", false, None, false),
    row("AEH", "Columbia Square Animal Hospital", "BC", false, None, false),
    row("AEJ", "Downtown Veterinary Clinic", "BC", false, None, false),
    row("AEK", "Murrayville Animal Hospital", "BC", false, None, false),
    row("AEL", "Gibsons Animal Hospital", "BC", false, None, false),
    row("AEM", "Hemlock Animal Hospital", "BC", false, None, false),
    row("AEN", "Burnside Pet Clinic", "BC", false, None, false),
    row("AEP", "Alpha Animal Hospital", "BC", false, None, false),
    row("AEQ", "Central Island Veterinary Emergency Hospital Ltd.", "BC", false, None, false),
    row("AER", "College Heights Veterinary Clinic", "BC", false, None, false),
    row("AES", "Peace Arch Veterinary Hospital White Rock", "BC", false, None, false),
    row("AET", "Burtch Pet Clinic", "BC", false, None, false),
    row("AEU", "Mountain View Veterinary Hospital Ltd. 1st AEW Ave Animal Hospital", "BC", false, None, false),
    row("AEV", "Twin Rivers Animal Hospital", "BC", false, Some("If AEV, contact both Twin Rivers & The Country AH"), false),
    row("AEX", "Healing Choices Veterinary Clinic Ltd.", "BC", true, None, false),
    row("AEY", "Kitimat Animal Hospital", "BC", false, None, false),
    row("AEZ", "Asher Road Animal Hospital", "BC", false, None, false),
    row("AFA", "Dawson Street Veterinary Clinic", "Burnaby", false, None, false),
    row("AFB", "Willoughby Animal Hospital Inc.", "BC", false, None, false),
    row("AFC", "Queen’s Park Pet Hospital Ltd.", "BC", false, None, false),
    row("AFE", "Burkeview Animal Hospital Ltd", "BC", false, None, false),
    row("AFF", "Terrace Animal Hospital", "BC", false, None, false),
    row("AFG", "Eagleview Veterinary Hospital", "BC", false, None, false),
    row("AFH", "Hart Family Veterinary Clinic Ltd.", "BC", false, None, false),
    row("AFJ", "BC Animal Hospital", "BC", false, None, false),
    row("AFK", "Animal Health Clinic of Whistler", "BC", false, None, false),
    row("AFL", "Central Park Animal Hospital", "BC", false, None, false),
    row("AFM", "Pandosy Village Veterinary Hospital Ltd.", "BC", false, None, false),
    row("AFN", "Grace Veterinary Hospital Ltd.", "BC", false, None, false),
    row("AFP", "Aberdeen Veterinary Hospital", "BC", false, None, false),
    row("AFR", "Greystone Animal Hospital", "BC", false, None, false),
    row("AFS", "Yorkson Creek Veterinary Hospital Ltd.", "BC", false, None, false),
    row("AFT", "Gentle Pet Clinic", "Fort St John", false, None, false),
    row("AFV", "Harbourview Animal Hospital .", "BC", true, Some("Closed as of December 2 2019. Records held at Delbrook Mall Animal Hospital"), false),
    row("AFW", "Small Blessing Veterinary Services Ltd.", "BC", false, None, false),
    row("AFX", "The Cat Hospital of Kamloops", "BC", false, None, false),
    row("AFY", "Coastal Rivers Pet Hospital", "BC", false, None, false),
    row("AFZ", "Newport Village Animal Hospital", "BC", false, None, false),
    row("AGA", "Gladys Pet Hospital", "Abbotsford", false, None, false),
    row("AGB", "All Creatures Animal Hospital", "BC", false, None, false),
    row("AGC", "Meadowbrook Cat Clinic", "BC", false, None, false),
    row("AGE", "Harbour City Animal Hospital", "BC", false, None, false),
    row("AGF", "Vic West Pet Hospital", "BC", false, None, false),
    row("AGG", "Maillardville Animal Hospital", "BC", false, None, false),
    row("AGH", "Millstream Veterinary Hospital", "BC", false, None, false),
    row("AGJ", "Eagle Hill Animal Hospital", "BC", false, None, false),
    row("AGK", "Tanglefoot Veterinary Services Ltd. Fernie", "BC", false, None, false),
    row("AGL", "Gibsons Veterinary Hospital", "BC", false, None, false),
    row("AGM", "RAPS Animal Hospital", "BC", false, None, false),
    row("AGN", "Vet to Pet Mobile Services Ltd.", "BC", false, None, false),
    row("AGP", "Oaklands Veterinary Hospital", "BC", false, None, false),
    row("AGR", "Shawnigan Lake Vet. Wellness Practice", "BC", false, None, false),
    row("AGS", "Mountainside Animal Hospital & 24 Hour Emergency Services", "BC", false, None, false),
    row("AGT", "VCA Canada Feltham Animal Hospital", "BC", false, None, false),
    row("AGV", "Chilliwack Animal Hospital", "BC", false, None, false),
    row("AGW", "Grandview Animal Hospital", "BC", false, None, false),
    row("AGX", "VCA Canada Ross Bay Animal Hospital", "BC", false, None, false),
    row("AGY", "Dr. Tom Sholseth Mobile Veterinary Service", "BC", false, None, false),
    row("AGZ", "Mahalo Veterinary Hospital", "BC", false, None, false),
    row("AHA", "Tynehead Animal Hospital", "BC", false, None, false),
    row("AHB", "South Mission Animal Hospital", "BC", false, None, false),
    row("AHC", "Uptown Animal Hospital", "BC", false, None, false),
    row("AHE", "Neighbourhood Veterinary Hospital", "BC", false, None, false),
    row("AHF", "Spall & Harvey Animal Hospital", "Kelowna", false, None, false),
    row("AHG", "Fairview Animal Hospital", "Aldergrove", false, None, false),
    row("AHH", "PoCo West Animal Hospital Birchwood Veterinary Clinic", "Prince George AHK", false, None, false),
    row("AHJ", "Heritage Animal Hospital", "Parksville", false, None, false),
    row("AHL", "Stave Lake Veterinary Hospital", "Mission", false, None, false),
    row("AHM", "Skyline Veterinary Hospital", "BC", false, None, false),
    row("AHN", "Beach Avenue Animal Hospital", "BC", false, None, false),
    row("AHP", "108 Avenue Animal Hospital", "BC", false, None, false),
    row("AHR", "Duncan Cat Clinic", "BC", false, None, false),
    row("AHS", "RainTree Veterinary Hospital", "BC", false, None, false),
    row("AHT", "Island Tides Veterinary Hospital", "BC", false, None, false),
    row("AHV", "Fantastic Beasts Veterinary Services", "BC", false, None, false),
    row("AHW", "McCallum Centre Animal Hospital", "BC", false, None, false),
    row("AHX", "Silver Star Animal Care Clinic", "BC", false, None, false),
    row("AHY", "Langley Meadows Animal Hospital", "BC", false, None, false),
    row("AHZ", "Campbell Heights Animal Hospital", "BC", false, None, false),
    row("AJA", "Sahali Animal Hospital", "BC", false, None, false),
    row("AJB", "Mission Pawsible", "BC", false, Some("Island Veterinary Hospital, Nanaimo 2008 Elk Lake Veterinary Clinic, Victoria 2008"), false),
    row("AJC", "Arrowsmith Animal Hospital", "BC", true, None, false),
    row("AJE", "Alma Animal Hospital", "Vancouver", false, Some("VOKRA partner vet"), false),
    row("A", "Bellevue Veterinary Hospital", "Parksville", false, None, true),
    row("B", "Benson View Vet Hospital", "Nanaimo", false, None, true),
    row("C", "Departure Bay Vet Hospital", "Nanaimo", false, None, true),
    row("D", "Island Veterinary Hospital-Central", "Nanaimo", false, None, true),
    row("E", "Ladysmith Animal Hospital", "Ladysmith", false, None, true),
    row("G", "Nanaimo Veterinary Hospital", "Nanaimo", false, None, true),
    row("H", "Parksville Animal Hospital", "Parksville", false, None, true),
    row("J", "Veterinary Housecall Service", "Parksville", true, None, true),
    row("K", "Prevost Veterinary Clinic", "Duncan", false, None, true),
    row("L", "Gulf Islands Vet Clinic", "Salt Spring Island", false, None, true),
    row("M", "Manzini Animal Hospital", "Port Alberni", false, None, true),
    row("N", "Comox Valley Animal Hospital", "Courtenay", false, None, true),
    row("O", "Alberni Veterinary Clinic", "Port Alberni", false, None, true),
    row("P", "Campbell River Vet Hosp", "Campbell River", false, None, true),
    row("R", "Brentwood Bay Vet Clinic", "BC", false, None, true),
    row("RA", "Dr. R.F. Abernathy", "Duncan", true, None, true),
    row("RB", "Belmont-Langford Vet Hosp", "Victoria", false, None, true),
    row("RC", "Central Victoria Vet Hosp", "Victoria", false, None, true),
    row("RD", "Dogwood Vet Hospital", "Campbell River", false, None, true),
    row("RE", "Elk Lake Veterinary Clinic", "Victoria", false, None, true),
    row("RJ", "Juan de Fuca Veterinary Clinic", "Victoria", false, None, true),
    row("RL", "Lakehill Pet Clinic", "Victoria", true, Some("Closed 12/07/18, records with: VCA Canada Feltham Animal Hospital - AGT"), true),
    row("RM", "Pacific Mobile Veterinary Clinic", "Victoria", false, None, true),
    row("RN", "North Douglas Vet Clinic", "Victoria", true, None, true),
    row("RR", "Napier Lane Animal Clinic", "Victoria", true, None, true),
    row("RS", "Gorge-Esquimalt Vet Clinic", "Victoria", true, None, true),
    row("RV", "Victoria Veterinary Clinic", "Victoria", false, None, true),
    row("RW", "Qualicum Animal Hosp", "Qualicum Bch", false, None, true),
    row("RY", "Puntledge Veterinary Clinic", "Courtenay", false, None, true),
    row("S", "Courtenay Veterinary Clinic", "Courtenay", false, None, true),
    row("SB", "Quadra Animal Hospital", "Victoria", true, None, true),
    row("SC", "Central Saanich Animal Hospital", "Saanich", false, None, true),
    row("SD", "Sidney Veterinary Services", "Sidney", true, None, true),
    row("SE", "Twin Cedars Vet Services", "Garbiola Isld", false, None, true),
    row("SF", "Hillside Veterinary Hospital", "Victoria", false, None, true),
    row("SG", "Heritage Cat Clinic", "Victoria", true, Some("Closed 03/31/19, records with: VCA Canada Ross Bay Animal Hospital – AGX"), true),
    row("SH", "Shelbourne Pet Clinic", "Victoria", true, Some("Closed 12/07/18, records with: VCA Canada Feltham Animal Hospital - AGT"), true),
    row("SK", "Sooke Veterinary Hospital", "Sooke", false, None, true),
    row("SL", "Colwood Veterinary Hospital", "Victoria", true, None, true),
    row("SM", "Glenview Animal Hospital Ltd.", "Victoria", false, None, true),
    row("SP", "North Island Vet Hospital", "Port Hardy", false, None, true),
    row("SR", "Garry Oak Veterinary Hospital", "Sidney", false, None, true),
    row("SS", "Sidney Animal Hospital", "Sidney", false, None, true),
    row("ST", "Hollywood Pet Hospital", "Saanichton", true, Some("Closing 04/30/19, records with: VCA Canada Ross Bay Animal Hospital – AGX"), true),
    row("SV", "Breadner Vet Services", "Saanichton", false, None, true),
    row("SW", "Feltham Gordon-Head Pet Clinic", "Victoria", true, Some("Closed 11/30/18, records with: VCA Canada Feltham Animal Hospital - AGT"), true),
    row("SX", "Cowichan Veterinary Services", "BC", true, None, true),
    row("SY", "Fairfield Pet Clinic", "Victoria", true, Some("Closed 03/21/19, records with: VCA Canada Ross Bay Animal Hospital – AGX"), true),
    row("TA", "Duncan Animal Hospital", "Duncan", false, None, true),
    row("TB", "McKenzie Veterinary Services", "Victoria", false, None, true),
    row("TC", "Pacific Cat Clinic", "Victoria", false, None, true),
    row("TD", "Dean Park Pet Hospital", "Sidney", false, None, true),
    row("TE", "Royal Oak Pet Clinic", "Victoria", false, None, true),
    row("TF", "Bute Street Veterinary Clinic", "Port Alberni", false, None, true),
    row("TG", "Gold River-Tahsis Veterinary Clinic", "BC", true, None, true),
    row("TH", "Glanford Animal Hospital", "Victoria", true, Some("Closed 07/31/18, records with: Thetis Heights Veterinary Clinic"), true),
    row("TJ", "Cobble Hill Animal Hospital Ltd. Mill Bay", "BC", false, None, true),
    row("TK", "Greenwood Animal Hosp", "Campbell River", false, None, true),
    row("TL", "Saltspring Vet Services", "Salt Spring Isle", false, None, true),
    row("TM", "Colwood Cat Clinic", "Victoria", true, None, true),
    row("TN", "Saseenos Vet Services Ltd.", "Sooke", false, None, true),
    row("TP", "Beacon Cat Hospital", "Saanichton", false, None, true),
    row("TR", "Anicare Veterinary Hospital Saanichton", "BC", false, None, true),
    row("TS", "Applecross Veterinary Hospital", "Nanaimo", false, None, true),
    row("TT", "Woodgrove Animal Hospital", "Nanaimo", false, None, true),
    row("TV", "Cumberland Veterinary Clinic", "BC", false, None, true),
    row("TW", "Beachview Veterinary Hosp", "Qualicum", true, None, true),
    row("TX", "Broadmead Village Veterinary Clinic", "BC", false, None, true),
    row("TY", "Petroglyph Animal Hospital", "Nanaimo", false, None, true),
    row("VA", "Tsolum Mobile Vet Health", "Courtenay", false, None, true),
    row("VB", "The Clinic for Cats", "Nanaimo", false, None, true),
    row("VC", "North Island Animal Hospital / Port McNeil Veterinary", "Port McNeil", false, None, true),
    row("VE", "Comox Cat Clinic", "Comox", true, None, true),
    row("VF", "Lakeside Pet Hospital", "Lake Cowichan", true, None, true),
    row("VG", "Shamrock Veterinary Clinic", "Comox", false, None, true),
    row("VH", "City Pet Animal Clinic", "Victoria", false, None, true),
    row("VJ", "Sunrise Vet Clinic Inc.", "BC", false, None, true),
    row("VK", "Chemainus Animal Hospital", "Chemainus", false, None, true),
    row("VL", "Eden Cat Vet Clinic", "Campbell River", true, None, true),
    row("VM", "Admirals Walk Pet Clinic", "Victoria", false, None, true),
    row("VN", "Coastland Vet Hosp", "Campbell River", false, None, true),
    row("VP", "Vetcetera Pet Hospital-Tillimum", "Victoria", false, None, true),
    row("VR", "Van Isle Veterinary Hospital", "Courtenay", false, None, true),
    row("VT", "Kindred Spirits Vet Hospital", "Victoria", true, None, true),
    row("VZ", "Oceanside Animal Hospital", "BC", false, None, true),
    row("W", "Mill Bay Veterinary Hospital", "Mill Bay", false, None, true),
    row("WA", "Merecroft Vet Clinic", "Campbell River", false, None, true),
    row("WB", "Lighthouse Veterinary Hosp", "Qualicum", false, None, true),
    row("WC", "Mid-Isle Veterinary Hospital", "Qualicum", false, None, true),
    row("X", "Christmas Hill Animal Clinic", "Victoria", true, None, true),
];
