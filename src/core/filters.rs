use crate::core::normalizer::parse_money_range;
use crate::models::{SearchParams, Vendor, VendorCategory};

/// Regions treated as "nearby" for a handful of well-known query cities.
///
/// A candidate located in one of these regions passes the location filter
/// for the keyed city even without a direct substring match.
static NEARBY_REGIONS: &[(&str, &[&str])] = &[
    (
        "london",
        &[
            "central london",
            "west london",
            "east london",
            "south london",
            "north london",
            "greater london",
            "mayfair",
            "strand",
            "park lane",
            "surrey",
        ],
    ),
    (
        "manchester",
        &[
            "greater manchester",
            "manchester city centre",
            "salford",
            "stockport",
        ],
    ),
    (
        "birmingham",
        &["birmingham city centre", "west midlands", "solihull"],
    ),
];

/// Feature keywords indicating a venue can host a large (200+) party
static LARGE_CAPACITY_KEYWORDS: &[&str] = &["ballroom", "hall", "estate", "grand", "manor"];

/// Feature keywords indicating a venue works for small (<50) parties
static SMALL_CAPACITY_KEYWORDS: &[&str] = &["intimate", "garden", "terrace"];

/// Check whether a candidate's location matches the searched location
///
/// Stage (a) of the candidate filter: case-insensitive substring containment
/// in either direction, or membership in the nearby-regions table for the
/// searched city.
#[inline]
pub fn location_matches(candidate_location: &str, query_location: &str) -> bool {
    let candidate = candidate_location.to_lowercase();
    let query = query_location.to_lowercase();

    if candidate.contains(&query) || query.contains(&candidate) {
        return true;
    }

    for (city, regions) in NEARBY_REGIONS {
        if query.contains(city) && regions.iter().any(|region| candidate.contains(region)) {
            return true;
        }
    }

    false
}

/// Check whether a candidate's price range overlaps the requested budget
///
/// Stage (b): numeric interval intersection of the two parsed ranges. An
/// open-ended "over £X" / "£X+" bound is treated as infinite. A range that
/// cannot be parsed on either side never excludes the candidate.
#[inline]
pub fn budget_overlaps(price_range: &str, budget_range: Option<&str>) -> bool {
    let requested = match budget_range {
        Some(text) if !text.is_empty() && text != "any-budget" => text,
        _ => return true,
    };

    let requested_range = match parse_money_range(requested) {
        Some(range) => range,
        None => return true,
    };
    let candidate_range = match parse_money_range(price_range) {
        Some(range) => range,
        None => return true,
    };

    candidate_range.intersects(&requested_range)
}

/// Check whether a venue candidate suits the expected guest count
///
/// Stage (c): venue category only. Large parties (>200) need a capacity
/// keyword or a premium price tier; small parties (<50) reject top-tier
/// venues unless an intimate-capacity keyword is present; mid-size parties
/// pass everything. Non-venue categories always pass.
#[inline]
pub fn suits_guest_count(vendor: &Vendor, guest_count: Option<u32>) -> bool {
    if vendor.category != VendorCategory::Venue {
        return true;
    }
    let guests = match guest_count {
        Some(count) => count,
        None => return true,
    };

    if guests > 200 {
        has_any_keyword(vendor, LARGE_CAPACITY_KEYWORDS) || vendor.price_indicator.tier() >= 3
    } else if guests < 50 {
        vendor.price_indicator.tier() < 4 || has_any_keyword(vendor, SMALL_CAPACITY_KEYWORDS)
    } else {
        true
    }
}

fn has_any_keyword(vendor: &Vendor, keywords: &[&str]) -> bool {
    vendor
        .features
        .iter()
        .chain(vendor.specialties.iter())
        .chain(std::iter::once(&vendor.name))
        .any(|text| {
            let text = text.to_lowercase();
            keywords.iter().any(|keyword| text.contains(keyword))
        })
}

/// Apply all three filter stages, preserving input order
///
/// No match is an empty list, not an error.
pub fn filter_candidates(candidates: Vec<Vendor>, params: &SearchParams) -> Vec<Vendor> {
    candidates
        .into_iter()
        .filter(|vendor| location_matches(&vendor.location, &params.location))
        .filter(|vendor| budget_overlaps(&vendor.price_range, params.budget_range.as_deref()))
        .filter(|vendor| suits_guest_count(vendor, params.guest_count))
        .collect()
}
