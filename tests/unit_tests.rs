// Unit tests for VowMatch

use vowmatch::core::{
    budget_overlaps, dedupe_vendors, fallback_score, filter_candidates, location_matches,
    parse_money_range, RecommendationEngine,
};
use vowmatch::core::normalizer::{budget_bucket, format_amount, guest_count_midpoint};
use vowmatch::models::{
    PriceIndicator, Priority, SearchParams, Vendor, VendorCategory, WeddingPreferences,
};

fn make_vendor(
    id: &str,
    name: &str,
    location: &str,
    price_range: &str,
    rating: f64,
    review_count: u32,
) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: name.to_string(),
        category: VendorCategory::Venue,
        description: String::new(),
        location: location.to_string(),
        address: None,
        phone: None,
        website: None,
        rating,
        review_count,
        price_range: price_range.to_string(),
        price_indicator: PriceIndicator::Moderate,
        features: vec![],
        specialties: vec![],
        verified: false,
        response_time: None,
    }
}

fn make_params(location: &str, budget_range: Option<&str>) -> SearchParams {
    SearchParams {
        category: VendorCategory::Venue,
        location: location.to_string(),
        budget_range: budget_range.map(String::from),
        guest_count: None,
        wedding_date: None,
        radius_km: 50,
        preferences: vec![],
    }
}

fn make_preferences(budget: f64, months_out: i64) -> WeddingPreferences {
    WeddingPreferences {
        budget,
        currency: "GBP".to_string(),
        guest_count: "100-150".to_string(),
        wedding_location: "London".to_string(),
        wedding_date: Some(chrono::Utc::now() + chrono::Duration::days(months_out * 30)),
        wedding_style: None,
        cultural_traditions: vec![],
        religious_traditions: vec![],
        planned_events: vec![],
    }
}

#[test]
fn test_disjoint_budget_ranges_exclude_candidates() {
    // For any two disjoint intervals, querying with one must exclude
    // candidates priced in the other
    let disjoint_pairs = [
        ("£500-£1,000", "£2,500 - £5,000"),
        ("£1,000-£2,500", "£5,000 - £10,000"),
        ("Under £1,000", "£2,500 - £5,000"),
        ("£500-£1,000", "Over £10,000"),
    ];

    for (candidate_range, query_range) in disjoint_pairs {
        assert!(
            !budget_overlaps(candidate_range, Some(query_range)),
            "{} should not overlap {}",
            candidate_range,
            query_range
        );

        let candidates = vec![make_vendor("a", "A", "London", candidate_range, 4.5, 10)];
        let kept = filter_candidates(candidates, &make_params("London", Some(query_range)));
        assert!(kept.is_empty());
    }
}

#[test]
fn test_open_ended_price_bound_is_infinite() {
    let open = parse_money_range("Over £10,000").unwrap();
    assert_eq!(open.max, None);

    // Intersects every interval whose max is above the open bound's min
    assert!(budget_overlaps("£15,000 - £50,000", Some("Over £10,000")));
    assert!(budget_overlaps("£10,000+", Some("£5,000 - £10,000")));
}

#[test]
fn test_dedup_keeps_higher_rated_duplicate() {
    let merged = dedupe_vendors(vec![
        make_vendor("a", "Grand Ballroom", "London", "£5,000-£10,000", 4.2, 100),
        make_vendor("b", "Grand Ballroom", "London", "£5,000-£10,000", 4.7, 80),
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].rating, 4.7);
}

#[test]
fn test_dedup_is_idempotent() {
    let input = vec![
        make_vendor("a", "Grand Ballroom", "London", "£5,000-£10,000", 4.2, 100),
        make_vendor("b", "grand ballroom", "LONDON", "£5,000-£10,000", 4.7, 80),
        make_vendor("c", "Ivy House", "Surrey", "£2,500-£5,000", 4.0, 40),
    ];

    let once = dedupe_vendors(input);
    let twice = dedupe_vendors(once.clone());

    assert_eq!(
        once.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
        twice.iter().map(|v| v.id.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn test_fallback_score_monotonicity() {
    // Non-decreasing in rating for fixed review count
    let mut previous = f64::MIN;
    for rating in [1.0, 2.0, 3.0, 4.0, 4.5, 5.0] {
        let score = fallback_score(rating, 100);
        assert!(score >= previous);
        previous = score;
    }

    // Non-decreasing in review count for fixed rating
    previous = f64::MIN;
    for review_count in [0, 1, 10, 100, 1000, 10000] {
        let score = fallback_score(4.5, review_count);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_location_filter_rules() {
    assert!(location_matches("Mayfair, London", "London"));
    assert!(location_matches("Surrey", "London"));
    assert!(location_matches("Stockport", "Manchester"));
    assert!(!location_matches("Edinburgh", "London"));
}

#[test]
fn test_normalizer_buckets() {
    assert_eq!(guest_count_midpoint("100-150"), 125);
    assert_eq!(budget_bucket(20000.0), "Over £10,000");
    assert_eq!(format_amount(12500.0), "12,500");
}

#[test]
fn test_recommendations_tight_budget_and_close_date() {
    // budget = 5000, wedding 3 months out: venue + photography + budget
    // stretch + urgency, never more than 5 total
    let recs = RecommendationEngine::generate(&make_preferences(5000.0, 3), chrono::Utc::now());

    assert!(recs.len() <= 5);
    assert!(recs
        .iter()
        .any(|r| r.category == "venue" && r.priority == Priority::High));
    assert!(recs
        .iter()
        .any(|r| r.category == "photography" && r.priority == Priority::High));
    assert!(recs
        .iter()
        .any(|r| r.title == "Maximize Your Budget with Smart Choices"));
    assert!(recs
        .iter()
        .any(|r| r.title == "Accelerate Your Wedding Planning"));
}

#[test]
fn test_recommendations_no_traditions_tip_without_traditions() {
    let recs = RecommendationEngine::generate(&make_preferences(30000.0, 10), chrono::Utc::now());
    assert!(!recs
        .iter()
        .any(|r| r.title == "Honor Your Cultural and Religious Traditions"));
}

#[test]
fn test_recommendations_end_to_end_scenario() {
    // budget 20000, "100-150" guests, London, South Asian traditions
    let mut preferences = make_preferences(20000.0, 10);
    preferences.cultural_traditions = vec!["South Asian".to_string()];

    let recs = RecommendationEngine::generate(&preferences, chrono::Utc::now());

    let venue = recs
        .iter()
        .find(|r| r.category == "venue")
        .expect("venue recommendation expected");
    assert_eq!(venue.estimated_cost.as_deref(), Some("£8,000 - £10,000"));

    assert!(recs
        .iter()
        .any(|r| r.title == "Honor Your Cultural and Religious Traditions"));
}
