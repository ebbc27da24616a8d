// Core algorithm exports
pub mod dedup;
pub mod filters;
pub mod normalizer;
pub mod pipeline;
pub mod ranker;
pub mod rules;

pub use dedup::dedupe_vendors;
pub use filters::{budget_overlaps, filter_candidates, location_matches, suits_guest_count};
pub use normalizer::{
    budget_bucket, format_amount, guest_count_lower_bound, guest_count_midpoint,
    parse_money_range, MoneyRange,
};
pub use pipeline::{SearchOutcome, SearchPipeline};
pub use ranker::{fallback_score, rank_by_rating, RankError, RatingRanker, RemoteRanker, VendorRanker};
pub use rules::{months_until_wedding, RecommendationEngine, MAX_RECOMMENDATIONS};
