//! VowMatch - Vendor matching and planning service for the VowMatch wedding planner
//!
//! This library provides the vendor search pipeline used by the VowMatch
//! wedding planner: multi-source candidate gathering, preference-based
//! filtering, cross-source deduplication, and AI-assisted ranking with a
//! deterministic fallback, plus the rule-based recommendation engine.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    dedupe_vendors, fallback_score, filter_candidates, RecommendationEngine, SearchPipeline,
    VendorRanker,
};
pub use crate::models::{Recommendation, SearchParams, Vendor, VendorCategory, WeddingPreferences};

#[cfg(test)]
mod tests {
    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let range = crate::core::parse_money_range("£1,000 - £2,500").expect("range should parse");
        assert_eq!(range.min, 1000.0);
    }
}
