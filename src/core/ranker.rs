use crate::models::{SearchParams, Vendor};
use crate::services::completion::{ChatMessage, CompletionClient, CompletionError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while ranking candidates
#[derive(Debug, Error)]
pub enum RankError {
    #[error("completion request failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("ranking reply contained no known vendor IDs")]
    UnparsableReply,
}

/// Ordering strategy for deduplicated vendor candidates
///
/// Two implementations exist: the remote AI ranker and the deterministic
/// rating ranker the pipeline degrades to when the remote path fails.
#[async_trait]
pub trait VendorRanker: Send + Sync {
    async fn rank(
        &self,
        vendors: Vec<Vendor>,
        params: &SearchParams,
    ) -> Result<Vec<Vendor>, RankError>;
}

/// Deterministic fallback score: rating weighted by log of review volume
#[inline]
pub fn fallback_score(rating: f64, review_count: u32) -> f64 {
    rating * ((review_count as f64) + 1.0).ln()
}

/// Sort vendors by descending fallback score; stable for equal scores
pub fn rank_by_rating(mut vendors: Vec<Vendor>) -> Vec<Vendor> {
    vendors.sort_by(|a, b| {
        let score_a = fallback_score(a.rating, a.review_count);
        let score_b = fallback_score(b.rating, b.review_count);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    vendors
}

/// Deterministic ranker: descending `rating * ln(review_count + 1)`
#[derive(Debug, Clone, Default)]
pub struct RatingRanker;

#[async_trait]
impl VendorRanker for RatingRanker {
    async fn rank(
        &self,
        vendors: Vec<Vendor>,
        _params: &SearchParams,
    ) -> Result<Vec<Vendor>, RankError> {
        Ok(rank_by_rating(vendors))
    }
}

/// AI-backed ranker: sends candidate summaries to the completion API and
/// reorders by the comma-separated ID list it returns
///
/// Network errors, non-2xx statuses, and replies naming no known ID are
/// surfaced as errors for the caller to degrade on. IDs missing from the
/// reply keep their original relative order at the end.
pub struct RemoteRanker {
    completion: Arc<CompletionClient>,
    max_tokens: u32,
}

impl RemoteRanker {
    pub fn new(completion: Arc<CompletionClient>, max_tokens: u32) -> Self {
        Self {
            completion,
            max_tokens,
        }
    }

    fn build_prompt(vendors: &[Vendor], params: &SearchParams) -> String {
        let summaries: Vec<_> = vendors
            .iter()
            .map(|vendor| {
                serde_json::json!({
                    "id": vendor.id,
                    "name": vendor.name,
                    "rating": vendor.rating,
                    "priceRange": vendor.price_range,
                    "features": vendor.features.iter().take(3).collect::<Vec<_>>(),
                    "specialties": vendor.specialties,
                })
            })
            .collect();

        let budget = params
            .budget_range
            .as_deref()
            .filter(|range| !range.is_empty() && *range != "any-budget")
            .unwrap_or("Not specified");
        let guests = params
            .guest_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "Not specified".to_string());

        format!(
            "Rank these wedding {} vendors for a couple getting married in {}.\n\
             Budget range: {}\n\
             Guest count: {}\n\n\
             Vendors: {}\n\n\
             Please respond with just the vendor IDs in order of best fit, separated by commas.",
            params.category.as_str(),
            params.location,
            budget,
            guests,
            serde_json::Value::Array(summaries),
        )
    }
}

#[async_trait]
impl VendorRanker for RemoteRanker {
    async fn rank(
        &self,
        vendors: Vec<Vendor>,
        params: &SearchParams,
    ) -> Result<Vec<Vendor>, RankError> {
        if vendors.is_empty() {
            return Ok(vendors);
        }

        let prompt = Self::build_prompt(&vendors, params);
        let reply = self
            .completion
            .complete(vec![ChatMessage::user(prompt)], self.max_tokens)
            .await?;

        reorder_by_ids(vendors, &reply).ok_or(RankError::UnparsableReply)
    }
}

/// Reorder vendors by a comma-separated ID list
///
/// Returns None when the reply names no known ID at all. IDs absent from
/// the reply are appended in their original order.
pub fn reorder_by_ids(vendors: Vec<Vendor>, reply: &str) -> Option<Vec<Vendor>> {
    let original_order: Vec<String> = vendors.iter().map(|v| v.id.clone()).collect();
    let mut by_id: HashMap<String, Vendor> = vendors
        .into_iter()
        .map(|vendor| (vendor.id.clone(), vendor))
        .collect();

    let mut ranked = Vec::with_capacity(by_id.len());
    for token in reply.split(',') {
        if let Some(vendor) = by_id.remove(token.trim()) {
            ranked.push(vendor);
        }
    }

    if ranked.is_empty() {
        return None;
    }

    for id in &original_order {
        if let Some(vendor) = by_id.remove(id) {
            ranked.push(vendor);
        }
    }

    Some(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceIndicator, VendorCategory};

    fn vendor(id: &str, rating: f64, review_count: u32) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {}", id),
            category: VendorCategory::Florist,
            description: String::new(),
            location: "London".to_string(),
            address: None,
            phone: None,
            website: None,
            rating,
            review_count,
            price_range: "£1,000 - £2,500".to_string(),
            price_indicator: PriceIndicator::Moderate,
            features: vec![],
            specialties: vec![],
            verified: false,
            response_time: None,
        }
    }

    fn params() -> SearchParams {
        SearchParams {
            category: VendorCategory::Florist,
            location: "London".to_string(),
            budget_range: None,
            guest_count: None,
            wedding_date: None,
            radius_km: 50,
            preferences: vec![],
        }
    }

    #[test]
    fn test_fallback_score_monotonic_in_rating() {
        let low = fallback_score(3.5, 100);
        let high = fallback_score(4.5, 100);
        assert!(high > low);
    }

    #[test]
    fn test_fallback_score_monotonic_in_reviews() {
        let few = fallback_score(4.5, 10);
        let many = fallback_score(4.5, 1000);
        assert!(many > few);
    }

    #[test]
    fn test_fallback_score_zero_reviews() {
        // ln(0 + 1) = 0, so an unreviewed vendor scores zero regardless of rating
        assert_eq!(fallback_score(5.0, 0), 0.0);
    }

    #[tokio::test]
    async fn test_rating_ranker_orders_by_score() {
        let ranker = RatingRanker;
        let ranked = ranker
            .rank(
                vec![vendor("a", 4.0, 10), vendor("b", 4.8, 500), vendor("c", 4.8, 50)],
                &params(),
            )
            .await
            .unwrap();

        let ids: Vec<_> = ranked.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_by_ids_full_reply() {
        let reordered =
            reorder_by_ids(vec![vendor("a", 4.0, 10), vendor("b", 4.0, 10)], "b, a").unwrap();
        let ids: Vec<_> = reordered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_appends_missing_in_original_order() {
        let reordered = reorder_by_ids(
            vec![vendor("a", 4.0, 10), vendor("b", 4.0, 10), vendor("c", 4.0, 10)],
            "c",
        )
        .unwrap();
        let ids: Vec<_> = reordered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_ignores_unknown_ids() {
        let reordered = reorder_by_ids(
            vec![vendor("a", 4.0, 10), vendor("b", 4.0, 10)],
            "zz, b, unknown",
        )
        .unwrap();
        let ids: Vec<_> = reordered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_rejects_garbage_reply() {
        assert!(reorder_by_ids(vec![vendor("a", 4.0, 10)], "sorry, I cannot rank").is_none());
    }

    #[test]
    fn test_prompt_includes_context() {
        let mut search = params();
        search.budget_range = Some("£2,500 - £5,000".to_string());
        search.guest_count = Some(120);

        let prompt = RemoteRanker::build_prompt(&[vendor("a", 4.5, 200)], &search);
        assert!(prompt.contains("florist"));
        assert!(prompt.contains("London"));
        assert!(prompt.contains("£2,500 - £5,000"));
        assert!(prompt.contains("120"));
        assert!(prompt.contains("\"id\":\"a\""));
    }
}
