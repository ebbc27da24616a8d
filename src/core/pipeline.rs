use crate::core::dedup::dedupe_vendors;
use crate::core::filters::filter_candidates;
use crate::core::ranker::{rank_by_rating, VendorRanker};
use crate::models::{SearchParams, Vendor};
use crate::services::cache::{CacheKey, SearchCache};
use crate::services::catalog::{VendorCatalog, SOURCE_NAMES};
use std::sync::Arc;

/// Result of a vendor search
#[derive(Debug)]
pub struct SearchOutcome {
    pub vendors: Vec<Vendor>,
    pub total_candidates: usize,
    pub cache_used: bool,
    pub ai_ranking_applied: bool,
    pub sources: Vec<String>,
}

/// Vendor search orchestrator
///
/// # Pipeline stages
/// 1. Cache lookup (TTL-bounded, last-write-wins)
/// 2. Candidate gathering from all sources
/// 3. Location / budget / guest-count filtering
/// 4. Cross-source deduplication
/// 5. Ranking: remote AI strategy when configured, degrading silently to
///    the deterministic rating sort on any failure
pub struct SearchPipeline {
    cache: Arc<SearchCache>,
    remote_ranker: Option<Arc<dyn VendorRanker>>,
}

impl SearchPipeline {
    pub fn new(cache: Arc<SearchCache>, remote_ranker: Option<Arc<dyn VendorRanker>>) -> Self {
        Self {
            cache,
            remote_ranker,
        }
    }

    pub async fn search(&self, params: &SearchParams) -> SearchOutcome {
        let key = CacheKey::search(params);

        if let Some(cached) = self.cache.get(&key).await {
            let vendors = cached.as_ref().clone();
            return SearchOutcome {
                total_candidates: vendors.len(),
                vendors,
                cache_used: true,
                ai_ranking_applied: false,
                sources: source_names(),
            };
        }

        let candidates = VendorCatalog::gather(params);
        let total_candidates = candidates.len();

        let filtered = filter_candidates(candidates, params);
        let deduped = dedupe_vendors(filtered);

        tracing::debug!(
            "Search {}: {} candidates, {} after filter+dedup",
            key,
            total_candidates,
            deduped.len()
        );

        let (vendors, ai_ranking_applied) = match &self.remote_ranker {
            Some(ranker) => match ranker.rank(deduped.clone(), params).await {
                Ok(ranked) => (ranked, true),
                Err(e) => {
                    tracing::warn!("AI ranking failed, using rating fallback: {}", e);
                    (rank_by_rating(deduped), false)
                }
            },
            None => (rank_by_rating(deduped), false),
        };

        self.cache.set(key, vendors.clone()).await;

        SearchOutcome {
            vendors,
            total_candidates,
            cache_used: false,
            ai_ranking_applied,
            sources: source_names(),
        }
    }
}

fn source_names() -> Vec<String> {
    SOURCE_NAMES.iter().map(|s| s.to_string()).collect()
}
