use crate::models::{SearchParams, Vendor};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// TTL cache for completed vendor searches
///
/// An explicit handle held in application state; entries expire after the
/// configured TTL (30 minutes by default). Writes are last-write-wins per
/// key: concurrent requests for the same key may each recompute and
/// overwrite the entry. There is no request coalescing.
pub struct SearchCache {
    entries: Cache<String, Arc<Vec<Vendor>>>,
    ttl_secs: u64,
}

impl SearchCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries, ttl_secs }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<Vendor>>> {
        let hit = self.entries.get(key).await;
        if hit.is_some() {
            tracing::trace!("Search cache hit: {}", key);
        } else {
            tracing::trace!("Search cache miss: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: String, vendors: Vec<Vendor>) {
        self.entries.insert(key, Arc::new(vendors)).await;
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for a vendor search: category, location, budget bucket, radius.
    /// An unset or "any-budget" budget collapses to "any".
    pub fn search(params: &SearchParams) -> String {
        let budget = params
            .budget_range
            .as_deref()
            .filter(|range| !range.is_empty() && *range != "any-budget")
            .unwrap_or("any");

        format!(
            "{}-{}-{}-{}",
            params.category.as_str(),
            params.location.to_lowercase(),
            budget,
            params.radius_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceIndicator, VendorCategory};

    fn vendor(id: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: "Test Vendor".to_string(),
            category: VendorCategory::Venue,
            description: String::new(),
            location: "London".to_string(),
            address: None,
            phone: None,
            website: None,
            rating: 4.5,
            review_count: 10,
            price_range: "£1,000-£2,500".to_string(),
            price_indicator: PriceIndicator::Moderate,
            features: vec![],
            specialties: vec![],
            verified: false,
            response_time: None,
        }
    }

    fn params(budget_range: Option<&str>) -> SearchParams {
        SearchParams {
            category: VendorCategory::Venue,
            location: "London".to_string(),
            budget_range: budget_range.map(String::from),
            guest_count: None,
            wedding_date: None,
            radius_km: 50,
            preferences: vec![],
        }
    }

    #[tokio::test]
    async fn test_set_get_invalidate() {
        let cache = SearchCache::new(100, 60);
        let key = CacheKey::search(&params(None));

        assert!(cache.get(&key).await.is_none());

        cache.set(key.clone(), vec![vendor("a")]).await;
        let hit = cache.get(&key).await.expect("expected cache hit");
        assert_eq!(hit[0].id, "a");

        cache.invalidate(&key).await;
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = SearchCache::new(100, 60);
        let key = "venue-london-any-50".to_string();

        cache.set(key.clone(), vec![vendor("a")]).await;
        cache.set(key.clone(), vec![vendor("b")]).await;

        let hit = cache.get(&key).await.expect("expected cache hit");
        assert_eq!(hit[0].id, "b");
    }

    #[test]
    fn test_key_builder() {
        assert_eq!(CacheKey::search(&params(None)), "venue-london-any-50");
        assert_eq!(
            CacheKey::search(&params(Some("any-budget"))),
            "venue-london-any-50"
        );
        assert_eq!(
            CacheKey::search(&params(Some("£2,500 - £5,000"))),
            "venue-london-£2,500 - £5,000-50"
        );
    }
}
