use crate::models::Vendor;
use std::collections::HashMap;

/// Merge candidates gathered from multiple sources into one entry per vendor
///
/// The grouping key is the case-insensitive (name, location) pair. Within a
/// group the highest-rated record survives; the first-seen record wins rating
/// ties. Output order is the insertion order of the first occurrence of each
/// surviving key. Running the merge on its own output is a no-op.
pub fn dedupe_vendors(candidates: Vec<Vendor>) -> Vec<Vendor> {
    let mut kept: Vec<Vendor> = Vec::with_capacity(candidates.len());
    let mut index_by_key: HashMap<String, usize> = HashMap::with_capacity(candidates.len());

    for candidate in candidates {
        let key = dedup_key(&candidate);
        match index_by_key.get(&key) {
            Some(&index) => {
                if candidate.rating > kept[index].rating {
                    kept[index] = candidate;
                }
            }
            None => {
                index_by_key.insert(key, kept.len());
                kept.push(candidate);
            }
        }
    }

    kept
}

#[inline]
fn dedup_key(vendor: &Vendor) -> String {
    format!(
        "{}-{}",
        vendor.name.to_lowercase(),
        vendor.location.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceIndicator, VendorCategory};

    fn vendor(id: &str, name: &str, location: &str, rating: f64) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: name.to_string(),
            category: VendorCategory::Photographer,
            description: String::new(),
            location: location.to_string(),
            address: None,
            phone: None,
            website: None,
            rating,
            review_count: 50,
            price_range: "£2,000 - £5,000".to_string(),
            price_indicator: PriceIndicator::Moderate,
            features: vec![],
            specialties: vec![],
            verified: false,
            response_time: None,
        }
    }

    #[test]
    fn test_highest_rating_wins() {
        let merged = dedupe_vendors(vec![
            vendor("a", "Golden Hour Studios", "London", 4.2),
            vendor("b", "Golden Hour Studios", "London", 4.7),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "b");
        assert_eq!(merged[0].rating, 4.7);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let merged = dedupe_vendors(vec![
            vendor("a", "Candid Moments", "London", 4.5),
            vendor("b", "Candid Moments", "London", 4.5),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "a");
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let merged = dedupe_vendors(vec![
            vendor("a", "Candid Moments", "London", 4.1),
            vendor("b", "candid moments", "LONDON", 4.6),
        ]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "b");
    }

    #[test]
    fn test_same_name_different_location_kept() {
        let merged = dedupe_vendors(vec![
            vendor("a", "Candid Moments", "London", 4.1),
            vendor("b", "Candid Moments", "Manchester", 4.6),
        ]);

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_first_occurrence_order_preserved() {
        let merged = dedupe_vendors(vec![
            vendor("a", "Alpha", "London", 4.0),
            vendor("b", "Beta", "London", 4.0),
            vendor("c", "Alpha", "London", 4.9),
            vendor("d", "Gamma", "London", 4.0),
        ]);

        let names: Vec<_> = merged.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(merged[0].id, "c");
    }

    #[test]
    fn test_idempotent() {
        let once = dedupe_vendors(vec![
            vendor("a", "Alpha", "London", 4.0),
            vendor("b", "Alpha", "London", 4.9),
            vendor("c", "Beta", "London", 4.0),
        ]);
        let twice = dedupe_vendors(once.clone());

        let once_ids: Vec<_> = once.iter().map(|v| v.id.as_str()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }
}
