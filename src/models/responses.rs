use serde::{Deserialize, Serialize};
use crate::models::domain::{Recommendation, Vendor};

/// Response for the vendor search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSearchResponse {
    pub success: bool,
    pub message: String,
    pub search_id: String,
    pub vendors: Vec<Vendor>,
    pub search_metadata: SearchMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub total_results: usize,
    pub search_time: chrono::DateTime<chrono::Utc>,
    pub cache_used: bool,
    pub ai_ranking_applied: bool,
    pub sources: Vec<String>,
}

/// Category listing for the vendor search UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub user_preferences: UserPreferencesSummary,
}

/// Echo of the preferences the recommendations were derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferencesSummary {
    pub location: String,
    pub guest_count: u32,
    pub budget: f64,
    pub date: String,
    pub style: String,
    pub priorities: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
