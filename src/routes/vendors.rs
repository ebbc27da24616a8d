use crate::models::{
    CategoriesResponse, CategoryInfo, ErrorResponse, SearchMetadata, SearchParams,
    VendorCategory, VendorSearchRequest, VendorSearchResponse,
};
use crate::routes::{authenticated_user, unauthorized, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/vendors/search", web::post().to(search_vendors))
        .route("/vendors/categories", web::get().to(list_categories));
}

/// Vendor search endpoint
///
/// POST /api/v1/vendors/search
///
/// Request body:
/// ```json
/// {
///   "category": "venue",
///   "location": "London",
///   "budget_range": "£2,500 - £5,000",
///   "guest_count": 120,
///   "search_radius": 50
/// }
/// ```
async fn search_vendors(
    state: web::Data<AppState>,
    req: web::Json<VendorSearchRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for vendor search: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing required fields: category, location".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let category = match VendorCategory::parse(&req.category) {
        Some(category) => category,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid category".to_string(),
                message: format!(
                    "Category must be one of: {}",
                    VendorCategory::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                status_code: 400,
            });
        }
    };

    let params = SearchParams {
        category,
        location: req.location.clone(),
        budget_range: req.budget_range.clone(),
        guest_count: req.guest_count,
        wedding_date: req.wedding_date.clone(),
        radius_km: req
            .search_radius
            .unwrap_or(state.settings.search.default_radius_km),
        preferences: req.preferences.clone(),
    };

    tracing::info!(
        "Vendor search by {}: category={}, location={}",
        user_id,
        params.category.as_str(),
        params.location
    );

    let outcome = state.pipeline.search(&params).await;

    tracing::info!(
        "Vendor search completed: {} results from {} candidates (cache: {}, ai: {})",
        outcome.vendors.len(),
        outcome.total_candidates,
        outcome.cache_used,
        outcome.ai_ranking_applied
    );

    HttpResponse::Ok().json(VendorSearchResponse {
        success: true,
        message: "Vendor search completed successfully".to_string(),
        search_id: format!("search_{}", uuid::Uuid::new_v4()),
        search_metadata: SearchMetadata {
            total_results: outcome.vendors.len(),
            search_time: chrono::Utc::now(),
            cache_used: outcome.cache_used,
            ai_ranking_applied: outcome.ai_ranking_applied,
            sources: outcome.sources,
        },
        vendors: outcome.vendors,
    })
}

/// Available vendor categories
///
/// GET /api/v1/vendors/categories
async fn list_categories() -> impl Responder {
    let categories = VendorCategory::ALL
        .iter()
        .map(|category| CategoryInfo {
            id: category.as_str().to_string(),
            label: category.label().to_string(),
            description: category.blurb().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_listing_is_complete() {
        let ids: Vec<_> = VendorCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "venue",
                "photographer",
                "catering",
                "florist",
                "music",
                "decoration"
            ]
        );
    }
}
