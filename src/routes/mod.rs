// Route exports
pub mod assistant;
pub mod planner;
pub mod recommendations;
pub mod vendors;

use crate::config::Settings;
use crate::core::SearchPipeline;
use crate::models::HealthResponse;
use crate::services::{CompletionClient, PlannerStore};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlannerStore>,
    pub pipeline: Arc<SearchPipeline>,
    pub completion: Arc<CompletionClient>,
    pub settings: Arc<Settings>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(vendors::configure)
            .configure(recommendations::configure)
            .configure(assistant::configure)
            .configure(planner::configure),
    );
}

/// Opaque authenticated user id supplied by the upstream identity provider
pub fn authenticated_user(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("X-User-Id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

pub fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Unauthorized" }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_authenticated_user_header() {
        let req = TestRequest::default()
            .insert_header(("X-User-Id", "user-42"))
            .to_http_request();
        assert_eq!(authenticated_user(&req), Some("user-42".to_string()));
    }

    #[test]
    fn test_missing_or_blank_header_is_anonymous() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(authenticated_user(&req), None);

        let blank = TestRequest::default()
            .insert_header(("X-User-Id", "   "))
            .to_http_request();
        assert_eq!(authenticated_user(&blank), None);
    }
}
