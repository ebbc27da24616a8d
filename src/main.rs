mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{RemoteRanker, SearchPipeline, VendorRanker};
use crate::routes::AppState;
use crate::services::{CompletionClient, PlannerStore, SearchCache};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting VowMatch vendor matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the chat-completion client
    let completion = Arc::new(CompletionClient::new(
        settings.completion.endpoint.clone(),
        settings.completion.api_key.clone(),
        settings.completion.model.clone(),
    ));

    info!("Completion client initialized (model: {})", settings.completion.model);

    // Initialize the search cache
    let cache_capacity = settings.cache.capacity.unwrap_or(1000);
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(1800);
    let cache = Arc::new(SearchCache::new(cache_capacity, cache_ttl));

    info!("Search cache initialized ({} entries, TTL: {}s)", cache_capacity, cache_ttl);

    // Initialize the planner store
    let store = Arc::new(
        PlannerStore::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("Planner store initialized");

    // Wire the search pipeline with the configured ranking strategy
    let remote_ranker: Option<Arc<dyn VendorRanker>> = if settings.search.ai_ranking_enabled
        && !settings.completion.api_key.is_empty()
    {
        Some(Arc::new(RemoteRanker::new(
            completion.clone(),
            settings.completion.rank_max_tokens,
        )))
    } else {
        info!("AI ranking disabled, using deterministic rating ranker only");
        None
    };

    let pipeline = Arc::new(SearchPipeline::new(cache.clone(), remote_ranker));

    info!("Search pipeline initialized");

    // Build application state
    let app_state = AppState {
        store,
        pipeline,
        completion,
        settings: Arc::new(settings.clone()),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
