use crate::models::requests::{
    QuestionnaireRequest, SaveBudgetRequest, SaveChecklistsRequest, SaveTimelineRequest,
};
use crate::models::ErrorResponse;
use crate::routes::{authenticated_user, unauthorized, AppState};
use crate::services::StoreError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/questionnaire", web::get().to(get_questionnaire))
        .route("/questionnaire", web::post().to(save_questionnaire))
        .route("/budget", web::get().to(get_budget))
        .route("/budget", web::post().to(save_budget))
        .route("/checklist", web::get().to(get_checklists))
        .route("/checklist", web::post().to(save_checklists))
        .route("/timeline", web::get().to(get_timeline))
        .route("/timeline", web::post().to(save_timeline));
}

fn store_failure(context: &str, error: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, error);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal server error".to_string(),
        message: context.to_string(),
        status_code: 500,
    })
}

fn validation_failure(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// GET /api/v1/questionnaire
async fn get_questionnaire(
    state: web::Data<AppState>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    match state.store.get_wedding_details(&user_id).await {
        Ok(details) => HttpResponse::Ok().json(serde_json::json!({ "weddingDetails": details })),
        Err(e) => store_failure("Failed to load wedding details", e),
    }
}

/// POST /api/v1/questionnaire
async fn save_questionnaire(
    state: web::Data<AppState>,
    req: web::Json<QuestionnaireRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(errors);
    }

    match state.store.upsert_wedding_details(&user_id, &req).await {
        Ok(details) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Wedding details saved successfully",
            "weddingDetails": details,
        })),
        Err(e) => store_failure("Failed to save wedding details", e),
    }
}

/// GET /api/v1/budget
async fn get_budget(
    state: web::Data<AppState>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    match state.store.get_budget(&user_id).await {
        Ok(budget) => HttpResponse::Ok().json(serde_json::json!({ "budget": budget })),
        Err(e) => store_failure("Failed to load budget", e),
    }
}

/// POST /api/v1/budget
async fn save_budget(
    state: web::Data<AppState>,
    req: web::Json<SaveBudgetRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(errors);
    }

    match state.store.save_budget(&user_id, &req).await {
        Ok(budget) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Budget saved successfully",
            "budget": budget,
        })),
        Err(e) => store_failure("Failed to save budget", e),
    }
}

/// GET /api/v1/checklist
async fn get_checklists(
    state: web::Data<AppState>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    match state.store.get_checklists(&user_id).await {
        Ok(checklists) => HttpResponse::Ok().json(serde_json::json!({ "checklists": checklists })),
        Err(e) => store_failure("Failed to load checklists", e),
    }
}

/// POST /api/v1/checklist
async fn save_checklists(
    state: web::Data<AppState>,
    req: web::Json<SaveChecklistsRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(errors);
    }

    match state.store.save_checklists(&user_id, &req).await {
        Ok(checklists) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Checklist saved successfully",
            "checklists": checklists,
        })),
        Err(e) => store_failure("Failed to save checklists", e),
    }
}

/// GET /api/v1/timeline
async fn get_timeline(
    state: web::Data<AppState>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    match state.store.get_timeline(&user_id).await {
        Ok(timeline) => HttpResponse::Ok().json(serde_json::json!({ "timeline": timeline })),
        Err(e) => store_failure("Failed to load timeline", e),
    }
}

/// POST /api/v1/timeline
async fn save_timeline(
    state: web::Data<AppState>,
    req: web::Json<SaveTimelineRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(errors);
    }

    match state.store.save_timeline(&user_id, &req).await {
        Ok(timeline) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Timeline saved successfully",
            "timeline": timeline,
        })),
        Err(e) => store_failure("Failed to save timeline", e),
    }
}
