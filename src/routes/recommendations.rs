use crate::core::normalizer::guest_count_lower_bound;
use crate::core::RecommendationEngine;
use crate::models::{
    Recommendation, RecommendationsResponse, UserPreferencesSummary, WeddingDetails,
    WeddingPreferences,
};
use crate::routes::{authenticated_user, unauthorized, AppState};
use crate::services::{ChatMessage, CompletionClient};
use actix_web::{web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations));
}

/// Personalized planning recommendations
///
/// GET /api/v1/recommendations
///
/// Generates AI recommendations from the stored wedding details, degrading
/// to the rule engine when the completion API is unavailable or returns an
/// unusable reply.
async fn get_recommendations(
    state: web::Data<AppState>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    let details = match state.store.get_wedding_details(&user_id).await {
        Ok(details) => details,
        Err(e) => {
            tracing::error!("Failed to load wedding details for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to generate recommendations",
            }));
        }
    };

    let details = match details.filter(|d| !d.wedding_location.is_empty()) {
        Some(details) => details,
        None => {
            return HttpResponse::Ok().json(serde_json::json!({
                "success": false,
                "error": "Please complete your wedding questionnaire first",
                "needs_questionnaire": true,
            }));
        }
    };

    let preferences = WeddingPreferences::from(&details);

    let recommendations = match ai_recommendations(
        &state.completion,
        &details,
        state.settings.completion.recommend_max_tokens,
    )
    .await
    {
        Ok(recommendations) if !recommendations.is_empty() => recommendations,
        Ok(_) => {
            tracing::warn!("AI recommendations empty, using rule engine");
            RecommendationEngine::generate(&preferences, chrono::Utc::now())
        }
        Err(e) => {
            tracing::warn!("AI recommendations failed, using rule engine: {}", e);
            RecommendationEngine::generate(&preferences, chrono::Utc::now())
        }
    };

    HttpResponse::Ok().json(RecommendationsResponse {
        success: true,
        recommendations,
        user_preferences: UserPreferencesSummary {
            location: details.wedding_location.clone(),
            guest_count: guest_count_lower_bound(&details.guest_count),
            budget: details.budget.unwrap_or(0.0),
            date: details
                .wedding_date
                .unwrap_or_else(chrono::Utc::now)
                .to_rfc3339(),
            style: details.wedding_style.clone().unwrap_or_default(),
            priorities: vec![],
        },
    })
}

/// Ask the completion API for recommendations as a JSON object
async fn ai_recommendations(
    completion: &CompletionClient,
    details: &WeddingDetails,
    max_tokens: u32,
) -> Result<Vec<Recommendation>, Box<dyn std::error::Error>> {
    let prompt = build_prompt(details);
    let reply = completion
        .complete_json(vec![ChatMessage::user(prompt)], max_tokens)
        .await?;

    let parsed: serde_json::Value = serde_json::from_str(&reply)?;
    let recommendations = parsed
        .get("recommendations")
        .cloned()
        .unwrap_or(serde_json::Value::Null);

    Ok(serde_json::from_value(recommendations).unwrap_or_default())
}

fn build_prompt(details: &WeddingDetails) -> String {
    let join = |list: &[String], empty: &str| {
        if list.is_empty() {
            empty.to_string()
        } else {
            list.join(", ")
        }
    };

    format!(
        "You are an expert wedding planner creating personalized recommendations for a couple. \
         Based on their preferences, provide 4-6 specific, actionable recommendations.\n\n\
         Wedding Details:\n\
         - Location: {}\n\
         - Date: {}\n\
         - Guest Count: {}\n\
         - Budget: £{}\n\
         - Cultural Traditions: {}\n\
         - Religious Traditions: {}\n\
         - Planned Events: {}\n\
         - Wedding Style: {}\n\
         - Special Requirements: {}\n\n\
         Please provide recommendations in the following JSON format:\n\
         {{\"recommendations\": [{{\"priority\": \"high|medium|low\", \
         \"category\": \"venue|catering|photography|music|flowers|decoration|planning\", \
         \"title\": \"Clear, actionable recommendation title\", \
         \"description\": \"Detailed description of what they should do\", \
         \"reasoning\": \"Why this recommendation makes sense for their specific situation\", \
         \"actionable_steps\": [\"Specific step 1\", \"Specific step 2\"], \
         \"estimated_cost\": \"Cost range if applicable\", \
         \"timeframe\": \"When they should act on this\"}}]}}\n\n\
         Focus on their budget constraints, guest count, location-specific advice, timeline \
         urgency, and cultural or religious requirements. Respond with raw JSON only. Do not \
         include code blocks, markdown, or any other formatting.",
        details.wedding_location,
        details
            .wedding_date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Not specified".to_string()),
        if details.guest_count.is_empty() {
            "Not specified"
        } else {
            details.guest_count.as_str()
        },
        details
            .budget
            .map(|b| b.to_string())
            .unwrap_or_else(|| "Not specified".to_string()),
        join(&details.cultural_traditions, "None specified"),
        join(&details.religious_traditions, "None specified"),
        join(&details.planned_events, "Not specified"),
        details.wedding_style.as_deref().unwrap_or("Not specified"),
        details
            .special_requirements
            .as_deref()
            .unwrap_or("None specified"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> WeddingDetails {
        WeddingDetails {
            user_id: "u1".to_string(),
            partner_one_name: "Alex".to_string(),
            partner_two_name: "Sam".to_string(),
            wedding_location: "London".to_string(),
            wedding_date: None,
            guest_count: "100-150".to_string(),
            budget: Some(20000.0),
            currency: "GBP".to_string(),
            cultural_traditions: vec!["South Asian".to_string()],
            religious_traditions: vec![],
            planned_events: vec![],
            wedding_style: None,
            venue_type: None,
            special_requirements: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_prompt_carries_details() {
        let prompt = build_prompt(&details());
        assert!(prompt.contains("Location: London"));
        assert!(prompt.contains("Guest Count: 100-150"));
        assert!(prompt.contains("Budget: £20000"));
        assert!(prompt.contains("South Asian"));
        assert!(prompt.contains("raw JSON only"));
    }

    #[test]
    fn test_ai_reply_parsing_shape() {
        let reply = r#"{
            "recommendations": [{
                "priority": "high",
                "category": "venue",
                "title": "Book a venue",
                "description": "desc",
                "reasoning": "because",
                "actionable_steps": ["step"],
                "estimated_cost": "£1,000",
                "timeframe": "now"
            }]
        }"#;

        let parsed: serde_json::Value = serde_json::from_str(reply).unwrap();
        let recommendations: Vec<Recommendation> =
            serde_json::from_value(parsed.get("recommendations").cloned().unwrap()).unwrap();

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].category, "venue");
    }
}
