use crate::models::ChatRequest;
use crate::routes::{authenticated_user, unauthorized, AppState};
use crate::services::ChatMessage;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Turns of prior conversation forwarded to the completion API
const CONVERSATION_WINDOW: usize = 5;

const SYSTEM_PROMPT: &str = "You are an expert AI wedding planning assistant. You help couples \
plan their perfect wedding by providing personalized advice, recommendations, and guidance. \
You have extensive knowledge about wedding budgeting and cost management, wedding timelines \
and planning schedules, global wedding venues and vendors, wedding traditions from various \
cultures and religions, wedding attire, catering and menu planning, photography, flowers and \
decorations, music and entertainment, legal requirements for marriages worldwide, and wedding \
etiquette. Always provide helpful, accurate, and practical advice. Be warm, encouraging, and \
supportive. If you don't know something specific, acknowledge it and suggest ways the couple \
can find the information they need. Adapt recommendations to the couple's location when \
mentioned.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assistant/chat", web::post().to(chat));
}

/// Assistant chat endpoint
///
/// POST /api/v1/assistant/chat
///
/// Relays the completion API's streamed SSE body (`data: {...}` frames
/// terminated by `data: [DONE]`) straight through to the client.
async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let user_id = match authenticated_user(&http_req) {
        Some(id) => id,
        None => return unauthorized(),
    };

    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Validation failed",
            "message": errors.to_string(),
        }));
    }

    let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT)];
    let recent = req
        .conversation
        .iter()
        .rev()
        .take(CONVERSATION_WINDOW)
        .rev();
    for turn in recent {
        if turn.kind == "user" {
            messages.push(ChatMessage::user(turn.content.clone()));
        } else {
            messages.push(ChatMessage::assistant(turn.content.clone()));
        }
    }
    messages.push(ChatMessage::user(req.message.clone()));

    tracing::debug!(
        "Assistant chat for {} ({} context turns)",
        user_id,
        req.conversation.len().min(CONVERSATION_WINDOW)
    );

    match state
        .completion
        .stream(
            messages,
            state.settings.completion.chat_max_tokens,
            state.settings.completion.chat_temperature,
        )
        .await
    {
        Ok(stream) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header(("Cache-Control", "no-cache"))
            .streaming(stream),
        Err(e) => {
            tracing::error!("Assistant chat failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error",
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_scope() {
        assert!(SYSTEM_PROMPT.contains("wedding planning assistant"));
        assert!(SYSTEM_PROMPT.contains("budgeting"));
    }

    #[test]
    fn test_conversation_window() {
        assert_eq!(CONVERSATION_WINDOW, 5);
    }
}
