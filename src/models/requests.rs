use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search for vendors
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VendorSearchRequest {
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub wedding_date: Option<String>,
    #[serde(default)]
    pub search_radius: Option<u32>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Request to chat with the planning assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default)]
    pub conversation: Vec<ChatTurn>,
}

/// A prior turn of the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// Questionnaire submission (wedding details upsert)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionnaireRequest {
    #[serde(rename = "partnerOneName", default)]
    pub partner_one_name: Option<String>,
    #[serde(rename = "partnerTwoName", default)]
    pub partner_two_name: Option<String>,
    #[validate(length(min = 1))]
    #[serde(rename = "weddingLocation")]
    pub wedding_location: String,
    #[serde(rename = "weddingDate", default)]
    pub wedding_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "guestCount", default)]
    pub guest_count: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "culturalTraditions", default)]
    pub cultural_traditions: Vec<String>,
    #[serde(rename = "religiousTraditions", default)]
    pub religious_traditions: Vec<String>,
    #[serde(rename = "plannedEvents", default)]
    pub planned_events: Vec<String>,
    #[serde(rename = "weddingStyle", default)]
    pub wedding_style: Option<String>,
    #[serde(rename = "venueType", default)]
    pub venue_type: Option<String>,
    #[serde(rename = "specialRequirements", default)]
    pub special_requirements: Option<String>,
}

/// Replace-all save of the wedding budget
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveBudgetRequest {
    #[serde(rename = "totalBudget")]
    #[validate(range(min = 0.0))]
    pub total_budget: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<BudgetItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItemInput {
    pub category: String,
    pub item: String,
    #[serde(rename = "estimatedCost", default)]
    pub estimated_cost: f64,
    #[serde(rename = "actualCost", default)]
    pub actual_cost: Option<f64>,
    #[serde(rename = "isPaid", default)]
    pub is_paid: bool,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Replace-all save of the user's checklists
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveChecklistsRequest {
    #[validate(length(min = 1))]
    pub checklists: Vec<ChecklistInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistInput {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub items: Vec<ChecklistItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItemInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    pub category: String,
    #[serde(default)]
    pub importance: Option<String>,
}

/// Replace-all save of the wedding timeline
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveTimelineRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "weddingDate")]
    pub wedding_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub tasks: Vec<TimelineTaskInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineTaskInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_defaults() {
        let req: VendorSearchRequest = serde_json::from_str(
            r#"{"category": "venue", "location": "London"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.budget_range, None);
        assert_eq!(req.search_radius, None);
        assert!(req.preferences.is_empty());
    }

    #[test]
    fn test_search_request_missing_location_fails_validation() {
        let req: VendorSearchRequest = serde_json::from_str(
            r#"{"category": "venue", "location": ""}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_chat_turn_type_field() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message": "hi", "conversation": [{"type": "user", "content": "hello"}]}"#,
        )
        .unwrap();

        assert_eq!(req.conversation.len(), 1);
        assert_eq!(req.conversation[0].kind, "user");
    }
}
