use serde::{Deserialize, Serialize};

/// Vendor categories supported by the search pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorCategory {
    Venue,
    Photographer,
    Catering,
    Florist,
    Music,
    Decoration,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 6] = [
        VendorCategory::Venue,
        VendorCategory::Photographer,
        VendorCategory::Catering,
        VendorCategory::Florist,
        VendorCategory::Music,
        VendorCategory::Decoration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorCategory::Venue => "venue",
            VendorCategory::Photographer => "photographer",
            VendorCategory::Catering => "catering",
            VendorCategory::Florist => "florist",
            VendorCategory::Music => "music",
            VendorCategory::Decoration => "decoration",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "venue" => Some(VendorCategory::Venue),
            "photographer" => Some(VendorCategory::Photographer),
            "catering" => Some(VendorCategory::Catering),
            "florist" => Some(VendorCategory::Florist),
            "music" => Some(VendorCategory::Music),
            "decoration" => Some(VendorCategory::Decoration),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VendorCategory::Venue => "Venues",
            VendorCategory::Photographer => "Photography",
            VendorCategory::Catering => "Catering",
            VendorCategory::Florist => "Florals",
            VendorCategory::Music => "Music & Entertainment",
            VendorCategory::Decoration => "Decorations",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            VendorCategory::Venue => "Wedding venues, halls, and event spaces",
            VendorCategory::Photographer => "Wedding photographers and videographers",
            VendorCategory::Catering => "Catering services and food providers",
            VendorCategory::Florist => "Florists and floral designers",
            VendorCategory::Music => "DJs, bands, and entertainment",
            VendorCategory::Decoration => "Event decorators and styling services",
        }
    }
}

/// Ordinal price tier, independent of the textual price range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceIndicator {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceIndicator {
    /// Numeric tier, 1 ($) through 4 ($$$$)
    pub fn tier(&self) -> u8 {
        match self {
            PriceIndicator::Budget => 1,
            PriceIndicator::Moderate => 2,
            PriceIndicator::Premium => 3,
            PriceIndicator::Luxury => 4,
        }
    }
}

/// A vendor candidate as returned by the search pipeline
///
/// Candidates come from the curated catalog and the synthetic sources;
/// they are computed per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: VendorCategory,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[serde(rename = "priceIndicator")]
    pub price_indicator: PriceIndicator,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub verified: bool,
    #[serde(rename = "responseTime", default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
}

/// Normalized search parameters consumed by the pipeline
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub category: VendorCategory,
    pub location: String,
    pub budget_range: Option<String>,
    pub guest_count: Option<u32>,
    pub wedding_date: Option<String>,
    pub radius_km: u32,
    pub preferences: Vec<String>,
}

/// Wedding details row, one per user, written by the questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingDetails {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "partnerOneName", default)]
    pub partner_one_name: String,
    #[serde(rename = "partnerTwoName", default)]
    pub partner_two_name: String,
    #[serde(rename = "weddingLocation")]
    pub wedding_location: String,
    #[serde(rename = "weddingDate", default)]
    pub wedding_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "guestCount", default)]
    pub guest_count: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
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
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub(crate) fn default_currency() -> String {
    "GBP".to_string()
}

/// Read-only view of the questionnaire answers used by the matching logic
#[derive(Debug, Clone)]
pub struct WeddingPreferences {
    pub budget: f64,
    pub currency: String,
    pub guest_count: String,
    pub wedding_location: String,
    pub wedding_date: Option<chrono::DateTime<chrono::Utc>>,
    pub wedding_style: Option<String>,
    pub cultural_traditions: Vec<String>,
    pub religious_traditions: Vec<String>,
    pub planned_events: Vec<String>,
}

impl From<&WeddingDetails> for WeddingPreferences {
    fn from(details: &WeddingDetails) -> Self {
        Self {
            budget: details.budget.unwrap_or(0.0),
            currency: details.currency.clone(),
            guest_count: details.guest_count.clone(),
            wedding_location: details.wedding_location.clone(),
            wedding_date: details.wedding_date,
            wedding_style: details.wedding_style.clone(),
            cultural_traditions: details.cultural_traditions.clone(),
            religious_traditions: details.religious_traditions.clone(),
            planned_events: details.planned_events.clone(),
        }
    }
}

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A planning recommendation, regenerated per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub reasoning: String,
    #[serde(default)]
    pub actionable_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// A wedding budget with its line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "totalBudget")]
    pub total_budget: f64,
    pub currency: String,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub category: String,
    pub item: String,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
    #[serde(rename = "actualCost", default)]
    pub actual_cost: Option<f64>,
    #[serde(rename = "isPaid", default)]
    pub is_paid: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A named checklist grouping items by planning area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    pub category: String,
    #[serde(default)]
    pub importance: Priority,
}

/// The wedding timeline with its dated tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "weddingDate")]
    pub wedding_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub tasks: Vec<TimelineTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in VendorCategory::ALL {
            assert_eq!(VendorCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(VendorCategory::parse("Venue"), Some(VendorCategory::Venue));
        assert_eq!(VendorCategory::parse("balloons"), None);
    }

    #[test]
    fn test_price_indicator_ordering() {
        assert!(PriceIndicator::Budget < PriceIndicator::Luxury);
        assert_eq!(PriceIndicator::Premium.tier(), 3);

        let json = serde_json::to_string(&PriceIndicator::Moderate).unwrap();
        assert_eq!(json, "\"$$\"");
    }

    #[test]
    fn test_priority_weight_order() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn test_preferences_from_details() {
        let details = WeddingDetails {
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
            planned_events: vec!["Reception".to_string()],
            wedding_style: Some("Modern".to_string()),
            venue_type: None,
            special_requirements: None,
            updated_at: None,
        };

        let prefs = WeddingPreferences::from(&details);
        assert_eq!(prefs.budget, 20000.0);
        assert_eq!(prefs.guest_count, "100-150");
        assert_eq!(prefs.cultural_traditions, vec!["South Asian"]);
    }
}
