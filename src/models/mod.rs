// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Budget, BudgetItem, Checklist, ChecklistItem, PriceIndicator, Priority, Recommendation,
    SearchParams, Timeline, TimelineTask, Vendor, VendorCategory, WeddingDetails,
    WeddingPreferences,
};
pub use requests::{
    BudgetItemInput, ChatRequest, ChatTurn, ChecklistInput, ChecklistItemInput,
    QuestionnaireRequest, SaveBudgetRequest, SaveChecklistsRequest, SaveTimelineRequest,
    TimelineTaskInput, VendorSearchRequest,
};
pub use responses::{
    CategoriesResponse, CategoryInfo, ErrorResponse, HealthResponse, RecommendationsResponse,
    SearchMetadata, UserPreferencesSummary, VendorSearchResponse,
};
