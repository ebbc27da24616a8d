// Service exports
pub mod cache;
pub mod catalog;
pub mod completion;
pub mod store;

pub use cache::{CacheKey, SearchCache};
pub use catalog::{VendorCatalog, SOURCE_NAMES};
pub use completion::{ChatMessage, CompletionClient, CompletionError};
pub use store::{PlannerStore, StoreError};
