use crate::models::requests::{
    QuestionnaireRequest, SaveBudgetRequest, SaveChecklistsRequest, SaveTimelineRequest,
};
use crate::models::{
    Budget, BudgetItem, Checklist, ChecklistItem, Priority, Timeline, TimelineTask, WeddingDetails,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with the planner database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// PostgreSQL store for the planner entities
///
/// Holds the questionnaire answers (wedding details) plus the budget,
/// checklist, and timeline documents, all keyed by the opaque authenticated
/// user id. Budget/checklist/timeline saves are replace-all: the previous
/// item set is deleted and the submitted set inserted.
pub struct PlannerStore {
    pool: PgPool,
}

impl PlannerStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    // ----- wedding details -----

    pub async fn get_wedding_details(
        &self,
        user_id: &str,
    ) -> Result<Option<WeddingDetails>, StoreError> {
        let query = r#"
            SELECT user_id, partner_one_name, partner_two_name, wedding_location,
                   wedding_date, guest_count, budget, currency,
                   cultural_traditions, religious_traditions, planned_events,
                   wedding_style, venue_type, special_requirements, updated_at
            FROM wedding_details
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| WeddingDetails {
            user_id: row.get("user_id"),
            partner_one_name: row.get("partner_one_name"),
            partner_two_name: row.get("partner_two_name"),
            wedding_location: row.get("wedding_location"),
            wedding_date: row.get("wedding_date"),
            guest_count: row.get("guest_count"),
            budget: row.get("budget"),
            currency: row.get("currency"),
            cultural_traditions: string_list(&row, "cultural_traditions"),
            religious_traditions: string_list(&row, "religious_traditions"),
            planned_events: string_list(&row, "planned_events"),
            wedding_style: row.get("wedding_style"),
            venue_type: row.get("venue_type"),
            special_requirements: row.get("special_requirements"),
            updated_at: row.get("updated_at"),
        }))
    }

    /// Create or update the wedding details for a user
    pub async fn upsert_wedding_details(
        &self,
        user_id: &str,
        details: &QuestionnaireRequest,
    ) -> Result<WeddingDetails, StoreError> {
        let query = r#"
            INSERT INTO wedding_details (
                user_id, partner_one_name, partner_two_name, wedding_location,
                wedding_date, guest_count, budget, currency,
                cultural_traditions, religious_traditions, planned_events,
                wedding_style, venue_type, special_requirements, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET
                partner_one_name = EXCLUDED.partner_one_name,
                partner_two_name = EXCLUDED.partner_two_name,
                wedding_location = EXCLUDED.wedding_location,
                wedding_date = EXCLUDED.wedding_date,
                guest_count = EXCLUDED.guest_count,
                budget = EXCLUDED.budget,
                currency = EXCLUDED.currency,
                cultural_traditions = EXCLUDED.cultural_traditions,
                religious_traditions = EXCLUDED.religious_traditions,
                planned_events = EXCLUDED.planned_events,
                wedding_style = EXCLUDED.wedding_style,
                venue_type = EXCLUDED.venue_type,
                special_requirements = EXCLUDED.special_requirements,
                updated_at = NOW()
        "#;

        sqlx::query(query)
            .bind(user_id)
            .bind(details.partner_one_name.as_deref().unwrap_or(""))
            .bind(details.partner_two_name.as_deref().unwrap_or(""))
            .bind(&details.wedding_location)
            .bind(details.wedding_date)
            .bind(details.guest_count.as_deref().unwrap_or(""))
            .bind(details.budget)
            .bind(details.currency.as_deref().unwrap_or("GBP"))
            .bind(serde_json::json!(details.cultural_traditions))
            .bind(serde_json::json!(details.religious_traditions))
            .bind(serde_json::json!(details.planned_events))
            .bind(&details.wedding_style)
            .bind(&details.venue_type)
            .bind(&details.special_requirements)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved wedding details for user {}", user_id);

        self.get_wedding_details(user_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Wedding details for user {}", user_id)))
    }

    // ----- budget -----

    pub async fn get_budget(&self, user_id: &str) -> Result<Option<Budget>, StoreError> {
        let budget_row = sqlx::query(
            r#"
            SELECT id, user_id, name, total_budget, currency
            FROM budgets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let budget_row = match budget_row {
            Some(row) => row,
            None => return Ok(None),
        };
        let budget_id: Uuid = budget_row.get("id");

        let item_rows = sqlx::query(
            r#"
            SELECT id, category, item, estimated_cost, actual_cost, is_paid, priority, notes
            FROM budget_items
            WHERE budget_id = $1
            ORDER BY category ASC
            "#,
        )
        .bind(budget_id)
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows
            .iter()
            .map(|row| BudgetItem {
                id: row.get::<Uuid, _>("id").to_string(),
                category: row.get("category"),
                item: row.get("item"),
                estimated_cost: row.get("estimated_cost"),
                actual_cost: row.get("actual_cost"),
                is_paid: row.get("is_paid"),
                priority: priority_from(&row.get::<String, _>("priority")),
                notes: row.get("notes"),
            })
            .collect();

        Ok(Some(Budget {
            id: budget_id.to_string(),
            user_id: budget_row.get("user_id"),
            name: budget_row.get("name"),
            total_budget: budget_row.get("total_budget"),
            currency: budget_row.get("currency"),
            items,
        }))
    }

    /// Replace-all save of the user's budget and items
    pub async fn save_budget(
        &self,
        user_id: &str,
        request: &SaveBudgetRequest,
    ) -> Result<Budget, StoreError> {
        let budget_id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO budgets (id, user_id, name, total_budget, currency)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id)
            DO UPDATE SET
                total_budget = EXCLUDED.total_budget,
                currency = EXCLUDED.currency
            "#,
        )
        .bind(budget_id)
        .bind(user_id)
        .bind("My Wedding Budget")
        .bind(request.total_budget)
        .bind(request.currency.as_deref().unwrap_or("GBP"))
        .execute(&self.pool)
        .await?;

        // The upsert may have kept an existing row id
        let stored_id: Uuid = sqlx::query("SELECT id FROM budgets WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?
            .get("id");

        sqlx::query("DELETE FROM budget_items WHERE budget_id = $1")
            .bind(stored_id)
            .execute(&self.pool)
            .await?;

        for item in &request.items {
            sqlx::query(
                r#"
                INSERT INTO budget_items
                    (id, budget_id, category, item, estimated_cost, actual_cost, is_paid, priority, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(stored_id)
            .bind(&item.category)
            .bind(&item.item)
            .bind(item.estimated_cost)
            .bind(item.actual_cost)
            .bind(item.is_paid)
            .bind(item.priority.as_deref().unwrap_or("medium"))
            .bind(&item.notes)
            .execute(&self.pool)
            .await?;
        }

        tracing::debug!(
            "Saved budget for user {} ({} items)",
            user_id,
            request.items.len()
        );

        self.get_budget(user_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Budget for user {}", user_id)))
    }

    // ----- checklists -----

    pub async fn get_checklists(&self, user_id: &str) -> Result<Vec<Checklist>, StoreError> {
        let checklist_rows = sqlx::query(
            r#"
            SELECT id, user_id, name, category
            FROM checklists
            WHERE user_id = $1
            ORDER BY category ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut checklists = Vec::with_capacity(checklist_rows.len());
        for row in checklist_rows {
            let checklist_id: Uuid = row.get("id");

            let item_rows = sqlx::query(
                r#"
                SELECT id, title, description, is_completed, category, importance
                FROM checklist_items
                WHERE checklist_id = $1
                ORDER BY created_at ASC
                "#,
            )
            .bind(checklist_id)
            .fetch_all(&self.pool)
            .await?;

            let items = item_rows
                .iter()
                .map(|item| ChecklistItem {
                    id: item.get::<Uuid, _>("id").to_string(),
                    title: item.get("title"),
                    description: item.get("description"),
                    is_completed: item.get("is_completed"),
                    category: item.get("category"),
                    importance: priority_from(&item.get::<String, _>("importance")),
                })
                .collect();

            checklists.push(Checklist {
                id: checklist_id.to_string(),
                user_id: row.get("user_id"),
                name: row.get("name"),
                category: row.get("category"),
                items,
            });
        }

        Ok(checklists)
    }

    /// Replace-all save of the user's checklists
    pub async fn save_checklists(
        &self,
        user_id: &str,
        request: &SaveChecklistsRequest,
    ) -> Result<Vec<Checklist>, StoreError> {
        sqlx::query("DELETE FROM checklists WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        for checklist in &request.checklists {
            let checklist_id = Uuid::new_v4();
            sqlx::query(
                "INSERT INTO checklists (id, user_id, name, category) VALUES ($1, $2, $3, $4)",
            )
            .bind(checklist_id)
            .bind(user_id)
            .bind(&checklist.name)
            .bind(&checklist.category)
            .execute(&self.pool)
            .await?;

            for item in &checklist.items {
                sqlx::query(
                    r#"
                    INSERT INTO checklist_items
                        (id, checklist_id, title, description, is_completed, category, importance)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(checklist_id)
                .bind(&item.title)
                .bind(&item.description)
                .bind(item.is_completed)
                .bind(&item.category)
                .bind(item.importance.as_deref().unwrap_or("medium"))
                .execute(&self.pool)
                .await?;
            }
        }

        tracing::debug!(
            "Saved {} checklists for user {}",
            request.checklists.len(),
            user_id
        );

        self.get_checklists(user_id).await
    }

    // ----- timeline -----

    pub async fn get_timeline(&self, user_id: &str) -> Result<Option<Timeline>, StoreError> {
        let timeline_row = sqlx::query(
            r#"
            SELECT id, user_id, name, wedding_date
            FROM timelines
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let timeline_row = match timeline_row {
            Some(row) => row,
            None => return Ok(None),
        };
        let timeline_id: Uuid = timeline_row.get("id");

        let task_rows = sqlx::query(
            r#"
            SELECT id, title, description, due_date, is_completed, category, priority
            FROM timeline_tasks
            WHERE timeline_id = $1
            ORDER BY due_date ASC
            "#,
        )
        .bind(timeline_id)
        .fetch_all(&self.pool)
        .await?;

        let tasks = task_rows
            .iter()
            .map(|row| TimelineTask {
                id: row.get::<Uuid, _>("id").to_string(),
                title: row.get("title"),
                description: row.get("description"),
                due_date: row.get("due_date"),
                is_completed: row.get("is_completed"),
                category: row.get("category"),
                priority: priority_from(&row.get::<String, _>("priority")),
            })
            .collect();

        Ok(Some(Timeline {
            id: timeline_id.to_string(),
            user_id: timeline_row.get("user_id"),
            name: timeline_row.get("name"),
            wedding_date: timeline_row.get("wedding_date"),
            tasks,
        }))
    }

    /// Replace-all save of the user's timeline and tasks
    pub async fn save_timeline(
        &self,
        user_id: &str,
        request: &SaveTimelineRequest,
    ) -> Result<Timeline, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO timelines (id, user_id, name, wedding_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET
                name = EXCLUDED.name,
                wedding_date = EXCLUDED.wedding_date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(request.name.as_deref().unwrap_or("My Wedding Timeline"))
        .bind(request.wedding_date)
        .execute(&self.pool)
        .await?;

        let timeline_id: Uuid = sqlx::query("SELECT id FROM timelines WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?
            .get("id");

        sqlx::query("DELETE FROM timeline_tasks WHERE timeline_id = $1")
            .bind(timeline_id)
            .execute(&self.pool)
            .await?;

        for task in &request.tasks {
            sqlx::query(
                r#"
                INSERT INTO timeline_tasks
                    (id, timeline_id, title, description, due_date, is_completed, category, priority)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(timeline_id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.due_date)
            .bind(task.is_completed)
            .bind(task.category.as_deref().unwrap_or("Custom"))
            .bind(task.priority.as_deref().unwrap_or("medium"))
            .execute(&self.pool)
            .await?;
        }

        tracing::debug!(
            "Saved timeline for user {} ({} tasks)",
            user_id,
            request.tasks.len()
        );

        self.get_timeline(user_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Timeline for user {}", user_id)))
    }
}

fn priority_from(value: &str) -> Priority {
    Priority::parse(value).unwrap_or_default()
}

fn string_list(row: &sqlx::postgres::PgRow, column: &str) -> Vec<String> {
    let value: serde_json::Value = row.get(column);
    serde_json::from_value(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parsing_defaults_to_medium() {
        assert_eq!(priority_from("high"), Priority::High);
        assert_eq!(priority_from("HIGH"), Priority::High);
        assert_eq!(priority_from("whatever"), Priority::Medium);
    }
}
