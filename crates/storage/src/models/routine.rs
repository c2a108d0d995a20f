use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A workout template. Built-in routines have no owner; custom routines
/// belong to the user who created them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Routine {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub level: Option<String>,
    /// Estimated duration in minutes.
    pub duration: Option<i32>,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoutineExercise {
    pub id: Uuid,
    pub routine_id: Uuid,
    pub exercise_name: String,
    pub order_index: i32,
}
