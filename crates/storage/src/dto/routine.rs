use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Routine, RoutineExercise};

/// Request payload for creating a custom routine
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoutineRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 64))]
    pub level: Option<String>,

    #[validate(range(min = 0, message = "Duration must be non-negative"))]
    pub duration: Option<i32>,

    #[serde(default)]
    pub exercise_names: Vec<String>,
}

/// Response containing a routine with its ordered exercise names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub duration: Option<i32>,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<String>,
}

impl RoutineResponse {
    pub fn from_parts(routine: Routine, exercises: Vec<RoutineExercise>) -> Self {
        Self {
            id: routine.id,
            user_id: routine.user_id,
            name: routine.name,
            description: routine.description,
            level: routine.level,
            duration: routine.duration,
            is_custom: routine.is_custom,
            created_at: routine.created_at,
            exercises: exercises.into_iter().map(|e| e.exercise_name).collect(),
        }
    }
}
