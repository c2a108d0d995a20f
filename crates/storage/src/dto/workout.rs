use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ExerciseDetail, WorkoutDetail};

/// Request payload for logging a workout. The same shape is used for updates,
/// which replace the workout's exercises and sets wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    pub date: DateTime<Utc>,

    #[validate(range(min = 0, message = "Duration must be non-negative"))]
    #[serde(default)]
    pub duration: i32,

    #[validate(range(min = 0.0, message = "Total volume must be non-negative"))]
    #[serde(default)]
    pub total_volume: f64,

    #[validate(nested)]
    #[serde(default)]
    pub exercises: Vec<WorkoutExerciseInput>,
}

/// Updates carry the full replacement state, never a partial merge.
pub type UpdateWorkoutRequest = CreateWorkoutRequest;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutExerciseInput {
    #[validate(length(min = 1, max = 255, message = "Exercise name is required"))]
    pub name: String,

    #[validate(nested)]
    #[serde(default)]
    pub sets: Vec<WorkoutSetInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutSetInput {
    #[validate(range(min = 0.0, message = "Weight must be non-negative"))]
    #[serde(default)]
    pub weight: f64,

    #[validate(range(min = 0, message = "Reps must be non-negative"))]
    #[serde(default)]
    pub reps: i32,

    #[serde(default)]
    pub completed: bool,
}

/// Response containing a workout with its full exercise/set tree
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub date: DateTime<Utc>,
    pub duration: i32,
    pub total_volume: f64,
    pub exercises: Vec<WorkoutExerciseResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutExerciseResponse {
    pub id: Uuid,
    pub exercise_name: String,
    pub order_index: i32,
    pub sets: Vec<WorkoutSetResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSetResponse {
    pub id: Uuid,
    pub weight: f64,
    pub reps: i32,
    pub completed: bool,
    pub order_index: i32,
}

impl From<WorkoutDetail> for WorkoutResponse {
    fn from(detail: WorkoutDetail) -> Self {
        Self {
            id: detail.workout.id,
            name: detail.workout.name,
            date: detail.workout.date,
            duration: detail.workout.duration,
            total_volume: detail.workout.total_volume,
            exercises: detail
                .exercises
                .into_iter()
                .map(WorkoutExerciseResponse::from)
                .collect(),
        }
    }
}

impl From<ExerciseDetail> for WorkoutExerciseResponse {
    fn from(detail: ExerciseDetail) -> Self {
        Self {
            id: detail.exercise.id,
            exercise_name: detail.exercise.exercise_name,
            order_index: detail.exercise.order_index,
            sets: detail
                .sets
                .into_iter()
                .map(|s| WorkoutSetResponse {
                    id: s.id,
                    weight: s.weight,
                    reps: s.reps,
                    completed: s.completed,
                    order_index: s.order_index,
                })
                .collect(),
        }
    }
}
