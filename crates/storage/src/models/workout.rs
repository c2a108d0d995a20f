use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A logged workout session. Exercises and sets live in their own tables and
/// are attached when a detailed view is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub date: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: i32,
    /// Client-precomputed sum of weight * reps over the whole session.
    pub total_volume: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_name: String,
    pub order_index: i32,
}

/// A single set. Immutable once logged; `order_index` is display order only
/// and never affects aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutSet {
    pub id: Uuid,
    pub workout_exercise_id: Uuid,
    pub weight: f64,
    pub reps: i32,
    pub completed: bool,
    pub order_index: i32,
}

/// An exercise with its sets, as loaded from a workout.
#[derive(Debug, Clone)]
pub struct ExerciseDetail {
    pub exercise: WorkoutExercise,
    pub sets: Vec<WorkoutSet>,
}

/// A workout with its full exercise/set tree. This is the unit the metrics
/// engine consumes.
#[derive(Debug, Clone)]
pub struct WorkoutDetail {
    pub workout: Workout,
    pub exercises: Vec<ExerciseDetail>,
}
