use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::ExercisePr;

/// Request payload for a client-initiated PR upsert. Values merge into the
/// stored row via elementwise maximum, so a stale or low submission can
/// never lower an existing record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertExercisePrRequest {
    // Defaulted so an absent field reports as a validation failure rather
    // than a deserialization rejection.
    #[validate(length(min = 1, max = 255, message = "exercise_name is required"))]
    #[serde(default)]
    pub exercise_name: String,

    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub heaviest_weight: f64,

    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub best_1rm: f64,

    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub best_set_volume: f64,

    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub best_session_volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExercisePrResponse {
    pub id: Uuid,
    pub exercise_name: String,
    pub heaviest_weight: f64,
    pub best_1rm: f64,
    pub best_set_volume: f64,
    pub best_session_volume: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<ExercisePr> for ExercisePrResponse {
    fn from(pr: ExercisePr) -> Self {
        Self {
            id: pr.id,
            exercise_name: pr.exercise_name,
            heaviest_weight: pr.heaviest_weight,
            best_1rm: pr.best_1rm,
            best_set_volume: pr.best_set_volume,
            best_session_volume: pr.best_session_volume,
            updated_at: pr.updated_at,
        }
    }
}
