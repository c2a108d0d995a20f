use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Personal-record high-water marks for one (user, exercise) pair.
///
/// Every numeric field is monotone: an update stores the elementwise maximum
/// of the existing row and the newly observed session statistics, so values
/// never decrease once set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExercisePr {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_name: String,
    pub heaviest_weight: f64,
    pub best_1rm: f64,
    pub best_set_volume: f64,
    pub best_session_volume: f64,
    pub updated_at: DateTime<Utc>,
}
