use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::WorkoutSet;

/// The most recent logged session for a single exercise, used to prefill
/// the next session's set entries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LastSessionResponse {
    pub exercise_name: String,
    pub sets: Vec<LastSessionSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LastSessionSet {
    pub id: Uuid,
    pub weight: f64,
    pub reps: i32,
    pub completed: bool,
}

impl LastSessionResponse {
    pub fn from_parts(exercise_name: String, sets: Vec<WorkoutSet>) -> Self {
        Self {
            exercise_name,
            sets: sets
                .into_iter()
                .map(|s| LastSessionSet {
                    id: s.id,
                    weight: s.weight,
                    reps: s.reps,
                    completed: s.completed,
                })
                .collect(),
        }
    }
}
