use sqlx::PgPool;
use storage::{
    dto::exercise::LastSessionResponse,
    error::Result,
    models::NormalizedExerciseName,
    repository::workout::WorkoutRepository,
};
use uuid::Uuid;

/// The most recent logged session for an exercise, for prefilling set
/// entries
pub async fn get_last_session(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<LastSessionResponse> {
    let repo = WorkoutRepository::new(pool);
    let normalized = NormalizedExerciseName::new(name);
    let (exercise_name, sets) = repo.last_session(user_id, normalized.key()).await?;

    Ok(LastSessionResponse::from_parts(exercise_name, sets))
}
