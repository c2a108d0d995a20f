use sqlx::PgPool;
use storage::{
    dto::exercise_pr::UpsertExercisePrRequest,
    dto::stats::PrHistoryPoint,
    error::Result,
    models::{ExercisePr, NormalizedExerciseName},
    repository::{exercise_pr::ExercisePrRepository, workout::WorkoutRepository},
    services::metrics::{self, SessionStats},
};
use uuid::Uuid;

/// All PR rows for the user
pub async fn list_exercise_prs(pool: &PgPool, user_id: Uuid) -> Result<Vec<ExercisePr>> {
    let repo = ExercisePrRepository::new(pool);
    repo.list(user_id).await
}

/// Single PR row by exercise name
pub async fn get_exercise_pr(pool: &PgPool, user_id: Uuid, name: &str) -> Result<ExercisePr> {
    let repo = ExercisePrRepository::new(pool);
    repo.find(user_id, &NormalizedExerciseName::new(name)).await
}

/// Per-session progression for one exercise across all of the user's
/// workouts
pub async fn get_pr_history(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
) -> Result<Vec<PrHistoryPoint>> {
    let repo = WorkoutRepository::new(pool);
    let workouts = repo.list_detailed_ascending(user_id).await?;

    Ok(metrics::pr_history(&workouts, &NormalizedExerciseName::new(name)))
}

/// Client-initiated merge-upsert. The submitted values go through the same
/// GREATEST merge as engine-computed ones, so this can never lower a
/// stored record.
pub async fn upsert_exercise_pr(
    pool: &PgPool,
    user_id: Uuid,
    req: &UpsertExercisePrRequest,
) -> Result<ExercisePr> {
    let repo = ExercisePrRepository::new(pool);

    let stats = SessionStats {
        heaviest_weight: req.heaviest_weight,
        best_1rm: req.best_1rm,
        best_set_volume: req.best_set_volume,
        session_volume: req.best_session_volume,
    };

    repo.upsert_max(user_id, &NormalizedExerciseName::new(req.exercise_name.as_str()), &stats)
        .await
}
