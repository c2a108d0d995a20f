use sqlx::PgPool;
use storage::{
    dto::workout::CreateWorkoutRequest,
    error::Result,
    models::WorkoutDetail,
    repository::{exercise_pr::ExercisePrRepository, workout::WorkoutRepository},
    services::metrics,
};
use uuid::Uuid;

/// All workouts for the user, most recent first
pub async fn list_workouts(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutDetail>> {
    let repo = WorkoutRepository::new(pool);
    repo.list_detailed(user_id).await
}

/// Log a workout, then fold its session statistics into the user's PRs
pub async fn create_workout(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateWorkoutRequest,
) -> Result<WorkoutDetail> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.create(user_id, req).await?;

    record_prs(pool, user_id, &workout).await?;

    Ok(workout)
}

/// Replace a workout wholesale, then reconsider PRs against the edited
/// state. Edits only ever raise records; the stored high-water marks keep
/// anything the previous version already achieved.
pub async fn update_workout(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    req: &CreateWorkoutRequest,
) -> Result<WorkoutDetail> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.update(user_id, id, req).await?;

    record_prs(pool, user_id, &workout).await?;

    Ok(workout)
}

pub async fn delete_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(user_id, id).await
}

async fn record_prs(pool: &PgPool, user_id: Uuid, workout: &WorkoutDetail) -> Result<()> {
    let pr_repo = ExercisePrRepository::new(pool);

    for candidate in metrics::pr_candidates(workout) {
        pr_repo
            .upsert_max(user_id, &candidate.name, &candidate.stats)
            .await?;
    }

    Ok(())
}
