use sqlx::PgPool;
use storage::{
    dto::routine::{CreateRoutineRequest, RoutineResponse},
    error::Result,
    repository::routine::RoutineRepository,
};
use uuid::Uuid;

/// Built-in routines plus the user's custom ones
pub async fn list_routines(pool: &PgPool, user_id: Uuid) -> Result<Vec<RoutineResponse>> {
    let repo = RoutineRepository::new(pool);
    let routines = repo.list_for_user(user_id).await?;

    Ok(routines
        .into_iter()
        .map(|(routine, exercises)| RoutineResponse::from_parts(routine, exercises))
        .collect())
}

/// Create a custom routine owned by the user
pub async fn create_routine(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateRoutineRequest,
) -> Result<RoutineResponse> {
    let repo = RoutineRepository::new(pool);
    let (routine, exercises) = repo.create(user_id, req).await?;

    Ok(RoutineResponse::from_parts(routine, exercises))
}

/// Delete a custom routine the user owns
pub async fn delete_routine(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = RoutineRepository::new(pool);
    repo.delete(user_id, id).await
}
