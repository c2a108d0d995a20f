use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise_pr::{ExercisePrResponse, UpsertExercisePrRequest},
    dto::stats::PrHistoryPoint,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercise-prs",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All PR rows for the caller, alphabetical", body = Vec<ExercisePrResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercise-prs"
)]
pub async fn list_exercise_prs(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let prs = services::list_exercise_prs(db.pool(), user_id).await?;

    let response: Vec<ExercisePrResponse> =
        prs.into_iter().map(ExercisePrResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercise-prs/{name}",
    params(
        ("name" = String, Path, description = "Exercise name, case-insensitive")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "PR row for the exercise", body = ExercisePrResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No PRs recorded for this exercise")
    ),
    tag = "exercise-prs"
)]
pub async fn get_exercise_pr(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let pr = services::get_exercise_pr(db.pool(), user_id, &name).await?;

    Ok(Json(ExercisePrResponse::from(pr)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercise-prs/{name}/history",
    params(
        ("name" = String, Path, description = "Exercise name, case-insensitive")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-session PR progression, oldest first", body = Vec<PrHistoryPoint>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercise-prs"
)]
pub async fn get_pr_history(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let history = services::get_pr_history(db.pool(), user_id, &name).await?;

    Ok(Json(history).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercise-prs",
    request_body = UpsertExercisePrRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Merged PR row", body = ExercisePrResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercise-prs"
)]
pub async fn upsert_exercise_pr(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<UpsertExercisePrRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let pr = services::upsert_exercise_pr(db.pool(), user_id, &req).await?;

    Ok(Json(ExercisePrResponse::from(pr)).into_response())
}
