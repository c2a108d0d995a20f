use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::routine::{CreateRoutineRequest, RoutineResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/routines",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Built-in routines plus the caller's custom ones", body = Vec<RoutineResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "routines"
)]
pub async fn list_routines(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let routines = services::list_routines(db.pool(), user_id).await?;

    Ok(Json(routines).into_response())
}

#[utoipa::path(
    post,
    path = "/api/routines",
    request_body = CreateRoutineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Custom routine created", body = RoutineResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "routines"
)]
pub async fn create_routine(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateRoutineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let routine = services::create_routine(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(routine)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/routines/{id}",
    params(
        ("id" = Uuid, Path, description = "Routine id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Routine deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Routine not found or not owned by the caller")
    ),
    tag = "routines"
)]
pub async fn delete_routine(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_routine(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
