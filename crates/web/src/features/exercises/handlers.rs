use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::exercise::LastSessionResponse};

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises/{name}/last-session",
    params(
        ("name" = String, Path, description = "Exercise name, case-insensitive")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sets from the most recent session of this exercise", body = LastSessionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No previous session found for this exercise")
    ),
    tag = "exercises"
)]
pub async fn get_last_session(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let last_session = services::get_last_session(db.pool(), user_id, &name).await?;

    Ok(Json(last_session).into_response())
}
