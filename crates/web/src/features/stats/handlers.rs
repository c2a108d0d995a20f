use axum::{
    Extension, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::stats::{AggregatedQuery, ChartPoint, OverviewResponse, RangeQuery},
};

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats/overview",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workouts this week, lifetime volume and current streak", body = OverviewResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stats"
)]
pub async fn get_overview(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let overview = services::get_overview(db.pool(), user_id).await?;

    Ok(Json(overview).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stats/muscle-distribution",
    params(RangeQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Estimated muscle-group load over the range"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stats"
)]
pub async fn get_muscle_distribution(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let distribution =
        services::get_muscle_distribution(db.pool(), user_id, query.range.as_deref()).await?;

    Ok(Json(distribution).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stats/aggregated",
    params(AggregatedQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fixed-shape chart series for the metric and range", body = Vec<ChartPoint>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "stats"
)]
pub async fn get_aggregated_stats(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<AggregatedQuery>,
) -> Result<Response, WebError> {
    let points = services::get_aggregated_stats(
        db.pool(),
        user_id,
        query.metric.as_deref(),
        query.range.as_deref(),
    )
    .await?;

    Ok(Json(points).into_response())
}
