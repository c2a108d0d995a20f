use std::collections::BTreeMap;

use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::stats::{ChartPoint, OverviewResponse},
    error::Result,
    repository::workout::WorkoutRepository,
    services::metrics::{self, ChartMetric, RangeFilter},
};
use uuid::Uuid;

/// Dashboard overview numbers
pub async fn get_overview(pool: &PgPool, user_id: Uuid) -> Result<OverviewResponse> {
    let repo = WorkoutRepository::new(pool);
    let workouts = repo.list_meta(user_id).await?;

    Ok(metrics::overview(
        workouts.iter().map(|w| (&w.date, w.total_volume)),
        Utc::now(),
    ))
}

/// Muscle-group load distribution over the requested range
pub async fn get_muscle_distribution(
    pool: &PgPool,
    user_id: Uuid,
    range: Option<&str>,
) -> Result<BTreeMap<String, f64>> {
    let repo = WorkoutRepository::new(pool);
    let workouts = repo.list_detailed(user_id).await?;

    Ok(metrics::muscle_distribution(
        &workouts,
        RangeFilter::parse(range),
        Utc::now(),
    ))
}

/// Chart series for the requested metric and range. A missing metric
/// defaults to Volume; an unrecognized one yields zero-valued buckets.
pub async fn get_aggregated_stats(
    pool: &PgPool,
    user_id: Uuid,
    metric: Option<&str>,
    range: Option<&str>,
) -> Result<Vec<ChartPoint>> {
    let repo = WorkoutRepository::new(pool);
    let workouts = repo.list_detailed(user_id).await?;

    let metric = match metric {
        None => Some(ChartMetric::Volume),
        Some(raw) => ChartMetric::parse(raw),
    };

    Ok(metrics::aggregated_chart(
        &workouts,
        metric,
        RangeFilter::parse(range),
        Utc::now(),
    ))
}
