use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OverviewResponse {
    pub workouts_this_week: i64,
    pub total_volume: f64,
    pub streak: i64,
}

/// One labeled bucket of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One session's statistics for a single exercise, as reported by the PR
/// progression endpoint. These are the session's own values, not running
/// maxima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrHistoryPoint {
    pub date: DateTime<Utc>,
    pub heaviest_weight: f64,
    pub best_1rm: f64,
    pub best_set_volume: f64,
    pub session_volume: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RangeQuery {
    /// Time range: "week" (default) or "month"
    pub range: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AggregatedQuery {
    /// Chart metric: Volume (default), Reps, Sets or Duration
    pub metric: Option<String>,
    /// Time range: "week" (default) or "month"
    pub range: Option<String>,
}
