use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{get_aggregated_stats, get_muscle_distribution, get_overview};
use crate::middleware::auth::{AuthVerifier, require_auth};

pub fn routes(auth: AuthVerifier) -> Router<Database> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/muscle-distribution", get(get_muscle_distribution))
        .route("/aggregated", get(get_aggregated_stats))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
