use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{get_exercise_pr, get_pr_history, list_exercise_prs, upsert_exercise_pr};
use crate::middleware::auth::{AuthVerifier, require_auth};

pub fn routes(auth: AuthVerifier) -> Router<Database> {
    Router::new()
        .route("/", get(list_exercise_prs).post(upsert_exercise_pr))
        .route("/:name/history", get(get_pr_history))
        .route("/:name", get(get_exercise_pr))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
