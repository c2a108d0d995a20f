use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_workout, delete_workout, list_workouts, update_workout};
use crate::middleware::auth::{AuthVerifier, require_auth};

pub fn routes(auth: AuthVerifier) -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", put(update_workout).delete(delete_workout))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
