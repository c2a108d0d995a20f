use axum::{Router, middleware, routing::{delete, get}};
use storage::Database;

use super::handlers::{create_routine, delete_routine, list_routines};
use crate::middleware::auth::{AuthVerifier, require_auth};

pub fn routes(auth: AuthVerifier) -> Router<Database> {
    Router::new()
        .route("/", get(list_routines).post(create_routine))
        .route("/:id", delete(delete_routine))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
