use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::get_last_session;
use crate::middleware::auth::{AuthVerifier, require_auth};

pub fn routes(auth: AuthVerifier) -> Router<Database> {
    Router::new()
        .route("/:name/last-session", get(get_last_session))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
