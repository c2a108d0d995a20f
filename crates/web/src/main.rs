use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::AuthVerifier;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::update_workout,
        features::workouts::handlers::delete_workout,
        features::routines::handlers::list_routines,
        features::routines::handlers::create_routine,
        features::routines::handlers::delete_routine,
        features::exercises::handlers::get_last_session,
        features::exercise_prs::handlers::list_exercise_prs,
        features::exercise_prs::handlers::get_exercise_pr,
        features::exercise_prs::handlers::get_pr_history,
        features::exercise_prs::handlers::upsert_exercise_pr,
        features::stats::handlers::get_overview,
        features::stats::handlers::get_muscle_distribution,
        features::stats::handlers::get_aggregated_stats,
    ),
    components(
        schemas(
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::WorkoutExerciseInput,
            storage::dto::workout::WorkoutSetInput,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::WorkoutExerciseResponse,
            storage::dto::workout::WorkoutSetResponse,
            storage::dto::routine::CreateRoutineRequest,
            storage::dto::routine::RoutineResponse,
            storage::dto::exercise::LastSessionResponse,
            storage::dto::exercise::LastSessionSet,
            storage::dto::exercise_pr::UpsertExercisePrRequest,
            storage::dto::exercise_pr::ExercisePrResponse,
            storage::dto::stats::OverviewResponse,
            storage::dto::stats::ChartPoint,
            storage::dto::stats::PrHistoryPoint,
        )
    ),
    tags(
        (name = "workouts", description = "Workout logging endpoints"),
        (name = "routines", description = "Routine template endpoints"),
        (name = "exercises", description = "Exercise history endpoints"),
        (name = "exercise-prs", description = "Personal record endpoints"),
        (name = "stats", description = "Derived statistics endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fitness tracking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let auth = AuthVerifier::new(&config.jwt_secret);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/workouts", features::workouts::routes(auth.clone()))
        .nest("/api/routines", features::routines::routes(auth.clone()))
        .nest("/api/exercises", features::exercises::routes(auth.clone()))
        .nest("/api/exercise-prs", features::exercise_prs::routes(auth.clone()))
        .nest("/api/stats", features::stats::routes(auth))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app).await?;

    Ok(())
}
