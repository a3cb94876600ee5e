//! HTTP API for the rep tracker.
//!
//! Provides endpoints to save workouts, set daily goals, and read the
//! same-day leaderboard, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use workout_store::WorkoutStore;

use routes::AppState;

/// Headers browsers may send on cross-origin requests.
const ALLOWED_HEADERS: [HeaderName; 9] = [
    HeaderName::from_static("x-csrf-token"),
    HeaderName::from_static("x-requested-with"),
    header::ACCEPT,
    HeaderName::from_static("accept-version"),
    header::CONTENT_LENGTH,
    HeaderName::from_static("content-md5"),
    header::CONTENT_TYPE,
    header::DATE,
    HeaderName::from_static("x-api-version"),
];

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers(ALLOWED_HEADERS)
}

/// Creates the Axum application router with all routes and shared state.
///
/// The `/api/*` paths mirror the names used by the web client.
pub fn create_app<S: WorkoutStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/workouts", post(routes::workouts::save::<S>))
        .route("/api/save_workout", post(routes::workouts::save::<S>))
        .route("/goals", post(routes::goals::update::<S>))
        .route("/api/update_goal", post(routes::goals::update::<S>))
        .route("/leaderboard", get(routes::leaderboard::today::<S>))
        .route("/api/get_leaderboard", get(routes::leaderboard::today::<S>))
        .with_state(state)
        .merge(metrics_router)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state over a store.
pub fn create_state<S: WorkoutStore + Clone + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
