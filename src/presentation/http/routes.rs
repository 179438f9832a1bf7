//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::FromRef,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers::{self, records};
use crate::application::services::RecordService;
use crate::domain::{BreakSession, Employee, Meeting, Record, Task, WorkDay, WorkSession};
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(record_routes::<Employee>())
        .merge(record_routes::<WorkDay>())
        .merge(record_routes::<Meeting>())
        .merge(record_routes::<BreakSession>())
        .merge(record_routes::<WorkSession>())
        .merge(record_routes::<Task>())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// The five CRUD routes for one record type under `/api/{resource}`
fn record_routes<R>() -> Router<AppState>
where
    R: Record,
    RecordService<R>: FromRef<AppState>,
{
    let collection = format!("/api/{}", R::RESOURCE);
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(&collection, get(records::list::<R>).post(records::create::<R>))
        .route(
            &item,
            get(records::get::<R>)
                .put(records::update::<R>)
                .delete(records::delete::<R>),
        )
}
