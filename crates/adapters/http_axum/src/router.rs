//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use devhub_app::ports::DeviceRepository;

use crate::error::plain_text;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the device routes at the root, a `/health` probe, and a plain-text
/// 404 for anything else. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<DR>(state: AppState<DR>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<DR>())
        .fallback(page_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn page_not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, "404 page not found")
}
