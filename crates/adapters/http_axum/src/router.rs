//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use mockfleet_app::ports::{DeviceCatalog, RandomSource};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, R>(state: AppState<C, R>) -> Router
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<C, R>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
