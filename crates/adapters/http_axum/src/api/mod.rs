//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod index;

use axum::Router;
use axum::routing::get;

use mockfleet_app::ports::{DeviceCatalog, RandomSource};

use crate::state::AppState;

/// Build the API router.
///
/// `/iot_objects/by_client/{client}` is a static prefix, so it takes
/// precedence over the `/iot_objects/{id}` capture.
pub fn routes<C, R>() -> Router<AppState<C, R>>
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::welcome))
        .route("/iot_objects", get(devices::list::<C, R>))
        .route(
            "/iot_objects/by_client/{client}",
            get(devices::by_client::<C, R>),
        )
        .route("/iot_objects/{id}", get(devices::get::<C, R>))
        .route("/iot_objects/{id}/history", get(devices::history::<C, R>))
}
