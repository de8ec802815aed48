//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mockfleet_domain::error::NotFoundError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps a failed lookup to a `404` with an `{"error": ...}` body.
///
/// Catalog validation only happens at startup, so a lookup miss is the only
/// failure a request can produce.
pub struct ApiError(NotFoundError);

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::NOT_FOUND;
        tracing::debug!(error = ?self.0, %status, "request rejected");

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
