//! Welcome endpoint pointing newcomers at the device list.

use axum::Json;
use serde::Serialize;

/// Greeting shown at the root of the API.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the IoT API. Explore the available endpoints to retrieve data.";

/// Where to start exploring.
pub const WELCOME_HINT: &str = "Start with /iot_objects to see the available devices.";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub hint: &'static str,
}

/// `GET /`
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE,
        hint: WELCOME_HINT,
    })
}
