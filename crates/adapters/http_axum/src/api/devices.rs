//! JSON REST handlers for devices and their synthetic readings.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use mockfleet_app::ports::{DeviceCatalog, RandomSource};
use mockfleet_domain::device::Device;
use mockfleet_domain::reading::{DeviceHistory, LiveReading};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the live reading endpoint.
pub enum GetResponse {
    Ok(Json<LiveReading>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<DeviceHistory>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /iot_objects`
pub async fn list<C, R>(State(state): State<AppState<C, R>>) -> ListResponse
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.device_service.list_devices()))
}

/// `GET /iot_objects/:id`
pub async fn get<C, R>(
    State(state): State<AppState<C, R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    let reading = state.telemetry_service.live_reading(&id)?;
    Ok(GetResponse::Ok(Json(reading)))
}

/// `GET /iot_objects/:id/history`
pub async fn history<C, R>(
    State(state): State<AppState<C, R>>,
    Path(id): Path<String>,
) -> Result<HistoryResponse, ApiError>
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    let history = state.telemetry_service.history(&id)?;
    Ok(HistoryResponse::Ok(Json(history)))
}

/// `GET /iot_objects/by_client/:client`
pub async fn by_client<C, R>(
    State(state): State<AppState<C, R>>,
    Path(client): Path<String>,
) -> Result<ListResponse, ApiError>
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    let devices = state.device_service.list_by_client(&client)?;
    Ok(ListResponse::Ok(Json(devices)))
}
