//! Shared application state for axum handlers.

use std::sync::Arc;

use mockfleet_app::ports::{DeviceCatalog, RandomSource};
use mockfleet_app::services::device_service::DeviceService;
use mockfleet_app::services::telemetry_service::TelemetryService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog and random source to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C, R> {
    /// Catalog browsing service.
    pub device_service: Arc<DeviceService<C>>,
    /// Synthetic reading service.
    pub telemetry_service: Arc<TelemetryService<C, R>>,
}

impl<C, R> Clone for AppState<C, R> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            telemetry_service: Arc::clone(&self.telemetry_service),
        }
    }
}

impl<C, R> AppState<C, R>
where
    C: DeviceCatalog + Send + Sync + 'static,
    R: RandomSource + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<C>, telemetry_service: TelemetryService<C, R>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            telemetry_service: Arc::new(telemetry_service),
        }
    }
}
