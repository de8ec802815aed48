//! Telemetry service — synthetic live readings and history for catalog devices.

use chrono::TimeDelta;
use mockfleet_domain::error::NotFoundError;
use mockfleet_domain::metric::{HISTORY_LEN, HISTORY_STEP_MINUTES};
use mockfleet_domain::reading::{DeviceHistory, HistoryPoint, LiveReading};
use mockfleet_domain::time::now;

use crate::ports::{DeviceCatalog, RandomSource};
use crate::sampler::{sample_history_value, sample_metrics};

/// Application service generating readings on demand.
///
/// Holds no mutable state: every call draws fresh values from `rng`.
pub struct TelemetryService<C, R> {
    catalog: C,
    rng: R,
}

impl<C: DeviceCatalog, R: RandomSource> TelemetryService<C, R> {
    /// Create a new service backed by the given catalog and random source.
    pub fn new(catalog: C, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Generate a live reading for the device `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Device`] when no device has exactly this id.
    #[tracing::instrument(skip(self))]
    pub fn live_reading(&self, id: &str) -> Result<LiveReading, NotFoundError> {
        let device = self.catalog.require(id)?;
        Ok(LiveReading {
            device: device.clone(),
            metrics: sample_metrics(device.kind, &self.rng),
            timestamp: now(),
        })
    }

    /// Generate the recent history of the device `id`.
    ///
    /// Point `i` is stamped `i` steps before a single reference instant, so
    /// points are ordered from most to least recent.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Device`] when no device has exactly this id.
    #[tracing::instrument(skip(self))]
    pub fn history(&self, id: &str) -> Result<DeviceHistory, NotFoundError> {
        let device = self.catalog.require(id)?;
        let step = TimeDelta::minutes(HISTORY_STEP_MINUTES);
        let mut timestamp = now();
        let history = (0..HISTORY_LEN)
            .map(|_| {
                let point = HistoryPoint {
                    timestamp,
                    value: sample_history_value(device.kind, &self.rng),
                };
                timestamp -= step;
                point
            })
            .collect();
        Ok(DeviceHistory {
            device: device.clone(),
            history,
        })
    }
}
