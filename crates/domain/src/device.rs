//! Device — a catalog record describing one mocked IoT device.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::metric::Metric;

/// The kind of a device, which decides the metrics it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    TemperatureSensor,
    HumiditySensor,
    ActivityTracker,
}

impl DeviceKind {
    /// Every known device kind.
    pub const ALL: [Self; 3] = [
        Self::TemperatureSensor,
        Self::HumiditySensor,
        Self::ActivityTracker,
    ];

    /// Metrics populated in a live reading for this kind.
    ///
    /// Battery level is reported by every kind.
    #[must_use]
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Self::TemperatureSensor => &[Metric::Temperature, Metric::BatteryLevel],
            Self::HumiditySensor => &[Metric::Humidity, Metric::BatteryLevel],
            Self::ActivityTracker => &[Metric::ActivityLevel, Metric::BatteryLevel],
        }
    }

    /// Whether a live reading for this kind carries `metric`.
    #[must_use]
    pub fn measures(self, metric: Metric) -> bool {
        self.metrics().contains(&metric)
    }

    /// Metric whose values make up this kind's history.
    ///
    /// Only temperature sensors report temperature history; every other kind
    /// reports humidity-range values, activity trackers included.
    #[must_use]
    pub fn history_metric(self) -> Metric {
        match self {
            Self::TemperatureSensor => Metric::Temperature,
            Self::HumiditySensor | Self::ActivityTracker => Metric::Humidity,
        }
    }

    /// Wire name of the kind, as used in the `type` JSON field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TemperatureSensor => "temperature_sensor",
            Self::HumiditySensor => "humidity_sensor",
            Self::ActivityTracker => "activity_tracker",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mocked device owned by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
}

impl Device {
    /// Create a device record.
    #[must_use]
    pub fn new(id: impl Into<String>, client: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            client: client.into(),
            kind,
        }
    }

    /// Check the invariants that hold for every catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDeviceId`] or
    /// [`ValidationError::EmptyClient`] when a field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyDeviceId);
        }
        if self.client.trim().is_empty() {
            return Err(ValidationError::EmptyClient(self.id.clone()));
        }
        Ok(())
    }
}
