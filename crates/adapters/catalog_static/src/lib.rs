//! # mockfleet-adapter-catalog-static
//!
//! In-memory implementation of the [`DeviceCatalog`] port.
//!
//! ## Reference fleet
//!
//! | Device | Client | Type |
//! |--------|--------|------|
//! | `device_1` | `client_1` | `temperature_sensor` |
//! | `device_2` | `client_1` | `humidity_sensor` |
//! | `device_3` | `client_2` | `activity_tracker` |
//! | `device_4` | `client_2` | `temperature_sensor` |
//! | `device_5` | `client_3` | `humidity_sensor` |
//! | `device_6` | `client_3` | `activity_tracker` |
//!
//! Every client owns at least two devices of different types.
//!
//! A different fleet can be loaded once at startup from a TOML file made of
//! `[[devices]]` tables with `id`, `client` and `type` keys. The catalog never
//! changes afterwards.
//!
//! ## Dependency rule
//!
//! Depends on `mockfleet-app` (port traits) and `mockfleet-domain` only.

mod error;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use mockfleet_app::ports::DeviceCatalog;
use mockfleet_domain::device::{Device, DeviceKind};
use mockfleet_domain::error::ValidationError;

pub use error::CatalogError;

/// Immutable list of devices, validated on construction.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    devices: Vec<Device>,
}

#[derive(Deserialize)]
struct CatalogFile {
    devices: Vec<Device>,
}

impl StaticCatalog {
    /// Build a catalog from `devices`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a device has a blank id or client, or
    /// if two devices share an id.
    pub fn new(devices: Vec<Device>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(devices.len());
        for device in &devices {
            device.validate()?;
            if !seen.insert(device.id.as_str()) {
                return Err(ValidationError::DuplicateDeviceId(device.id.clone()).into());
            }
        }
        Ok(Self { devices })
    }

    /// The built-in six-device fleet.
    #[must_use]
    pub fn reference() -> Self {
        use DeviceKind::{ActivityTracker, HumiditySensor, TemperatureSensor};

        let devices = [
            ("device_1", "client_1", TemperatureSensor),
            ("device_2", "client_1", HumiditySensor),
            ("device_3", "client_2", ActivityTracker),
            ("device_4", "client_2", TemperatureSensor),
            ("device_5", "client_3", HumiditySensor),
            ("device_6", "client_3", ActivityTracker),
        ]
        .into_iter()
        .map(|(id, client, kind)| Device::new(id, client, kind))
        .collect();

        Self { devices }
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML or unknown device
    /// types, and [`CatalogError::Domain`] for invariant violations.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.devices)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// the errors of [`StaticCatalog::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), devices = catalog.devices.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the catalog holds no device.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl DeviceCatalog for StaticCatalog {
    fn all(&self) -> &[Device] {
        &self.devices
    }
}
