//! Catalog port — read-only access to the device records.

use std::sync::Arc;

use mockfleet_domain::device::Device;
use mockfleet_domain::error::NotFoundError;

/// The fixed set of devices served by the API.
///
/// Implementations are loaded once at startup and never change afterwards,
/// so every method borrows from `self`.
pub trait DeviceCatalog {
    /// Every device, in catalog order.
    fn all(&self) -> &[Device];

    /// Find the device whose id is exactly `id`.
    fn find(&self, id: &str) -> Option<&Device> {
        self.all().iter().find(|device| device.id == id)
    }

    /// Like [`DeviceCatalog::find`], but an unknown id is an error.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Device`] when no device has exactly this id.
    fn require(&self, id: &str) -> Result<&Device, NotFoundError> {
        self.find(id).ok_or_else(|| {
            tracing::debug!(id, "unknown device");
            NotFoundError::Device { id: id.to_string() }
        })
    }

    /// Devices owned by `client`, in catalog order.
    fn by_client(&self, client: &str) -> Vec<&Device> {
        self.all()
            .iter()
            .filter(|device| device.client == client)
            .collect()
    }
}

impl<T: DeviceCatalog + ?Sized> DeviceCatalog for Arc<T> {
    fn all(&self) -> &[Device] {
        (**self).all()
    }

    fn find(&self, id: &str) -> Option<&Device> {
        (**self).find(id)
    }

    fn by_client(&self, client: &str) -> Vec<&Device> {
        (**self).by_client(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfleet_domain::device::DeviceKind;

    struct VecCatalog(Vec<Device>);

    impl DeviceCatalog for VecCatalog {
        fn all(&self) -> &[Device] {
            &self.0
        }
    }

    fn catalog() -> VecCatalog {
        VecCatalog(vec![
            Device::new("a", "acme", DeviceKind::TemperatureSensor),
            Device::new("b", "globex", DeviceKind::HumiditySensor),
            Device::new("c", "acme", DeviceKind::ActivityTracker),
        ])
    }

    #[test]
    fn should_find_device_by_exact_id() {
        let catalog = catalog();
        assert_eq!(catalog.find("b").map(|d| d.client.as_str()), Some("globex"));
        assert!(catalog.find("B").is_none());
        assert!(catalog.find("b ").is_none());
    }

    #[test]
    fn should_require_known_device() {
        let catalog = catalog();
        assert_eq!(catalog.require("c").unwrap().kind, DeviceKind::ActivityTracker);
        assert_eq!(
            catalog.require("z"),
            Err(NotFoundError::Device {
                id: "z".to_string()
            })
        );
    }

    #[test]
    fn should_filter_by_client_in_catalog_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .by_client("acme")
            .into_iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn should_return_empty_for_unknown_client() {
        assert!(catalog().by_client("initech").is_empty());
    }

    #[test]
    fn should_delegate_through_arc() {
        let catalog = Arc::new(catalog());
        assert_eq!(catalog.all().len(), 3);
        assert!(catalog.find("c").is_some());
        assert!(catalog.require("a").is_ok());
        assert_eq!(catalog.by_client("globex").len(), 1);
    }
}
