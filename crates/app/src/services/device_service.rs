//! Device service — use-cases for browsing the catalog.

use mockfleet_domain::device::Device;
use mockfleet_domain::error::NotFoundError;

use crate::ports::DeviceCatalog;

/// Application service for catalog lookups.
pub struct DeviceService<C> {
    catalog: C,
}

impl<C: DeviceCatalog> DeviceService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List all devices in catalog order.
    pub fn list_devices(&self) -> Vec<Device> {
        self.catalog.all().to_vec()
    }

    /// List the devices owned by `client`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Client`] when the client owns no device.
    #[tracing::instrument(skip(self))]
    pub fn list_by_client(&self, client: &str) -> Result<Vec<Device>, NotFoundError> {
        let devices: Vec<Device> = self
            .catalog
            .by_client(client)
            .into_iter()
            .cloned()
            .collect();
        if devices.is_empty() {
            tracing::debug!("unknown client");
            return Err(NotFoundError::Client {
                client: client.to_string(),
            });
        }
        Ok(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfleet_domain::device::DeviceKind;

    struct InMemoryCatalog(Vec<Device>);

    impl DeviceCatalog for InMemoryCatalog {
        fn all(&self) -> &[Device] {
            &self.0
        }
    }

    fn make_service() -> DeviceService<InMemoryCatalog> {
        DeviceService::new(InMemoryCatalog(vec![
            Device::new("device_1", "client_1", DeviceKind::TemperatureSensor),
            Device::new("device_2", "client_1", DeviceKind::HumiditySensor),
            Device::new("device_3", "client_2", DeviceKind::ActivityTracker),
            Device::new("device_4", "client_2", DeviceKind::TemperatureSensor),
        ]))
    }

    #[test]
    fn should_list_all_devices_in_catalog_order() {
        let svc = make_service();
        let ids: Vec<String> = svc.list_devices().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["device_1", "device_2", "device_3", "device_4"]);
    }

    #[test]
    fn should_list_devices_of_client_in_catalog_order() {
        let svc = make_service();
        let ids: Vec<String> = svc
            .list_by_client("client_2")
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["device_3", "device_4"]);
    }

    #[test]
    fn should_return_not_found_when_client_has_no_devices() {
        let svc = make_service();
        let result = svc.list_by_client("client_9");
        assert!(matches!(
            result,
            Err(NotFoundError::Client { ref client }) if client == "client_9"
        ));
    }

    #[test]
    fn should_not_match_client_by_prefix() {
        let svc = make_service();
        assert!(svc.list_by_client("client_").is_err());
    }
}
