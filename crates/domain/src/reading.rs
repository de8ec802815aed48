//! Synthetic readings — generated per request, never stored.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::time::Timestamp;

/// One sample of every metric a device can report.
///
/// All four fields are always serialized; a metric the device does not
/// measure is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub temperature: Option<f64>,
    pub humidity: Option<u8>,
    pub battery_level: u8,
    pub activity_level: Option<u8>,
}

/// A live reading for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveReading {
    #[serde(flatten)]
    pub device: Device,
    pub metrics: Metrics,
    pub timestamp: Timestamp,
}

/// Value of a single history point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryValue {
    /// Humidity-style percentage.
    Integer(u8),
    /// Temperature-style value, two decimals.
    Real(f64),
}

/// A value stamped at a point in the recent past.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: Timestamp,
    pub value: HistoryValue,
}

/// The recent history of one device, most recent point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceHistory {
    #[serde(flatten)]
    pub device: Device,
    pub history: Vec<HistoryPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;

    fn fixed_timestamp() -> Timestamp {
        chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn should_serialize_unmeasured_metrics_as_null() {
        let metrics = Metrics {
            temperature: Some(24.37),
            humidity: None,
            battery_level: 55,
            activity_level: None,
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature": 24.37,
                "humidity": null,
                "battery_level": 55,
                "activity_level": null
            })
        );
    }

    #[test]
    fn should_flatten_device_into_live_reading() {
        let reading = LiveReading {
            device: Device::new("device_3", "client_2", DeviceKind::ActivityTracker),
            metrics: Metrics {
                temperature: None,
                humidity: None,
                battery_level: 10,
                activity_level: Some(0),
            },
            timestamp: fixed_timestamp(),
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["id"], "device_3");
        assert_eq!(json["client"], "client_2");
        assert_eq!(json["type"], "activity_tracker");
        assert_eq!(json["metrics"]["activity_level"], 0);
        assert_eq!(json["timestamp"], "2026-10-19T09:30:00");
        assert!(json.get("device").is_none());
    }

    #[test]
    fn should_serialize_history_values_as_plain_numbers() {
        let history = DeviceHistory {
            device: Device::new("device_2", "client_1", DeviceKind::HumiditySensor),
            history: vec![
                HistoryPoint {
                    timestamp: fixed_timestamp(),
                    value: HistoryValue::Integer(61),
                },
                HistoryPoint {
                    timestamp: fixed_timestamp(),
                    value: HistoryValue::Real(22.5),
                },
            ],
        };
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["type"], "humidity_sensor");
        assert_eq!(json["history"][0]["value"], 61);
        assert_eq!(json["history"][1]["value"], 22.5);
    }

    #[test]
    fn should_deserialize_integer_history_value_as_integer() {
        let value: HistoryValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, HistoryValue::Integer(42));

        let value: HistoryValue = serde_json::from_str("21.75").unwrap();
        assert_eq!(value, HistoryValue::Real(21.75));
    }
}
