//! Metric identifiers and the ranges synthetic values are drawn from.

use std::ops::RangeInclusive;

/// A measurable quantity a device can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    BatteryLevel,
    ActivityLevel,
}

/// Degrees Celsius, real-valued, rounded to two decimals after drawing.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 20.0..=30.0;

/// Relative humidity in percent.
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 40..=80;

/// Battery charge in percent.
pub const BATTERY_LEVEL_RANGE: RangeInclusive<u8> = 10..=100;

/// Activity score in percent.
pub const ACTIVITY_LEVEL_RANGE: RangeInclusive<u8> = 0..=100;

/// Number of points in a device history.
pub const HISTORY_LEN: usize = 10;

/// Spacing between two consecutive history points, in minutes.
pub const HISTORY_STEP_MINUTES: i64 = 1;
