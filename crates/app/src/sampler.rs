//! Synthetic metric generation.
//!
//! Values are drawn uniformly from the ranges in
//! [`mockfleet_domain::metric`]. Temperatures are rounded to two decimals,
//! integer metrics include both bounds. Nothing is cached or seeded: each
//! call performs fresh draws.

use mockfleet_domain::device::DeviceKind;
use mockfleet_domain::metric::{
    ACTIVITY_LEVEL_RANGE, BATTERY_LEVEL_RANGE, HUMIDITY_RANGE, Metric, TEMPERATURE_RANGE,
};
use mockfleet_domain::reading::{HistoryValue, Metrics};

use crate::ports::RandomSource;

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn temperature<R: RandomSource + ?Sized>(rng: &R) -> f64 {
    round2(rng.real(TEMPERATURE_RANGE))
}

/// Draw one value of `metric`.
pub fn sample<R: RandomSource + ?Sized>(metric: Metric, rng: &R) -> HistoryValue {
    match metric {
        Metric::Temperature => HistoryValue::Real(temperature(rng)),
        Metric::Humidity => HistoryValue::Integer(rng.integer(HUMIDITY_RANGE)),
        Metric::BatteryLevel => HistoryValue::Integer(rng.integer(BATTERY_LEVEL_RANGE)),
        Metric::ActivityLevel => HistoryValue::Integer(rng.integer(ACTIVITY_LEVEL_RANGE)),
    }
}

/// Draw a live reading for a device of `kind`.
///
/// Metrics the kind does not measure are left as `None`.
pub fn sample_metrics<R: RandomSource + ?Sized>(kind: DeviceKind, rng: &R) -> Metrics {
    Metrics {
        temperature: kind.measures(Metric::Temperature).then(|| temperature(rng)),
        humidity: kind.measures(Metric::Humidity).then(|| rng.integer(HUMIDITY_RANGE)),
        battery_level: rng.integer(BATTERY_LEVEL_RANGE),
        activity_level: kind
            .measures(Metric::ActivityLevel)
            .then(|| rng.integer(ACTIVITY_LEVEL_RANGE)),
    }
}

/// Draw one history value for a device of `kind`.
pub fn sample_history_value<R: RandomSource + ?Sized>(kind: DeviceKind, rng: &R) -> HistoryValue {
    sample(kind.history_metric(), rng)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::ops::RangeInclusive;

    use crate::ports::RandomSource;

    /// Always returns the lower bound.
    pub struct Lowest;

    impl RandomSource for Lowest {
        fn real(&self, range: RangeInclusive<f64>) -> f64 {
            *range.start()
        }

        fn integer(&self, range: RangeInclusive<u8>) -> u8 {
            *range.start()
        }
    }

    /// Always returns the upper bound.
    pub struct Highest;

    impl RandomSource for Highest {
        fn real(&self, range: RangeInclusive<f64>) -> f64 {
            *range.end()
        }

        fn integer(&self, range: RangeInclusive<u8>) -> u8 {
            *range.end()
        }
    }

    /// Returns a fixed fraction of the way through each range.
    pub struct Fraction(pub f64);

    impl RandomSource for Fraction {
        fn real(&self, range: RangeInclusive<f64>) -> f64 {
            range.start() + (range.end() - range.start()) * self.0
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn integer(&self, range: RangeInclusive<u8>) -> u8 {
            let span = f64::from(range.end() - range.start());
            range.start() + (span * self.0).round() as u8
        }
    }
}
