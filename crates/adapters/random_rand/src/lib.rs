//! # mockfleet-adapter-random-rand
//!
//! [`RandomSource`] backed by [`rand::rng`], the thread-local generator of
//! the `rand` crate. Each draw goes through the generator of the calling
//! thread, so concurrent request handlers never share generator state.
//!
//! ## Dependency rule
//!
//! Depends on `mockfleet-app` (port traits) only.

use std::ops::RangeInclusive;

use rand::Rng;

use mockfleet_app::ports::RandomSource;

/// Stateless handle to the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn real(&self, range: RangeInclusive<f64>) -> f64 {
        rand::rng().random_range(range)
    }

    fn integer(&self, range: RangeInclusive<u8>) -> u8 {
        rand::rng().random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfleet_app::sampler::sample_metrics;
    use mockfleet_domain::device::DeviceKind;
    use mockfleet_domain::metric::{
        ACTIVITY_LEVEL_RANGE, BATTERY_LEVEL_RANGE, HUMIDITY_RANGE, TEMPERATURE_RANGE,
    };

    const DRAWS: usize = 2_000;

    #[test]
    fn should_stay_within_real_bounds() {
        let rng = ThreadRandom;
        for _ in 0..DRAWS {
            let value = rng.real(TEMPERATURE_RANGE);
            assert!(TEMPERATURE_RANGE.contains(&value), "{value}");
        }
    }

    #[test]
    fn should_stay_within_integer_bounds() {
        let rng = ThreadRandom;
        for range in [HUMIDITY_RANGE, BATTERY_LEVEL_RANGE, ACTIVITY_LEVEL_RANGE] {
            for _ in 0..DRAWS {
                let value = rng.integer(range.clone());
                assert!(range.contains(&value), "{value} not in {range:?}");
            }
        }
    }

    #[test]
    fn should_return_the_only_value_of_a_single_point_range() {
        let rng = ThreadRandom;
        assert_eq!(rng.integer(7..=7), 7);
    }

    #[test]
    fn should_produce_rounded_temperatures_within_bounds() {
        let rng = ThreadRandom;
        for _ in 0..DRAWS {
            let metrics = sample_metrics(DeviceKind::TemperatureSensor, &rng);
            let temperature = metrics.temperature.unwrap();
            assert!((20.0..=30.0).contains(&temperature), "{temperature}");
            let cents = temperature * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{temperature}");
            assert!(BATTERY_LEVEL_RANGE.contains(&metrics.battery_level));
            assert!(metrics.humidity.is_none());
            assert!(metrics.activity_level.is_none());
        }
    }
}
