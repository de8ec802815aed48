//! Randomness port — uniform draws used to synthesize metric values.

use std::ops::RangeInclusive;
use std::sync::Arc;

/// Source of uniformly distributed values.
///
/// Every call is an independent draw. Implementations are shared between
/// concurrent request handlers, hence the `Send + Sync` bound at use sites.
pub trait RandomSource {
    /// Draw a real number uniformly from the closed interval `range`.
    fn real(&self, range: RangeInclusive<f64>) -> f64;

    /// Draw an integer uniformly from `range`, both bounds included.
    fn integer(&self, range: RangeInclusive<u8>) -> u8;
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn real(&self, range: RangeInclusive<f64>) -> f64 {
        (**self).real(range)
    }

    fn integer(&self, range: RangeInclusive<u8>) -> u8 {
        (**self).integer(range)
    }
}
