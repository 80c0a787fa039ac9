//! Closed per-gene interval.

use crate::error::GaError;
use rand::Rng;

/// Closed interval `[low, high]` applied to every gene of a chromosome,
/// both at initialization and at mutation time.
///
/// Validity (`low <= high`, both finite) is checked by
/// [`GaConfig::validate`](crate::GaConfig::validate) before a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Checks that the interval is well formed.
    pub fn validate(&self) -> Result<(), GaError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(GaError::InvalidConfig(format!(
                "bounds must be finite, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(GaError::InvalidConfig(format!(
                "bounds low must not exceed high, got [{}, {}]",
                self.low, self.high
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Draws a uniform sample from the closed interval.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..=self.high)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            low: -1.0,
            high: 1.0,
        }
    }
}
