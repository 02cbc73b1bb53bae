//! Integer ranges with an estimated centre, the input of every range sampler

use crate::io::error::{Result, config_error};
use crate::sampling::{SamplerOptions, WeightedSampler};

/// Inclusive `min..=max` range whose draws centre on `estimated`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledRange {
    /// Smallest value that can be drawn
    pub min: u32,
    /// Largest value that can be drawn
    pub max: u32,
    /// Mean the sampler is biased towards
    pub estimated: f64,
}

impl SampledRange {
    /// Create a range
    pub const fn new(min: u32, max: u32, estimated: f64) -> Self {
        Self { min, max, estimated }
    }

    /// Range that always yields `value`
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value, value as f64)
    }

    /// Every value of the range in ascending order
    pub fn values(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }

    /// Sampler over the range, biased towards `estimated`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min` exceeds `max`, `min` is below
    /// `lower_bound`, or `estimated` is not finite
    pub fn sampler(
        &self,
        parameter: &'static str,
        seed: u32,
        lower_bound: u32,
    ) -> Result<WeightedSampler<u32>> {
        if self.min > self.max {
            return Err(config_error(
                parameter,
                &format!("{}..={}", self.min, self.max),
                &"min must not exceed max",
            ));
        }
        if self.min < lower_bound {
            return Err(config_error(
                parameter,
                &self.min,
                &format!("min must be at least {lower_bound}"),
            ));
        }
        WeightedSampler::new(seed, self.values(), SamplerOptions::estimated(self.estimated))
    }
}
