//! Self-adjusting weighted sampler driven by the fixed seed sequence
//!
//! Each draw picks a value by walking the cumulative weights up to a target
//! read from [`crate::sampling::seed_sequence`], then shifts weight away from
//! the chosen value and towards its distant neighbours. Optional estimated
//! value or index targets pull the distribution towards a declared centre.

use crate::io::configuration::{
    DISTANCE_DIMINISHING_EXPONENT, ESTIMATED_FACTOR_DIVISOR, NEIGHBOUR_BOOST_FACTOR,
    SELF_DECAY_FACTOR, WEIGHT_DOWNSCALE_DIVISOR, WEIGHT_DOWNSCALE_TRIGGER,
};
use crate::io::error::{DotterError, Result, config_error, invariant_error};
use crate::sampling::seed_sequence::seed_position;
use log::trace;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Optional biasing parameters for a [`WeightedSampler`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SamplerOptions {
    /// Value the distribution should centre on (requires sorted values)
    pub estimated: Option<f64>,
    /// Spread of the estimated bias, defaults to `n^(n / 3.3)`
    pub estimated_factor: Option<f64>,
    /// Index the distribution should centre on
    pub estimated_index: Option<usize>,
}

impl SamplerOptions {
    /// Options biased towards an estimated value
    pub const fn estimated(value: f64) -> Self {
        Self {
            estimated: Some(value),
            estimated_factor: None,
            estimated_index: None,
        }
    }

    /// Options biased towards an estimated index
    pub const fn estimated_index(index: usize) -> Self {
        Self {
            estimated: None,
            estimated_factor: None,
            estimated_index: Some(index),
        }
    }

    /// Override the spread of the estimated bias
    #[must_use]
    pub const fn with_factor(mut self, factor: f64) -> Self {
        self.estimated_factor = Some(factor);
        self
    }
}

/// A drawn value together with its index in the possible values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<T> {
    /// The drawn value
    pub value: T,
    /// Index of `value` in the sampler's possible values
    pub index: usize,
}

/// Deterministic sampler over a finite ordered set of numeric values
///
/// The history length doubles as the read position in the seed sequence,
/// so two samplers with the same seed, values and call sequence always agree.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    seed: u32,
    possible_values: Vec<T>,
    numeric_values: Vec<f64>,
    weights: Vec<f64>,
    estimated: Option<f64>,
    estimated_index: Option<usize>,
    estimated_factor: f64,
    history: Vec<T>,
}

impl<T> WeightedSampler<T>
where
    T: Copy + PartialOrd + Debug + ToPrimitive,
{
    /// Create a sampler over `possible_values`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - `possible_values` is empty or holds a value not representable as `f64`
    /// - `estimated` is set and `possible_values` is not sorted ascending
    /// - `estimated_index` is out of bounds
    /// - `estimated` or `estimated_factor` is not a finite number, or the factor is not positive
    pub fn new(seed: u32, possible_values: Vec<T>, options: SamplerOptions) -> Result<Self> {
        if possible_values.is_empty() {
            return Err(config_error(
                "possible_values",
                &"[]",
                &"at least one possible value is required",
            ));
        }

        let numeric_values = possible_values
            .iter()
            .map(|value| {
                value.to_f64().ok_or_else(|| {
                    config_error(
                        "possible_values",
                        &format!("{value:?}"),
                        &"value is not representable as a float",
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(estimated) = options.estimated {
            if !estimated.is_finite() {
                return Err(config_error("estimated", &estimated, &"must be finite"));
            }
            let sorted = possible_values
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a <= b));
            if !sorted {
                return Err(config_error(
                    "possible_values",
                    &format!("{possible_values:?}"),
                    &"must be sorted ascending when an estimated value is set",
                ));
            }
        }

        if let Some(index) = options.estimated_index {
            if index >= possible_values.len() {
                return Err(config_error(
                    "estimated_index",
                    &index,
                    &format!("must be lower than {}", possible_values.len()),
                ));
            }
        }

        if let Some(factor) = options.estimated_factor {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(config_error(
                    "estimated_factor",
                    &factor,
                    &"must be positive and finite",
                ));
            }
        }

        let count = possible_values.len() as f64;
        let estimated_factor = options
            .estimated_factor
            .unwrap_or_else(|| count.powf(count / ESTIMATED_FACTOR_DIVISOR));

        let weights = match options.estimated {
            Some(estimated) => numeric_values
                .iter()
                .map(|value| {
                    let delta = value - estimated;
                    (-(delta * delta) / 2.0).exp()
                })
                .collect(),
            None => vec![1.0 / count; possible_values.len()],
        };

        Ok(Self {
            seed,
            possible_values,
            numeric_values,
            weights,
            estimated: options.estimated,
            estimated_index: options.estimated_index,
            estimated_factor,
            history: Vec::new(),
        })
    }

    /// Draw the next value and update the weights immediately
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if the cumulative weights cannot
    /// reach the sampling target
    pub fn generate_next_value(&mut self) -> Result<T> {
        self.generate_next(true).map(|draw| draw.value)
    }

    /// Draw the next value, optionally deferring the weight update
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if the cumulative weights cannot
    /// reach the sampling target
    pub fn generate_next(&mut self, recalculate_weights: bool) -> Result<Draw<T>> {
        let mut cumulative = Vec::with_capacity(self.weights.len());
        let mut running = 0.0;
        for weight in &self.weights {
            running += weight;
            cumulative.push(running);
        }
        let total = cumulative.last().copied().unwrap_or(0.0);

        let position = seed_position(self.seed, self.history.len());
        let target = position * total;

        let index = cumulative
            .iter()
            .position(|&weight| weight >= target)
            .ok_or_else(|| {
                invariant_error(
                    "weighted sampling",
                    &format!("no cumulative weight reaches target {target} (total {total})"),
                )
            })?;
        let value = *self.possible_values.get(index).ok_or_else(|| {
            invariant_error("weighted sampling", &format!("index {index} out of bounds"))
        })?;

        self.history.push(value);
        trace!(
            "seed {} draw #{}: {value:?} (index {index})",
            self.seed,
            self.history.len()
        );

        if recalculate_weights {
            self.recalculate_weights(index)?;
        }

        Ok(Draw { value, index })
    }

    /// Draw a value whose weight update is settled later with [`Self::commit`]
    ///
    /// # Errors
    ///
    /// See [`Self::generate_next`]
    pub fn draw_tentative(&mut self) -> Result<Draw<T>> {
        self.generate_next(false)
    }

    /// Apply the deferred weight update for the value actually used
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if `index` is out of bounds
    pub fn commit(&mut self, index: usize) -> Result<()> {
        self.recalculate_weights(index)
    }

    /// Finish a tentative draw with the value that was finally used
    ///
    /// Unchanged values commit the drawn index. Changed values replace the
    /// history entry and commit their own index. A final value outside the
    /// possible values keeps the drawn history entry and commits the nearest
    /// possible value. Returns the committed index.
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if the history is empty
    pub fn settle(&mut self, draw: Draw<T>, final_value: T) -> Result<usize> {
        let index = if final_value == draw.value {
            draw.index
        } else if self.index_of(final_value).is_some() {
            self.override_prev_value(final_value, false)?
        } else {
            self.nearest_index(final_value)
        };
        self.commit(index)?;
        Ok(index)
    }

    /// Replace the most recent history entry without drawing again
    ///
    /// Returns the index of `new_value` in the possible values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `new_value` is not one of the possible values
    /// - Nothing has been drawn yet
    pub fn override_prev_value(&mut self, new_value: T, recalculate_weights: bool) -> Result<usize> {
        let index = self
            .index_of(new_value)
            .ok_or_else(|| DotterError::ValueNotFound {
                value: format!("{new_value:?}"),
            })?;

        let last = self.history.last_mut().ok_or_else(|| {
            invariant_error("override previous value", &"no value has been drawn yet")
        })?;
        *last = new_value;

        if recalculate_weights {
            self.recalculate_weights(index)?;
        }

        Ok(index)
    }

    /// Shift weight away from `chosen_index` and towards the estimated target
    ///
    /// # Errors
    ///
    /// Returns an internal invariant error if `chosen_index` is out of bounds
    pub fn recalculate_weights(&mut self, chosen_index: usize) -> Result<()> {
        let count = self.weights.len();
        if chosen_index >= count {
            return Err(invariant_error(
                "weight recalculation",
                &format!("index {chosen_index} out of bounds for {count} values"),
            ));
        }

        let count_f64 = count as f64;
        let factor = self.estimated_factor;

        for (i, (weight, &value)) in self
            .weights
            .iter_mut()
            .zip(&self.numeric_values)
            .enumerate()
        {
            if i == chosen_index {
                *weight -= SELF_DECAY_FACTOR * *weight;
            } else {
                let distance = chosen_index.abs_diff(i) as f64 / count_f64;
                *weight += NEIGHBOUR_BOOST_FACTOR
                    * *weight
                    * (1.0 - distance).powf(DISTANCE_DIMINISHING_EXPONENT);
            }

            if let Some(estimated) = self.estimated {
                let delta = value - estimated;
                *weight *= (-(delta * delta) / factor).exp();
            }

            if let Some(estimated_index) = self.estimated_index {
                let delta = i as f64 - estimated_index as f64;
                *weight *= (-(delta * delta) / factor).exp();
            }
        }

        if self
            .weights
            .iter()
            .any(|&weight| weight > WEIGHT_DOWNSCALE_TRIGGER)
        {
            for weight in &mut self.weights {
                *weight /= WEIGHT_DOWNSCALE_DIVISOR;
            }
        }

        Ok(())
    }

    /// Position of `value` in the possible values
    pub fn index_of(&self, value: T) -> Option<usize> {
        self.possible_values.iter().position(|&v| v == value)
    }

    // Ties resolve to the lower index
    fn nearest_index(&self, value: T) -> usize {
        let target = value.to_f64().unwrap_or(0.0);
        self.numeric_values
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |(best, best_distance), (i, &v)| {
                let distance = (v - target).abs();
                if distance < best_distance {
                    (i, distance)
                } else {
                    (best, best_distance)
                }
            })
            .0
    }

    /// Seed shared by all draws of this sampler
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Ordered set of values this sampler draws from
    pub fn possible_values(&self) -> &[T] {
        &self.possible_values
    }

    /// Current weight per possible value
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Every value drawn so far, including overrides
    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Spread used by the estimated value and index biases
    pub const fn estimated_factor(&self) -> f64 {
        self.estimated_factor
    }
}
