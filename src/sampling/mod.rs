//! Deterministic sampling primitives
//!
//! This module contains:
//! - The fixed seed sequence every sampler reads from
//! - The self-adjusting weighted sampler

/// Precomputed position table
pub mod seed_sequence;
/// Weighted sampler with deferred weight updates
pub mod weighted;

pub use weighted::{Draw, SamplerOptions, WeightedSampler};
