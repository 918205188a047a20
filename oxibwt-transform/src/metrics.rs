//! Length measurements for a forward/inverse round trip.
//!
//! The transform keeps every symbol and adds the sentinel, so the reported
//! ratio only shows the one-symbol length increase. It is not a compression
//! ratio; an entropy coder would have to run downstream for that.

use crate::{forward, inverse};
use log::debug;
use oxibwt_core::{BwtConfig, Result};
use std::time::{Duration, Instant};

/// Size of a string in bytes, always measured as UTF-8.
pub fn byte_size(text: &str) -> usize {
    text.len()
}

/// `transformed / original`, or 0.0 for an empty original.
pub fn length_ratio(original_length: usize, transformed_length: usize) -> f64 {
    if original_length == 0 {
        0.0
    } else {
        transformed_length as f64 / original_length as f64
    }
}

/// Result of [`measure`].
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Input length in bytes.
    pub original_length: usize,
    /// Transformed length in bytes (input plus sentinel).
    pub transformed_length: usize,
    /// `transformed_length / original_length`; 0.0 for empty input.
    pub ratio: f64,
    /// Whether inverting the transform gave back the input.
    pub round_trip: bool,
    /// Time spent in the forward transform.
    pub forward_time: Duration,
    /// Time spent in the inverse transform.
    pub inverse_time: Duration,
}

impl Measurement {
    /// The ratio as a percentage.
    pub fn ratio_percent(&self) -> f64 {
        self.ratio * 100.0
    }

    /// Bytes added by the transform.
    pub fn length_delta(&self) -> usize {
        self.transformed_length - self.original_length
    }
}

/// Transform `data`, invert the result and report lengths and timings.
pub fn measure(data: &[u8], config: &BwtConfig) -> Result<Measurement> {
    let start = Instant::now();
    let transformed = forward::transform(data, config)?;
    let forward_time = start.elapsed();

    let start = Instant::now();
    let recovered = inverse::inverse(&transformed, config)?;
    let inverse_time = start.elapsed();

    let measurement = Measurement {
        original_length: data.len(),
        transformed_length: transformed.len(),
        ratio: length_ratio(data.len(), transformed.len()),
        round_trip: recovered == data,
        forward_time,
        inverse_time,
    };
    debug!(
        "measure: {} -> {} bytes, forward {:?}, inverse {:?}",
        measurement.original_length,
        measurement.transformed_length,
        forward_time,
        inverse_time
    );

    Ok(measurement)
}
