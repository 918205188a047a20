//! Burrows-Wheeler Transform engines for OxiBWT.
//!
//! This crate provides a pure Rust implementation of the BWT with an
//! explicit sentinel:
//!
//! 1. [`forward`] - sorts the rotations of `input + sentinel` and emits the
//!    last column
//! 2. [`inverse`] - rebuilds the input from the last column through the
//!    last-to-first mapping
//! 3. [`metrics`] - byte sizes and round-trip length measurements
//! 4. [`table`] - lazy diagnostic views of the rotation matrix
//!
//! The transform does not compress anything by itself; it only groups
//! similar symbols so that a downstream coder can.
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_transform::{inverse, transform};
//!
//! let transformed = transform(b"GATTACA").unwrap();
//! assert_eq!(transformed, b"ACTGA$TA");
//! assert_eq!(inverse(&transformed).unwrap(), b"GATTACA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod forward;
pub mod inverse;
pub mod metrics;
pub mod table;

pub use metrics::{Measurement, byte_size};
pub use oxibwt_core::{Alphabet, BwtConfig, BwtError, Construction, MissingSentinel, Result};
pub use table::{FirstColumnTable, RotationRow, RotationTable};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A transform engine bound to one configuration.
///
/// The engine holds no state besides its configuration, so it can be
/// copied freely and shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bwt {
    config: BwtConfig,
}

impl Bwt {
    /// Create an engine with the given configuration.
    pub fn new(config: BwtConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &BwtConfig {
        &self.config
    }

    /// Forward transform.
    pub fn transform(&self, data: &[u8]) -> Result<Vec<u8>> {
        forward::transform(data, &self.config)
    }

    /// Forward transform plus the rotation table.
    pub fn transform_with_table(&self, data: &[u8]) -> Result<(Vec<u8>, RotationTable)> {
        forward::transform_with_table(data, &self.config)
    }

    /// Inverse transform.
    pub fn inverse(&self, data: &[u8]) -> Result<Vec<u8>> {
        inverse::inverse(data, &self.config)
    }

    /// Inverse transform plus the recovered first/last columns.
    pub fn inverse_with_table(&self, data: &[u8]) -> Result<(Vec<u8>, FirstColumnTable)> {
        inverse::inverse_with_table(data, &self.config)
    }

    /// Round-trip measurement.
    pub fn measure(&self, data: &[u8]) -> Result<Measurement> {
        metrics::measure(data, &self.config)
    }

    /// Forward-transform independent sequences in parallel.
    ///
    /// Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn transform_batch<S>(&self, inputs: &[S]) -> Vec<Result<Vec<u8>>>
    where
        S: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.transform(input.as_ref()))
            .collect()
    }

    /// Measure independent sequences in parallel.
    ///
    /// Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn measure_batch<S>(&self, inputs: &[S]) -> Vec<Result<Measurement>>
    where
        S: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.measure(input.as_ref()))
            .collect()
    }
}

/// Forward transform with the default configuration.
pub fn transform(data: &[u8]) -> Result<Vec<u8>> {
    Bwt::default().transform(data)
}

/// Inverse transform with the default configuration.
pub fn inverse(data: &[u8]) -> Result<Vec<u8>> {
    Bwt::default().inverse(data)
}

/// Round-trip measurement with the default configuration.
pub fn measure(data: &[u8]) -> Result<Measurement> {
    Bwt::default().measure(data)
}
