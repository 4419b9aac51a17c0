//! TensorConfig - dimension and bounds for a tensor created by a front end.

use std::ops::RangeInclusive;

use crate::error::{Result, RotorError};
use crate::layout::MAX_INDEXABLE_DIMENSION;

/// Smallest side length a front end accepts by default.
pub const MIN_DIMENSION: usize = 3;

/// Largest side length a front end accepts by default.
pub const MAX_DIMENSION: usize = 50;

/// Side length used when nothing else is configured.
pub const DEFAULT_DIMENSION: usize = 4;

/// Configuration for creating a tensor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorConfig {
  /// Side length `D` of the cube.
  pub dimension: usize,

  /// Smallest accepted dimension.
  pub min_dimension: usize,

  /// Largest accepted dimension.
  pub max_dimension: usize,
}

impl Default for TensorConfig {
  fn default() -> Self {
    Self {
      dimension: DEFAULT_DIMENSION,
      min_dimension: MIN_DIMENSION,
      max_dimension: MAX_DIMENSION,
    }
  }
}

impl TensorConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_dimension(mut self, dimension: usize) -> Self {
    self.dimension = dimension;
    self
  }

  /// Replace the accepted dimension range.
  pub fn with_bounds(mut self, bounds: RangeInclusive<usize>) -> Self {
    self.min_dimension = *bounds.start();
    self.max_dimension = *bounds.end();
    self
  }

  pub fn bounds(&self) -> RangeInclusive<usize> {
    self.min_dimension..=self.max_dimension
  }

  /// Check the dimension against the bounds.
  ///
  /// Zero and dimensions whose cube overflows the index space are always
  /// rejected, whatever the bounds say.
  pub fn validate(&self) -> Result<usize> {
    let min = self.min_dimension.max(1);
    let max = self.max_dimension.min(MAX_INDEXABLE_DIMENSION);
    if !(min..=max).contains(&self.dimension) {
      return Err(RotorError::InvalidDimension {
        dimension: self.dimension,
        min,
        max,
      });
    }
    Ok(self.dimension)
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
