//! Error type shared by coordinate mapping, quartet geometry and rotation.
//!
//! Every failure is reported to the immediate caller. Nothing in this crate
//! aborts the process or logs on its own.

use thiserror::Error;

use crate::axis::Axis;

/// Errors raised by the rotation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorError {
  /// A coordinate component or linear index lies outside the volume.
  #[error("{what} {value} is out of range for dimension {dimension} (limit {limit})")]
  OutOfRange {
    what: &'static str,
    value: usize,
    limit: usize,
    dimension: usize,
  },

  /// The section/layer/offset combination addresses no quartet.
  #[error(
    "no quartet at section {section}, layer {layer}, offset {offset} about {axis} \
     for dimension {dimension}"
  )]
  InvalidGeometry {
    section: usize,
    layer: usize,
    offset: usize,
    axis: Axis,
    dimension: usize,
  },

  /// Dimension is zero, overflows the index space, or falls outside the
  /// configured bounds.
  #[error("invalid dimension {dimension}: expected {min}..={max}")]
  InvalidDimension {
    dimension: usize,
    min: usize,
    max: usize,
  },

  /// Buffer handed to a rotation does not hold exactly `D³` cells.
  #[error("buffer holds {actual} cells, dimension requires {expected}")]
  BufferLength { expected: usize, actual: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RotorError>;
