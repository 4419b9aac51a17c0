//! In-place 90° rotation of a `D³` buffer.
//!
//! ```text
//! rotate
//!  └─ rotate_section   for section in 0..D
//!      └─ rotate_layer    for layer in 0..⌈D/2⌉
//!          └─ rotate_quartet  for offset in 0..D-1-2·layer
//! ```
//!
//! Every level validates its inputs before touching the buffer, so a failed
//! call leaves the buffer as it was. Sections are independent of each other
//! and are the natural unit for anyone who wants to interrupt a rotation.

use crate::axis::Axis;
use crate::error::{Result, RotorError};
use crate::layout::{cell_count, coord_to_index};
use crate::quartet::{compute_quartet, layer_count, ring_edge};

/// Check that `buffer` is a `dimension³` volume.
fn check_buffer<T>(buffer: &[T], dimension: usize) -> Result<()> {
  let expected = cell_count(dimension)?;
  if buffer.len() != expected {
    return Err(RotorError::BufferLength {
      expected,
      actual: buffer.len(),
    });
  }
  Ok(())
}

fn check_section(section: usize, layer: usize, axis: Axis, dimension: usize) -> Result<()> {
  if section >= dimension {
    return Err(RotorError::InvalidGeometry {
      section,
      layer,
      offset: 0,
      axis,
      dimension,
    });
  }
  Ok(())
}

/// Cycle the four cells of one quartet.
///
/// Afterwards `first` holds the old `fourth`, `second` the old `first`,
/// `third` the old `second` and `fourth` the old `third`.
pub fn rotate_quartet<T>(
  buffer: &mut [T],
  section: usize,
  layer: usize,
  offset: usize,
  axis: Axis,
  dimension: usize,
) -> Result<()> {
  check_buffer(buffer, dimension)?;
  cycle_quartet(buffer, section, layer, offset, axis, dimension)
}

/// Rotate one concentric ring of a section.
///
/// A ring with no room for quartets (the center of an odd section, or any
/// layer past it) is a no-op.
pub fn rotate_layer<T>(
  buffer: &mut [T],
  section: usize,
  layer: usize,
  axis: Axis,
  dimension: usize,
) -> Result<()> {
  check_buffer(buffer, dimension)?;
  check_section(section, layer, axis, dimension)?;
  cycle_layer(buffer, section, layer, axis, dimension)
}

/// Rotate every ring of one section.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip(buffer), name = "rotate::rotate_section")
)]
pub fn rotate_section<T>(
  buffer: &mut [T],
  section: usize,
  axis: Axis,
  dimension: usize,
) -> Result<()> {
  check_buffer(buffer, dimension)?;
  check_section(section, 0, axis, dimension)?;
  cycle_section(buffer, section, axis, dimension)
}

/// Rotate the whole volume 90° about `axis`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(buffer), name = "rotate::rotate"))]
pub fn rotate<T>(buffer: &mut [T], axis: Axis, dimension: usize) -> Result<()> {
  check_buffer(buffer, dimension)?;

  for section in 0..dimension {
    cycle_section(buffer, section, axis, dimension)?;
  }
  Ok(())
}

// Helpers below assume the buffer length was already checked.

fn cycle_quartet<T>(
  buffer: &mut [T],
  section: usize,
  layer: usize,
  offset: usize,
  axis: Axis,
  dimension: usize,
) -> Result<()> {
  let quartet = compute_quartet(section, layer, offset, axis, dimension)?;

  let mut indices = [0usize; 4];
  for (slot, coord) in indices.iter_mut().zip(quartet.coords()) {
    *slot = coord_to_index(coord, dimension)?;
  }
  let [first, second, third, fourth] = indices;

  // Indices are pairwise distinct, so the swaps never alias.
  buffer.swap(first, fourth);
  buffer.swap(second, fourth);
  buffer.swap(third, fourth);
  Ok(())
}

fn cycle_layer<T>(
  buffer: &mut [T],
  section: usize,
  layer: usize,
  axis: Axis,
  dimension: usize,
) -> Result<()> {
  for offset in 0..ring_edge(dimension, layer) {
    cycle_quartet(buffer, section, layer, offset, axis, dimension)?;
  }
  Ok(())
}

fn cycle_section<T>(buffer: &mut [T], section: usize, axis: Axis, dimension: usize) -> Result<()> {
  for layer in 0..layer_count(dimension) {
    cycle_layer(buffer, section, layer, axis, dimension)?;
  }
  Ok(())
}

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;
