//! Volume layout for cubic `D³` buffers.
//!
//! # Memory Layout
//!
//! ```text
//! Volume memory layout (X innermost, Z outermost):
//!
//! Address:  0      1     ...  D-1      D     ...  D²-1       D²   ...
//! Content: [0,0,0][1,0,0]...[D-1,0,0][0,1,0]...[D-1,D-1,0][0,0,1]...
//!          └──────── X ──────────┘└──────── X ──────────┘
//! ```
//!
//! # 3D Indexing
//!
//! ```text
//! index = x + y * D + z * D²
//!
//! x = index % D
//! y = (index / D) % D
//! z = index / D²
//! ```

use crate::axis::Component;
use crate::error::{Result, RotorError};

/// Largest side length whose cube still fits in `usize`.
pub const MAX_INDEXABLE_DIMENSION: usize = if usize::BITS >= 64 { 2_642_245 } else { 1_625 };

/// One cell position inside a cubic volume.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord {
  pub x: usize,
  pub y: usize,
  pub z: usize,
}

impl Coord {
  pub const fn new(x: usize, y: usize, z: usize) -> Self {
    Self { x, y, z }
  }

  /// Component value along one axis.
  #[inline]
  pub const fn get(&self, component: Component) -> usize {
    match component {
      Component::X => self.x,
      Component::Y => self.y,
      Component::Z => self.z,
    }
  }

  /// Set one component in place.
  #[inline]
  pub fn set(&mut self, component: Component, value: usize) {
    match component {
      Component::X => self.x = value,
      Component::Y => self.y = value,
      Component::Z => self.z = value,
    }
  }

  /// True when every component is below `dimension`.
  #[inline]
  pub const fn is_within(&self, dimension: usize) -> bool {
    self.x < dimension && self.y < dimension && self.z < dimension
  }
}

impl From<(usize, usize, usize)> for Coord {
  fn from((x, y, z): (usize, usize, usize)) -> Self {
    Self { x, y, z }
  }
}

impl From<Coord> for (usize, usize, usize) {
  fn from(coord: Coord) -> Self {
    (coord.x, coord.y, coord.z)
  }
}

/// Number of cells in a `dimension³` volume.
///
/// Fails for zero and for dimensions whose cube overflows `usize`.
pub fn cell_count(dimension: usize) -> Result<usize> {
  if dimension == 0 {
    return Err(RotorError::InvalidDimension {
      dimension,
      min: 1,
      max: MAX_INDEXABLE_DIMENSION,
    });
  }
  dimension
    .checked_pow(3)
    .ok_or(RotorError::InvalidDimension {
      dimension,
      min: 1,
      max: MAX_INDEXABLE_DIMENSION,
    })
}

/// Convert a 3D coordinate to its linear buffer index.
///
/// Layout: X is minor (stride 1), Y is middle (stride D), Z is major
/// (stride D²).
#[inline]
pub fn coord_to_index(coord: Coord, dimension: usize) -> Result<usize> {
  if dimension > MAX_INDEXABLE_DIMENSION {
    return Err(RotorError::InvalidDimension {
      dimension,
      min: 1,
      max: MAX_INDEXABLE_DIMENSION,
    });
  }
  for component in Component::ALL {
    let value = coord.get(component);
    if value >= dimension {
      return Err(RotorError::OutOfRange {
        what: component.label(),
        value,
        limit: dimension,
        dimension,
      });
    }
  }
  Ok(coord.x + coord.y * dimension + coord.z * dimension * dimension)
}

/// Convert a linear buffer index back to its 3D coordinate.
#[inline]
pub fn index_to_coord(index: usize, dimension: usize) -> Result<Coord> {
  let cells = cell_count(dimension)?;
  if index >= cells {
    return Err(RotorError::OutOfRange {
      what: "index",
      value: index,
      limit: cells,
      dimension,
    });
  }
  Ok(Coord {
    x: index % dimension,
    y: (index / dimension) % dimension,
    z: index / (dimension * dimension),
  })
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
