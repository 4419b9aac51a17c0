//! Tensor - owned cubic volume backed by one contiguous buffer.
//!
//! The buffer is allocated once and always holds exactly `D³` cells.
//! Rotations permute it in place; nothing ever resizes or reallocates it.

use crate::axis::{Axis, Component};
use crate::config::TensorConfig;
use crate::error::{Result, RotorError};
use crate::layout::{cell_count, coord_to_index, index_to_coord, Coord};
use crate::rotate;

/// Cubic third-order tensor of side length `D`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tensor<T> {
  dimension: usize,
  cells: Vec<T>,
}

impl<T: Clone> Tensor<T> {
  /// Create a `dimension³` tensor with every cell set to `fill`.
  pub fn new(dimension: usize, fill: T) -> Result<Self> {
    let cells = vec![fill; cell_count(dimension)?];
    Ok(Self { dimension, cells })
  }

  /// Create a tensor sized and bounds-checked by `config`.
  pub fn from_config(config: &TensorConfig, fill: T) -> Result<Self> {
    Self::new(config.validate()?, fill)
  }
}

impl<T> Tensor<T> {
  /// Create a tensor whose cells are produced from their coordinates.
  pub fn from_fn(dimension: usize, mut f: impl FnMut(Coord) -> T) -> Result<Self> {
    let cells = (0..cell_count(dimension)?)
      .map(|idx| index_to_coord(idx, dimension).map(&mut f))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { dimension, cells })
  }

  /// Wrap an existing buffer laid out as `x + y·D + z·D²`.
  pub fn from_vec(dimension: usize, cells: Vec<T>) -> Result<Self> {
    let expected = cell_count(dimension)?;
    if cells.len() != expected {
      return Err(RotorError::BufferLength {
        expected,
        actual: cells.len(),
      });
    }
    Ok(Self { dimension, cells })
  }

  /// Side length `D`.
  #[inline]
  pub fn dimension(&self) -> usize {
    self.dimension
  }

  /// Number of cells, `D³`.
  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  /// Always false: a tensor has at least one cell.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.cells
  }

  pub fn into_vec(self) -> Vec<T> {
    self.cells
  }

  pub fn get(&self, coord: Coord) -> Result<&T> {
    let idx = coord_to_index(coord, self.dimension)?;
    Ok(&self.cells[idx])
  }

  pub fn get_mut(&mut self, coord: Coord) -> Result<&mut T> {
    let idx = coord_to_index(coord, self.dimension)?;
    Ok(&mut self.cells[idx])
  }

  /// Cells with their coordinates, in buffer order.
  pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
    let dimension = self.dimension;
    self.cells.iter().enumerate().map(move |(idx, cell)| {
      let coord = Coord {
        x: idx % dimension,
        y: (idx / dimension) % dimension,
        z: idx / (dimension * dimension),
      };
      (coord, cell)
    })
  }

  /// Rows of the cross-section `normal = index`, for display.
  ///
  /// With `(b, c)` the cyclic in-plane pair of `normal`, row `r` holds the
  /// cells with `c = r` ordered by `b`. For `Z` that is rows along `y` and
  /// columns along `x`.
  pub fn section(&self, normal: Component, index: usize) -> Result<Vec<Vec<&T>>> {
    if index >= self.dimension {
      return Err(RotorError::OutOfRange {
        what: normal.label(),
        value: index,
        limit: self.dimension,
        dimension: self.dimension,
      });
    }

    let (b, c) = normal.plane();
    let mut rows = Vec::with_capacity(self.dimension);
    for row in 0..self.dimension {
      let mut cells = Vec::with_capacity(self.dimension);
      for col in 0..self.dimension {
        let mut coord = Coord::default();
        coord.set(normal, index);
        coord.set(b, col);
        coord.set(c, row);
        cells.push(&self.cells[coord_to_index(coord, self.dimension)?]);
      }
      rows.push(cells);
    }
    Ok(rows)
  }

  /// Rotate the whole tensor 90° about `axis`.
  pub fn rotate(&mut self, axis: Axis) -> Result<()> {
    rotate::rotate(&mut self.cells, axis, self.dimension)
  }

  /// Rotate a single section 90° about `axis`.
  pub fn rotate_section(&mut self, section: usize, axis: Axis) -> Result<()> {
    rotate::rotate_section(&mut self.cells, section, axis, self.dimension)
  }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tensor_test;
