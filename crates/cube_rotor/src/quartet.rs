//! Quartet geometry - the four cells that trade places in one 90° turn.
//!
//! A section is the `D×D` plane perpendicular to the rotation axis. It is
//! peeled into concentric rings (layers). Each ring is walked one edge at a
//! time; the cell at `offset` along the first edge has three partners, one on
//! each other edge, reached by turning the plane 90° about its center.
//!
//! # Ring Layout
//!
//! ```text
//! Section plane (u right, v down), D = 5, layer 0:
//!
//!        u=0   u=1   u=2   u=3   u=4
//! v=0    [p0]  [p3]  [p3]  [p3]  [p3]      p0 edge: u = L,       v = L+o
//! v=1    [p0]  ...   ...   ...   [p2]      p1 edge: v = n-L,     u = L+o
//! v=2    [p0]  ...   (c)   ...   [p2]      p2 edge: u = n-L,     v = n-L-o
//! v=3    [p0]  ...   ...   ...   [p2]      p3 edge: v = L,       u = n-L-o
//! v=4    [p1]  [p1]  [p1]  [p1]  [p2]
//!
//! n = D-1, L = layer, o = offset in [0, n-2L)
//! ```
//!
//! Each edge contributes `n-2L` cells and the four edges tile the ring
//! exactly once. For odd `D` the innermost layer has `n-2L = 0` and its single
//! cell `(c)` is the fixed point of the turn.
//!
//! # Turn
//!
//! ```text
//! (u, v) → (v, n-u)
//!
//! p0 = (L,     L+o)
//! p1 = (L+o,   n-L)
//! p2 = (n-L,   n-L-o)
//! p3 = (n-L-o, L)
//! ```
//!
//! The in-plane components `(u, v)` and the fixed section component come from
//! [`Axis::turn_plane`] and [`Axis::normal`].

use crate::axis::Axis;
use crate::error::{Result, RotorError};
use crate::layout::Coord;

/// Four cells forming one rotation cycle.
///
/// The value at `first` moves to `second`, `second` to `third`, `third` to
/// `fourth` and `fourth` back to `first`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quartet {
  pub first: Coord,
  pub second: Coord,
  pub third: Coord,
  pub fourth: Coord,
}

impl Quartet {
  /// Cells in cycle order.
  pub fn coords(&self) -> [Coord; 4] {
    [self.first, self.second, self.third, self.fourth]
  }

  /// Where the value currently at `coord` lands after the turn.
  pub fn destination(&self, coord: Coord) -> Option<Coord> {
    let coords = self.coords();
    coords
      .iter()
      .position(|c| *c == coord)
      .map(|i| coords[(i + 1) % 4])
  }
}

/// Number of concentric layers in a section, `⌈D/2⌉`.
#[inline]
pub const fn layer_count(dimension: usize) -> usize {
  dimension.div_ceil(2)
}

/// Cells per ring edge for `layer`, `max(D-1-2·layer, 0)`.
///
/// Zero means the layer has no quartets: either the center cell of an odd
/// section or a layer past the center.
#[inline]
pub const fn ring_edge(dimension: usize, layer: usize) -> usize {
  match layer.checked_mul(2) {
    Some(twice) => dimension.saturating_sub(1).saturating_sub(twice),
    None => 0,
  }
}

/// Fixed coordinate value on the axis normal for `section`.
///
/// Section `s` of `+a` is the plane `a = s`; section `s` of `-a` is the plane
/// `a = D-1-s`.
#[inline]
pub(crate) const fn section_plane(section: usize, axis: Axis, dimension: usize) -> usize {
  if axis.is_positive() {
    section
  } else {
    dimension - 1 - section
  }
}

/// Compute the quartet at `offset` along `layer` of `section`, turning about
/// `axis`.
///
/// Fails with [`RotorError::InvalidGeometry`] when `section >= D`, when the
/// layer has no ring left (`D-1-2·layer <= 0`) or when
/// `offset >= D-1-2·layer`.
pub fn compute_quartet(
  section: usize,
  layer: usize,
  offset: usize,
  axis: Axis,
  dimension: usize,
) -> Result<Quartet> {
  let edge = ring_edge(dimension, layer);
  if section >= dimension || offset >= edge {
    return Err(RotorError::InvalidGeometry {
      section,
      layer,
      offset,
      axis,
      dimension,
    });
  }

  let n = dimension - 1;
  let fixed = section_plane(section, axis, dimension);
  let normal = axis.normal();
  let (u, v) = axis.turn_plane();

  let embed = |pu: usize, pv: usize| {
    let mut coord = Coord::default();
    coord.set(normal, fixed);
    coord.set(u, pu);
    coord.set(v, pv);
    coord
  };

  Ok(Quartet {
    first: embed(layer, layer + offset),
    second: embed(layer + offset, n - layer),
    third: embed(n - layer, n - layer - offset),
    fourth: embed(n - layer - offset, layer),
  })
}

#[cfg(test)]
#[path = "quartet_test.rs"]
mod quartet_test;
