//! Rotation axes.
//!
//! # Coordinate System
//!
//! ```text
//!          +Z
//!           │
//!           │
//!           └───────── +X
//!          /
//!         /
//!       +Y
//!
//! Cyclic in-plane pairs (b, c):
//!   X → (Y, Z)
//!   Y → (Z, X)
//!   Z → (X, Y)
//! ```
//!
//! A turn about `+a` carries the cell at in-plane position `(b, c)` to
//! `(c, D-1-b)`. A turn about `-a` is its inverse and carries `(b, c)` to
//! `(D-1-c, b)`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Undirected coordinate axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Component {
  X,
  Y,
  Z,
}

impl Component {
  pub const ALL: [Component; 3] = [Component::X, Component::Y, Component::Z];

  /// The two in-plane components perpendicular to `self`, in cyclic order.
  #[inline]
  pub const fn plane(self) -> (Component, Component) {
    match self {
      Component::X => (Component::Y, Component::Z),
      Component::Y => (Component::Z, Component::X),
      Component::Z => (Component::X, Component::Y),
    }
  }

  /// Lowercase axis letter.
  pub const fn label(self) -> &'static str {
    match self {
      Component::X => "x",
      Component::Y => "y",
      Component::Z => "z",
    }
  }
}

impl fmt::Display for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Directed rotation axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
  PosX,
  NegX,
  PosY,
  NegY,
  PosZ,
  NegZ,
}

impl Axis {
  /// All six axes, positive before negative.
  pub const ALL: [Axis; 6] = [
    Axis::PosX,
    Axis::NegX,
    Axis::PosY,
    Axis::NegY,
    Axis::PosZ,
    Axis::NegZ,
  ];

  /// Build a directed axis from a component and a sign.
  pub const fn new(component: Component, positive: bool) -> Self {
    match (component, positive) {
      (Component::X, true) => Axis::PosX,
      (Component::X, false) => Axis::NegX,
      (Component::Y, true) => Axis::PosY,
      (Component::Y, false) => Axis::NegY,
      (Component::Z, true) => Axis::PosZ,
      (Component::Z, false) => Axis::NegZ,
    }
  }

  /// Component the axis points along (held fixed within a section).
  #[inline]
  pub const fn normal(self) -> Component {
    match self {
      Axis::PosX | Axis::NegX => Component::X,
      Axis::PosY | Axis::NegY => Component::Y,
      Axis::PosZ | Axis::NegZ => Component::Z,
    }
  }

  #[inline]
  pub const fn is_positive(self) -> bool {
    matches!(self, Axis::PosX | Axis::PosY | Axis::PosZ)
  }

  /// Same component, opposite direction. Turns about the two cancel.
  pub const fn opposite(self) -> Self {
    Self::new(self.normal(), !self.is_positive())
  }

  /// In-plane components `(u, v)` such that a turn carries `(u, v)` to
  /// `(v, D-1-u)`.
  ///
  /// Positive axes use the cyclic pair as is; negative axes swap it, which
  /// reverses the turn sense.
  #[inline]
  pub const fn turn_plane(self) -> (Component, Component) {
    let (b, c) = self.normal().plane();
    if self.is_positive() {
      (b, c)
    } else {
      (c, b)
    }
  }
}

impl fmt::Display for Axis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.is_positive() { '+' } else { '-' };
    write!(f, "{}{}", sign, self.normal())
  }
}

/// Text that names no axis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown axis {0:?}: expected one of +x, -x, +y, -y, +z, -z")]
pub struct ParseAxisError(pub String);

impl FromStr for Axis {
  type Err = ParseAxisError;

  /// Accepts `+x`, `-x`, `x` (same as `+x`) and so on, case-insensitive.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let (positive, letter) = match trimmed.as_bytes() {
      [b'+', letter] => (true, *letter),
      [b'-', letter] => (false, *letter),
      [letter] => (true, *letter),
      _ => return Err(ParseAxisError(s.to_string())),
    };
    let component = match letter.to_ascii_lowercase() {
      b'x' => Component::X,
      b'y' => Component::Y,
      b'z' => Component::Z,
      _ => return Err(ParseAxisError(s.to_string())),
    };
    Ok(Axis::new(component, positive))
  }
}

#[cfg(test)]
#[path = "axis_test.rs"]
mod axis_test;
