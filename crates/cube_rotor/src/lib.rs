//! cube_rotor - in-place 90° rotation of cubic voxel volumes
//!
//! A `D × D × D` volume lives in one linear buffer (`x + y·D + z·D²`).
//! Rotating it about one of six directed axes needs no second buffer: every
//! cross-section perpendicular to the axis is split into concentric rings,
//! each ring into groups of four cells (quartets), and each quartet is cycled
//! in place.
//!
//! # Layers
//!
//! - **Coordinate mapping** ([`layout`]): coordinate ↔ index conversion
//! - **Quartet geometry** ([`quartet`]): the four cells of one rotation cycle
//! - **Rotator** ([`rotate`]): quartet → ring → section → volume
//! - **Tensor** ([`tensor`]): owned buffer plus its dimension
//!
//! # Example
//!
//! ```
//! use cube_rotor::{Axis, Coord, Tensor};
//!
//! let mut tensor = Tensor::from_fn(4, |c| c.x + 4 * c.y + 16 * c.z).unwrap();
//! tensor.rotate(Axis::PosZ).unwrap();
//!
//! assert_eq!(*tensor.get(Coord::new(0, 3, 0)).unwrap(), 0);
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod layout;
pub mod quartet;
pub mod rotate;
pub mod tensor;

// Re-export commonly used items
pub use axis::{Axis, Component, ParseAxisError};
pub use config::{TensorConfig, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};
pub use error::{Result, RotorError};
pub use layout::{cell_count, coord_to_index, index_to_coord, Coord};
pub use quartet::{compute_quartet, layer_count, ring_edge, Quartet};
pub use rotate::{rotate, rotate_layer, rotate_quartet, rotate_section};
pub use tensor::Tensor;
