//! Configuration parsing for the front end.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line arguments.
//!
//! ```toml
//! dimension = 5
//! fill = "faces"
//! view = "z"
//! section = 0
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use cube_rotor::{Component, Coord, Tensor, TensorConfig, DEFAULT_DIMENSION};
use serde::Deserialize;
use std::path::Path;

/// Characters used by the `index` fill, cycled by linear index.
const INDEX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Initial contents of the volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillPattern {
	/// Every cell is `.`.
	#[default]
	Blank,
	/// Cells cycle through `0-9a-zA-Z` in buffer order.
	Index,
	/// Outer faces marked L/R (x), U/D (y), F/B (z); interior `.`.
	Faces,
}

impl FillPattern {
	/// Character for one cell of a `dimension³` volume.
	pub fn cell(self, coord: Coord, dimension: usize) -> char {
		let last = dimension - 1;
		match self {
			FillPattern::Blank => '.',
			FillPattern::Index => {
				let idx = coord.x + coord.y * dimension + coord.z * dimension * dimension;
				INDEX_CHARSET[idx % INDEX_CHARSET.len()] as char
			}
			FillPattern::Faces => {
				if coord.x == 0 {
					'L'
				} else if coord.x == last {
					'R'
				} else if coord.y == 0 {
					'U'
				} else if coord.y == last {
					'D'
				} else if coord.z == 0 {
					'F'
				} else if coord.z == last {
					'B'
				} else {
					'.'
				}
			}
		}
	}
}

/// Axis the displayed cross-section is perpendicular to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewAxis {
	X,
	Y,
	#[default]
	Z,
}

impl From<ViewAxis> for Component {
	fn from(view: ViewAxis) -> Self {
		match view {
			ViewAxis::X => Component::X,
			ViewAxis::Y => Component::Y,
			ViewAxis::Z => Component::Z,
		}
	}
}

/// Root configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Side length of the cube.
	pub dimension: usize,
	/// Initial fill.
	pub fill: FillPattern,
	/// Axis of the displayed cross-section.
	pub view: ViewAxis,
	/// Index of the displayed cross-section.
	pub section: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			dimension: DEFAULT_DIMENSION,
			fill: FillPattern::default(),
			view: ViewAxis::default(),
			section: 0,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::from_toml_str(&content)
	}

	/// Parse configuration from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		Ok(config)
	}

	/// Check the dimension bounds and that the section lies inside the cube.
	pub fn validate(&self) -> Result<TensorConfig> {
		let tensor_config = TensorConfig::new().with_dimension(self.dimension);
		tensor_config
			.validate()
			.with_context(|| format!("Bad dimension argument: {}", self.dimension))?;

		if self.section >= self.dimension {
			anyhow::bail!(
				"section must be below the dimension {}, got {}",
				self.dimension,
				self.section
			);
		}

		Ok(tensor_config)
	}

	/// Build the initial volume.
	pub fn build_tensor(&self) -> Result<Tensor<char>> {
		let tensor_config = self.validate()?;
		let dimension = tensor_config.dimension;
		let tensor = Tensor::from_fn(dimension, |coord| self.fill.cell(coord, dimension))
			.context("Failed to allocate volume")?;
		Ok(tensor)
	}
}
