//! Text rendering of cross-sections and of the buffer layout.

use anyhow::Result;
use cube_rotor::{coord_to_index, index_to_coord, Component, Coord, Tensor};
use std::fmt::{Display, Write};

/// One cross-section as `D` lines of `D` characters.
pub fn render_section<T: Display>(tensor: &Tensor<T>, normal: Component, index: usize) -> Result<String> {
	let mut out = String::new();
	for row in tensor.section(normal, index)? {
		for cell in row {
			write!(out, "{}", cell)?;
		}
		out.push('\n');
	}
	Ok(out)
}

/// Every `z` slice, top to bottom, separated by blank lines.
pub fn render_volume<T: Display>(tensor: &Tensor<T>) -> Result<String> {
	let mut slices = Vec::with_capacity(tensor.dimension());
	for z in 0..tensor.dimension() {
		slices.push(render_section(tensor, Component::Z, z)?);
	}
	Ok(slices.join("\n\n"))
}

/// Coordinate → index listing followed by index → coordinate listing.
pub fn render_layout(dimension: usize) -> Result<String> {
	let mut out = String::from("Coordinate to index:\n");
	let mut indices = Vec::new();
	for z in 0..dimension {
		for y in 0..dimension {
			for x in 0..dimension {
				indices.push(coord_to_index(Coord::new(x, y, z), dimension)?.to_string());
			}
		}
	}
	out.push_str(&indices.join(","));

	out.push_str("\n\nIndex to coordinate:\n");
	for idx in 0..indices.len() {
		let coord = index_to_coord(idx, dimension)?;
		writeln!(out, "{},{},{}", coord.x, coord.y, coord.z)?;
	}
	Ok(out)
}
