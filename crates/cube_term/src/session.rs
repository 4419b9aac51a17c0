//! Session - the volume plus which cross-section is on screen.

use anyhow::{Context, Result};
use cube_rotor::{Component, Tensor};
use tracing::{debug, warn};

use crate::keymap::{command_for_key, Command};
use crate::render::render_section;

/// Whether the caller should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

pub struct Session {
	tensor: Tensor<char>,
	view: Component,
	section: usize,
}

impl Session {
	pub fn new(tensor: Tensor<char>, view: Component, section: usize) -> Result<Self> {
		if section >= tensor.dimension() {
			anyhow::bail!(
				"section {} is outside a cube of dimension {}",
				section,
				tensor.dimension()
			);
		}
		Ok(Self {
			tensor,
			view,
			section,
		})
	}

	pub fn tensor(&self) -> &Tensor<char> {
		&self.tensor
	}

	pub fn section(&self) -> usize {
		self.section
	}

	/// Apply one command. Section moves clamp at the cube faces.
	pub fn apply(&mut self, command: Command) -> Result<Flow> {
		debug!(?command, section = self.section, "apply");
		match command {
			Command::Rotate(axis) => {
				self.tensor
					.rotate(axis)
					.with_context(|| format!("Rotation about {} failed", axis))?;
			}
			Command::NextSection => {
				self.section = (self.section + 1).min(self.tensor.dimension() - 1);
			}
			Command::PrevSection => {
				self.section = self.section.saturating_sub(1);
			}
			Command::Quit => return Ok(Flow::Quit),
		}
		Ok(Flow::Continue)
	}

	/// Apply every key in `keys`; whitespace is skipped, unknown keys ignored.
	pub fn apply_keys(&mut self, keys: &str) -> Result<Flow> {
		for key in keys.chars().filter(|c| !c.is_whitespace()) {
			let Some(command) = command_for_key(key) else {
				warn!(%key, "ignoring unmapped key");
				continue;
			};
			if self.apply(command)? == Flow::Quit {
				return Ok(Flow::Quit);
			}
		}
		Ok(Flow::Continue)
	}

	/// Header line plus the displayed cross-section.
	pub fn frame(&self) -> Result<String> {
		let grid = render_section(&self.tensor, self.view, self.section)?;
		Ok(format!(
			"{}={} of {}\n{}",
			self.view,
			self.section,
			self.tensor.dimension(),
			grid
		))
	}
}
