//! cube_term - rotate a cubic volume and view it one cross-section at a time.
//!
//! Controls (one or more keys per input line):
//! - x/X, y/Y, z/Z: rotate about +/- that axis
//! - ] or n / [ or p: next / previous displayed section
//! - q: quit
//!
//! With `--moves` the keys are applied without reading stdin and the final
//! section is printed once.

mod config;
mod keymap;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, FillPattern, ViewAxis};
use session::{Flow, Session};

/// Rotate a cubic volume in place and view one cross-section at a time.
#[derive(Parser, Debug)]
#[command(name = "cube_term")]
#[command(about = "Rotates a cubic volume about six axes and prints cross-sections")]
struct Args {
	/// Side length of the cube (3-50).
	#[arg(short, long)]
	dimension: Option<usize>,

	/// Initial fill pattern.
	#[arg(short, long, value_enum)]
	fill: Option<FillPattern>,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Keys to apply instead of reading stdin.
	#[arg(short, long)]
	moves: Option<String>,

	/// Axis the displayed cross-section is perpendicular to.
	#[arg(long, value_enum)]
	view: Option<ViewAxis>,

	/// Initially displayed section index.
	#[arg(short, long)]
	section: Option<usize>,

	/// Print the coordinate/index layout before starting.
	#[arg(long)]
	layout: bool,

	/// Print every z slice of the final volume.
	#[arg(long)]
	dump: bool,
}

impl Args {
	/// File configuration (or defaults) with command-line overrides applied.
	fn resolve_config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => {
				info!("Loading config from: {}", path.display());
				Config::load(path)?
			}
			None => Config::default(),
		};

		if let Some(dimension) = self.dimension {
			config.dimension = dimension;
		}
		if let Some(fill) = self.fill {
			config.fill = fill;
		}
		if let Some(view) = self.view {
			config.view = view;
		}
		if let Some(section) = self.section {
			config.section = section;
		}

		config.validate()?;
		Ok(config)
	}
}

fn main() -> Result<()> {
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(io::stderr))
		.with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
		.init();

	let args = Args::parse();
	let config = args.resolve_config()?;

	info!(
		dimension = config.dimension,
		fill = ?config.fill,
		view = ?config.view,
		"Starting session"
	);

	let mut out = io::stdout().lock();

	if args.layout {
		writeln!(out, "{}", render::render_layout(config.dimension)?)?;
	}

	let tensor = config.build_tensor()?;
	let mut session = Session::new(tensor, config.view.into(), config.section)?;

	match &args.moves {
		Some(keys) => {
			session.apply_keys(keys)?;
			info!(moves = keys.len(), section = session.section(), "Moves applied");
			write!(out, "{}", session.frame()?)?;
		}
		None => run_interactive(&mut session, &mut out)?,
	}

	if args.dump {
		writeln!(out, "\nElements:\n{}", render::render_volume(session.tensor())?)?;
	}

	Ok(())
}

/// Read stdin line by line, redrawing after every line until `q` or EOF.
fn run_interactive(session: &mut Session, out: &mut impl Write) -> Result<()> {
	write!(out, "{}", session.frame()?)?;
	out.flush()?;

	for line in io::stdin().lock().lines() {
		let line = line.context("Failed to read from stdin")?;
		if session.apply_keys(&line)? == Flow::Quit {
			info!("Quit requested");
			break;
		}
		write!(out, "{}", session.frame()?)?;
		out.flush()?;
	}

	Ok(())
}
