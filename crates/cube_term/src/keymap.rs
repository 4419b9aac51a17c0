//! Key bindings.
//!
//! | Key        | Command                   |
//! |------------|---------------------------|
//! | `x` / `X`  | rotate about `+x` / `-x`  |
//! | `y` / `Y`  | rotate about `+y` / `-y`  |
//! | `z` / `Z`  | rotate about `+z` / `-z`  |
//! | `]` or `n` | next displayed section    |
//! | `[` or `p` | previous displayed section|
//! | `q`        | quit                      |

use cube_rotor::Axis;

/// One front-end action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	Rotate(Axis),
	NextSection,
	PrevSection,
	Quit,
}

/// Map a key to its command, if it has one.
pub fn command_for_key(key: char) -> Option<Command> {
	let command = match key {
		'x' => Command::Rotate(Axis::PosX),
		'X' => Command::Rotate(Axis::NegX),
		'y' => Command::Rotate(Axis::PosY),
		'Y' => Command::Rotate(Axis::NegY),
		'z' => Command::Rotate(Axis::PosZ),
		'Z' => Command::Rotate(Axis::NegZ),
		']' | 'n' => Command::NextSection,
		'[' | 'p' => Command::PrevSection,
		'q' => Command::Quit,
		_ => return None,
	};
	Some(command)
}
