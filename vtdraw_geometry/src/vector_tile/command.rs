//! Path commands as they are recorded on a feature.
//!
//! Coordinates stay floating point on the 256×256 canvas until the feature is rendered.
//! See <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>.

/// One drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
	MoveTo { x: f64, y: f64 },
	LineTo { x: f64, y: f64 },
	ClosePath,
}

/// Command id as written into the low three bits of a command integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
	MoveTo = 1,
	LineTo = 2,
	ClosePath = 7,
}

impl Command {
	pub fn kind(&self) -> CommandKind {
		match self {
			Command::MoveTo { .. } => CommandKind::MoveTo,
			Command::LineTo { .. } => CommandKind::LineTo,
			Command::ClosePath => CommandKind::ClosePath,
		}
	}

	/// Canvas position of the command. `ClosePath` carries no position and reports the origin.
	pub fn point(&self) -> [f64; 2] {
		match self {
			Command::MoveTo { x, y } | Command::LineTo { x, y } => [*x, *y],
			Command::ClosePath => [0.0, 0.0],
		}
	}
}

impl CommandKind {
	/// `(id & 0x7) | (count << 3)`
	pub fn command_integer(self, count: u32) -> u64 {
		((self as u64) & 0x7) | (u64::from(count) << 3)
	}
}
