//! Encodes a feature's path into the MVT geometry stream.
//!
//! Canvas coordinates are scaled to the layer extent, truncated toward zero and clamped to a
//! 10% overscan margin around the tile. The stream then holds command integers followed by
//! zigzag encoded deltas relative to the previous point.
//!
//! Encoding rules:
//! - every `MoveTo` is written as its own command with count 1,
//! - a run of `LineTo` is written as one command; a zero-delta move to the cursor is inserted
//!   first if no `MoveTo` is active, and points that would not move the cursor are dropped,
//! - every `ClosePath` is written as its own command and ends the active `MoveTo`.

use super::command::{Command, CommandKind};
use anyhow::{Context, Result};
use byteorder::LE;
use itertools::Itertools;
use log::trace;
use vtdraw_core::{
	Blob,
	constants::{OVERSCAN_RATIO, TILE_SIZE},
	io::{ValueWriter, ValueWriterBlob},
};

pub struct GeometryEncoder {
	extent: f64,
	cursor: (i64, i64),
	has_move_to: bool,
	writer: ValueWriterBlob<LE>,
}

impl GeometryEncoder {
	pub fn new(extent: u32) -> GeometryEncoder {
		GeometryEncoder {
			extent: f64::from(extent),
			cursor: (0, 0),
			has_move_to: false,
			writer: ValueWriterBlob::new_le(),
		}
	}

	/// Encodes `commands` for a layer with the given `extent`.
	pub fn encode(extent: u32, commands: &[Command]) -> Result<Blob> {
		let mut encoder = GeometryEncoder::new(extent);
		for (kind, run) in &commands.iter().chunk_by(|command| command.kind()) {
			match kind {
				CommandKind::MoveTo => {
					for command in run {
						encoder.move_to(command.point())?;
					}
				}
				CommandKind::LineTo => encoder.line_to_run(run.map(Command::point))?,
				CommandKind::ClosePath => {
					for _ in run {
						encoder.close_path()?;
					}
				}
			}
		}
		Ok(encoder.into_blob())
	}

	/// Current cursor in extent units.
	pub fn cursor(&self) -> (i64, i64) {
		self.cursor
	}

	pub fn into_blob(self) -> Blob {
		self.writer.into_blob()
	}

	/// Scales a canvas position to extent units.
	pub fn scale(&self, point: [f64; 2]) -> (i64, i64) {
		(self.scale_value(point[0]), self.scale_value(point[1]))
	}

	fn scale_value(&self, value: f64) -> i64 {
		let min = -self.extent * OVERSCAN_RATIO;
		let max = self.extent + self.extent * OVERSCAN_RATIO;
		let scaled = value / TILE_SIZE * self.extent;
		let clamped = scaled.clamp(min, max);
		if clamped != scaled {
			trace!("clamped coordinate {scaled} to {clamped}");
		}
		clamped as i64
	}

	pub fn move_to(&mut self, point: [f64; 2]) -> Result<()> {
		let (x, y) = self.scale(point);
		self
			.writer
			.write_varint(CommandKind::MoveTo.command_integer(1))
			.context("Failed to write MoveTo command")?;
		self.write_delta(x - self.cursor.0, y - self.cursor.1)?;
		self.cursor = (x, y);
		self.has_move_to = true;
		Ok(())
	}

	/// Writes one `LineTo` command for the whole run. The count is only known after
	/// degenerate points are filtered, so the deltas are buffered first.
	pub fn line_to_run(&mut self, points: impl Iterator<Item = [f64; 2]>) -> Result<()> {
		if !self.has_move_to {
			trace!("inserting implicit MoveTo before LineTo run");
			self
				.writer
				.write_varint(CommandKind::MoveTo.command_integer(1))
				.context("Failed to write implicit MoveTo command")?;
			self.write_delta(0, 0)?;
			self.has_move_to = true;
		}

		let mut deltas = ValueWriterBlob::new_le();
		let mut count: u32 = 0;
		for point in points {
			let (x, y) = self.scale(point);
			let (dx, dy) = (x - self.cursor.0, y - self.cursor.1);
			if dx == 0 && dy == 0 {
				trace!("dropping degenerate LineTo ({x}, {y})");
				continue;
			}
			deltas.write_svarint(dx).context("Failed to write x delta")?;
			deltas.write_svarint(dy).context("Failed to write y delta")?;
			self.cursor = (x, y);
			count += 1;
		}

		self
			.writer
			.write_varint(CommandKind::LineTo.command_integer(count))
			.context("Failed to write LineTo command")?;
		self
			.writer
			.write_blob(&deltas.into_blob())
			.context("Failed to write LineTo deltas")
	}

	pub fn close_path(&mut self) -> Result<()> {
		self
			.writer
			.write_varint(CommandKind::ClosePath.command_integer(1))
			.context("Failed to write ClosePath command")?;
		self.has_move_to = false;
		Ok(())
	}

	fn write_delta(&mut self, dx: i64, dy: i64) -> Result<()> {
		self.writer.write_svarint(dx).context("Failed to write x delta")?;
		self.writer.write_svarint(dy).context("Failed to write y delta")
	}
}
