//! A single vector tile feature: optional id, tags and a path on the 256×256 canvas.
//!
//! Tags and path commands are append-only. Nothing is encoded until the owning layer is
//! rendered, which is why the feature keeps typed tags and floating point commands.

use super::{
	command::Command,
	curve::{cubic_points, quadratic_points},
	geometry_encoder::GeometryEncoder,
	geometry_type::GeomType,
	value::TagValue,
};
use anyhow::{Context, Result};
use vtdraw_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileFeature {
	geom_type: GeomType,
	id: Option<u64>,
	tags: Vec<(String, TagValue)>,
	commands: Vec<Command>,
}

impl VectorTileFeature {
	pub fn new(geom_type: GeomType) -> VectorTileFeature {
		VectorTileFeature {
			geom_type,
			..Default::default()
		}
	}

	pub fn geom_type(&self) -> GeomType {
		self.geom_type
	}

	pub fn id(&self) -> Option<u64> {
		self.id
	}

	pub fn set_id(&mut self, id: u64) {
		self.id = Some(id);
	}

	pub fn tags(&self) -> &[(String, TagValue)] {
		&self.tags
	}

	/// Appends a tag. The same key may be added more than once; every occurrence is written.
	pub fn add_tag(&mut self, key: &str, value: impl Into<TagValue>) {
		self.tags.push((key.to_string(), value.into()));
	}

	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	pub fn move_to(&mut self, x: f64, y: f64) {
		self.commands.push(Command::MoveTo { x, y });
	}

	pub fn line_to(&mut self, x: f64, y: f64) {
		self.commands.push(Command::LineTo { x, y });
	}

	pub fn close_path(&mut self) {
		self.commands.push(Command::ClosePath);
	}

	/// Position of the last command, or the origin if there is none.
	///
	/// A trailing `ClosePath` also reports the origin.
	pub fn current_point(&self) -> [f64; 2] {
		self.commands.last().map_or([0.0, 0.0], Command::point)
	}

	/// Draws a quadratic Bezier curve from the current point as a run of `LineTo` commands.
	pub fn quadratic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		let points = quadratic_points(self.current_point(), [x1, y1], [x2, y2]);
		self.extend_lines(points);
	}

	/// Draws a cubic Bezier curve from the current point as a run of `LineTo` commands.
	pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
		let points = cubic_points(self.current_point(), [x1, y1], [x2, y2], [x3, y3]);
		self.extend_lines(points);
	}

	fn extend_lines(&mut self, points: Vec<[f64; 2]>) {
		self
			.commands
			.extend(points.into_iter().map(|[x, y]| Command::LineTo { x, y }));
	}

	/// Serializes the feature message.
	///
	/// `tag_ids` are the interned `[key, value, …]` indices of this feature's tags, `extent`
	/// is the coordinate space of the owning layer.
	pub fn to_blob(&self, tag_ids: &[u32], extent: u32) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		if let Some(id) = self.id {
			writer
				.write_pbf_key(1, 0)
				.context("Failed to write PBF key for feature ID")?;
			writer.write_varint(id).context("Failed to write feature ID")?;
		}

		if !tag_ids.is_empty() {
			writer
				.write_pbf_key(2, 2)
				.context("Failed to write PBF key for tag IDs")?;
			writer
				.write_pbf_packed_uint32(tag_ids)
				.context("Failed to write tag IDs")?;
		}

		if self.geom_type != GeomType::Unknown {
			writer
				.write_pbf_key(3, 0)
				.context("Failed to write PBF key for geometry type")?;
			writer
				.write_varint(self.geom_type.as_u64())
				.context("Failed to write geometry type")?;
		}

		if !self.commands.is_empty() {
			let geometry = GeometryEncoder::encode(extent, &self.commands).context("Failed to encode geometry")?;
			writer
				.write_pbf_message(4, &geometry)
				.context("Failed to write geometry data")?;
		}

		Ok(writer.into_blob())
	}
}
