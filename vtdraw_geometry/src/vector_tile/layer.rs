//! Vector Tile **Layer**.
//!
//! A layer owns its features and the extent their coordinates are scaled to. The key and
//! value tables are not stored: they are rebuilt by a [`PropertyManager`] on every call to
//! [`VectorTileLayer::to_blob`], which keeps rendering free of side effects.
//!
//! The encoding follows the MVT schema:
//!  * field 1: `name` (string, omitted when empty)
//!  * field 2: repeated `feature` (embedded message)
//!  * field 3: repeated `keys` (string)
//!  * field 4: repeated `values` (embedded message)
//!  * field 5: `extent` (varint, always written)
//!  * field 15: `version` (varint, always 2)

use super::{feature::VectorTileFeature, geometry_type::GeomType, property_manager::PropertyManager};
use anyhow::{Context, Result};
use log::debug;
use vtdraw_core::{
	Blob,
	constants::{DEFAULT_EXTENT, LAYER_VERSION},
	io::{ValueWriter, ValueWriterBlob},
};

#[derive(Clone, Debug, PartialEq)]
pub struct VectorTileLayer {
	name: String,
	extent: u32,
	features: Vec<VectorTileFeature>,
}

impl VectorTileLayer {
	/// Creates an empty layer with the default extent of 4096.
	pub fn new(name: &str) -> VectorTileLayer {
		VectorTileLayer {
			name: name.to_string(),
			extent: DEFAULT_EXTENT,
			features: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn extent(&self) -> u32 {
		self.extent
	}

	/// Sets the coordinate space all features of this layer are encoded with.
	pub fn set_extent(&mut self, extent: u32) {
		self.extent = extent;
	}

	/// Appends a new feature and returns it for drawing.
	pub fn add_feature(&mut self, geom_type: GeomType) -> &mut VectorTileFeature {
		let index = self.features.len();
		self.features.push(VectorTileFeature::new(geom_type));
		&mut self.features[index]
	}

	pub fn features(&self) -> &[VectorTileFeature] {
		&self.features
	}

	pub fn feature_mut(&mut self, index: usize) -> Option<&mut VectorTileFeature> {
		self.features.get_mut(index)
	}

	/// Serializes the layer message (without the surrounding tile field).
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		let mut property_manager = PropertyManager::new();

		if !self.name.is_empty() {
			writer
				.write_pbf_key(1, 2)
				.context("Failed to write PBF key for layer name")?;
			writer
				.write_pbf_string(&self.name)
				.context("Failed to write layer name")?;
		}

		for feature in &self.features {
			let tag_ids = property_manager
				.encode_tag_ids(feature.tags())
				.context("Failed to intern feature tags")?;
			writer
				.write_pbf_message(
					2,
					&feature
						.to_blob(&tag_ids, self.extent)
						.context("Failed to convert feature to blob")?,
				)
				.context("Failed to write feature blob")?;
		}

		for key in property_manager.iter_key() {
			writer
				.write_pbf_key(3, 2)
				.context("Failed to write PBF key for property key")?;
			writer.write_pbf_string(key).context("Failed to write property key")?;
		}

		for value in property_manager.iter_val() {
			writer
				.write_pbf_message(4, value)
				.context("Failed to write property value blob")?;
		}

		writer
			.write_pbf_key(5, 0)
			.context("Failed to write PBF key for extent")?;
		writer
			.write_varint(u64::from(self.extent))
			.context("Failed to write extent")?;

		writer
			.write_pbf_key(15, 0)
			.context("Failed to write PBF key for version")?;
		writer
			.write_varint(u64::from(LAYER_VERSION))
			.context("Failed to write version")?;

		debug!(
			"rendered layer '{}': {} features, {} keys, {} values",
			self.name,
			self.features.len(),
			property_manager.key.len(),
			property_manager.val.len()
		);

		Ok(writer.into_blob())
	}
}
