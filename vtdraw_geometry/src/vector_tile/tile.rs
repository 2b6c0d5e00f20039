//! Vector Tile **Tile**: the top-level message of a `.mvt` file.
//!
//! A tile is nothing but its layers, each written as a length-delimited field 3 in the order
//! they were added. Rendering borrows the tile immutably.

use super::layer::VectorTileLayer;
use anyhow::{Context, Result};
use log::debug;
use vtdraw_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

/// Top-level container: an ordered list of layers, written as repeated field 3.
///
/// Layers are independent of each other, so distinct layers can be filled from different
/// threads by splitting [`VectorTile::layers_mut`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	layers: Vec<VectorTileLayer>,
}

impl VectorTile {
	pub fn new() -> VectorTile {
		VectorTile::default()
	}

	/// Appends an empty layer with the default extent and returns it for filling.
	pub fn add_layer(&mut self, name: &str) -> &mut VectorTileLayer {
		self.push_layer(VectorTileLayer::new(name))
	}

	/// Appends a layer that was built elsewhere.
	pub fn push_layer(&mut self, layer: VectorTileLayer) -> &mut VectorTileLayer {
		let index = self.layers.len();
		self.layers.push(layer);
		&mut self.layers[index]
	}

	pub fn layers(&self) -> &[VectorTileLayer] {
		&self.layers
	}

	pub fn layers_mut(&mut self) -> &mut [VectorTileLayer] {
		&mut self.layers
	}

	pub fn find_layer(&self, name: &str) -> Option<&VectorTileLayer> {
		self.layers.iter().find(|layer| layer.name() == name)
	}

	pub fn find_layer_mut(&mut self, name: &str) -> Option<&mut VectorTileLayer> {
		self.layers.iter_mut().find(|layer| layer.name() == name)
	}

	/// Serializes all layers in the order they were added.
	///
	/// The tile is not modified, so repeated calls give identical bytes.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		for layer in &self.layers {
			writer
				.write_pbf_message(
					3,
					&layer
						.to_blob()
						.with_context(|| format!("Failed to convert layer '{}' to blob", layer.name()))?,
				)
				.context("Failed to write layer blob")?;
		}

		let blob = writer.into_blob();
		debug!("rendered tile: {} layers, {} bytes", self.layers.len(), blob.len());
		Ok(blob)
	}

	/// Renders the tile into the bytes of a `.pbf`/`.mvt` file.
	pub fn render(&self) -> Result<Vec<u8>> {
		Ok(self.to_blob()?.into_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vector_tile::GeomType;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_tile_renders_nothing() -> Result<()> {
		assert!(VectorTile::new().render()?.is_empty());
		Ok(())
	}

	#[test]
	fn layers_keep_append_order() -> Result<()> {
		let mut tile = VectorTile::new();
		tile.add_layer("b");
		tile.add_layer("a");
		assert_eq!(
			tile.render()?,
			vec![
				26, 8, 10, 1, b'b', 40, 128, 32, 120, 2, // layer "b"
				26, 8, 10, 1, b'a', 40, 128, 32, 120, 2, // layer "a"
			]
		);
		Ok(())
	}

	#[test]
	fn find_layer() {
		let mut tile = VectorTile::new();
		tile.add_layer("roads");
		tile.push_layer(VectorTileLayer::new("water"));

		assert_eq!(tile.find_layer("water").map(VectorTileLayer::name), Some("water"));
		assert!(tile.find_layer("buildings").is_none());

		tile
			.find_layer_mut("roads")
			.unwrap()
			.add_feature(GeomType::LineString);
		assert_eq!(tile.layers()[0].features().len(), 1);
	}

	#[test]
	fn render_is_repeatable() -> Result<()> {
		let mut tile = VectorTile::new();
		let layer = tile.add_layer("points");
		let feature = layer.add_feature(GeomType::Point);
		feature.add_tag("n", 1.5f64);
		feature.move_to(64.0, 64.0);
		assert_eq!(tile.render()?, tile.render()?);
		Ok(())
	}

	#[test]
	fn layers_can_be_filled_in_parallel() {
		let mut tile = VectorTile::new();
		tile.add_layer("layer-points");
		tile.add_layer("layer-polygons");

		std::thread::scope(|scope| {
			let (points, polygons) = tile.layers_mut().split_at_mut(1);
			scope.spawn(move || {
				let feature = points[0].add_feature(GeomType::Point);
				feature.move_to(100.0, 100.0);
				feature.close_path();
			});
			scope.spawn(move || {
				let feature = polygons[0].add_feature(GeomType::Polygon);
				feature.move_to(100.0, 100.0);
				feature.move_to(50.0, 100.0);
				feature.move_to(0.0, 0.0);
				feature.close_path();
			});
		});

		assert_eq!(tile.layers().len(), 2);
		assert_eq!(tile.layers()[0].features().len(), 1);
		assert_eq!(tile.layers()[1].features().len(), 1);
	}
}
