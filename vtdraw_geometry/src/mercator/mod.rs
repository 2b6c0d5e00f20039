//! Web Mercator helpers for placing geographic data on a tile.
//!
//! Tiles are addressed by `(tile_x, tile_y, zoom)` in the usual XYZ scheme: `tile_y` grows
//! southwards and a zoom level `z` has `2^z` columns and rows. Pixel coordinates are
//! measured on the 256×256 canvas of one tile, which is the canvas the vector tile
//! builder draws on.
//!
//! # Examples
//!
//! ```
//! use vtdraw_geometry::{lat_lon_to_pixel, tile_bounds};
//!
//! let bounds = tile_bounds(6195, 13154, 15);
//! let (x, y) = lat_lon_to_pixel(bounds.max_lat, bounds.min_lon, 6195, 13154, 15);
//! assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
//! ```

use std::f64::consts::PI;
use vtdraw_core::constants::{MAX_LAT, MAX_LON, TILE_SIZE};

/// Geographic bounding box of a tile in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileBounds {
	pub min_lat: f64,
	pub min_lon: f64,
	pub max_lat: f64,
	pub max_lon: f64,
}

impl TileBounds {
	/// Returns `(min_lat, min_lon, max_lat, max_lon)`.
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.min_lat, self.min_lon, self.max_lat, self.max_lon)
	}
}

/// Edge length of the whole world in pixels at `zoom`.
fn map_size(zoom: u8) -> f64 {
	TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Converts a latitude/longitude to pixel coordinates relative to the top-left corner of
/// the given tile.
///
/// Inputs outside the projectable range are clamped to `±85.05112878°` latitude and
/// `±180°` longitude. Points outside the tile yield coordinates outside `0..=256`, which
/// the geometry encoder clamps to its overscan margin.
pub fn lat_lon_to_pixel(lat: f64, lon: f64, tile_x: u32, tile_y: u32, zoom: u8) -> (f64, f64) {
	let lat = lat.clamp(-MAX_LAT, MAX_LAT);
	let lon = lon.clamp(-MAX_LON, MAX_LON);

	let lx = (lon + 180.0) / 360.0;
	let sin_lat = (lat * PI / 180.0).sin();
	let ly = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

	let size = map_size(zoom);
	let pixel_x = (lx * size).clamp(0.0, size);
	let pixel_y = (ly * size).clamp(0.0, size);

	(
		pixel_x - f64::from(tile_x) * TILE_SIZE,
		pixel_y - f64::from(tile_y) * TILE_SIZE,
	)
}

/// Inverse projection of a world pixel. Pixels are clamped to the last pixel of the map.
fn pixel_to_lat_lon(pixel_x: f64, pixel_y: f64, zoom: u8) -> (f64, f64) {
	let size = map_size(zoom);
	let x = pixel_x.clamp(0.0, size - 1.0) / size - 0.5;
	let y = 0.5 - pixel_y.clamp(0.0, size - 1.0) / size;

	let lat = 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI;
	let lon = 360.0 * x;
	(lat, lon)
}

/// Computes the geographic bounds of a tile.
///
/// Tiles on the edge of the map are snapped to the full extent of the projection, so the
/// leftmost column starts at `-180°`, the rightmost column ends at `180°`, the top row ends
/// at `85.05112878°` and the bottom row starts at `-85.05112878°`.
pub fn tile_bounds(tile_x: u32, tile_y: u32, zoom: u8) -> TileBounds {
	let left = f64::from(tile_x) * TILE_SIZE;
	let top = f64::from(tile_y) * TILE_SIZE;
	let (mut max_lat, mut min_lon) = pixel_to_lat_lon(left, top, zoom);
	let (mut min_lat, mut max_lon) = pixel_to_lat_lon(left + TILE_SIZE, top + TILE_SIZE, zoom);

	// `None` when the zoom level is too deep to count tiles: every tile is then treated as
	// touching every edge.
	let tiles = 1u64.checked_shl(u32::from(zoom));
	let column = u64::from(tile_x);
	let row = u64::from(tile_y);

	if tiles.is_none_or(|n| column % n == 0) {
		min_lon = -MAX_LON;
	}
	if tiles.is_none_or(|n| column % n == n - 1) {
		max_lon = MAX_LON;
	}
	if row == 0 {
		max_lat = MAX_LAT;
	}
	if tiles.is_none_or(|n| row >= n - 1) {
		min_lat = -MAX_LAT;
	}

	TileBounds {
		min_lat,
		min_lon,
		max_lat,
		max_lon,
	}
}
