//! Canvas, encoding and Web Mercator constants used across vtdraw.
//!
//! These are fixed values, not runtime configuration. The only per-layer knob is the
//! layer extent, which defaults to [`DEFAULT_EXTENT`].

/// Edge length of the tile-local drawing canvas. All geometry commands are given in
/// `0..=TILE_SIZE` regardless of the extent the layer is encoded with.
pub const TILE_SIZE: f64 = 256.0;

/// Default coordinate space of a layer (MVT field 5).
pub const DEFAULT_EXTENT: u32 = 4096;

/// Fraction of the extent that geometry may extend beyond the tile edge before it is clamped.
pub const OVERSCAN_RATIO: f64 = 0.10;

/// Layer version written into every layer (MVT field 15).
pub const LAYER_VERSION: u32 = 2;

/// Maximum latitude in degrees covered by the Web Mercator projection.
pub const MAX_LAT: f64 = 85.051_128_78;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Lower bound for the number of points a Bezier curve is flattened into.
pub const MIN_CURVE_SEGMENTS: usize = 4;
