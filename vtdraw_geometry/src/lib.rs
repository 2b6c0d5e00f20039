//! Drawing of Mapbox Vector Tiles.
//!
//! [`vector_tile`] builds tiles from layers, features, tags and paths on a 256×256 canvas and
//! encodes them into MVT protobuf bytes. [`mercator`] places latitude/longitude on a tile and
//! computes the geographic bounds of a tile.

pub mod mercator;
pub mod vector_tile;

pub use mercator::{TileBounds, lat_lon_to_pixel, tile_bounds};
pub use vector_tile::{Command, GeomType, TagValue, VectorTile, VectorTileFeature, VectorTileLayer};
