//! Vector Tile (MVT) encoding.
//!
//! Tiles are drawn declaratively: add layers to a [`VectorTile`], features to a layer, then
//! tags and path commands (move/line/close, plus quadratic and cubic curves) to a feature.
//! Coordinates are always given on a 256×256 canvas and rescaled to the layer extent when
//! the tile is rendered.
//!
//! - [`command`]: path commands and the command integer of the geometry stream.
//! - [`curve`]: flattening of Bezier curves into line segments.
//! - [`feature`]: a single feature with id, tags and path.
//! - [`geometry_encoder`]: delta/zigzag encoding of a path into the geometry field.
//! - [`geometry_type`]: the wire-level geometry type.
//! - [`layer`]: a layer and its serialization, including the key/value tables.
//! - [`property_manager`]: first-seen interning of tag keys and encoded values.
//! - [`tile`]: the top-level container.
//! - [`value`]: typed tag values and their embedded `Value` message.
//!
//! ```rust
//! use vtdraw_geometry::vector_tile::{GeomType, VectorTile};
//!
//! let mut tile = VectorTile::new();
//! let layer = tile.add_layer("roads");
//! let feature = layer.add_feature(GeomType::LineString);
//! feature.add_tag("class", "primary");
//! feature.move_to(0.0, 128.0);
//! feature.line_to(256.0, 128.0);
//! let bytes = tile.render().unwrap();
//! assert_eq!(bytes[0], 0x1A);
//! ```

mod command;
mod curve;
mod feature;
mod geometry_encoder;
mod geometry_type;
mod layer;
mod property_manager;
mod tile;
mod value;

pub use command::{Command, CommandKind};
pub use feature::VectorTileFeature;
pub use geometry_encoder::GeometryEncoder;
pub use geometry_type::GeomType;
pub use layer::VectorTileLayer;
pub use property_manager::{IndexedList, PropertyManager};
pub use tile::VectorTile;
pub use value::TagValue;
