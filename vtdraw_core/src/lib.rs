//! Byte-level building blocks shared by the vtdraw crates: the [`Blob`] byte container,
//! protobuf-style value writers and the immutable constants of the tile canvas.

pub mod constants;

pub mod io;

pub mod types;
pub use types::*;
