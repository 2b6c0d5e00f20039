//! Value writers for the protobuf wire format.

mod value_writer;
mod value_writer_blob;

pub use value_writer::*;
pub use value_writer_blob::*;
