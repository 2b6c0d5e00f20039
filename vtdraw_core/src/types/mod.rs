//! Plain data types used by the writers.

mod blob;
pub use blob::*;
