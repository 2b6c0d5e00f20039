//! Typed tag values and their encoding as embedded MVT `Value` messages.
//!
//! | variant  | field | wire type |
//! |----------|-------|-----------|
//! | `String` | 1     | 2         |
//! | `Bytes`  | 1     | 2         |
//! | `Float`  | 2     | 5         |
//! | `Double` | 3     | 1         |
//! | `UInt`   | 5     | 0         |
//! | `Int`    | 6     | 0 (zigzag)|
//! | `Bool`   | 7     | 0         |
//!
//! Narrow integer types are widened to 64 bit, so `5u8` and `5u64` encode identically.
//! Byte sequences are written unchanged under the string field, so `"abc"` and `b"abc"` share
//! an entry in the value table while invalid UTF-8 is kept as is. Anything else can be turned into a string with
//! [`TagValue::from_display`].

use anyhow::{Context, Result};
use std::fmt::Display;
use vtdraw_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
	Bool(bool),
	Bytes(Vec<u8>),
	Double(f64),
	Float(f32),
	Int(i64),
	String(String),
	UInt(u64),
}

impl TagValue {
	/// Coerces any displayable value into a string tag value.
	pub fn from_display<T: Display>(value: T) -> TagValue {
		TagValue::String(value.to_string())
	}

	/// Encodes the value as the body of an MVT `Value` message.
	///
	/// The resulting bytes double as the deduplication key of the layer's value table.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		match self {
			TagValue::String(s) => {
				writer
					.write_pbf_key(1, 2)
					.context("Failed to write PBF key for string value")?;
				writer.write_pbf_string(s).context("Failed to write string value")?;
			}
			TagValue::Bytes(b) => {
				writer
					.write_pbf_key(1, 2)
					.context("Failed to write PBF key for byte value")?;
				writer
					.write_pbf_blob(&Blob::from(b.as_slice()))
					.context("Failed to write byte value")?;
			}
			TagValue::Float(f) => {
				writer
					.write_pbf_key(2, 5)
					.context("Failed to write PBF key for float value")?;
				writer.write_f32(*f).context("Failed to write float value")?;
			}
			TagValue::Double(f) => {
				writer
					.write_pbf_key(3, 1)
					.context("Failed to write PBF key for double value")?;
				writer.write_f64(*f).context("Failed to write double value")?;
			}
			TagValue::UInt(u) => {
				writer
					.write_pbf_key(5, 0)
					.context("Failed to write PBF key for uint value")?;
				writer.write_varint(*u).context("Failed to write uint value")?;
			}
			TagValue::Int(i) => {
				writer
					.write_pbf_key(6, 0)
					.context("Failed to write PBF key for sint value")?;
				writer.write_svarint(*i).context("Failed to write sint value")?;
			}
			TagValue::Bool(b) => {
				writer
					.write_pbf_key(7, 0)
					.context("Failed to write PBF key for bool value")?;
				writer
					.write_varint(u64::from(*b))
					.context("Failed to write bool value")?;
			}
		}

		Ok(writer.into_blob())
	}
}

macro_rules! impl_from_uint {
	($($t:ty),*) => {$(
		impl From<$t> for TagValue {
			fn from(value: $t) -> Self {
				TagValue::UInt(value as u64)
			}
		}
	)*};
}

macro_rules! impl_from_int {
	($($t:ty),*) => {$(
		impl From<$t> for TagValue {
			fn from(value: $t) -> Self {
				TagValue::Int(value as i64)
			}
		}
	)*};
}

impl_from_uint!(u8, u16, u32, u64, usize);
impl_from_int!(i8, i16, i32, i64, isize);

impl From<f32> for TagValue {
	fn from(value: f32) -> Self {
		TagValue::Float(value)
	}
}

impl From<f64> for TagValue {
	fn from(value: f64) -> Self {
		TagValue::Double(value)
	}
}

impl From<bool> for TagValue {
	fn from(value: bool) -> Self {
		TagValue::Bool(value)
	}
}

impl From<&str> for TagValue {
	fn from(value: &str) -> Self {
		TagValue::String(value.to_string())
	}
}

impl From<&String> for TagValue {
	fn from(value: &String) -> Self {
		TagValue::String(value.clone())
	}
}

impl From<String> for TagValue {
	fn from(value: String) -> Self {
		TagValue::String(value)
	}
}

impl From<char> for TagValue {
	fn from(value: char) -> Self {
		TagValue::from_display(value)
	}
}

impl From<&[u8]> for TagValue {
	fn from(value: &[u8]) -> Self {
		TagValue::Bytes(value.to_vec())
	}
}

impl From<Vec<u8>> for TagValue {
	fn from(value: Vec<u8>) -> Self {
		TagValue::Bytes(value)
	}
}
