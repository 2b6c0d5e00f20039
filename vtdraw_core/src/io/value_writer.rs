//! The [`ValueWriter`] trait: protobuf wire primitives on top of any [`std::io::Write`].
//!
//! Every vector tile message is built from four primitives:
//!
//! - unsigned base-128 varints ([`ValueWriter::write_varint`]),
//! - zigzag encoded signed varints ([`ValueWriter::write_svarint`]),
//! - field keys `(field_number << 3) | wire_type` ([`ValueWriter::write_pbf_key`]),
//! - length-delimited payloads ([`ValueWriter::write_pbf_blob`], [`ValueWriter::write_pbf_message`]).
//!
//! Wire types used in this project: `0` varint, `1` 64-bit fixed, `2` length-delimited, `5` 32-bit fixed.
//!
//! ```rust
//! use vtdraw_core::io::{ValueWriter, ValueWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = ValueWriterBlob::new_le();
//!     writer.write_pbf_key(5, 0)?;
//!     writer.write_varint(4096)?;
//!     assert_eq!(writer.into_blob().into_vec(), vec![40, 128, 32]);
//!     Ok(())
//! }
//! ```

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes protobuf values to a byte sink using the byte order `E` for fixed-width numbers.
pub trait ValueWriter<E: ByteOrder> {
	/// The underlying sink.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Number of bytes written so far.
	fn position(&mut self) -> Result<u64>;

	/// `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned varint: seven bits per byte, least significant group first,
	/// the high bit of each byte set when more bytes follow.
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Writes a signed integer as zigzag varint, so that small negative numbers stay short.
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(((value << 1) ^ (value >> 63)) as u64)
	}

	/// Writes an IEEE-754 single precision float.
	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	/// Writes an IEEE-754 double precision float.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	/// Writes the raw bytes of a [`Blob`], without length prefix.
	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	/// Writes raw bytes, without length prefix.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	/// Writes a field key.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type))
			.context("Failed to write PBF key")
	}

	/// Writes the payload of a packed repeated `uint32` field: total byte length, then one varint per value.
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		for &value in data {
			writer
				.write_varint(u64::from(value))
				.context("Failed to write varint for packed uint32")?;
		}
		self
			.write_pbf_blob(&writer.into_blob())
			.context("Failed to write packed uint32 blob")
	}

	/// Writes a length prefix followed by the blob.
	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self
			.write_varint(blob.len())
			.context("Failed to write varint for blob length")?;
		self.write_blob(blob).context("Failed to write PBF blob")
	}

	/// Writes a length prefix followed by the UTF-8 bytes of `text`.
	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self
			.write_varint(text.len() as u64)
			.context("Failed to write varint for string length")?;
		self
			.write_slice(text.as_bytes())
			.context("Failed to write PBF string")
	}

	/// Writes a complete length-delimited field: key with wire type 2, length prefix, payload.
	fn write_pbf_message(&mut self, field_number: u32, blob: &Blob) -> Result<()> {
		self.write_pbf_key(field_number, 2)?;
		self
			.write_pbf_blob(blob)
			.with_context(|| format!("Failed to write embedded message for field {field_number}"))
	}
}
