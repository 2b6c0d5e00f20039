//! [`ValueWriterBlob`] collects written values in memory and hands them out as a [`Blob`].

use super::ValueWriter;
use crate::types::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{Cursor, Write};
use std::marker::PhantomData;

/// In-memory [`ValueWriter`].
///
/// Vector tiles are little-endian throughout, so callers use [`ValueWriterBlob::new_le`].
pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	#[must_use]
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	/// Consumes the writer and returns everything written so far.
	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.cursor.into_inner())
	}
}

impl ValueWriterBlob<LittleEndian> {
	#[must_use]
	pub fn new_le() -> ValueWriterBlob<LittleEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBlob<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn written(f: impl FnOnce(&mut ValueWriterBlob<LittleEndian>) -> Result<()>) -> Result<Vec<u8>> {
		let mut writer = ValueWriterBlob::new_le();
		f(&mut writer)?;
		Ok(writer.into_blob().into_vec())
	}

	#[rstest]
	#[case(0, vec![0x00])]
	#[case(1, vec![0x01])]
	#[case(127, vec![0x7F])]
	#[case(128, vec![0x80, 0x01])]
	#[case(300, vec![0xAC, 0x02])]
	#[case(4096, vec![0x80, 0x20])]
	#[case(u64::MAX, vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01])]
	fn varint(#[case] value: u64, #[case] expected: Vec<u8>) -> Result<()> {
		assert_eq!(written(|w| w.write_varint(value))?, expected);
		Ok(())
	}

	#[rstest]
	#[case(0, vec![0x00])]
	#[case(-1, vec![0x01])]
	#[case(1, vec![0x02])]
	#[case(-2, vec![0x03])]
	#[case(-75, vec![149, 1])]
	#[case(4096, vec![0x80, 0x40])]
	#[case(i64::MIN, vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01])]
	fn svarint(#[case] value: i64, #[case] expected: Vec<u8>) -> Result<()> {
		assert_eq!(written(|w| w.write_svarint(value))?, expected);
		Ok(())
	}

	#[rstest]
	#[case(1, 0, vec![0x08])]
	#[case(2, 2, vec![0x12])]
	#[case(3, 2, vec![0x1A])]
	#[case(2, 5, vec![0x15])]
	#[case(3, 1, vec![0x19])]
	#[case(15, 0, vec![0x78])]
	#[case(16, 0, vec![0x80, 0x01])]
	fn pbf_key(#[case] field: u32, #[case] wire_type: u8, #[case] expected: Vec<u8>) -> Result<()> {
		assert_eq!(written(|w| w.write_pbf_key(field, wire_type))?, expected);
		Ok(())
	}

	#[test]
	fn floats_are_little_endian() -> Result<()> {
		assert_eq!(written(|w| w.write_f32(1.0))?, vec![0x00, 0x00, 0x80, 0x3F]);
		assert_eq!(
			written(|w| w.write_f64(1.0))?,
			vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
		);
		Ok(())
	}

	#[test]
	fn pbf_packed_uint32() -> Result<()> {
		assert_eq!(
			written(|w| w.write_pbf_packed_uint32(&[100, 150, 300]))?,
			vec![5, 100, 150, 1, 172, 2]
		);
		assert_eq!(written(|w| w.write_pbf_packed_uint32(&[]))?, vec![0]);
		Ok(())
	}

	#[test]
	fn pbf_string() -> Result<()> {
		assert_eq!(
			written(|w| w.write_pbf_string("anti"))?,
			vec![0x04, b'a', b'n', b't', b'i']
		);
		Ok(())
	}

	#[test]
	fn pbf_message() -> Result<()> {
		let payload = Blob::from(vec![0x38, 0x00]);
		assert_eq!(written(|w| w.write_pbf_message(4, &payload))?, vec![34, 2, 56, 0]);
		Ok(())
	}

	#[test]
	fn position_tracks_bytes() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		assert!(writer.is_empty()?);
		writer.write_varint(300)?;
		assert_eq!(writer.position()?, 2);
		assert!(!writer.is_empty()?);
		Ok(())
	}
}
