//! [`Blob`] is the owned byte buffer every writer produces and every encoded message is passed around as.
//!
//! ```rust
//! use vtdraw_core::Blob;
//!
//! let blob = Blob::from(vec![0x1A, 0x02, 0x78, 0x02]);
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.as_hex(), "1a 02 78 02");
//! ```

use std::fmt::Debug;

/// Thin wrapper around `Vec<u8>`.
///
/// It is hashable so that encoded messages can be used directly as deduplication keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the bytes as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Consumes the blob and returns the underlying vector.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Space separated lowercase hex dump, mostly useful in logs and failing tests.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|b| format!("{b:02x}"))
			.collect::<Vec<String>>()
			.join(" ")
	}

	/// Number of bytes, as `u64` because that is what the varint length prefixes take.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): [{}]", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Blob::new_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn empty() {
		let blob = Blob::new_empty();
		assert!(blob.is_empty());
		assert_eq!(blob.len(), 0);
		assert_eq!(blob, Blob::default());
	}

	#[test]
	fn conversions() {
		let vec = vec![0x0A, 0x03, b'k', b'e', b'y'];
		let blob = Blob::from(vec.as_slice());
		assert_eq!(blob.len(), 5);
		assert_eq!(blob.as_slice(), vec.as_slice());
		assert_eq!(blob.clone().into_vec(), vec);
		assert_eq!(Blob::from(&[1u8, 2, 3]), Blob::from(vec![1, 2, 3]));
	}

	#[test]
	fn debug_and_hex() {
		let blob = Blob::from(vec![0x38, 0x00, 0xff]);
		assert_eq!(blob.as_hex(), "38 00 ff");
		assert_eq!(format!("{blob:?}"), "Blob(3): [38 00 ff]");
	}

	#[test]
	fn hash_distinguishes_content() {
		let mut set = HashSet::new();
		set.insert(Blob::from(vec![0x38, 0x00]));
		set.insert(Blob::from(vec![0x38, 0x00]));
		set.insert(Blob::from(vec![0x38, 0x01]));
		assert_eq!(set.len(), 2);
	}
}
