//! Layer-wide interning of tag keys and values.
//!
//! Keys are interned by their text, values by their encoded `Value` message, so two values of
//! different types never share an index even if they print the same. Indices are handed out
//! in first-seen order, starting at 0.

use super::value::TagValue;
use anyhow::{Context, Result};
use std::{collections::HashMap, fmt::Debug, hash::Hash};
use vtdraw_core::Blob;

/// Ordered set that remembers the index of every entry.
#[derive(Clone, PartialEq)]
pub struct IndexedList<T>
where
	T: Clone + Eq + Hash,
{
	list: Vec<T>,
	map: HashMap<T, u32>,
}

impl<T> IndexedList<T>
where
	T: Clone + Eq + Hash,
{
	/// Returns the index of `entry`, appending it first if it has not been seen yet.
	pub fn add(&mut self, entry: T) -> u32 {
		if let Some(index) = self.map.get(&entry) {
			return *index;
		}
		let index = self.list.len() as u32;
		self.map.insert(entry.clone(), index);
		self.list.push(entry);
		index
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.list.iter()
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}
}

impl<T: Clone + Eq + Hash> Default for IndexedList<T> {
	fn default() -> IndexedList<T> {
		IndexedList {
			list: Vec::new(),
			map: HashMap::new(),
		}
	}
}

impl<T> Debug for IndexedList<T>
where
	T: Clone + Debug + Eq + Hash,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.list).finish()
	}
}

/// Key and value tables of one layer.
///
/// Built fresh for every render and thrown away afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyManager {
	pub key: IndexedList<String>,
	pub val: IndexedList<Blob>,
}

impl PropertyManager {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_key(&mut self, key: &str) -> u32 {
		self.key.add(key.to_string())
	}

	/// Interns the encoded form of `value`.
	pub fn add_val(&mut self, value: &TagValue) -> Result<u32> {
		Ok(self.val.add(value.to_blob().context("Failed to encode tag value")?))
	}

	pub fn iter_key(&self) -> impl Iterator<Item = &String> + '_ {
		self.key.iter()
	}

	pub fn iter_val(&self) -> impl Iterator<Item = &Blob> + '_ {
		self.val.iter()
	}

	/// Interns every tag and returns the flat `[key, value, key, value, …]` index list of a feature.
	pub fn encode_tag_ids(&mut self, tags: &[(String, TagValue)]) -> Result<Vec<u32>> {
		let mut tag_ids: Vec<u32> = Vec::with_capacity(tags.len() * 2);

		for (key, val) in tags {
			tag_ids.push(self.add_key(key));
			tag_ids.push(self.add_val(val)?);
		}

		Ok(tag_ids)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn tags(list: &[(&str, TagValue)]) -> Vec<(String, TagValue)> {
		list.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
	}

	#[test]
	fn indexed_list_keeps_first_seen_order() {
		let mut list = IndexedList::default();
		assert_eq!(list.add("b"), 0);
		assert_eq!(list.add("a"), 1);
		assert_eq!(list.add("b"), 0);
		assert_eq!(list.add("c"), 2);
		assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
		assert_eq!(list.len(), 3);
		assert_eq!(format!("{list:?}"), "[\"b\", \"a\", \"c\"]");
	}

	#[test]
	fn keys_and_values_are_indexed_independently() -> Result<()> {
		let mut manager = PropertyManager::new();
		let first = manager.encode_tag_ids(&tags(&[
			("anti", TagValue::from("freeze")),
			("should be consumed", TagValue::from(false)),
		]))?;
		assert_eq!(first, vec![0, 0, 1, 1]);

		let second = manager.encode_tag_ids(&tags(&[
			("should be consumed", TagValue::from("freeze")),
			("new", TagValue::from(false)),
			("anti", TagValue::from(7u8)),
		]))?;
		assert_eq!(second, vec![1, 0, 2, 1, 0, 2]);

		assert_eq!(manager.iter_key().collect::<Vec<_>>(), vec!["anti", "should be consumed", "new"]);
		assert_eq!(manager.val.len(), 3);
		Ok(())
	}

	#[test]
	fn values_are_keyed_by_encoding() -> Result<()> {
		let mut manager = PropertyManager::new();
		let ids = manager.encode_tag_ids(&tags(&[
			("a", TagValue::from("1")),
			("a", TagValue::from(1u64)),
			("a", TagValue::from(1u8)),
			("a", TagValue::from(1i64)),
			("a", TagValue::from(1.0f32)),
			("a", TagValue::from(1.0f64)),
		]))?;
		assert_eq!(ids, vec![0, 0, 0, 1, 0, 1, 0, 2, 0, 3, 0, 4]);
		assert_eq!(
			manager.iter_val().cloned().collect::<Vec<Blob>>(),
			vec![
				TagValue::from("1").to_blob()?,
				TagValue::from(1u64).to_blob()?,
				TagValue::from(1i64).to_blob()?,
				TagValue::from(1.0f32).to_blob()?,
				TagValue::from(1.0f64).to_blob()?,
			]
		);
		Ok(())
	}

	#[test]
	fn byte_values_are_keyed_by_raw_bytes() -> Result<()> {
		let mut manager = PropertyManager::new();
		let ids = manager.encode_tag_ids(&tags(&[
			("a", TagValue::from(vec![0xFF])),
			("a", TagValue::from(vec![0xFE])),
			("a", TagValue::from(b"abc".as_slice())),
			("a", TagValue::from("abc")),
		]))?;
		assert_eq!(ids, vec![0, 0, 0, 1, 0, 2, 0, 2]);
		assert_eq!(manager.val.len(), 3);
		Ok(())
	}

	#[test]
	fn empty_tags() -> Result<()> {
		let mut manager = PropertyManager::new();
		assert!(manager.encode_tag_ids(&[])?.is_empty());
		assert!(manager.key.is_empty());
		assert!(manager.val.is_empty());
		Ok(())
	}
}
