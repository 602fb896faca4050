use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Logical identity of a chrome item within its slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(Cow<'static, str>);

impl ItemId {
	pub const fn from_static(id: &'static str) -> Self {
		Self(Cow::Borrowed(id))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&'static str> for ItemId {
	fn from(id: &'static str) -> Self {
		Self::from_static(id)
	}
}

impl From<String> for ItemId {
	fn from(id: String) -> Self {
		Self(Cow::Owned(id))
	}
}

/// Version token of an item's payload. Only compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpdateKey {
	Int(i64),
	Text(String),
	Hash(u64),
}

impl UpdateKey {
	/// Derives a key from any hashable state.
	///
	/// Uses a fixed-seed hasher, so equal values produce equal keys across passes.
	pub fn hashed<T: Hash + ?Sized>(value: &T) -> Self {
		let mut hasher = FxHasher::default();
		value.hash(&mut hasher);
		Self::Hash(hasher.finish())
	}
}

impl From<i64> for UpdateKey {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for UpdateKey {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<u32> for UpdateKey {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<bool> for UpdateKey {
	fn from(value: bool) -> Self {
		Self::Int(value.into())
	}
}

impl From<&str> for UpdateKey {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<String> for UpdateKey {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

/// Content declared for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeItem<C> {
	pub id: ItemId,
	pub update_key: Option<UpdateKey>,
	pub content: C,
}

impl<C> ChromeItem<C> {
	pub fn new(id: impl Into<ItemId>, content: C) -> Self {
		Self {
			id: id.into(),
			update_key: None,
			content,
		}
	}

	pub fn with_update_key(mut self, key: impl Into<UpdateKey>) -> Self {
		self.update_key = Some(key.into());
		self
	}

	/// Whether `other` is the same logical item at the same payload version.
	pub fn same_identity(&self, other: &Self) -> bool {
		self.id == other.id && self.update_key == other.update_key
	}
}
