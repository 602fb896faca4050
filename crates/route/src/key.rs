use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a destination registration.
///
/// Keys are persisted in snapshots. Explicit keys should be namespaced strings such as
/// `"com.acme.threads.compose"`. A registration without an explicit key is keyed by the
/// route type's name ([`DestinationKey::of`]), which stays stable only while the type is not
/// moved or renamed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationKey(Cow<'static, str>);

impl DestinationKey {
	/// Creates a key from a static string.
	pub const fn from_static(key: &'static str) -> Self {
		Self(Cow::Borrowed(key))
	}

	/// Returns the type-identity key for `R`.
	pub fn of<R: ?Sized + 'static>() -> Self {
		Self(Cow::Borrowed(std::any::type_name::<R>()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DestinationKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for DestinationKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&'static str> for DestinationKey {
	fn from(key: &'static str) -> Self {
		Self::from_static(key)
	}
}

impl From<String> for DestinationKey {
	fn from(key: String) -> Self {
		Self(Cow::Owned(key))
	}
}
