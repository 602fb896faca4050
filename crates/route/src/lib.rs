//! Route values and destination keys.
//!
//! A route is an immutable, comparable payload naming a destination. Route types implement
//! [`Route`], which pins down the closed set of stable kind tags a value can carry. Navigation
//! state holds routes type-erased as [`AnyRoute`], which still compares by value and can be
//! flattened into snapshot fields without knowing the concrete type.
//!
//! # Wire shape
//!
//! Route values serialize to JSON objects. Enum route types use internal tagging on the
//! [`KIND_FIELD`] (`#[serde(tag = "kind")]`) and struct route types carry exactly one kind,
//! declared with [`single_kind_route!`]. The field names [`KIND_FIELD`] and [`KEY_FIELD`] belong to
//! the snapshot envelope and cannot be used as route payload fields.

mod erased;
mod fields;
mod key;

pub use erased::{AnyRoute, ErasedRoute};
pub use fields::{FieldsError, KEY_FIELD, KIND_FIELD, json_type_name, route_fields, route_from_fields};
pub use key::DestinationKey;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A value that identifies a navigation destination.
pub trait Route: Serialize + DeserializeOwned + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
	/// Every kind tag a value of this type can carry.
	///
	/// Tags are persisted, so they must never be reused for a different payload shape.
	const KINDS: &'static [&'static str];

	/// Returns the kind tag of this value's case.
	fn kind(&self) -> &'static str;
}

/// Implements [`Route`] for a struct route type with a single kind tag.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// pub struct ThreadDetailsRoute {
/// 	pub id: String,
/// }
///
/// wayline_route::single_kind_route!(ThreadDetailsRoute => "threadDetails");
/// ```
#[macro_export]
macro_rules! single_kind_route {
	($ty:ty => $kind:literal) => {
		impl $crate::Route for $ty {
			const KINDS: &'static [&'static str] = &[$kind];

			fn kind(&self) -> &'static str {
				$kind
			}
		}
	};
}
