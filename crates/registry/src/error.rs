use wayline_route::DestinationKey;

/// A route could not be matched to a registered destination.
///
/// Non-fatal: the push that carried the route is rejected and the stack stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedRoute {
	/// No registration uses the explicit key.
	#[error("no destination registered under key `{key}`")]
	UnknownKey { key: DestinationKey },

	/// The explicit key is registered for a different route type.
	#[error("destination `{key}` renders {expected}, not {found}")]
	TypeMismatch {
		key: DestinationKey,
		expected: &'static str,
		found: &'static str,
	},

	/// The route type was never registered.
	#[error("no destination registered for route type {route_type}")]
	NotRegistered { route_type: &'static str },

	/// The route type is registered under several keys and the push named none of them.
	#[error("route type {route_type} is registered under several keys ({keys:?}); push it with an explicit key")]
	AmbiguousType {
		route_type: &'static str,
		keys: Vec<DestinationKey>,
	},
}
