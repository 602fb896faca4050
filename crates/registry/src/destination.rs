use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use wayline_route::{AnyRoute, DestinationKey, Route, route_from_fields};

type Renderer<V> = Arc<dyn Fn(&AnyRoute) -> Option<V> + Send + Sync>;

/// Rebuilds a type-erased route from its kind tag and payload fields.
pub type RouteDecoder = fn(&str, Map<String, Value>) -> Result<AnyRoute, serde_json::Error>;

/// A single registration in a [`crate::DestinationTable`].
pub struct Destination<V> {
	key: DestinationKey,
	/// Key derived from the route type's name rather than given explicitly.
	type_keyed: bool,
	route_type: TypeId,
	route_type_name: &'static str,
	kinds: &'static [&'static str],
	origin: &'static str,
	render: Renderer<V>,
	decode: RouteDecoder,
}

impl<V: 'static> Destination<V> {
	pub(crate) fn new<R, F>(key: Option<DestinationKey>, origin: &'static str, renderer: F) -> Self
	where
		R: Route,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		Self {
			type_keyed: key.is_none(),
			key: key.unwrap_or_else(DestinationKey::of::<R>),
			route_type: TypeId::of::<R>(),
			route_type_name: std::any::type_name::<R>(),
			kinds: R::KINDS,
			origin,
			render: Arc::new(move |route: &AnyRoute| route.downcast_ref::<R>().map(&renderer)),
			decode: decode_route::<R>,
		}
	}
}

impl<V> Destination<V> {
	pub fn key(&self) -> &DestinationKey {
		&self.key
	}

	/// Whether the key is the route type's name. Such keys are not stable across builds and
	/// are never persisted.
	pub fn is_type_keyed(&self) -> bool {
		self.type_keyed
	}

	pub fn route_type(&self) -> TypeId {
		self.route_type
	}

	pub fn route_type_name(&self) -> &'static str {
		self.route_type_name
	}

	/// Kind tags the registered route type can carry.
	pub fn kinds(&self) -> &'static [&'static str] {
		self.kinds
	}

	/// Label of the bundle that contributed this registration.
	pub fn origin(&self) -> &'static str {
		self.origin
	}

	pub fn declares_kind(&self, kind: &str) -> bool {
		self.kinds.contains(&kind)
	}

	/// Invokes the renderer, or returns `None` when `route` is not of the registered type.
	pub fn render(&self, route: &AnyRoute) -> Option<V> {
		(self.render)(route)
	}

	/// Rebuilds a route value of the registered type from persisted fields.
	pub fn decode(&self, kind: &str, fields: Map<String, Value>) -> Result<AnyRoute, serde_json::Error> {
		(self.decode)(kind, fields)
	}
}

impl<V> fmt::Debug for Destination<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Destination")
			.field("key", &self.key)
			.field("route_type", &self.route_type_name)
			.field("kinds", &self.kinds)
			.field("origin", &self.origin)
			.finish_non_exhaustive()
	}
}

fn decode_route<R: Route>(kind: &str, fields: Map<String, Value>) -> Result<AnyRoute, serde_json::Error> {
	route_from_fields::<R>(kind, fields).map(AnyRoute::new)
}
