use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{FieldsError, Route, route_fields};

/// Object-safe view of a [`Route`] value.
///
/// Implemented for every route type; there is no reason to implement it by hand.
pub trait ErasedRoute: Any + Send + Sync + fmt::Debug {
	fn as_any(&self) -> &dyn Any;
	fn kind(&self) -> &'static str;
	fn type_name(&self) -> &'static str;
	fn fields(&self) -> Result<Map<String, Value>, FieldsError>;
	fn eq_erased(&self, other: &dyn ErasedRoute) -> bool;
}

impl<R: Route> ErasedRoute for R {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn kind(&self) -> &'static str {
		Route::kind(self)
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<R>()
	}

	fn fields(&self) -> Result<Map<String, Value>, FieldsError> {
		route_fields(self)
	}

	fn eq_erased(&self, other: &dyn ErasedRoute) -> bool {
		other.as_any().downcast_ref::<R>().is_some_and(|other| other == self)
	}
}

/// A type-erased route value.
///
/// Cloning is cheap. Two values are equal when they have the same route type and compare
/// equal as that type.
#[derive(Clone)]
pub struct AnyRoute {
	value: Arc<dyn ErasedRoute>,
	type_id: TypeId,
}

impl AnyRoute {
	pub fn new<R: Route>(route: R) -> Self {
		Self {
			value: Arc::new(route),
			type_id: TypeId::of::<R>(),
		}
	}

	/// Returns the [`TypeId`] of the wrapped route type.
	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn type_name(&self) -> &'static str {
		self.value.type_name()
	}

	pub fn kind(&self) -> &'static str {
		self.value.kind()
	}

	/// Returns the payload fields of the wrapped value, without the kind tag.
	pub fn fields(&self) -> Result<Map<String, Value>, FieldsError> {
		self.value.fields()
	}

	pub fn is<R: Route>(&self) -> bool {
		self.type_id == TypeId::of::<R>()
	}

	pub fn downcast_ref<R: Route>(&self) -> Option<&R> {
		self.value.as_any().downcast_ref::<R>()
	}
}

impl<R: Route> From<R> for AnyRoute {
	fn from(route: R) -> Self {
		Self::new(route)
	}
}

impl PartialEq for AnyRoute {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id && self.value.eq_erased(other.value.as_ref())
	}
}

impl fmt::Debug for AnyRoute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.value, f)
	}
}
