use std::fmt;
use std::sync::Arc;

use wayline_route::{DestinationKey, Route};

use crate::destination::Destination;

/// Collects the registrations of one bundle.
///
/// Only reachable from inside a [`DestinationBundle`] closure while a table is being composed.
pub struct DestinationRegistry<V> {
	origin: &'static str,
	destinations: Vec<Destination<V>>,
}

impl<V: 'static> DestinationRegistry<V> {
	pub(crate) fn new(origin: &'static str) -> Self {
		Self {
			origin,
			destinations: Vec::new(),
		}
	}

	/// Registers `R` under its type-identity key.
	pub fn register<R, F>(&mut self, renderer: F) -> &mut Self
	where
		R: Route,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		self.register_with::<R, F>(None, renderer)
	}

	/// Registers `R` under an explicit, persisted key.
	pub fn register_keyed<R, F>(&mut self, key: impl Into<DestinationKey>, renderer: F) -> &mut Self
	where
		R: Route,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		self.register_with::<R, F>(Some(key.into()), renderer)
	}

	/// Registers `R` under `key`, or under its type-identity key when `key` is `None`.
	pub fn register_with<R, F>(&mut self, key: Option<DestinationKey>, renderer: F) -> &mut Self
	where
		R: Route,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		self.destinations.push(Destination::new::<R, F>(key, self.origin, renderer));
		self
	}

	pub(crate) fn into_destinations(self) -> Vec<Destination<V>> {
		self.destinations
	}
}

/// An opaque set of registrations exported by a feature module.
///
/// The closure only runs when a host composes a [`crate::DestinationTable`].
pub struct DestinationBundle<V> {
	label: &'static str,
	build: Arc<dyn Fn(&mut DestinationRegistry<V>) + Send + Sync>,
}

impl<V: 'static> DestinationBundle<V> {
	pub fn new<F>(label: &'static str, build: F) -> Self
	where
		F: Fn(&mut DestinationRegistry<V>) + Send + Sync + 'static,
	{
		Self {
			label,
			build: Arc::new(build),
		}
	}

	pub(crate) fn collect(&self) -> Vec<Destination<V>> {
		let mut registry = DestinationRegistry::new(self.label);
		(self.build)(&mut registry);
		registry.into_destinations()
	}
}

impl<V> DestinationBundle<V> {
	pub fn label(&self) -> &'static str {
		self.label
	}
}

impl<V> Clone for DestinationBundle<V> {
	fn clone(&self) -> Self {
		Self {
			label: self.label,
			build: Arc::clone(&self.build),
		}
	}
}

impl<V> fmt::Debug for DestinationBundle<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DestinationBundle").field("label", &self.label).finish_non_exhaustive()
	}
}
