use std::any::TypeId;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use wayline_route::{AnyRoute, DestinationKey};

use crate::bundle::DestinationBundle;
use crate::collision::{RegistrationConflict, cmp_registrants, first_conflict};
use crate::destination::Destination;
use crate::error::UnresolvedRoute;

/// Keys bound to a secondary lookup (route type or kind tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBinding {
	/// Exactly one registration matches.
	Unique(DestinationKey),
	/// Several registrations match; keys are sorted.
	Ambiguous(Vec<DestinationKey>),
}

impl KeyBinding {
	fn from_keys(mut keys: Vec<DestinationKey>) -> Self {
		if keys.len() == 1 {
			Self::Unique(keys.remove(0))
		} else {
			Self::Ambiguous(keys)
		}
	}
}

/// Merged, read-only resolution table built from every bundle a host installs.
pub struct DestinationTable<V> {
	by_key: HashMap<DestinationKey, Arc<Destination<V>>>,
	by_type: HashMap<TypeId, KeyBinding>,
	by_kind: HashMap<&'static str, KeyBinding>,
}

impl<V: 'static> DestinationTable<V> {
	/// Composes bundles into a table.
	///
	/// Fails on the first duplicate effective key (smallest key first), whatever the order of
	/// `bundles`.
	pub fn compose<'a, I>(bundles: I) -> Result<Self, RegistrationConflict>
	where
		I: IntoIterator<Item = &'a DestinationBundle<V>>,
	{
		let mut destinations: Vec<Destination<V>> = Vec::new();
		for bundle in bundles {
			let collected = bundle.collect();
			tracing::trace!(bundle = bundle.label(), registrations = collected.len(), "collected destination bundle");
			destinations.extend(collected);
		}

		destinations.sort_by(cmp_registrants);
		if let Some(conflict) = first_conflict(&destinations) {
			tracing::error!(key = %conflict.key, first = %conflict.first, second = %conflict.second, "destination key conflict");
			return Err(conflict);
		}

		let mut types: HashMap<TypeId, Vec<DestinationKey>> = HashMap::default();
		let mut kinds: HashMap<&'static str, Vec<DestinationKey>> = HashMap::default();
		let mut by_key = HashMap::with_capacity_and_hasher(destinations.len(), Default::default());

		// Sorted by key, so every key list below comes out sorted too.
		for destination in destinations {
			types.entry(destination.route_type()).or_default().push(destination.key().clone());
			for &kind in destination.kinds() {
				let keys = kinds.entry(kind).or_default();
				if keys.last() != Some(destination.key()) {
					keys.push(destination.key().clone());
				}
			}
			by_key.insert(destination.key().clone(), Arc::new(destination));
		}

		let table = Self {
			by_key,
			by_type: types.into_iter().map(|(ty, keys)| (ty, KeyBinding::from_keys(keys))).collect(),
			by_kind: kinds.into_iter().map(|(kind, keys)| (kind, KeyBinding::from_keys(keys))).collect(),
		};
		tracing::debug!(destinations = table.len(), "composed destination table");
		Ok(table)
	}
}

impl<V> DestinationTable<V> {
	/// Resolves a route to its destination.
	///
	/// With `key`, the registration under that key must exist and render the route's type.
	/// Without it, the route type must be registered under exactly one key.
	pub fn resolve(&self, route: &AnyRoute, key: Option<&DestinationKey>) -> Result<&Destination<V>, UnresolvedRoute> {
		match key {
			Some(key) => {
				let destination = self.get(key).ok_or_else(|| UnresolvedRoute::UnknownKey { key: key.clone() })?;
				if destination.route_type() != route.type_id() {
					return Err(UnresolvedRoute::TypeMismatch {
						key: key.clone(),
						expected: destination.route_type_name(),
						found: route.type_name(),
					});
				}
				Ok(destination)
			}
			None => match self.by_type.get(&route.type_id()) {
				Some(KeyBinding::Unique(key)) => self.get(key).ok_or_else(|| UnresolvedRoute::UnknownKey { key: key.clone() }),
				Some(KeyBinding::Ambiguous(keys)) => Err(UnresolvedRoute::AmbiguousType {
					route_type: route.type_name(),
					keys: keys.clone(),
				}),
				None => Err(UnresolvedRoute::NotRegistered {
					route_type: route.type_name(),
				}),
			},
		}
	}

	pub fn get(&self, key: &DestinationKey) -> Option<&Destination<V>> {
		self.by_key.get(key).map(Arc::as_ref)
	}

	/// Looks up a registration by key string.
	pub fn get_str(&self, key: &str) -> Option<&Destination<V>> {
		self.by_key.get(key).map(Arc::as_ref)
	}

	pub fn contains_key(&self, key: &DestinationKey) -> bool {
		self.by_key.contains_key(key)
	}

	/// Returns the registrations declaring `kind`.
	pub fn lookup_kind(&self, kind: &str) -> Option<&KeyBinding> {
		self.by_kind.get(kind)
	}

	/// Returns every registered key, sorted.
	pub fn keys(&self) -> Vec<&DestinationKey> {
		let mut keys: Vec<_> = self.by_key.keys().collect();
		keys.sort();
		keys
	}

	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}
}

impl<V> std::fmt::Debug for DestinationTable<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DestinationTable").field("keys", &self.keys()).finish()
	}
}
