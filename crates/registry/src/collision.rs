//! Conflict vocabulary and the canonical registration order.
//!
//! # Role
//!
//! Composition sorts every registration with [`cmp_registrants`] before indexing. Duplicate keys
//! end up adjacent, and because the order is total over (key, origin, route type), the reported
//! conflict does not depend on the order bundles were passed in.

use std::cmp::Ordering;
use std::fmt;

use wayline_route::DestinationKey;

use crate::destination::Destination;

/// One side of a registration conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
	/// Label of the contributing bundle.
	pub origin: &'static str,
	/// Name of the registered route type.
	pub route_type: &'static str,
}

impl Registrant {
	fn of<V>(destination: &Destination<V>) -> Self {
		Self {
			origin: destination.origin(),
			route_type: destination.route_type_name(),
		}
	}
}

impl fmt::Display for Registrant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} from `{}`", self.route_type, self.origin)
	}
}

/// Two registrations share an effective key.
///
/// Fatal: a host receiving this must not start navigating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("destination key `{key}` registered twice: {first} and {second}")]
pub struct RegistrationConflict {
	pub key: DestinationKey,
	pub first: Registrant,
	pub second: Registrant,
}

/// Total order used to lay out registrations before indexing.
pub(crate) fn cmp_registrants<V>(a: &Destination<V>, b: &Destination<V>) -> Ordering {
	a.key()
		.cmp(b.key())
		.then_with(|| a.origin().cmp(b.origin()))
		.then_with(|| a.route_type_name().cmp(b.route_type_name()))
}

/// Returns the smallest-keyed conflict in `sorted`, which must be ordered by [`cmp_registrants`].
pub(crate) fn first_conflict<V>(sorted: &[Destination<V>]) -> Option<RegistrationConflict> {
	sorted.windows(2).find(|pair| pair[0].key() == pair[1].key()).map(|pair| RegistrationConflict {
		key: pair[0].key().clone(),
		first: Registrant::of(&pair[0]),
		second: Registrant::of(&pair[1]),
	})
}
