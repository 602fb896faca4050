#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Destination registry.
//!
//! # Purpose
//!
//! Maps route values to renderers. Feature modules export [`DestinationBundle`]s; the host
//! composes every bundle once, at startup, into a read-only [`DestinationTable`] that the
//! navigator consults on every push and the restoration codec consults on every load.
//!
//! # Mental Model
//!
//! 1. **Registration:** a bundle's closure calls [`DestinationRegistry::register`] (type-keyed)
//!    or [`DestinationRegistry::register_keyed`] (explicit key) for each route type it owns.
//! 2. **Composition:** [`DestinationTable::compose`] runs every bundle closure, sorts the
//!    registrations by key and fails on the first duplicate key. No renderer runs here.
//! 3. **Resolution:** [`DestinationTable::resolve`] finds a destination by explicit key or by the
//!    route's type identity; [`DestinationTable::lookup_kind`] finds one by persisted kind tag.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`DestinationBundle`] | Opaque, clonable set of registrations exported by a feature. |
//! | [`DestinationRegistry`] | Collector handed to a bundle closure during composition. |
//! | [`DestinationTable`] | Merged, immutable resolution table. |
//! | [`Destination`] | One registration: key, route type, kinds, renderer, decoder. |
//!
//! # Invariants
//!
//! - Must reject duplicate effective keys at composition time.
//!   - Enforced in: [`crate::table::DestinationTable::compose`], [`crate::collision::first_conflict`]
//!   - Tested by: `invariants::test_duplicate_key_fails_composition`
//!   - Failure symptom: A push silently renders another feature's screen.
//!
//! - Must compose deterministically regardless of bundle order.
//!   - Enforced in: [`crate::collision::cmp_registrants`]
//!   - Tested by: `invariants::test_compose_is_order_independent`
//!   - Failure symptom: Startup succeeds or fails depending on module link order.
//!
//! - Must not invoke renderers while composing.
//!   - Enforced in: [`crate::destination::Destination::new`] (renderers are only captured)
//!   - Tested by: `invariants::test_compose_never_renders`
//!   - Failure symptom: Screens are built before any navigation happens.
//!
//! - Must refuse to guess between several registrations of one route type.
//!   - Enforced in: [`crate::table::DestinationTable::resolve`]
//!   - Tested by: `invariants::test_ambiguous_type_requires_key`
//!   - Failure symptom: A route reused across features opens the wrong feature's screen.

mod bundle;
mod collision;
mod destination;
mod error;
mod table;

pub use bundle::{DestinationBundle, DestinationRegistry};
pub use collision::{Registrant, RegistrationConflict};
pub use destination::{Destination, RouteDecoder};
pub use error::UnresolvedRoute;
pub use table::{DestinationTable, KeyBinding};


#[cfg(test)]
mod test_fixtures;
