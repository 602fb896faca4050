//! Navigation snapshot codec.
//!
//! Converts the non-root part of a navigation stack to bytes and back. The byte format is JSON:
//!
//! ```text
//! { "schemaVersion": 1, "entries": [ { "key": "<destination key>", "kind": "<tag>", ...fields } ] }
//! ```
//!
//! Snapshots written before versioning existed are still readable. They carry no
//! `schemaVersion` and spell each entry as a single-key object, `{ "<tag>": { ...fields } }`,
//! either in a bare array or under `entries`.
//!
//! # Decoding
//!
//! The presence of `schemaVersion` selects the path. A present version must equal
//! [`SCHEMA_VERSION`]; there is no migration inside the codec. Both paths reduce entries to
//! (key?, kind, fields) and share the same resolution against the [`DestinationTable`], so a legacy
//! entry decodes to exactly the route value its current-format twin does.
//!
//! # Invariants
//!
//! - Must fail the whole snapshot when any entry fails.
//!   - Enforced in: [`SnapshotCodec::decode`]
//!   - Tested by: `invariants::test_decode_is_atomic`
//!   - Failure symptom: A restored stack is a prefix of the saved one.
//!
//! - Must accept only the exact current schema version on the versioned path.
//!   - Enforced in: `codec::open_envelope`
//!   - Tested by: `invariants::test_version_must_match_exactly`
//!   - Failure symptom: Fields written by a newer build are silently misread.
//!
//! - Must try the legacy shape only when `schemaVersion` is absent.
//!   - Enforced in: `codec::open_envelope`
//!   - Tested by: `invariants::test_legacy_only_without_version`
//!   - Failure symptom: A corrupt current snapshot is half-restored as legacy data.
//!
//! - Must decode legacy entries to the same values as current entries.
//!   - Enforced in: `codec::legacy_entry`, `SnapshotCodec::restore_entry`
//!   - Tested by: `invariants::test_legacy_matches_current`
//!   - Failure symptom: Users upgrading from an old build land on different screens.
//!
//! [`DestinationTable`]: wayline_registry::DestinationTable

mod codec;
mod error;
mod snapshot;
mod store;

pub use codec::{DecodedSnapshot, RestoredRoute, SnapshotCodec};
pub use error::{DecodeError, EncodeError};
pub use snapshot::{ENTRIES_FIELD, SCHEMA_VERSION, SCHEMA_VERSION_FIELD, Snapshot, SnapshotEntry, SnapshotFormat};
pub use store::{MemorySnapshotStore, SnapshotStore};

#[cfg(test)]
mod invariants;

#[cfg(test)]
mod test_fixtures;
