use serde_json::{Map, Value};
use wayline_registry::{Destination, DestinationTable, KeyBinding};
use wayline_route::{AnyRoute, DestinationKey, KEY_FIELD, KIND_FIELD, json_type_name};

use crate::error::{DecodeError, EncodeError};
use crate::snapshot::{ENTRIES_FIELD, SCHEMA_VERSION, SCHEMA_VERSION_FIELD, Snapshot, SnapshotEntry, SnapshotFormat};

/// A route rebuilt from a snapshot, with the key of the registration that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredRoute {
	pub key: DestinationKey,
	pub route: AnyRoute,
}

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSnapshot {
	pub format: SnapshotFormat,
	/// Non-root stack entries, bottom first.
	pub routes: Vec<RestoredRoute>,
}

/// An entry reduced to the parts both decode paths share.
struct RawEntry {
	key: Option<DestinationKey>,
	kind: String,
	fields: Map<String, Value>,
}

/// Encodes and decodes snapshots against one destination table.
pub struct SnapshotCodec<'t, V> {
	table: &'t DestinationTable<V>,
}

impl<'t, V> SnapshotCodec<'t, V> {
	pub fn new(table: &'t DestinationTable<V>) -> Self {
		Self { table }
	}

	/// Encodes `(key, route)` pairs, bottom of the stack first, in the current format.
	///
	/// Type-identity keys are left out; those entries are found again by kind.
	pub fn encode<'r, I>(&self, routes: I) -> Result<Vec<u8>, EncodeError>
	where
		I: IntoIterator<Item = (&'r DestinationKey, &'r AnyRoute)>,
	{
		let entries = routes
			.into_iter()
			.enumerate()
			.map(|(index, (key, route))| {
				let fields = route.fields().map_err(|source| EncodeError::Fields {
					index,
					key: key.clone(),
					source,
				})?;
				let persisted = !self.table.get(key).is_some_and(|destination| destination.is_type_keyed());
				Ok(SnapshotEntry {
					key: persisted.then(|| key.clone()),
					kind: route.kind().to_owned(),
					fields,
				})
			})
			.collect::<Result<Vec<_>, EncodeError>>()?;

		let snapshot = Snapshot {
			schema_version: SCHEMA_VERSION,
			entries,
		};
		Ok(serde_json::to_vec(&snapshot)?)
	}

	/// Decodes a snapshot, or rejects it as a whole.
	pub fn decode(&self, bytes: &[u8]) -> Result<DecodedSnapshot, DecodeError> {
		let root: Value = serde_json::from_slice(bytes).map_err(DecodeError::Malformed)?;
		let (format, entries) = open_envelope(root)?;

		let routes = entries
			.into_iter()
			.enumerate()
			.map(|(index, entry)| {
				let raw = match format {
					SnapshotFormat::Current => current_entry(index, entry)?,
					SnapshotFormat::Legacy => legacy_entry(index, entry)?,
				};
				self.restore_entry(index, raw)
			})
			.collect::<Result<Vec<_>, DecodeError>>()?;

		tracing::debug!(%format, entries = routes.len(), "decoded navigation snapshot");
		Ok(DecodedSnapshot { format, routes })
	}

	fn restore_entry(&self, index: usize, raw: RawEntry) -> Result<RestoredRoute, DecodeError> {
		let destination = self.destination_for(index, &raw)?;
		let RawEntry { kind, fields, .. } = raw;

		let route = destination.decode(&kind, fields).map_err(|source| DecodeError::InvalidFields {
			index,
			kind: kind.clone(),
			source,
		})?;
		if route.kind() != kind {
			return Err(DecodeError::KindMismatch {
				index,
				expected: kind,
				found: route.kind(),
			});
		}

		Ok(RestoredRoute {
			key: destination.key().clone(),
			route,
		})
	}

	fn destination_for(&self, index: usize, raw: &RawEntry) -> Result<&'t Destination<V>, DecodeError> {
		let unknown_kind = || DecodeError::UnknownKind {
			index,
			kind: raw.kind.clone(),
		};

		let destination = match &raw.key {
			Some(key) => self.table.get(key).ok_or_else(|| DecodeError::UnknownKey { index, key: key.clone() })?,
			None => match self.table.lookup_kind(&raw.kind) {
				Some(KeyBinding::Unique(key)) => self.table.get(key).ok_or_else(unknown_kind)?,
				Some(KeyBinding::Ambiguous(keys)) => {
					return Err(DecodeError::AmbiguousKind {
						index,
						kind: raw.kind.clone(),
						keys: keys.clone(),
					});
				}
				None => return Err(unknown_kind()),
			},
		};

		if !destination.declares_kind(&raw.kind) {
			return Err(unknown_kind());
		}
		Ok(destination)
	}
}

/// Splits the root document into its format and raw entry list.
fn open_envelope(root: Value) -> Result<(SnapshotFormat, Vec<Value>), DecodeError> {
	match root {
		Value::Object(mut document) => match document.remove(SCHEMA_VERSION_FIELD) {
			Some(version) => {
				if version.as_u64() != Some(SCHEMA_VERSION) {
					return Err(DecodeError::UnsupportedVersion {
						found: version.to_string(),
						expected: SCHEMA_VERSION,
					});
				}
				Ok((SnapshotFormat::Current, take_entries(document)?))
			}
			None => Ok((SnapshotFormat::Legacy, take_entries(document)?)),
		},
		Value::Array(entries) => Ok((SnapshotFormat::Legacy, entries)),
		other => Err(DecodeError::UnexpectedContainer {
			found: json_type_name(&other),
		}),
	}
}

fn take_entries(mut document: Map<String, Value>) -> Result<Vec<Value>, DecodeError> {
	match document.remove(ENTRIES_FIELD) {
		Some(Value::Array(entries)) => Ok(entries),
		_ => Err(DecodeError::MissingEntries),
	}
}

/// `{ "key": .., "kind": .., ...fields }`
fn current_entry(index: usize, entry: Value) -> Result<RawEntry, DecodeError> {
	let mut fields = match entry {
		Value::Object(fields) => fields,
		other => {
			return Err(DecodeError::EntryNotObject {
				index,
				found: json_type_name(&other),
			});
		}
	};

	let kind = match fields.remove(KIND_FIELD) {
		Some(Value::String(kind)) => kind,
		_ => return Err(DecodeError::MissingKind { index }),
	};
	let key = match fields.remove(KEY_FIELD) {
		None => None,
		Some(Value::String(key)) => Some(DestinationKey::from(key)),
		Some(_) => return Err(DecodeError::InvalidKey { index }),
	};

	Ok(RawEntry { key, kind, fields })
}

/// `{ "<kind>": { ...fields } }`
fn legacy_entry(index: usize, entry: Value) -> Result<RawEntry, DecodeError> {
	let Value::Object(object) = entry else {
		return Err(DecodeError::LegacyEntryShape { index });
	};
	if object.len() != 1 {
		return Err(DecodeError::LegacyEntryShape { index });
	}

	match object.into_iter().next() {
		Some((kind, Value::Object(fields))) => Ok(RawEntry { key: None, kind, fields }),
		_ => Err(DecodeError::LegacyEntryShape { index }),
	}
}
