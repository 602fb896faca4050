use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wayline_route::DestinationKey;

/// Current snapshot schema version. Bump when the kind/fields contract changes incompatibly.
pub const SCHEMA_VERSION: u64 = 1;

pub const SCHEMA_VERSION_FIELD: &str = "schemaVersion";
pub const ENTRIES_FIELD: &str = "entries";

/// Current-format snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
	#[serde(rename = "schemaVersion")]
	pub schema_version: u64,
	pub entries: Vec<SnapshotEntry>,
}

/// One persisted stack entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<DestinationKey>,
	pub kind: String,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

/// Which decode path accepted a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
	Current,
	Legacy,
}

impl fmt::Display for SnapshotFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Current => write!(f, "current"),
			Self::Legacy => write!(f, "legacy"),
		}
	}
}
