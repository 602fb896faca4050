use wayline_route::{DestinationKey, FieldsError};

/// Failure to encode a stack into a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	#[error("entry {index} ({key}): {source}")]
	Fields {
		index: usize,
		key: DestinationKey,
		#[source]
		source: FieldsError,
	},

	#[error("snapshot serialization failed: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Failure to decode a snapshot. Always rejects the whole snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("snapshot is not valid JSON: {0}")]
	Malformed(#[source] serde_json::Error),

	#[error("snapshot must be an object or an array, found {found}")]
	UnexpectedContainer { found: &'static str },

	#[error("snapshot has no `entries` array")]
	MissingEntries,

	#[error("unsupported snapshot schema version {found} (expected {expected})")]
	UnsupportedVersion { found: String, expected: u64 },

	#[error("entry {index}: expected an object, found {found}")]
	EntryNotObject { index: usize, found: &'static str },

	#[error("entry {index}: missing or non-string `kind`")]
	MissingKind { index: usize },

	#[error("entry {index}: `key` must be a string")]
	InvalidKey { index: usize },

	#[error("entry {index}: legacy entries must be single-key objects holding a field object")]
	LegacyEntryShape { index: usize },

	#[error("entry {index}: unknown destination key `{key}`")]
	UnknownKey { index: usize, key: DestinationKey },

	#[error("entry {index}: unknown kind `{kind}`")]
	UnknownKind { index: usize, kind: String },

	#[error("entry {index}: kind `{kind}` is declared by several destinations ({keys:?})")]
	AmbiguousKind {
		index: usize,
		kind: String,
		keys: Vec<DestinationKey>,
	},

	#[error("entry {index}: invalid fields for kind `{kind}`: {source}")]
	InvalidFields {
		index: usize,
		kind: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("entry {index}: decoded kind `{found}` does not match persisted kind `{expected}`")]
	KindMismatch {
		index: usize,
		expected: String,
		found: &'static str,
	},
}
