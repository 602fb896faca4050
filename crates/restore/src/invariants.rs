use pretty_assertions::assert_eq;
use wayline_route::AnyRoute;

use crate::test_fixtures::{ARTICLE_KEY, FEED_KEY, FeedRoute, article, entry, feed_table, topic};
use crate::{DecodeError, SnapshotCodec, SnapshotFormat};

/// Must fail the whole snapshot when any entry fails.
///
/// - Enforced in: `SnapshotCodec::decode`
/// - Failure symptom: A restored stack is a prefix of the saved one.
#[cfg_attr(test, test)]
pub(crate) fn test_decode_is_atomic() {
	let table = feed_table();
	let codec = SnapshotCodec::new(&table);
	let bytes = br#"{"schemaVersion":1,"entries":[
		{"key":"test.feed","kind":"latest"},
		{"key":"test.article","kind":"article","id":"a1"},
		{"key":"test.gone","kind":"article","id":"a2"}
	]}"#;

	let err = codec.decode(bytes).unwrap_err();
	assert!(matches!(err, DecodeError::UnknownKey { index: 2, .. }), "{err}");
}

/// Must accept only the exact current schema version on the versioned path.
///
/// - Enforced in: `codec::open_envelope`
/// - Failure symptom: Fields written by a newer build are silently misread.
#[cfg_attr(test, test)]
pub(crate) fn test_version_must_match_exactly() {
	let table = feed_table();
	let codec = SnapshotCodec::new(&table);

	for version in ["2", "0", "1.5", "\"1\"", "null"] {
		let bytes = format!(r#"{{"schemaVersion":{version},"entries":[]}}"#);
		let err = codec.decode(bytes.as_bytes()).unwrap_err();
		match err {
			DecodeError::UnsupportedVersion { found, expected } => {
				assert_eq!(found, version);
				assert_eq!(expected, 1);
			}
			other => panic!("version {version}: unexpected {other}"),
		}
	}

	let ok = codec.decode(br#"{"schemaVersion":1,"entries":[]}"#).unwrap();
	assert_eq!(ok.format, SnapshotFormat::Current);
	assert!(ok.routes.is_empty());
}

/// Must try the legacy shape only when `schemaVersion` is absent.
///
/// - Enforced in: `codec::open_envelope`
/// - Failure symptom: A corrupt current snapshot is half-restored as legacy data.
#[cfg_attr(test, test)]
pub(crate) fn test_legacy_only_without_version() {
	let table = feed_table();
	let codec = SnapshotCodec::new(&table);

	// A legacy-shaped entry under a version is a current entry without `kind`.
	let err = codec.decode(br#"{"schemaVersion":1,"entries":[{"latest":{}}]}"#).unwrap_err();
	assert!(matches!(err, DecodeError::MissingKind { index: 0 }), "{err}");

	let legacy = codec.decode(br#"{"entries":[{"latest":{}}]}"#).unwrap();
	assert_eq!(legacy.format, SnapshotFormat::Legacy);
	assert_eq!(legacy.routes[0].route, AnyRoute::new(FeedRoute::Latest));
}

/// Must decode legacy entries to the same values as current entries.
///
/// - Enforced in: `codec::legacy_entry`, `SnapshotCodec::restore_entry`
/// - Failure symptom: Users upgrading from an old build land on different screens.
#[cfg_attr(test, test)]
pub(crate) fn test_legacy_matches_current() {
	let table = feed_table();
	let codec = SnapshotCodec::new(&table);
	let stack = [entry(FEED_KEY, topic("rust", 3)), entry(ARTICLE_KEY, article("a7")), entry(FEED_KEY, FeedRoute::Latest)];

	let current = codec.encode(stack.iter().map(|(key, route)| (key, route))).unwrap();
	let legacy = br#"[{"topic":{"name":"rust","page":3}},{"article":{"id":"a7"}},{"latest":{}}]"#;

	let from_current = codec.decode(&current).unwrap();
	let from_legacy = codec.decode(legacy).unwrap();
	assert_eq!(from_current.format, SnapshotFormat::Current);
	assert_eq!(from_legacy.format, SnapshotFormat::Legacy);
	assert_eq!(from_current.routes, from_legacy.routes);
}
