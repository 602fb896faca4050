use pretty_assertions::assert_eq;

use crate::{ChromeDeclarations, ChromeSlot, ChromeSlotCache, SlotChange, UpdateKey, Visibility};

fn declare(id: &'static str, key: Option<i64>, content: &str) -> ChromeDeclarations<String> {
	let mut declarations = ChromeDeclarations::new();
	declarations.set_slot(ChromeSlot::TrailingPrimary, id, key.map(UpdateKey::from), None, content.to_string());
	declarations
}

/// Must keep prior content when id and update key are unchanged.
///
/// - Enforced in: `ChromeSlotCache::apply`
/// - Failure symptom: Bar buttons rebuild every frame and lose pressed state.
#[cfg_attr(test, test)]
pub(crate) fn test_same_identity_keeps_content() {
	let mut cache = ChromeSlotCache::new();
	cache.apply(declare("x", Some(1), "first"));

	let pass = cache.apply(declare("x", Some(1), "second"));
	assert_eq!(pass.change(ChromeSlot::TrailingPrimary), SlotChange::Unchanged);
	assert_eq!(cache.content(ChromeSlot::TrailingPrimary).map(String::as_str), Some("first"));

	cache.apply(declare("y", None, "keyless"));
	let pass = cache.apply(declare("y", None, "keyless, edited"));
	assert_eq!(pass.change(ChromeSlot::TrailingPrimary), SlotChange::Unchanged);
	assert_eq!(cache.content(ChromeSlot::TrailingPrimary).map(String::as_str), Some("keyless"));
}

/// Must refresh without replacing when only the update key changes.
///
/// - Enforced in: `cache::diff_item`
/// - Failure symptom: Title edits animate as a new item instead of updating text.
#[cfg_attr(test, test)]
pub(crate) fn test_update_key_refreshes_in_place() {
	let mut cache = ChromeSlotCache::new();
	cache.apply(declare("x", Some(1), "one"));

	let pass = cache.apply(declare("x", Some(2), "two"));
	assert_eq!(pass.change(ChromeSlot::TrailingPrimary), SlotChange::Refreshed);
	let item = cache.item(ChromeSlot::TrailingPrimary).unwrap();
	assert_eq!(item.id.as_str(), "x");
	assert_eq!(item.content, "two");

	let pass = cache.apply(declare("y", Some(2), "other"));
	assert_eq!(pass.change(ChromeSlot::TrailingPrimary), SlotChange::Replaced);
	assert_eq!(cache.content(ChromeSlot::TrailingPrimary).map(String::as_str), Some("other"));
}

/// Must never refresh or re-key an item because its visibility toggled.
///
/// - Enforced in: `ChromeSlotCache::apply`
/// - Failure symptom: Hiding a button resets its content.
#[cfg_attr(test, test)]
pub(crate) fn test_visibility_is_independent() {
	let mut cache = ChromeSlotCache::new();
	cache.apply(declare("x", Some(1), "shown"));

	let mut hidden = declare("x", Some(1), "ignored");
	hidden.set_visibility(ChromeSlot::TrailingPrimary, Visibility::Hidden);
	let pass = cache.apply(hidden);

	assert_eq!(pass.change(ChromeSlot::TrailingPrimary), SlotChange::Unchanged);
	assert!(pass.visibility_changed(ChromeSlot::TrailingPrimary));
	assert_eq!(cache.visibility(ChromeSlot::TrailingPrimary), Visibility::Hidden);
	let item = cache.item(ChromeSlot::TrailingPrimary).unwrap();
	assert_eq!((item.id.as_str(), item.update_key.clone()), ("x", Some(UpdateKey::Int(1))));
	assert_eq!(item.content, "shown");
}
