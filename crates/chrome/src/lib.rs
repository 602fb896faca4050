//! Chrome slot cache.
//!
//! # Purpose
//!
//! Decides, once per composition pass, whether the content shown in each top-bar slot has to be
//! rebuilt. The active screen declares what it wants in each slot; the cache compares the
//! declarations against the previous pass and reports a [`SlotChange`] per slot.
//!
//! # Mental Model
//!
//! A slot holds at most one [`ChromeItem`]: an `id`, an optional [`UpdateKey`] and the content.
//! The `id` is the logical identity of the item, the update key is a version of its payload.
//! Content is never compared. If neither the id nor the update key moved, the content built on an
//! earlier pass is kept even when the new declaration carries different content. Callers whose
//! content depends on local state must fold that state into the update key.
//!
//! Visibility lives next to the item and is diffed on its own.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`ChromeSlot`] | The six top-bar positions |
//! | [`ChromeDeclarations`] | One pass worth of declarations; latest write per slot wins |
//! | [`ChromeSlotCache`] | Displayed state carried between passes |
//! | [`ChromePass`] | Per-slot outcome of [`ChromeSlotCache::apply`] |
//!
//! # Invariants
//!
//! - Must keep prior content when id and update key are unchanged.
//!   - Enforced in: `ChromeSlotCache::apply`
//!   - Tested by: `invariants::test_same_identity_keeps_content`
//!   - Failure symptom: Bar buttons rebuild every frame and lose pressed state.
//!
//! - Must refresh without replacing when only the update key changes.
//!   - Enforced in: `cache::diff_item`
//!   - Tested by: `invariants::test_update_key_refreshes_in_place`
//!   - Failure symptom: Title edits animate as a new item instead of updating text.
//!
//! - Must never refresh or re-key an item because its visibility toggled.
//!   - Enforced in: `ChromeSlotCache::apply`
//!   - Tested by: `invariants::test_visibility_is_independent`
//!   - Failure symptom: Hiding a button resets its content.

mod cache;
mod declarations;
mod item;
mod slot;

pub use cache::{ChromePass, ChromeSlotCache, SlotChange};
pub use declarations::ChromeDeclarations;
pub use item::{ChromeItem, ItemId, UpdateKey};
pub use slot::{ChromeSlot, TrailingPosition, Visibility};

#[cfg(test)]
mod invariants;
