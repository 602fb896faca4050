use crate::declarations::ChromeDeclarations;
use crate::item::ChromeItem;
use crate::slot::{ChromeSlot, Visibility};

/// What a pass did to one slot's item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotChange {
	/// Same item as before (or still empty). Displayed content was kept.
	#[default]
	Unchanged,
	Inserted,
	Removed,
	/// Same id, new update key. Content rebuilt in place.
	Refreshed,
	/// Different id. The old item is gone.
	Replaced,
}

impl SlotChange {
	/// Whether the displayed content has to be rebuilt.
	pub fn needs_refresh(self) -> bool {
		!matches!(self, Self::Unchanged)
	}
}

/// Outcome of one [`ChromeSlotCache::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromePass {
	changes: [SlotChange; ChromeSlot::COUNT],
	visibility_changed: [bool; ChromeSlot::COUNT],
}

impl ChromePass {
	pub fn change(&self, slot: ChromeSlot) -> SlotChange {
		self.changes[slot.index()]
	}

	pub fn visibility_changed(&self, slot: ChromeSlot) -> bool {
		self.visibility_changed[slot.index()]
	}

	/// Slots whose item changed, in [`ChromeSlot::ALL`] order.
	pub fn changed_slots(&self) -> impl Iterator<Item = (ChromeSlot, SlotChange)> + '_ {
		ChromeSlot::ALL
			.into_iter()
			.map(|slot| (slot, self.change(slot)))
			.filter(|(_, change)| change.needs_refresh())
	}

	/// True when nothing, item or visibility, changed in any slot.
	pub fn is_quiet(&self) -> bool {
		self.changes.iter().all(|change| !change.needs_refresh()) && !self.visibility_changed.contains(&true)
	}
}

#[derive(Debug, Clone)]
struct SlotState<C> {
	item: Option<ChromeItem<C>>,
	visibility: Visibility,
}

impl<C> Default for SlotState<C> {
	fn default() -> Self {
		Self {
			item: None,
			visibility: Visibility::Visible,
		}
	}
}

/// Displayed chrome state, carried from one composition pass to the next.
#[derive(Debug, Clone)]
pub struct ChromeSlotCache<C> {
	slots: [SlotState<C>; ChromeSlot::COUNT],
}

impl<C> Default for ChromeSlotCache<C> {
	fn default() -> Self {
		Self {
			slots: std::array::from_fn(|_| SlotState::default()),
		}
	}
}

impl<C> ChromeSlotCache<C> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Diffs a pass against the displayed state and adopts it.
	///
	/// Slots the pass does not declare become empty and visible.
	pub fn apply(&mut self, declarations: ChromeDeclarations<C>) -> ChromePass {
		let (items, visibility) = declarations.into_parts();
		let mut pass = ChromePass::default();

		for ((slot, next), next_visibility) in ChromeSlot::ALL.into_iter().zip(items).zip(visibility) {
			let state = &mut self.slots[slot.index()];
			let change = diff_item(state.item.as_ref(), next.as_ref());
			if change.needs_refresh() {
				state.item = next;
			}

			let next_visibility = next_visibility.unwrap_or_default();
			let visibility_changed = state.visibility != next_visibility;
			state.visibility = next_visibility;

			if change.needs_refresh() || visibility_changed {
				tracing::trace!(slot = %slot, ?change, visibility_changed, "chrome slot changed");
			}
			pass.changes[slot.index()] = change;
			pass.visibility_changed[slot.index()] = visibility_changed;
		}

		pass
	}

	/// Drops all displayed items, as when the top screen goes away.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn item(&self, slot: ChromeSlot) -> Option<&ChromeItem<C>> {
		self.slots[slot.index()].item.as_ref()
	}

	/// Content currently displayed in `slot`.
	pub fn content(&self, slot: ChromeSlot) -> Option<&C> {
		self.item(slot).map(|item| &item.content)
	}

	pub fn visibility(&self, slot: ChromeSlot) -> Visibility {
		self.slots[slot.index()].visibility
	}
}

fn diff_item<C>(previous: Option<&ChromeItem<C>>, next: Option<&ChromeItem<C>>) -> SlotChange {
	match (previous, next) {
		(None, None) => SlotChange::Unchanged,
		(None, Some(_)) => SlotChange::Inserted,
		(Some(_), None) => SlotChange::Removed,
		(Some(previous), Some(next)) if previous.same_identity(next) => SlotChange::Unchanged,
		(Some(previous), Some(next)) if previous.id != next.id => SlotChange::Replaced,
		(Some(_), Some(_)) => SlotChange::Refreshed,
	}
}
