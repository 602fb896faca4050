use crate::item::{ChromeItem, ItemId, UpdateKey};
use crate::slot::{ChromeSlot, TrailingPosition, Visibility};

/// Declarations collected during one composition pass.
///
/// Each setter overwrites whatever an earlier call in the same pass wrote to that slot.
#[derive(Debug, Clone)]
pub struct ChromeDeclarations<C> {
	items: [Option<ChromeItem<C>>; ChromeSlot::COUNT],
	visibility: [Option<Visibility>; ChromeSlot::COUNT],
}

impl<C> Default for ChromeDeclarations<C> {
	fn default() -> Self {
		Self {
			items: std::array::from_fn(|_| None),
			visibility: [None; ChromeSlot::COUNT],
		}
	}
}

impl<C> ChromeDeclarations<C> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares the item for `slot`. A `visibility` of `None` leaves the slot's visibility as
	/// declared so far in this pass.
	pub fn set_slot(
		&mut self,
		slot: ChromeSlot,
		id: impl Into<ItemId>,
		update_key: Option<UpdateKey>,
		visibility: Option<Visibility>,
		content: C,
	) -> &mut Self {
		self.items[slot.index()] = Some(ChromeItem {
			id: id.into(),
			update_key,
			content,
		});
		if visibility.is_some() {
			self.visibility[slot.index()] = visibility;
		}
		self
	}

	pub fn set_item(&mut self, slot: ChromeSlot, item: ChromeItem<C>) -> &mut Self {
		self.items[slot.index()] = Some(item);
		self
	}

	pub fn set_visibility(&mut self, slot: ChromeSlot, visibility: Visibility) -> &mut Self {
		self.visibility[slot.index()] = Some(visibility);
		self
	}

	/// Withdraws an earlier declaration for `slot` in this pass.
	pub fn clear_slot(&mut self, slot: ChromeSlot) -> &mut Self {
		self.items[slot.index()] = None;
		self
	}

	pub fn leading(&mut self, id: impl Into<ItemId>, content: C) -> &mut Self {
		self.set_slot(ChromeSlot::Leading, id, None, None, content)
	}

	pub fn trailing(&mut self, position: TrailingPosition, id: impl Into<ItemId>, content: C) -> &mut Self {
		self.set_slot(position.slot(), id, None, None, content)
	}

	pub fn principal(&mut self, id: impl Into<ItemId>, content: C) -> &mut Self {
		self.set_slot(ChromeSlot::Principal, id, None, None, content)
	}

	pub fn item(&self, slot: ChromeSlot) -> Option<&ChromeItem<C>> {
		self.items[slot.index()].as_ref()
	}

	pub fn visibility(&self, slot: ChromeSlot) -> Visibility {
		self.visibility[slot.index()].unwrap_or_default()
	}

	pub(crate) fn into_parts(self) -> ([Option<ChromeItem<C>>; ChromeSlot::COUNT], [Option<Visibility>; ChromeSlot::COUNT]) {
		(self.items, self.visibility)
	}
}

impl<C: From<String>> ChromeDeclarations<C> {
	/// Declares a text title. The text is the update key, so new text refreshes the slot.
	pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
		self.text_slot(ChromeSlot::Title, text.into())
	}

	pub fn subtitle(&mut self, text: impl Into<String>) -> &mut Self {
		self.text_slot(ChromeSlot::Subtitle, text.into())
	}

	fn text_slot(&mut self, slot: ChromeSlot, text: String) -> &mut Self {
		let key = UpdateKey::Text(text.clone());
		self.set_slot(slot, ItemId::from_static(slot.name()), Some(key), None, C::from(text))
	}
}
