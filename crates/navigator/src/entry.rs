use wayline_route::{AnyRoute, DestinationKey};

/// One pushed destination.
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
	pub route: AnyRoute,
	/// Key of the registration the route resolved to.
	pub key: DestinationKey,
	pub animated: bool,
	pub disable_back_gesture: bool,
	pub hides_back_button: bool,
}

impl StackEntry {
	pub(crate) fn new(route: AnyRoute, key: DestinationKey, options: PushOptions) -> Self {
		Self {
			route,
			key,
			animated: options.animated,
			disable_back_gesture: options.disable_back_gesture,
			hides_back_button: options.hides_back_button,
		}
	}

	/// A restored entry. Transition flags are not persisted, so they start from defaults.
	pub(crate) fn restored(route: AnyRoute, key: DestinationKey) -> Self {
		Self::new(route, key, PushOptions::new().animated(false))
	}
}

/// Per-push transition flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushOptions {
	pub animated: bool,
	pub disable_back_gesture: bool,
	pub hides_back_button: bool,
}

impl Default for PushOptions {
	fn default() -> Self {
		Self {
			animated: true,
			disable_back_gesture: false,
			hides_back_button: false,
		}
	}
}

impl PushOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn animated(mut self, animated: bool) -> Self {
		self.animated = animated;
		self
	}

	pub fn disable_back_gesture(mut self, disable: bool) -> Self {
		self.disable_back_gesture = disable;
		self
	}

	pub fn hides_back_button(mut self, hides: bool) -> Self {
		self.hides_back_button = hides;
		self
	}
}
