use std::fmt;

/// A top-bar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChromeSlot {
	Leading,
	TrailingPrimary,
	TrailingSecondary,
	Principal,
	Title,
	Subtitle,
}

impl ChromeSlot {
	pub const COUNT: usize = 6;

	pub const ALL: [ChromeSlot; Self::COUNT] = [
		Self::Leading,
		Self::TrailingPrimary,
		Self::TrailingSecondary,
		Self::Principal,
		Self::Title,
		Self::Subtitle,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::Leading => "leading",
			Self::TrailingPrimary => "trailingPrimary",
			Self::TrailingSecondary => "trailingSecondary",
			Self::Principal => "principal",
			Self::Title => "title",
			Self::Subtitle => "subtitle",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for ChromeSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Which of the two trailing slots an item goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPosition {
	#[default]
	Primary,
	Secondary,
}

impl TrailingPosition {
	pub fn slot(self) -> ChromeSlot {
		match self {
			Self::Primary => ChromeSlot::TrailingPrimary,
			Self::Secondary => ChromeSlot::TrailingSecondary,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	#[default]
	Visible,
	Hidden,
}

impl Visibility {
	pub fn is_visible(self) -> bool {
		self == Self::Visible
	}
}
