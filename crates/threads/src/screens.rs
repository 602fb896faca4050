use wayline_chrome::{ChromeDeclarations, TrailingPosition};
use wayline_route::AnyRoute;

use crate::routes::{ComposeContext, ThreadComposeRoute, ThreadDetailsRoute, ThreadsComposerRoute, ThreadsRoute, ThreadsSettingsRoute};

const FEATURE_SUBTITLE: &str = "Feature module";
const CLOSE_ID: &str = "close";

/// Which registration style opened the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxSource {
	EnumRoute,
	PerScreenRoute,
}

impl InboxSource {
	pub fn label(self) -> &'static str {
		match self {
			Self::EnumRoute => "ThreadsRoute (enum)",
			Self::PerScreenRoute => "Per-screen route types",
		}
	}
}

/// Which route opened the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeSource {
	EnumRoute,
	PerScreenRoute,
	SplitEnumRoute,
}

impl ComposeSource {
	pub fn label(self) -> &'static str {
		match self {
			Self::EnumRoute => "ThreadsRoute.compose",
			Self::PerScreenRoute => "ThreadComposeRoute",
			Self::SplitEnumRoute => "ThreadsComposerRoute.compose",
		}
	}
}

/// Content a screen puts in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarContent {
	Text(String),
	/// Pops the screen.
	CloseButton,
}

impl From<String> for BarContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

/// A route a screen offers to push.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLink {
	pub label: &'static str,
	pub route: AnyRoute,
}

impl ScreenLink {
	fn new(label: &'static str, route: impl Into<AnyRoute>) -> Self {
		Self { label, route: route.into() }
	}
}

/// Screens rendered by the feature's destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadsScreen {
	Inbox { source: InboxSource },
	ThreadDetails { id: String },
	Compose { draft_id: Option<String>, source: ComposeSource },
	Settings,
	Thread { id: String },
}

impl ThreadsScreen {
	/// Initial text of the composer body.
	pub fn compose_text(draft_id: Option<&str>) -> String {
		draft_id.map(|id| format!("Draft: {id}\n\n")).unwrap_or_default()
	}

	pub fn title(&self) -> String {
		match self {
			Self::Inbox { .. } => "Threads".into(),
			Self::ThreadDetails { .. } | Self::Thread { .. } => "Thread".into(),
			Self::Compose { .. } => "Compose".into(),
			Self::Settings => "Threads settings".into(),
		}
	}

	/// Top-bar declarations for one composition pass of this screen.
	pub fn chrome(&self) -> ChromeDeclarations<BarContent> {
		let mut declarations = ChromeDeclarations::new();
		declarations.title(self.title());

		match self {
			Self::Inbox { source } => {
				declarations.subtitle(source.label());
			}
			_ => {
				declarations.subtitle(FEATURE_SUBTITLE);
			}
		}
		if self.has_close_button() {
			declarations.trailing(TrailingPosition::Primary, CLOSE_ID, BarContent::CloseButton);
		}
		declarations
	}

	fn has_close_button(&self) -> bool {
		!matches!(self, Self::Settings)
	}

	/// Routes the screen can push.
	pub fn links(&self) -> Vec<ScreenLink> {
		match self {
			Self::Inbox { .. } => vec![
				ScreenLink::new("Open thread 123", ThreadsRoute::Thread { id: "123".into() }),
				ScreenLink::new("Compose (draft-123)", ThreadsRoute::Compose(ComposeContext::draft("draft-123"))),
				ScreenLink::new("Settings", ThreadsRoute::Settings),
				ScreenLink::new("Open thread 123", ThreadDetailsRoute::new("123")),
				ScreenLink::new("Compose (draft-123)", ThreadComposeRoute::draft("draft-123")),
				ScreenLink::new("Settings", ThreadsSettingsRoute {}),
				ScreenLink::new(
					"Compose (draft-123)",
					ThreadsComposerRoute::Compose {
						draft_id: Some("draft-123".into()),
					},
				),
			],
			Self::ThreadDetails { id } => {
				let draft = format!("reply-{id}");
				vec![
					ScreenLink::new("Compose reply (ThreadsRoute)", ThreadsRoute::Compose(ComposeContext::draft(draft.clone()))),
					ScreenLink::new("Compose reply (ThreadComposeRoute)", ThreadComposeRoute::draft(draft)),
				]
			}
			Self::Compose { .. } | Self::Settings | Self::Thread { .. } => Vec::new(),
		}
	}
}
