use serde::{Deserialize, Serialize};
use wayline_route::{Route, single_kind_route};

/// Every destination of the feature behind one enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThreadsRoute {
	Inbox,
	Thread { id: String },
	Compose(ComposeContext),
	Settings,
}

impl Route for ThreadsRoute {
	const KINDS: &'static [&'static str] = &["inbox", "thread", "compose", "settings"];

	fn kind(&self) -> &'static str {
		match self {
			Self::Inbox => "inbox",
			Self::Thread { .. } => "thread",
			Self::Compose(_) => "compose",
			Self::Settings => "settings",
		}
	}
}

/// Payload of [`ThreadsRoute::Compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComposeContext {
	#[serde(rename = "draftID", default)]
	pub draft_id: Option<String>,
}

impl ComposeContext {
	pub fn draft(id: impl Into<String>) -> Self {
		Self { draft_id: Some(id.into()) }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadsInboxRoute {}

single_kind_route!(ThreadsInboxRoute => "threadsInbox");

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadDetailsRoute {
	pub id: String,
}

impl ThreadDetailsRoute {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

single_kind_route!(ThreadDetailsRoute => "threadDetails");

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadComposeRoute {
	#[serde(rename = "draftID", default)]
	pub draft_id: Option<String>,
}

impl ThreadComposeRoute {
	pub fn draft(id: impl Into<String>) -> Self {
		Self { draft_id: Some(id.into()) }
	}
}

single_kind_route!(ThreadComposeRoute => "threadCompose");

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadsSettingsRoute {}

single_kind_route!(ThreadsSettingsRoute => "threadsSettings");

/// Composer sub-flow, split out of [`ThreadsRoute`] so it can evolve on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ThreadsComposerRoute {
	#[serde(rename = "composeDraft")]
	Compose {
		#[serde(rename = "draftID", default)]
		draft_id: Option<String>,
	},
}

impl Route for ThreadsComposerRoute {
	const KINDS: &'static [&'static str] = &["composeDraft"];

	fn kind(&self) -> &'static str {
		match self {
			Self::Compose { .. } => "composeDraft",
		}
	}
}

/// Standalone thread route, registered by [`crate::thread_destinations`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadRoute {
	pub id: String,
}

impl ThreadRoute {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

single_kind_route!(ThreadRoute => "threadScreen");
