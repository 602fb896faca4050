use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use wayline_route::{Route, single_kind_route};

use crate::DestinationBundle;

pub(crate) const INBOX_KEY: &str = "test.mail.inbox";
pub(crate) const COMPOSE_KEY: &str = "test.mail.compose";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum MailRoute {
	Inbox,
	Thread { id: String },
}

impl Route for MailRoute {
	const KINDS: &'static [&'static str] = &["inbox", "thread"];

	fn kind(&self) -> &'static str {
		match self {
			Self::Inbox => "inbox",
			Self::Thread { .. } => "thread",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ComposeRoute {
	#[serde(rename = "draftID")]
	pub draft_id: Option<String>,
}

single_kind_route!(ComposeRoute => "compose");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SettingsRoute {}

single_kind_route!(SettingsRoute => "settings");

pub(crate) fn mail_bundle() -> DestinationBundle<String> {
	DestinationBundle::new("mail", |registry| {
		registry
			.register_keyed::<MailRoute, _>(INBOX_KEY, |route| format!("mail:{}", route.kind()))
			.register_keyed::<ComposeRoute, _>(COMPOSE_KEY, |route| format!("compose:{:?}", route.draft_id));
	})
}

pub(crate) fn settings_bundle() -> DestinationBundle<String> {
	DestinationBundle::new("settings", |registry| {
		registry.register::<SettingsRoute, _>(|_| "settings".to_string());
	})
}

/// A bundle registering `SettingsRoute` under `key`, counting renderer calls.
pub(crate) fn counting_bundle(label: &'static str, key: &'static str, calls: Arc<AtomicUsize>) -> DestinationBundle<String> {
	DestinationBundle::new(label, move |registry| {
		let calls = Arc::clone(&calls);
		registry.register_keyed::<SettingsRoute, _>(key, move |_| {
			calls.fetch_add(1, Ordering::SeqCst);
			format!("{label}:{key}")
		});
	})
}
