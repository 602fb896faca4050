use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use wayline_registry::{DestinationBundle, DestinationTable};
use wayline_route::{Route, single_kind_route};

use crate::{Navigator, ShellConfig, Transition, TransitionDriver, TransitionLog};

pub(crate) const DETAIL_KEY: &str = "test.detail";
pub(crate) const HOME_KEY: &str = "test.home";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DetailRoute {
	pub level: i64,
}

single_kind_route!(DetailRoute => "detail");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum HomeRoute {
	Feed,
	Profile { user: String },
}

impl Route for HomeRoute {
	const KINDS: &'static [&'static str] = &["feed", "profile"];

	fn kind(&self) -> &'static str {
		match self {
			Self::Feed => "feed",
			Self::Profile { .. } => "profile",
		}
	}
}

/// Never registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StrayRoute {}

single_kind_route!(StrayRoute => "stray");

pub(crate) fn detail(level: i64) -> DetailRoute {
	DetailRoute { level }
}

pub(crate) fn bundle() -> DestinationBundle<String> {
	DestinationBundle::new("test", |registry| {
		registry
			.register_keyed::<DetailRoute, _>(DETAIL_KEY, |route| format!("detail {}", route.level))
			.register_keyed::<HomeRoute, _>(HOME_KEY, |route| match route {
				HomeRoute::Feed => "feed".to_string(),
				HomeRoute::Profile { user } => format!("profile {user}"),
			});
	})
}

pub(crate) fn table() -> Arc<DestinationTable<String>> {
	Arc::new(DestinationTable::compose([&bundle()]).expect("test bundle composes"))
}

pub(crate) fn navigator_with(config: ShellConfig) -> (Navigator<String>, Arc<TransitionLog>) {
	let log = Arc::new(TransitionLog::new());
	let navigator = Navigator::new(table(), config, Arc::clone(&log) as Arc<dyn TransitionDriver>);
	(navigator, log)
}

pub(crate) fn navigator() -> (Navigator<String>, Arc<TransitionLog>) {
	navigator_with(ShellConfig::default())
}

pub(crate) fn levels(navigator: &Navigator<String>) -> Vec<i64> {
	navigator
		.entries()
		.iter()
		.filter_map(|entry| entry.route.downcast_ref::<DetailRoute>().map(|route| route.level))
		.collect()
}

/// Driver that reads the navigator it drives from inside `begin`.
#[derive(Default)]
pub(crate) struct ReentrantDriver {
	pub navigator: OnceLock<Navigator<String>>,
	pub observed: Mutex<Vec<(usize, usize)>>,
}

impl TransitionDriver for ReentrantDriver {
	fn begin(&self, transition: &Transition) {
		if let Some(navigator) = self.navigator.get() {
			self.observed.lock().push((transition.to_depth, navigator.depth()));
		}
	}
}
