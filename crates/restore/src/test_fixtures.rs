use serde::{Deserialize, Serialize};
use wayline_registry::{DestinationBundle, DestinationTable};
use wayline_route::{AnyRoute, DestinationKey, Route, single_kind_route};

pub(crate) const FEED_KEY: &str = "test.feed";
pub(crate) const ARTICLE_KEY: &str = "test.article";
pub(crate) const MIRROR_KEY: &str = "test.article.mirror";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum FeedRoute {
	Latest,
	Topic { name: String, page: u32 },
}

impl Route for FeedRoute {
	const KINDS: &'static [&'static str] = &["latest", "topic"];

	fn kind(&self) -> &'static str {
		match self {
			Self::Latest => "latest",
			Self::Topic { .. } => "topic",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArticleRoute {
	pub id: String,
	#[serde(default)]
	pub anchor: Option<String>,
}

single_kind_route!(ArticleRoute => "article");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookmarksRoute {
	#[serde(default)]
	pub folder: Option<String>,
}

single_kind_route!(BookmarksRoute => "bookmarks");

pub(crate) fn feed_bundle() -> DestinationBundle<String> {
	DestinationBundle::new("feed", |registry| {
		registry
			.register_keyed::<FeedRoute, _>(FEED_KEY, |route| format!("feed:{}", route.kind()))
			.register_keyed::<ArticleRoute, _>(ARTICLE_KEY, |route| format!("article:{}", route.id));
	})
}

/// Registers `ArticleRoute` a second time, making the `article` kind ambiguous.
pub(crate) fn mirror_bundle() -> DestinationBundle<String> {
	DestinationBundle::new("mirror", |registry| {
		registry.register_keyed::<ArticleRoute, _>(MIRROR_KEY, |route| format!("mirror:{}", route.id));
	})
}

/// Registers `BookmarksRoute` without an explicit key.
pub(crate) fn bookmarks_bundle() -> DestinationBundle<String> {
	DestinationBundle::new("bookmarks", |registry| {
		registry.register::<BookmarksRoute, _>(|_| "bookmarks".to_string());
	})
}

pub(crate) fn feed_table() -> DestinationTable<String> {
	DestinationTable::compose([&feed_bundle()]).expect("feed bundle composes")
}

pub(crate) fn entry(key: &'static str, route: impl Into<AnyRoute>) -> (DestinationKey, AnyRoute) {
	(DestinationKey::from_static(key), route.into())
}

pub(crate) fn topic(name: &str, page: u32) -> FeedRoute {
	FeedRoute::Topic {
		name: name.to_string(),
		page,
	}
}

pub(crate) fn article(id: &str) -> ArticleRoute {
	ArticleRoute {
		id: id.to_string(),
		anchor: None,
	}
}
