use wayline_registry::DestinationBundle;

use crate::keys;
use crate::routes::{ThreadComposeRoute, ThreadDetailsRoute, ThreadRoute, ThreadsComposerRoute, ThreadsInboxRoute, ThreadsRoute, ThreadsSettingsRoute};
use crate::screens::{ComposeSource, InboxSource, ThreadsScreen};

/// Every destination owned by the feature, one key per registration.
pub fn destinations<V>() -> DestinationBundle<V>
where
	V: From<ThreadsScreen> + 'static,
{
	DestinationBundle::new("threads", |registry| {
		registry
			.register_keyed::<ThreadsRoute, _>(keys::THREADS_ROUTE, |route| V::from(threads_screen(route)))
			.register_keyed::<ThreadsInboxRoute, _>(keys::INBOX, |_| {
				V::from(ThreadsScreen::Inbox {
					source: InboxSource::PerScreenRoute,
				})
			})
			.register_keyed::<ThreadDetailsRoute, _>(keys::THREAD_DETAILS, |route| V::from(ThreadsScreen::ThreadDetails { id: route.id.clone() }))
			.register_keyed::<ThreadComposeRoute, _>(keys::COMPOSE, |route| {
				V::from(ThreadsScreen::Compose {
					draft_id: route.draft_id.clone(),
					source: ComposeSource::PerScreenRoute,
				})
			})
			.register_keyed::<ThreadsSettingsRoute, _>(keys::SETTINGS, |_| V::from(ThreadsScreen::Settings))
			.register_keyed::<ThreadsComposerRoute, _>(keys::COMPOSER_ROUTE, |route| V::from(composer_screen(route)));
	})
}

/// The standalone [`ThreadRoute`] destination, shipped as its own bundle.
pub fn thread_destinations<V>() -> DestinationBundle<V>
where
	V: From<ThreadsScreen> + 'static,
{
	DestinationBundle::new("threads.thread", |registry| {
		registry.register_keyed::<ThreadRoute, _>(keys::THREAD, |route| V::from(ThreadsScreen::Thread { id: route.id.clone() }));
	})
}

fn threads_screen(route: &ThreadsRoute) -> ThreadsScreen {
	match route {
		ThreadsRoute::Inbox => ThreadsScreen::Inbox {
			source: InboxSource::EnumRoute,
		},
		ThreadsRoute::Thread { id } => ThreadsScreen::ThreadDetails { id: id.clone() },
		ThreadsRoute::Compose(context) => ThreadsScreen::Compose {
			draft_id: context.draft_id.clone(),
			source: ComposeSource::EnumRoute,
		},
		ThreadsRoute::Settings => ThreadsScreen::Settings,
	}
}

fn composer_screen(route: &ThreadsComposerRoute) -> ThreadsScreen {
	match route {
		ThreadsComposerRoute::Compose { draft_id } => ThreadsScreen::Compose {
			draft_id: draft_id.clone(),
			source: ComposeSource::SplitEnumRoute,
		},
	}
}
