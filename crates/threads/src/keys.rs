//! Destination keys owned by the feature. They are persisted in snapshots and must not change.

use wayline_route::DestinationKey;

pub const THREADS_ROUTE: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.route");
pub const INBOX: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.inbox");
pub const THREAD_DETAILS: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.thread");
pub const COMPOSE: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.compose");
pub const SETTINGS: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.settings");
pub const COMPOSER_ROUTE: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.threads.composerRoute");
pub const THREAD: DestinationKey = DestinationKey::from_static("com.suinavigation.sample.thread");
