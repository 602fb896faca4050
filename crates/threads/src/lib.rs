//! Threads feature module.
//!
//! A feature that owns its routes, screens and destination registrations and hands the host a
//! [`DestinationBundle`](wayline_registry::DestinationBundle) to compose. It exercises every
//! registration style:
//!
//! - a module-scoped enum route rendered through one match ([`ThreadsRoute`])
//! - one payload type per screen, each under its own key ([`ThreadDetailsRoute`], ...)
//! - a second, split enum for an independent sub-flow ([`ThreadsComposerRoute`])
//! - a single keyed route in its own bundle ([`ThreadRoute`], [`thread_destinations`])
//!
//! Screens are plain values ([`ThreadsScreen`]). The host's content type only has to be
//! constructible from one.

pub mod keys;
mod navigation;
mod routes;
mod screens;

pub use navigation::{destinations, thread_destinations};
pub use routes::{ComposeContext, ThreadComposeRoute, ThreadDetailsRoute, ThreadRoute, ThreadsComposerRoute, ThreadsInboxRoute, ThreadsRoute, ThreadsSettingsRoute};
pub use screens::{BarContent, ComposeSource, InboxSource, ScreenLink, ThreadsScreen};
