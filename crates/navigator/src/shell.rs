use std::sync::Arc;

use wayline_registry::{DestinationBundle, DestinationTable, RegistrationConflict};
use wayline_restore::SnapshotStore;

use crate::config::ShellConfig;
use crate::error::{PersistError, RestoreOutcome};
use crate::navigator::Navigator;
use crate::transition::{NoTransitions, TransitionDriver};

/// Host-side owner of one navigation stack.
///
/// Composes the feature bundles into a table, builds the [`Navigator`] and runs restoration
/// according to its [`ShellConfig`].
#[derive(Debug)]
pub struct NavigationShell<V> {
	navigator: Navigator<V>,
}

impl<V: 'static> NavigationShell<V> {
	/// Builds a shell without a presentation driver.
	pub fn new<'a, I>(config: ShellConfig, bundles: I) -> Result<Self, RegistrationConflict>
	where
		I: IntoIterator<Item = &'a DestinationBundle<V>>,
	{
		Self::with_driver(config, bundles, Arc::new(NoTransitions))
	}

	pub fn with_driver<'a, I>(config: ShellConfig, bundles: I, driver: Arc<dyn TransitionDriver>) -> Result<Self, RegistrationConflict>
	where
		I: IntoIterator<Item = &'a DestinationBundle<V>>,
	{
		let table = DestinationTable::compose(bundles)?;
		tracing::debug!(destinations = table.len(), "navigation shell composed");
		Ok(Self {
			navigator: Navigator::new(Arc::new(table), config, driver),
		})
	}

	/// Returns a handle to hand to screens.
	pub fn navigator(&self) -> Navigator<V> {
		self.navigator.clone()
	}

	pub fn config(&self) -> &ShellConfig {
		self.navigator.config()
	}

	/// Restores the stack from `store`, unless restoration is disabled.
	pub async fn restore(&self, store: &dyn SnapshotStore) -> RestoreOutcome {
		if !self.config().restoration.enabled {
			tracing::trace!("restoration disabled");
			return RestoreOutcome::Disabled;
		}
		self.navigator.restore_from(store).await
	}

	pub async fn persist(&self, store: &dyn SnapshotStore) -> Result<(), PersistError> {
		self.navigator.persist_to(store).await
	}
}
