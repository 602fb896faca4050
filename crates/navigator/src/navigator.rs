use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use wayline_registry::{DestinationTable, UnresolvedRoute};
use wayline_restore::{DecodeError, DecodedSnapshot, EncodeError, SnapshotCodec, SnapshotStore};
use wayline_route::{AnyRoute, DestinationKey};

use crate::config::ShellConfig;
use crate::entry::{PushOptions, StackEntry};
use crate::error::{PersistError, RestoreOutcome};
use crate::restore::{PendingRestore, RestoreTicket};
use crate::stack::{PopDepth, StackOp, StackState};
use crate::transition::{DriverEvent, TransitionDriver, TransitionId};

struct Inner<V> {
	table: Arc<DestinationTable<V>>,
	state: Mutex<StackState>,
	driver: Arc<dyn TransitionDriver>,
	config: ShellConfig,
}

/// Handle to one navigation stack.
///
/// Clones share the same stack. Screens receive a clone from their host; there is no global
/// navigator. Every call completes synchronously except the `restore_*` loaders and
/// [`Navigator::persist_to`], and mutations apply in call order.
pub struct Navigator<V> {
	inner: Arc<Inner<V>>,
}

impl<V> Clone for Navigator<V> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<V> std::fmt::Debug for Navigator<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.inner.state.lock();
		f.debug_struct("Navigator")
			.field("depth", &state.depth())
			.field("restoring", &state.restore.is_some())
			.finish_non_exhaustive()
	}
}

impl<V: 'static> Navigator<V> {
	pub fn new(table: Arc<DestinationTable<V>>, config: ShellConfig, driver: Arc<dyn TransitionDriver>) -> Self {
		Self {
			inner: Arc::new(Inner {
				table,
				state: Mutex::new(StackState::default()),
				driver,
				config,
			}),
		}
	}

	pub fn table(&self) -> &DestinationTable<V> {
		&self.inner.table
	}

	pub fn config(&self) -> &ShellConfig {
		&self.inner.config
	}

	/// Pushes `route`, animated per `animate_by_default`.
	pub fn push(&self, route: impl Into<AnyRoute>) -> Result<(), UnresolvedRoute> {
		let options = PushOptions::new().animated(self.inner.config.animate_by_default);
		self.push_any(route.into(), None, options)
	}

	pub fn push_with(&self, route: impl Into<AnyRoute>, options: PushOptions) -> Result<(), UnresolvedRoute> {
		self.push_any(route.into(), None, options)
	}

	/// Pushes `route` through the registration under `key`.
	pub fn push_keyed(&self, key: &DestinationKey, route: impl Into<AnyRoute>, options: PushOptions) -> Result<(), UnresolvedRoute> {
		self.push_any(route.into(), Some(key), options)
	}

	/// Resolves and pushes an erased route.
	///
	/// Resolution happens now even while a restore is pending, so an unknown route is rejected
	/// here and never queued.
	pub fn push_any(&self, route: AnyRoute, key: Option<&DestinationKey>, options: PushOptions) -> Result<(), UnresolvedRoute> {
		let destination = self.inner.table.resolve(&route, key).inspect_err(|err| {
			tracing::warn!(route_type = route.type_name(), kind = route.kind(), error = %err, "push rejected");
		})?;
		let entry = StackEntry::new(route, destination.key().clone(), options);
		self.submit(StackOp::Push(entry));
		Ok(())
	}

	/// Pops the top entry, animated per `animate_by_default`. No-op at the root.
	pub fn pop(&self) {
		self.pop_with(self.inner.config.animate_by_default);
	}

	pub fn pop_with(&self, animated: bool) {
		self.pop_levels_with(1, animated);
	}

	pub fn pop_non_animated(&self) {
		self.pop_with(false);
	}

	/// Pops `min(levels, depth)` entries.
	pub fn pop_levels(&self, levels: usize) {
		self.pop_levels_with(levels, self.inner.config.animate_by_default);
	}

	pub fn pop_levels_with(&self, levels: usize, animated: bool) {
		self.submit(StackOp::Pop {
			depth: PopDepth::Levels(levels),
			animated,
		});
	}

	pub fn pop_to_root(&self) {
		self.pop_to_root_with(self.inner.config.animate_by_default);
	}

	pub fn pop_to_root_with(&self, animated: bool) {
		self.submit(StackOp::Pop {
			depth: PopDepth::Root,
			animated,
		});
	}

	/// Sets `hides_back_button` on the top entry. No-op at the root.
	pub fn set_back_button_hidden(&self, hidden: bool) {
		self.submit(StackOp::SetBackButtonHidden(hidden));
	}

	/// Sets `disable_back_gesture` on the top entry. No-op at the root.
	pub fn set_back_gesture_disabled(&self, disabled: bool) {
		self.submit(StackOp::SetBackGestureDisabled(disabled));
	}

	/// Number of pushed entries above the root.
	pub fn depth(&self) -> usize {
		self.inner.state.lock().depth()
	}

	pub fn is_at_root(&self) -> bool {
		self.depth() == 0
	}

	pub fn entries(&self) -> Vec<StackEntry> {
		self.inner.state.lock().entries.clone()
	}

	pub fn top(&self) -> Option<StackEntry> {
		self.inner.state.lock().entries.last().cloned()
	}

	/// Renders the top entry. `None` at the root.
	pub fn render_top(&self) -> Option<V> {
		let top = self.top()?;
		self.inner.table.get(&top.key)?.render(&top.route)
	}

	pub fn is_restoring(&self) -> bool {
		self.inner.state.lock().restore.is_some()
	}

	pub fn in_flight_transition(&self) -> Option<TransitionId> {
		self.inner.state.lock().in_flight()
	}

	/// Reports that the animated transition `id` completed. Returns false for unknown or
	/// already overtaken transitions.
	pub fn transition_finished(&self, id: TransitionId) -> bool {
		self.inner.state.lock().finish_transition(id)
	}

	/// Encodes the current stack.
	pub fn snapshot(&self) -> Result<Vec<u8>, EncodeError> {
		let entries = self.entries();
		SnapshotCodec::new(&self.inner.table).encode(entries.iter().map(|entry| (&entry.key, &entry.route)))
	}

	pub async fn persist_to(&self, store: &dyn SnapshotStore) -> Result<(), PersistError> {
		let bytes = self.snapshot()?;
		let len = bytes.len();
		store.save(bytes).await?;
		tracing::debug!(bytes = len, "navigation snapshot persisted");
		Ok(())
	}

	/// Starts a restore. A restore that is still pending is superseded: its ticket is cancelled
	/// and the operations queued under it carry over.
	pub fn begin_restore(&self) -> RestoreTicket {
		let mut state = self.inner.state.lock();
		state.last_generation += 1;
		let generation = state.last_generation;

		let queued = match state.restore.take() {
			Some(previous) => {
				tracing::debug!(superseded = previous.generation, generation, queued = previous.queued.len(), "restore superseded");
				previous.cancel.cancel();
				previous.queued
			}
			None => Vec::new(),
		};

		let pending = PendingRestore::new(generation, queued);
		let ticket = pending.ticket();
		state.restore = Some(pending);
		tracing::trace!(generation, "restore started");
		ticket
	}

	/// Completes a restore with the bytes a store loaded.
	///
	/// Installs the decoded stack, or the root alone when loading or decoding failed, then
	/// replays the operations queued while the restore was pending. A superseded or cancelled
	/// ticket changes nothing.
	pub fn finish_restore(&self, ticket: RestoreTicket, loaded: io::Result<Option<Vec<u8>>>) -> RestoreOutcome {
		if !self.owns_restore(&ticket) {
			return self.stale_outcome(&ticket);
		}

		let decoded = match loaded {
			Ok(Some(bytes)) => Ok(Some(SnapshotCodec::new(&self.inner.table).decode(&bytes))),
			Ok(None) => Ok(None),
			Err(err) => Err(err),
		};

		let mut events = Vec::new();
		let outcome = {
			let mut state = self.inner.state.lock();
			let Some(pending) = state.restore.take_if(|pending| pending.generation == ticket.generation()) else {
				drop(state);
				return self.stale_outcome(&ticket);
			};

			let (entries, outcome) = match decoded {
				Ok(Some(Ok(DecodedSnapshot { format, routes }))) => {
					let entries: Vec<_> = routes.into_iter().map(|restored| StackEntry::restored(restored.route, restored.key)).collect();
					let depth = entries.len();
					tracing::debug!(depth, %format, "navigation stack restored");
					(entries, RestoreOutcome::Restored { depth, format })
				}
				Ok(Some(Err(err))) => {
					tracing::warn!(error = %err, "navigation snapshot discarded");
					(Vec::new(), RestoreOutcome::Discarded(err))
				}
				Ok(None) => (Vec::new(), RestoreOutcome::Empty),
				Err(err) => {
					tracing::warn!(error = %err, "navigation snapshot load failed");
					(Vec::new(), RestoreOutcome::LoadFailed(err))
				}
			};

			state.replace(entries, &mut events);
			replay(&mut state, pending.queued, &mut events);
			outcome
		};

		self.dispatch(events);
		outcome
	}

	/// Abandons a pending restore and replays its queued operations onto the current stack.
	///
	/// Returns false when `ticket` no longer owns the restore.
	pub fn cancel_restore(&self, ticket: &RestoreTicket) -> bool {
		let mut events = Vec::new();
		{
			let mut state = self.inner.state.lock();
			let Some(pending) = state.restore.take_if(|pending| pending.generation == ticket.generation()) else {
				return false;
			};
			tracing::debug!(generation = pending.generation, queued = pending.queued.len(), "restore cancelled");
			pending.cancel.cancel();
			replay(&mut state, pending.queued, &mut events);
		}
		self.dispatch(events);
		true
	}

	/// Loads a snapshot from `store` and installs it.
	///
	/// Stops waiting on the store as soon as the restore is superseded or cancelled. When
	/// `restoration.discard_invalid` is set, a snapshot that fails to decode is dropped from
	/// the store.
	pub async fn restore_from(&self, store: &dyn SnapshotStore) -> RestoreOutcome {
		self.restore_with(self.begin_restore(), store).await
	}

	/// Like [`Navigator::restore_from`], for a restore already begun with
	/// [`Navigator::begin_restore`]. A clone of `ticket` can cancel it while the store loads.
	pub async fn restore_with(&self, ticket: RestoreTicket, store: &dyn SnapshotStore) -> RestoreOutcome {
		let loaded = tokio::select! {
			_ = ticket.cancelled() => return self.stale_outcome(&ticket),
			loaded = store.load() => loaded,
		};

		let outcome = self.finish_restore(ticket, loaded);
		if self.inner.config.restoration.discard_invalid
			&& matches!(outcome, RestoreOutcome::Discarded(_))
			&& let Err(err) = store.discard().await
		{
			tracing::warn!(error = %err, "failed to discard invalid navigation snapshot");
		}
		outcome
	}

	/// Decodes `bytes` against this navigator's table without touching the stack.
	pub fn decode(&self, bytes: &[u8]) -> Result<DecodedSnapshot, DecodeError> {
		SnapshotCodec::new(&self.inner.table).decode(bytes)
	}

	fn owns_restore(&self, ticket: &RestoreTicket) -> bool {
		self.inner
			.state
			.lock()
			.restore
			.as_ref()
			.is_some_and(|pending| pending.generation == ticket.generation())
	}

	fn stale_outcome(&self, ticket: &RestoreTicket) -> RestoreOutcome {
		if self.inner.state.lock().last_generation > ticket.generation() {
			RestoreOutcome::Superseded
		} else {
			RestoreOutcome::Cancelled
		}
	}

	fn submit(&self, op: StackOp) {
		let mut events = Vec::new();
		{
			let mut state = self.inner.state.lock();
			if let Some(pending) = state.restore.as_mut() {
				tracing::trace!(generation = pending.generation, ?op, "queued behind pending restore");
				pending.queued.push(op);
				return;
			}
			state.apply(op, &mut events);
		}
		self.dispatch(events);
	}

	/// Forwards driver calls. Must run with the state lock released.
	fn dispatch(&self, events: Vec<DriverEvent>) {
		for event in events {
			match event {
				DriverEvent::Abandon(id) => self.inner.driver.abandon(id),
				DriverEvent::Begin(transition) => self.inner.driver.begin(&transition),
			}
		}
	}
}

fn replay(state: &mut StackState, queued: Vec<StackOp>, events: &mut Vec<DriverEvent>) {
	if !queued.is_empty() {
		tracing::debug!(ops = queued.len(), "replaying queued navigation");
	}
	for op in queued {
		state.apply(op, events);
	}
}
