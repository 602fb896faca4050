use crate::entry::StackEntry;
use crate::restore::PendingRestore;
use crate::transition::{DriverEvent, Transition, TransitionId, TransitionKind};

/// How far a pop goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopDepth {
	Levels(usize),
	Root,
}

/// A stack mutation. Live calls and restore replays go through the same [`StackState::apply`].
#[derive(Debug, Clone)]
pub(crate) enum StackOp {
	Push(StackEntry),
	Pop { depth: PopDepth, animated: bool },
	SetBackButtonHidden(bool),
	SetBackGestureDisabled(bool),
}

/// Everything behind the navigator's lock.
#[derive(Debug, Default)]
pub(crate) struct StackState {
	/// Pushed entries, bottom first. The root is implicit.
	pub(crate) entries: Vec<StackEntry>,
	next_transition: u64,
	in_flight: Option<TransitionId>,
	pub(crate) restore: Option<PendingRestore>,
	/// Generation of the most recently issued restore ticket.
	pub(crate) last_generation: u64,
}

impl StackState {
	pub(crate) fn depth(&self) -> usize {
		self.entries.len()
	}

	/// Applies `op`, recording driver calls into `events`.
	pub(crate) fn apply(&mut self, op: StackOp, events: &mut Vec<DriverEvent>) {
		match op {
			StackOp::Push(entry) => {
				let from = self.depth();
				let animated = entry.animated;
				tracing::debug!(key = %entry.key, kind = entry.route.kind(), depth = from + 1, "push");
				self.entries.push(entry);
				self.emit(TransitionKind::Push, animated, from, events);
			}
			StackOp::Pop { depth, animated } => {
				let from = self.depth();
				let to = match depth {
					PopDepth::Levels(levels) => from.saturating_sub(levels),
					PopDepth::Root => 0,
				};
				if to == from {
					tracing::trace!(depth = from, "pop at boundary ignored");
					return;
				}
				tracing::debug!(from, to, "pop");
				self.entries.truncate(to);
				self.emit(TransitionKind::Pop, animated, from, events);
			}
			StackOp::SetBackButtonHidden(hidden) => {
				if let Some(top) = self.entries.last_mut() {
					top.hides_back_button = hidden;
				}
			}
			StackOp::SetBackGestureDisabled(disabled) => {
				if let Some(top) = self.entries.last_mut() {
					top.disable_back_gesture = disabled;
				}
			}
		}
	}

	/// Swaps in a restored (or empty) stack.
	pub(crate) fn replace(&mut self, entries: Vec<StackEntry>, events: &mut Vec<DriverEvent>) {
		if entries == self.entries {
			return;
		}
		let from = self.depth();
		self.entries = entries;
		self.emit(TransitionKind::Restore, false, from, events);
	}

	/// Marks `id` finished. Returns false when it was not the in-flight transition.
	pub(crate) fn finish_transition(&mut self, id: TransitionId) -> bool {
		if self.in_flight == Some(id) {
			self.in_flight = None;
			true
		} else {
			false
		}
	}

	pub(crate) fn in_flight(&self) -> Option<TransitionId> {
		self.in_flight
	}

	fn emit(&mut self, kind: TransitionKind, animated: bool, from_depth: usize, events: &mut Vec<DriverEvent>) {
		self.next_transition += 1;
		let id = TransitionId(self.next_transition);

		if let Some(overtaken) = self.in_flight.take() {
			events.push(DriverEvent::Abandon(overtaken));
		}
		if animated {
			self.in_flight = Some(id);
		}

		events.push(DriverEvent::Begin(Transition {
			id,
			kind,
			animated,
			from_depth,
			to_depth: self.depth(),
		}));
	}
}
