use std::fmt;

use parking_lot::Mutex;

/// Identifies one stack transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) u64);

impl TransitionId {
	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for TransitionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
	Push,
	Pop,
	/// The stack was replaced by a restored snapshot or by the root-only fallback.
	Restore,
}

/// A change of stack shape, handed to the [`TransitionDriver`].
///
/// The logical stack already has its new shape when a transition is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub id: TransitionId,
	pub kind: TransitionKind,
	pub animated: bool,
	pub from_depth: usize,
	pub to_depth: usize,
}

/// Presentation collaborator that animates stack changes.
///
/// Called after the navigator has released its state, so implementations may query or mutate
/// the navigator from inside these methods.
pub trait TransitionDriver: Send + Sync {
	fn begin(&self, transition: &Transition);

	/// The in-flight animated transition `id` was overtaken by a later one.
	fn abandon(&self, id: TransitionId) {
		let _ = id;
	}
}

/// Driver for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransitions;

impl TransitionDriver for NoTransitions {
	fn begin(&self, _transition: &Transition) {}
}

/// A call the navigator made on its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
	Begin(Transition),
	Abandon(TransitionId),
}

/// Driver that records every call, for hosts that assert on presentation.
#[derive(Debug, Default)]
pub struct TransitionLog {
	events: Mutex<Vec<DriverEvent>>,
}

impl TransitionLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn events(&self) -> Vec<DriverEvent> {
		self.events.lock().clone()
	}

	/// Returns and clears the recorded events.
	pub fn take(&self) -> Vec<DriverEvent> {
		std::mem::take(&mut *self.events.lock())
	}

	pub fn begun(&self) -> Vec<Transition> {
		self.events
			.lock()
			.iter()
			.filter_map(|event| match event {
				DriverEvent::Begin(transition) => Some(*transition),
				DriverEvent::Abandon(_) => None,
			})
			.collect()
	}
}

impl TransitionDriver for TransitionLog {
	fn begin(&self, transition: &Transition) {
		self.events.lock().push(DriverEvent::Begin(*transition));
	}

	fn abandon(&self, id: TransitionId) {
		self.events.lock().push(DriverEvent::Abandon(id));
	}
}
