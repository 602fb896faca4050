use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::test_fixtures::{ReentrantDriver, StrayRoute, detail, levels, navigator, table};
use crate::{DriverEvent, Navigator, PushOptions, RestoreOutcome, ShellConfig, TransitionKind};

/// Must never remove the root.
///
/// - Enforced in: `StackState::apply`
/// - Failure symptom: An empty host with nothing to render.
#[cfg_attr(test, test)]
pub(crate) fn test_root_is_never_popped() {
	let (navigator, log) = navigator();
	navigator.pop();
	navigator.pop_levels(3);
	navigator.pop_to_root();
	navigator.set_back_button_hidden(true);

	assert!(navigator.is_at_root());
	assert_eq!(navigator.render_top(), None);
	assert!(log.events().is_empty());
}

/// Must leave the stack unchanged when a push cannot be resolved.
///
/// - Enforced in: `Navigator::push_any`
/// - Failure symptom: A blank screen at the top of the stack.
#[cfg_attr(test, test)]
pub(crate) fn test_failed_push_leaves_stack_unchanged() {
	let (navigator, log) = navigator();
	navigator.push(detail(1)).unwrap();
	let before = navigator.entries();
	log.take();

	assert!(navigator.push(StrayRoute {}).is_err());
	assert_eq!(navigator.entries(), before);
	assert!(log.events().is_empty());

	// Rejected synchronously even while a restore is pending, and never queued.
	let ticket = navigator.begin_restore();
	assert!(navigator.push(StrayRoute {}).is_err());
	navigator.cancel_restore(&ticket);
	assert_eq!(navigator.entries(), before);
}

/// Must replay operations issued during a restore after the restored stack, in order.
///
/// - Enforced in: `Navigator::submit`, `Navigator::finish_restore`
/// - Failure symptom: A deep link tapped during launch is lost or lands under restored screens.
#[cfg_attr(test, test)]
pub(crate) fn test_restore_replays_queued_ops_in_order() {
	let (source, _) = navigator();
	source.push(detail(1)).unwrap();
	source.push(detail(2)).unwrap();
	let bytes = source.snapshot().unwrap();

	let (navigator, _) = navigator();
	let ticket = navigator.begin_restore();
	navigator.push(detail(10)).unwrap();
	navigator.push(detail(11)).unwrap();
	navigator.pop();
	navigator.push(detail(12)).unwrap();
	assert!(navigator.is_at_root(), "queued operations must not apply early");

	let outcome = navigator.finish_restore(ticket, Ok(Some(bytes)));
	assert!(matches!(outcome, RestoreOutcome::Restored { depth: 2, .. }), "{outcome:?}");
	assert_eq!(levels(&navigator), vec![1, 2, 10, 12]);
	assert!(!navigator.is_restoring());
}

/// Must ignore the completion of a superseded restore.
///
/// - Enforced in: `Navigator::begin_restore`, `Navigator::finish_restore`
/// - Failure symptom: A slow stale load overwrites a newer stack.
#[cfg_attr(test, test)]
pub(crate) fn test_superseded_restore_is_ignored() {
	let (source, _) = navigator();
	source.push(detail(7)).unwrap();
	let stale = source.snapshot().unwrap();

	let (navigator, _) = navigator();
	let first = navigator.begin_restore();
	navigator.push(detail(1)).unwrap();
	let second = navigator.begin_restore();
	assert!(first.is_cancelled());
	assert!(!second.is_cancelled());

	let outcome = navigator.finish_restore(first, Ok(Some(stale)));
	assert!(matches!(outcome, RestoreOutcome::Superseded), "{outcome:?}");
	assert!(navigator.is_restoring());
	assert!(navigator.is_at_root());

	let outcome = navigator.finish_restore(second, Ok(None));
	assert!(matches!(outcome, RestoreOutcome::Empty), "{outcome:?}");
	assert_eq!(levels(&navigator), vec![1]);
}

/// Must abandon an in-flight animated transition when a later one starts.
///
/// - Enforced in: `StackState::emit`
/// - Failure symptom: A pop animation finishes on top of a stack that already reached the root.
#[cfg_attr(test, test)]
pub(crate) fn test_later_transition_abandons_in_flight() {
	let (navigator, log) = navigator();
	navigator.push_with(detail(1), PushOptions::new().animated(false)).unwrap();
	navigator.push_with(detail(2), PushOptions::new().animated(false)).unwrap();
	log.take();

	navigator.pop_with(true);
	let pop = navigator.in_flight_transition().unwrap();
	navigator.pop_to_root_with(false);

	assert!(navigator.is_at_root());
	assert_eq!(navigator.in_flight_transition(), None);
	let events = log.events();
	assert_eq!(events.len(), 3);
	assert!(matches!(events[0], DriverEvent::Begin(t) if t.id == pop && t.kind == TransitionKind::Pop && (t.from_depth, t.to_depth) == (2, 1)));
	assert_eq!(events[1], DriverEvent::Abandon(pop));
	assert!(matches!(events[2], DriverEvent::Begin(t) if t.kind == TransitionKind::Pop && (t.from_depth, t.to_depth) == (1, 0)));
	assert!(!navigator.transition_finished(pop));
}

/// Must call the driver with the stack lock released.
///
/// - Enforced in: `Navigator::dispatch`
/// - Failure symptom: Deadlock when a driver reads the stack.
#[cfg_attr(test, test)]
pub(crate) fn test_driver_may_reenter_navigator() {
	let driver = Arc::new(ReentrantDriver::default());
	let navigator = Navigator::new(table(), ShellConfig::default(), Arc::clone(&driver) as Arc<dyn crate::TransitionDriver>);
	driver.navigator.set(navigator.clone()).unwrap();

	navigator.push(detail(1)).unwrap();
	navigator.push(detail(2)).unwrap();
	navigator.pop_to_root();

	assert_eq!(*driver.observed.lock(), vec![(1, 1), (2, 2), (0, 0)]);
}
