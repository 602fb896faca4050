//! Navigation stack controller.
//!
//! # Purpose
//!
//! Owns the ordered stack of destinations a user has visited above an implicit root, resolves
//! every pushed route through a composed [`DestinationTable`](wayline_registry::DestinationTable),
//! drives a presentation collaborator for each change of shape, and saves or restores the stack
//! through the snapshot codec.
//!
//! # Mental Model
//!
//! The stack is `[root, e1, .., en]`; only `e1..en` are stored and `depth() == n`. Every call
//! becomes one stack operation applied under a lock, in call order. Each operation that changes
//! the stack's shape emits one [`Transition`]; the [`TransitionDriver`] hears about it after the
//! lock is released and can never roll the stack back.
//!
//! Restoration is the only asynchronous step. While a restore is pending, operations are queued
//! instead of applied; when it completes, the restored stack (or the bare root on failure) is
//! installed and the queue is replayed on top.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`NavigationShell`] | Composes bundles, owns the navigator, runs restore/persist per config |
//! | [`Navigator`] | Cloneable handle: push/pop, queries, snapshot, restore |
//! | [`StackEntry`] | A pushed route, its destination key and transition flags |
//! | [`RestoreTicket`] | One restore attempt; cancelled when superseded |
//! | [`TransitionDriver`] | Presentation collaborator |
//!
//! # Invariants
//!
//! - Must never remove the root.
//!   - Enforced in: `StackState::apply`
//!   - Tested by: `invariants::test_root_is_never_popped`
//!   - Failure symptom: An empty host with nothing to render.
//!
//! - Must leave the stack unchanged when a push cannot be resolved.
//!   - Enforced in: `Navigator::push_any`
//!   - Tested by: `invariants::test_failed_push_leaves_stack_unchanged`
//!   - Failure symptom: A blank screen at the top of the stack.
//!
//! - Must replay operations issued during a restore after the restored stack, in order.
//!   - Enforced in: `Navigator::submit`, `Navigator::finish_restore`
//!   - Tested by: `invariants::test_restore_replays_queued_ops_in_order`
//!   - Failure symptom: A deep link tapped during launch is lost or lands under restored screens.
//!
//! - Must ignore the completion of a superseded restore.
//!   - Enforced in: `Navigator::begin_restore`, `Navigator::finish_restore`
//!   - Tested by: `invariants::test_superseded_restore_is_ignored`
//!   - Failure symptom: A slow stale load overwrites a newer stack.
//!
//! - Must abandon an in-flight animated transition when a later one starts.
//!   - Enforced in: `StackState::emit`
//!   - Tested by: `invariants::test_later_transition_abandons_in_flight`
//!   - Failure symptom: A pop animation finishes on top of a stack that already reached the root.
//!
//! - Must call the driver with the stack lock released.
//!   - Enforced in: `Navigator::dispatch`
//!   - Tested by: `invariants::test_driver_may_reenter_navigator`
//!   - Failure symptom: Deadlock when a driver reads the stack.

mod config;
mod entry;
mod error;
mod navigator;
mod restore;
mod shell;
mod stack;
mod transition;

pub use config::{ConfigError, RestorationConfig, ShellConfig};
pub use entry::{PushOptions, StackEntry};
pub use error::{PersistError, RestoreOutcome};
pub use navigator::Navigator;
pub use restore::RestoreTicket;
pub use shell::NavigationShell;
pub use transition::{DriverEvent, NoTransitions, Transition, TransitionDriver, TransitionId, TransitionKind, TransitionLog};

#[cfg(test)]
mod invariants;

#[cfg(test)]
mod test_fixtures;
