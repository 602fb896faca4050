use std::io;

use wayline_restore::{DecodeError, EncodeError};

/// Failure to write the current stack to a store.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
	#[error(transparent)]
	Encode(#[from] EncodeError),
	#[error("snapshot store write failed: {0}")]
	Io(#[from] io::Error),
}

/// How a restore attempt ended.
#[derive(Debug)]
pub enum RestoreOutcome {
	/// The snapshot was decoded and installed.
	Restored {
		depth: usize,
		format: wayline_restore::SnapshotFormat,
	},
	/// The store held no snapshot. The stack was reset to the root.
	Empty,
	/// The snapshot was rejected. The stack was reset to the root.
	Discarded(DecodeError),
	/// The store failed to load. The stack was reset to the root.
	LoadFailed(io::Error),
	/// A newer restore took over. The stack was not touched by this one.
	Superseded,
	/// The restore was cancelled before it finished. The stack was not touched by this one.
	Cancelled,
	/// Restoration is turned off in the configuration.
	Disabled,
}

impl RestoreOutcome {
	/// Whether this attempt installed a new stack (restored or root-only).
	pub fn replaced_stack(&self) -> bool {
		matches!(self, Self::Restored { .. } | Self::Empty | Self::Discarded(_) | Self::LoadFailed(_))
	}
}
