use tokio_util::sync::CancellationToken;

use crate::stack::StackOp;

/// Handle of one restore attempt.
///
/// Issued by [`crate::Navigator::begin_restore`] and consumed by
/// [`crate::Navigator::finish_restore`]. A newer `begin_restore` cancels it. Clones share the
/// attempt; only the first to finish or cancel it has any effect.
#[derive(Debug, Clone)]
pub struct RestoreTicket {
	generation: u64,
	cancel: CancellationToken,
}

impl RestoreTicket {
	pub(crate) fn new(generation: u64, cancel: CancellationToken) -> Self {
		Self { generation, cancel }
	}

	pub const fn generation(&self) -> u64 {
		self.generation
	}

	/// True once the restore was superseded or cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Resolves when the restore is superseded or cancelled.
	pub async fn cancelled(&self) {
		self.cancel.cancelled().await;
	}
}

/// The restore currently allowed to install a stack, with the operations issued while it loads.
#[derive(Debug)]
pub(crate) struct PendingRestore {
	pub(crate) generation: u64,
	pub(crate) cancel: CancellationToken,
	pub(crate) queued: Vec<StackOp>,
}

impl PendingRestore {
	pub(crate) fn new(generation: u64, queued: Vec<StackOp>) -> Self {
		Self {
			generation,
			cancel: CancellationToken::new(),
			queued,
		}
	}

	pub(crate) fn ticket(&self) -> RestoreTicket {
		RestoreTicket::new(self.generation, self.cancel.clone())
	}
}
