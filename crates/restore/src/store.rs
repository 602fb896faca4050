use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

/// Persistence backend for snapshot bytes.
///
/// The navigator never inspects how bytes are kept; a store only has to hand back what it was given.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
	/// Loads the last saved snapshot. `Ok(None)` means nothing was saved.
	async fn load(&self) -> io::Result<Option<Vec<u8>>>;

	async fn save(&self, bytes: Vec<u8>) -> io::Result<()>;

	/// Drops any saved snapshot.
	async fn discard(&self) -> io::Result<()>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
	slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemorySnapshotStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			slot: Arc::new(Mutex::new(Some(bytes.into()))),
		}
	}

	/// Returns a copy of the stored bytes.
	pub fn bytes(&self) -> Option<Vec<u8>> {
		self.slot.lock().clone()
	}
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
	async fn load(&self) -> io::Result<Option<Vec<u8>>> {
		Ok(self.slot.lock().clone())
	}

	async fn save(&self, bytes: Vec<u8>) -> io::Result<()> {
		*self.slot.lock() = Some(bytes);
		Ok(())
	}

	async fn discard(&self) -> io::Result<()> {
		self.slot.lock().take();
		Ok(())
	}
}
