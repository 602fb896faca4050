#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use wayline_navigator::{NavigationShell, ShellConfig, TransitionDriver, TransitionLog};
use wayline_registry::DestinationBundle;
use wayline_restore::SnapshotStore;
use wayline_route::single_kind_route;
use wayline_threads::ThreadsScreen;

pub const DEEP_DETAIL_KEY: &str = "com.suinavigation.sample.deepDetail";

/// Host-owned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepDetail {
	pub level: i64,
}

single_kind_route!(DeepDetail => "deepDetail");

/// Host content type: its own screens plus whatever features render.
#[derive(Debug, Clone, PartialEq)]
pub enum HostScreen {
	Deep(i64),
	Threads(ThreadsScreen),
}

impl From<ThreadsScreen> for HostScreen {
	fn from(screen: ThreadsScreen) -> Self {
		Self::Threads(screen)
	}
}

pub fn host_bundle() -> DestinationBundle<HostScreen> {
	DestinationBundle::new("host", |registry| {
		registry.register_keyed::<DeepDetail, _>(DEEP_DETAIL_KEY, |route| HostScreen::Deep(route.level));
	})
}

pub fn bundles() -> Vec<DestinationBundle<HostScreen>> {
	vec![host_bundle(), wayline_threads::destinations(), wayline_threads::thread_destinations()]
}

pub fn shell_with(config: ShellConfig) -> (NavigationShell<HostScreen>, Arc<TransitionLog>) {
	let log = Arc::new(TransitionLog::new());
	let shell = NavigationShell::with_driver(config, &bundles(), Arc::clone(&log) as Arc<dyn TransitionDriver>).expect("host bundles compose");
	(shell, log)
}

pub fn shell() -> (NavigationShell<HostScreen>, Arc<TransitionLog>) {
	shell_with(ShellConfig::default())
}

/// Store whose `load` reports that it started, then waits for the test to open a gate.
pub struct GatedStore {
	bytes: Option<Vec<u8>>,
	started: Mutex<Option<oneshot::Sender<()>>>,
	gate: Mutex<Option<oneshot::Receiver<()>>>,
}

pub struct GateHandles {
	pub started: oneshot::Receiver<()>,
	pub open: oneshot::Sender<()>,
}

impl GatedStore {
	pub fn new(bytes: Option<Vec<u8>>) -> (Self, GateHandles) {
		let (started_tx, started_rx) = oneshot::channel();
		let (open_tx, open_rx) = oneshot::channel();
		let store = Self {
			bytes,
			started: Mutex::new(Some(started_tx)),
			gate: Mutex::new(Some(open_rx)),
		};
		(
			store,
			GateHandles {
				started: started_rx,
				open: open_tx,
			},
		)
	}
}

#[async_trait]
impl SnapshotStore for GatedStore {
	async fn load(&self) -> io::Result<Option<Vec<u8>>> {
		if let Some(started) = self.started.lock().take() {
			let _ = started.send(());
		}
		let gate = self.gate.lock().take();
		if let Some(gate) = gate {
			let _ = gate.await;
		}
		Ok(self.bytes.clone())
	}

	async fn save(&self, _bytes: Vec<u8>) -> io::Result<()> {
		Err(io::Error::other("read-only store"))
	}

	async fn discard(&self) -> io::Result<()> {
		Ok(())
	}
}
