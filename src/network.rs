//! Background lookup task management.
//!
//! The UI loop stays single-threaded; lookups run on spawned tokio tasks
//! that report back over an mpsc channel.

use tokio::sync::mpsc;

use crate::client::OrdClient;
use crate::event::LookupEvent;

/// Spawns address lookups and delivers their results to the main loop.
pub struct LookupManager {
    client: OrdClient,
    runtime: tokio::runtime::Handle,
    sender: mpsc::Sender<LookupEvent>,
}

impl LookupManager {
    /// Creates a new LookupManager.
    #[must_use]
    pub fn new(
        client: OrdClient,
        runtime: tokio::runtime::Handle,
        sender: mpsc::Sender<LookupEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            sender,
        }
    }

    /// Starts a lookup for `address` on a background task.
    ///
    /// The two remote fetches inside the lookup run concurrently and join
    /// all-or-nothing; whatever comes back is sent to the UI loop as a
    /// single [`LookupEvent::LookupFinished`].
    pub fn lookup(&self, address: String) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let result = client.lookup_address(&address).await;

            if let Err(e) = &result {
                tracing::error!(%address, error = %e, "address lookup failed");
            }

            let payload = result.map_err(|e| e.to_string());
            let _ = sender.send(LookupEvent::LookupFinished(payload)).await;
        });
    }
}
