//! Shutdown coordination for the gateway.

use std::future::Future;
use tokio::sync::broadcast;

/// Stops every gateway server that waits on it.
///
/// `start` wires OS signals into `trigger`; tests trigger it directly.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Future that resolves on the next `trigger`.
    ///
    /// Subscribes immediately, so a trigger sent after this call but before
    /// the first poll is not lost.
    pub fn triggered(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Stop all servers waiting on this coordinator.
    pub fn trigger(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Shutdown triggered with no server running");
        }
    }

    /// Trigger once SIGINT/SIGTERM arrives.
    pub fn trigger_on_signal(&self) {
        let shutdown = self.clone();
        tokio::spawn(async move {
            super::signals::shutdown_signal().await;
            shutdown.trigger();
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
