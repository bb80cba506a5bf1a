//! The one-time readiness gate.
//!
//! Trigger registration depends on the host's menu machinery being loaded.
//! That dependency is modeled as a signal resolved at most once per process
//! lifetime: rebinding parks on the gate and attaches its listener only after
//! the signal fires, so a trigger can never fire before the capability is
//! confirmed present.

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;
use std::sync::{Mutex, PoisonError};

/// Creates a connected signal/gate pair.
///
/// The host keeps the [`ReadySignal`] and fires it once its menu machinery is
/// ready; the connector holds clones of the [`ReadyGate`].
pub fn ready_gate() -> (ReadySignal, ReadyGate) {
    let (sender, receiver) = oneshot::channel();
    (
        ReadySignal {
            sender: Mutex::new(Some(sender)),
        },
        ReadyGate {
            resolved: receiver.shared(),
        },
    )
}

/// The host's half of the readiness dependency.
pub struct ReadySignal {
    sender: Mutex<Option<oneshot::Sender<()>>>,
}

impl ReadySignal {
    /// Fires the signal. Calls after the first are no-ops.
    pub fn notify(&self) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(());
        }
    }
}

/// The connector's half of the readiness dependency.
///
/// Cheaply cloneable; every clone resolves together.
#[derive(Clone)]
pub struct ReadyGate {
    resolved: Shared<oneshot::Receiver<()>>,
}

impl ReadyGate {
    /// Completes once the signal has fired.
    ///
    /// A signal dropped without ever firing also completes the gate: a host
    /// that went away must not leave pending rebinds parked forever.
    pub async fn ready(&self) {
        if self.resolved.clone().await.is_err() {
            tracing::debug!(
                target: "ctxwire",
                "readiness signal dropped without firing; treating as ready"
            );
        }
    }

    /// Whether the gate has already resolved.
    pub fn is_ready(&self) -> bool {
        self.resolved.peek().is_some()
    }

    /// A gate that is already resolved, for hosts whose machinery is ready
    /// at construction time.
    pub fn immediate() -> ReadyGate {
        let (signal, gate) = ready_gate();
        signal.notify();
        gate
    }
}
