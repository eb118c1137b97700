//! Single-flight submission of form drafts to the costing service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{CalculationResult, FormState};
use crate::infra::transport::{Transport, TransportError};

/// Receives the payload of a successful calculation. Called at most once per
/// submission and never on failure. Deliberately not `Send`: sinks capture UI
/// handles and the whole submit future runs on the UI task.
pub type ResultSink = Arc<dyn Fn(CalculationResult)>;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a calculation is already in flight")]
    InFlight,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Shared in-flight flag. Clones hand out handles to the same flag, so one
/// gate kept in app context covers every submission path.
#[derive(Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    fn try_acquire(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then(|| InFlightGuard { gate: self.clone() })
    }
}

/// Releases the gate when dropped, on success and failure alike.
struct InFlightGuard {
    gate: SubmitGate,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::SeqCst);
    }
}

pub struct Submitter {
    transport: Arc<dyn Transport>,
    gate: SubmitGate,
}

impl Submitter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_gate(transport, SubmitGate::new())
    }

    pub fn with_gate(transport: Arc<dyn Transport>, gate: SubmitGate) -> Self {
        Self { transport, gate }
    }

    pub fn is_in_flight(&self) -> bool {
        self.gate.is_in_flight()
    }

    /// Sends one snapshot to the service and hands the payload to `sink`.
    /// Rejects immediately while another submission holds the gate. The
    /// snapshot is owned, so edits made to the live form during the round
    /// trip cannot change what was sent.
    pub async fn submit(&self, snapshot: FormState, sink: ResultSink) -> Result<(), SubmitError> {
        let _guard = self.gate.try_acquire().ok_or(SubmitError::InFlight)?;

        tracing::debug!(project = %snapshot.project_name, "submitting calculation request");
        let result = self.transport.calculate(&snapshot).await?;
        sink(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_one_holder_at_a_time() {
        let gate = SubmitGate::new();

        let guard = gate.try_acquire();
        assert!(guard.is_some());
        assert!(gate.is_in_flight());
        assert!(gate.try_acquire().is_none());

        drop(guard);
        assert!(!gate.is_in_flight());
        assert!(gate.try_acquire().is_some());
    }

    #[test]
    fn cloned_gates_share_the_flag() {
        let gate = SubmitGate::new();
        let other = gate.clone();

        let _guard = gate.try_acquire();

        assert!(other.is_in_flight());
        assert!(other.try_acquire().is_none());
    }
}
