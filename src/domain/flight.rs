//! Explicit per-operation submission state.
//!
//! Each client operation owns its own [`SingleFlight`] lock, so two distinct
//! operations never interfere. A submission attempted while the same
//! operation is already running is dropped, not queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Submission state of one client operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpState {
    Idle,
    InFlight,
}

/// Single-flight lock for one operation.
///
/// Clones share the same state, so a service can be cloned across tasks and
/// keep one lock per operation.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    in_flight: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OpState {
        if self.in_flight.load(Ordering::Acquire) {
            OpState::InFlight
        } else {
            OpState::Idle
        }
    }

    /// Moves the operation to `InFlight`, or returns `None` when a permit is
    /// already live.
    ///
    /// The returned permit restores `Idle` when dropped, so early returns and
    /// `?` propagation release the lock on every exit path.
    pub fn try_acquire(&self) -> Option<FlightPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then(|| FlightPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }
}

/// Live permit for one submission.
#[derive(Debug)]
pub struct FlightPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
