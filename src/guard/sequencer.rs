//! CallSequencer: latest-call-wins publication gate
//!
//! Hands out monotonically increasing call ids and publishes a completion
//! only when its id still matches the counter - a completion from any
//! superseded call is counted and dropped. Runs under a single-threaded
//! cooperative scheduler, so the id comparison is the sole synchronization:
//! mutation and comparison happen within one scheduling turn.

use crate::guard::state::CallState;

/// Latest-call-wins guard around an arbitrary asynchronous operation
pub struct CallSequencer<T> {
    /// Id of the most recently started call
    seq: u64,
    /// Published snapshot
    state: CallState<T>,
    /// Number of calls started
    started_count: u64,
    /// Number of completions that arrived stale and were dropped
    stale_count: u64,
}

impl<T> Default for CallSequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CallSequencer<T> {
    pub fn new() -> Self {
        Self {
            seq: 0,
            state: CallState::idle(),
            started_count: 0,
            stale_count: 0,
        }
    }

    /// Start a call: bump the counter, publish the loading state, and
    /// return the id this call must present when it settles.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.started_count += 1;
        self.state = CallState::loading();
        self.seq
    }

    /// Whether `call_id` is still the most recently started call
    pub fn is_current(&self, call_id: u64) -> bool {
        call_id == self.seq
    }

    /// Publish a successful completion. Returns false (and keeps the
    /// published state untouched) when the call has been superseded.
    pub fn settle_value(&mut self, call_id: u64, value: T) -> bool {
        if !self.is_current(call_id) {
            self.stale_count += 1;
            return false;
        }
        self.state = CallState::settled_value(value);
        true
    }

    /// Publish a failed completion under the same staleness gate.
    pub fn settle_error(&mut self, call_id: u64, message: impl Into<String>) -> bool {
        if !self.is_current(call_id) {
            self.stale_count += 1;
            return false;
        }
        self.state = CallState::settled_error(message);
        true
    }

    /// Invalidate any in-flight call and publish the idle state.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.state = CallState::idle();
    }

    /// The published snapshot, readable at any time
    pub fn snapshot(&self) -> &CallState<T> {
        &self.state
    }

    /// Id of the most recently started call (0 before any call)
    pub fn current_call(&self) -> u64 {
        self.seq
    }

    /// Get total number of calls started
    pub fn started_count(&self) -> u64 {
        self.started_count
    }

    /// Get number of stale completions dropped
    pub fn stale_count(&self) -> u64 {
        self.stale_count
    }

    /// Get stale completions as a percentage of calls started
    pub fn stale_rate(&self) -> f64 {
        if self.started_count == 0 {
            return 0.0;
        }
        (self.stale_count as f64 / self.started_count as f64) * 100.0
    }
}

// =============================================================================
// Tests
// =============================================================================
