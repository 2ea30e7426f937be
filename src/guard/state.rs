//! CallState: observable snapshot of the guarded call
//!
//! Exactly one of `value`/`error` is populated once `loading` is false and
//! a call has completed; both are `None` in the initial/reset state. The
//! snapshot is what a UI renders - spinner, error box, or result panel.

use serde::{Deserialize, Serialize};

/// Shown when a failure carries no usable message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Snapshot of a guarded asynchronous call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallState<T> {
    pub loading: bool,
    pub value: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for CallState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> CallState<T> {
    /// Initial/reset state: nothing loading, nothing published
    pub fn idle() -> Self {
        Self {
            loading: false,
            value: None,
            error: None,
        }
    }

    /// A call has started and nothing has settled yet
    pub fn loading() -> Self {
        Self {
            loading: true,
            value: None,
            error: None,
        }
    }

    /// The current call settled successfully
    pub fn settled_value(value: T) -> Self {
        Self {
            loading: false,
            value: Some(value),
            error: None,
        }
    }

    /// The current call settled with a failure. Empty messages are replaced
    /// with the generic fallback so the UI never renders a blank error.
    pub fn settled_error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            loading: false,
            value: None,
            error: Some(message),
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.loading && self.value.is_none() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state_is_empty() {
        let state: CallState<u32> = CallState::idle();
        assert!(state.is_idle());
        assert!(!state.loading);
    }

    #[test]
    fn test_settled_states_populate_exactly_one_side() {
        let ok: CallState<u32> = CallState::settled_value(7);
        assert!(!ok.loading);
        assert_eq!(ok.value, Some(7));
        assert!(ok.error.is_none());

        let err: CallState<u32> = CallState::settled_error("bad input");
        assert!(!err.loading);
        assert!(err.value.is_none());
        assert_eq!(err.error.as_deref(), Some("bad input"));
    }

    #[test]
    fn test_empty_error_message_falls_back_to_generic() {
        let state: CallState<u32> = CallState::settled_error("");
        assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }
}
