//! Error types for state machine operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors returned by [`StateMachine`](crate::StateMachine) operations.
///
/// Every variant describes caller misuse. A failing call never mutates the
/// machine: current state and both history stacks are left as they were.
#[derive(Debug, Error)]
pub enum FsmError {
    /// No usable configuration was supplied at construction.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// `change_state` target is not a configured state.
    #[error("Incorrect state '{state}': not defined in configuration")]
    InvalidState { state: String },

    /// `trigger` event has no transition from the current state.
    #[error("Incorrect event '{event}': no transition from state '{state}'")]
    InvalidEvent { state: String, event: String },
}

impl FsmError {
    /// True for errors raised while constructing the machine.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
