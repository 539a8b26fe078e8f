//! Configuration-driven state machine with undo/redo.

use crate::config::{Config, ConfigError};
use crate::core::TransitionHistory;
use crate::error::FsmError;
use std::mem;

/// A live state machine over a [`Config`].
///
/// The machine owns its configuration for its whole lifetime; callers can
/// only read it back through [`config`](Self::config).
///
/// # Example
///
/// ```rust
/// use rewind_fsm::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle":    { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(!machine.undo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    state: String,
    history: TransitionHistory<String>,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The initial state is taken as is, even if it is not declared.
    pub fn new(config: Config) -> Self {
        let state = config.initial.clone();
        Self {
            config,
            state,
            history: TransitionHistory::new(),
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`FsmError::Configuration`] when no configuration is given.
    pub fn try_new(config: Option<Config>) -> Result<Self, FsmError> {
        let config = config.ok_or(ConfigError::Missing)?;
        Ok(Self::new(config))
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Ok(Self::new(Config::from_json(json)?))
    }

    /// Current state identifier.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Jump straight to `target`, ignoring the transition graph.
    ///
    /// Only checks that `target` is a declared state.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.states.contains(target) {
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        tracing::debug!(from = %self.state, to = %target, "state changed");
        self.advance(target.to_string());
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The configured destination is used without checking that it is a
    /// declared state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let next = self
            .config
            .states
            .get(&self.state)
            .and_then(|definition| definition.target(event))
            .ok_or_else(|| FsmError::InvalidEvent {
                state: self.state.clone(),
                event: event.to_string(),
            })?
            .to_string();

        tracing::debug!(from = %self.state, to = %next, event = %event, "event triggered transition");
        self.advance(next);
        Ok(())
    }

    /// Return to the initial state. History is left untouched.
    pub fn reset(&mut self) {
        tracing::trace!(from = %self.state, to = %self.config.initial, "reset");
        self.state.clone_from(&self.config.initial);
    }

    /// Declared states, in declaration order.
    ///
    /// With `Some(event)`, only the states that have a transition for that
    /// event are returned (possibly none).
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Events the current state has transitions for, sorted.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .states
            .get(&self.state)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let from = self.state.clone();
        let undone = self.history.undo(&mut self.state);
        if undone {
            tracing::debug!(from = %from, to = %self.state, "undo");
        }
        undone
    }

    /// Re-apply the last undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let from = self.state.clone();
        let redone = self.history.redo(&mut self.state);
        if redone {
            tracing::debug!(from = %from, to = %self.state, "redo");
        }
        redone
    }

    /// Forget the undo history. Pending redo entries are kept.
    pub fn clear_history(&mut self) {
        tracing::trace!(entries = self.history.past().len(), "history cleared");
        self.history.clear_past();
    }

    /// Previously occupied states, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.past()
    }

    /// Undone states, the next one to redo last.
    pub fn redo_history(&self) -> &[String] {
        self.history.future()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn advance(&mut self, next: String) {
        let previous = mem::replace(&mut self.state, next);
        self.history.record(previous);
    }
}

impl TryFrom<Option<Config>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<Config>) -> Result<Self, Self::Error> {
        Self::try_new(config)
    }
}

impl From<Config> for StateMachine {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
