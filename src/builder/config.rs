//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::config::{Config, StateDefinition, StateTable};
use crate::machine::StateMachine;

/// Builder for [`Config`] with a fluent API.
///
/// States appear in the built table in the order they were first mentioned,
/// either through [`state`](Self::state) or as the source of a
/// [`transition`](Self::transition). Destinations are not declared
/// implicitly.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with a complete definition, replacing any earlier one.
    pub fn state(mut self, id: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(id, definition);
        self
    }

    /// Add a single `from --event--> to` transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        match self.states.get_mut(&from) {
            Some(definition) => {
                definition.transitions.insert(event.into(), to.into());
            }
            None => {
                self.states.insert(from, StateDefinition::new().on(event, to));
            }
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Config::new(initial, self.states))
    }

    /// Build the configuration and start a machine on it.
    pub fn build_machine(self) -> Result<StateMachine, BuildError> {
        self.build().map(StateMachine::new)
    }
}
