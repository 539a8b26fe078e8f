//! Declarative machine configuration.
//!
//! A [`Config`] names the initial state and maps every state identifier to a
//! [`StateDefinition`], whose transition table maps event identifiers to
//! destination states. The JSON shape is:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! States keep their declaration order, so listing them is deterministic.
//! Nothing here checks that `initial` or a transition destination actually
//! names a declared state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;

pub mod error;

pub use error::ConfigError;

/// Top-level machine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the state the machine starts in (and resets to)
    pub initial: String,

    /// All declared states, in declaration order
    #[serde(default)]
    pub states: StateTable,
}

impl Config {
    /// Create a configuration from an initial state and a state table.
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document is treated as a missing configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind_fsm::config::{Config, ConfigError};
    ///
    /// let config = Config::from_json(r#"{"initial": "a", "states": {"a": {}}}"#).unwrap();
    /// assert_eq!(config.initial, "a");
    ///
    /// assert!(matches!(Config::from_json("null"), Err(ConfigError::Missing)));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Self> = serde_json::from_str(json)?;
        parsed.ok_or(ConfigError::Missing)
    }

    /// Parse a configuration from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let parsed: Option<Self> = serde_json::from_reader(reader)?;
        parsed.ok_or(ConfigError::Missing)
    }

    /// Render the configuration back to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// A single state: its event-triggered transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> destination state identifier
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// A state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the transition taken on `event`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Destination for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events handled by this state, sorted.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Ordered mapping of state identifiers to definitions.
///
/// Preserves declaration order. Inserting an existing identifier replaces its
/// definition without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    entries: IndexMap<String, StateDefinition>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a state, returning the definition it replaced, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        self.entries.insert(id.into(), definition)
    }

    /// Definition of state `id`, if declared.
    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut StateDefinition> {
        self.entries.get_mut(id)
    }

    /// Whether `id` is a declared state.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// State identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(id, definition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.entries
            .iter()
            .map(|(id, definition)| (id.as_str(), definition))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, definition)| (id.into(), definition))
                .collect(),
        }
    }
}
