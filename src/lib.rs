//! Rewind FSM: a configuration-driven finite state machine with undo/redo.
//!
//! A machine is built from a declarative [`Config`]: an initial state plus a
//! table of states, each mapping event names to destination states. The
//! machine tracks its current state and keeps a linear undo/redo history of
//! every state change.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state and ordered state table, loadable from JSON
//! - **StateMachine**: Applies transitions and time-travels through history
//! - **History**: Linear undo/redo stacks; a new transition drops the redo branch
//!
//! # Example
//!
//! ```rust
//! use rewind_fsm::{fsm_config, FsmError, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "start" => "running" },
//!         "running" => { "stop" => "idle" },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("start")?;
//! assert_eq!(machine.state(), "running");
//!
//! // Jumps ignore the transition graph, only the target must exist.
//! machine.change_state("idle")?;
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//!
//! assert!(matches!(
//!     machine.trigger("start"),
//!     Err(FsmError::InvalidEvent { .. })
//! ));
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use config::{Config, ConfigError, StateDefinition, StateTable};
pub use core::TransitionHistory;
pub use error::FsmError;
pub use machine::StateMachine;
