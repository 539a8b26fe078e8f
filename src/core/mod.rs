//! Core building blocks shared by the state machine.
//!
//! - Linear undo/redo history tracking

mod history;

pub use history::TransitionHistory;
