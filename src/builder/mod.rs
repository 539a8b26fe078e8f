//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the `fsm_config!` macro as
//! alternatives to loading a [`Config`](crate::config::Config) from JSON.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
