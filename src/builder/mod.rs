//! Builder API for declaring transition tables.
//!
//! A `Compiler` collects transitions, guards, and actions, validates each
//! call eagerly, and is consumed by `compile` to produce an immutable
//! `Machine`.

pub mod compiler;
pub mod error;
pub mod macros;
pub mod transition;

pub use compiler::Compiler;
pub use error::ConfigError;
pub use transition::{ArgTransitionConfig, TransitionConfig};
