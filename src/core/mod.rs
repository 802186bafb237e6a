//! Core state machine types.
//!
//! This module contains the building blocks shared by the compiler and the
//! runtime machine:
//! - State and trigger identity via the `State` and `Trigger` traits
//! - Guard predicates for transition control
//! - Caller-owned instance memory

mod guard;
mod memory;
mod state;

pub use guard::Guard;
pub use memory::{Memory, Token};
pub use state::{State, Trigger};
