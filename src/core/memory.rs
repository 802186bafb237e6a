//! Per-instance state owned by the caller.
//!
//! A compiled machine holds no per-instance data. Each tracked entity owns a
//! `Memory` (directly, or embedded in a domain object that implements
//! `Token`), and the machine reads and advances it on `fire`/`reset`.

use super::state::State;
use serde::Serialize;

/// The mutable state record for one tracked entity.
///
/// Only the machine's `fire`/`reset` pathways write it. Callers obtain one
/// from `Machine::create_memory`, or from `Machine::restore` for a stored
/// checkpoint. It serializes for inspection but cannot be deserialized.
///
/// ```compile_fail
/// use switchyard::core::Memory;
/// use switchyard::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Draft,
///     }
/// }
///
/// let memory: Memory<Phase> = serde_json::from_str(r#"{"state":"Draft"}"#).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Memory<S: State> {
    state: S,
}

impl<S: State> Memory<S> {
    pub(crate) fn new(state: S) -> Self {
        Self { state }
    }

    /// Current state of this instance.
    pub fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn set(&mut self, state: S) {
        self.state = state;
    }
}

/// A domain object that carries a `Memory`.
///
/// The machine passes the whole token to actions and callbacks, so actions
/// can update domain fields next to the state.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Memory, Token};
/// use switchyard::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Draft,
///         Published,
///     }
/// }
///
/// struct Article {
///     memory: Memory<Phase>,
///     views: u64,
/// }
///
/// impl Token<Phase> for Article {
///     fn memory(&self) -> &Memory<Phase> {
///         &self.memory
///     }
///
///     fn memory_mut(&mut self) -> &mut Memory<Phase> {
///         &mut self.memory
///     }
/// }
/// ```
pub trait Token<S: State> {
    fn memory(&self) -> &Memory<S>;

    fn memory_mut(&mut self) -> &mut Memory<S>;
}

impl<S: State> Token<S> for Memory<S> {
    fn memory(&self) -> &Memory<S> {
        self
    }

    fn memory_mut(&mut self) -> &mut Memory<S> {
        self
    }
}
