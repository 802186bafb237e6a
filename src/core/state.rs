//! Identity traits for states and triggers.
//!
//! States and triggers are finite, equality-comparable identifiers. In
//! practice they are plain enums; the `state_enum!` and `trigger_enum!`
//! macros generate these impls for you.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is one value from the finite domain an instance can occupy.
/// States key the transition table, so they must be hashable. No ordering
/// is required.
///
/// # Required Traits
///
/// - `Clone`: States are copied into instance memory and callbacks
/// - `Eq` + `Hash`: States key the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Instance state can be checkpointed
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for the events that request a transition.
///
/// Triggers have the same identity requirements as states: they form the
/// second key of the transition table.
pub trait Trigger:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}
