//! Evaluation errors and fire outcomes.

use crate::core::State;
use thiserror::Error;

/// Errors raised while firing a trigger or force-setting state.
///
/// All of these point at a mistake in the transition table or the call
/// site. Instance state is never modified when one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FireError {
    #[error("No transitions configured from state '{state}'")]
    NoTransitionsFromState { state: String },

    #[error("No transition configured from state '{state}' on trigger '{trigger}'")]
    NoTransitionForTrigger { state: String, trigger: String },

    #[error("Trigger '{trigger}' from state '{state}' requires an argument of type {expected}")]
    ArgumentRequired {
        state: String,
        trigger: String,
        expected: &'static str,
    },

    #[error("Trigger '{trigger}' from state '{state}' takes no argument, got {found}")]
    UnexpectedArgument {
        state: String,
        trigger: String,
        found: &'static str,
    },

    #[error("Trigger '{trigger}' from state '{state}' expects an argument of type {expected}, got {found}")]
    ArgumentTypeMismatch {
        state: String,
        trigger: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot reset to state '{state}': it has no transitions configured")]
    UnknownState { state: String },
}

/// Result of a successful `fire`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fired<S: State> {
    /// The transition committed and its callbacks ran
    Transitioned { from: S, to: S },

    /// The guard rejected the transition; nothing changed
    Blocked { state: S },
}

impl<S: State> Fired<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// State the instance is in after the fire.
    pub fn state(&self) -> &S {
        match self {
            Self::Transitioned { to, .. } => to,
            Self::Blocked { state } => state,
        }
    }
}
