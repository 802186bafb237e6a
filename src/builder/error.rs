//! Configuration errors raised while building a transition table.

use thiserror::Error;

/// Errors that can occur when configuring a `Compiler`.
///
/// Each is raised at the offending call, never deferred to fire time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Transition from state '{state}' on trigger '{trigger}' is already declared")]
    DuplicateTransition { state: String, trigger: String },

    #[error("Cannot attach {what} before any transition is declared. Call .tr(...) first")]
    NoTransitionDeclared { what: &'static str },

    #[error("Transition from state '{state}' on trigger '{trigger}' already has a guard. Combine predicates into one guard")]
    GuardAlreadySet { state: String, trigger: String },

    #[error("Transition from state '{state}' on trigger '{trigger}' already has an action")]
    ActionAlreadySet { state: String, trigger: String },

    #[error("Action for transition from state '{state}' on trigger '{trigger}' must take {expected}, but takes {found}")]
    ActionArgumentMismatch {
        state: String,
        trigger: String,
        expected: String,
        found: String,
    },

    #[error("An any-transition callback is already registered")]
    AnyActionAlreadySet,

    #[error("Initial state not specified. Call .initial(state) before .compile()")]
    MissingInitialState,

    #[error("No transitions defined. Declare at least one with .tr(...)")]
    NoTransitions,
}
