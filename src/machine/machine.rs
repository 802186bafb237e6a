//! Runtime machine that evaluates a compiled transition table.

use crate::core::{Memory, State, Token, Trigger};
use crate::machine::error::{FireError, Fired};
use crate::machine::transition::{AnyAction, ArgType, Transition};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

pub(crate) type Table<S, T, M> = HashMap<S, HashMap<T, Transition<S, T, M>>>;

/// Immutable, shareable evaluator for a compiled transition table.
///
/// A machine holds no per-instance data. Create any number of instances
/// with `create_memory` and fire triggers against each independently. The
/// machine is `Send + Sync`; wrap it in an `Arc` to share it across threads.
///
/// `M` is the token type passed to actions. It defaults to `Memory<S>`;
/// use a domain type implementing `Token<S>` to let actions touch domain
/// fields.
pub struct Machine<S: State, T: Trigger, M = Memory<S>> {
    initial: S,
    table: Table<S, T, M>,
    on_any: Option<AnyAction<S, T, M>>,
}

impl<S: State, T: Trigger, M: Token<S>> Machine<S, T, M> {
    pub(crate) fn new(initial: S, table: Table<S, T, M>, on_any: Option<AnyAction<S, T, M>>) -> Self {
        Self {
            initial,
            table,
            on_any,
        }
    }

    /// The state every new instance starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Allocate fresh instance state set to the initial state.
    ///
    /// No guards or actions run.
    pub fn create_memory(&self) -> Memory<S> {
        Memory::new(self.initial.clone())
    }

    /// Current state of an instance.
    pub fn state_of<'a>(&self, token: &'a M) -> &'a S {
        token.memory().state()
    }

    /// Fire a trigger that takes no argument.
    ///
    /// Returns `Fired::Blocked` (not an error) when the transition's guard
    /// rejects it. On commit the state moves first, then the transition's
    /// action runs, then the machine-wide callback.
    pub fn fire(&self, trigger: T, token: &mut M) -> Result<Fired<S>, FireError> {
        self.dispatch(trigger, token, None)
    }

    /// Fire a trigger whose transition was declared with an argument of type `A`.
    pub fn fire_with<A: Any>(&self, trigger: T, token: &mut M, arg: A) -> Result<Fired<S>, FireError> {
        self.dispatch(trigger, token, Some((&arg as &dyn Any, ArgType::of::<A>())))
    }

    fn dispatch(
        &self,
        trigger: T,
        token: &mut M,
        arg: Option<(&dyn Any, ArgType)>,
    ) -> Result<Fired<S>, FireError> {
        let from = token.memory().state().clone();
        let transition = self.lookup(&from, &trigger)?;
        transition.check_argument(arg.map(|(_, ty)| ty))?;

        if !transition.permits() {
            tracing::trace!(
                state = from.name(),
                trigger = trigger.name(),
                "guard rejected transition"
            );
            return Ok(Fired::Blocked { state: from });
        }

        let to = transition.to.clone();
        token.memory_mut().set(to.clone());
        transition.run_action(token, arg.map(|(value, _)| value));
        if let Some(on_any) = &self.on_any {
            on_any(&from, &trigger, &to, token);
        }

        tracing::debug!(
            from = from.name(),
            trigger = trigger.name(),
            to = to.name(),
            "transition committed"
        );
        Ok(Fired::Transitioned { from, to })
    }

    fn lookup(&self, state: &S, trigger: &T) -> Result<&Transition<S, T, M>, FireError> {
        let row = self
            .table
            .get(state)
            .ok_or_else(|| FireError::NoTransitionsFromState {
                state: state.name().to_string(),
            })?;
        row.get(trigger)
            .ok_or_else(|| FireError::NoTransitionForTrigger {
                state: state.name().to_string(),
                trigger: trigger.name().to_string(),
            })
    }

    /// Force an instance back to the initial state.
    ///
    /// Guards, actions, and the machine-wide callback are not run.
    pub fn reset(&self, token: &mut M) {
        tracing::debug!(to = self.initial.name(), "reset to initial state");
        token.memory_mut().set(self.initial.clone());
    }

    /// Force an instance into `state` without running any callbacks.
    ///
    /// Fails if `state` has no transitions configured, since an instance
    /// parked there could never leave.
    pub fn reset_to(&self, state: S, token: &mut M) -> Result<(), FireError> {
        if !self.is_configured(&state) {
            return Err(FireError::UnknownState {
                state: state.name().to_string(),
            });
        }
        tracing::debug!(to = state.name(), "reset to explicit state");
        token.memory_mut().set(state);
        Ok(())
    }

    /// Whether `state` has at least one outgoing transition.
    pub fn is_configured(&self, state: &S) -> bool {
        self.table.contains_key(state)
    }

    /// Whether firing `trigger` now would commit a transition.
    ///
    /// Checks that the transition is declared and its guard passes. The
    /// argument type is not considered.
    pub fn can_fire(&self, trigger: &T, token: &M) -> bool {
        self.lookup(token.memory().state(), trigger)
            .map(|transition| transition.permits())
            .unwrap_or(false)
    }

    /// Triggers declared from `state`, in no particular order.
    pub fn permitted_triggers(&self, state: &S) -> Vec<&T> {
        self.table
            .get(state)
            .map(|row| row.keys().collect())
            .unwrap_or_default()
    }

    /// The declared transition for `(state, trigger)`, if any.
    pub fn transition(&self, state: &S, trigger: &T) -> Option<&Transition<S, T, M>> {
        self.table.get(state).and_then(|row| row.get(trigger))
    }

    /// States with at least one outgoing transition, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.table.keys()
    }

    pub fn transition_count(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }
}

impl<S: State, T: Trigger, M> fmt::Debug for Machine<S, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("initial", &self.initial)
            .field("table", &self.table)
            .field("on_any", &self.on_any.is_some())
            .finish()
    }
}
