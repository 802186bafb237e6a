//! Compiler that accumulates a transition table and freezes it into a machine.

use crate::builder::error::ConfigError;
use crate::builder::transition::{ArgTransitionConfig, TransitionConfig};
use crate::core::{Guard, Memory, State, Token, Trigger};
use crate::machine::transition::{AnyAction, ArgType, Transition};
use crate::machine::{Machine, Table};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Builder for a transition table.
///
/// `guard` and `on` always apply to the most recently declared transition.
/// `compile` consumes the compiler, so one compiler produces exactly one
/// machine.
pub struct Compiler<S: State, T: Trigger, M = Memory<S>> {
    initial: Option<S>,
    table: Table<S, T, M>,
    last: Option<(S, T)>,
    on_any: Option<AnyAction<S, T, M>>,
}

impl<S: State, T: Trigger, M: Token<S>> Compiler<S, T, M> {
    /// Create an empty compiler.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: HashMap::new(),
            last: None,
            on_any: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(&mut self, state: S) -> &mut Self {
        self.initial = Some(state);
        self
    }

    /// Declare a transition that takes no argument.
    ///
    /// Fails if `(from, trigger)` is already declared. The returned handle
    /// attaches a guard or action to this transition.
    pub fn tr(&mut self, from: S, trigger: T, to: S) -> Result<TransitionConfig<'_, S, T, M>, ConfigError> {
        self.declare(from, trigger, to, None)?;
        Ok(TransitionConfig::new(self))
    }

    /// Declare a transition that requires an argument of type `A` when fired.
    pub fn tr_with<A: Any>(
        &mut self,
        from: S,
        trigger: T,
        to: S,
    ) -> Result<ArgTransitionConfig<'_, S, T, M, A>, ConfigError> {
        self.declare(from, trigger, to, Some(ArgType::of::<A>()))?;
        Ok(ArgTransitionConfig::new(self))
    }

    fn declare(&mut self, from: S, trigger: T, to: S, arg: Option<ArgType>) -> Result<(), ConfigError> {
        let row = self.table.entry(from.clone()).or_default();
        if row.contains_key(&trigger) {
            return Err(ConfigError::DuplicateTransition {
                state: from.name().to_string(),
                trigger: trigger.name().to_string(),
            });
        }
        row.insert(
            trigger.clone(),
            Transition::new(from.clone(), trigger.clone(), to, arg),
        );
        self.last = Some((from, trigger));
        Ok(())
    }

    fn last_mut(&mut self, what: &'static str) -> Result<&mut Transition<S, T, M>, ConfigError> {
        let (state, trigger) = self
            .last
            .as_ref()
            .ok_or(ConfigError::NoTransitionDeclared { what })?;
        self.table
            .get_mut(state)
            .and_then(|row| row.get_mut(trigger))
            .ok_or(ConfigError::NoTransitionDeclared { what })
    }

    /// Attach a guard to the most recently declared transition.
    pub fn guard<F>(&mut self, predicate: F) -> Result<&mut Self, ConfigError>
    where
        F: Fn(&S, &T, &S) -> bool + Send + Sync + 'static,
    {
        self.last_mut("a guard")?.set_guard(Guard::new(predicate))?;
        Ok(self)
    }

    /// Attach an action to the most recently declared transition.
    ///
    /// The transition must have been declared with `tr`; use `on_with` for
    /// transitions declared with `tr_with`.
    pub fn on<F>(&mut self, action: F) -> Result<&mut Self, ConfigError>
    where
        F: Fn(&S, &T, &S, &mut M) + Send + Sync + 'static,
    {
        self.last_mut("an action")?.set_action(Box::new(action))?;
        Ok(self)
    }

    /// Attach an action taking an argument of type `A` to the most recently
    /// declared transition, which must have been declared with `tr_with::<A>`.
    pub fn on_with<A, F>(&mut self, action: F) -> Result<&mut Self, ConfigError>
    where
        A: Any,
        F: Fn(&S, &T, &S, &mut M, &A) + Send + Sync + 'static,
    {
        // `fire_with` compares the argument's `ArgType` against this transition's
        // before any action runs, so the downcast below always succeeds.
        let erased = move |from: &S, trigger: &T, to: &S, token: &mut M, arg: &dyn Any| {
            if let Some(arg) = arg.downcast_ref::<A>() {
                action(from, trigger, to, token, arg);
            }
        };
        self.last_mut("an action")?
            .set_arg_action(ArgType::of::<A>(), Box::new(erased))?;
        Ok(self)
    }

    /// Register the machine-wide callback run after every committed transition.
    ///
    /// Only one is allowed; a second registration fails.
    pub fn on_any<F>(&mut self, action: F) -> Result<&mut Self, ConfigError>
    where
        F: Fn(&S, &T, &S, &mut M) + Send + Sync + 'static,
    {
        if self.on_any.is_some() {
            return Err(ConfigError::AnyActionAlreadySet);
        }
        self.on_any = Some(Box::new(action));
        Ok(self)
    }

    /// Freeze the table into a machine.
    pub fn compile(self) -> Result<Machine<S, T, M>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        if self.table.is_empty() {
            return Err(ConfigError::NoTransitions);
        }

        tracing::debug!(
            initial = initial.name(),
            states = self.table.len(),
            transitions = self.table.values().map(HashMap::len).sum::<usize>(),
            "compiled transition table"
        );
        Ok(Machine::new(initial, self.table, self.on_any))
    }
}

impl<S: State, T: Trigger, M: Token<S>> Default for Compiler<S, T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger, M> fmt::Debug for Compiler<S, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("initial", &self.initial)
            .field("table", &self.table)
            .field("last", &self.last)
            .field("on_any", &self.on_any.is_some())
            .finish()
    }
}
