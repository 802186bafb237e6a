//! Compiled transition entries.

use crate::builder::ConfigError;
use crate::core::{Guard, State, Trigger};
use crate::machine::error::FireError;
use std::any::{Any, TypeId};
use std::fmt;

/// Action run after a no-argument transition commits.
pub type Action<S, T, M> = Box<dyn Fn(&S, &T, &S, &mut M) + Send + Sync>;

/// Action run after an argument transition commits. The argument has
/// already been matched against the transition's `ArgType`.
pub(crate) type ArgAction<S, T, M> = Box<dyn Fn(&S, &T, &S, &mut M, &dyn Any) + Send + Sync>;

/// Machine-wide callback run after every committed transition.
pub type AnyAction<S, T, M> = Box<dyn Fn(&S, &T, &S, &mut M) + Send + Sync>;

/// Type tag for the payload a transition requires at fire time.
#[derive(Clone, Copy)]
pub struct ArgType {
    id: TypeId,
    name: &'static str,
}

impl ArgType {
    pub fn of<A: Any>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: std::any::type_name::<A>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ArgType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArgType {}

impl fmt::Debug for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The two transition kinds: with or without a fire-time argument.
pub(crate) enum Kind<S, T, M> {
    Plain {
        action: Option<Action<S, T, M>>,
    },
    WithArg {
        arg: ArgType,
        action: Option<ArgAction<S, T, M>>,
    },
}

/// One entry of the transition table.
pub struct Transition<S: State, T: Trigger, M> {
    pub from: S,
    pub trigger: T,
    pub to: S,
    pub(crate) guard: Option<Guard<S, T>>,
    pub(crate) kind: Kind<S, T, M>,
}

impl<S: State, T: Trigger, M> Transition<S, T, M> {
    pub(crate) fn new(from: S, trigger: T, to: S, arg: Option<ArgType>) -> Self {
        let kind = match arg {
            None => Kind::Plain { action: None },
            Some(arg) => Kind::WithArg { arg, action: None },
        };
        Self {
            from,
            trigger,
            to,
            guard: None,
            kind,
        }
    }

    /// Payload type this transition requires, if any.
    pub fn arg_type(&self) -> Option<ArgType> {
        match &self.kind {
            Kind::Plain { .. } => None,
            Kind::WithArg { arg, .. } => Some(*arg),
        }
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_action(&self) -> bool {
        match &self.kind {
            Kind::Plain { action } => action.is_some(),
            Kind::WithArg { action, .. } => action.is_some(),
        }
    }

    /// Check the guard, if present.
    pub fn permits(&self) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|g| g.check(&self.from, &self.trigger, &self.to))
    }

    pub(crate) fn set_guard(&mut self, guard: Guard<S, T>) -> Result<(), ConfigError> {
        if self.guard.is_some() {
            return Err(ConfigError::GuardAlreadySet {
                state: self.from.name().to_string(),
                trigger: self.trigger.name().to_string(),
            });
        }
        self.guard = Some(guard);
        Ok(())
    }

    pub(crate) fn set_action(&mut self, action: Action<S, T, M>) -> Result<(), ConfigError> {
        if let Some(expected) = self.arg_type() {
            return Err(self.argument_mismatch(expected.name(), "no argument"));
        }
        if self.has_action() {
            return Err(self.action_already_set());
        }
        if let Kind::Plain { action: slot } = &mut self.kind {
            *slot = Some(action);
        }
        Ok(())
    }

    pub(crate) fn set_arg_action(
        &mut self,
        supplied: ArgType,
        action: ArgAction<S, T, M>,
    ) -> Result<(), ConfigError> {
        match self.arg_type() {
            None => return Err(self.argument_mismatch("no argument", supplied.name())),
            Some(expected) if expected != supplied => {
                return Err(self.argument_mismatch(expected.name(), supplied.name()))
            }
            Some(_) => {}
        }
        if self.has_action() {
            return Err(self.action_already_set());
        }
        if let Kind::WithArg { action: slot, .. } = &mut self.kind {
            *slot = Some(action);
        }
        Ok(())
    }

    fn argument_mismatch(&self, expected: &str, found: &str) -> ConfigError {
        ConfigError::ActionArgumentMismatch {
            state: self.from.name().to_string(),
            trigger: self.trigger.name().to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    fn action_already_set(&self) -> ConfigError {
        ConfigError::ActionAlreadySet {
            state: self.from.name().to_string(),
            trigger: self.trigger.name().to_string(),
        }
    }

    /// Match the fire-time argument (if any) against the declared payload tag.
    pub(crate) fn check_argument(&self, supplied: Option<ArgType>) -> Result<(), FireError> {
        match (&self.kind, supplied) {
            (Kind::Plain { .. }, None) => Ok(()),
            (Kind::Plain { .. }, Some(found)) => Err(FireError::UnexpectedArgument {
                state: self.from.name().to_string(),
                trigger: self.trigger.name().to_string(),
                found: found.name(),
            }),
            (Kind::WithArg { arg, .. }, None) => Err(FireError::ArgumentRequired {
                state: self.from.name().to_string(),
                trigger: self.trigger.name().to_string(),
                expected: arg.name(),
            }),
            (Kind::WithArg { arg, .. }, Some(found)) if *arg != found => {
                Err(FireError::ArgumentTypeMismatch {
                    state: self.from.name().to_string(),
                    trigger: self.trigger.name().to_string(),
                    expected: arg.name(),
                    found: found.name(),
                })
            }
            (Kind::WithArg { .. }, Some(_)) => Ok(()),
        }
    }

    /// Run the attached action. Call only after `check_argument` succeeded.
    pub(crate) fn run_action(&self, token: &mut M, arg: Option<&dyn Any>) {
        match (&self.kind, arg) {
            (Kind::Plain { action: Some(action) }, _) => {
                action(&self.from, &self.trigger, &self.to, token)
            }
            (Kind::WithArg { action: Some(action), .. }, Some(arg)) => {
                action(&self.from, &self.trigger, &self.to, token, arg)
            }
            _ => {}
        }
    }
}

impl<S: State, T: Trigger, M> fmt::Debug for Transition<S, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("trigger", &self.trigger)
            .field("to", &self.to)
            .field("arg", &self.arg_type())
            .field("guard", &self.has_guard())
            .field("action", &self.has_action())
            .finish()
    }
}
