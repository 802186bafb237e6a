//! Handles scoped to the transition just declared.

use crate::builder::compiler::Compiler;
use crate::builder::error::ConfigError;
use crate::core::{State, Token, Trigger};
use std::any::Any;
use std::marker::PhantomData;

/// Handle returned by `Compiler::tr`.
///
/// `guard` and `on` attach to the transition that produced this handle,
/// and can be chained.
pub struct TransitionConfig<'c, S: State, T: Trigger, M> {
    compiler: &'c mut Compiler<S, T, M>,
}

impl<'c, S: State, T: Trigger, M: Token<S>> TransitionConfig<'c, S, T, M> {
    pub(crate) fn new(compiler: &'c mut Compiler<S, T, M>) -> Self {
        Self { compiler }
    }

    /// Attach a guard (at most one per transition).
    pub fn guard<F>(self, predicate: F) -> Result<Self, ConfigError>
    where
        F: Fn(&S, &T, &S) -> bool + Send + Sync + 'static,
    {
        self.compiler.guard(predicate)?;
        Ok(self)
    }

    /// Attach an action (at most one per transition).
    pub fn on<F>(self, action: F) -> Result<Self, ConfigError>
    where
        F: Fn(&S, &T, &S, &mut M) + Send + Sync + 'static,
    {
        self.compiler.on(action)?;
        Ok(self)
    }
}

/// Handle returned by `Compiler::tr_with::<A>`.
///
/// Its `on` only accepts actions taking `&A`, so an action with the wrong
/// argument type does not compile.
pub struct ArgTransitionConfig<'c, S: State, T: Trigger, M, A> {
    compiler: &'c mut Compiler<S, T, M>,
    _arg: PhantomData<fn(A)>,
}

impl<'c, S: State, T: Trigger, M: Token<S>, A: Any> ArgTransitionConfig<'c, S, T, M, A> {
    pub(crate) fn new(compiler: &'c mut Compiler<S, T, M>) -> Self {
        Self {
            compiler,
            _arg: PhantomData,
        }
    }

    pub fn guard<F>(self, predicate: F) -> Result<Self, ConfigError>
    where
        F: Fn(&S, &T, &S) -> bool + Send + Sync + 'static,
    {
        self.compiler.guard(predicate)?;
        Ok(self)
    }

    pub fn on<F>(self, action: F) -> Result<Self, ConfigError>
    where
        F: Fn(&S, &T, &S, &mut M, &A) + Send + Sync + 'static,
    {
        self.compiler.on_with::<A, F>(action)?;
        Ok(self)
    }
}
