//! Guard predicates for controlling state transitions.
//!
//! A guard gates a single declared transition. A guard that returns `false`
//! means "not applicable right now": firing becomes a silent no-op rather
//! than an error.

use super::state::{State, Trigger};
use std::fmt;

/// Predicate that determines if a declared transition may commit.
///
/// The predicate receives the from-state, the trigger being fired, and the
/// destination state. Only one guard can be attached per transition, so
/// callers compose multiple conditions into a single predicate.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
/// use switchyard::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// trigger_enum! {
///     enum Switch {
///         Flip,
///     }
/// }
///
/// let only_from_off = Guard::new(|from: &Lamp, _: &Switch, _: &Lamp| *from == Lamp::Off);
///
/// assert!(only_from_off.check(&Lamp::Off, &Switch::Flip, &Lamp::On));
/// assert!(!only_from_off.check(&Lamp::On, &Switch::Flip, &Lamp::Off));
/// ```
pub struct Guard<S: State, T: Trigger> {
    predicate: Box<dyn Fn(&S, &T, &S) -> bool + Send + Sync>,
}

impl<S: State, T: Trigger> Guard<S, T> {
    /// Create a guard from a predicate over (from, trigger, to).
    ///
    /// The predicate must be thread-safe (Send + Sync) because a compiled
    /// machine is shared across threads.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &T, &S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows this transition.
    pub fn check(&self, from: &S, trigger: &T, to: &S) -> bool {
        (self.predicate)(from, trigger, to)
    }
}

impl<S: State, T: Trigger> fmt::Debug for Guard<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        Coin,
        Push,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::Coin => "Coin",
                Self::Push => "Push",
            }
        }
    }

    #[test]
    fn guard_sees_all_three_arguments() {
        let guard = Guard::new(|from: &TestState, trigger: &TestTrigger, to: &TestState| {
            *from == TestState::Locked && *trigger == TestTrigger::Coin && *to == TestState::Unlocked
        });

        assert!(guard.check(&TestState::Locked, &TestTrigger::Coin, &TestState::Unlocked));
        assert!(!guard.check(&TestState::Locked, &TestTrigger::Push, &TestState::Unlocked));
        assert!(!guard.check(&TestState::Unlocked, &TestTrigger::Coin, &TestState::Unlocked));
    }

    #[test]
    fn guard_can_read_external_flags() {
        let open = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&open);
        let guard = Guard::new(move |_: &TestState, _: &TestTrigger, _: &TestState| {
            flag.load(Ordering::SeqCst)
        });

        assert!(!guard.check(&TestState::Locked, &TestTrigger::Push, &TestState::Unlocked));
        open.store(true, Ordering::SeqCst);
        assert!(guard.check(&TestState::Locked, &TestTrigger::Push, &TestState::Unlocked));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|from: &TestState, _: &TestTrigger, _: &TestState| {
            *from == TestState::Locked
        });

        let result1 = guard.check(&TestState::Locked, &TestTrigger::Coin, &TestState::Unlocked);
        let result2 = guard.check(&TestState::Locked, &TestTrigger::Coin, &TestState::Unlocked);

        assert_eq!(result1, result2);
    }
}
