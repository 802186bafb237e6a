//! Switchyard: a compile-once, fire-many finite state machine
//!
//! Switchyard separates declaring a transition table from evaluating it. A
//! `Compiler` validates every declaration eagerly and is consumed into an
//! immutable `Machine`. The machine holds no per-instance data: each tracked
//! entity owns its own `Memory`, so one machine can be shared by reference
//! across any number of independent instances and threads.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: Finite, hashable identifiers, usually enums
//! - **Transition**: A `(state, trigger) -> state` rule with an optional
//!   guard, action, and fire-time argument type
//! - **Guard**: Predicate that turns a fire into a silent no-op when false
//! - **Memory / Token**: Caller-owned instance state the machine advances
//!
//! # Example
//!
//! ```rust
//! use switchyard::{state_enum, trigger_enum, Compiler, FireError};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! trigger_enum! {
//!     enum DoorEvent {
//!         Open,
//!         Close,
//!     }
//! }
//!
//! let mut compiler = Compiler::new();
//! compiler.initial(Door::Closed);
//! compiler.tr(Door::Closed, DoorEvent::Open, Door::Open)?;
//! compiler.tr(Door::Open, DoorEvent::Close, Door::Closed)?;
//! let machine = compiler.compile()?;
//!
//! let mut door = machine.create_memory();
//! machine.fire(DoorEvent::Open, &mut door)?;
//! assert_eq!(door.state(), &Door::Open);
//!
//! machine.fire(DoorEvent::Close, &mut door)?;
//! assert!(matches!(
//!     machine.fire(DoorEvent::Close, &mut door),
//!     Err(FireError::NoTransitionForTrigger { .. })
//! ));
//! assert_eq!(door.state(), &Door::Closed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{Compiler, ConfigError};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Guard, Memory, State, Token, Trigger};
pub use machine::{ArgType, FireError, Fired, Machine};
