//! Runtime evaluation of a compiled transition table.
//!
//! A `Machine` is read-only after compilation. All mutable data lives in
//! caller-owned `Memory` values, so one machine serves any number of
//! independent instances.

mod error;
#[allow(clippy::module_inception)]
mod machine;
pub(crate) mod transition;

pub use error::{FireError, Fired};
pub(crate) use machine::Table;
pub use machine::Machine;
pub use transition::{Action, AnyAction, ArgType, Transition};
