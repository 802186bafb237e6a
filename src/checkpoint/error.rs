//! Errors raised while saving or restoring an instance checkpoint.

use thiserror::Error;

/// Failure to encode, decode, or restore a `Checkpoint`.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint could not be encoded as JSON or bincode.
    #[error("could not encode instance checkpoint: {0}")]
    SerializationFailed(String),

    /// Stored bytes or text are not a readable checkpoint.
    #[error("could not decode instance checkpoint: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version.
    #[error("instance checkpoint has format version {found}; this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored state cannot be resumed on the restoring machine.
    #[error("cannot restore instance: {0}")]
    ValidationFailed(String),
}
