//! Checkpoint and restore for instance state.
//!
//! A checkpoint captures one instance's `Memory` so a long-lived entity can
//! survive a process restart. The transition table itself is never
//! persisted: restore into a machine compiled from the same declarations.

use crate::core::{Memory, State, Token, Trigger};
use crate::machine::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one instance's state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State of the instance at capture time
    pub state: S,
}

impl<S: State> Checkpoint<S> {
    /// Capture the current state of an instance.
    ///
    /// Accepts a bare `Memory` or any domain object that embeds one.
    pub fn capture<K: Token<S>>(token: &K) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: token.memory().state().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State, T: Trigger, M: Token<S>> Machine<S, T, M> {
    /// Rebuild instance memory from a checkpoint.
    ///
    /// This is the only way to turn a stored state back into `Memory`.
    /// Rejects unknown format versions and states this machine has no
    /// transitions from, the same rule `reset_to` applies.
    pub fn restore(&self, checkpoint: &Checkpoint<S>) -> Result<Memory<S>, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !self.is_configured(&checkpoint.state) {
            return Err(CheckpointError::ValidationFailed(format!(
                "state '{}' has no transitions configured",
                checkpoint.state.name()
            )));
        }

        tracing::debug!(
            id = %checkpoint.id,
            state = checkpoint.state.name(),
            "restored instance from checkpoint"
        );
        let mut memory = self.create_memory();
        memory.set(checkpoint.state.clone());
        Ok(memory)
    }
}
