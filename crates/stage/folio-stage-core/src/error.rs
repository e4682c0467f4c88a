//! Error types for the stage core

use serde::{Deserialize, Serialize};

/// Error type for stage sequencing operations.
///
/// The sequencer itself has no domain failures; errors only arise at the
/// boundaries (time construction, serialization).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StageError {
    /// Invalid time value (negative or non-finite milliseconds)
    #[error("Invalid time value: {millis} ms")]
    InvalidTime { millis: f64 },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
