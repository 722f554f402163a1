//! Record error types.

use thiserror::Error;

/// Errors that can occur when exporting or importing an outcome record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The slot named by `is_ok` was empty
    #[error("Record marked {expected} but the {expected} slot is empty")]
    MissingPayload { expected: &'static str },

    /// Both slots were populated
    #[error("Record has both an ok and an err payload")]
    ConflictingPayloads,
}
