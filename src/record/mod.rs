//! Flat record form of an outcome, for export and import.
//!
//! An `OutcomeRecord` spells the outcome out as `{ ok, err, is_ok }` so it can
//! be handed to systems that do not understand tagged enums. Importing a
//! record validates that the slot named by `is_ok` is the only one populated.
//! Encoding produces in-memory strings or bytes; storing them is up to the caller.
//!
//! In JSON the empty slot is left out rather than written as `null`, since a
//! unit or `None` payload is itself written as `null`.

use crate::core::Outcome;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub mod error;

pub use error::RecordError;

/// Flat, serializable form of an [`Outcome`].
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::Ok(10);
/// let record = ok.to_record();
/// assert_eq!(record.ok, Some(10));
/// assert!(record.is_ok);
///
/// let back = Outcome::from_record(record).unwrap();
/// assert_eq!(back, Outcome::Ok(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord<T, E> {
    /// The success payload, when `is_ok`
    pub ok: Option<T>,

    /// The error payload, when not `is_ok`
    pub err: Option<E>,

    /// Which slot is populated
    pub is_ok: bool,
}

/// JSON layout of a record. A key that is present marks its slot as
/// populated, even when the payload is `null`.
#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"))]
struct JsonRecord<T, E> {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    ok: Option<T>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    err: Option<E>,

    is_ok: bool,
}

fn present<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    V::deserialize(deserializer).map(Some)
}

impl<T, E> From<OutcomeRecord<T, E>> for JsonRecord<T, E> {
    fn from(record: OutcomeRecord<T, E>) -> Self {
        Self {
            ok: record.ok,
            err: record.err,
            is_ok: record.is_ok,
        }
    }
}

impl<T, E> From<JsonRecord<T, E>> for OutcomeRecord<T, E> {
    fn from(record: JsonRecord<T, E>) -> Self {
        Self {
            ok: record.ok,
            err: record.err,
            is_ok: record.is_ok,
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Consumes the outcome into its record form.
    pub fn into_record(self) -> OutcomeRecord<T, E> {
        let is_ok = self.is_ok();
        let (ok, err) = self.unpack();
        OutcomeRecord { ok, err, is_ok }
    }

    /// Clones the outcome into its record form.
    pub fn to_record(&self) -> OutcomeRecord<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.clone().into_record()
    }

    /// Rebuilds an outcome from a record, rejecting records that break the
    /// one-slot invariant.
    pub fn from_record(record: OutcomeRecord<T, E>) -> Result<Self, RecordError> {
        match (record.is_ok, record.ok, record.err) {
            (_, Some(_), Some(_)) => Err(RecordError::ConflictingPayloads),
            (true, Some(value), None) => Ok(Outcome::Ok(value)),
            (false, None, Some(error)) => Ok(Outcome::Err(error)),
            (true, _, _) => Err(RecordError::MissingPayload { expected: "ok" }),
            (false, _, _) => Err(RecordError::MissingPayload { expected: "err" }),
        }
    }

    /// Encodes the record form as JSON.
    pub fn to_json(&self) -> Result<String, RecordError>
    where
        T: Serialize,
        E: Serialize,
    {
        serde_json::to_string(&JsonRecord::from(self.as_ref().into_record()))
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Decodes and validates a JSON record.
    pub fn from_json(json: &str) -> Result<Self, RecordError>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        let record: JsonRecord<T, E> = serde_json::from_str(json)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        Self::from_record(record.into())
    }

    /// Encodes the record form with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError>
    where
        T: Serialize,
        E: Serialize,
    {
        bincode::serialize(&self.as_ref().into_record())
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Decodes and validates a bincode record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        let record: OutcomeRecord<T, E> = bincode::deserialize(bytes)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        Self::from_record(record)
    }
}
