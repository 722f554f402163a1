//! Extraction error types.

use thiserror::Error;

/// Returned by the `e` shortcut when the outcome held a success payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unwrapped Err while in Ok state")]
pub struct UnwrapError;
