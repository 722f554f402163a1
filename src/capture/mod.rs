//! Capture decorators: turning raised faults and absent returns into outcomes.
//!
//! A wrapped callable signals failure by returning `Err(fault)`, where a
//! [`Fault`] is a type-erased error. The decorator sits at the boundary and
//! inspects the fault:
//!
//! - faults whose kind is in the decorator's [`CaptureSpec`] become the inner
//!   `Outcome::Err`;
//! - every other fault is handed back as the outer `Err`, untouched, so it
//!   keeps propagating with `?`.
//!
//! Capturing is an allow-list, never a universal guard.
//!
//! # Example
//!
//! ```rust
//! use outcome::capture::{safe, Fault};
//! use outcome::Outcome;
//! use std::collections::HashMap;
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("missing key {0:?}")]
//! struct KeyError(String);
//!
//! let get_id = safe::<KeyError>().wrap(|data: HashMap<&str, i32>| -> Result<i32, Fault> {
//!     Ok(*data.get("id").ok_or_else(|| KeyError("id".to_string()))?)
//! });
//!
//! assert_eq!(get_id(HashMap::from([("id", 7)])).unwrap(), Outcome::Ok(7));
//! assert_eq!(
//!     get_id(HashMap::new()).unwrap(),
//!     Outcome::Err(KeyError("id".to_string()))
//! );
//! ```

pub mod decorators;
pub mod macros;
pub mod spec;

pub use decorators::{NilOr, NullAndErrorSafe, NullSafe, Safe};
pub use spec::{CaptureSpec, ErrorKind, FaultKind, Intercept, Only};

use crate::core::Outcome;

/// A raised failure: any error, erased to one type and checked by kind.
pub type Fault = anyhow::Error;

/// Captures faults of exactly one kind; the `Err` payload is that kind.
pub fn safe<K: FaultKind>() -> Safe<Only<K>> {
    Safe::new(Only::new())
}

/// Captures faults of any kind listed in `spec`; the `Err` payload is the fault.
pub fn safe_any(spec: CaptureSpec) -> Safe<CaptureSpec> {
    Safe::new(spec)
}

/// Captures every fault.
pub fn catch_all() -> Safe<CaptureSpec> {
    Safe::new(CaptureSpec::all())
}

/// Converts absent returns to `Nil`; faults pass through untouched.
pub fn null_safe() -> NullSafe {
    NullSafe
}

/// Captures absent returns and faults of one kind.
pub fn null_and_error_safe<K: FaultKind>() -> NullAndErrorSafe<Only<K>> {
    NullAndErrorSafe::new(Only::new()).with_absent()
}

/// Captures absent returns and faults of any kind listed in `spec`.
pub fn null_and_error_safe_any(spec: CaptureSpec) -> NullAndErrorSafe<CaptureSpec> {
    NullAndErrorSafe::from_spec(spec)
}

impl<T> Outcome<T, Fault> {
    /// Returns `true` if this is an `Err` whose fault is of kind `K`.
    pub fn err_is<K: FaultKind>(&self) -> bool {
        matches!(self, Outcome::Err(fault) if fault.is::<K>())
    }

    /// Borrows the fault as kind `K`, if it is one.
    pub fn err_as<K: FaultKind>(&self) -> Option<&K> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(fault) => fault.downcast_ref::<K>(),
        }
    }

    /// Narrows the fault to kind `K`; a fault of another kind is returned as the outer `Err`.
    pub fn downcast_err<K: FaultKind>(self) -> Result<Outcome<T, K>, Fault> {
        match self {
            Outcome::Ok(value) => Ok(Outcome::Ok(value)),
            Outcome::Err(fault) => fault.downcast::<K>().map(Outcome::Err),
        }
    }
}
