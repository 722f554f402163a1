//! Outcome: an explicit success-or-failure value for code that raises.
//!
//! Functions that can fail usually return a value or raise. `outcome` makes
//! the failure part of the return value instead, and gives you decorators to
//! move existing code over without rewriting it.
//!
//! # Core Concepts
//!
//! - **Outcome**: `Ok(value)` or `Err(error)`, immutable and transformable
//!   without being unpacked
//! - **Capture**: decorators that turn raised faults of chosen kinds (and
//!   absent returns) into `Err`, while every other fault keeps propagating
//! - **Shortcut propagation**: `outcome.q()?` returns early with the error
//!   from inside a fallible body
//! - **Combining**: run several fallible sub-calls and merge their failures,
//!   either fail-fast or aggregated
//!
//! # Example
//!
//! ```rust
//! use outcome::capture::{safe, Fault};
//! use outcome::Outcome;
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("cannot divide {0} by zero")]
//! struct DivByZero(i32);
//!
//! let divide = safe::<DivByZero>().wrap(|(a, b): (i32, i32)| -> Result<i32, Fault> {
//!     if b == 0 {
//!         return Err(DivByZero(a).into());
//!     }
//!     Ok(a / b)
//! });
//!
//! let halved = divide((10, 2)).unwrap().map(|n| n + 1);
//! assert_eq!(halved, Outcome::Ok(6));
//!
//! let failed = divide((10, 0)).unwrap();
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

pub mod capture;
pub mod combine;
pub mod core;
pub mod record;

// Re-export commonly used types
pub use capture::{
    catch_all, null_and_error_safe, null_and_error_safe_any, null_safe, safe, safe_any,
    CaptureSpec, Fault, NilOr,
};
pub use combine::{combine_errors, Combined, CombinedError};
pub use core::{Nil, Opt, Outcome, UnwrapError};
pub use record::{OutcomeRecord, RecordError};
