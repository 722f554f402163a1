//! The outcome type and its extraction protocol.
//!
//! This module contains the pure core of the crate:
//! - `Outcome`, the Ok/Err sum type, and its transformations
//! - `Nil` and `Opt`, the absent-value form
//! - The extraction protocol: unwrapping, unpacking, iteration, shortcuts
//!
//! Nothing in this module performs I/O or holds shared state.

mod error;
mod extract;
mod nil;
mod outcome;

pub use error::UnwrapError;
pub use nil::{Nil, Opt};
pub use outcome::Outcome;
