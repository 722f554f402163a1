//! Aggregate error types.

use std::fmt::{self, Debug, Display};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Ordered, non-empty collection of the errors recorded by one combined call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinedError<E> {
    errors: Vec<E>,
}

impl<E> CombinedError<E> {
    pub fn new(first: E, rest: impl IntoIterator<Item = E>) -> Self {
        let mut errors = vec![first];
        errors.extend(rest);
        Self { errors }
    }

    /// Returns `None` for an empty list.
    pub fn from_vec(errors: Vec<E>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Errors in the order they were recorded.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    pub fn first(&self) -> &E {
        // non-empty by construction
        &self.errors[0]
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }
}

impl<E> From<NonEmptyVec<E>> for CombinedError<E> {
    fn from(errors: NonEmptyVec<E>) -> Self {
        Self {
            errors: errors.into_vec(),
        }
    }
}

impl<E> IntoIterator for CombinedError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// The joined listing needs `E: Display`, which `#[error]` can only infer for a
// field named directly in the format string.
impl<E: Display> Display for CombinedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors occurred", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl<E: Debug + Display> std::error::Error for CombinedError<E> {}

/// Error payload of a combined call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Combined<E> {
    /// The first recorded error, or the default error
    #[error("{0}")]
    Single(E),

    /// Every recorded error, in call order
    #[error("{0}")]
    Many(CombinedError<E>),
}

impl<E> Combined<E> {
    /// Number of underlying errors.
    pub fn len(&self) -> usize {
        match self {
            Combined::Single(_) => 1,
            Combined::Many(combined) => combined.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_errors(self) -> Vec<E> {
        match self {
            Combined::Single(error) => vec![error],
            Combined::Many(combined) => combined.into_errors(),
        }
    }
}
