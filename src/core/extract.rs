//! Extraction protocol: getting ordinary values back out of an `Outcome`.
//!
//! The `unwrap` family is fatal on the wrong variant and should only be used
//! once the variant is known or a failure is genuinely unrecoverable. The
//! `unpack` family, `q`/`e`, truthiness and iteration never panic.

use super::error::UnwrapError;
use super::outcome::Outcome;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

impl<T, E> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with the error's `Debug` form if the outcome is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with the payload's `Debug` form if the outcome is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => {
                panic!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}")
            }
            Outcome::Err(error) => error,
        }
    }

    /// Returns the success payload, panicking with `message` and the error otherwise.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the error payload, panicking with `message` and the payload otherwise.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => panic!("{message}: {value:?}"),
            Outcome::Err(error) => error,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.map_or(default, |value| value)
    }

    pub fn unwrap_or_else(self, default: impl FnOnce(E) -> T) -> T {
        self.map_or_else(default, |value| value)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Splits into a pair where exactly one side is `Some`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let (value, error) = Outcome::<i32, String>::Ok(10).unpack();
    /// assert_eq!(value, Some(10));
    /// assert!(error.is_none());
    /// ```
    pub fn unpack(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Ok(value) => (Some(value), None),
            Outcome::Err(error) => (None, Some(error)),
        }
    }

    /// Go-style two-value form: the payload or `T::default()`, and the error if any.
    pub fn unpack_or_default(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => (value, None),
            Outcome::Err(error) => (T::default(), Some(error)),
        }
    }

    /// Positional form: the payload or `T::default()`, and whether it was `Ok`.
    pub fn split(self) -> (T, bool)
    where
        T: Default,
    {
        let is_ok = self.is_ok();
        (self.unwrap_or_default(), is_ok)
    }

    /// Shortcut accessor for use inside a capturing body.
    ///
    /// `outcome.q()?` yields the payload, or returns early with the error so
    /// the enclosing decorator can capture or propagate it.
    pub fn q(self) -> Result<T, E> {
        self.into_result()
    }

    /// Shortcut accessor for the error payload; an `Ok` returns early with [`UnwrapError`].
    pub fn e(self) -> Result<E, UnwrapError> {
        match self {
            Outcome::Ok(_) => Err(UnwrapError),
            Outcome::Err(error) => Ok(error),
        }
    }

    /// Returns `true` if the outcome is `Ok` and its payload equals `item`.
    pub fn contains<U>(&self, item: &U) -> bool
    where
        T: PartialEq<U>,
    {
        matches!(self, Outcome::Ok(value) if value == item)
    }

    /// Iterates the success payload by reference; can be called repeatedly.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    /// Iterates the elements of an iterable success payload by reference.
    ///
    /// Flattens exactly one level: an `Ok(vec![1, 2, 3])` yields `1, 2, 3`.
    pub fn iter_flat<'a>(&'a self) -> impl Iterator<Item = <&'a T as IntoIterator>::Item>
    where
        &'a T: IntoIterator,
    {
        self.iter().flatten()
    }

    /// Consumes the outcome and yields the elements of an iterable success payload.
    pub fn into_iter_flat(self) -> impl Iterator<Item = T::Item>
    where
        T: IntoIterator,
    {
        self.into_iter().flatten()
    }
}

impl<T, E> From<&Outcome<T, E>> for bool {
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_ok()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Payloads of different variants are incomparable.
impl<T: PartialOrd, E: PartialOrd> PartialOrd for Outcome<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a.partial_cmp(b),
            (Outcome::Err(a), Outcome::Err(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({value})"),
            Outcome::Err(error) => write!(f, "Err({error})"),
        }
    }
}
