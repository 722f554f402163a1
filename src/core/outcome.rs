//! The `Outcome` sum type and its transformation protocol.
//!
//! An `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. Every transformation
//! consumes the outcome and returns a new one; nothing is mutated in place.

use serde::{Deserialize, Serialize};

/// The result of an operation that may fail.
///
/// Exactly one payload is ever present: the success payload in `Ok`, or the
/// alternate payload in `Err`. The variant is fixed at construction.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Ok(20);
/// let doubled = parsed.map(|n| n * 2);
///
/// match doubled {
///     Outcome::Ok(n) => assert_eq!(n, 40),
///     Outcome::Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation succeeded with a payload.
    Ok(T),
    /// The operation failed with an alternate payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is `Ok` and the payload satisfies `predicate`.
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Ok(value) => predicate(value),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is `Err` and the error satisfies `predicate`.
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => predicate(error),
        }
    }

    /// Converts to an `Option` of the success payload, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Converts to an `Option` of the error payload, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Borrows both payloads.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows both payloads.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success payload, leaving an `Err` untouched.
    ///
    /// `f` is never invoked on an `Err`. If `f` can itself fail, have it
    /// return an `Outcome` and use [`Outcome::and_then`] instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::Ok(10);
    /// assert_eq!(ok.map(|x| x + 5), Outcome::Ok(15));
    ///
    /// let err: Outcome<i32, String> = Outcome::Err("foo".to_string());
    /// assert_eq!(err.map(|x| x + 5), Outcome::Err("foo".to_string()));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the alternate payload, leaving an `Ok` untouched.
    pub fn map_alt<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Alias of [`Outcome::map_alt`].
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        self.map_alt(f)
    }

    /// Converts the error payload with `From`.
    pub fn err_into<F: From<E>>(self) -> Outcome<T, F> {
        self.map_alt(F::from)
    }

    /// Applies `f` to the whole container rather than to a payload.
    ///
    /// Useful for terminating a chain with an extractor or an inspection that
    /// should not branch on the variant itself.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::Ok(3);
    /// let described = ok.map(|x| x * 3).apply(|o| format!("{o:?}"));
    /// assert_eq!(described, "Ok(9)");
    /// ```
    pub fn apply<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }

    /// Like [`Outcome::apply`], but lends the container instead of moving it.
    pub fn apply_ref<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        f(self)
    }

    /// Chains a fallible continuation on the success payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery on the error payload.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => f(error),
        }
    }

    /// Returns `other` if `Ok`, otherwise keeps the error.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `other` if `Err`, otherwise keeps the success.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// Replaces the success payload, if any.
    pub fn replace<U>(self, new: U) -> Outcome<U, E> {
        self.and(Outcome::Ok(new))
    }

    /// Replaces the error payload, if any.
    pub fn replace_err<F>(self, new: F) -> Outcome<T, F> {
        self.or(Outcome::Err(new))
    }

    /// Runs `f` on the success payload and returns the outcome unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` on the error payload and returns the outcome unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Outcome::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Maps the success payload or falls back to `default` on `Err`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => default,
        }
    }

    /// Maps the success payload with `f` or the error with `default`.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => default(error),
        }
    }

    /// Collapses both branches into a single value.
    pub fn fold<U>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> U) -> U {
        self.map_or_else(on_err, on_ok)
    }

    /// Converts into a standard library `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
