//! Capture decorators.
//!
//! Each decorator either runs a zero-argument callable once (`call`) or wraps
//! a one-argument callable into a new callable with the same argument
//! (`wrap`); several arguments travel as a tuple. The outer `Result` of a
//! decorated call is the propagation channel: a fault outside the capture set
//! comes back as the outer `Err` exactly as it was raised.

use super::spec::{CaptureSpec, Intercept};
use super::Fault;
use crate::core::{Nil, Opt, Outcome};
use std::fmt::{self, Display};
use tracing::{debug, trace};

/// Error payload of [`NullAndErrorSafe`]: an absent return or a captured fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NilOr<E> {
    /// The callable returned nothing
    Nil(Nil),

    /// The callable raised a fault in the capture set
    Caught(E),
}

impl<E> NilOr<E> {
    pub fn is_nil(&self) -> bool {
        matches!(self, NilOr::Nil(_))
    }

    pub fn caught(self) -> Option<E> {
        match self {
            NilOr::Nil(_) => None,
            NilOr::Caught(error) => Some(error),
        }
    }
}

impl<E: Display> Display for NilOr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NilOr::Nil(nil) => write!(f, "{nil}"),
            NilOr::Caught(error) => write!(f, "{error}"),
        }
    }
}

/// Turns faults in its capture set into `Err`, and lets every other fault through.
#[derive(Clone, Debug)]
pub struct Safe<C> {
    catch: C,
}

impl<C: Intercept> Safe<C> {
    pub fn new(catch: C) -> Self {
        Self { catch }
    }

    pub fn spec(&self) -> &C {
        &self.catch
    }

    /// Runs `f` once inside the capture boundary.
    pub fn call<T>(
        &self,
        f: impl FnOnce() -> Result<T, Fault>,
    ) -> Result<Outcome<T, C::Caught>, Fault> {
        match f() {
            Ok(value) => Ok(Outcome::Ok(value)),
            Err(fault) => self.capture(fault).map(Outcome::Err),
        }
    }

    /// Wraps `f` so every call goes through the capture boundary.
    pub fn wrap<A, T, F>(self, f: F) -> impl Fn(A) -> Result<Outcome<T, C::Caught>, Fault>
    where
        F: Fn(A) -> Result<T, Fault>,
    {
        move |arg| self.call(|| f(arg))
    }

    fn capture(&self, fault: Fault) -> Result<C::Caught, Fault> {
        match self.catch.intercept(fault) {
            Ok(caught) => {
                debug!(capture = %self.catch.describe(), "captured fault as Err");
                Ok(caught)
            }
            Err(fault) => {
                trace!(
                    capture = %self.catch.describe(),
                    error = %fault,
                    "fault outside capture set, propagating"
                );
                Err(fault)
            }
        }
    }
}

/// Turns an absent return into `Err(Nil)`. Intercepts no faults.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSafe;

impl NullSafe {
    pub fn call<T>(&self, f: impl FnOnce() -> Option<T>) -> Opt<T> {
        match f() {
            Some(value) => Outcome::Ok(value),
            None => {
                debug!("absent return converted to Nil");
                Outcome::nil()
            }
        }
    }

    pub fn wrap<A, T, F>(self, f: F) -> impl Fn(A) -> Opt<T>
    where
        F: Fn(A) -> Option<T>,
    {
        move |arg| self.call(|| f(arg))
    }
}

/// [`Safe`] and [`NullSafe`] composed: absent returns and captured faults both become `Err`.
///
/// An absent return is only captured when the capture set says so (see
/// [`Intercept::captures_absent`]); otherwise it propagates as a [`Nil`] fault.
#[derive(Clone, Debug)]
pub struct NullAndErrorSafe<C> {
    safe: Safe<C>,
    absent: bool,
}

impl<C: Intercept> NullAndErrorSafe<C> {
    pub fn new(catch: C) -> Self {
        let absent = catch.captures_absent();
        Self {
            safe: Safe::new(catch),
            absent,
        }
    }

    /// Captures absent returns whatever the capture set says.
    pub fn with_absent(mut self) -> Self {
        self.absent = true;
        self
    }

    pub fn spec(&self) -> &C {
        self.safe.spec()
    }

    pub fn captures_absent(&self) -> bool {
        self.absent
    }

    pub fn call<T>(
        &self,
        f: impl FnOnce() -> Result<Option<T>, Fault>,
    ) -> Result<Outcome<T, NilOr<C::Caught>>, Fault> {
        let captured = self.safe.call(f)?;
        if !self.absent && matches!(captured, Outcome::Ok(None)) {
            trace!("absent return outside capture set, propagating");
            return Err(Fault::new(Nil::new()));
        }
        Ok(captured
            .map_alt(NilOr::Caught)
            .and_then(|value| NullSafe.call(|| value).map_alt(NilOr::Nil)))
    }

    pub fn wrap<A, T, F>(self, f: F) -> impl Fn(A) -> Result<Outcome<T, NilOr<C::Caught>>, Fault>
    where
        F: Fn(A) -> Result<Option<T>, Fault>,
    {
        move |arg| self.call(|| f(arg))
    }
}

impl NullAndErrorSafe<CaptureSpec> {
    pub(crate) fn from_spec(spec: CaptureSpec) -> Self {
        Self::new(spec.with_absent())
    }
}
