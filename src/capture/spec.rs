//! Capture specifications: which faults a decorator turns into `Err`.
//!
//! A spec is fixed when the decorator is built and never changes per call.

use super::Fault;
use crate::core::Nil;
use std::any::type_name;
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

/// Any concrete error type a fault can be checked against.
pub trait FaultKind: Display + Debug + Send + Sync + 'static {}

impl<K> FaultKind for K where K: Display + Debug + Send + Sync + 'static {}

/// Decides whether a fault is captured, and in what form.
///
/// Returning `Err(fault)` hands the fault back untouched so it keeps
/// propagating past the decorator.
pub trait Intercept {
    /// The error payload a captured fault becomes.
    type Caught;

    fn intercept(&self, fault: Fault) -> Result<Self::Caught, Fault>;

    /// Human-readable summary of what is captured, for diagnostics.
    fn describe(&self) -> String;

    /// Whether absent returns are captured as `Nil` rather than propagated.
    fn captures_absent(&self) -> bool {
        false
    }
}

/// Captures exactly one error type and downcasts the fault into it.
pub struct Only<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> Only<K> {
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<K> Default for Only<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Only<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Only<K> {}

impl<K> Debug for Only<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Only").field(&type_name::<K>()).finish()
    }
}

impl<K: FaultKind> Intercept for Only<K> {
    type Caught = K;

    fn intercept(&self, fault: Fault) -> Result<K, Fault> {
        fault.downcast::<K>()
    }

    fn describe(&self) -> String {
        type_name::<K>().to_string()
    }
}

fn is_kind<K: FaultKind>(fault: &Fault) -> bool {
    fault.is::<K>()
}

/// A named check for one error type.
///
/// A fault matches when it is that type, including when context has been
/// attached on top of it.
#[derive(Clone, Copy)]
pub struct ErrorKind {
    name: &'static str,
    test: fn(&Fault) -> bool,
}

impl ErrorKind {
    pub fn of<K: FaultKind>() -> Self {
        Self {
            name: type_name::<K>(),
            test: is_kind::<K>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, fault: &Fault) -> bool {
        (self.test)(fault)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.name).finish()
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ErrorKind {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Faults {
    #[default]
    Nothing,
    Kinds(Vec<ErrorKind>),
    Everything,
}

/// Static configuration of a capture decorator.
///
/// Either an explicit set of error kinds, every kind, absent returns only, or
/// a kind set combined with absent returns. Capturing absent returns also
/// captures a [`Nil`] raised as a fault.
///
/// # Example
///
/// ```rust
/// use outcome::capture::CaptureSpec;
/// use std::num::ParseIntError;
///
/// let spec = CaptureSpec::new()
///     .kind::<ParseIntError>()
///     .with_absent();
///
/// let fault = anyhow::Error::new("x".parse::<i32>().unwrap_err());
/// assert!(spec.captures(&fault));
/// assert!(spec.captures_absent());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureSpec {
    faults: Faults,
    absent: bool,
}

impl CaptureSpec {
    /// A spec that captures nothing until kinds are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures every fault.
    pub fn all() -> Self {
        Self {
            faults: Faults::Everything,
            absent: false,
        }
    }

    /// Captures absent returns only.
    pub fn absent() -> Self {
        Self::new().with_absent()
    }

    pub fn kinds(kinds: impl IntoIterator<Item = ErrorKind>) -> Self {
        kinds.into_iter().fold(Self::new(), Self::with_kind)
    }

    /// Adds `K` to the captured kinds.
    pub fn kind<K: FaultKind>(self) -> Self {
        self.with_kind(ErrorKind::of::<K>())
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.faults = match self.faults {
            Faults::Nothing => Faults::Kinds(vec![kind]),
            Faults::Kinds(mut kinds) => {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
                Faults::Kinds(kinds)
            }
            Faults::Everything => Faults::Everything,
        };
        self
    }

    /// Also captures absent returns.
    pub fn with_absent(mut self) -> Self {
        self.absent = true;
        self
    }

    pub fn captures(&self, fault: &Fault) -> bool {
        if self.absent && fault.is::<Nil>() {
            return true;
        }
        match &self.faults {
            Faults::Nothing => false,
            Faults::Kinds(kinds) => kinds.iter().any(|kind| kind.matches(fault)),
            Faults::Everything => true,
        }
    }

    pub fn captures_absent(&self) -> bool {
        self.absent
    }

    pub fn captures_everything(&self) -> bool {
        matches!(self.faults, Faults::Everything)
    }

    /// Names of the explicitly listed kinds, in insertion order.
    pub fn kind_names(&self) -> Vec<&'static str> {
        match &self.faults {
            Faults::Kinds(kinds) => kinds.iter().map(ErrorKind::name).collect(),
            Faults::Nothing | Faults::Everything => Vec::new(),
        }
    }
}

impl Intercept for CaptureSpec {
    type Caught = Fault;

    fn intercept(&self, fault: Fault) -> Result<Fault, Fault> {
        if self.captures(&fault) {
            Ok(fault)
        } else {
            Err(fault)
        }
    }

    fn captures_absent(&self) -> bool {
        self.absent
    }

    fn describe(&self) -> String {
        let faults = match &self.faults {
            Faults::Nothing => "no faults".to_string(),
            Faults::Kinds(_) => self.kind_names().join(" | "),
            Faults::Everything => "all faults".to_string(),
        };
        if self.absent {
            format!("{faults} + absent")
        } else {
            faults
        }
    }
}
