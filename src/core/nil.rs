//! The absent-value marker and the optional form of `Outcome`.

use super::outcome::Outcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MESSAGE: &str = "Found None while expecting something";

/// Error marker for a value that was absent where one was expected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Nil {
    message: String,
}

impl Nil {
    /// Create a marker with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a marker with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Nil {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// An optional value expressed as an outcome.
pub type Opt<T> = Outcome<T, Nil>;

impl<T> Outcome<T, Nil> {
    /// Wraps a value that may be absent.
    ///
    /// ```rust
    /// use outcome::{Nil, Opt, Outcome};
    ///
    /// let present: Opt<i32> = Outcome::some(Some(10));
    /// assert_eq!(present, Outcome::Ok(10));
    ///
    /// let absent: Opt<i32> = Outcome::some(None);
    /// assert_eq!(absent, Outcome::Err(Nil::new()));
    /// ```
    pub fn some(value: Option<T>) -> Self {
        match value {
            Some(value) => Outcome::Ok(value),
            None => Outcome::nil(),
        }
    }

    /// An absent value with the default message.
    pub fn nil() -> Self {
        Outcome::Err(Nil::new())
    }

    /// An absent value with a custom message.
    pub fn nil_with(message: impl Into<String>) -> Self {
        Outcome::Err(Nil::with_message(message))
    }

    /// Converts back into an `Option`.
    pub fn into_option(self) -> Option<T> {
        self.ok()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Outcome::some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_checks_for_absence() {
        let present: Opt<&str> = Outcome::some(Some("x"));
        assert_eq!(present, Outcome::Ok("x"));

        let absent: Opt<&str> = Outcome::some(None);
        assert!(absent.is_err());
        assert_eq!(absent.unwrap_err().message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn nil_with_keeps_custom_message() {
        let missing: Opt<i32> = Outcome::nil_with("Nothing was found");
        assert_eq!(missing.unwrap_err().to_string(), "Nothing was found");
    }

    #[test]
    fn nil_markers_compare_by_message() {
        assert_eq!(Nil::new(), Nil::default());
        assert_ne!(Nil::new(), Nil::with_message("other"));
    }

    #[test]
    fn option_round_trip() {
        let opt: Opt<u8> = Some(3).into();
        assert_eq!(opt.into_option(), Some(3));

        let opt: Opt<u8> = None.into();
        assert_eq!(opt.into_option(), None);
    }
}
