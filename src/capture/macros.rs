//! Macros for listing several captured kinds at once.

/// Build a [`CaptureSpec`](crate::capture::CaptureSpec) from a list of error types.
///
/// # Example
///
/// ```
/// use outcome::capture_spec;
/// use std::num::{ParseFloatError, ParseIntError};
///
/// let spec = capture_spec!(ParseIntError, ParseFloatError);
/// assert_eq!(spec.kind_names().len(), 2);
/// ```
#[macro_export]
macro_rules! capture_spec {
    () => {
        $crate::capture::CaptureSpec::new()
    };
    ($($kind:ty),+ $(,)?) => {
        $crate::capture::CaptureSpec::new()$(.kind::<$kind>())+
    };
}

/// Build a [`Safe`](crate::capture::Safe) decorator capturing every listed error type.
///
/// # Example
///
/// ```
/// use outcome::safe;
/// use outcome::capture::Fault;
/// use std::num::ParseIntError;
///
/// let parse = safe!(ParseIntError).wrap(|text: &str| -> Result<i32, Fault> {
///     Ok(text.parse::<i32>()?)
/// });
///
/// assert!(parse("12").unwrap().is_ok());
/// assert!(parse("twelve").unwrap().err_is::<ParseIntError>());
/// ```
#[macro_export]
macro_rules! safe {
    ($($kind:ty),+ $(,)?) => {
        $crate::capture::safe_any($crate::capture_spec!($($kind),+))
    };
}
