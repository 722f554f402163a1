//! Combining the failures of several fallible sub-calls.
//!
//! A combined body runs a sequence of sub-calls through a [`Collector`].
//! `collector.q(outcome)` hands back the payload of an `Ok` and records the
//! error of an `Err`, returning `None` so the body can either stop with `?`
//! or keep going and gather more failures.
//!
//! In fail-fast mode only the first recorded error surfaces. In aggregate
//! mode every recorded error surfaces, in call order, inside one
//! [`CombinedError`]; none is dropped, even if the body still produced a
//! value.
//!
//! # Example
//!
//! ```rust
//! use outcome::combine::{combine_errors, Combined, CombinedError};
//! use outcome::Outcome;
//!
//! let parse = |text: &str| -> Outcome<i32, String> {
//!     Outcome::from(text.parse::<i32>().map_err(|_| format!("not a number: {text}")))
//! };
//!
//! let sum = combine_errors("no input".to_string(), true).call(|c| {
//!     let a = c.q(parse("x"));
//!     let b = c.q(parse("y"));
//!     Some(a? + b?)
//! });
//!
//! assert_eq!(
//!     sum,
//!     Outcome::Err(Combined::Many(CombinedError::new(
//!         "not a number: x".to_string(),
//!         ["not a number: y".to_string()],
//!     )))
//! );
//! ```

pub mod error;

pub use error::{Combined, CombinedError};

use crate::core::Outcome;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Records the failures of the sub-calls made by one combined body.
pub struct Collector<E> {
    aggregate: bool,
    first: Option<E>,
    checks: Vec<Validation<(), NonEmptyVec<E>>>,
}

impl<E> Collector<E> {
    fn new(aggregate: bool) -> Self {
        Self {
            aggregate,
            first: None,
            checks: Vec::new(),
        }
    }

    /// Shortcut accessor: the payload of an `Ok`, or `None` after recording the error.
    pub fn q<T>(&mut self, outcome: Outcome<T, E>) -> Option<T> {
        match outcome {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(error) => {
                self.fail(error);
                None
            }
        }
    }

    /// Records a failure directly.
    pub fn fail(&mut self, error: E) {
        if self.aggregate {
            self.checks.push(Validation::fail(error));
        } else if self.first.is_none() {
            self.first = Some(error);
        }
    }

    /// Returns `true` once any failure has been recorded.
    pub fn failed(&self) -> bool {
        self.first.is_some() || !self.checks.is_empty()
    }

    pub fn is_aggregating(&self) -> bool {
        self.aggregate
    }

    fn finish(self) -> Option<Combined<E>> {
        if !self.aggregate {
            return self.first.map(Combined::Single);
        }

        match Validation::all_vec(self.checks) {
            Validation::Success(_) => None,
            Validation::Failure(errors) => Some(Combined::Many(CombinedError::from(errors))),
        }
    }
}

/// Decorator that runs a body through a [`Collector`] and merges its failures.
#[derive(Clone, Debug)]
pub struct CombineErrors<E> {
    default_error: E,
    aggregate: bool,
}

impl<E: Clone> CombineErrors<E> {
    /// `default_error` surfaces when the body gives up without recording a failure.
    pub fn new(default_error: E, aggregate: bool) -> Self {
        Self {
            default_error,
            aggregate,
        }
    }

    pub fn default_error(&self) -> &E {
        &self.default_error
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// Runs `body` once with a fresh collector.
    pub fn call<R>(
        &self,
        body: impl FnOnce(&mut Collector<E>) -> Option<R>,
    ) -> Outcome<R, Combined<E>> {
        let mut collector = Collector::new(self.aggregate);
        let produced = body(&mut collector);

        if let Some(failure) = collector.finish() {
            debug!(
                errors = failure.len(),
                aggregate = self.aggregate,
                "combined body recorded failures"
            );
            return Outcome::Err(failure);
        }

        match produced {
            Some(value) => Outcome::Ok(value),
            None => {
                debug!("combined body gave up without a failure, using default error");
                Outcome::Err(Combined::Single(self.default_error.clone()))
            }
        }
    }

    /// Wraps `f` so every call runs with a fresh collector.
    pub fn wrap<A, R, F>(self, f: F) -> impl Fn(A) -> Outcome<R, Combined<E>>
    where
        F: Fn(&mut Collector<E>, A) -> Option<R>,
    {
        move |arg| self.call(|collector| f(collector, arg))
    }
}

/// Builds a [`CombineErrors`] decorator.
pub fn combine_errors<E: Clone>(default_error: E, aggregate: bool) -> CombineErrors<E> {
    CombineErrors::new(default_error, aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: i32, label: &str) -> Outcome<i32, String> {
        if value >= 0 {
            Outcome::Ok(value)
        } else {
            Outcome::Err(label.to_string())
        }
    }

    fn two_failures(c: &mut Collector<String>) -> Option<i32> {
        let a = c.q(check(-1, "e1"));
        let b = c.q(check(-2, "e2"));
        Some(a? + b?)
    }

    #[test]
    fn aggregate_mode_merges_failures_in_call_order() {
        let outcome = combine_errors("default".to_string(), true).call(two_failures);
        assert_eq!(
            outcome,
            Outcome::Err(Combined::Many(CombinedError::new("e1".to_string(), ["e2".to_string()])))
        );
    }

    #[test]
    fn fail_fast_mode_surfaces_first_failure_only() {
        let outcome = combine_errors("default".to_string(), false).call(two_failures);
        assert_eq!(outcome, Outcome::Err(Combined::Single("e1".to_string())));
    }

    #[test]
    fn early_return_stops_the_body() {
        let mut reached_second = false;
        let outcome = combine_errors("default".to_string(), false).call(|c| {
            let a = c.q(check(-1, "e1"))?;
            reached_second = true;
            let b = c.q(check(2, "e2"))?;
            Some(a + b)
        });

        assert_eq!(outcome, Outcome::Err(Combined::Single("e1".to_string())));
        assert!(!reached_second);
    }

    #[test]
    fn success_passes_value_through() {
        let outcome = combine_errors("default".to_string(), true).call(|c| {
            let a = c.q(check(1, "e1"))?;
            let b = c.q(check(2, "e2"))?;
            Some(a + b)
        });
        assert_eq!(outcome, Outcome::Ok(3));
    }

    #[test]
    fn giving_up_without_failure_uses_default_error() {
        let outcome: Outcome<i32, Combined<String>> =
            combine_errors("default".to_string(), true).call(|_| None);
        assert_eq!(outcome, Outcome::Err(Combined::Single("default".to_string())));
    }

    #[test]
    fn aggregate_errors_win_over_a_produced_value() {
        let outcome = combine_errors("default".to_string(), true).call(|c| {
            let a = c.q(check(-1, "e1")).unwrap_or(0);
            let b = c.q(check(5, "e2")).unwrap_or(0);
            Some(a + b)
        });
        assert_eq!(
            outcome,
            Outcome::Err(Combined::Many(CombinedError::new("e1".to_string(), Vec::new())))
        );
    }

    #[test]
    fn fail_records_directly_and_failed_reports_it() {
        let outcome = combine_errors(0u8, true).call(|c| {
            assert!(!c.failed());
            assert!(c.is_aggregating());
            c.fail(1);
            c.fail(2);
            assert!(c.failed());
            Some(())
        });
        assert_eq!(outcome.unwrap_err().into_errors(), vec![1, 2]);
    }

    #[test]
    fn wrapped_body_gets_fresh_collector_per_call() {
        let checked = combine_errors("default".to_string(), true).wrap(|c, values: Vec<i32>| {
            let mut total = 0;
            for (i, value) in values.into_iter().enumerate() {
                total += c.q(check(value, &format!("bad #{i}"))).unwrap_or(0);
            }
            Some(total)
        });

        assert_eq!(checked(vec![1, 2, 3]), Outcome::Ok(6));
        assert_eq!(checked(vec![-1, 2, -3]).unwrap_err().len(), 2);
        assert_eq!(checked(vec![4]), Outcome::Ok(4));
    }

    #[test]
    fn decorator_exposes_configuration() {
        let decorator = combine_errors("default", false);
        assert_eq!(decorator.default_error(), &"default");
        assert!(!decorator.is_aggregate());
    }
}
