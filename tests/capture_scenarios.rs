//! End-to-end scenarios for capture decorators and shortcut propagation.

use outcome::capture::{
    catch_all, null_and_error_safe, null_and_error_safe_any, null_safe, safe, safe_any, Fault,
    NilOr, NullAndErrorSafe,
};
use outcome::combine::{combine_errors, Combined, CombinedError};
use outcome::{capture_spec, CaptureSpec, Nil, Outcome};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("missing key {0:?}")]
struct KeyError(String);

#[derive(Debug, Error, PartialEq)]
#[error("bad value {0}")]
struct ValueError(i32);

#[derive(Debug, Error, PartialEq)]
#[error("index {0} out of range")]
struct IndexError(usize);

fn lookup(data: &HashMap<String, i32>, key: &str) -> Result<i32, Fault> {
    data.get(key)
        .copied()
        .ok_or_else(|| KeyError(key.to_string()).into())
}

fn record(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn get_id_captures_missing_key() {
    let get_id = safe::<KeyError>().wrap(|data: HashMap<String, i32>| lookup(&data, "id"));

    assert_eq!(get_id(record(&[("id", 42)])).unwrap(), Outcome::Ok(42));
    assert_eq!(
        get_id(record(&[("name", 1)])).unwrap(),
        Outcome::Err(KeyError("id".to_string()))
    );
}

#[test]
fn uncaptured_kind_propagates_through_the_caller() {
    fn checked_id(data: &HashMap<String, i32>) -> Result<i32, Fault> {
        let id = lookup(data, "id")?;
        if id < 0 {
            return Err(ValueError(id).into());
        }
        Ok(id)
    }

    fn caller(data: HashMap<String, i32>) -> Result<String, Fault> {
        let outcome = safe::<KeyError>().call(|| checked_id(&data))?;
        Ok(outcome.map_or("no id".to_string(), |id| format!("id {id}")))
    }

    assert_eq!(caller(record(&[("id", 3)])).unwrap(), "id 3");
    assert_eq!(caller(record(&[])).unwrap(), "no id");

    let escaped = caller(record(&[("id", -5)])).unwrap_err();
    assert_eq!(escaped.downcast_ref::<ValueError>(), Some(&ValueError(-5)));
}

#[test]
fn shortcut_inside_a_decorated_body_is_captured_when_listed() {
    fn first_even(values: &[i32]) -> Outcome<i32, IndexError> {
        values
            .iter()
            .copied()
            .find(|v| v % 2 == 0)
            .map_or(Outcome::Err(IndexError(values.len())), Outcome::Ok)
    }

    let doubled_even = safe::<IndexError>().wrap(|values: Vec<i32>| -> Result<i32, Fault> {
        let even = first_even(&values).q()?;
        Ok(even * 2)
    });

    assert_eq!(doubled_even(vec![1, 4, 5]).unwrap(), Outcome::Ok(8));
    assert_eq!(doubled_even(vec![1, 3]).unwrap(), Outcome::Err(IndexError(2)));
}

#[test]
fn shortcut_inside_a_decorated_body_propagates_when_not_listed() {
    let decorated = safe::<KeyError>()
        .wrap(|input: Outcome<i32, ValueError>| -> Result<i32, Fault> { Ok(input.q()? + 1) });

    assert_eq!(decorated(Outcome::Ok(1)).unwrap(), Outcome::Ok(2));
    let escaped = decorated(Outcome::Err(ValueError(9))).unwrap_err();
    assert!(escaped.is::<ValueError>());
}

#[test]
fn capture_set_lists_several_kinds() {
    let decorator = safe_any(capture_spec!(KeyError, IndexError));
    let pick = decorator.wrap(|index: usize| -> Result<i32, Fault> {
        let values = [10, 20, 30];
        match index {
            99 => Err(KeyError("special".to_string()).into()),
            i => values.get(i).copied().ok_or_else(|| IndexError(i).into()),
        }
    });

    assert_eq!(pick(1).unwrap().ok(), Some(20));
    assert!(pick(7).unwrap().err_is::<IndexError>());
    assert!(pick(99).unwrap().err_is::<KeyError>());
}

#[test]
fn catch_all_captures_ad_hoc_faults() {
    let outcome = catch_all()
        .call(|| -> Result<i32, Fault> { Err(anyhow::anyhow!("unexpected")) })
        .unwrap();
    assert_eq!(outcome.unwrap_err().to_string(), "unexpected");
}

#[test]
fn empty_capture_set_propagates_everything() {
    let decorator = safe_any(CaptureSpec::new());
    let escaped = decorator
        .call(|| -> Result<i32, Fault> { Err(KeyError("id".to_string()).into()) })
        .unwrap_err();
    assert!(escaped.is::<KeyError>());
}

#[test]
fn null_safe_handles_dictionary_lookups() {
    let data = record(&[("hello", 1)]);
    let get = null_safe().wrap(|key: &str| data.get(key).copied());

    assert_eq!(get("hello"), Outcome::Ok(1));
    assert_eq!(get("hola"), Outcome::Err(Nil::new()));
    assert_eq!(get("hola").unwrap_or(0), 0);
}

#[test]
fn null_and_error_safe_reports_both_failures() {
    let data = record(&[("a", 1), ("b", 0)]);
    let ratio = null_and_error_safe::<ValueError>().wrap(|key: &str| -> Result<Option<i32>, Fault> {
        let Some(value) = data.get(key).copied() else {
            return Ok(None);
        };
        if value == 0 {
            return Err(ValueError(value).into());
        }
        Ok(Some(100 / value))
    });

    assert_eq!(ratio("a").unwrap(), Outcome::Ok(100));
    assert_eq!(ratio("b").unwrap(), Outcome::Err(NilOr::Caught(ValueError(0))));
    assert!(ratio("c").unwrap().unwrap_err().is_nil());
}

#[test]
fn uncaptured_absent_return_reaches_an_outer_absent_capture() {
    let data = record(&[("a", 1)]);
    let lenient = null_and_error_safe_any(capture_spec!(ValueError));
    let inner = lenient.wrap(|key: &str| -> Result<Option<i32>, Fault> {
        Ok(data.get(key).copied())
    });
    assert!(inner("missing").unwrap().unwrap_err().is_nil());

    let strict = NullAndErrorSafe::new(capture_spec!(ValueError));
    let outer = safe_any(CaptureSpec::absent());

    let found = outer
        .call(|| strict.call(|| Ok(data.get("a").copied())))
        .unwrap();
    assert_eq!(found.ok().and_then(Outcome::ok), Some(1));

    let missing = outer
        .call(|| strict.call(|| Ok(data.get("b").copied())))
        .unwrap();
    assert!(missing.err_is::<Nil>());
}

#[test]
fn combined_validation_collects_every_failure() {
    fn positive(name: &str, value: i32) -> Outcome<i32, String> {
        if value > 0 {
            Outcome::Ok(value)
        } else {
            Outcome::Err(format!("{name} must be positive"))
        }
    }

    let area = combine_errors("no area".to_string(), true).wrap(|c, (w, h): (i32, i32)| {
        let w = c.q(positive("width", w));
        let h = c.q(positive("height", h));
        Some(w? * h?)
    });

    assert_eq!(area((2, 3)), Outcome::Ok(6));
    assert_eq!(
        area((0, -1)),
        Outcome::Err(Combined::Many(CombinedError::new(
            "width must be positive".to_string(),
            ["height must be positive".to_string()],
        )))
    );

    let fail_fast = combine_errors("no area".to_string(), false).wrap(|c, (w, h): (i32, i32)| {
        let w = c.q(positive("width", w))?;
        let h = c.q(positive("height", h))?;
        Some(w * h)
    });

    assert_eq!(
        fail_fast((0, -1)),
        Outcome::Err(Combined::Single("width must be positive".to_string()))
    );
}
