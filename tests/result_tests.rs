//! Unit tests for the Result<T, E> container.
//!
//! Result represents success or expected, typed failure:
//! - `Ok(value)`: a success value
//! - `Error(error)`: an expected failure carrying its payload
//!
//! Error is an absorbing state for the success-channel operations, and the
//! payload travels unchanged until an error-channel operation touches it.

use std::cell::Cell;

use dyad::container::option::{none, some};
use dyad::container::result::{Result, error, lift, lift_or, ok, partition};
use dyad::error::{FailedPredicateError, NoValueError, Tagged, UnhandledException};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn ok_is_ok() {
    let value: Result<i32, String> = ok(42);
    assert!(value.is_ok());
    assert!(!value.is_error());
}

#[rstest]
fn error_is_error() {
    let value: Result<i32, String> = error("gone".to_string());
    assert!(value.is_error());
    assert!(!value.is_ok());
}

#[rstest]
fn channel_predicates_check_the_payload() {
    assert!(ok::<_, String>(5).is_ok_and(|n| n > 3));
    assert!(!error::<i32, _>("gone").is_ok_and(|n| n > 3));
    assert!(error::<i32, _>("gone").is_error_and(|e| e.len() == 4));
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn map_transforms_only_the_success_channel() {
    assert_eq!(ok::<_, String>(21).map(|n| n * 2), ok(42));
    assert_eq!(error::<i32, _>("gone").map(|n| n * 2), error("gone"));
}

#[rstest]
fn map_on_error_does_not_invoke_the_callback() {
    let calls = Cell::new(0);
    let result = error::<i32, _>("gone").map(|n| {
        calls.set(calls.get() + 1);
        n
    });
    assert_eq!(result, error("gone"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_error_transforms_only_the_error_channel() {
    assert_eq!(error::<i32, _>("gone").map_error(|e: &str| e.len()), error(4));
    assert_eq!(ok::<_, &str>(1).map_error(|e: &str| e.len()), ok(1));
}

#[rstest]
fn map_both_transforms_the_active_channel() {
    assert_eq!(
        ok::<_, String>("fine").map_both(|v| v.to_uppercase(), |e| e),
        ok("FINE".to_string())
    );
    assert_eq!(
        error::<i32, _>("gone").map_both(|v| v, |e: &str| e.len()),
        error(4)
    );
}

#[rstest]
fn and_then_flattens() {
    let checked_half = |n: i32| {
        if n % 2 == 0 {
            ok(n / 2)
        } else {
            error(format!("{n} is odd"))
        }
    };
    assert_eq!(ok(8).and_then(checked_half), ok(4));
    assert_eq!(ok(3).and_then(checked_half), error("3 is odd".to_string()));
    assert_eq!(
        error::<i32, _>("gone".to_string()).and_then(checked_half),
        error("gone".to_string())
    );
}

// =============================================================================
// Filtering
// =============================================================================

#[rstest]
fn filter_packages_the_failing_value() {
    let rejected: Result<i32, FailedPredicateError<i32>> = ok(5).filter(|n| *n > 10);
    let failure = rejected.unwrap_error();
    assert_eq!(failure.tag(), "FailedPredicateError");
    assert_eq!(failure.into_value(), 5);
}

#[rstest]
fn filter_keeps_satisfying_values() {
    let kept: Result<i32, FailedPredicateError<i32>> = ok(15).filter(|n| *n > 10);
    assert_eq!(kept.unwrap(), 15);
}

#[rstest]
fn filter_or_else_builds_a_domain_error() {
    let rejected: Result<i32, String> = ok(5).filter_or_else(|n| *n > 10, |n| format!("{n} too small"));
    assert_eq!(rejected, error("5 too small".to_string()));
}

#[rstest]
fn filter_on_error_does_not_invoke_the_predicate() {
    let calls = Cell::new(0);
    let start: Result<i32, FailedPredicateError<i32>> = error(FailedPredicateError::new(0));
    let result = start.filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(result.is_error());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Fallbacks
// =============================================================================

#[rstest]
fn or_else_receives_the_error_value() {
    let recovered: Result<i32, usize> = error::<i32, _>("gone").or_else(|e: &str| ok(e.len() as i32));
    assert_eq!(recovered, ok(4));
}

#[rstest]
fn or_else_does_not_invoke_the_fallback_on_ok() {
    let calls = Cell::new(0);
    let kept: Result<i32, String> = ok::<_, String>(1).or_else(|e| {
        calls.set(calls.get() + 1);
        error(e)
    });
    assert_eq!(kept, ok(1));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Swap and Merge
// =============================================================================

#[rstest]
fn swap_exchanges_the_channels() {
    assert_eq!(ok::<_, &str>(1).swap(), error(1));
    assert_eq!(error::<i32, _>("miss").swap(), ok("miss"));
}

#[rstest]
fn swap_enables_failure_as_happy_path() {
    // Cache-miss flow: the miss becomes the value to repopulate with.
    let miss: Result<String, &str> = error("key-a");
    let repopulated = miss
        .swap()
        .map(|key| format!("computed for {key}"))
        .merge();
    assert_eq!(repopulated, "computed for key-a");
}

#[rstest]
fn merge_collapses_same_typed_channels() {
    assert_eq!(ok::<i32, i32>(1).merge(), 1);
    assert_eq!(error::<i32, i32>(2).merge(), 2);
}

// =============================================================================
// Unwrapping
// =============================================================================

#[rstest]
fn unwrap_returns_the_success_value() {
    assert_eq!(ok::<_, String>(42).unwrap(), 42);
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap()` on an `Error` value")]
fn unwrap_on_error_is_a_named_defect() {
    let _ = error::<i32, _>("gone").unwrap();
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap_error()` on an `Ok` value")]
fn unwrap_error_on_ok_is_a_named_defect() {
    let _ = ok::<_, String>(1).unwrap_error();
}

#[rstest]
fn unwrap_fallbacks() {
    assert_eq!(error::<i32, _>("gone").unwrap_or(7), 7);
    assert_eq!(error::<i32, _>("gone").unwrap_or_else(|e| e.len() as i32), 4);
    assert_eq!(error::<i32, _>("gone").unwrap_or_default(), 0);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn into_option_discards_the_error() {
    assert_eq!(ok::<_, String>(5).into_option(), some(5));
    assert_eq!(error::<i32, _>("gone").into_option(), none());
}

#[rstest]
fn to_vec_has_at_most_one_element() {
    assert_eq!(ok::<_, String>(5).to_vec(), vec![5]);
    assert_eq!(error::<i32, _>("gone").to_vec(), Vec::<i32>::new());
}

#[rstest]
fn eq_by_uses_injected_equalities_per_channel() {
    let left: Result<f64, String> = ok(1.0);
    let right: Result<f64, String> = ok(1.0 + 1e-12);
    assert!(left.eq_by(&right, |a, b| (a - b).abs() < 1e-9, |a, b| a == b));

    let failures: Result<f64, String> = error("gone".to_string());
    assert!(!failures.eq_by(&right, |_, _| true, |_, _| true));
}

#[rstest]
fn widen_converts_into_a_broader_union() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Missing(NoValueError),
        Predicate(FailedPredicateError<i32>),
    }

    impl From<NoValueError> for AppError {
        fn from(error: NoValueError) -> Self {
            Self::Missing(error)
        }
    }

    impl From<FailedPredicateError<i32>> for AppError {
        fn from(error: FailedPredicateError<i32>) -> Self {
            Self::Predicate(error)
        }
    }

    let missing: Result<i32, AppError> = error::<i32, NoValueError>(NoValueError::new()).widen();
    let rejected: Result<i32, AppError> =
        error::<i32, FailedPredicateError<i32>>(FailedPredicateError::new(5)).widen();

    assert!(matches!(missing.unwrap_error(), AppError::Missing(_)));
    assert!(matches!(rejected.unwrap_error(), AppError::Predicate(_)));
}

// =============================================================================
// Factories
// =============================================================================

#[rstest]
fn from_nullable_defaults_to_no_value_error() {
    assert_eq!(Result::from_nullable(Some(5)), ok(5));
    assert_eq!(
        Result::from_nullable(None::<i32>).unwrap_error().tag(),
        "NoValueError"
    );
}

#[rstest]
fn from_nullable_or_uses_the_caller_error() {
    let missing: Result<i32, String> = Result::from_nullable_or(None, || "nothing".to_string());
    assert_eq!(missing, error("nothing".to_string()));
}

#[rstest]
fn from_falsy_defaults_to_no_value_error() {
    assert_eq!(Result::from_falsy(3), ok(3));
    assert_eq!(Result::from_falsy(0).unwrap_error().tag(), "NoValueError");
}

#[rstest]
fn from_option_converts_none_into_an_error() {
    assert_eq!(Result::from_option(some(5)), ok(5));
    assert!(Result::from_option(none::<i32>()).is_error());
    let custom: Result<i32, String> = Result::from_option_or(none(), || "empty".to_string());
    assert_eq!(custom, error("empty".to_string()));
}

#[rstest]
fn catch_wraps_an_unwind_as_unhandled_exception() {
    assert_eq!(Result::catch(|| 42), ok(42));

    let caught = Result::catch(|| -> i32 { panic!("boom") });
    let exception = caught.unwrap_error();
    assert_eq!(exception.tag(), "UnhandledException");
    assert_eq!(exception.message(), "boom");
}

#[rstest]
fn catch_or_classifies_the_rendered_panic() {
    let caught: Result<i32, String> =
        Result::catch_or(|| panic!("boom"), |message| format!("caught: {message}"));
    assert_eq!(caught, error("caught: boom".to_string()));
}

#[rstest]
fn catch_converts_a_parse_failure_thunk() {
    // The panicking unwrap inside the thunk is the "exception"; the caught
    // message carries the parse failure's description.
    let caught = Result::catch(|| "{bad json".parse::<i32>().unwrap());
    let exception = caught.unwrap_error();
    assert_eq!(exception.tag(), "UnhandledException");
    assert!(exception.message().contains("ParseIntError"));
}

#[rstest]
fn lift_converts_a_panicking_function() {
    let safe_div = lift(|(a, b): (i32, i32)| a / b);
    assert_eq!(safe_div((10, 2)).unwrap(), 5);
    assert_eq!(safe_div((10, 0)).unwrap_error().tag(), "UnhandledException");
}

#[rstest]
fn lift_or_classifies_the_rendered_panic() {
    let safe_div = lift_or(|(a, b): (i32, i32)| a / b, |message| message.to_uppercase());
    assert!(safe_div((1, 0)).unwrap_error().contains("DIVIDE BY ZERO"));
}

#[rstest]
fn predicate_curries_a_constructor() {
    let positive = Result::predicate(|n: &i32| *n > 0);
    assert_eq!(positive(5).unwrap(), 5);
    assert_eq!(positive(-5).unwrap_error().into_value(), -5);
}

#[rstest]
fn partition_splits_both_channels_in_order() {
    let (successes, failures) = partition([ok(1), error("a"), ok(3), error("b")]);
    assert_eq!(successes, vec![1, 3]);
    assert_eq!(failures, vec!["a", "b"]);
}

// =============================================================================
// Defect Policy
// =============================================================================

#[rstest]
#[should_panic(expected = "callback defect")]
fn map_never_absorbs_a_callback_panic() {
    let _ = ok::<_, String>(1).map(|_| -> i32 { panic!("callback defect") });
}

#[rstest]
fn unhandled_exception_retains_the_cause() {
    use std::error::Error;

    let exception = UnhandledException::from_error("x".parse::<i32>().unwrap_err());
    assert!(exception.source().is_some());
}
