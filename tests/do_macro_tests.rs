//! Tests for the do_! early-return sequencing macro.
//!
//! The contract under test: exactly one failing step short-circuits the
//! chain, the failure value is the one that caused the short-circuit, and
//! statements after a failing step are never evaluated.

use std::cell::Cell;

use dyad::container::option::{Option, none, some};
use dyad::container::result::{Result, error, ok};
use dyad::do_;
use dyad::error::{FailedPredicateError, NoValueError};

// =============================================================================
// Success paths
// =============================================================================

#[test]
fn option_binds_and_lets() {
    let result = do_! {
        x <= some(5);
        y <= some(10);
        let z = x + y;
        some(z * 2)
    };
    assert_eq!(result, some(30));
}

#[test]
fn result_binds_and_lets() {
    let result: Result<i32, String> = do_! {
        x <= ok::<i32, String>(5);
        let doubled = x * 2;
        y <= ok::<i32, String>(10);
        ok(doubled + y)
    };
    assert_eq!(result, ok(20));
}

#[test]
fn tuple_and_wildcard_patterns() {
    let result = do_! {
        (x, y) <= some((10, 20));
        _ <= some("ignored");
        some(x + y)
    };
    assert_eq!(result, some(30));
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[test]
fn option_short_circuits_on_none() {
    let result: Option<i32> = do_! {
        x <= some(5);
        y <= none::<i32>();
        some(x + y)
    };
    assert_eq!(result, none());
}

#[test]
fn result_preserves_the_exact_failure_value() {
    let result: Result<i32, &str> = do_! {
        x <= error::<i32, &str>("E");
        y <= ok::<i32, &str>(1);
        ok(x + y)
    };
    assert_eq!(result, error("E"));
}

#[test]
fn operands_after_a_failure_are_never_evaluated() {
    let counter = Cell::new(0);
    let spy = &counter;

    let result: Result<i32, &str> = do_! {
        x <= error::<i32, &str>("E");
        y <= {
            spy.set(spy.get() + 1);
            ok::<i32, &str>(1)
        };
        let _unused = {
            spy.set(spy.get() + 1);
            0
        };
        ok(x + y)
    };

    assert_eq!(result, error("E"));
    assert_eq!(counter.get(), 0);
}

#[test]
fn only_steps_before_the_failure_run() {
    let counter = Cell::new(0);
    let spy = &counter;

    let result: Option<i32> = do_! {
        _ <= {
            spy.set(spy.get() + 1);
            some(())
        };
        _ <= none::<()>();
        _ <= {
            spy.set(spy.get() + 1);
            some(())
        };
        some(0)
    };

    assert!(result.is_none());
    assert_eq!(counter.get(), 1);
}

// =============================================================================
// Error-union accumulation
// =============================================================================

#[derive(Debug, PartialEq)]
enum ChainError {
    Missing(NoValueError),
    Predicate(FailedPredicateError<i32>),
}

impl From<NoValueError> for ChainError {
    fn from(error: NoValueError) -> Self {
        Self::Missing(error)
    }
}

impl From<FailedPredicateError<i32>> for ChainError {
    fn from(error: FailedPredicateError<i32>) -> Self {
        Self::Predicate(error)
    }
}

#[test]
fn binds_widen_into_the_union_error_type() {
    let fetch = |present: bool| -> Result<i32, NoValueError> {
        Result::from_nullable(if present { Some(4) } else { None })
    };
    let validate = Result::predicate(|n: &i32| *n % 2 == 0);

    let even: Result<i32, ChainError> = do_! {
        fetched <= fetch(true);
        checked <= validate(fetched);
        ok(checked * 10)
    };
    assert_eq!(even, ok(40));

    let missing: Result<i32, ChainError> = do_! {
        fetched <= fetch(false);
        checked <= validate(fetched);
        ok(checked * 10)
    };
    assert!(matches!(missing.unwrap_error(), ChainError::Missing(_)));
}
