//! Property-based tests for Result laws.
//!
//! This module verifies the algebraic contract of the Result container:
//! - Functor identity and variant preservation on the success channel
//! - Short-circuit: the error payload travels unchanged, callbacks never run
//! - Associativity of and_then
//! - Hydration round-trip through the plain tagged representation

use std::cell::Cell;

use dyad::container::result::{Result, error, ok, partition};
use proptest::prelude::*;

proptest! {
    /// Functor identity: `c.map(|x| x)` is observably equal to `c`.
    #[test]
    fn prop_map_identity(value: i32) {
        prop_assert_eq!(ok::<_, String>(value).map(|x| x), ok(value));
    }

    /// `map` preserves the variant: `c.map(f).is_ok() == c.is_ok()`.
    #[test]
    fn prop_map_preserves_variant(value: i32, message: String) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert!(ok::<_, String>(value).map(function).is_ok());
        prop_assert!(error::<i32, _>(message).map(function).is_error());
    }

    /// Short-circuit: an Error's payload survives map/and_then unchanged.
    #[test]
    fn prop_error_payload_travels_unchanged(message: String) {
        let start: Result<i32, String> = error(message.clone());
        let finished = start
            .map(|n| n.wrapping_add(1))
            .and_then(|n| ok(n))
            .map(|n| n.wrapping_mul(3));
        prop_assert_eq!(finished, error(message));
    }

    /// Associativity: `c.and_then(f).and_then(g)` equals
    /// `c.and_then(|x| f(x).and_then(g))`.
    #[test]
    fn prop_and_then_associativity(value: i32) {
        let f = |n: i32| ok::<_, String>(n.wrapping_add(1));
        let g = |n: i32| {
            if n % 2 == 0 {
                ok(n)
            } else {
                error("odd".to_string())
            }
        };

        let left = ok::<_, String>(value).and_then(f).and_then(g);
        let right = ok::<_, String>(value).and_then(|x| f(x).and_then(g));

        prop_assert_eq!(left, right);
    }

    /// Round-trip: dehydrating and re-hydrating reconstructs the container.
    #[test]
    fn prop_hydrate_roundtrip(value: i32, message: String, success: bool) {
        let original: Result<i32, String> = if success {
            ok(value)
        } else {
            error(message)
        };
        let through = Result::hydrate(original.clone().dehydrate());
        prop_assert_eq!(through, original);
    }

    /// Partitioning conserves every element and both orders.
    #[test]
    fn prop_partition_conserves_elements(flags: Vec<bool>) {
        let results: Vec<Result<usize, usize>> = flags
            .iter()
            .enumerate()
            .map(|(index, flag)| if *flag { ok(index) } else { error(index) })
            .collect();
        let expected_ok = flags.iter().filter(|flag| **flag).count();
        let expected_error = flags.len() - expected_ok;

        let (successes, failures) = partition(results);
        prop_assert_eq!(successes.len(), expected_ok);
        prop_assert_eq!(failures.len(), expected_error);
        prop_assert!(successes.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(failures.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

/// Short-circuit law: an Error never invokes `map`, `and_then`, or
/// `filter_or_else` callbacks.
#[test]
fn short_circuit_never_invokes_callbacks() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    let start: Result<i32, String> = error("gone".to_string());
    let result = start
        .map(|n| {
            count();
            n
        })
        .and_then(|n| {
            count();
            ok(n)
        })
        .filter_or_else(
            |_| {
                count();
                true
            },
            |_| {
                count();
                "rejected".to_string()
            },
        );

    assert_eq!(result, error("gone".to_string()));
    assert_eq!(calls.get(), 0);
}
