//! Property-based tests for Option laws.
//!
//! This module verifies the algebraic contract of the Option container:
//! - Functor identity: mapping the identity function preserves the value
//! - Variant preservation: map never changes which variant is present
//! - Short-circuit: callbacks are never invoked on None
//! - Associativity of and_then

use std::cell::Cell;

use dyad::container::option::{Option, none, some};
use proptest::prelude::*;

proptest! {
    /// Functor identity: `c.map(|x| x)` is observably equal to `c`.
    #[test]
    fn prop_map_identity(value: i32) {
        prop_assert_eq!(some(value).map(|x| x), some(value));
    }

    /// `map` preserves the variant: `c.map(f).is_some() == c.is_some()`.
    #[test]
    fn prop_map_preserves_variant(value: i32) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(some(value).map(function).is_some(), true);
        prop_assert_eq!(none::<i32>().map(function).is_some(), false);
    }

    /// Associativity: `c.and_then(f).and_then(g)` equals
    /// `c.and_then(|x| f(x).and_then(g))`.
    #[test]
    fn prop_and_then_associativity(value: i32) {
        let f = |n: i32| some(n.wrapping_add(1));
        let g = |n: i32| if n % 2 == 0 { some(n) } else { none() };

        let left = some(value).and_then(f).and_then(g);
        let right = some(value).and_then(|x| f(x).and_then(g));

        prop_assert_eq!(left, right);
    }

    /// `to_vec` yields at most one element, matching the variant.
    #[test]
    fn prop_to_vec_length(value: i32) {
        prop_assert_eq!(some(value).to_vec().len(), 1);
        prop_assert_eq!(none::<i32>().to_vec().len(), 0);
    }

    /// Zipping is `Some` exactly when both sides are.
    #[test]
    fn prop_zip_variant(left: i32, right: i32) {
        prop_assert!(some(left).zip(some(right)).is_some());
        prop_assert!(some(left).zip(none::<i32>()).is_none());
        prop_assert!(none::<i32>().zip(some(right)).is_none());
    }
}

/// Short-circuit law: a None never invokes `map`, `and_then`, or `filter`
/// callbacks and stays None.
#[test]
fn short_circuit_never_invokes_callbacks() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    let start: Option<i32> = none();
    let result = start
        .map(|n| {
            count();
            n
        })
        .and_then(|n| {
            count();
            some(n)
        })
        .filter(|_| {
            count();
            true
        });

    assert!(result.is_none());
    assert_eq!(calls.get(), 0);
}
