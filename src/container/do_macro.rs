//! do_! macro for early-return container sequencing.
//!
//! This module provides the `do_!` macro, which interprets an
//! imperative-looking sequence of container steps as a purely-functional
//! chain with early return: the first failing step short-circuits the whole
//! chain with its own failure value, and later steps never execute.
//!
//! # Syntax
//!
//! ```text
//! do_! {
//!     pattern <= container_expression;  // Bind: extracts the value, or short-circuits
//!     let pattern = expression;         // Pure let binding
//!     container_expression              // Final expression (the overall result)
//! }
//! ```
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//!
//! # Error widening
//!
//! Every bound `Result` step passes through
//! [`widen`](crate::container::result::Result::widen), so steps with
//! different error types accumulate into the chain's union error type via
//! `From`/`Into` conversions, the same way `?` widens errors.

/// A macro interpreting container steps as a short-circuiting sequence.
///
/// Each `pattern <= container;` step evaluates the container: a success
/// resumes the sequence with the unwrapped value bound to `pattern`; a
/// failure (`None` / `Error(e)`) immediately becomes the overall result,
/// carrying the failure value that caused it. Statements after a failing
/// step never run; their expressions are not even evaluated.
///
/// # Examples
///
/// ```rust
/// use dyad::do_;
/// use dyad::container::option::{Option, none, some};
///
/// let sum = do_! {
///     x <= some(5);
///     y <= some(10);
///     let z = x + y;
///     some(z * 2)
/// };
/// assert_eq!(sum, some(30));
///
/// // Short-circuit on the first absent step
/// let sum: Option<i32> = do_! {
///     x <= some(5);
///     y <= none::<i32>();
///     some(x + y)
/// };
/// assert_eq!(sum, none());
/// ```
///
/// With `Result`, the failure value is preserved exactly:
///
/// ```rust
/// use dyad::do_;
/// use dyad::container::result::{Result, error, ok};
///
/// let outcome: Result<i32, &str> = do_! {
///     x <= error::<i32, &str>("broken");
///     y <= ok::<i32, &str>(1);
///     ok(x + y)
/// };
/// assert_eq!(outcome, error("broken"));
/// ```
#[macro_export]
macro_rules! do_ {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    // Case 1: Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    // Case 2: Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |$pattern| {
            $crate::do_!($($rest)+)
        })
    };

    // Case 3: Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |($($pattern)*)| {
            $crate::do_!($($rest)+)
        })
    };

    // Case 4: Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |_| {
            $crate::do_!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 5: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::do_!($($rest)+)
        }
    };

    // Case 6: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::do_!($($rest)+)
        }
    };

    // Case 7: Pure let binding with type annotation
    (let $pattern:ident : $ty:ty = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern: $ty = $expr;
            $crate::do_!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::container::option::{Option, none, some};
    use crate::container::result::{Result, error, ok};

    #[test]
    fn basic_option_bind() {
        let result = do_! {
            x <= some(5);
            y <= some(10);
            some(x + y)
        };
        assert_eq!(result, some(15));
    }

    #[test]
    fn option_short_circuit() {
        let result: Option<i32> = do_! {
            x <= some(5);
            y <= none::<i32>();
            some(x + y)
        };
        assert_eq!(result, none());
    }

    #[test]
    fn result_preserves_failure_value() {
        let result: Result<i32, &str> = do_! {
            x <= error::<i32, &str>("E");
            y <= ok::<i32, &str>(1);
            ok(x + y)
        };
        assert_eq!(result, error("E"));
    }

    #[test]
    fn failed_step_stops_evaluation() {
        let counter = Cell::new(0);
        let spy = &counter;

        let result: Result<i32, &str> = do_! {
            x <= error::<i32, &str>("E");
            y <= {
                spy.set(spy.get() + 1);
                ok::<i32, &str>(1)
            };
            ok(x + y)
        };

        assert_eq!(result, error("E"));
        assert_eq!(counter.get(), 0);
    }
}
