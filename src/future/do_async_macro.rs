//! do_async! macro for early-return async container sequencing.
//!
//! This module provides the `do_async!` macro, the asynchronous twin of
//! [`do_!`](crate::do_): each bound operand is a deferred container, and
//! the interpreter awaits it before inspecting success or failure. A
//! failing step short-circuits the whole chain with its own failure value;
//! later steps are never started.
//!
//! # Syntax
//!
//! ```text
//! do_async! {
//!     pattern <= async_container_expression;  // Bind: awaits, then extracts or short-circuits
//!     let pattern = expression;               // Pure let binding
//!     async_container_expression              // Final expression (the overall result)
//! }
//! ```
//!
//! The whole expression is itself a deferred container: nothing runs until
//! it is awaited.

/// A macro interpreting deferred container steps as a short-circuiting
/// sequence.
///
/// Mirrors [`do_!`](crate::do_) for `AsyncOption`/`AsyncResult` operands.
/// Each bound `Result` step passes through `widen`, so steps with
/// different error types accumulate into the chain's union error type.
///
/// # Examples
///
/// ```rust,ignore
/// use dyad::do_async;
/// use dyad::future::AsyncResult;
///
/// #[tokio::main]
/// async fn main() {
///     let sum = do_async! {
///         x <= AsyncResult::<_, String>::ok(5);
///         y <= AsyncResult::<_, String>::ok(10);
///         let z = x + y;
///         AsyncResult::<_, String>::ok(z * 2)
///     };
///     assert_eq!(sum.await.unwrap(), 30);
/// }
/// ```
#[macro_export]
macro_rules! do_async {
    // Terminal case: single expression (must be a deferred container)
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern: `identifier <= container; rest`
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |$pattern| {
            $crate::do_async!($($rest)+)
        })
    };

    // Bind with tuple pattern: `(pattern1, pattern2) <= container; rest`
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |($($pattern)*)| {
            $crate::do_async!($($rest)+)
        })
    };

    // Bind with wildcard pattern: `_ <= container; rest`
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.widen().and_then(move |_| {
            $crate::do_async!($($rest)+)
        })
    };

    // Pure let binding with identifier: `let identifier = expr; rest`
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::do_async!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern: `let (a, b) = expr; rest`
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::do_async!($($rest)+)
        }
    };

    // Pure let binding with type annotation: `let identifier: Type = expr; rest`
    (let $pattern:ident : $ty:ty = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern: $ty = $expr;
            $crate::do_async!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::future::{AsyncOption, AsyncResult};

    #[tokio::test]
    async fn single_bind() {
        let result = do_async! {
            x <= AsyncResult::<_, String>::ok(5);
            AsyncResult::<_, String>::ok(x * 2)
        };
        assert_eq!(result.await.unwrap(), 10);
    }

    #[tokio::test]
    async fn multiple_binds_with_let() {
        let result = do_async! {
            x <= AsyncResult::<_, String>::ok(5);
            let doubled = x * 2;
            y <= AsyncResult::<_, String>::ok(10);
            AsyncResult::<_, String>::ok(doubled + y)
        };
        assert_eq!(result.await.unwrap(), 20);
    }

    #[tokio::test]
    async fn option_short_circuit() {
        let result = do_async! {
            x <= AsyncOption::some(5);
            y <= AsyncOption::<i32>::none();
            AsyncOption::some(x + y)
        };
        assert!(result.await.is_none());
    }
}
