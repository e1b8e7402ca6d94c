//! Result type - success or typed failure.
//!
//! This module provides the `Result<T, E>` type, which represents either a
//! success (`Ok(value)`) or an expected failure (`Error(error)`). It mirrors
//! the [`Option`](crate::container::option::Option) algebra with an error
//! payload replacing emptiness, and adds the failure-channel operations:
//! `map_error`, `map_both`, `swap`, `merge`, predicate filtering with
//! default errors, and a serialization boundary (`hydrate`/`dehydrate`).
//!
//! `Error` is an absorbing state: every transformation on `Error` except
//! `or_else`, `map_error`, `map_both`, `swap`, `fold`, and the
//! unwrap-with-fallback family returns the same error payload unchanged,
//! without invoking its callback.
//!
//! # Examples
//!
//! ```rust
//! use dyad::container::result::{Result, error, ok};
//!
//! let parsed: Result<i32, String> = ok("42")
//!     .and_then(|s: &str| match s.parse::<i32>() {
//!         Ok(n) => ok(n),
//!         Err(cause) => error(cause.to_string()),
//!     });
//! assert_eq!(parsed, ok(42));
//!
//! // Treating the failure as the happy path for one step:
//! let recovered: Result<i32, String> = error::<i32, _>("miss".to_string())
//!     .or_else(|cause| ok(cause.len() as i32));
//! assert_eq!(recovered, ok(4));
//! ```

use core::option::Option as StdOption;
use core::result::Result as StdResult;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::container::context::Context;
use crate::container::option::{Falsy, Option};
use crate::error::{FailedPredicateError, NoValueError, UnhandledException};

/// A success or an expected, typed failure.
///
/// `Result<T, E>` is either `Ok(value)` or `Error(error)`. Expected
/// failures are values: they travel through chains without ever touching
/// the panic machinery. Every operation consumes the receiver and returns
/// a fresh container.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error payload
///
/// # Examples
///
/// ```rust
/// use dyad::container::result::{Result, error, ok};
///
/// let success: Result<i32, String> = ok(42);
/// let failure: Result<i32, String> = error("gone".to_string());
///
/// assert_eq!(success.map(|n| n * 2), ok(84));
/// assert_eq!(failure.map(|n| n * 2), error("gone".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// A success value.
    Ok(T),
    /// An expected failure, carrying its error payload.
    Error(E),
}

/// Creates a successful `Result`.
///
/// # Examples
///
/// ```rust
/// use dyad::container::result::{Result, ok};
///
/// let success: Result<i32, String> = ok(42);
/// assert!(success.is_ok());
/// ```
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Creates a failed `Result`.
///
/// # Examples
///
/// ```rust
/// use dyad::container::result::{Result, error};
///
/// let failure: Result<i32, String> = error("gone".to_string());
/// assert!(failure.is_error());
/// ```
#[inline]
pub const fn error<T, E>(error: E) -> Result<T, E> {
    Result::Error(error)
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert!(ok::<_, String>(42).is_ok());
    /// assert!(!error::<i32, _>("gone").is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert!(error::<i32, _>("gone").is_error());
    /// assert!(!ok::<_, String>(42).is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if this is an `Ok` whose value satisfies the predicate.
    #[inline]
    pub fn is_ok_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Error(_) => false,
        }
    }

    /// Returns `true` if this is an `Error` whose payload satisfies the predicate.
    #[inline]
    pub fn is_error_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Error(error) => predicate(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value; no-op on `Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, String>(21).map(|n| n * 2), ok(42));
    /// assert_eq!(error::<i32, _>("gone").map(|n| n * 2), error("gone"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Applies a function to the error payload; no-op on `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let failure: Result<i32, usize> = error::<i32, _>("gone").map_error(|e| e.len());
    /// assert_eq!(failure, error(4));
    /// assert_eq!(ok::<_, &str>(1).map_error(|e: &str| e.len()), ok(1));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(function(error)),
        }
    }

    /// Transforms whichever channel is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let shouted = ok::<_, String>("fine").map_both(|v| v.to_uppercase(), |e| e);
    /// assert_eq!(shouted, ok("FINE".to_string()));
    ///
    /// let measured = error::<i32, _>("gone").map_both(|v| v, |e: &str| e.len());
    /// assert_eq!(measured, error(4));
    /// ```
    #[inline]
    pub fn map_both<U, F2, S, F>(self, on_ok: S, on_error: F) -> Result<U, F2>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Result::Ok(on_ok(value)),
            Self::Error(error) => Result::Error(on_error(error)),
        }
    }

    /// Chains a container-producing function (flattening bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// fn checked_half(n: i32) -> Result<i32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { error(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(ok(8).and_then(checked_half), ok(4));
    /// assert_eq!(ok(3).and_then(checked_half), error("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// On predicate failure the failing value is packaged into a
    /// [`FailedPredicateError`], converted into the chain's error type.
    /// Use [`filter_or_else`](Self::filter_or_else) to supply a
    /// domain-specific error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    /// use dyad::error::{FailedPredicateError, Tagged};
    ///
    /// let rejected: Result<i32, FailedPredicateError<i32>> =
    ///     ok(5).filter(|n| *n > 10);
    /// let error = rejected.unwrap_error();
    /// assert_eq!(error.tag(), "FailedPredicateError");
    /// assert_eq!(error.into_value(), 5);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<FailedPredicateError<T>>,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Error(E::from(FailedPredicateError::new(value)))
                }
            }
            Self::Error(error) => Self::Error(error),
        }
    }

    /// Keeps the value only if it satisfies the predicate, building the
    /// error from the failing value otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let rejected: Result<i32, String> =
    ///     ok(5).filter_or_else(|n| *n > 10, |n| format!("{n} too small"));
    /// assert_eq!(rejected, error("5 too small".to_string()));
    /// ```
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_unfulfilled: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Error(on_unfulfilled(value))
                }
            }
            Self::Error(error) => Self::Error(error),
        }
    }

    /// Returns this result if `Ok`, otherwise lets the fallback replace the
    /// failure.
    ///
    /// Unlike the `Option` counterpart, the fallback receives the error
    /// value, and may produce a differently-typed error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let recovered: Result<i32, usize> =
    ///     error::<i32, _>("gone").or_else(|e: &str| ok(e.len() as i32));
    /// assert_eq!(recovered, ok(4));
    ///
    /// let kept: Result<i32, usize> = ok::<_, &str>(1).or_else(|_| ok(0));
    /// assert_eq!(kept, ok(1));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, fallback: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> Result<T, E2>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => fallback(error),
        }
    }

    /// Combines two results into a tuple; the leftmost error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, String>(1).zip(ok("a")), ok((1, "a")));
    /// assert_eq!(
    ///     error::<i32, _>("left").zip(error::<i32, _>("right")),
    ///     error("left")
    /// );
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two results with a function; the leftmost error wins.
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Result<U, E>, function: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Ok(left), Result::Ok(right)) => Result::Ok(function(left, right)),
            (Self::Error(left), _) => Result::Error(left),
            (_, Result::Error(right)) => Result::Error(right),
        }
    }

    // =========================================================================
    // Swap / Merge
    // =========================================================================

    /// Swaps the channels: `Ok(v)` becomes `Error(v)` and vice versa.
    ///
    /// Useful when the failure is the happy path for a downstream step,
    /// such as repopulating after a cache miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).swap(), error(1));
    /// assert_eq!(error::<i32, _>("miss").swap(), ok("miss"));
    /// ```
    #[inline]
    pub fn swap(self) -> Result<E, T> {
        match self {
            Self::Ok(value) => Result::Error(value),
            Self::Error(error) => Result::Ok(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the result by applying one of two functions.
    ///
    /// Exactly one branch is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let described = ok::<_, String>(5).fold(
    ///     |n| format!("value: {n}"),
    ///     |e| format!("failure: {e}"),
    /// );
    /// assert_eq!(described, "value: 5");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_ok: S, on_error: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Error` value. Unwrapping the wrong variant is
    /// a defect, not an expected failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    ///
    /// assert_eq!(ok::<_, String>(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic!("called `Result::unwrap()` on an `Error` value"),
        }
    }

    /// Returns the error payload, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error};
    ///
    /// assert_eq!(error::<i32, _>("gone").unwrap_error(), "gone");
    /// ```
    #[inline]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => panic!("called `Result::unwrap_error()` on an `Ok` value"),
            Self::Error(error) => error,
        }
    }

    /// Returns the success value, panicking with the given message on `Error`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Error` value.
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic!("{}", message),
        }
    }

    /// Returns the error payload, panicking with the given message on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Ok` value.
    #[inline]
    pub fn expect_error(self, message: &str) -> E {
        match self {
            Self::Ok(_) => panic!("{}", message),
            Self::Error(error) => error,
        }
    }

    /// Returns the success value or the given fallback.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).unwrap_or_else(|e| e.len() as i32), 1);
    /// assert_eq!(error::<i32, _>("gone").unwrap_or_else(|e| e.len() as i32), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => fallback(error),
        }
    }

    /// Returns the success value or the type's default.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Option`, discarding the error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, String>(5).into_option(), some(5));
    /// assert_eq!(error::<i32, _>("gone").into_option(), none());
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        Option::from_result(self)
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Collects the 0-or-1 success values into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<_, String>(5).to_vec(), vec![5]);
    /// assert_eq!(error::<i32, _>("gone").to_vec(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Ok(value) => vec![value],
            Self::Error(_) => Vec::new(),
        }
    }

    /// Compares two results using injected equality predicates, one per
    /// channel. The derived `PartialEq` is the structural default.
    #[inline]
    pub fn eq_by<F, G>(&self, other: &Self, value_equality: F, error_equality: G) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
        G: FnOnce(&E, &E) -> bool,
    {
        match (self, other) {
            (Self::Ok(left), Self::Ok(right)) => value_equality(left, right),
            (Self::Error(left), Self::Error(right)) => error_equality(left, right),
            _ => false,
        }
    }

    /// Widens the error type into a broader union.
    ///
    /// This is how a chain accumulates failure kinds: each step's concrete
    /// error converts into the chain's union error type, exactly as `?`
    /// widens through `From`. The [`do_!`](crate::do_) macro inserts this
    /// at every bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    /// use dyad::error::NoValueError;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum AppError {
    ///     Missing(NoValueError),
    /// }
    ///
    /// impl From<NoValueError> for AppError {
    ///     fn from(error: NoValueError) -> Self {
    ///         Self::Missing(error)
    ///     }
    /// }
    ///
    /// let narrow: Result<i32, NoValueError> = error(NoValueError::new());
    /// let wide: Result<i32, AppError> = narrow.widen();
    /// assert!(wide.is_error());
    /// ```
    #[inline]
    pub fn widen<E2>(self) -> Result<T, E2>
    where
        E: Into<E2>,
    {
        self.map_error(Into::into)
    }

    // =========================================================================
    // Serialization Boundary
    // =========================================================================

    /// Reconstructs a `Result` from its plain tagged representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ResultRepr, ok};
    ///
    /// let hydrated: Result<i32, String> = Result::hydrate(ResultRepr::Ok { value: 5 });
    /// assert_eq!(hydrated, ok(5));
    /// ```
    #[inline]
    pub fn hydrate(repr: ResultRepr<T, E>) -> Self {
        match repr {
            ResultRepr::Ok { value } => Self::Ok(value),
            ResultRepr::Error { error } => Self::Error(error),
        }
    }

    /// Converts into the plain tagged representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ResultRepr, error};
    ///
    /// let repr = error::<i32, _>("gone").dehydrate();
    /// assert_eq!(repr, ResultRepr::Error { error: "gone" });
    /// ```
    #[inline]
    pub fn dehydrate(self) -> ResultRepr<T, E> {
        match self {
            Self::Ok(value) => ResultRepr::Ok { value },
            Self::Error(error) => ResultRepr::Error { error },
        }
    }
}

impl<T> Result<T, T> {
    /// Collapses a result whose channels carry the same type.
    ///
    /// Typically reached through `swap` plus channel transforms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// assert_eq!(ok::<i32, i32>(1).merge(), 1);
    /// assert_eq!(error::<i32, i32>(2).merge(), 2);
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Self::Ok(value) | Self::Error(value) => value,
        }
    }
}

// =============================================================================
// Factories
// =============================================================================

impl<T> Result<T, NoValueError> {
    /// Converts a nullable value, defaulting the error to [`NoValueError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    /// use dyad::error::Tagged;
    ///
    /// assert_eq!(Result::from_nullable(Some(5)), ok(5));
    /// assert_eq!(
    ///     Result::from_nullable(None::<i32>).unwrap_error().tag(),
    ///     "NoValueError"
    /// );
    /// ```
    #[inline]
    pub fn from_nullable(value: StdOption<T>) -> Self {
        Self::from_nullable_or(value, NoValueError::new)
    }

    /// Converts a value, treating its falsy shape as a [`NoValueError`].
    #[inline]
    pub fn from_falsy(value: T) -> Self
    where
        T: Falsy,
    {
        Self::from_falsy_or(value, NoValueError::new)
    }

    /// Converts an `Option`, defaulting the error to [`NoValueError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    /// use dyad::container::result::{Result, ok};
    ///
    /// assert_eq!(Result::from_option(some(5)), ok(5));
    /// assert!(Result::from_option(none::<i32>()).is_error());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        Self::from_option_or(option, NoValueError::new)
    }
}

impl<T, E> Result<T, E> {
    /// Converts a nullable value, building the error from the thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, error, ok};
    ///
    /// let missing: Result<i32, String> =
    ///     Result::from_nullable_or(None, || "nothing here".to_string());
    /// assert_eq!(missing, error("nothing here".to_string()));
    /// ```
    #[inline]
    pub fn from_nullable_or<F>(value: StdOption<T>, on_nullable: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            StdOption::Some(value) => Self::Ok(value),
            StdOption::None => Self::Error(on_nullable()),
        }
    }

    /// Converts a value, building the error from the thunk on falsy input.
    #[inline]
    pub fn from_falsy_or<F>(value: T, on_falsy: F) -> Self
    where
        T: Falsy,
        F: FnOnce() -> E,
    {
        if value.is_falsy() {
            Self::Error(on_falsy())
        } else {
            Self::Ok(value)
        }
    }

    /// Converts an `Option`, building the error from the thunk on `None`.
    #[inline]
    pub fn from_option_or<F>(option: Option<T>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Option::Some(value) => Self::Ok(value),
            Option::None => Self::Error(on_none()),
        }
    }

    /// Runs a thunk, classifying an unwind with the supplied handler.
    ///
    /// The handler receives the rendered panic message. This is a
    /// sanctioned defect-conversion boundary; see
    /// [`catch`](Result::catch) for the default classification.
    pub fn catch_or<F, G>(thunk: F, on_panic: G) -> Self
    where
        F: FnOnce() -> T,
        G: FnOnce(String) -> E,
    {
        match catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Error(on_panic(crate::error::panic_message(payload.as_ref()))),
        }
    }
}

impl<T> Result<T, UnhandledException> {
    /// Runs a thunk, converting an unwind into an [`UnhandledException`].
    ///
    /// This is a sanctioned defect-conversion boundary: the panic is caught
    /// here and only here, for this specific thunk. Combinators such as
    /// `map` never catch panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    /// use dyad::error::Tagged;
    ///
    /// assert_eq!(Result::catch(|| 42), ok(42));
    ///
    /// let caught = Result::catch(|| -> i32 { panic!("boom") });
    /// let exception = caught.unwrap_error();
    /// assert_eq!(exception.tag(), "UnhandledException");
    /// assert_eq!(exception.message(), "boom");
    /// ```
    pub fn catch<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Error(UnhandledException::from_panic(payload.as_ref())),
        }
    }
}

impl<T> Result<T, FailedPredicateError<T>> {
    /// Curries a predicate into a result constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::Result;
    /// use dyad::error::FailedPredicateError;
    ///
    /// let positive = Result::predicate(|n: &i32| *n > 0);
    /// assert_eq!(positive(5).unwrap(), 5);
    ///
    /// let rejected: Result<i32, FailedPredicateError<i32>> = positive(-5);
    /// assert_eq!(rejected.unwrap_error().into_value(), -5);
    /// ```
    pub fn predicate<P>(predicate: P) -> impl Fn(T) -> Self
    where
        P: Fn(&T) -> bool,
    {
        move |value| {
            if predicate(&value) {
                Self::Ok(value)
            } else {
                Self::Error(FailedPredicateError::new(value))
            }
        }
    }
}

/// Converts a panicking function into a `Result`-returning one.
///
/// # Examples
///
/// ```rust
/// use dyad::container::result::lift;
/// use dyad::error::Tagged;
///
/// let safe_div = lift(|(a, b): (i32, i32)| a / b);
/// assert_eq!(safe_div((10, 2)).unwrap(), 5);
/// assert_eq!(safe_div((10, 0)).unwrap_error().tag(), "UnhandledException");
/// ```
pub fn lift<A, B, F>(function: F) -> impl Fn(A) -> Result<B, UnhandledException>
where
    F: Fn(A) -> B,
{
    move |argument| Result::catch(|| function(argument))
}

/// Converts a panicking function into a `Result`-returning one, classifying
/// the rendered panic message with the supplied handler.
pub fn lift_or<A, B, E, F, G>(function: F, on_panic: G) -> impl Fn(A) -> Result<B, E>
where
    F: Fn(A) -> B,
    G: Fn(String) -> E,
{
    move |argument| Result::catch_or(|| function(argument), |message| on_panic(message))
}

/// Splits an iterable of results into its success and error payloads.
///
/// Order is preserved within each side.
///
/// # Examples
///
/// ```rust
/// use dyad::container::result::{error, ok, partition};
///
/// let (values, errors) = partition([ok(1), error("a"), ok(3), error("b")]);
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors, vec!["a", "b"]);
/// ```
pub fn partition<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Result::Ok(value) => values.push(value),
            Result::Error(error) => errors.push(error),
        }
    }
    (values, errors)
}

// =============================================================================
// Do-notation
// =============================================================================

impl<E> Result<Context, E> {
    /// Starts a do-notation chain with an empty context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    /// use dyad::error::NoValueError;
    ///
    /// let result: Result<i32, NoValueError> = Result::do_()
    ///     .bind("a", |_| ok(2))
    ///     .bind("b", |context| ok(context.value::<i32>("a") + 3))
    ///     .map(|context| context.value::<i32>("a") + context.value::<i32>("b"));
    /// assert_eq!(result, ok(7));
    /// ```
    #[must_use]
    pub fn do_() -> Self {
        Self::Ok(Context::new())
    }

    /// Binds the result of a container-producing step under `key`.
    ///
    /// On `Ok`, the accumulated context is extended with one new entry
    /// (a fresh record; earlier snapshots are untouched). An `Error`
    /// result short-circuits the whole chain with that payload. A step
    /// whose error type is narrower than the chain's converts via
    /// [`widen`](Result::widen) at the callback site.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn bind<V, F>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(&Context) -> Result<V, E>,
    {
        self.and_then(|context| match function(&context) {
            Result::Ok(value) => Result::Ok(context.with(key, value)),
            Result::Error(error) => Result::Error(error),
        })
    }

    /// Binds a plain value under `key`; never short-circuits.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn let_<V, F>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(&Context) -> V,
    {
        self.map(|context| {
            let value = function(&context);
            context.with(key, value)
        })
    }
}

impl<T: Send + Sync + 'static, E> Result<T, E> {
    /// Wraps the contained value as the first entry of a fresh context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::result::{Result, ok};
    ///
    /// let result: Result<i32, String> = ok(10)
    ///     .bind_to("initial")
    ///     .map(|context| context.value::<i32>("initial") * 2);
    /// assert_eq!(result, ok(20));
    /// ```
    pub fn bind_to(self, key: &'static str) -> Result<Context, E> {
        self.map(|value| Context::new().with(key, value))
    }
}

// =============================================================================
// Plain Tagged Representation
// =============================================================================

/// The plain tagged shape of a `Result`, for serialization boundaries.
///
/// With the `serde` feature enabled this serializes as an internally
/// tagged object: `{ "_tag": "Ok", "value": ... }` or
/// `{ "_tag": "Error", "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "_tag"))]
pub enum ResultRepr<T, E> {
    /// Success shape.
    Ok {
        /// The success payload.
        value: T,
    },
    /// Failure shape.
    Error {
        /// The error payload.
        error: E,
    },
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            StdResult::Ok(value) => Self::Ok(value),
            StdResult::Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => StdResult::Ok(value),
            Result::Error(error) => StdResult::Err(error),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Iterates over the 0-or-1 success values.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_nullable().into_iter()
    }
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<i32, i32>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_and_error_construction() {
        assert!(ok::<_, String>(42).is_ok());
        assert!(error::<i32, _>("gone").is_error());
    }

    #[rstest]
    fn swap_roundtrip() {
        let swapped: Result<&str, i32> = ok::<_, &str>(1).swap();
        assert_eq!(swapped, error(1));
        assert_eq!(swapped.swap(), ok(1));
    }

    #[rstest]
    fn std_conversion_roundtrip() {
        let through: StdResult<i32, String> = ok(5).into();
        assert_eq!(Result::from(through), ok(5));
    }
}
