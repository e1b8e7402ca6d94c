//! Option type - an optional value.
//!
//! This module provides the `Option<T>` type, which represents a value that
//! is either present (`Some(value)`) or absent (`None`). Unlike the standard
//! library's namesake it participates in this crate's container algebra:
//! lazily-evaluated fallbacks, injectable equality, predicate factories,
//! panic-catching conversion boundaries, and the do-notation protocol.
//!
//! `None` is an absorbing state: every transformation on `None` except
//! `or_else`, `fold`, and the unwrap-with-fallback family returns `None`
//! without invoking its callback.
//!
//! # Examples
//!
//! ```rust
//! use dyad::container::option::{Option, none, some};
//!
//! // Creating options
//! let present = some(42);
//! let absent: Option<i32> = none();
//!
//! // Pattern matching
//! match present {
//!     Option::Some(n) => println!("Got value: {}", n),
//!     Option::None => println!("Nothing"),
//! }
//!
//! // Using fold to handle both cases
//! let described = absent.fold(
//!     |n| format!("value: {}", n),
//!     || "no value".to_string(),
//! );
//! assert_eq!(described, "no value");
//! ```

use core::option::Option as StdOption;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::container::context::Context;
use crate::container::result::Result;

/// An optional value.
///
/// `Option<T>` is either `Some(value)` or `None`. Every operation consumes
/// the receiver and returns a fresh container; nothing is ever mutated in
/// place.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use dyad::container::option::some;
///
/// let doubled = some(21).map(|n| n * 2);
/// assert_eq!(doubled.unwrap(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// A present value.
    Some(T),
    /// The absence of a value. Carries no payload.
    None,
}

/// Creates an `Option` holding the given value.
///
/// # Examples
///
/// ```rust
/// use dyad::container::option::some;
///
/// assert!(some(5).is_some());
/// ```
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Creates an empty `Option`.
///
/// # Examples
///
/// ```rust
/// use dyad::container::option::{Option, none};
///
/// let absent: Option<i32> = none();
/// assert!(absent.is_none());
/// ```
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}

impl<T> Option<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert!(some(42).is_some());
    /// assert!(!none::<i32>().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert!(none::<i32>().is_none());
    /// assert!(!some(42).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is a `Some` whose value satisfies the predicate.
    ///
    /// `None` never satisfies any predicate; the predicate is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert!(some(5).is_some_and(|n| n > 3));
    /// assert!(!some(2).is_some_and(|n| n > 3));
    /// assert!(!none::<i32>().is_some_and(|n| n > 3));
    /// ```
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// `None` is returned unchanged and the function is not invoked.
    /// A function returning a container belongs in [`and_then`](Self::and_then);
    /// a function returning a nullable value belongs in
    /// [`map_nullable`](Self::map_nullable).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(21).map(|n| n * 2), some(42));
    /// assert_eq!(none::<i32>().map(|n| n * 2), none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Applies a nullable-producing function, flattening its result.
    ///
    /// A transform whose result may be absent can never produce a nested
    /// container this way: `Some(value)` maps to `Some(u)` when the function
    /// yields a value and to `None` when it yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// let parsed = some("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, some(42));
    ///
    /// let unparsable = some("x").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(unparsable, none());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> StdOption<U>,
    {
        match self {
            Self::Some(value) => Option::from_nullable(function(value)),
            Self::None => Option::None,
        }
    }

    /// Chains a container-producing function (flattening bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    ///
    /// fn half(n: i32) -> Option<i32> {
    ///     if n % 2 == 0 { some(n / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half), some(4));
    /// assert_eq!(some(3).and_then(half), none());
    /// assert_eq!(none::<i32>().and_then(half), none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(4).filter(|n| n % 2 == 0), some(4));
    /// assert_eq!(some(3).filter(|n| n % 2 == 0), none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns this option if `Some`, otherwise evaluates the fallback.
    ///
    /// The fallback thunk is **not** invoked on `Some`; laziness here is
    /// observable and relied upon by callers with side-effecting fallbacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(1).or_else(|| some(2)), some(1));
    /// assert_eq!(none::<i32>().or_else(|| some(2)), some(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => fallback(),
        }
    }

    /// Combines two options into a tuple; `None` if either is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(1).zip(some("a")), some((1, "a")));
    /// assert_eq!(some(1).zip(none::<&str>()), none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two options with a function; `None` if either is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(2).zip_with(some(3), |a, b| a * b), some(6));
    /// assert_eq!(none::<i32>().zip_with(some(3), |a, b| a * b), none());
    /// ```
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Option<U>, function: F) -> Option<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some(function(left, right)),
            _ => Option::None,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the option by applying one of two functions.
    ///
    /// Exactly one branch is invoked. This is case analysis as a function;
    /// `match` over the public variants works just as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// let described = some(5).fold(|n| format!("got {n}"), || "empty".to_string());
    /// assert_eq!(described, "got 5");
    ///
    /// let described = none::<i32>().fold(|n| format!("got {n}"), || "empty".to_string());
    /// assert_eq!(described, "empty");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value. Unwrapping the wrong variant is a
    /// defect, not an expected failure; prefer the fallback-taking variants
    /// when absence is a legitimate outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::some;
    ///
    /// assert_eq!(some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Option::unwrap()` on a `None` value"),
        }
    }

    /// Returns the contained value, panicking with the given message on `None`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::some;
    ///
    /// assert_eq!(some(42).expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", message),
        }
    }

    /// Returns the contained value or the given fallback.
    ///
    /// Arguments passed here are eagerly evaluated; for a lazily-evaluated
    /// fallback use [`unwrap_or_else`](Self::unwrap_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(1).unwrap_or(0), 1);
    /// assert_eq!(none::<i32>().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or computes one from the thunk.
    ///
    /// The thunk is not invoked on `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(1).unwrap_or_else(|| 0), 1);
    /// assert_eq!(none::<i32>().unwrap_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Returns the contained value or the type's default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(7).unwrap_or_default(), 7);
    /// assert_eq!(none::<i32>().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Bridges to the standard library's nullable shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(5).into_nullable(), Some(5));
    /// assert_eq!(none::<i32>().into_nullable(), None);
    /// ```
    #[inline]
    pub fn into_nullable(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::None => StdOption::None,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::some;
    ///
    /// let text = some("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length.unwrap(), 5);
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Iterates over the 0-or-1 contained values by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::some;
    ///
    /// let value = some(5);
    /// assert_eq!(value.iter().copied().collect::<Vec<_>>(), vec![5]);
    /// ```
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().into_nullable().into_iter()
    }

    /// Collects the 0-or-1 contained values into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(5).to_vec(), vec![5]);
    /// assert_eq!(none::<i32>().to_vec(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Some(value) => vec![value],
            Self::None => Vec::new(),
        }
    }

    /// Compares two options using an injected equality predicate.
    ///
    /// Two `None`s are equal; a `Some` and a `None` never are. The
    /// derived `PartialEq` is the structural default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// let left = some(1.0_f64);
    /// let right = some(1.0_f64 + 1e-12);
    /// assert!(left.eq_by(&right, |a, b| (a - b).abs() < 1e-9));
    /// assert!(none::<f64>().eq_by(&none(), |_, _| false));
    /// ```
    #[inline]
    pub fn eq_by<F>(&self, other: &Self, equality: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => equality(left, right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }

    /// Identity; exists so [`do_!`](crate::do_) chains treat both container
    /// families uniformly (its `Result` counterpart widens the error type).
    #[inline]
    pub fn widen(self) -> Self {
        self
    }
}

// =============================================================================
// Factories
// =============================================================================

impl<T> Option<T> {
    /// Converts a nullable value: `Some`/`None` mirror the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    ///
    /// assert_eq!(Option::from_nullable(Some(5)), some(5));
    /// assert_eq!(Option::from_nullable(None::<i32>), none());
    /// ```
    #[inline]
    pub fn from_nullable(value: StdOption<T>) -> Self {
        match value {
            StdOption::Some(value) => Self::Some(value),
            StdOption::None => Self::None,
        }
    }

    /// Converts a value, treating its falsy shape as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    ///
    /// assert_eq!(Option::from_falsy(3), some(3));
    /// assert_eq!(Option::from_falsy(0), none());
    /// assert_eq!(Option::from_falsy(""), none());
    /// ```
    #[inline]
    pub fn from_falsy(value: T) -> Self
    where
        T: Falsy,
    {
        if value.is_falsy() {
            Self::None
        } else {
            Self::Some(value)
        }
    }

    /// Converts a `Result`, discarding the error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    /// use dyad::container::result::{error, ok};
    ///
    /// assert_eq!(Option::from_result(ok::<_, String>(5)), some(5));
    /// assert_eq!(Option::from_result(error::<i32, _>("gone")), none());
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Self::Some(value),
            Result::Error(_) => Self::None,
        }
    }

    /// Runs a thunk, converting an unwind into `None`.
    ///
    /// This is a sanctioned defect-conversion boundary: the panic is caught
    /// here and only here, for this specific thunk. Combinators such as
    /// `map` never catch panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    ///
    /// assert_eq!(Option::catch(|| 42), some(42));
    /// assert_eq!(Option::catch(|| -> i32 { panic!("boom") }), none());
    /// ```
    pub fn catch<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Some(value),
            Err(_) => Self::None,
        }
    }

    /// Curries a predicate into an option constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, none, some};
    ///
    /// let positive = Option::predicate(|n: &i32| *n > 0);
    /// assert_eq!(positive(5), some(5));
    /// assert_eq!(positive(-5), none());
    /// ```
    pub fn predicate<P>(predicate: P) -> impl Fn(T) -> Self
    where
        P: Fn(&T) -> bool,
    {
        move |value| {
            if predicate(&value) {
                Self::Some(value)
            } else {
                Self::None
            }
        }
    }
}

/// Returns the first `Some` of an iterable, or `None` if there is none.
///
/// # Examples
///
/// ```rust
/// use dyad::container::option::{first_some_of, none, some};
///
/// assert_eq!(first_some_of([none(), some(2), some(3)]), some(2));
/// assert_eq!(first_some_of([none::<i32>(), none()]), none());
/// ```
pub fn first_some_of<T, I>(options: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    for option in options {
        if option.is_some() {
            return option;
        }
    }
    Option::None
}

/// Collects the `Some` payloads of an iterable, order-preserving.
///
/// # Examples
///
/// ```rust
/// use dyad::container::option::{none, some, values};
///
/// assert_eq!(values([some(1), none(), some(3)]), vec![1, 3]);
/// ```
pub fn values<T, I>(options: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    options
        .into_iter()
        .filter_map(Option::into_nullable)
        .collect()
}

// =============================================================================
// Do-notation
// =============================================================================

impl Option<Context> {
    /// Starts a do-notation chain with an empty context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, some};
    ///
    /// let result = Option::do_()
    ///     .bind("a", |_| some(2))
    ///     .bind("b", |context| some(context.value::<i32>("a") + 3))
    ///     .map(|context| context.value::<i32>("a") + context.value::<i32>("b"));
    /// assert_eq!(result.unwrap(), 7);
    /// ```
    #[must_use]
    pub fn do_() -> Self {
        Self::Some(Context::new())
    }

    /// Binds the result of a container-producing step under `key`.
    ///
    /// On `Some`, the accumulated context is extended with one new entry
    /// (a fresh record; earlier snapshots are untouched). A `None` result
    /// short-circuits the whole chain.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn bind<V, F>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(&Context) -> Option<V>,
    {
        self.and_then(|context| match function(&context) {
            Option::Some(value) => Option::Some(context.with(key, value)),
            Option::None => Option::None,
        })
    }

    /// Binds a plain value under `key`; never short-circuits.
    ///
    /// A computation whose result may be absent belongs in
    /// [`bind`](Self::bind) combined with
    /// [`Option::from_nullable`](Option::from_nullable).
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{Option, some};
    ///
    /// let result = Option::do_()
    ///     .bind("n", |_| some(2))
    ///     .let_("doubled", |context| context.value::<i32>("n") * 2)
    ///     .map(|context| context.value::<i32>("doubled"));
    /// assert_eq!(result.unwrap(), 4);
    /// ```
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

impl<T: Send + Sync + 'static> Option<T> {
    /// Wraps the contained value as the first entry of a fresh context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::some;
    ///
    /// let result = some(10)
    ///     .bind_to("initial")
    ///     .map(|context| context.value::<i32>("initial") * 2);
    /// assert_eq!(result.unwrap(), 20);
    /// ```
    pub fn bind_to(self, key: &'static str) -> Option<Context> {
        self.map(|value| Context::new().with(key, value))
    }
}

// =============================================================================
// Falsy
// =============================================================================

/// Types with a distinguished "falsy" shape.
///
/// Used by [`Option::from_falsy`] and `Result::from_falsy` to decide whether
/// a value counts as absent: `false`, numeric zero, NaN, and empty strings
/// are falsy.
pub trait Falsy {
    /// Returns `true` if this value counts as absent.
    fn is_falsy(&self) -> bool;
}

impl Falsy for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! impl_falsy_for_integers {
    ($($type:ty),* $(,)?) => {
        $(
            impl Falsy for $type {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_for_floats {
    ($($type:ty),* $(,)?) => {
        $(
            impl Falsy for $type {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_falsy_for_floats!(f32, f64);

impl Falsy for &str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Option<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.into_nullable()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    /// Iterates over the 0-or-1 contained values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::option::{none, some};
    ///
    /// assert_eq!(some(5).into_iter().collect::<Vec<_>>(), vec![5]);
    /// assert_eq!(none::<i32>().into_iter().count(), 0);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_nullable().into_iter()
    }
}

static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Option<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn some_and_none_construction() {
        assert!(some(42).is_some());
        assert!(none::<i32>().is_none());
    }

    #[rstest]
    fn or_else_is_lazy_on_some() {
        let result = some(1).or_else(|| panic!("fallback must not run"));
        assert_eq!(result, some(1));
    }

    #[rstest]
    fn nullable_roundtrip() {
        let through: StdOption<i32> = some(5).into_nullable();
        assert_eq!(Option::from_nullable(through), some(5));
    }
}
