//! `AsyncOption` - a deferred optional value.
//!
//! The `AsyncOption` type represents an asynchronous computation that
//! eventually produces an [`Option`]. Nothing runs until the container is
//! awaited: every chained operation wraps the predecessor in a new
//! deferred task, and the underlying future always resolves to an
//! `Option` rather than rejecting.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dyad::future::AsyncOption;
//!
//! #[tokio::main]
//! async fn main() {
//!     let doubled = AsyncOption::some(21).map(|n| n * 2);
//!     assert_eq!(doubled.await.unwrap(), 42);
//! }
//! ```
//!
//! # Deferral
//!
//! ```rust,ignore
//! use dyad::future::AsyncOption;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[tokio::main]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let flag = executed.clone();
//!
//!     let deferred = AsyncOption::new(move || async move {
//!         flag.store(true, Ordering::SeqCst);
//!         dyad::container::option::some(42)
//!     });
//!
//!     // Not executed yet
//!     assert!(!executed.load(Ordering::SeqCst));
//!
//!     let value = deferred.await;
//!     assert!(executed.load(Ordering::SeqCst));
//!     assert_eq!(value.unwrap(), 42);
//! }
//! ```

use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;
use std::pin::Pin;

use futures::FutureExt;

use crate::container::context::Context;
use crate::container::option::Option;

/// A deferred, never-rejecting computation of an [`Option`].
///
/// `AsyncOption<T>` owns its deferred task exclusively; chaining produces
/// a new deferred computation wrapping the previous one, and no work starts
/// until the container is awaited.
///
/// # Type Parameters
///
/// - `T`: The type of the value eventually produced.
pub struct AsyncOption<T> {
    /// The wrapped deferred task producing the `Option`.
    task: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Option<T>> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Creates an `AsyncOption` from an async closure.
    ///
    /// The closure will not be invoked until the container is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dyad::container::option::some;
    /// use dyad::future::AsyncOption;
    ///
    /// let deferred = AsyncOption::new(|| async { some(42) });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            task: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates an `AsyncOption` from an existing future of an `Option`.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            task: Box::new(move || Box::pin(future)),
        }
    }

    /// Wraps a present value in a deferred container.
    pub fn some(value: T) -> Self {
        Self::from_option(Option::Some(value))
    }

    /// Creates a deferred empty container.
    #[must_use]
    pub fn none() -> Self {
        Self::from_option(Option::None)
    }

    /// Lifts an already-computed `Option` into the deferred world.
    pub fn from_option(option: Option<T>) -> Self {
        Self::new(move || async move { option })
    }

    /// Converts a fallible future, routing its error variant to `None`.
    ///
    /// The error payload is discarded; when it matters, use
    /// [`AsyncResult::try_future`](crate::future::AsyncResult::try_future)
    /// instead.
    pub fn try_future<Fut, X>(future: Fut) -> Self
    where
        Fut: Future<Output = core::result::Result<T, X>> + Send + 'static,
        X: Send + 'static,
    {
        Self::new(move || async move {
            match future.await {
                Ok(value) => Option::Some(value),
                Err(_) => Option::None,
            }
        })
    }

    /// Runs an async thunk, converting an unwind into `None`.
    ///
    /// This is a sanctioned defect-conversion boundary: the panic is caught
    /// here and only here, for this specific thunk. Combinators such as
    /// `map` never catch panics.
    pub fn catch<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::new(move || async move {
            match AssertUnwindSafe(action()).catch_unwind().await {
                Ok(value) => Option::Some(value),
                Err(_) => Option::None,
            }
        })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Executes the deferred task and returns the settled `Option`.
    ///
    /// Equivalent to awaiting the container directly.
    pub async fn run(self) -> Option<T> {
        (self.task)().await
    }

    /// Executes and unwraps, panicking on `None`.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles on `None`.
    pub async fn unwrap(self) -> T {
        self.run().await.unwrap()
    }

    /// Executes and unwraps with a lazily-computed fallback.
    pub async fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T + Send,
    {
        self.run().await.unwrap_or_else(fallback)
    }

    /// Executes and eliminates with one of two functions.
    pub async fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U + Send,
        N: FnOnce() -> U + Send,
    {
        self.run().await.fold(on_some, on_none)
    }
}

impl<T: Send + 'static> IntoFuture for AsyncOption<T> {
    type Output = Option<T>;
    type IntoFuture = Pin<Box<dyn Future<Output = Option<T>> + Send>>;

    /// Starts the deferred task; this is the only suspension trigger.
    fn into_future(self) -> Self::IntoFuture {
        (self.task)()
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<T: Send + 'static> AsyncOption<T> {
    /// Applies a function to the eventual value, if any.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dyad::future::AsyncOption;
    ///
    /// let doubled = AsyncOption::some(21).map(|n| n * 2);
    /// assert_eq!(doubled.await.unwrap(), 42);
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOption::new(move || async move { self.run().await.map(function) })
    }

    /// Chains a deferred-container-producing function (flattening bind).
    ///
    /// The next step starts only after this one settles on `Some`; a
    /// `None` short-circuits without invoking the function.
    pub fn and_then<U, F>(self, function: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncOption<U> + Send + 'static,
    {
        AsyncOption::new(move || async move {
            match self.run().await {
                Option::Some(value) => function(value).run().await,
                Option::None => Option::None,
            }
        })
    }

    /// Chains a synchronous container-producing function.
    ///
    /// Like [`and_then`](Self::and_then) for steps that need no further
    /// suspension of their own.
    pub fn and_then_sync<U, F>(self, function: F) -> AsyncOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Option<U> + Send + 'static,
    {
        AsyncOption::new(move || async move { self.run().await.and_then(function) })
    }

    /// Keeps the eventual value only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::new(move || async move { self.run().await.filter(predicate) })
    }

    /// Falls back to another deferred container when this one settles on
    /// `None`. The fallback thunk is not invoked on `Some`.
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::new(move || async move {
            match self.run().await {
                Option::Some(value) => Option::Some(value),
                Option::None => fallback().run().await,
            }
        })
    }

    /// Combines two deferred options into a tuple, running both tasks
    /// concurrently; `None` if either settles empty.
    pub fn zip<U>(self, other: AsyncOption<U>) -> AsyncOption<(T, U)>
    where
        U: Send + 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two deferred options with a function, running both tasks
    /// concurrently.
    pub fn zip_with<U, V, F>(self, other: AsyncOption<U>, function: F) -> AsyncOption<V>
    where
        U: Send + 'static,
        V: Send + 'static,
        F: FnOnce(T, U) -> V + Send + 'static,
    {
        AsyncOption::new(move || async move {
            let (left, right) = tokio::join!(self.run(), other.run());
            left.zip_with(right, function)
        })
    }

    /// Identity; exists so [`do_async!`](crate::do_async) chains treat both
    /// container families uniformly.
    #[must_use]
    pub fn widen(self) -> Self {
        self
    }
}

// =============================================================================
// Do-notation
// =============================================================================

impl AsyncOption<Context> {
    /// Starts an async do-notation chain with an empty context.
    #[must_use]
    pub fn do_() -> Self {
        Self::from_option(Option::Some(Context::new()))
    }

    /// Binds the result of a deferred-container-producing step under `key`.
    ///
    /// The callback receives its own snapshot of the accumulated context;
    /// on `Some`, a fresh record extended with one entry flows on, and a
    /// `None` short-circuits the whole chain.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn bind<V, F>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(Context) -> AsyncOption<V> + Send + 'static,
    {
        Self::new(move || async move {
            match self.run().await {
                Option::Some(context) => match function(context.clone()).run().await {
                    Option::Some(value) => Option::Some(context.with(key, value)),
                    Option::None => Option::None,
                },
                Option::None => Option::None,
            }
        })
    }

    /// Binds the awaited result of a plain async step under `key`; never
    /// short-circuits.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn let_<V, F, Fut>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(Context) -> Fut + Send + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Self::new(move || async move {
            match self.run().await {
                Option::Some(context) => {
                    let value = function(context.clone()).await;
                    Option::Some(context.with(key, value))
                }
                Option::None => Option::None,
            }
        })
    }
}

impl<T: Send + Sync + 'static> AsyncOption<T> {
    /// Wraps the eventual value as the first entry of a fresh context.
    pub fn bind_to(self, key: &'static str) -> AsyncOption<Context> {
        self.map(move |value| Context::new().with(key, value))
    }
}

// =============================================================================
// Joins
// =============================================================================

/// Settles every deferred option concurrently, collecting the `Some`
/// payloads in input order.
///
/// # Examples
///
/// ```rust,ignore
/// use dyad::future::{AsyncOption, values};
///
/// let collected = values(vec![
///     AsyncOption::some(1),
///     AsyncOption::none(),
///     AsyncOption::some(3),
/// ]);
/// assert_eq!(collected.await.unwrap(), vec![1, 3]);
/// ```
pub fn values<T>(options: Vec<AsyncOption<T>>) -> AsyncOption<Vec<T>>
where
    T: Send + 'static,
{
    AsyncOption::new(move || async move {
        let settled = futures::future::join_all(options.into_iter().map(AsyncOption::run)).await;
        Option::Some(crate::container::option::values(settled))
    })
}

/// Settles every deferred option concurrently, returning the first `Some`
/// in input order, or `None` if all settle empty.
pub fn first_some_of<T>(options: Vec<AsyncOption<T>>) -> AsyncOption<T>
where
    T: Send + 'static,
{
    AsyncOption::new(move || async move {
        let settled = futures::future::join_all(options.into_iter().map(AsyncOption::run)).await;
        crate::container::option::first_some_of(settled)
    })
}
