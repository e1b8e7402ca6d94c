//! `AsyncResult` - a deferred success-or-failure computation.
//!
//! The `AsyncResult` type represents an asynchronous computation that
//! eventually produces a [`Result`]. Nothing runs until the container is
//! awaited; the underlying future always resolves to a `Result`, it never
//! rejects. Fallible futures enter through [`AsyncResult::try_future`],
//! which routes their error into the expected-failure channel.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dyad::future::AsyncResult;
//!
//! #[tokio::main]
//! async fn main() {
//!     let doubled = AsyncResult::<_, String>::ok(21).map(|n| n * 2);
//!     assert_eq!(doubled.await.unwrap(), 42);
//! }
//! ```
//!
//! # Chain ordering
//!
//! Chained steps execute strictly in order: a step's task starts only
//! after its predecessor settles. Only the explicit joins (`zip`,
//! `zip_with`) run tasks concurrently.

use core::result::Result as StdResult;
use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;
use std::pin::Pin;

use futures::FutureExt;

use crate::container::context::Context;
use crate::container::result::Result;
use crate::error::{FailedPredicateError, UnhandledException};

/// A deferred, never-rejecting computation of a [`Result`].
///
/// `AsyncResult<T, E>` owns its deferred task exclusively; chaining
/// produces a new deferred computation wrapping the previous one, and no
/// work starts until the container is awaited.
///
/// # Type Parameters
///
/// - `T`: The type of the success value eventually produced.
/// - `E`: The type of the error payload.
pub struct AsyncResult<T, E> {
    /// The wrapped deferred task producing the `Result`.
    task: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Result<T, E>> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncResult<T, E> {
    /// Creates an `AsyncResult` from an async closure.
    ///
    /// The closure will not be invoked until the container is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dyad::container::result::ok;
    /// use dyad::future::AsyncResult;
    ///
    /// let deferred = AsyncResult::<i32, String>::new(|| async { ok(42) });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            task: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates an `AsyncResult` from an existing future of a `Result`.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            task: Box::new(move || Box::pin(future)),
        }
    }

    /// Wraps a success value in a deferred container.
    pub fn ok(value: T) -> Self {
        Self::from_result(Result::Ok(value))
    }

    /// Wraps an error payload in a deferred container.
    pub fn error(error: E) -> Self {
        Self::from_result(Result::Error(error))
    }

    /// Lifts an already-computed `Result` into the deferred world.
    pub fn from_result(result: Result<T, E>) -> Self {
        Self::new(move || async move { result })
    }

    /// Converts a fallible future, classifying its error with the handler.
    ///
    /// See [`try_future`](AsyncResult::try_future) for the default
    /// classification.
    pub fn try_future_or<Fut, X, G>(future: Fut, classify: G) -> Self
    where
        Fut: Future<Output = StdResult<T, X>> + Send + 'static,
        X: Send + 'static,
        G: FnOnce(X) -> E + Send + 'static,
    {
        Self::new(move || async move {
            match future.await {
                StdResult::Ok(value) => Result::Ok(value),
                StdResult::Err(cause) => Result::Error(classify(cause)),
            }
        })
    }

    /// Runs an async thunk, classifying an unwind with the handler.
    ///
    /// The handler receives the rendered panic message. This is a
    /// sanctioned defect-conversion boundary; see
    /// [`catch`](AsyncResult::catch) for the default classification.
    pub fn catch_or<F, Fut, G>(action: F, on_panic: G) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        G: FnOnce(String) -> E + Send + 'static,
    {
        Self::new(move || async move {
            match AssertUnwindSafe(action()).catch_unwind().await {
                Ok(value) => Result::Ok(value),
                Err(payload) => {
                    Result::Error(on_panic(crate::error::panic_message(payload.as_ref())))
                }
            }
        })
    }
}

impl<T: Send + 'static> AsyncResult<T, UnhandledException> {
    /// Converts a fallible future, wrapping its error as an
    /// [`UnhandledException`].
    ///
    /// This is the rejection boundary: a future that would "reject" with
    /// an error value instead settles on the expected-failure channel.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dyad::error::Tagged;
    /// use dyad::future::AsyncResult;
    ///
    /// let rejected = AsyncResult::try_future(async { "x".parse::<i32>() });
    /// assert_eq!(rejected.await.unwrap_error().tag(), "UnhandledException");
    /// ```
    pub fn try_future<Fut, X>(future: Fut) -> Self
    where
        Fut: Future<Output = StdResult<T, X>> + Send + 'static,
        X: std::error::Error + Send + Sync + 'static,
    {
        Self::try_future_or(future, UnhandledException::from_error)
    }

    /// Runs an async thunk, converting an unwind into an
    /// [`UnhandledException`].
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
                Ok(value) => Result::Ok(value),
                Err(payload) => Result::Error(UnhandledException::from_panic(payload.as_ref())),
            }
        })
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncResult<T, E> {
    /// Executes the deferred task and returns the settled `Result`.
    ///
    /// Equivalent to awaiting the container directly.
    pub async fn run(self) -> Result<T, E> {
        (self.task)().await
    }

    /// Executes and unwraps the success value.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles on `Error`.
    pub async fn unwrap(self) -> T {
        self.run().await.unwrap()
    }

    /// Executes and unwraps the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the computation settles on `Ok`.
    pub async fn unwrap_error(self) -> E {
        self.run().await.unwrap_error()
    }

    /// Executes and unwraps with a fallback computed from the error.
    pub async fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T + Send,
    {
        self.run().await.unwrap_or_else(fallback)
    }

    /// Executes and eliminates with one of two functions.
    pub async fn fold<U, S, F>(self, on_ok: S, on_error: F) -> U
    where
        S: FnOnce(T) -> U + Send,
        F: FnOnce(E) -> U + Send,
    {
        self.run().await.fold(on_ok, on_error)
    }
}

impl<T: Send + 'static, E: Send + 'static> IntoFuture for AsyncResult<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

    /// Starts the deferred task; this is the only suspension trigger.
    fn into_future(self) -> Self::IntoFuture {
        (self.task)()
    }
}

// =============================================================================
// Transformations
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncResult<T, E> {
    /// Applies a function to the eventual success value; no-op on `Error`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dyad::future::AsyncResult;
    ///
    /// let doubled = AsyncResult::<_, String>::ok(21).map(|n| n * 2);
    /// assert_eq!(doubled.await.unwrap(), 42);
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncResult::new(move || async move { self.run().await.map(function) })
    }

    /// Applies a function to the eventual error payload; no-op on `Ok`.
    pub fn map_error<F2, F>(self, function: F) -> AsyncResult<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> F2 + Send + 'static,
    {
        AsyncResult::new(move || async move { self.run().await.map_error(function) })
    }

    /// Chains a deferred-container-producing function (flattening bind).
    ///
    /// The next step starts only after this one settles on `Ok`; an
    /// `Error` short-circuits without invoking the function.
    pub fn and_then<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncResult<U, E> + Send + 'static,
    {
        AsyncResult::new(move || async move {
            match self.run().await {
                Result::Ok(value) => function(value).run().await,
                Result::Error(error) => Result::Error(error),
            }
        })
    }

    /// Chains a synchronous container-producing function.
    ///
    /// Like [`and_then`](Self::and_then) for steps that need no further
    /// suspension of their own.
    pub fn and_then_sync<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        AsyncResult::new(move || async move { self.run().await.and_then(function) })
    }

    /// Keeps the eventual value only if it satisfies the predicate,
    /// packaging the failing value into a [`FailedPredicateError`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        E: From<FailedPredicateError<T>>,
    {
        Self::new(move || async move { self.run().await.filter(predicate) })
    }

    /// Keeps the eventual value only if it satisfies the predicate,
    /// building the error from the failing value otherwise.
    pub fn filter_or_else<P, F>(self, predicate: P, on_unfulfilled: F) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        F: FnOnce(T) -> E + Send + 'static,
    {
        Self::new(move || async move { self.run().await.filter_or_else(predicate, on_unfulfilled) })
    }

    /// Falls back to another deferred container when this one settles on
    /// `Error`; the fallback receives the error value and may produce a
    /// differently-typed error.
    pub fn or_else<E2, F>(self, fallback: F) -> AsyncResult<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> AsyncResult<T, E2> + Send + 'static,
    {
        AsyncResult::new(move || async move {
            match self.run().await {
                Result::Ok(value) => Result::Ok(value),
                Result::Error(error) => fallback(error).run().await,
            }
        })
    }

    /// Combines two deferred results into a tuple, running both tasks
    /// concurrently; the leftmost error wins.
    pub fn zip<U>(self, other: AsyncResult<U, E>) -> AsyncResult<(T, U), E>
    where
        U: Send + 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two deferred results with a function, running both tasks
    /// concurrently; the leftmost error wins.
    pub fn zip_with<U, V, F>(self, other: AsyncResult<U, E>, function: F) -> AsyncResult<V, E>
    where
        U: Send + 'static,
        V: Send + 'static,
        F: FnOnce(T, U) -> V + Send + 'static,
    {
        AsyncResult::new(move || async move {
            let (left, right) = tokio::join!(self.run(), other.run());
            left.zip_with(right, function)
        })
    }

    /// Widens the eventual error type into a broader union.
    ///
    /// The deferred counterpart of
    /// [`Result::widen`](crate::container::result::Result::widen); the
    /// [`do_async!`](crate::do_async) macro inserts this at every bind.
    pub fn widen<E2>(self) -> AsyncResult<T, E2>
    where
        E: Into<E2>,
        E2: Send + 'static,
    {
        AsyncResult::new(move || async move { self.run().await.widen() })
    }
}

// =============================================================================
// Do-notation
// =============================================================================

impl<E: Send + 'static> AsyncResult<Context, E> {
    /// Starts an async do-notation chain with an empty context.
    #[must_use]
    pub fn do_() -> Self {
        Self::from_result(Result::Ok(Context::new()))
    }

    /// Binds the result of a deferred-container-producing step under `key`.
    ///
    /// The callback receives its own snapshot of the accumulated context;
    /// on `Ok`, a fresh record extended with one entry flows on, and an
    /// `Error` short-circuits the whole chain with that payload.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already bound; duplicate keys are a defect.
    pub fn bind<V, F>(self, key: &'static str, function: F) -> Self
    where
        V: Send + Sync + 'static,
        F: FnOnce(Context) -> AsyncResult<V, E> + Send + 'static,
    {
        Self::new(move || async move {
            match self.run().await {
                Result::Ok(context) => match function(context.clone()).run().await {
                    Result::Ok(value) => Result::Ok(context.with(key, value)),
                    Result::Error(error) => Result::Error(error),
                },
                Result::Error(error) => Result::Error(error),
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
                Result::Ok(context) => {
                    let value = function(context.clone()).await;
                    Result::Ok(context.with(key, value))
                }
                Result::Error(error) => Result::Error(error),
            }
        })
    }
}

impl<T: Send + Sync + 'static, E: Send + 'static> AsyncResult<T, E> {
    /// Wraps the eventual success value as the first entry of a fresh
    /// context.
    pub fn bind_to(self, key: &'static str) -> AsyncResult<Context, E> {
        self.map(move |value| Context::new().with(key, value))
    }
}
