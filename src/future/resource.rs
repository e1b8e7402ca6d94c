//! Safe-wrapper for external handles.
//!
//! A [`Resource`] holds a shared, read-only reference to an external
//! handle (a client, a connection) and exposes [`run`](Resource::run),
//! which invokes an async operation against the handle and converts a
//! failed or panicking use into the
//! [`UnhandledException`](crate::error::UnhandledException) channel.
//! The handle's lifecycle belongs to the caller; the wrapper never
//! mutates it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dyad::future::resource;
//!
//! struct Client;
//!
//! impl Client {
//!     async fn fetch(&self, key: &str) -> Result<String, std::io::Error> {
//!         Ok(format!("value for {key}"))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = resource(Client);
//!     let fetched = client.run(|handle| async move { handle.fetch("answer").await });
//!     assert_eq!(fetched.await.unwrap(), "value for answer");
//! }
//! ```

use core::result::Result as StdResult;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::container::result::Result;
use crate::error::UnhandledException;
use crate::future::AsyncResult;

/// A shared, read-only wrapper around an external handle.
///
/// Cloning a `Resource` shares the same handle; every
/// [`run`](Resource::run) borrows it for one deferred operation.
pub struct Resource<R> {
    handle: Arc<R>,
}

/// Wraps an external handle for safe deferred use.
///
/// # Examples
///
/// ```rust
/// use dyad::future::resource;
///
/// let wrapped = resource(vec![1, 2, 3]);
/// assert_eq!(wrapped.handle().len(), 3);
/// ```
pub fn resource<R>(value: R) -> Resource<R> {
    Resource {
        handle: Arc::new(value),
    }
}

impl<R> Resource<R> {
    /// Returns a shared reference to the wrapped handle.
    #[must_use]
    pub fn handle(&self) -> &R {
        &self.handle
    }
}

impl<R: Send + Sync + 'static> Resource<R> {
    /// Runs an async operation against the handle, converting failure into
    /// the expected-failure channel.
    ///
    /// Both a future settling on its error variant and a panicking future
    /// become an [`UnhandledException`]; the operation itself runs only
    /// when the returned container is awaited.
    pub fn run<T, X, F, Fut>(&self, use_handle: F) -> AsyncResult<T, UnhandledException>
    where
        T: Send + 'static,
        X: std::error::Error + Send + Sync + 'static,
        F: FnOnce(Arc<R>) -> Fut + Send + 'static,
        Fut: Future<Output = StdResult<T, X>> + Send + 'static,
    {
        let handle = Arc::clone(&self.handle);
        AsyncResult::new(move || async move {
            match AssertUnwindSafe(use_handle(handle)).catch_unwind().await {
                Ok(StdResult::Ok(value)) => Result::Ok(value),
                Ok(StdResult::Err(cause)) => Result::Error(UnhandledException::from_error(cause)),
                Err(payload) => Result::Error(UnhandledException::from_panic(payload.as_ref())),
            }
        })
    }

    /// Runs an async operation against the handle, classifying its error
    /// with the supplied handler.
    ///
    /// A panicking future still surfaces as an
    /// [`UnhandledException`], converted into the chain's error type.
    pub fn run_or<T, X, E, F, Fut, G>(&self, use_handle: F, classify: G) -> AsyncResult<T, E>
    where
        T: Send + 'static,
        X: Send + 'static,
        E: From<UnhandledException> + Send + 'static,
        F: FnOnce(Arc<R>) -> Fut + Send + 'static,
        Fut: Future<Output = StdResult<T, X>> + Send + 'static,
        G: FnOnce(X) -> E + Send + 'static,
    {
        let handle = Arc::clone(&self.handle);
        AsyncResult::new(move || async move {
            match AssertUnwindSafe(use_handle(handle)).catch_unwind().await {
                Ok(StdResult::Ok(value)) => Result::Ok(value),
                Ok(StdResult::Err(cause)) => Result::Error(classify(cause)),
                Err(payload) => {
                    Result::Error(E::from(UnhandledException::from_panic(payload.as_ref())))
                }
            }
        })
    }
}

impl<R> Clone for Resource<R> {
    fn clone(&self) -> Self {
        Self {
            handle: Arc::clone(&self.handle),
        }
    }
}
