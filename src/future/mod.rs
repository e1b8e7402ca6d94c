//! Lazy, never-rejecting asynchronous containers.
//!
//! This module provides deferred counterparts to the synchronous
//! containers:
//!
//! - [`AsyncOption`]: a deferred computation of an
//!   [`Option`](crate::container::option::Option)
//! - [`AsyncResult`]: a deferred computation of a
//!   [`Result`](crate::container::result::Result)
//! - [`Resource`]: a safe-wrapper converting failures of an external
//!   handle into the `UnhandledException` channel
//! - the [`do_async!`](crate::do_async) macro for short-circuiting async
//!   sequences
//!
//! # Design Philosophy
//!
//! An async container *describes* a computation but doesn't *execute* it.
//! Construction and chaining never poll anything; each chained operation
//! wraps the predecessor in a new deferred task. Execution happens only
//! when the container is awaited (it implements `IntoFuture`) or driven
//! through a terminal method such as `run`.
//!
//! The underlying future always resolves to a container value and never
//! rejects. Fallible futures enter through `try_future`, which routes
//! their error into the expected-failure channel; panics raised by user
//! callbacks are defects and unwind through `.await` unchanged, except at
//! the dedicated `catch`/`Resource::run` boundaries.
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

mod async_option;
mod async_result;
mod resource;

mod do_async_macro;

pub use async_option::{AsyncOption, first_some_of, values};
pub use async_result::AsyncResult;
pub use resource::{Resource, resource};
