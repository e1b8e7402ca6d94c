//! # dyad
//!
//! Algebraic `Option`/`Result` containers for Rust, with do-notation,
//! early-return sequencing, and lazy asynchronous counterparts.
//!
//! ## Overview
//!
//! This library provides a pair of closed sum types ([`Option`] with
//! `Some`/`None` variants, [`Result`] with `Ok`/`Error` variants) whose
//! operation surface goes beyond the standard library's: injectable
//! equality, predicate factories, a serialization boundary, a context
//! accumulation protocol for do-notation, and deferred asynchronous
//! counterparts ([`AsyncOption`]/[`AsyncResult`]) that never reject.
//!
//! - **Containers**: `Option` and `Result` value algebras with
//!   map/and_then/filter/or_else/zip/fold and friends
//! - **Do-notation**: `Container::do_()` + `bind`/`bind_to`/`let_` building
//!   an immutable, growing [`Context`] record
//! - **Sequencing**: `do_!` and `do_async!` macros for imperative-looking,
//!   short-circuiting chains
//! - **Async**: lazy, never-rejecting `AsyncOption`/`AsyncResult` plus a
//!   [`Resource`] safe-wrapper for external handles
//! - **Errors**: a tagged-error taxonomy (`NoValueError`,
//!   `FailedPredicateError`, `UnhandledException`) with stable kind tags
//!
//! ## Failure model
//!
//! Expected absence and expected failure are *values* (`None`,
//! `Error(error)`), threaded through chains without ever touching the panic
//! machinery. Panics are *defects*: container combinators never catch a
//! panic raised by a user callback. Only the dedicated conversion
//! boundaries (`catch`, `lift`, `try_future`, `Resource::run`) turn a caught
//! unwind or a failed future into the expected-failure channel.
//!
//! ## Feature Flags
//!
//! - `async`: deferred `AsyncOption`/`AsyncResult` containers and the
//!   `do_async!` macro (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the plain tagged representation
//!   used at the serialization boundary
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use dyad::prelude::*;
//!
//! let greeting: Option<String> = some(5)
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 5)
//!     .map(|n| format!("got {n}"));
//! assert_eq!(greeting, some("got 10".to_string()));
//! ```
//!
//! [`Option`]: container::option::Option
//! [`Result`]: container::result::Result
//! [`Context`]: container::context::Context
//! [`AsyncOption`]: future::AsyncOption
//! [`AsyncResult`]: future::AsyncResult
//! [`Resource`]: future::Resource

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, their factories, the error taxonomy,
/// and the async layer. Note that glob-importing this prelude shadows
/// `std::option::Option` and `std::result::Result`; that is the intended
/// way to use this crate, and the containers interconvert with their
/// standard-library namesakes via `From`/`Into`.
///
/// # Usage
///
/// ```rust
/// use dyad::prelude::*;
///
/// let value: Result<i32, NoValueError> = ok(42);
/// assert_eq!(value.unwrap(), 42);
/// ```
pub mod prelude {
    pub use crate::container::context::Context;
    pub use crate::container::option::{Option, first_some_of, none, some, values};
    pub use crate::container::result::{Result, ResultRepr, error, ok, partition};
    pub use crate::error::{FailedPredicateError, NoValueError, Tagged, UnhandledException};

    #[cfg(feature = "async")]
    pub use crate::future::{AsyncOption, AsyncResult, Resource, resource};
}

pub mod container;

pub mod error;

#[cfg(feature = "async")]
pub mod future;
