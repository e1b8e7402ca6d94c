//! Synchronous container algebra.
//!
//! This module provides the two closed sum types at the heart of the crate
//! and the machinery layered on top of them:
//!
//! - [`option::Option`]: an optional value, `Some(value)` or `None`
//! - [`result::Result`]: success or failure, `Ok(value)` or `Error(error)`
//! - [`context::Context`]: the immutable record grown by the do-notation
//!   protocol (`do_()` / `bind` / `bind_to` / `let_`)
//! - the [`do_!`](crate::do_) macro for early-return sequencing
//!
//! Containers are immutable: every operation consumes its receiver and
//! returns a new container, so a value captured by an earlier step of a
//! chain can never be observed half-transformed.
//!
//! # Examples
//!
//! ```rust
//! use dyad::container::option::some;
//! use dyad::container::result::{Result, error, ok};
//! use dyad::error::NoValueError;
//!
//! let doubled = some(21).map(|n| n * 2);
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let failed: Result<i32, NoValueError> = error(NoValueError::new());
//! assert!(failed.is_error());
//! ```

pub mod context;
pub mod option;
pub mod result;

mod do_macro;
