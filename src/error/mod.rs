//! Tagged error taxonomy and the defect boundary.
//!
//! Every error value produced by this crate carries a stable string
//! discriminant (its *kind tag*, exposed through [`Tagged`]) plus a
//! human-readable message. The containers rely on this module only to
//! construct their default errors:
//!
//! - [`NoValueError`]: produced by nullable/falsy-to-container conversions
//! - [`FailedPredicateError`]: produced by `filter` when a predicate fails
//! - [`UnhandledException`]: produced at `catch`/`lift`/future boundaries
//!   when a real panic or a failed future is deliberately converted into
//!   the expected-failure channel
//!
//! # Defects vs expected failures
//!
//! Expected failures travel as values. Defects (panics raised by user
//! callbacks, or misuse such as unwrapping the wrong variant) are never
//! absorbed by container combinators; they unwind past them unchanged.
//! The only places that catch an unwind are the dedicated conversion
//! factories, and even there only for the specific thunk handed to them.
//!
//! # Examples
//!
//! ```rust
//! use dyad::error::{NoValueError, Tagged};
//!
//! let error = NoValueError::new();
//! assert_eq!(error.tag(), "NoValueError");
//! ```

mod defect;
mod tagged;

pub(crate) use defect::panic_message;
pub use tagged::{FailedPredicateError, NoValueError, Tagged, UnhandledException};
