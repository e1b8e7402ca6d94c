//! The tagged error types produced by container operations.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::defect::panic_message;

/// A type carrying a stable string discriminant (its kind tag).
///
/// Exhaustive dispatch over heterogeneous error values keys off this tag,
/// and serialized errors embed it. The contract is deliberately small: a
/// tagged error is constructible with a message (and an optional cause) and
/// comparable by its tag.
///
/// # Examples
///
/// ```rust
/// use dyad::error::{FailedPredicateError, Tagged};
///
/// let error = FailedPredicateError::new(42);
/// assert_eq!(error.tag(), "FailedPredicateError");
/// assert_eq!(FailedPredicateError::<i32>::TAG, "FailedPredicateError");
/// ```
pub trait Tagged {
    /// The stable kind tag of this error type.
    const TAG: &'static str;

    /// Returns the kind tag of this value.
    #[inline]
    fn tag(&self) -> &'static str {
        Self::TAG
    }
}

// =============================================================================
// NoValueError
// =============================================================================

/// The default error for nullable/falsy-to-container conversions.
///
/// Produced by `Result::from_nullable` and `Result::from_falsy` when the
/// input carries no usable value and the caller supplied no error factory.
///
/// # Examples
///
/// ```rust
/// use dyad::error::{NoValueError, Tagged};
///
/// let error = NoValueError::new();
/// assert_eq!(error.tag(), "NoValueError");
/// assert_eq!(format!("{error}"), "no value was present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoValueError {
    message: String,
}

impl NoValueError {
    /// Creates a `NoValueError` with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "no value was present".to_string(),
        }
    }

    /// Creates a `NoValueError` with a caller-supplied message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::error::NoValueError;
    ///
    /// let error = NoValueError::with_message("user id missing");
    /// assert_eq!(format!("{error}"), "user id missing");
    /// ```
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message of this error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NoValueError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for NoValueError {}

impl Tagged for NoValueError {
    const TAG: &'static str = "NoValueError";
}

// =============================================================================
// FailedPredicateError
// =============================================================================

/// The default error for `filter` operations, carrying the failing value.
///
/// Whatever value failed the predicate is stored untouched, so a downstream
/// handler can inspect or recover it.
///
/// # Examples
///
/// ```rust
/// use dyad::error::{FailedPredicateError, Tagged};
///
/// let error = FailedPredicateError::new(5);
/// assert_eq!(error.tag(), "FailedPredicateError");
/// assert_eq!(*error.value(), 5);
/// assert_eq!(error.into_value(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPredicateError<T> {
    value: T,
    message: String,
}

impl<T> FailedPredicateError<T> {
    /// Creates a `FailedPredicateError` holding the value that failed.
    pub fn new(value: T) -> Self {
        Self {
            value,
            message: "value did not satisfy the predicate".to_string(),
        }
    }

    /// Returns a reference to the value that failed the predicate.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the error, returning the value that failed the predicate.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the message of this error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> fmt::Display for FailedPredicateError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl<T: fmt::Debug> std::error::Error for FailedPredicateError<T> {}

impl<T> Tagged for FailedPredicateError<T> {
    const TAG: &'static str = "FailedPredicateError";
}

// =============================================================================
// UnhandledException
// =============================================================================

/// Wraps an exception caught at a sanctioned conversion boundary.
///
/// Produced by `catch`/`lift` when a thunk panics, and by `try_future` when
/// a fallible future resolves to its error variant and the caller supplied
/// no classifier. When the wrapped failure was itself an error value, it is
/// retained as the `source` of this one.
///
/// Two `UnhandledException`s compare equal when their messages match; the
/// retained cause does not participate in equality.
///
/// # Examples
///
/// ```rust
/// use dyad::error::{Tagged, UnhandledException};
///
/// let error = UnhandledException::new("connection reset");
/// assert_eq!(error.tag(), "UnhandledException");
/// assert_eq!(format!("{error}"), "unhandled exception: connection reset");
/// ```
#[derive(Debug, Clone)]
pub struct UnhandledException {
    message: String,
    cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl UnhandledException {
    /// Creates an `UnhandledException` from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wraps an error value, retaining it as the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use dyad::error::UnhandledException;
    ///
    /// let parse_failure = "x".parse::<i32>().unwrap_err();
    /// let error = UnhandledException::from_error(parse_failure);
    /// assert!(error.source().is_some());
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            cause: Some(Arc::new(error)),
        }
    }

    /// Wraps a caught panic payload.
    ///
    /// The payload is rendered to a message (`&str` and `String` payloads
    /// verbatim, anything else as an unknown panic); no cause is retained.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self {
            message: panic_message(payload),
            cause: None,
        }
    }

    /// Returns the message of this error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnhandledException {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unhandled exception: {}", self.message)
    }
}

impl std::error::Error for UnhandledException {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl PartialEq for UnhandledException {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for UnhandledException {}

impl Tagged for UnhandledException {
    const TAG: &'static str = "UnhandledException";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_value_error_display() {
        assert_eq!(format!("{}", NoValueError::new()), "no value was present");
        assert_eq!(
            format!("{}", NoValueError::with_message("missing id")),
            "missing id"
        );
    }

    #[test]
    fn failed_predicate_error_keeps_value() {
        let error = FailedPredicateError::new("rejected");
        assert_eq!(*error.value(), "rejected");
        assert_eq!(error.into_value(), "rejected");
    }

    #[test]
    fn unhandled_exception_from_error_retains_cause() {
        use std::error::Error;

        let error = UnhandledException::from_error("x".parse::<i32>().unwrap_err());
        assert!(error.source().is_some());
    }

    #[test]
    fn unhandled_exception_equality_ignores_cause() {
        let with_cause = UnhandledException::from_error("x".parse::<i32>().unwrap_err());
        let without_cause = UnhandledException::new(with_cause.message().to_string());
        assert_eq!(with_cause, without_cause);
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(NoValueError::TAG, "NoValueError");
        assert_eq!(FailedPredicateError::<i32>::TAG, "FailedPredicateError");
        assert_eq!(UnhandledException::TAG, "UnhandledException");
    }
}
