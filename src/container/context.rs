//! The immutable record grown by the do-notation protocol.
//!
//! A [`Context`] is an ordered mapping from string keys to type-erased
//! values. Extending it never mutates the receiver: `with` produces a new
//! record sharing the existing entries, so a snapshot captured by an
//! earlier step of a chain can never observe later bindings.
//!
//! # Examples
//!
//! ```rust
//! use dyad::container::context::Context;
//!
//! let first = Context::new().with("a", 1_i32);
//! let second = first.with("b", "two");
//!
//! // The earlier snapshot is untouched.
//! assert!(first.get::<&str>("b").is_none());
//! assert_eq!(second.value::<i32>("a"), 1);
//! assert_eq!(second.value::<&str>("b"), "two");
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::container::option::Option;

/// An immutable, ordered record of named bindings.
///
/// Built one entry at a time by `bind`/`bind_to`/`let_` on the containers;
/// each extension copies the entry list and shares the values themselves.
/// Binding a key twice is a defect.
#[derive(Clone, Default)]
pub struct Context {
    entries: Vec<(&'static str, Arc<dyn Any + Send + Sync>)>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns a new context extended with one binding.
    ///
    /// The receiver is not modified; earlier snapshots keep their view.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::context::Context;
    ///
    /// let context = Context::new().with("count", 3_usize);
    /// assert_eq!(context.value::<usize>("count"), 3);
    /// ```
    #[must_use]
    pub fn with<V>(&self, key: &'static str, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        assert!(
            !self.contains_key(key),
            "do-notation key `{key}` is already bound"
        );
        let mut entries = self.entries.clone();
        entries.push((key, Arc::new(value)));
        Self { entries }
    }

    /// Looks up a binding by key and type.
    ///
    /// Returns `None` when the key is unbound or bound to a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::context::Context;
    ///
    /// let context = Context::new().with("name", "ada");
    /// assert_eq!(context.get::<&str>("name").unwrap(), &"ada");
    /// assert!(context.get::<i32>("name").is_none());
    /// assert!(context.get::<&str>("missing").is_none());
    /// ```
    pub fn get<V: 'static>(&self, key: &str) -> Option<&V> {
        for (bound_key, value) in &self.entries {
            if *bound_key == key {
                return Option::from_nullable(value.as_ref().downcast_ref::<V>());
            }
        }
        Option::None
    }

    /// Returns a clone of the binding for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is unbound or bound to a different type; both are
    /// defects in the chain that built the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyad::container::context::Context;
    ///
    /// let context = Context::new().with("n", 21_i32);
    /// assert_eq!(context.value::<i32>("n") * 2, 42);
    /// ```
    pub fn value<V: Clone + 'static>(&self, key: &str) -> V {
        match self.get::<V>(key) {
            Option::Some(value) => value.clone(),
            Option::None => panic!("no binding of the requested type for key `{key}`"),
        }
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(bound_key, _)| *bound_key == key)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bound keys in binding order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_extends_without_touching_snapshot() {
        let first = Context::new().with("a", 1_i32);
        let second = first.with("b", 2_i32);

        assert_eq!(first.len(), 1);
        assert!(first.get::<i32>("b").is_none());
        assert_eq!(second.value::<i32>("a") + second.value::<i32>("b"), 3);
    }

    #[test]
    #[should_panic(expected = "do-notation key `a` is already bound")]
    fn duplicate_key_is_a_defect() {
        let _ = Context::new().with("a", 1_i32).with("a", 2_i32);
    }

    #[test]
    fn keys_preserve_binding_order() {
        let context = Context::new().with("first", 1_i32).with("second", 2_i32);
        let keys: Vec<_> = context.keys().collect();
        assert_eq!(keys, vec!["first", "second"]);
    }
}
