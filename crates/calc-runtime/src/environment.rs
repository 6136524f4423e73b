//! Variable environment
//!
//! The session's store of name to value bindings. There is a single flat
//! namespace: no scopes, no shadowing, and bindings live until the session
//! ends or is reset.

use crate::value::Number;
use std::collections::BTreeMap;

/// Mutable mapping from variable name to its last assigned value.
///
/// Created empty and mutated only by evaluating an assignment. The
/// representation is private; use [`Environment::iter`] to enumerate
/// bindings, which are yielded in name order.
///
/// The type is not internally synchronized. Sharing one environment between
/// threads requires external locking that covers a whole statement, e.g. a
/// `Mutex<Environment>` held across `evaluate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: BTreeMap<String, Number>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, if it has been assigned
    pub fn get(&self, name: &str) -> Option<Number> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `value`, returning the value it replaced
    pub fn set(&mut self, name: impl Into<String>, value: Number) -> Option<Number> {
        self.bindings.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All bindings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> + '_ {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
