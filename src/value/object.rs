//! Shared property bags used as receivers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Value;

/// A shared, mutable, string-keyed property bag.
///
/// Clones alias the same storage, mirroring reference semantics of objects
/// in dynamic languages: a property set through one handle is visible
/// through every other. Equality is identity.
///
/// # Examples
///
/// ```rust
/// use funcwrap::value::{Object, Value};
///
/// let object = Object::new();
/// let alias = object.clone();
/// alias.set("answer", 42);
///
/// assert_eq!(object.get("answer"), Value::from(42));
/// assert_eq!(object.get("missing"), Value::Undefined);
/// ```
#[derive(Clone, Default)]
pub struct Object(Arc<RwLock<HashMap<Arc<str>, Value>>>);

impl Object {
    /// Creates an empty object.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a property, yielding [`Value::Undefined`] when absent.
    pub fn get(&self, key: &str) -> Value {
        self.0.read().get(key).cloned().unwrap_or_default()
    }

    /// Writes a property, returning the previous value if there was one.
    pub fn set(&self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        self.0.write().insert(key.into(), value.into())
    }

    /// Removes a property.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.write().remove(key)
    }

    /// Returns `true` if the property exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.read().contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Returns `true` if there are no properties.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Returns `true` if both handles alias the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self(Arc::new(RwLock::new(properties)))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self.0.read();
        let mut keys: Vec<&Arc<str>> = properties.keys().collect();
        keys.sort();
        formatter.debug_struct("Object").field("keys", &keys).finish()
    }
}
