use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::ThemeResult;

/// Outcome of building a derived value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Derived<V> {
    /// Store the value and hand it out on later lookups.
    Cached(V),
    /// Hand the value out once, keep building it on later lookups.
    Transient(V),
}

/// A grow-only cache of values derived from theme keys.
///
/// Keyed by the key the caller asked for, not by the end of its reference
/// chain. Entries are never invalidated since theme data is immutable after
/// construction.
#[derive(Debug)]
pub(crate) struct DerivedCache<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V: Clone> DerivedCache<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Return the cached value for `key`, building it with `build` on a miss.
    ///
    /// The miss path re-checks and builds under the write lock, so concurrent
    /// callers never build the same key twice. Errors and transient values are
    /// not stored.
    pub(crate) fn get_or_build<F>(&self, key: &str, build: F) -> ThemeResult<V>
    where
        F: FnOnce() -> ThemeResult<Derived<V>>,
    {
        if let Some(value) = self.get(key) {
            log::trace!("cache hit for '{}'", key);
            return Ok(value);
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = entries.get(key) {
            return Ok(value.clone());
        }

        match build()? {
            Derived::Cached(value) => {
                entries.insert(key.to_string(), value.clone());
                Ok(value)
            },
            Derived::Transient(value) => Ok(value),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
