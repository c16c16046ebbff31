//! The key/value lookup abstraction consumed by the resolver.

use std::collections::{BTreeMap, HashMap};

/// A read-only, string-keyed property lookup.
///
/// Only [`get_property`](Self::get_property) is required; the fallback and
/// containment queries are derived from it. Implementations must not mutate
/// themselves during a lookup.
///
/// Stores are `Sync` so a single resolver can serve scans on several
/// threads at once.
pub trait PropertyStore: Sync {
    /// Returns the value bound to `key`, if any.
    fn get_property(&self, key: &str) -> Option<&str>;

    /// Returns the value bound to `key`, or `fallback` when the key is absent.
    fn get_property_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get_property(key).unwrap_or(fallback)
    }

    /// Returns true if `key` is bound in this store.
    fn contains_key(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }
}

impl PropertyStore for HashMap<String, String> {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl PropertyStore for BTreeMap<String, String> {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn get_property(&self, key: &str) -> Option<&str> {
        (**self).get_property(key)
    }
}
