//! Named property sources.

use std::collections::HashMap;

use super::store::PropertyStore;

/// A set of string properties loaded from a single origin.
///
/// The name identifies where the properties came from (a file name,
/// `"environment"`, `"command-line"`). Several sources are layered by a
/// [`PropertyStack`](super::PropertyStack).
///
/// # Example
///
/// ```
/// use propsub_domain::properties::{PropertySource, PropertyStore};
///
/// let mut source = PropertySource::empty("application.properties");
/// source.set("server.port", "8080");
///
/// assert_eq!(source.get("server.port"), Some("8080"));
/// assert!(source.contains_key("server.port"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertySource {
    name: String,
    properties: HashMap<String, String>,
}

impl PropertySource {
    /// Creates a new source with the given name and properties.
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Creates a new source with no properties.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, HashMap::new())
    }

    /// Returns the name of this source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying properties map.
    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Gets a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Binds `key` to `value`, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyStore for PropertySource {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl Extend<(String, String)> for PropertySource {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.properties.extend(iter);
    }
}

impl FromIterator<(String, String)> for PropertySource {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self::new(String::new(), iter.into_iter().collect())
    }
}
