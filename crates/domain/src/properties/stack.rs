//! Layered property sources with precedence.

use super::source::PropertySource;
use super::store::PropertyStore;

/// An ordered list of property sources.
///
/// Lookups walk the sources in order and return the value from the first
/// source that binds the key, so earlier sources take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyStack {
    sources: Vec<PropertySource>,
}

impl PropertyStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Appends a source with lower precedence than every source already present.
    pub fn push(&mut self, source: PropertySource) {
        self.sources.push(source);
    }

    /// Inserts a source with higher precedence than every source already present.
    pub fn push_front(&mut self, source: PropertySource) {
        self.sources.insert(0, source);
    }

    /// Returns the sources in precedence order.
    #[must_use]
    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the stack holds no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns all unique keys across all sources, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .sources
            .iter()
            .flat_map(|s| s.properties().keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

impl PropertyStore for PropertyStack {
    fn get_property(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|source| source.get(key))
    }
}

impl FromIterator<PropertySource> for PropertyStack {
    fn from_iter<T: IntoIterator<Item = PropertySource>>(iter: T) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(name: &str, pairs: &[(&str, &str)]) -> PropertySource {
        PropertySource::new(
            name,
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_first_source_wins() {
        let stack: PropertyStack = [
            source("high-priority", &[("key", "from-source1")]),
            source("low-priority", &[("key", "from-source2"), ("only", "low")]),
        ]
        .into_iter()
        .collect();

        assert_eq!(stack.get_property("key"), Some("from-source1"));
        assert_eq!(stack.get_property("only"), Some("low"));
        assert_eq!(stack.get_property("missing"), None);
    }

    #[test]
    fn test_push_front_takes_precedence() {
        let mut stack = PropertyStack::new();
        stack.push(source("file", &[("env", "dev")]));
        stack.push_front(source("command-line", &[("env", "prod")]));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.sources()[0].name(), "command-line");
        assert_eq!(stack.get_property("env"), Some("prod"));
    }

    #[test]
    fn test_keys_are_sorted_and_unique() {
        let stack: PropertyStack = [
            source("a", &[("b", "1"), ("a", "1")]),
            source("b", &[("a", "2"), ("c", "2")]),
        ]
        .into_iter()
        .collect();

        assert_eq!(stack.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_stack() {
        let stack = PropertyStack::default();

        assert!(stack.is_empty());
        assert!(!stack.contains_key("anything"));
    }
}
