//! Placeholder resolution engine
//!
//! Resolves the content of `${...}` placeholders against a property store.

use std::fmt;

use propsub_domain::{PropertyStore, ResolutionPolicy};
use tracing::{debug, trace};

use crate::token_scanner::TokenHandler;

/// Opening delimiter of a placeholder.
pub const OPEN_TOKEN: &str = "${";

/// Closing delimiter of a placeholder.
pub const CLOSE_TOKEN: &str = "}";

/// Resolves placeholder content to property values.
///
/// Content is either a bare `key` or, when the policy enables default
/// values, `key<separator>default`. Keys missing from the store are left as
/// the original `${key}` text unless a default applies. Without a store every
/// placeholder is left as is.
pub struct VariableResolver<'a> {
    store: Option<&'a dyn PropertyStore>,
    policy: ResolutionPolicy,
}

impl<'a> VariableResolver<'a> {
    /// Creates a resolver whose policy is read from `store`.
    #[must_use]
    pub fn new(store: Option<&'a dyn PropertyStore>) -> Self {
        let policy = ResolutionPolicy::from_store(store);
        debug!(
            enable_default_value = policy.enable_default_value,
            separator = %policy.default_value_separator,
            has_store = store.is_some(),
            "created variable resolver"
        );
        Self { store, policy }
    }

    /// Creates a resolver with an explicit policy, ignoring the policy entries
    /// of `store`.
    #[must_use]
    pub const fn with_policy(store: Option<&'a dyn PropertyStore>, policy: ResolutionPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the frozen resolution policy.
    #[must_use]
    pub const fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    /// Returns the store placeholders are resolved against, if any.
    #[must_use]
    pub const fn store(&self) -> Option<&'a dyn PropertyStore> {
        self.store
    }
}

impl TokenHandler for VariableResolver<'_> {
    fn handle_token(&self, content: &str) -> String {
        let Some(store) = self.store else {
            return unresolved(content);
        };

        if let Some((key, default_value)) = self.policy.split(content) {
            return match store.get_property(key) {
                Some(value) => value.to_string(),
                None => {
                    trace!(key, default_value, "falling back to default value");
                    default_value.to_string()
                }
            };
        }

        if let Some(value) = store.get_property(content) {
            return value.to_string();
        }

        trace!(key = content, "unresolved placeholder");
        unresolved(content)
    }
}

impl fmt::Debug for VariableResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableResolver")
            .field("has_store", &self.store.is_some())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Rebuilds the placeholder text for content that could not be resolved.
fn unresolved(content: &str) -> String {
    format!("{OPEN_TOKEN}{content}{CLOSE_TOKEN}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use propsub_domain::{KEY_DEFAULT_VALUE_SEPARATOR, KEY_ENABLE_DEFAULT_VALUE};

    use super::*;

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_without_store_keeps_placeholder() {
        let resolver = VariableResolver::new(None);

        assert_eq!(resolver.handle_token("name"), "${name}");
        assert_eq!(resolver.handle_token("env:dev"), "${env:dev}");
        assert_eq!(resolver.policy(), &ResolutionPolicy::default());
        assert!(resolver.store().is_none());
    }

    #[test]
    fn test_resolves_known_key() {
        let props = store(&[("name", "World")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("name"), "World");
    }

    #[test]
    fn test_unknown_key_keeps_placeholder() {
        let props = store(&[("name", "World")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("missing"), "${missing}");
    }

    #[test]
    fn test_empty_value_resolves() {
        let props = store(&[("blank", "")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("blank"), "");
    }

    #[test]
    fn test_separator_ignored_when_defaults_disabled() {
        let props = store(&[("env", "prod")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("env:dev"), "${env:dev}");
    }

    #[test]
    fn test_default_value_used_when_key_missing() {
        let props = store(&[(KEY_ENABLE_DEFAULT_VALUE, "true")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("env:dev"), "dev");
        assert_eq!(resolver.handle_token("env:"), "");
    }

    #[test]
    fn test_stored_value_wins_over_default() {
        let props = store(&[(KEY_ENABLE_DEFAULT_VALUE, "true"), ("env", "prod")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("env:dev"), "prod");
    }

    #[test]
    fn test_only_first_separator_splits() {
        let props = store(&[(KEY_ENABLE_DEFAULT_VALUE, "TRUE")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(
            resolver.handle_token("url:http://localhost:8080"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_defaults_enabled_without_separator() {
        let props = store(&[(KEY_ENABLE_DEFAULT_VALUE, "true"), ("env", "prod")]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("env"), "prod");
        assert_eq!(resolver.handle_token("missing"), "${missing}");
    }

    #[test]
    fn test_custom_separator() {
        let props = store(&[
            (KEY_ENABLE_DEFAULT_VALUE, "true"),
            (KEY_DEFAULT_VALUE_SEPARATOR, "?:"),
        ]);
        let resolver = VariableResolver::new(Some(&props));

        assert_eq!(resolver.handle_token("db.user?:postgres"), "postgres");
        assert_eq!(resolver.handle_token("db:user"), "${db:user}");
    }

    #[test]
    fn test_explicit_policy_overrides_store() {
        let props = store(&[("env", "prod")]);
        let policy = ResolutionPolicy::default().with_default_value(true);
        let resolver = VariableResolver::with_policy(Some(&props), policy);

        assert_eq!(resolver.handle_token("missing:fallback"), "fallback");
        assert_eq!(resolver.handle_token("env:fallback"), "prod");
    }

    #[test]
    fn test_single_lookup_per_placeholder() {
        struct CountingStore {
            inner: HashMap<String, String>,
            lookups: AtomicUsize,
        }

        impl PropertyStore for CountingStore {
            fn get_property(&self, key: &str) -> Option<&str> {
                self.lookups.fetch_add(1, Ordering::Relaxed);
                self.inner.get(key).map(String::as_str)
            }
        }

        let counting = CountingStore {
            inner: store(&[("env", "prod")]),
            lookups: AtomicUsize::new(0),
        };
        let policy = ResolutionPolicy::default().with_default_value(true);
        let resolver = VariableResolver::with_policy(Some(&counting), policy);

        for content in ["env", "env:dev", "missing", "missing:dev"] {
            let before = counting.lookups.load(Ordering::Relaxed);
            resolver.handle_token(content);
            assert_eq!(counting.lookups.load(Ordering::Relaxed) - before, 1, "{content}");
        }
    }

    #[test]
    fn test_debug_output() {
        let props = store(&[("env", "prod")]);
        let resolver = VariableResolver::new(Some(&props));
        let debug = format!("{resolver:?}");

        assert!(debug.contains("VariableResolver"));
        assert!(debug.contains("has_store: true"));
        assert!(debug.contains("policy"));
    }
}
