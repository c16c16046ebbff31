//! Resolution policy for `${key:default}` placeholders.
//!
//! The policy is read once from the property store a resolver is built
//! against and stays fixed for the lifetime of that resolver.

use crate::properties::PropertyStore;

/// Store key that enables `${key<separator>default}` placeholders.
///
/// Accepts `"true"` in any ASCII case; any other value disables defaults.
pub const KEY_ENABLE_DEFAULT_VALUE: &str = "propsub.parser.enable-default-value";

/// Store key that sets the separator between a key and its default value.
pub const KEY_DEFAULT_VALUE_SEPARATOR: &str = "propsub.parser.default-value-separator";

/// Separator used when the store does not specify one.
pub const DEFAULT_VALUE_SEPARATOR: &str = ":";

const ENABLE_DEFAULT_VALUE: &str = "false";

/// Frozen settings controlling how placeholder content is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPolicy {
    /// Whether `key<separator>default` content falls back to `default`.
    pub enable_default_value: bool,

    /// Text separating the key from its default value.
    pub default_value_separator: String,
}

impl ResolutionPolicy {
    /// Reads the policy entries from `store`, using built-in defaults for
    /// missing entries or when no store is given.
    #[must_use]
    pub fn from_store(store: Option<&dyn PropertyStore>) -> Self {
        let lookup = |key: &str, fallback: &'static str| -> String {
            store.map_or(fallback, |s| s.get_property_or(key, fallback)).to_string()
        };

        Self {
            enable_default_value: parse_bool(&lookup(
                KEY_ENABLE_DEFAULT_VALUE,
                ENABLE_DEFAULT_VALUE,
            )),
            default_value_separator: lookup(KEY_DEFAULT_VALUE_SEPARATOR, DEFAULT_VALUE_SEPARATOR),
        }
    }

    /// Returns a copy of this policy with default values enabled or disabled.
    #[must_use]
    pub const fn with_default_value(mut self, enabled: bool) -> Self {
        self.enable_default_value = enabled;
        self
    }

    /// Returns a copy of this policy using `separator` between key and default.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.default_value_separator = separator.into();
        self
    }

    /// Splits placeholder content into `(key, default)` at the first separator.
    ///
    /// Returns `None` when default values are disabled or the separator does
    /// not occur in `content`.
    #[must_use]
    pub fn split<'c>(&self, content: &'c str) -> Option<(&'c str, &'c str)> {
        if !self.enable_default_value {
            return None;
        }
        content.split_once(self.default_value_separator.as_str())
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            enable_default_value: false,
            default_value_separator: DEFAULT_VALUE_SEPARATOR.to_string(),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
