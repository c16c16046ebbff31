//! `${...}` placeholder parsing entry points.

use propsub_domain::PropertyStore;

use super::engine::{CLOSE_TOKEN, OPEN_TOKEN, VariableResolver};
use crate::token_scanner::TokenScanner;

/// A placeholder scanner bound to one property store snapshot.
///
/// Build one per store and reuse it for many texts; the resolution policy
/// is read from the store once, at construction. A parser may be shared
/// by reference across threads.
#[derive(Debug)]
pub struct PlaceholderParser<'a> {
    scanner: TokenScanner<VariableResolver<'a>>,
}

impl<'a> PlaceholderParser<'a> {
    /// Creates a parser resolving against `store`.
    #[must_use]
    pub fn new(store: Option<&'a dyn PropertyStore>) -> Self {
        Self::with_resolver(VariableResolver::new(store))
    }

    /// Creates a parser around an already configured resolver.
    #[must_use]
    pub fn with_resolver(resolver: VariableResolver<'a>) -> Self {
        Self {
            scanner: TokenScanner::from_static(OPEN_TOKEN, CLOSE_TOKEN, resolver),
        }
    }

    /// Returns the resolver placeholders are delegated to.
    #[must_use]
    pub const fn resolver(&self) -> &VariableResolver<'a> {
        self.scanner.handler()
    }

    /// Replaces every `${...}` placeholder in `text`.
    #[must_use]
    pub fn parse(&self, text: &str) -> String {
        self.scanner.parse(text)
    }
}

/// Replaces `${...}` placeholders in `text` with values from `store`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use propsub_application::variable_resolver::parse;
///
/// let store = HashMap::from([("name".to_string(), "World".to_string())]);
///
/// assert_eq!(parse("Hello ${name}!", Some(&store)), "Hello World!");
/// assert_eq!(parse("Hello ${name}!", None), "Hello ${name}!");
/// ```
#[must_use]
pub fn parse(text: &str, store: Option<&dyn PropertyStore>) -> String {
    PlaceholderParser::new(store).parse(text)
}
