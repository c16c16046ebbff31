//! Placeholder resolution module
//!
//! Replaces `${key}` and `${key:default}` placeholders with values drawn
//! from a property store.
//!
//! # Usage
//!
//! ```
//! use propsub_application::variable_resolver::parse;
//! use propsub_domain::{KEY_ENABLE_DEFAULT_VALUE, PropertySource};
//!
//! let mut source = PropertySource::empty("application.properties");
//! source.set(KEY_ENABLE_DEFAULT_VALUE, "true");
//! source.set("db.host", "db.internal");
//!
//! let url = parse("postgres://${db.host}:${db.port:5432}", Some(&source));
//! assert_eq!(url, "postgres://db.internal:5432");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{CLOSE_TOKEN, OPEN_TOKEN, VariableResolver};
pub use parser::{PlaceholderParser, parse};
