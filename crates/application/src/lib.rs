//! Propsub Application - Scanning and resolution
//!
//! This crate contains the escape-aware token scanner, the `${...}`
//! placeholder resolver built on it, and the ports and use cases that
//! connect them to property storage.

pub mod ports;
pub mod token_scanner;
pub mod use_cases;
pub mod variable_resolver;

pub use token_scanner::{TokenHandler, TokenScanner};
pub use variable_resolver::{PlaceholderParser, VariableResolver, parse};
