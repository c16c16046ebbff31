//! Propsub Domain - Core types
//!
//! This crate defines the property stores placeholders are resolved
//! against and the policy that governs default values.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod policy;
pub mod properties;

pub use error::{DomainError, DomainResult};
pub use policy::{
    DEFAULT_VALUE_SEPARATOR, KEY_DEFAULT_VALUE_SEPARATOR, KEY_ENABLE_DEFAULT_VALUE,
    ResolutionPolicy,
};
pub use properties::{PropertySource, PropertyStack, PropertyStore};
