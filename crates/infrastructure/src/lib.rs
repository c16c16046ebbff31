//! Propsub Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ENVIRONMENT_SOURCE_NAME, environment_source};
pub use persistence::FilePropertyRepository;
pub use serialization::{PropertyFormat, SerializationError, from_properties, from_yaml};
