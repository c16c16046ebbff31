//! Adapters for process-level property sources.

mod environment;

pub use environment::{ENVIRONMENT_SOURCE_NAME, environment_source};
