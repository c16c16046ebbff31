//! Process environment adapter

use std::collections::HashMap;

use propsub_domain::PropertySource;

/// Name of the property source holding the process environment.
pub const ENVIRONMENT_SOURCE_NAME: &str = "environment";

/// Snapshots the process environment as a property source.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn environment_source() -> PropertySource {
    let properties: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();

    PropertySource::new(ENVIRONMENT_SOURCE_NAME, properties)
}
