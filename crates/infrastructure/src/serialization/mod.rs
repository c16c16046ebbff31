//! Property file formats.
//!
//! Every format decodes to a flat map of string keys to string values:
//! - `.properties` files are read as Java properties.
//! - `.yml` / `.yaml` files are flattened to dot-separated keys.

mod properties;
mod yaml;

use std::collections::HashMap;
use std::path::Path;

pub use properties::from_properties;
pub use yaml::from_yaml;

/// Error type for decoding property files.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Java properties decoding failed.
    #[error("properties decoding failed: {0}")]
    Properties(#[from] java_properties::PropertiesError),

    /// YAML decoding failed.
    #[error("YAML decoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A supported property file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFormat {
    /// Java `.properties` file.
    Properties,
    /// YAML document.
    Yaml,
}

impl PropertyFormat {
    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "properties" => Some(Self::Properties),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes `content` in this format.
    ///
    /// # Errors
    /// Returns an error if the content is malformed.
    pub fn decode(self, content: &str) -> Result<HashMap<String, String>, SerializationError> {
        match self {
            Self::Properties => from_properties(content),
            Self::Yaml => from_yaml(content),
        }
    }
}
