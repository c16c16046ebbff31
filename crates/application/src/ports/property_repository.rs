//! Property repository port
//!
//! Defines the interface for loading property sources from storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use propsub_domain::{PropertySource, PropertyStack};

/// Errors that can occur while loading properties.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// Property file not found.
    #[error("Property file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content could not be parsed.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error description.
        message: String,
    },

    /// The file extension does not map to a known format.
    #[error("Unsupported property file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Repository trait for loading property sources.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Loads a single property source.
    ///
    /// # Errors
    /// Returns `PropertyError::NotFound` if the file doesn't exist, or a
    /// parse error if its content is malformed.
    async fn load(&self, path: &Path) -> Result<PropertySource, PropertyError>;

    /// Loads several property sources into a stack.
    ///
    /// The first path has the highest precedence.
    ///
    /// # Errors
    /// Fails on the first source that cannot be loaded.
    async fn load_all(&self, paths: &[PathBuf]) -> Result<PropertyStack, PropertyError> {
        let mut stack = PropertyStack::new();
        for path in paths {
            stack.push(self.load(path).await?);
        }
        Ok(stack)
    }
}
