//! File-based property repository implementation.
//!
//! Property files are read with `tokio::fs` and decoded by extension.

use std::path::Path;

use async_trait::async_trait;
use propsub_application::ports::{PropertyError, PropertyRepository};
use propsub_domain::PropertySource;
use tokio::fs;
use tracing::debug;

use crate::serialization::PropertyFormat;

/// File-based property repository.
///
/// Supports:
/// ```text
/// application.properties   Java properties
/// application.yml          YAML, flattened to dotted keys
/// application.yaml
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePropertyRepository;

impl FilePropertyRepository {
    /// Creates a new file-based property repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PropertyRepository for FilePropertyRepository {
    async fn load(&self, path: &Path) -> Result<PropertySource, PropertyError> {
        let format = PropertyFormat::from_path(path)
            .ok_or_else(|| PropertyError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PropertyError::NotFound(path.to_path_buf())
            } else {
                PropertyError::Io(e)
            }
        })?;

        let properties = format.decode(&content).map_err(|e| PropertyError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        debug!(source = %name, count = properties.len(), "loaded property source");

        Ok(PropertySource::new(name, properties))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use propsub_domain::PropertyStore;
    use tempfile::TempDir;

    use super::*;

    async fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).await.expect("write file");
        path
    }

    #[tokio::test]
    async fn test_load_properties_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "app.properties", "host=localhost\nport=8080\n").await;

        let source = FilePropertyRepository::new()
            .load(&path)
            .await
            .expect("Should load");

        assert_eq!(source.name(), "app.properties");
        assert_eq!(source.get("host"), Some("localhost"));
        assert_eq!(source.get("port"), Some("8080"));
    }

    #[tokio::test]
    async fn test_load_yaml_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "app.yaml", "server:\n  port: 9090\n").await;

        let source = FilePropertyRepository::new()
            .load(&path)
            .await
            .expect("Should load");

        assert_eq!(source.get_property("server.port"), Some("9090"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing.properties");

        let result = FilePropertyRepository::new().load(&path).await;

        assert!(matches!(result, Err(PropertyError::NotFound(p)) if p == path));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "app.ini", "a=1").await;

        let result = FilePropertyRepository::new().load(&path).await;

        assert!(matches!(result, Err(PropertyError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "bad.yml", "key: [unclosed").await;

        let result = FilePropertyRepository::new().load(&path).await;

        assert!(matches!(result, Err(PropertyError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_all_keeps_order() {
        let dir = TempDir::new().expect("temp dir");
        let high = write(&dir, "high.properties", "env=prod\n").await;
        let low = write(&dir, "low.yml", "env: dev\nregion: eu\n").await;

        let stack = FilePropertyRepository::new()
            .load_all(&[high, low])
            .await
            .expect("Should load");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get_property("env"), Some("prod"));
        assert_eq!(stack.get_property("region"), Some("eu"));
    }
}
