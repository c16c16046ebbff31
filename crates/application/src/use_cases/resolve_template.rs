//! Resolve template use case

use std::path::PathBuf;

use propsub_domain::{PropertySource, PropertyStore};
use tracing::debug;

use crate::ports::{PropertyError, PropertyRepository};
use crate::variable_resolver::parse;

/// Errors that can occur when resolving a template.
#[derive(Debug, thiserror::Error)]
pub enum ResolveTemplateError {
    /// A property file does not exist.
    #[error("Property file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read a property file.
    #[error("Failed to read property file: {0}")]
    IoError(String),

    /// Failed to parse a property file.
    #[error("Failed to parse property file: {0}")]
    ParseError(String),
}

impl From<PropertyError> for ResolveTemplateError {
    fn from(error: PropertyError) -> Self {
        match error {
            PropertyError::NotFound(path) => Self::NotFound(path),
            PropertyError::Io(e) => Self::IoError(e.to_string()),
            e @ (PropertyError::Parse { .. } | PropertyError::UnsupportedFormat(_)) => {
                Self::ParseError(e.to_string())
            }
        }
    }
}

/// Input for the resolve template use case.
#[derive(Debug, Clone, Default)]
pub struct ResolveTemplateInput {
    /// Text containing `${...}` placeholders.
    pub template: String,

    /// Property files to load, highest precedence first.
    pub property_files: Vec<PathBuf>,

    /// Properties that take precedence over every file. Ignored when empty.
    pub overrides: PropertySource,

    /// Properties consulted after every file.
    pub fallback: Option<PropertySource>,
}

impl ResolveTemplateInput {
    /// Creates an input for `template` with no property sources.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }
}

/// Output of the resolve template use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTemplateOutput {
    /// The template with placeholders substituted.
    pub resolved: String,

    /// Names of the property sources used, highest precedence first.
    pub sources: Vec<String>,
}

/// Loads property sources and substitutes them into a template.
pub struct ResolveTemplate<R> {
    repository: R,
}

impl<R: PropertyRepository> ResolveTemplate<R> {
    /// Creates a new `ResolveTemplate` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// When no property source is supplied at all, placeholders are left
    /// untouched.
    ///
    /// # Errors
    /// Returns an error if any property file cannot be loaded.
    pub async fn execute(
        &self,
        input: ResolveTemplateInput,
    ) -> Result<ResolveTemplateOutput, ResolveTemplateError> {
        let mut stack = self.repository.load_all(&input.property_files).await?;

        if !input.overrides.is_empty() {
            stack.push_front(input.overrides);
        }
        if let Some(fallback) = input.fallback {
            stack.push(fallback);
        }

        let sources: Vec<String> = stack
            .sources()
            .iter()
            .map(|source| source.name().to_string())
            .collect();
        debug!(?sources, "resolving template");

        let store: Option<&dyn PropertyStore> = if stack.is_empty() {
            None
        } else {
            Some(&stack)
        };
        let resolved = parse(&input.template, store);

        Ok(ResolveTemplateOutput { resolved, sources })
    }
}
