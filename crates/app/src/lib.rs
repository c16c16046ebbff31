//! Propsub command-line interface
//!
//! Wires the file-based property repository and the resolve template use
//! case behind a small command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use propsub_application::use_cases::{ResolveTemplate, ResolveTemplateInput, ResolveTemplateOutput};
use propsub_domain::PropertySource;
use propsub_infrastructure::{FilePropertyRepository, environment_source};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

/// Name of the property source built from `--define` arguments.
pub const COMMAND_LINE_SOURCE_NAME: &str = "command-line";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "propsub",
    version,
    about = "Substitute ${...} placeholders with property values.",
    long_about = "Replaces ${key} and ${key:default} placeholders in a template with values \
                  from property files, command-line definitions and, optionally, the process \
                  environment.\n\nDefault values are enabled by setting \
                  propsub.parser.enable-default-value=true in any source; the separator is \
                  set with propsub.parser.default-value-separator (default ':'). Prefix a \
                  placeholder with a backslash to keep it literally."
)]
pub struct Cli {
    /// Template file to resolve. Reads standard input when omitted.
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Property file (.properties, .yml or .yaml). Repeatable; earlier files
    /// take precedence over later ones.
    #[arg(short = 'p', long = "properties", value_name = "FILE")]
    pub properties: Vec<PathBuf>,

    /// Define a property that takes precedence over every file. Repeatable.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,

    /// Fall back to environment variables for keys missing from every other
    /// source.
    #[arg(long, default_value_t = false)]
    pub env: bool,

    /// Write the result to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Builds the use case input for `template` from these arguments.
    #[must_use]
    pub fn input(&self, template: String) -> ResolveTemplateInput {
        ResolveTemplateInput {
            template,
            property_files: self.properties.clone(),
            overrides: PropertySource::new(
                COMMAND_LINE_SOURCE_NAME,
                self.defines.iter().cloned().collect(),
            ),
            fallback: self.env.then(environment_source),
        }
    }
}

fn parse_define(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, val)| (key.to_string(), val.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{value}`"))
}

/// Resolves `template` against the sources named by `cli`.
///
/// # Errors
/// Returns an error if a property file cannot be loaded.
pub async fn resolve(cli: &Cli, template: String) -> anyhow::Result<ResolveTemplateOutput> {
    let use_case = ResolveTemplate::new(FilePropertyRepository::new());
    let output = use_case.execute(cli.input(template)).await?;
    info!(sources = ?output.sources, "template resolved");
    Ok(output)
}

/// Reads the template, resolves it and writes the result.
///
/// # Errors
/// Returns an error if the template cannot be read, a property file cannot
/// be loaded, or the result cannot be written.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let template = match &cli.template {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read template {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("failed to read template from standard input")?;
            buffer
        }
    };

    let output = resolve(&cli, template).await?;

    match &cli.output {
        Some(path) => tokio::fs::write(path, output.resolved)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(output.resolved.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_define() {
        assert_eq!(
            parse_define("env=prod"),
            Ok(("env".to_string(), "prod".to_string()))
        );
        assert_eq!(
            parse_define("url=http://x?a=b"),
            Ok(("url".to_string(), "http://x?a=b".to_string()))
        );
        assert_eq!(parse_define("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_define("novalue").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
